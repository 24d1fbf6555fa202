pub use super::draw_entries::Entity as DrawEntries;
pub use super::number_set_history::Entity as NumberSetHistory;
pub use super::number_sets::Entity as NumberSets;
pub use super::users::Entity as Users;
