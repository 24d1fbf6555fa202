pub use sea_orm_migration::prelude::*;

mod m20260805_000001_create_draw_entries;
mod m20260805_000002_create_number_sets;
mod m20260805_000003_create_users;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260805_000001_create_draw_entries::Migration),
            Box::new(m20260805_000002_create_number_sets::Migration),
            Box::new(m20260805_000003_create_users::Migration),
        ]
    }
}
