//! SeaORM Entity for draw entries
//!
//! One row per filled (day, slot) pair. The unique index on
//! (draw_date, slot) is what makes a slot fill happen at most once.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "draw_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Calendar date of the draw day, used for all chronological ordering
    pub draw_date: Date,
    /// Display form of the day (DD-MM-YYYY)
    pub date_label: String,
    /// Slot label (e.g. "10:30 AM")
    pub slot: String,
    /// Two-digit draw value (e.g. "07")
    pub value: String,
    pub created_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
