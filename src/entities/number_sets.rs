//! SeaORM Entity for the current multi-number record
//!
//! Holds at most one row (CURRENT_SET_ID); every submission replaces it
//! wholesale via upsert.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Fixed primary key of the single current record
pub const CURRENT_SET_ID: i16 = 1;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "number_sets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i16,
    /// Ten two-digit strings as a JSON array
    #[sea_orm(column_type = "JsonBinary")]
    pub numbers: Json,
    pub submitted_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
