//! SeaORM Entity for the multi-number submission history (append-only)

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "number_set_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Ten two-digit strings as a JSON array
    #[sea_orm(column_type = "JsonBinary")]
    pub numbers: Json,
    pub submitted_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
