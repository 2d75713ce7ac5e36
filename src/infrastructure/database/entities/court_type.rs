//! Court type (tipo de cancha) entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tipos_cancha")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub nombre: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::court::Entity")]
    Courts,
}

impl Related<super::court::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
