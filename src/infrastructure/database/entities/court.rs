//! Court (cancha) entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "canchas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub nombre: String,

    pub tipo_id: i32,
    pub sucursal_id: i32,
    pub capacidad: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::court_type::Entity",
        from = "Column::TipoId",
        to = "super::court_type::Column::Id"
    )]
    CourtType,

    #[sea_orm(
        belongs_to = "super::venue::Entity",
        from = "Column::SucursalId",
        to = "super::venue::Column::Id"
    )]
    Venue,

    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservations,
}

impl Related<super::court_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourtType.def()
    }
}

impl Related<super::venue::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Venue.def()
    }
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
