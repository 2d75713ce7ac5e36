//! Reservation (reserva) entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reservas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub usuario_id: i32,
    pub cancha_id: i32,

    /// "YYYY-MM-DD"
    pub fecha: String,
    /// "HH:MM"
    pub hora: String,

    pub duracion: i32,
    pub jugadores: i32,
    pub pago_id: i32,

    pub fecha_creacion: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UsuarioId",
        to = "super::user::Column::Id"
    )]
    User,

    #[sea_orm(
        belongs_to = "super::court::Entity",
        from = "Column::CanchaId",
        to = "super::court::Column::Id"
    )]
    Court,

    #[sea_orm(
        belongs_to = "super::payment_method::Entity",
        from = "Column::PagoId",
        to = "super::payment_method::Column::Id"
    )]
    PaymentMethod,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::court::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Court.def()
    }
}

impl Related<super::payment_method::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PaymentMethod.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
