//! Reference data DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::reference::{CourtType, PaymentMethod, Venue};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TipoDto {
    pub id: i32,
    pub nombre: String,
}

impl From<CourtType> for TipoDto {
    fn from(t: CourtType) -> Self {
        Self {
            id: t.id,
            nombre: t.name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SucursalDto {
    pub id: i32,
    pub nombre: String,
    pub direccion: Option<String>,
}

impl From<Venue> for SucursalDto {
    fn from(v: Venue) -> Self {
        Self {
            id: v.id,
            nombre: v.name,
            direccion: v.address,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PagoDto {
    pub id: i32,
    pub metodo: String,
}

impl From<PaymentMethod> for PagoDto {
    fn from(p: PaymentMethod) -> Self {
        Self {
            id: p.id,
            metodo: p.method,
        }
    }
}
