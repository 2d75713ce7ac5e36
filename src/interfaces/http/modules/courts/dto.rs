//! Court DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::court::{CourtDetails, CourtUpdate, NewCourt};

/// Payload for `POST /canchas`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCanchaRequest {
    #[validate(length(min = 1, message = "nombre no puede estar vacío"))]
    pub nombre: String,
    pub tipo_id: i32,
    pub sucursal_id: i32,
    #[validate(range(min = 1, message = "capacidad debe ser positiva"))]
    pub capacidad: i32,
}

impl From<CreateCanchaRequest> for NewCourt {
    fn from(req: CreateCanchaRequest) -> Self {
        Self {
            name: req.nombre,
            court_type_id: req.tipo_id,
            venue_id: req.sucursal_id,
            capacity: req.capacidad,
        }
    }
}

/// Payload for `PUT /canchas/{id}`. Absent fields keep their stored value.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCanchaRequest {
    pub nombre: Option<String>,
    pub tipo_id: Option<i32>,
    pub sucursal_id: Option<i32>,
    pub capacidad: Option<i32>,
}

impl From<UpdateCanchaRequest> for CourtUpdate {
    fn from(req: UpdateCanchaRequest) -> Self {
        Self {
            name: req.nombre,
            court_type_id: req.tipo_id,
            venue_id: req.sucursal_id,
            capacity: req.capacidad,
        }
    }
}

/// A court joined with its type and venue names.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CanchaDto {
    pub id: i32,
    pub nombre: String,
    pub capacidad: i32,
    pub tipo_id: i32,
    pub tipo_nombre: Option<String>,
    pub sucursal_id: i32,
    pub sucursal_nombre: Option<String>,
}

impl From<CourtDetails> for CanchaDto {
    fn from(d: CourtDetails) -> Self {
        Self {
            id: d.court.id,
            nombre: d.court.name,
            capacidad: d.court.capacity,
            tipo_id: d.court.court_type_id,
            tipo_nombre: d.court_type_name,
            sucursal_id: d.court.venue_id,
            sucursal_nombre: d.venue_name,
        }
    }
}
