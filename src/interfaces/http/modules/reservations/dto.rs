//! Reservation DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::reservation::{
    BookingRequest, ReservationDetails, ReservationFilter, ReservationUpdate,
};

/// Payload for `POST /reservas`: requester identity plus the slot.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReservaRequest {
    #[validate(length(min = 1, message = "nombre no puede estar vacío"))]
    pub nombre: String,
    #[validate(email(message = "email inválido"))]
    pub email: String,
    pub cancha_id: i32,
    pub fecha: String,
    pub hora: String,
    pub duracion: i32,
    pub jugadores: i32,
    pub pago_id: i32,
}

impl From<CreateReservaRequest> for BookingRequest {
    fn from(req: CreateReservaRequest) -> Self {
        Self {
            requester_name: req.nombre,
            requester_email: req.email,
            court_id: req.cancha_id,
            date: req.fecha,
            start_time: req.hora,
            duration_min: req.duracion,
            players: req.jugadores,
            payment_method_id: req.pago_id,
        }
    }
}

/// Payload for `PUT /reservas/{id}`. Absent fields keep their stored value.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateReservaRequest {
    pub fecha: Option<String>,
    pub hora: Option<String>,
    pub duracion: Option<i32>,
    pub jugadores: Option<i32>,
    pub pago_id: Option<i32>,
}

impl From<UpdateReservaRequest> for ReservationUpdate {
    fn from(req: UpdateReservaRequest) -> Self {
        Self {
            date: req.fecha,
            start_time: req.hora,
            duration_min: req.duracion,
            players: req.jugadores,
            payment_method_id: req.pago_id,
        }
    }
}

/// Query string filters for `GET /reservas`; all optional, ANDed together.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ReservaQuery {
    pub fecha: Option<String>,
    pub cancha_id: Option<i32>,
    pub pago_id: Option<i32>,
}

impl From<ReservaQuery> for ReservationFilter {
    fn from(q: ReservaQuery) -> Self {
        Self {
            date: q.fecha,
            court_id: q.cancha_id,
            payment_method_id: q.pago_id,
        }
    }
}

/// A reservation joined with requester, court and payment display fields.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReservaDto {
    pub id: i32,
    pub usuario_id: i32,
    pub cancha_id: i32,
    pub fecha: String,
    pub hora: String,
    pub duracion: i32,
    pub jugadores: i32,
    pub pago_id: i32,
    pub fecha_creacion: String,
    pub usuario_nombre: String,
    pub usuario_email: String,
    pub cancha_nombre: String,
    pub metodo_pago: String,
}

impl From<ReservationDetails> for ReservaDto {
    fn from(d: ReservationDetails) -> Self {
        let r = d.reservation;
        Self {
            id: r.id,
            usuario_id: r.user_id,
            cancha_id: r.court_id,
            fecha: r.date,
            hora: r.start_time,
            duracion: r.duration_min,
            jugadores: r.players,
            pago_id: r.payment_method_id,
            fecha_creacion: r.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            usuario_nombre: d.user_name,
            usuario_email: d.user_email,
            cancha_nombre: d.court_name,
            metodo_pago: d.payment_method,
        }
    }
}
