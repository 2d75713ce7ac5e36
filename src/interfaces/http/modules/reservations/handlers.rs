//! Reservation endpoints
//!
//! Deletion requires the `X-Admin-Key` header when the admin gate is
//! enabled in the configuration.

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use super::dto::{CreateReservaRequest, ReservaDto, ReservaQuery, UpdateReservaRequest};
use crate::domain::DomainError;
use crate::interfaces::http::common::{ApiError, ErrorBody, MessageResponse, ValidatedJson};
use crate::interfaces::http::router::AppState;

/// List reservations with display fields, optionally filtered.
#[utoipa::path(
    get,
    path = "/reservas",
    tag = "reservas",
    params(ReservaQuery),
    responses(
        (status = 200, description = "Reservas", body = Vec<ReservaDto>)
    )
)]
pub async fn list_reservations(
    State(state): State<AppState>,
    Query(query): Query<ReservaQuery>,
) -> Result<Json<Vec<ReservaDto>>, ApiError> {
    let reservations = state.booking.list(query.into()).await?;
    Ok(Json(
        reservations.into_iter().map(ReservaDto::from).collect(),
    ))
}

/// Book a court slot.
#[utoipa::path(
    post,
    path = "/reservas",
    tag = "reservas",
    request_body = CreateReservaRequest,
    responses(
        (status = 201, description = "Reserva creada", body = ReservaDto),
        (status = 400, description = "Cancha o método de pago inválido", body = ErrorBody),
        (status = 409, description = "Turno ya reservado", body = ErrorBody),
        (status = 422, description = "Datos inválidos", body = ErrorBody)
    )
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateReservaRequest>,
) -> Result<(StatusCode, Json<ReservaDto>), ApiError> {
    let details = state.booking.create(request.into()).await?;
    Ok((StatusCode::CREATED, Json(details.into())))
}

/// Partially update a reservation. Absent fields are left untouched.
#[utoipa::path(
    put,
    path = "/reservas/{id}",
    tag = "reservas",
    params(("id" = i32, Path, description = "Id de la reserva")),
    request_body = UpdateReservaRequest,
    responses(
        (status = 200, description = "Reserva actualizada", body = MessageResponse),
        (status = 400, description = "Método de pago inválido", body = ErrorBody),
        (status = 404, description = "Reserva inexistente", body = ErrorBody),
        (status = 409, description = "Turno ya reservado", body = ErrorBody)
    )
)]
pub async fn update_reservation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateReservaRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.booking.update(id, request.into()).await?;
    Ok(Json(MessageResponse {
        mensaje: "Reserva actualizada correctamente".to_string(),
    }))
}

/// Delete a reservation. Gated behind the admin key header.
#[utoipa::path(
    delete,
    path = "/reservas/{id}",
    tag = "reservas",
    params(("id" = i32, Path, description = "Id de la reserva")),
    responses(
        (status = 200, description = "Reserva eliminada", body = MessageResponse),
        (status = 403, description = "Clave de administrador inválida", body = ErrorBody),
        (status = 404, description = "Reserva inexistente", body = ErrorBody)
    )
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Result<Json<MessageResponse>, ApiError> {
    if state.security.require_admin_key {
        // An empty configured key matches nothing: a missing header must
        // never pass the gate just because no secret was set.
        let supplied = headers.get("x-admin-key").and_then(|v| v.to_str().ok());
        let authorized = !state.security.admin_key.is_empty()
            && supplied == Some(state.security.admin_key.as_str());
        if !authorized {
            return Err(DomainError::Forbidden(
                "Acceso denegado. Clave de administrador inválida.".to_string(),
            )
            .into());
        }
    }

    state.booking.delete(id).await?;
    Ok(Json(MessageResponse {
        mensaje: format!("Reserva {} eliminada correctamente", id),
    }))
}
