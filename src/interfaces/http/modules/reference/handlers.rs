//! Read-only endpoints for the seeded reference tables.

use axum::extract::State;
use axum::Json;

use super::dto::{PagoDto, SucursalDto, TipoDto};
use crate::interfaces::http::common::ApiError;
use crate::interfaces::http::router::AppState;

/// List the available court types.
#[utoipa::path(
    get,
    path = "/tipos",
    tag = "referencia",
    responses(
        (status = 200, description = "Tipos de cancha", body = Vec<TipoDto>)
    )
)]
pub async fn list_court_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<TipoDto>>, ApiError> {
    let types = state.repos.reference().court_types().await?;
    Ok(Json(types.into_iter().map(TipoDto::from).collect()))
}

/// List the venues where courts are located.
#[utoipa::path(
    get,
    path = "/sucursales",
    tag = "referencia",
    responses(
        (status = 200, description = "Sucursales", body = Vec<SucursalDto>)
    )
)]
pub async fn list_venues(
    State(state): State<AppState>,
) -> Result<Json<Vec<SucursalDto>>, ApiError> {
    let venues = state.repos.reference().venues().await?;
    Ok(Json(venues.into_iter().map(SucursalDto::from).collect()))
}

/// List the accepted payment methods.
#[utoipa::path(
    get,
    path = "/pagos",
    tag = "referencia",
    responses(
        (status = 200, description = "Métodos de pago", body = Vec<PagoDto>)
    )
)]
pub async fn list_payment_methods(
    State(state): State<AppState>,
) -> Result<Json<Vec<PagoDto>>, ApiError> {
    let methods = state.repos.reference().payment_methods().await?;
    Ok(Json(methods.into_iter().map(PagoDto::from).collect()))
}
