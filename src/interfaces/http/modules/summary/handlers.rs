//! Summary endpoint

use axum::extract::State;
use axum::Json;

use super::dto::ResumenDto;
use crate::interfaces::http::common::ApiError;
use crate::interfaces::http::router::AppState;

/// Totals plus the busiest court.
#[utoipa::path(
    get,
    path = "/resumen",
    tag = "resumen",
    responses(
        (status = 200, description = "Resumen general", body = ResumenDto)
    )
)]
pub async fn get_summary(State(state): State<AppState>) -> Result<Json<ResumenDto>, ApiError> {
    let stats = state.booking.summary().await?;
    Ok(Json(stats.into()))
}
