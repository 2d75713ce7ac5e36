//! Court endpoints

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::dto::{CanchaDto, CreateCanchaRequest, UpdateCanchaRequest};
use crate::interfaces::http::common::{
    ApiError, CreatedResponse, ErrorBody, MessageResponse, ValidatedJson,
};
use crate::interfaces::http::router::AppState;

/// Create a court.
#[utoipa::path(
    post,
    path = "/canchas",
    tag = "canchas",
    request_body = CreateCanchaRequest,
    responses(
        (status = 201, description = "Cancha creada", body = CreatedResponse),
        (status = 409, description = "Nombre duplicado o referencia inválida", body = ErrorBody),
        (status = 422, description = "Datos inválidos", body = ErrorBody)
    )
)]
pub async fn create_court(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateCanchaRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let id = state.repos.courts().insert(request.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            mensaje: "Cancha creada correctamente".to_string(),
        }),
    ))
}

/// List every court with its type and venue names.
#[utoipa::path(
    get,
    path = "/canchas",
    tag = "canchas",
    responses(
        (status = 200, description = "Canchas", body = Vec<CanchaDto>)
    )
)]
pub async fn list_courts(
    State(state): State<AppState>,
) -> Result<Json<Vec<CanchaDto>>, ApiError> {
    let courts = state.repos.courts().find_all_details().await?;
    Ok(Json(courts.into_iter().map(CanchaDto::from).collect()))
}

/// Partially update a court. Absent fields are left untouched.
#[utoipa::path(
    put,
    path = "/canchas/{id}",
    tag = "canchas",
    params(("id" = i32, Path, description = "Id de la cancha")),
    request_body = UpdateCanchaRequest,
    responses(
        (status = 200, description = "Cancha actualizada", body = MessageResponse),
        (status = 404, description = "Cancha inexistente", body = ErrorBody)
    )
)]
pub async fn update_court(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateCanchaRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.repos.courts().update(id, request.into()).await?;
    Ok(Json(MessageResponse {
        mensaje: "Cancha actualizada correctamente".to_string(),
    }))
}
