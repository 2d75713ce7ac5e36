//! User endpoints

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::dto::{CreateUsuarioRequest, UsuarioDto};
use crate::domain::DomainError;
use crate::interfaces::http::common::{ApiError, CreatedResponse, ErrorBody, ValidatedJson};
use crate::interfaces::http::router::AppState;

/// Register a user.
#[utoipa::path(
    post,
    path = "/usuarios",
    tag = "usuarios",
    request_body = CreateUsuarioRequest,
    responses(
        (status = 201, description = "Usuario creado", body = CreatedResponse),
        (status = 409, description = "Email ya registrado", body = ErrorBody),
        (status = 422, description = "Datos inválidos", body = ErrorBody)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUsuarioRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let id = state.repos.users().insert(request.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            mensaje: "Usuario creado".to_string(),
        }),
    ))
}

/// List every registered user.
#[utoipa::path(
    get,
    path = "/usuarios",
    tag = "usuarios",
    responses(
        (status = 200, description = "Usuarios", body = Vec<UsuarioDto>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UsuarioDto>>, ApiError> {
    let users = state.repos.users().find_all().await?;
    Ok(Json(users.into_iter().map(UsuarioDto::from).collect()))
}

/// Fetch a single user by id.
#[utoipa::path(
    get,
    path = "/usuarios/{id}",
    tag = "usuarios",
    params(("id" = i32, Path, description = "Id del usuario")),
    responses(
        (status = 200, description = "Usuario", body = UsuarioDto),
        (status = 404, description = "Usuario inexistente", body = ErrorBody)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<UsuarioDto>, ApiError> {
    let user = state
        .repos
        .users()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::NotFound("Usuario no encontrado".to_string()))?;
    Ok(Json(user.into()))
}
