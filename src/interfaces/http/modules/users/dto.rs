//! User DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::user::{NewUser, User};

/// Payload for `POST /usuarios`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUsuarioRequest {
    #[validate(length(min = 1, message = "nombre no puede estar vacío"))]
    pub nombre: String,
    #[validate(email(message = "email inválido"))]
    pub email: String,
    pub telefono: Option<String>,
}

impl From<CreateUsuarioRequest> for NewUser {
    fn from(req: CreateUsuarioRequest) -> Self {
        Self {
            name: req.nombre,
            email: req.email,
            phone: req.telefono,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UsuarioDto {
    pub id: i32,
    pub nombre: String,
    pub email: String,
    pub telefono: Option<String>,
}

impl From<User> for UsuarioDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            nombre: u.name,
            email: u.email,
            telefono: u.phone,
        }
    }
}
