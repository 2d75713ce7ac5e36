//! API Router with Swagger UI

use std::sync::Arc;

use axum::response::Redirect;
use axum::routing::{get, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::BookingService;
use crate::config::SecurityConfig;
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::{CreatedResponse, ErrorBody, MessageResponse};
use crate::interfaces::http::modules::{courts, reference, reservations, summary, users};

/// Shared state for every route.
#[derive(Clone)]
pub struct AppState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub booking: Arc<BookingService>,
    pub security: SecurityConfig,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Referencia
        reference::handlers::list_court_types,
        reference::handlers::list_venues,
        reference::handlers::list_payment_methods,
        // Canchas
        courts::handlers::create_court,
        courts::handlers::list_courts,
        courts::handlers::update_court,
        // Usuarios
        users::handlers::create_user,
        users::handlers::list_users,
        users::handlers::get_user,
        // Reservas
        reservations::handlers::list_reservations,
        reservations::handlers::create_reservation,
        reservations::handlers::update_reservation,
        reservations::handlers::delete_reservation,
        // Resumen
        summary::handlers::get_summary,
    ),
    components(
        schemas(
            // Common
            ErrorBody,
            CreatedResponse,
            MessageResponse,
            // Referencia
            reference::dto::TipoDto,
            reference::dto::SucursalDto,
            reference::dto::PagoDto,
            // Canchas
            courts::dto::CreateCanchaRequest,
            courts::dto::UpdateCanchaRequest,
            courts::dto::CanchaDto,
            // Usuarios
            users::dto::CreateUsuarioRequest,
            users::dto::UsuarioDto,
            // Reservas
            reservations::dto::CreateReservaRequest,
            reservations::dto::UpdateReservaRequest,
            reservations::dto::ReservaDto,
            // Resumen
            summary::dto::ResumenDto,
            summary::dto::CanchaMasReservadaDto,
        )
    ),
    tags(
        (name = "referencia", description = "Tipos de cancha, sucursales y métodos de pago"),
        (name = "canchas", description = "Alta, listado y actualización de canchas"),
        (name = "usuarios", description = "Registro y consulta de usuarios"),
        (name = "reservas", description = "Reservas de turnos: crear, listar, actualizar y eliminar"),
        (name = "resumen", description = "Estadísticas generales"),
    ),
    info(
        title = "API de Reservas Deportivas",
        version = "1.0.0",
        description = "Gestión de canchas, usuarios y reservas de turnos deportivos",
    )
)]
pub struct ApiDoc;

async fn redirect_to_docs() -> Redirect {
    Redirect::temporary("/docs")
}

/// Create the API router with all routes
pub fn create_router(
    repos: Arc<dyn RepositoryProvider>,
    booking: Arc<BookingService>,
    security: SecurityConfig,
) -> Router {
    let state = AppState {
        repos,
        booking,
        security,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .route("/", get(redirect_to_docs))
        .route("/tipos", get(reference::handlers::list_court_types))
        .route("/sucursales", get(reference::handlers::list_venues))
        .route("/pagos", get(reference::handlers::list_payment_methods))
        .route(
            "/canchas",
            get(courts::handlers::list_courts).post(courts::handlers::create_court),
        )
        .route("/canchas/{id}", put(courts::handlers::update_court))
        .route(
            "/usuarios",
            get(users::handlers::list_users).post(users::handlers::create_user),
        )
        .route("/usuarios/{id}", get(users::handlers::get_user))
        .route(
            "/reservas",
            get(reservations::handlers::list_reservations)
                .post(reservations::handlers::create_reservation),
        )
        .route(
            "/reservas/{id}",
            put(reservations::handlers::update_reservation)
                .delete(reservations::handlers::delete_reservation),
        )
        .route("/resumen", get(summary::handlers::get_summary))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

// ── Tests ──────────────────────────────────────────────────────
