//! Application builder.
//!
//! Assembles routes, middleware, and state into an Axum router.

use crate::{
    config::ApiConfig,
    middleware::{logging_middleware, request_id_middleware},
    routes,
    state::AppState,
};
use axum::{middleware::from_fn, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create the application router with the default in-memory wiring.
pub fn create_app(config: ApiConfig) -> Router {
    create_app_with_state(AppState::new(config))
}

/// Create the application router around pre-wired state.
pub fn create_app_with_state(state: AppState) -> Router {
    let config = Arc::clone(&state.config);

    let mut app = Router::new()
        .merge(routes::health::routes())
        .nest("/api", routes::participantes::routes())
        .with_state(state);

    if config.enable_swagger {
        app = app.merge(swagger_ui());
    }

    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CompressionLayer::new())
            .layer(build_cors_layer(&config))
            .layer(TimeoutLayer::new(config.request_timeout()))
            .layer(from_fn(request_id_middleware))
            .layer(from_fn(logging_middleware)),
    )
}

/// Build CORS layer from configuration
fn build_cors_layer(config: &ApiConfig) -> CorsLayer {
    let cors = CorsLayer::new();

    if config.cors_allowed_origins.contains(&"*".to_string()) {
        cors.allow_origin(Any).allow_methods(Any).allow_headers(Any)
    } else {
        // In production, parse and validate allowed origins
        cors.allow_origin(Any).allow_methods(Any).allow_headers(Any)
    }
}

/// Swagger UI routes
fn swagger_ui() -> SwaggerUi {
    #[derive(OpenApi)]
    #[openapi(
        info(
            title = "Participant Registry API",
            version = "0.1.0",
            description = "REST API for managing participants",
            license(name = "MIT"),
        ),
        servers(
            (url = "/api", description = "API root")
        ),
        tags(
            (name = "health", description = "Health check endpoints"),
            (name = "participantes", description = "Participant management"),
        )
    )]
    struct ApiDoc;

    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
