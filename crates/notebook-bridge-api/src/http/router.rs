//! Axum router configuration with middleware.
//!
//! Public routes: `/api/health`, `/api/config`. Privileged routes live under
//! `/api/admin/` and are gated per handler by the `AdminAccess` extractor.
//! Middleware: CORS (any origin, credentials allowed), tracing.
//!
//! When `web_dir` is configured and exists, the built web frontend is served
//! from it; API routes take priority and unknown paths fall through to
//! `index.html` for client-side routing. Unknown paths under `/api` never
//! reach the web app; they get a 404 in the API error format.

use axum::Router;
use axum::extract::OriginalUri;
use axum::routing::{get, post};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::http::error::AppError;
use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    // A wildcard origin is invalid alongside credentials, so mirror the
    // request's origin, method and headers instead.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    let admin_routes = Router::new()
        .route("/stats", get(handlers::admin::get_stats))
        .route("/users", get(handlers::admin::list_users))
        .route("/notes", get(handlers::admin::list_notes))
        .route("/growth", get(handlers::admin::get_growth))
        .route(
            "/notes/{note_id}/archive",
            post(handlers::admin::archive_note),
        )
        .route(
            "/notes/{note_id}/restore",
            post(handlers::admin::restore_note),
        );

    let api_routes = Router::new()
        .route("/health", get(handlers::public::health))
        .route("/config", get(handlers::public::config))
        .nest("/admin", admin_routes)
        .fallback(api_not_found);

    let web_dir = state.config.web_dir.clone();

    let mut router = Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if let Some(web_dir) = web_dir {
        if web_dir.is_dir() {
            let serve_dir =
                ServeDir::new(&web_dir).fallback(ServeFile::new(web_dir.join("index.html")));
            router = router.fallback_service(serve_dir);
            tracing::info!(path = %web_dir.display(), "Static web app serving enabled");
        } else {
            tracing::warn!(path = %web_dir.display(), "Configured web_dir does not exist; serving API only");
        }
    }

    router
}

async fn api_not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NotFound(format!("no API route for {}", uri.path()))
}
