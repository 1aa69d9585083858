pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post, put},
    Router,
};

use crate::preview::handlers as preview;
use crate::session::handlers as session;
use crate::settings::handlers as settings;
use crate::state::AppState;
use crate::style::handlers as style;

pub fn build_router(state: AppState) -> Router {
    let import_limit = DefaultBodyLimit::max(state.config.max_import_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/controls", get(settings::handle_get_controls))
        // Document sessions
        .route("/api/v1/sessions", post(session::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(session::handle_get_session).delete(session::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/markdown",
            put(session::handle_set_markdown),
        )
        .route(
            "/api/v1/sessions/:id/settings",
            patch(session::handle_update_setting),
        )
        .route(
            "/api/v1/sessions/:id/import",
            post(session::handle_import).layer(import_limit),
        )
        .route("/api/v1/sessions/:id/export", get(session::handle_export))
        // Style and preview
        .route("/api/v1/sessions/:id/style", get(style::handle_get_style))
        .route("/api/v1/sessions/:id/preview", get(preview::handle_preview))
        .route("/api/v1/sessions/:id/print", get(preview::handle_print))
        .with_state(state)
}
