//! Axum route handlers for the preview and print surfaces.

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::layout::{estimate_fit, FitEstimate};
use crate::preview::{compose, ComposedPreview};
use crate::session::handlers::load_session;
use crate::state::AppState;
use crate::style::map;

/// Title of the printable document; browsers use it as the default PDF name.
const PRINT_TITLE: &str = "Resume";

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub preview: ComposedPreview,
    pub fit: FitEstimate,
}

/// GET /api/v1/sessions/:id/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PreviewResponse>, AppError> {
    let session = load_session(&state, id).await?;
    let descriptor = map(session.settings());
    let document = state.renderer.render(session.markdown_text());

    Ok(Json(PreviewResponse {
        fit: estimate_fit(&document, &descriptor),
        preview: compose(&descriptor, &document),
    }))
}

/// GET /api/v1/sessions/:id/print
///
/// Standalone HTML sized to the paper, handed to the browser's print pipeline.
pub async fn handle_print(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let session = load_session(&state, id).await?;
    let descriptor = map(session.settings());
    let document = state.renderer.render(session.markdown_text());
    Ok(Html(compose(&descriptor, &document).to_html(PRINT_TITLE)))
}
