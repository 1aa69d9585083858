use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::session::handlers::load_session;
use crate::state::AppState;
use crate::style::{map, StyleDescriptor};

/// GET /api/v1/sessions/:id/style
pub async fn handle_get_style(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StyleDescriptor>, AppError> {
    let session = load_session(&state, id).await?;
    Ok(Json(map(session.settings())))
}
