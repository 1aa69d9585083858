use axum::Json;

use crate::settings::controls::{control_catalog, ControlSection};

/// GET /api/v1/controls
pub async fn handle_get_controls() -> Json<Vec<ControlSection>> {
    Json(control_catalog())
}
