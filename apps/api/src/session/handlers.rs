//! Axum route handlers for the Document Session API.

use axum::{
    extract::{
        rejection::{BytesRejection, JsonRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::session::document::{EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
use crate::session::DocumentSession;
use crate::session::store::ImportOutcome;
use crate::settings::{SettingUpdate, Settings};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SetMarkdownRequest {
    pub markdown: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub markdown: String,
    pub settings: Settings,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SessionResponse {
    fn from_session(session_id: Uuid, session: &DocumentSession) -> Self {
        SessionResponse {
            session_id,
            markdown: session.markdown_text().to_string(),
            settings: session.settings().clone(),
            created_at: session.created_at(),
            updated_at: session.updated_at(),
        }
    }
}

pub(crate) fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

/// Fetches a session snapshot or a 404.
pub(crate) async fn load_session(state: &AppState, id: Uuid) -> Result<DocumentSession, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| session_not_found(id))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionResponse>) {
    let (id, session) = state.sessions.create().await;
    (
        StatusCode::CREATED,
        Json(SessionResponse::from_session(id, &session)),
    )
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = load_session(&state, id).await?;
    Ok(Json(SessionResponse::from_session(id, &session)))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(session_not_found(id))
    }
}

/// PUT /api/v1/sessions/:id/markdown
///
/// Replaces the markdown text wholesale. Empty text is valid.
pub async fn handle_set_markdown(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<SetMarkdownRequest>, JsonRejection>,
) -> Result<Json<SessionResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let response = state
        .sessions
        .update(id, |session| {
            session.set_markdown(request.markdown);
            SessionResponse::from_session(id, session)
        })
        .await
        .ok_or_else(|| session_not_found(id))?;

    Ok(Json(response))
}

/// PATCH /api/v1/sessions/:id/settings
///
/// Body: `{"field": "<settingName>", "value": <typed value>}`.
pub async fn handle_update_setting(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<SettingUpdate>, JsonRejection>,
) -> Result<Json<Settings>, AppError> {
    let Json(update) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let field = update.field_name();

    let settings = state
        .sessions
        .update(id, |session| {
            session.update_setting(update);
            session.settings().clone()
        })
        .await
        .ok_or_else(|| session_not_found(id))?;

    info!("Session {id}: updated setting {field}");
    Ok(Json(settings))
}

/// POST /api/v1/sessions/:id/import
///
/// The raw request body is the file content. Extension and content type are not
/// checked; anything that decodes as UTF-8 is accepted as markdown.
pub async fn handle_import(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SessionResponse>, AppError> {
    let body = body.map_err(|e| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(e.body_text())
        } else {
            AppError::Validation(e.body_text())
        }
    })?;

    match state.sessions.import(id, &body[..]).await? {
        ImportOutcome::NoSuchSession => Err(session_not_found(id)),
        ImportOutcome::Imported(session) => Ok(Json(SessionResponse::from_session(id, &session))),
    }
}

/// GET /api/v1/sessions/:id/export
///
/// Downloads the markdown verbatim as `resume.md`.
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let session = load_session(&state, id).await?;
    Ok((
        [
            (header::CONTENT_TYPE, EXPORT_MIME_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
            ),
        ],
        session.export_to(),
    ))
}
