use std::sync::Arc;

use crate::config::Config;
use crate::render::MarkdownRenderer;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    /// External markdown renderer. Default: CmarkRenderer.
    pub renderer: Arc<dyn MarkdownRenderer>,
    pub config: Config,
}
