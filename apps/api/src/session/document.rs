//! Document Session: the markdown text and settings of one editing tab.
//!
//! Fields are private; the named operations below are the only way to change
//! them, and each one replaces its field wholesale.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::session::defaults::DEFAULT_MARKDOWN;
use crate::settings::{SettingUpdate, Settings};

/// File name offered for markdown downloads.
pub const EXPORT_FILE_NAME: &str = "resume.md";
/// MIME type of the exported file.
pub const EXPORT_MIME_TYPE: &str = "text/markdown";

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Failed to read import stream: {0}")]
    Read(#[from] std::io::Error),

    #[error("Imported content is not valid UTF-8 text (first invalid byte at offset {offset})")]
    Decode { offset: usize },
}

/// Reads a stream to the end and decodes it as UTF-8, bytes kept verbatim.
pub async fn decode_import<R>(mut reader: R) -> Result<String, ImportError>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).await?;
    String::from_utf8(buf).map_err(|e| ImportError::Decode {
        offset: e.utf8_error().valid_up_to(),
    })
}

#[derive(Debug, Clone)]
pub struct DocumentSession {
    markdown_text: String,
    settings: Settings,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Default for DocumentSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentSession {
    /// Starts a session with the sample resume and default settings.
    pub fn new() -> Self {
        Self::with_content(DEFAULT_MARKDOWN.to_string(), Settings::default())
    }

    pub fn with_content(markdown_text: String, settings: Settings) -> Self {
        let now = Utc::now();
        DocumentSession {
            markdown_text,
            settings,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn markdown_text(&self) -> &str {
        &self.markdown_text
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the markdown text. Any length, including empty.
    pub fn set_markdown(&mut self, text: String) {
        self.markdown_text = text;
        self.updated_at = Utc::now();
    }

    pub fn update_setting(&mut self, update: SettingUpdate) {
        self.settings = self.settings.update(update);
        self.updated_at = Utc::now();
    }

    /// Reads the whole stream, decodes it as UTF-8 and replaces the markdown text.
    ///
    /// On any failure the session is left exactly as it was.
    pub async fn import_from<R>(&mut self, reader: R) -> Result<(), ImportError>
    where
        R: AsyncRead + Unpin,
    {
        let text = decode_import(reader).await?;
        self.set_markdown(text);
        Ok(())
    }

    /// The current markdown as UTF-8 bytes, verbatim.
    pub fn export_to(&self) -> Bytes {
        Bytes::from(self.markdown_text.clone().into_bytes())
    }
}
