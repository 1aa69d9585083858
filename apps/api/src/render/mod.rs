// Markdown rendering seam. The core never parses markdown itself; it hands the
// raw text to a `MarkdownRenderer` and works with the block list it returns.

pub mod cmark;

use serde::Serialize;

pub use cmark::CmarkRenderer;

/// Kind of a top-level rendered block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockKind {
    Heading { level: u8 },
    Paragraph,
    List { ordered: bool },
    Quote,
    Code,
    Rule,
    Table,
    Html,
    Other,
}

/// One top-level block of the rendered document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedBlock {
    pub kind: BlockKind,
    /// HTML fragment for this block, as produced by the renderer.
    pub html: String,
    /// Plain-text runs: one per paragraph line or list item. Used for fit estimates.
    pub text_runs: Vec<String>,
}

/// The renderer's output: top-level blocks in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderedDocument {
    pub blocks: Vec<RenderedBlock>,
}

/// Converts markdown text into a rendered document.
///
/// Implementations receive the markdown exactly as the session holds it.
pub trait MarkdownRenderer: Send + Sync {
    fn render(&self, markdown: &str) -> RenderedDocument;
}
