//! Page fit estimate: how much of the printed page the rendered resume fills.
//!
//! The content box is the paper size minus the four margins, at 96 CSS px per
//! inch. Each rendered block is word-wrapped against the content width using the
//! static glyph tables, then converted into body-line units so headings,
//! paragraph spacing, and section gaps all count against the same budget.
//!
//! The result is a UI hint. The print pipeline decides real page breaks.

use serde::Serialize;

use crate::layout::font_metrics::get_metrics;
use crate::render::{BlockKind, RenderedDocument};
use crate::style::StyleDescriptor;

/// CSS pixels per millimeter (96 px per 25.4 mm).
pub const PX_PER_MM: f32 = 96.0 / 25.4;

/// Relative heading sizes for h2..h6. h1 uses the preset's title scale.
const HEADING_SCALES: [f32; 5] = [1.25, 1.125, 1.0, 1.0, 1.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FitVerdict {
    /// Everything fits on the first page.
    OnePage,
    /// Content spills past the first page.
    MultiPage,
    /// Margins leave no usable area on the page.
    NoContentArea,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitEstimate {
    pub content_width_mm: f32,
    pub content_height_mm: f32,
    /// Body lines that fit in one content box.
    pub lines_per_page: u32,
    /// Body-line units the document needs.
    pub lines_used: f32,
    pub pages: u32,
    /// Fill fraction of the first page. Values above 1.0 mean overflow.
    pub first_page_fill: f32,
    pub verdict: FitVerdict,
}

fn heading_scale(level: u8, descriptor: &StyleDescriptor) -> f32 {
    match level {
        0 | 1 => descriptor.preset.title_scale,
        n => HEADING_SCALES[usize::from(n.min(6)) - 2],
    }
}

/// Estimates how the document fills pages of the descriptor's paper size.
pub fn estimate_fit(document: &RenderedDocument, descriptor: &StyleDescriptor) -> FitEstimate {
    let sizing = &descriptor.sizing;
    let margins = &sizing.margins;

    let content_width_mm =
        descriptor.paper.width_mm - (margins.left_px + margins.right_px) / PX_PER_MM;
    let content_height_mm =
        descriptor.paper.height_mm - (margins.top_px + margins.bottom_px) / PX_PER_MM;

    if content_width_mm <= 0.0 || content_height_mm <= 0.0 {
        return FitEstimate {
            content_width_mm: content_width_mm.max(0.0),
            content_height_mm: content_height_mm.max(0.0),
            lines_per_page: 0,
            lines_used: 0.0,
            pages: 0,
            first_page_fill: 0.0,
            verdict: FitVerdict::NoContentArea,
        };
    }

    let font_px = sizing.base_font_size_px.max(1.0);
    let line_px = font_px * sizing.line_height.max(0.1);
    let width_em = content_width_mm * PX_PER_MM / font_px;
    let lines_per_page = ((content_height_mm * PX_PER_MM) / line_px).floor().max(1.0) as u32;

    let metrics = get_metrics(descriptor.font_family);
    let paragraph_gap = sizing.paragraph_spacing_px.max(0.0) / line_px;
    let section_gap = descriptor.preset.section_gap_px / line_px;

    let mut lines_used = 0.0_f32;
    for block in &document.blocks {
        let (scale, gap_before, gap_after) = match block.kind {
            BlockKind::Heading { level } => {
                let gap = if level == 2 { section_gap } else { 0.0 };
                (heading_scale(level, descriptor), gap, 0.0)
            }
            BlockKind::Rule => {
                lines_used += 1.0;
                continue;
            }
            _ => (1.0, 0.0, paragraph_gap),
        };

        let wrapped: u32 = block
            .text_runs
            .iter()
            .map(|run| metrics.estimated_lines(run, width_em / scale))
            .sum();
        lines_used += gap_before + wrapped as f32 * scale + gap_after;
    }

    let first_page_fill = lines_used / lines_per_page as f32;
    let pages = if lines_used <= 0.0 {
        1
    } else {
        (lines_used / lines_per_page as f32).ceil() as u32
    };
    let verdict = if pages <= 1 {
        FitVerdict::OnePage
    } else {
        FitVerdict::MultiPage
    };

    FitEstimate {
        content_width_mm,
        content_height_mm,
        lines_per_page,
        lines_used,
        pages,
        first_page_fill,
        verdict,
    }
}
