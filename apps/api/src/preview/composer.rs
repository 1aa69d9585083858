//! Preview Composer: `StyleDescriptor` + `RenderedDocument` → `ComposedPreview`.
//!
//! The outer page box comes only from the paper dimensions. Margins become
//! padding inside that box, so changing a margin shrinks the content area and
//! never the page. Only heading blocks carry a color; everything else inherits
//! the text scope's body color.

use serde::Serialize;

use crate::render::{BlockKind, RenderedDocument};
use crate::style::mapper::{Margins, StyleDescriptor};

/// Outer page box in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageBox {
    pub width_mm: f32,
    pub min_height_mm: f32,
}

/// Typography applied to the whole text scope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextScope {
    pub font_stack: &'static str,
    pub font_size_px: f32,
    pub line_height: f32,
    pub color: &'static str,
}

/// Presentation rules for one block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockStyle {
    /// Set for headings only.
    pub color: Option<String>,
    /// Font size as a multiple of the base size.
    pub font_scale: f32,
    pub uppercase: bool,
    pub border_bottom: bool,
    pub accent_bar: bool,
    pub margin_top_px: f32,
    pub margin_bottom_px: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledBlock {
    pub kind: BlockKind,
    pub html: String,
    pub style: BlockStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CssVariable {
    pub name: &'static str,
    pub value: String,
}

/// The final presentational structure handed to the display or print surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComposedPreview {
    pub page: PageBox,
    pub padding: Margins,
    pub text: TextScope,
    pub variables: Vec<CssVariable>,
    pub classes: Vec<&'static str>,
    pub blocks: Vec<StyledBlock>,
}

fn block_style(kind: BlockKind, descriptor: &StyleDescriptor) -> BlockStyle {
    let preset = &descriptor.preset;
    let heading = |font_scale: f32, margin_top_px: f32, margin_bottom_px: f32| BlockStyle {
        color: Some(descriptor.heading_color.clone()),
        font_scale,
        uppercase: false,
        border_bottom: false,
        accent_bar: false,
        margin_top_px,
        margin_bottom_px,
    };

    match kind {
        BlockKind::Heading { level: 1 } => BlockStyle {
            border_bottom: preset.heading_rules,
            ..heading(preset.title_scale, 0.0, 24.0)
        },
        BlockKind::Heading { level: 2 } => BlockStyle {
            uppercase: preset.uppercase_section_headers,
            border_bottom: preset.heading_rules,
            accent_bar: preset.accent_bar,
            ..heading(1.25, preset.section_gap_px, 8.0)
        },
        BlockKind::Heading { level: 3 } => heading(1.125, 16.0, 8.0),
        BlockKind::Heading { .. } => heading(1.0, 16.0, 8.0),
        _ => BlockStyle {
            color: None,
            font_scale: 1.0,
            uppercase: false,
            border_bottom: false,
            accent_bar: false,
            margin_top_px: 0.0,
            margin_bottom_px: descriptor.sizing.paragraph_spacing_px,
        },
    }
}

/// Wraps the rendered document in a page sized and styled per the descriptor.
pub fn compose(descriptor: &StyleDescriptor, document: &RenderedDocument) -> ComposedPreview {
    let blocks = document
        .blocks
        .iter()
        .map(|block| StyledBlock {
            kind: block.kind,
            html: block.html.clone(),
            style: block_style(block.kind, descriptor),
        })
        .collect();

    ComposedPreview {
        page: PageBox {
            width_mm: descriptor.paper.width_mm,
            min_height_mm: descriptor.paper.height_mm,
        },
        padding: descriptor.sizing.margins,
        text: TextScope {
            font_stack: descriptor.font_stack,
            font_size_px: descriptor.sizing.base_font_size_px,
            line_height: descriptor.sizing.line_height,
            color: descriptor.body_color,
        },
        variables: descriptor
            .css_variables()
            .into_iter()
            .map(|(name, value)| CssVariable { name, value })
            .collect(),
        classes: descriptor.variant_classes(),
        blocks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{CmarkRenderer, MarkdownRenderer};
    use crate::settings::{SettingUpdate, Settings, Theme};
    use crate::style::map;

    const RESUME: &str = "# Jane Doe\n\n## Experience\n\n### Engineer | Acme\n\n- Shipped things\n\nClosing paragraph.\n";

    fn compose_with(settings: &Settings) -> ComposedPreview {
        compose(&map(settings), &CmarkRenderer.render(RESUME))
    }

    #[test]
    fn test_page_box_ignores_margins() {
        let base = compose_with(&Settings::default());
        let wide = compose_with(
            &Settings::default()
                .update(SettingUpdate::MarginLeft(120.0))
                .update(SettingUpdate::MarginTop(-10.0)),
        );

        assert_eq!(base.page, wide.page, "outer page box must not move");
        assert_ne!(base.padding, wide.padding);
        assert_eq!(wide.padding.left_px, 120.0);
        assert_eq!(wide.padding.top_px, -10.0);
    }

    #[test]
    fn test_accent_color_changes_only_heading_styles() {
        let blue = compose_with(&Settings::default());
        let green =
            compose_with(&Settings::default().update(SettingUpdate::AccentColor("#16a34a".into())));

        assert_eq!(blue.text, green.text, "body text scope must not change");
        for (a, b) in blue.blocks.iter().zip(&green.blocks) {
            if matches!(a.kind, BlockKind::Heading { .. }) {
                assert_eq!(b.style.color.as_deref(), Some("#16a34a"));
            } else {
                assert_eq!(a.style, b.style, "{:?} style changed with accent", a.kind);
                assert!(b.style.color.is_none());
            }
        }
        let body_var = |p: &ComposedPreview| {
            p.variables
                .iter()
                .find(|v| v.name == "--body-color")
                .map(|v| v.value.clone())
        };
        assert_eq!(body_var(&blue), body_var(&green));
    }

    #[test]
    fn test_paragraph_spacing_applies_to_body_blocks() {
        let preview = compose_with(&Settings::default().update(SettingUpdate::ParagraphSpacing(28.0)));
        let paragraph = preview
            .blocks
            .iter()
            .find(|b| b.kind == BlockKind::Paragraph)
            .expect("paragraph block");
        assert_eq!(paragraph.style.margin_bottom_px, 28.0);
    }

    #[test]
    fn test_theme_toggles_reach_section_headers() {
        let minimal = compose_with(&Settings::default().update(SettingUpdate::Theme(Theme::Minimal)));
        let light = compose_with(&Settings::default());

        let h2 = |p: &ComposedPreview| {
            p.blocks
                .iter()
                .find(|b| b.kind == BlockKind::Heading { level: 2 })
                .map(|b| b.style.clone())
                .expect("section header")
        };
        assert!(h2(&light).uppercase && h2(&light).border_bottom);
        assert!(!h2(&minimal).uppercase && !h2(&minimal).border_bottom);
    }

    #[test]
    fn test_empty_document_composes_to_empty_page() {
        let preview = compose(&map(&Settings::default()), &CmarkRenderer.render(""));
        assert!(preview.blocks.is_empty());
        assert_eq!(preview.page.width_mm, 210.0);
    }
}
