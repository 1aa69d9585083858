//! Style Mapper: `Settings` → `StyleDescriptor`.
//!
//! Pure and total. Every lookup table below is a `match` over a closed enum, so a
//! new enum member without a table row fails to compile instead of falling through
//! at runtime.

use serde::Serialize;

use crate::settings::{FontFamily, PaperSize, Settings, Theme};

/// Heading color used when the accent color is blank.
pub const DEFAULT_HEADING_COLOR: &str = "#1f2937";
/// Body text color. Never derived from the accent color.
pub const BODY_TEXT_COLOR: &str = "#374151";

// ────────────────────────────────────────────────────────────────────────────
// Descriptor types
// ────────────────────────────────────────────────────────────────────────────

/// Physical page size in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaperDimensions {
    pub width_mm: f32,
    pub height_mm: f32,
}

/// Page margins in CSS pixels. Applied as padding inside the page box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margins {
    pub top_px: f32,
    pub right_px: f32,
    pub bottom_px: f32,
    pub left_px: f32,
}

/// Numeric settings, passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizingVars {
    pub base_font_size_px: f32,
    /// Unitless multiplier.
    pub line_height: f32,
    pub paragraph_spacing_px: f32,
    pub margins: Margins,
}

/// Structural toggles for one layout preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThemePreset {
    pub theme: Theme,
    /// Section headers (h2) rendered in uppercase with letter spacing.
    pub uppercase_section_headers: bool,
    /// Bottom border under the title and section headers.
    pub heading_rules: bool,
    /// Left accent bar beside section headers.
    pub accent_bar: bool,
    /// Space above each section header.
    pub section_gap_px: f32,
    /// Title (h1) size as a multiple of the base font size.
    pub title_scale: f32,
}

/// The resolved presentation variables for one `Settings` value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleDescriptor {
    pub sizing: SizingVars,
    pub font_family: FontFamily,
    pub font_stack: &'static str,
    pub heading_color: String,
    pub body_color: &'static str,
    pub paper_size: PaperSize,
    pub paper: PaperDimensions,
    pub preset: ThemePreset,
}

// ────────────────────────────────────────────────────────────────────────────
// Lookup tables
// ────────────────────────────────────────────────────────────────────────────

pub fn paper_dimensions(paper: PaperSize) -> PaperDimensions {
    let (width_mm, height_mm) = match paper {
        PaperSize::A4 => (210.0, 297.0),
        PaperSize::A6 => (105.0, 148.0),
        PaperSize::Letter => (215.9, 279.4),
    };
    PaperDimensions {
        width_mm,
        height_mm,
    }
}

pub fn font_stack(font: FontFamily) -> &'static str {
    match font {
        FontFamily::Sans => r#"Inter, "Helvetica Neue", Arial, sans-serif"#,
        FontFamily::Serif => r#"Georgia, "Times New Roman", Times, serif"#,
        FontFamily::Mono => r#""JetBrains Mono", Menlo, Consolas, monospace"#,
    }
}

pub fn theme_preset(theme: Theme) -> ThemePreset {
    match theme {
        Theme::Light => ThemePreset {
            theme,
            uppercase_section_headers: true,
            heading_rules: true,
            accent_bar: false,
            section_gap_px: 24.0,
            title_scale: 1.875,
        },
        Theme::Minimal => ThemePreset {
            theme,
            uppercase_section_headers: false,
            heading_rules: false,
            accent_bar: false,
            section_gap_px: 16.0,
            title_scale: 1.5,
        },
        Theme::Modern => ThemePreset {
            theme,
            uppercase_section_headers: true,
            heading_rules: false,
            accent_bar: true,
            section_gap_px: 24.0,
            title_scale: 2.25,
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Mapping
// ────────────────────────────────────────────────────────────────────────────

/// Maps settings to a style descriptor. Equal inputs give equal outputs.
pub fn map(settings: &Settings) -> StyleDescriptor {
    let heading_color = if settings.accent_color.trim().is_empty() {
        DEFAULT_HEADING_COLOR.to_string()
    } else {
        settings.accent_color.clone()
    };

    StyleDescriptor {
        sizing: SizingVars {
            base_font_size_px: settings.font_size,
            line_height: settings.line_height,
            paragraph_spacing_px: settings.paragraph_spacing,
            margins: Margins {
                top_px: settings.margin_top,
                right_px: settings.margin_right,
                bottom_px: settings.margin_bottom,
                left_px: settings.margin_left,
            },
        },
        font_family: settings.font_family,
        font_stack: font_stack(settings.font_family),
        heading_color,
        body_color: BODY_TEXT_COLOR,
        paper_size: settings.paper_size,
        paper: paper_dimensions(settings.paper_size),
        preset: theme_preset(settings.theme),
    }
}

impl StyleDescriptor {
    /// CSS custom properties for the page container, in a fixed order.
    pub fn css_variables(&self) -> Vec<(&'static str, String)> {
        let s = &self.sizing;
        vec![
            ("--base-font-size", format!("{}px", s.base_font_size_px)),
            ("--line-height", format!("{}", s.line_height)),
            ("--paragraph-spacing", format!("{}px", s.paragraph_spacing_px)),
            ("--margin-top", format!("{}px", s.margins.top_px)),
            ("--margin-right", format!("{}px", s.margins.right_px)),
            ("--margin-bottom", format!("{}px", s.margins.bottom_px)),
            ("--margin-left", format!("{}px", s.margins.left_px)),
            ("--font-family", self.font_stack.to_string()),
            ("--heading-color", self.heading_color.clone()),
            ("--body-color", self.body_color.to_string()),
            ("--page-width", format!("{}mm", self.paper.width_mm)),
            ("--page-height", format!("{}mm", self.paper.height_mm)),
            ("--section-gap", format!("{}px", self.preset.section_gap_px)),
        ]
    }

    /// Structural class names for the active preset, e.g. `theme-light rules`.
    pub fn variant_classes(&self) -> Vec<&'static str> {
        let p = &self.preset;
        let mut classes = vec![match p.theme {
            Theme::Light => "theme-light",
            Theme::Minimal => "theme-minimal",
            Theme::Modern => "theme-modern",
        }];
        if p.uppercase_section_headers {
            classes.push("caps-headers");
        }
        if p.heading_rules {
            classes.push("heading-rules");
        }
        if p.accent_bar {
            classes.push("accent-bar");
        }
        classes
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
