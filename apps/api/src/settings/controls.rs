//! Control catalog for the settings panel.
//!
//! The browser renders its controls from this catalog. Each control maps to
//! exactly one `SettingUpdate` variant. Bounds here are UI bounds only; the
//! model itself accepts any value.

use serde::Serialize;

use crate::settings::model::{FontFamily, PaperSize, Theme};

/// Accent colors offered by the panel, in display order.
pub const ACCENT_PALETTE: [&str; 5] = ["#2563eb", "#dc2626", "#16a34a", "#9333ea", "#ea580c"];

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Control {
    /// A slider with fixed bounds.
    Range {
        field: &'static str,
        label: &'static str,
        unit: Option<&'static str>,
        min: f32,
        max: f32,
        step: f32,
    },
    /// A free number input.
    Number {
        field: &'static str,
        label: &'static str,
        unit: &'static str,
    },
    /// A button group over a closed enum.
    Choice {
        field: &'static str,
        label: &'static str,
        options: Vec<&'static str>,
    },
    /// A swatch picker.
    Palette {
        field: &'static str,
        label: &'static str,
        colors: Vec<&'static str>,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct ControlSection {
    pub title: &'static str,
    pub controls: Vec<Control>,
}

fn margin(field: &'static str, label: &'static str) -> Control {
    Control::Number {
        field,
        label,
        unit: "px",
    }
}

/// Returns the full panel layout: typography, spacing, margins, page, theme.
pub fn control_catalog() -> Vec<ControlSection> {
    vec![
        ControlSection {
            title: "Typography",
            controls: vec![
                Control::Choice {
                    field: "fontFamily",
                    label: "Font Family",
                    options: FontFamily::ALL.iter().map(FontFamily::as_str).collect(),
                },
                Control::Range {
                    field: "fontSize",
                    label: "Font Size",
                    unit: Some("px"),
                    min: 10.0,
                    max: 24.0,
                    step: 1.0,
                },
            ],
        },
        ControlSection {
            title: "Spacing",
            controls: vec![
                Control::Range {
                    field: "lineHeight",
                    label: "Line Height",
                    unit: None,
                    min: 1.0,
                    max: 2.5,
                    step: 0.1,
                },
                Control::Range {
                    field: "paragraphSpacing",
                    label: "Paragraph Spacing",
                    unit: Some("px"),
                    min: 0.0,
                    max: 40.0,
                    step: 4.0,
                },
            ],
        },
        ControlSection {
            title: "Margins",
            controls: vec![
                margin("marginTop", "Top"),
                margin("marginBottom", "Bottom"),
                margin("marginLeft", "Left"),
                margin("marginRight", "Right"),
            ],
        },
        ControlSection {
            title: "Page",
            controls: vec![Control::Choice {
                field: "paperSize",
                label: "Paper Size",
                options: PaperSize::ALL.iter().map(PaperSize::as_str).collect(),
            }],
        },
        ControlSection {
            title: "Theme",
            controls: vec![
                Control::Choice {
                    field: "theme",
                    label: "Theme",
                    options: Theme::ALL.iter().map(Theme::as_str).collect(),
                },
                Control::Palette {
                    field: "accentColor",
                    label: "Accent Color",
                    colors: ACCENT_PALETTE.to_vec(),
                },
            ],
        },
    ]
}
