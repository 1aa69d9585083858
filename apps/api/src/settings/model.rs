//! Settings Model: the user-editable presentation parameters of a resume.
//!
//! Settings are replaced wholesale on every change. Enum fields are closed sets;
//! unknown wire names, and values that are not strings at all, never fail to
//! load: they fall back to the first declared member of the enum.

use serde::{Deserialize, Serialize};
use tracing::warn;

// ────────────────────────────────────────────────────────────────────────────
// Closed enums
// ────────────────────────────────────────────────────────────────────────────

/// Font family category. Each category resolves to a concrete font stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "serde_json::Value")]
pub enum FontFamily {
    Sans,
    Serif,
    Mono,
}

/// Layout preset. Presets are mutually exclusive, never combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "serde_json::Value")]
pub enum Theme {
    /// Uppercase section headers with bottom rules.
    Light,
    /// No rules, sentence-case headers, tight section gaps.
    Minimal,
    /// Uppercase headers with an accent bar beside each section header.
    Modern,
}

/// Physical paper size of the printed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "serde_json::Value")]
pub enum PaperSize {
    A4,
    A6,
    Letter,
}

macro_rules! closed_enum {
    ($ty:ident, $label:literal, [$(($variant:ident, $name:literal)),+ $(,)?]) => {
        impl $ty {
            /// Every member, in declaration order. The first entry is the fallback.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }

            /// Parses a wire name. Unknown names fall back to the first member.
            pub fn from_name(name: &str) -> Self {
                match name.trim().to_ascii_lowercase().as_str() {
                    $($name => $ty::$variant,)+
                    other => {
                        let fallback = Self::ALL[0];
                        warn!(
                            "Unrecognized {} '{}', falling back to '{}'",
                            $label,
                            other,
                            fallback.as_str()
                        );
                        fallback
                    }
                }
            }
        }

        /// Any JSON value loads: strings go through `from_name`, and null,
        /// numbers, or other shapes take the first member.
        impl From<serde_json::Value> for $ty {
            fn from(value: serde_json::Value) -> Self {
                match value {
                    serde_json::Value::String(name) => $ty::from_name(&name),
                    other => {
                        let fallback = Self::ALL[0];
                        warn!(
                            "Non-string {} value {}, falling back to '{}'",
                            $label,
                            other,
                            fallback.as_str()
                        );
                        fallback
                    }
                }
            }
        }
    };
}

closed_enum!(FontFamily, "font family", [(Sans, "sans"), (Serif, "serif"), (Mono, "mono")]);
closed_enum!(Theme, "theme", [(Light, "light"), (Minimal, "minimal"), (Modern, "modern")]);
closed_enum!(PaperSize, "paper size", [(A4, "a4"), (A6, "a6"), (Letter, "letter")]);

// ────────────────────────────────────────────────────────────────────────────
// Settings
// ────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_ACCENT_COLOR: &str = "#2563eb";

/// Presentation parameters for one resume. Sizes are in CSS pixels except
/// `line_height`, which is a unitless multiplier.
///
/// Missing fields in a JSON document take their default, so a loaded value is
/// always complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub font_size: f32,
    pub line_height: f32,
    pub paragraph_spacing: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub font_family: FontFamily,
    pub paper_size: PaperSize,
    pub theme: Theme,
    pub accent_color: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            font_size: 16.0,
            line_height: 1.5,
            paragraph_spacing: 16.0,
            margin_top: 40.0,
            margin_bottom: 40.0,
            margin_left: 40.0,
            margin_right: 40.0,
            font_family: FontFamily::Sans,
            paper_size: PaperSize::A4,
            theme: Theme::Light,
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
        }
    }
}

/// A single named update, carrying the concrete type of the field it targets.
///
/// Wire form: `{"field": "fontSize", "value": 18}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum SettingUpdate {
    FontSize(f32),
    LineHeight(f32),
    ParagraphSpacing(f32),
    MarginTop(f32),
    MarginBottom(f32),
    MarginLeft(f32),
    MarginRight(f32),
    FontFamily(FontFamily),
    PaperSize(PaperSize),
    Theme(Theme),
    AccentColor(String),
}

impl SettingUpdate {
    pub fn field_name(&self) -> &'static str {
        match self {
            SettingUpdate::FontSize(_) => "fontSize",
            SettingUpdate::LineHeight(_) => "lineHeight",
            SettingUpdate::ParagraphSpacing(_) => "paragraphSpacing",
            SettingUpdate::MarginTop(_) => "marginTop",
            SettingUpdate::MarginBottom(_) => "marginBottom",
            SettingUpdate::MarginLeft(_) => "marginLeft",
            SettingUpdate::MarginRight(_) => "marginRight",
            SettingUpdate::FontFamily(_) => "fontFamily",
            SettingUpdate::PaperSize(_) => "paperSize",
            SettingUpdate::Theme(_) => "theme",
            SettingUpdate::AccentColor(_) => "accentColor",
        }
    }
}

impl Settings {
    /// Returns a copy with only the targeted field replaced.
    ///
    /// Values are not range-checked: a negative margin or a zero font size is
    /// stored as given.
    pub fn update(&self, update: SettingUpdate) -> Settings {
        let mut next = self.clone();
        match update {
            SettingUpdate::FontSize(v) => next.font_size = v,
            SettingUpdate::LineHeight(v) => next.line_height = v,
            SettingUpdate::ParagraphSpacing(v) => next.paragraph_spacing = v,
            SettingUpdate::MarginTop(v) => next.margin_top = v,
            SettingUpdate::MarginBottom(v) => next.margin_bottom = v,
            SettingUpdate::MarginLeft(v) => next.margin_left = v,
            SettingUpdate::MarginRight(v) => next.margin_right = v,
            SettingUpdate::FontFamily(v) => next.font_family = v,
            SettingUpdate::PaperSize(v) => next.paper_size = v,
            SettingUpdate::Theme(v) => next.theme = v,
            SettingUpdate::AccentColor(v) => next.accent_color = v,
        }
        next
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_font_size_changes_only_font_size() {
        let before = Settings::default();
        let after = before.update(SettingUpdate::FontSize(18.0));

        assert_eq!(after.font_size, 18.0);
        let restored = Settings {
            font_size: before.font_size,
            ..after.clone()
        };
        assert_eq!(restored, before, "every other field must be untouched");
    }

    #[test]
    fn test_update_leaves_input_value_unchanged() {
        let before = Settings::default();
        let _ = before.update(SettingUpdate::Theme(Theme::Modern));
        assert_eq!(before.theme, Theme::Light);
    }

    #[test]
    fn test_negative_margin_passes_through() {
        let after = Settings::default().update(SettingUpdate::MarginLeft(-12.0));
        assert_eq!(after.margin_left, -12.0);
    }

    #[test]
    fn test_unknown_paper_size_falls_back_to_a4() {
        assert_eq!(PaperSize::from_name("bogus"), PaperSize::A4);
        assert_eq!(PaperSize::from_name(" Letter "), PaperSize::Letter);
    }

    #[test]
    fn test_unknown_enum_values_fall_back_to_first_member() {
        assert_eq!(FontFamily::from_name("comic"), FontFamily::ALL[0]);
        assert_eq!(Theme::from_name(""), Theme::ALL[0]);
    }

    #[test]
    fn test_settings_json_with_bogus_enum_loads() {
        let json = r#"{"fontSize": 12, "paperSize": "bogus", "fontFamily": "fantasy"}"#;
        let settings: Settings = serde_json::from_str(json).expect("settings should load");
        assert_eq!(settings.font_size, 12.0);
        assert_eq!(settings.paper_size, PaperSize::A4);
        assert_eq!(settings.font_family, FontFamily::Sans);
        assert_eq!(settings.line_height, 1.5, "missing fields take defaults");
    }

    #[test]
    fn test_null_and_numeric_enum_values_fall_back() {
        let json = r#"{"paperSize": null, "theme": 3, "fontFamily": ["serif"]}"#;
        let settings: Settings = serde_json::from_str(json).expect("settings should load");
        assert_eq!(settings.paper_size, PaperSize::A4);
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.font_family, FontFamily::Sans);
    }

    #[test]
    fn test_setting_update_with_numeric_enum_value_falls_back() {
        let update: SettingUpdate =
            serde_json::from_str(r#"{"field": "paperSize", "value": 3}"#).expect("update loads");
        assert_eq!(update, SettingUpdate::PaperSize(PaperSize::A4));

        let update: SettingUpdate =
            serde_json::from_str(r#"{"field": "theme", "value": null}"#).expect("update loads");
        assert_eq!(update, SettingUpdate::Theme(Theme::Light));
    }

    #[test]
    fn test_settings_serialize_camel_case_and_lowercase_enums() {
        let value = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(value["paperSize"], "a4");
        assert_eq!(value["fontFamily"], "sans");
        assert_eq!(value["accentColor"], DEFAULT_ACCENT_COLOR);
    }

    #[test]
    fn test_setting_update_wire_format() {
        let update: SettingUpdate =
            serde_json::from_str(r#"{"field": "marginTop", "value": 24}"#).unwrap();
        assert_eq!(update, SettingUpdate::MarginTop(24.0));

        let update: SettingUpdate =
            serde_json::from_str(r#"{"field": "theme", "value": "modern"}"#).unwrap();
        assert_eq!(update, SettingUpdate::Theme(Theme::Modern));
        assert_eq!(update.field_name(), "theme");
    }

    #[test]
    fn test_setting_update_rejects_wrong_value_type() {
        let result: Result<SettingUpdate, _> =
            serde_json::from_str(r#"{"field": "fontSize", "value": "large"}"#);
        assert!(result.is_err(), "a string is not a font size");
    }
}
