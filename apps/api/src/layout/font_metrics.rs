//! Static glyph-width tables for the three font categories.
//!
//! Widths are in em units (relative to font size). Each category carries a
//! handful of width classes rather than a per-glyph table. The estimate only
//! has to tell "fits on one page" from "spills onto a second", so a class-level
//! approximation is enough. Characters outside ASCII use `average`.

use crate::settings::FontFamily;

/// Per-class character widths for one font category, in em.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphWidths {
    pub space: f32,
    /// i, l, j, t, f, r, punctuation like `.,;:'!|`.
    pub narrow: f32,
    /// Remaining lowercase letters and symbols.
    pub regular: f32,
    /// m, w and wide symbols like `@%`.
    pub wide: f32,
    pub uppercase: f32,
    pub digit: f32,
    /// Fallback for non-ASCII characters.
    pub average: f32,
}

/// Sans (Inter-like humanist sans-serif).
static SANS_WIDTHS: GlyphWidths = GlyphWidths {
    space: 0.25,
    narrow: 0.27,
    regular: 0.54,
    wide: 0.82,
    uppercase: 0.64,
    digit: 0.56,
    average: 0.52,
};

/// Serif (Georgia-like transitional serif). Slightly narrower than sans.
static SERIF_WIDTHS: GlyphWidths = GlyphWidths {
    space: 0.24,
    narrow: 0.26,
    regular: 0.50,
    wide: 0.76,
    uppercase: 0.66,
    digit: 0.54,
    average: 0.49,
};

/// Mono: every glyph is the same advance.
static MONO_WIDTHS: GlyphWidths = GlyphWidths {
    space: 0.60,
    narrow: 0.60,
    regular: 0.60,
    wide: 0.60,
    uppercase: 0.60,
    digit: 0.60,
    average: 0.60,
};

/// Returns the static width table for a font category.
pub fn get_metrics(font: FontFamily) -> &'static GlyphWidths {
    match font {
        FontFamily::Sans => &SANS_WIDTHS,
        FontFamily::Serif => &SERIF_WIDTHS,
        FontFamily::Mono => &MONO_WIDTHS,
    }
}

impl GlyphWidths {
    fn char_width(&self, c: char) -> f32 {
        match c {
            ' ' => self.space,
            'i' | 'l' | 'j' | 't' | 'f' | 'r' | 'I' => self.narrow,
            '.' | ',' | ';' | ':' | '\'' | '!' | '|' | '(' | ')' | '[' | ']' => self.narrow,
            'm' | 'w' | 'M' | 'W' | '@' | '%' => self.wide,
            'A'..='Z' => self.uppercase,
            '0'..='9' => self.digit,
            c if c.is_ascii() => self.regular,
            _ => self.average,
        }
    }

    /// Measures the rendered width of a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars().map(|c| self.char_width(c)).sum()
    }

    /// Estimates how many lines `s` occupies when greedily word-wrapped at `max_width_em`.
    ///
    /// A word wider than the line counts as one line on its own; no hyphenation.
    pub fn estimated_lines(&self, s: &str, max_width_em: f32) -> u32 {
        let mut words = s.split_whitespace();
        let Some(first) = words.next() else {
            return 0;
        };

        let mut line_count = 1u32;
        let mut current_width = self.measure_str(first);
        for word in words {
            let word_w = self.measure_str(word);
            if current_width + self.space + word_w > max_width_em {
                line_count = line_count.saturating_add(1);
                current_width = word_w;
            } else {
                current_width += self.space + word_w;
            }
        }
        line_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        assert_eq!(get_metrics(FontFamily::Sans).measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_uses_width_classes() {
        let metrics = get_metrics(FontFamily::Sans);
        // "Rim" = R(0.64) + i(0.27) + m(0.82) = 1.73
        let width = metrics.measure_str("Rim");
        assert!((width - 1.73).abs() < 1e-3, "Rim width should be ~1.73, got {width}");
    }

    #[test]
    fn test_non_ascii_falls_back_to_average() {
        let metrics = get_metrics(FontFamily::Serif);
        assert!((metrics.measure_str("é") - metrics.average).abs() < 1e-4);
    }

    #[test]
    fn test_mono_is_uniform() {
        let metrics = get_metrics(FontFamily::Mono);
        assert_eq!(metrics.measure_str("iiii"), metrics.measure_str("MMMM"));
    }

    #[test]
    fn test_estimated_lines_empty_is_zero() {
        assert_eq!(get_metrics(FontFamily::Sans).estimated_lines("   ", 40.0), 0);
    }

    #[test]
    fn test_estimated_lines_wraps_long_text() {
        let metrics = get_metrics(FontFamily::Sans);
        assert_eq!(metrics.estimated_lines("Rust", 40.0), 1);

        let bullet = "Led the migration of a legacy codebase to React and TypeScript, \
                      improving site performance by 40% through code splitting";
        let lines = metrics.estimated_lines(bullet, 20.0);
        assert!(lines >= 2, "bullet should wrap at 20em, got {lines}");
    }

    #[test]
    fn test_every_font_family_has_metrics() {
        for font in FontFamily::ALL {
            let metrics = get_metrics(*font);
            assert!(metrics.average > 0.0 && metrics.space > 0.0, "{font:?} has no widths");
        }
    }
}
