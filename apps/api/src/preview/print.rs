//! Printable HTML document for the host print pipeline.
//!
//! `@page` is sized to the paper dimensions in millimeters with zero page
//! margin; the resume margins live inside the page box as padding.

use std::fmt::Write as _;

use crate::preview::composer::{BlockStyle, ComposedPreview};

const BASE_CSS: &str = r#"
html, body { margin: 0; padding: 0; background: #ffffff; }
.resume-page {
  box-sizing: border-box;
  width: var(--page-width);
  min-height: var(--page-height);
  padding: var(--margin-top) var(--margin-right) var(--margin-bottom) var(--margin-left);
  font-family: var(--font-family);
  font-size: var(--base-font-size);
  line-height: var(--line-height);
  color: var(--body-color);
}
.resume-page h1, .resume-page h2, .resume-page h3,
.resume-page h4, .resume-page h5, .resume-page h6 {
  margin: 0; font-size: inherit; color: inherit;
}
.resume-page p, .resume-page ul, .resume-page ol { margin-top: 0; margin-bottom: 0; }
.resume-page li { margin: 0; }
.resume-page .caps { text-transform: uppercase; letter-spacing: 0.05em; }
.resume-page .rule { border-bottom: 1px solid #e5e7eb; padding-bottom: 0.25em; }
.resume-page .bar { border-left: 4px solid var(--heading-color); padding-left: 0.5em; }
"#;

/// Escapes text for use inside a double-quoted HTML attribute or element body.
pub fn escape_attr(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Drops characters that would end a CSS declaration or block, so a value can
/// only ever be the value of the one declaration it is written into.
fn css_value(raw: &str) -> String {
    raw.chars()
        .filter(|&c| !matches!(c, ';' | '{' | '}' | '\\' | '\n' | '\r'))
        .collect()
}

fn block_attrs(style: &BlockStyle) -> (String, String) {
    let mut classes = Vec::new();
    if style.uppercase {
        classes.push("caps");
    }
    if style.border_bottom {
        classes.push("rule");
    }
    if style.accent_bar {
        classes.push("bar");
    }

    let mut inline = format!(
        "font-size: calc(var(--base-font-size) * {}); margin: {}px 0 {}px 0;",
        style.font_scale, style.margin_top_px, style.margin_bottom_px
    );
    if let Some(color) = &style.color {
        let _ = write!(inline, " color: {};", css_value(color));
    }
    (classes.join(" "), inline)
}

impl ComposedPreview {
    /// Renders a standalone HTML document ready for printing.
    pub fn to_html(&self, title: &str) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        let _ = writeln!(out, "<title>{}</title>", escape_attr(title));
        out.push_str("<style>\n");
        let _ = writeln!(
            out,
            "@page {{ size: {}mm {}mm; margin: 0; }}",
            self.page.width_mm, self.page.min_height_mm
        );
        out.push_str(BASE_CSS);
        out.push_str("</style>\n</head>\n<body>\n");

        let variables: String = self
            .variables
            .iter()
            .map(|v| format!("{}: {};", v.name, css_value(&v.value)))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(
            out,
            "<div class=\"resume-page {}\" style=\"{}\">",
            self.classes.join(" "),
            escape_attr(&variables)
        );

        for block in &self.blocks {
            let (classes, inline) = block_attrs(&block.style);
            let _ = writeln!(
                out,
                "<div class=\"block {}\" style=\"{}\">\n{}</div>",
                classes,
                escape_attr(&inline),
                block.html
            );
        }

        out.push_str("</div>\n</body>\n</html>\n");
        out
    }
}
