//! The reference HTML renderer.
//!
//! Its class-name scheme is load-bearing for embedders, but the module
//! itself is a thin, pure projection of [`crate::Model`] with no state of
//! its own.

use crate::buffer::Chunk;
use crate::color::Color;
use crate::model::Model;
use crate::style::Style;
use std::fmt::Write as _;

/// Render every row of `model`'s buffer as HTML: one `<div>` per row,
/// containing one `<span>` per chunk, followed by a trailing newline.
///
/// Performs no caching itself; an embedder that wants per-line memoization
/// should key its cache on `Line` identity/equality, since this function's
/// output is a pure function of each [`crate::buffer::Line`]'s contents.
pub fn render_html(model: &Model) -> String {
    let mut out = String::new();
    for line in model.buffer().rows() {
        out.push_str("<div>");
        for chunk in line.chunks() {
            write_span(&mut out, chunk);
        }
        out.push_str("</div>\n");
    }
    out
}

fn write_span(out: &mut String, chunk: &Chunk) {
    let font_weight = if chunk.style.bold { "bold" } else { "normal" };
    let classes = color_classes(chunk.style);
    let _ = write!(out, r#"<span style="font-weight:{font_weight}" class="{classes}">"#);
    escape_html_into(out, &chunk.text);
    out.push_str("</span>");
}

/// Derive the foreground/background class list for a style. Inversion
/// swaps which side of the style (foreground/background) drives the `-fg`
/// and `-bg` class suffixes; a missing color with bold set falls back to
/// a bare `ansi-bold` class.
fn color_classes(style: Style) -> String {
    let (fg, bg) = if style.inverted {
        (style.background, style.foreground)
    } else {
        (style.foreground, style.background)
    };

    let mut classes = Vec::with_capacity(2);
    if let Some(class) = side_class(fg, style.bold, "-fg") {
        classes.push(class);
    }
    if let Some(class) = side_class(bg, style.bold, "-bg") {
        classes.push(class);
    }
    classes.join(" ")
}

fn side_class(color: Option<Color>, bold: bool, suffix: &str) -> Option<String> {
    match (color, bold) {
        (None, true) => Some("ansi-bold".to_string()),
        (None, false) => None,
        (Some(color), _) if color.is_bright() => Some(format!("ansi-bright-{}{}", color.name(), suffix)),
        (Some(color), true) => Some(format!("ansi-bright-{}{}", color.name(), suffix)),
        (Some(color), false) => Some(format!("ansi-{}{}", color.name(), suffix)),
    }
}

fn escape_html_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
