//! Logo rendering helpers.
//!
//! The image model either returns inline SVG, from which monochrome and
//! reverse variants can be derived, or a raster URL, which is used as-is.
//! When no model is available a simple placeholder mark is drawn.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::domain::LogoSet;

pub const DEFAULT_PRIMARY: &str = "#3B82F6";

static HEX_PAINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r##"(fill|stroke)\s*=\s*"#[0-9A-Fa-f]{3,8}""##).expect("static regex")
});

static BW_FILL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)fill\s*=\s*"(white|black|#fff|#ffffff|#000|#000000)""#)
        .expect("static regex")
});

/// Escape text for use inside SVG markup.
fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn mark(background: &str, circle: &str, text_fill: &str, name: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 100" width="200" height="100"><rect width="200" height="100" fill="{background}"/><circle cx="50" cy="50" r="40" fill="{circle}"/><text x="100" y="55" font-family="Arial" font-size="24" font-weight="bold" fill="{text_fill}" text-anchor="middle">{name}</text></svg>"#
    )
}

/// Deterministic placeholder logo set.
///
/// `palette` holds hex codes; the first is used for the primary mark.
pub fn placeholder_logo(brand_name: &str, palette: &[String]) -> LogoSet {
    let primary_color = palette.first().map_or(DEFAULT_PRIMARY, String::as_str);
    let name = xml_escape(brand_name);
    LogoSet {
        primary: mark("white", primary_color, "black", &name),
        monochrome: mark("white", "#000000", "black", &name),
        reverse: mark("black", "white", "white", &name),
    }
}

/// Every hex `fill`/`stroke` becomes black.
pub fn monochrome_variant(svg: &str) -> String {
    HEX_PAINT
        .replace_all(svg, |caps: &Captures<'_>| format!("{}=\"#000000\"", &caps[1]))
        .into_owned()
}

/// White fills become black and black fills become white, in one pass.
pub fn reverse_variant(svg: &str) -> String {
    BW_FILL
        .replace_all(svg, |caps: &Captures<'_>| {
            let swapped = match caps[1].to_ascii_lowercase().as_str() {
                "white" | "#fff" | "#ffffff" => "black",
                _ => "white",
            };
            format!("fill=\"{swapped}\"")
        })
        .into_owned()
}

pub fn is_svg(asset: &str) -> bool {
    let trimmed = asset.trim_start();
    trimmed.starts_with("<svg") || trimmed.starts_with("<?xml")
}

impl LogoSet {
    /// Build a logo set from one generated asset.
    pub fn from_generated(asset: impl Into<String>) -> Self {
        let asset = asset.into();
        if is_svg(&asset) {
            Self {
                monochrome: monochrome_variant(&asset),
                reverse: reverse_variant(&asset),
                primary: asset,
            }
        } else {
            Self {
                primary: asset.clone(),
                monochrome: asset.clone(),
                reverse: asset,
            }
        }
    }
}
