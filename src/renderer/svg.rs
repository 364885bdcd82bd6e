//! SVG serialization of a rendered scene, for previews and export.

use egui::{Color32, Stroke};
use std::fmt::Write;

use super::primitive::{Primitive, Rotation, SELECTION_DASH};

/// Canvas background behind every design
pub const BACKGROUND: &str = "rgba(255,255,255,0.8)";

/// Serializes `primitives` into a standalone SVG document of the given size
pub fn to_svg(width: f32, height: f32, primitives: &[Primitive]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = num(width),
        h = num(height)
    );
    let _ = writeln!(
        out,
        r#"  <rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
        num(width),
        num(height),
        BACKGROUND
    );
    for primitive in primitives {
        write_primitive(&mut out, primitive);
    }
    out.push_str("</svg>\n");
    out
}

fn write_primitive(out: &mut String, primitive: &Primitive) {
    let _ = match primitive {
        Primitive::Text {
            text,
            anchor_pos,
            anchor,
            font_family,
            font_size,
            bold,
            italic,
            color,
            opacity,
            rotation,
        } => writeln!(
            out,
            r#"  <text x="{}" y="{}" font-family="{}" font-size="{}" font-weight="{}" font-style="{}" {} text-anchor="{}" dominant-baseline="middle"{}>{}</text>"#,
            num(anchor_pos.x),
            num(anchor_pos.y),
            escape(font_family),
            num(*font_size),
            if *bold { "bold" } else { "normal" },
            if *italic { "italic" } else { "normal" },
            paint("fill", *color),
            anchor.as_svg(),
            common(*opacity, rotation),
            escape(text)
        ),
        Primitive::Rect {
            rect,
            fill,
            stroke,
            opacity,
            rotation,
        } => writeln!(
            out,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" {}{}{}/>"#,
            num(rect.min.x),
            num(rect.min.y),
            num(rect.width()),
            num(rect.height()),
            paint("fill", *fill),
            outline(*stroke),
            common(*opacity, rotation)
        ),
        Primitive::Circle {
            center,
            radius,
            fill,
            stroke,
            opacity,
            rotation,
        } => writeln!(
            out,
            r#"  <circle cx="{}" cy="{}" r="{}" {}{}{}/>"#,
            num(center.x),
            num(center.y),
            num(*radius),
            paint("fill", *fill),
            outline(*stroke),
            common(*opacity, rotation)
        ),
        Primitive::Image {
            src,
            bounds,
            opacity,
            rotation,
            ..
        } => writeln!(
            out,
            r#"  <image href="{}" x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="xMidYMid meet"{}/>"#,
            escape(src),
            num(bounds.min.x),
            num(bounds.min.y),
            num(bounds.width()),
            num(bounds.height()),
            common(*opacity, rotation)
        ),
        Primitive::SelectionOutline { rect, stroke } => writeln!(
            out,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="none" {} stroke-width="{}" stroke-dasharray="{} {}"/>"#,
            num(rect.min.x),
            num(rect.min.y),
            num(rect.width()),
            num(rect.height()),
            paint("stroke", stroke.color),
            num(stroke.width),
            num(SELECTION_DASH[0]),
            num(SELECTION_DASH[1])
        ),
    };
}

/// ` opacity=".." transform="rotate(..)"`, omitting defaults
fn common(opacity: f32, rotation: &Rotation) -> String {
    let mut attrs = String::new();
    if opacity < 1.0 {
        let _ = write!(attrs, r#" opacity="{}""#, num(opacity));
    }
    if !rotation.is_identity() {
        let _ = write!(
            attrs,
            r#" transform="rotate({} {} {})""#,
            num(rotation.degrees),
            num(rotation.pivot.x),
            num(rotation.pivot.y)
        );
    }
    attrs
}

fn outline(stroke: Option<Stroke>) -> String {
    match stroke {
        Some(stroke) => format!(
            r#" {} stroke-width="{}""#,
            paint("stroke", stroke.color),
            num(stroke.width)
        ),
        None => String::new(),
    }
}

/// `fill="#rrggbb"` plus a separate opacity attribute for translucent colors
fn paint(attribute: &str, color: Color32) -> String {
    if color == Color32::TRANSPARENT {
        return format!(r#"{attribute}="none""#);
    }
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    if a == u8::MAX {
        format!(r##"{attribute}="#{r:02x}{g:02x}{b:02x}""##)
    } else {
        format!(
            r##"{attribute}="#{r:02x}{g:02x}{b:02x}" {attribute}-opacity="{}""##,
            num(f32::from(a) / 255.0)
        )
    }
}

/// Shortest decimal form, at most two fractional digits
fn num(value: f32) -> String {
    let scaled = value * 100.0;
    // values this large have no fractional digits left to round
    let rounded = if scaled.is_finite() {
        scaled.round() / 100.0
    } else {
        value
    };
    if rounded == 0.0 {
        "0".to_owned()
    } else if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        let text = format!("{rounded:.2}");
        text.trim_end_matches('0').to_owned()
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
