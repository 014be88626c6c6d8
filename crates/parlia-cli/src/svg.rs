//! Server-side SVG rendering of a computed layout.
//!
//! Paint order: background, seat shadows, seats, then the shortfall caption
//! on top. Every call builds a fresh document.

use std::collections::HashMap;
use std::fmt::Write;

use parlia_logic::area::DrawingArea;
use parlia_logic::layout::LayoutResult;
use parlia_logic::party::Party;
use parlia_logic::selection::Selection;

const SVG_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;
const SVG_COMMENT: &str = "<!-- Created with parlia -->";

const SHADOW_OFFSET_X: f64 = 3.0;
const SHADOW_OFFSET_Y: f64 = 5.0;

/// Visual options that do not affect geometry.
#[derive(Debug, Clone)]
pub struct SvgStyle {
    /// Black 2px outline around each seat.
    pub border: bool,
    /// Offset drop shadow behind each seat.
    pub shadow: bool,
    pub background: String,
    pub selection: Selection,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            border: true,
            shadow: true,
            background: "#f2f2f2".to_string(),
            selection: Selection::new(),
        }
    }
}

/// Escape text for use in XML content and attribute values.
pub fn escape_xml(text: &str) -> String {
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

fn opacity_attr(opacity: f32) -> String {
    format!("{:.0}%", opacity * 100.0)
}

/// Render `result` as a standalone SVG document sized to `area`.
pub fn render_svg(
    area: DrawingArea,
    parties: &[Party],
    result: &LayoutResult,
    style: &SvgStyle,
) -> String {
    let by_id: HashMap<i64, &Party> = parties.iter().map(|p| (p.id, p)).collect();
    let (w, h) = (area.width, area.height);
    let mut svg = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(svg, "{}", SVG_HEADER);
    let _ = writeln!(svg, "{}", SVG_COMMENT);
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    let _ = writeln!(
        svg,
        r#"  <rect class="parlRect" x="0" y="0" width="{w}" height="{h}" fill="{}"><title>Parliament</title></rect>"#,
        escape_xml(&style.background)
    );

    if style.shadow {
        for seat in &result.seats {
            let _ = writeln!(
                svg,
                r#"  <circle class="shadow-party-{}" cx="{:.2}" cy="{:.2}" r="{:.2}" fill="black" opacity="{}"/>"#,
                seat.party_id,
                seat.x + SHADOW_OFFSET_X,
                seat.y + SHADOW_OFFSET_Y,
                seat.radius,
                opacity_attr(style.selection.shadow_opacity(seat.party_id))
            );
        }
    }

    let stroke = if style.border {
        r#" stroke="black" stroke-width="2""#
    } else {
        ""
    };
    for seat in &result.seats {
        let (color, name) = by_id
            .get(&seat.party_id)
            .map(|p| (escape_xml(&p.color), escape_xml(&p.name)))
            .unwrap_or_else(|| ("gray".to_string(), String::new()));
        let _ = writeln!(
            svg,
            r#"  <circle class="seat-party-{}" cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"{} opacity="{}"><title>{}</title></circle>"#,
            seat.party_id,
            seat.x,
            seat.y,
            seat.radius,
            color,
            stroke,
            opacity_attr(style.selection.seat_opacity(seat.party_id)),
            name
        );
    }

    if !result.is_complete() {
        write_error_caption(
            &mut svg,
            w,
            h,
            "CAN'T FIT ALL SEATS",
            "Try reducing the seat size",
        );
    }

    svg.push_str("</svg>\n");
    svg
}

fn write_error_caption(svg: &mut String, w: f64, h: f64, title: &str, subtitle: &str) {
    let _ = writeln!(
        svg,
        r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" stroke="black" stroke-width="8" fill="white"/>"#,
        w / 4.0 - w / 20.0,
        h / 3.0,
        w / 2.0 + w / 10.0,
        h / 3.0
    );
    let _ = writeln!(
        svg,
        r##"  <text x="{:.2}" y="{:.2}" fill="#000" font-size="25" text-anchor="middle" font-family="sans-serif">{}</text>"##,
        w / 2.0,
        h / 2.0,
        escape_xml(title)
    );
    let _ = writeln!(
        svg,
        r##"  <text x="{:.2}" y="{:.2}" fill="#000" font-size="18" text-anchor="middle" font-family="sans-serif">{}</text>"##,
        w / 2.0,
        h / 2.0 + h / 10.0,
        escape_xml(subtitle)
    );
}
