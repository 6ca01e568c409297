// Copyright 2025 the Duochart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `duochart_demo`.

use std::fmt::Write as _;

use duochart_charts::{Size, Tooltip};
use duochart_core::{FontWeight, Frame, MarkPayload, TextAnchor, TextBaseline, TextPayload};
use kurbo::Point;
use peniko::Color;

/// Writes `frame` as a standalone SVG document of `size`, with plot-local marks
/// translated by `origin`. A visible tooltip is drawn on top.
pub(crate) fn frame_to_svg(frame: &Frame, size: Size, origin: Point, tooltip: Option<&Tooltip>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}" font-family="sans-serif">"#,
        w = size.width,
        h = size.height,
    );
    let _ = writeln!(out, r#"<g transform="translate({} {})">"#, origin.x, origin.y);

    // Frames are already in paint order.
    for m in &frame.marks {
        match &m.payload {
            MarkPayload::Rect(r) => {
                let _ = write!(
                    out,
                    r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                    r.rect.x0,
                    r.rect.y0,
                    r.rect.width(),
                    r.rect.height(),
                );
                write_paint_attr(&mut out, "fill", r.fill);
                out.push_str("/>\n");
            }
            MarkPayload::Path(p) => {
                let _ = write!(out, r#"<path d="{}""#, p.path.to_svg());
                write_paint_attr(&mut out, "fill", p.fill);
                if p.stroke_width > 0.0 {
                    write_paint_attr(&mut out, "stroke", p.stroke);
                    let _ = write!(out, r#" stroke-width="{}""#, p.stroke_width);
                }
                out.push_str("/>\n");
            }
            MarkPayload::Text(t) if !t.is_blank() => write_text(&mut out, t),
            MarkPayload::Text(_) => {}
        }
    }
    out.push_str("</g>\n");

    if let Some(t) = tooltip.filter(|t| t.is_visible()) {
        write_tooltip(&mut out, t);
    }
    out.push_str("</svg>\n");
    out
}

fn write_text(out: &mut String, t: &TextPayload) {
    let baseline = match t.baseline {
        TextBaseline::Middle => "middle",
        TextBaseline::Alphabetic => "alphabetic",
        TextBaseline::Hanging => "hanging",
        TextBaseline::Ideographic => "ideographic",
    };
    let _ = write!(
        out,
        r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{}""#,
        t.pos.x, t.pos.y, t.font_size, baseline
    );
    out.push_str(match t.anchor {
        TextAnchor::Start => r#" text-anchor="start""#,
        TextAnchor::Middle => r#" text-anchor="middle""#,
        TextAnchor::End => r#" text-anchor="end""#,
    });
    write_paint_attr(out, "fill", t.fill);
    out.push('>');
    for span in &t.spans {
        let _ = write!(out, r#"<tspan x="{}" dy="{}em""#, t.pos.x, span.dy_em);
        if span.weight == FontWeight::Bold {
            out.push_str(r#" font-weight="bold""#);
        }
        if span.opacity < 1.0 {
            let _ = write!(out, r#" fill-opacity="{}""#, span.opacity);
        }
        out.push('>');
        out.push_str(&escape_xml(&span.text));
        out.push_str("</tspan>");
    }
    out.push_str("</text>\n");
}

fn write_tooltip(out: &mut String, t: &Tooltip) {
    let Some(content) = &t.content else { return };
    let _ = writeln!(
        out,
        r#"<g transform="translate({} {})" opacity="{}">"#,
        t.left, t.top, t.opacity
    );
    out.push_str(r#"<rect width="90" height="48" rx="8" fill="black"/>"#);
    out.push('\n');
    for (i, line) in content.lines().iter().enumerate() {
        let _ = writeln!(
            out,
            r#"<text x="6" y="{}" font-size="12" fill="white">{}</text>"#,
            14 + 14 * i,
            escape_xml(line)
        );
    }
    out.push_str("</g>\n");
}

fn svg_paint(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (fill, opacity)
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let (value, opacity) = svg_paint(color);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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
