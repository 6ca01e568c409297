// Copyright 2025 the Duochart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text mark generation.

extern crate alloc;

use alloc::vec::Vec;

use duochart_core::{Mark, MarkId, TextAnchor, TextBaseline, TextSpan};
use kurbo::Point;
use peniko::Color;

/// A text mark spec made of one or more stacked spans.
#[derive(Clone, Debug)]
pub struct TextMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Anchor position in plot coordinates.
    pub pos: Point,
    /// Text content (unshaped), one entry per line.
    pub spans: Vec<TextSpan>,
    /// Font size.
    pub font_size: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill color.
    pub fill: Color,
    /// Rendering order hint (`duochart_core::Mark::z_index`).
    pub z_index: i32,
}

impl TextMarkSpec {
    /// Creates a text mark spec with no content and default styling.
    pub fn new(id: MarkId, pos: Point) -> Self {
        Self {
            id,
            pos,
            spans: Vec::new(),
            font_size: 12.0,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Alphabetic,
            fill: Color::BLACK,
            z_index: crate::z_order::SERIES_LABELS,
        }
    }

    /// Replaces the content with a single line.
    pub fn with_text(mut self, text: impl Into<alloc::string::String>) -> Self {
        self.spans.clear();
        self.spans.push(TextSpan::new(text));
        self
    }

    /// Appends a line.
    pub fn with_span(mut self, span: TextSpan) -> Self {
        self.spans.push(span);
        self
    }

    /// Drops all content, keeping position and style.
    pub fn blank(mut self) -> Self {
        self.spans.clear();
        self
    }

    /// Moves the anchor.
    pub fn with_pos(mut self, pos: Point) -> Self {
        self.pos = pos;
        self
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the fill color.
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    /// Sets the text anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the text baseline.
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the mark.
    pub fn mark(&self) -> Mark {
        self.spans
            .iter()
            .cloned()
            .fold(Mark::builder(self.id).text(), |b, span| b.span(span))
            .z_index(self.z_index)
            .x_const(self.pos.x)
            .y_const(self.pos.y)
            .font_size_const(self.font_size)
            .fill_const(self.fill)
            .text_anchor(self.anchor)
            .text_baseline(self.baseline)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_keeps_style() {
        let spec = TextMarkSpec::new(MarkId::from_raw(1), Point::new(3.0, 4.0))
            .with_text("42")
            .with_font_size(15.0)
            .with_anchor(TextAnchor::Middle);
        let full = spec.mark().payload.as_text().cloned().expect("text payload");
        let empty = spec.blank().mark().payload.as_text().cloned().expect("text payload");
        assert_eq!(full.text(), "42");
        assert!(empty.is_blank());
        assert_eq!(empty.pos, full.pos);
        assert_eq!(empty.font_size, 15.0);
        assert_eq!(empty.anchor, TextAnchor::Middle);
    }
}
