// Copyright 2025 the Duochart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marks: the visual primitives bound to data rows.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::Color;
use smallvec::SmallVec;

/// Stable identity of a mark across redraws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Wraps a raw id.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Derives the id of the mark bound to `row` within `layer`.
    ///
    /// Rows are matched by sequence position, so the same position in the same layer
    /// always yields the same id.
    pub const fn for_row(layer: u32, row: usize) -> Self {
        Self(((layer as u64) << 32) | (row as u64 & 0xFFFF_FFFF))
    }

    /// Returns the layer half of an id built with [`MarkId::for_row`].
    #[allow(clippy::cast_possible_truncation, reason = "the shifted value fits in 32 bits")]
    pub const fn layer(self) -> u32 {
        (self.0 >> 32) as u32
    }

    /// Returns the row half of an id built with [`MarkId::for_row`].
    #[allow(clippy::cast_possible_truncation, reason = "masked to 32 bits")]
    pub const fn row(self) -> usize {
        (self.0 & 0xFFFF_FFFF) as usize
    }
}

/// The kind of a mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// Axis-aligned rectangle.
    Rect,
    /// Arbitrary filled/stroked path.
    Path,
    /// One or more lines of unshaped text.
    Text,
}

/// Horizontal text anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// The anchor point is the start of the text.
    #[default]
    Start,
    /// The anchor point is the middle of the text.
    Middle,
    /// The anchor point is the end of the text.
    End,
}

/// Vertical text baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// Alphabetic baseline.
    #[default]
    Alphabetic,
    /// Vertical middle.
    Middle,
    /// Top of the em box.
    Hanging,
    /// Ideographic baseline.
    Ideographic,
}

/// Font weight of a text span.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontWeight {
    /// Regular weight (400).
    #[default]
    Normal,
    /// Bold weight (700).
    Bold,
}

/// One line of a text mark.
#[derive(Clone, Debug, PartialEq)]
pub struct TextSpan {
    /// Line content.
    pub text: String,
    /// Vertical offset from the mark position, in ems.
    pub dy_em: f64,
    /// Font weight.
    pub weight: FontWeight,
    /// Fill opacity multiplier in `0..=1`.
    pub opacity: f32,
}

impl TextSpan {
    /// Creates a regular-weight, fully opaque span on the first line.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            dy_em: 0.0,
            weight: FontWeight::Normal,
            opacity: 1.0,
        }
    }

    /// Sets the vertical offset in ems.
    pub fn with_dy_em(mut self, dy_em: f64) -> Self {
        self.dy_em = dy_em;
        self
    }

    /// Sets the font weight.
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the fill opacity.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }
}

/// Resolved rectangle payload.
#[derive(Clone, Debug, PartialEq)]
pub struct RectPayload {
    /// Geometry in scene coordinates.
    pub rect: Rect,
    /// Fill color.
    pub fill: Color,
}

/// Resolved path payload.
#[derive(Clone, Debug, PartialEq)]
pub struct PathPayload {
    /// Geometry in scene coordinates.
    pub path: BezPath,
    /// Fill color.
    pub fill: Color,
    /// Stroke color.
    pub stroke: Color,
    /// Stroke width; `0` disables the stroke.
    pub stroke_width: f64,
}

/// Resolved text payload.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPayload {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Lines of text. An empty list renders nothing.
    pub spans: SmallVec<[TextSpan; 2]>,
    /// Font size in scene units.
    pub font_size: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill color.
    pub fill: Color,
}

impl TextPayload {
    /// Returns the spans joined with `\n`.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for (i, span) in self.spans.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&span.text);
        }
        out
    }

    /// Returns `true` if no span carries any text.
    pub fn is_blank(&self) -> bool {
        self.spans.iter().all(|s| s.text.is_empty())
    }
}

/// The resolved visual state of a mark.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// A rectangle.
    Rect(RectPayload),
    /// A path.
    Path(PathPayload),
    /// Text.
    Text(TextPayload),
}

impl MarkPayload {
    /// Returns the payload kind.
    pub fn kind(&self) -> MarkKind {
        match self {
            Self::Rect(_) => MarkKind::Rect,
            Self::Path(_) => MarkKind::Path,
            Self::Text(_) => MarkKind::Text,
        }
    }

    /// Returns geometric bounds where they are known without text metrics.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect),
            Self::Path(p) => Some(p.path.bounding_box()),
            Self::Text(_) => None,
        }
    }

    /// Returns the rectangle payload, if this is one.
    pub fn as_rect(&self) -> Option<&RectPayload> {
        match self {
            Self::Rect(r) => Some(r),
            _ => None,
        }
    }

    /// Returns the path payload, if this is one.
    pub fn as_path(&self) -> Option<&PathPayload> {
        match self {
            Self::Path(p) => Some(p),
            _ => None,
        }
    }

    /// Returns the text payload, if this is one.
    pub fn as_text(&self) -> Option<&TextPayload> {
        match self {
            Self::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// A visual primitive with a stable identity.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Identity used to match the mark across redraws.
    pub id: MarkId,
    /// Paint order; renderers sort by `(z_index, id)`.
    pub z_index: i32,
    /// Resolved geometry and paint.
    pub payload: MarkPayload,
}

impl Mark {
    /// Starts building a mark. The builder defaults to a rectangle.
    pub fn builder(id: MarkId) -> MarkBuilder {
        MarkBuilder::new(id)
    }

    /// Returns the mark kind.
    pub fn kind(&self) -> MarkKind {
        self.payload.kind()
    }

    /// See [`MarkPayload::bounds`].
    pub fn bounds(&self) -> Option<Rect> {
        self.payload.bounds()
    }
}

/// Builder for [`Mark`].
#[derive(Clone, Debug)]
pub struct MarkBuilder {
    id: MarkId,
    kind: MarkKind,
    z_index: i32,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    fill: Color,
    stroke: Color,
    stroke_width: f64,
    path: BezPath,
    spans: SmallVec<[TextSpan; 2]>,
    font_size: f64,
    anchor: TextAnchor,
    baseline: TextBaseline,
}

impl MarkBuilder {
    fn new(id: MarkId) -> Self {
        Self {
            id,
            kind: MarkKind::Rect,
            z_index: 0,
            x: 0.0,
            y: 0.0,
            w: 0.0,
            h: 0.0,
            fill: Color::BLACK,
            stroke: Color::TRANSPARENT,
            stroke_width: 0.0,
            path: BezPath::new(),
            spans: SmallVec::new(),
            font_size: 12.0,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Alphabetic,
        }
    }

    /// Builds a rectangle.
    pub fn rect(mut self) -> Self {
        self.kind = MarkKind::Rect;
        self
    }

    /// Builds a path.
    pub fn path(mut self) -> Self {
        self.kind = MarkKind::Path;
        self
    }

    /// Builds a text mark.
    pub fn text(mut self) -> Self {
        self.kind = MarkKind::Text;
        self
    }

    /// Sets the paint order.
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Sets x (rect left edge or text anchor x).
    pub fn x_const(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    /// Sets y (rect top edge or text anchor y).
    pub fn y_const(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    /// Sets the rect width.
    pub fn w_const(mut self, w: f64) -> Self {
        self.w = w;
        self
    }

    /// Sets the rect height.
    pub fn h_const(mut self, h: f64) -> Self {
        self.h = h;
        self
    }

    /// Sets the fill color.
    pub fn fill_const(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    /// Sets the stroke color.
    pub fn stroke_const(mut self, stroke: Color) -> Self {
        self.stroke = stroke;
        self
    }

    /// Sets the stroke width.
    pub fn stroke_width_const(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Sets the path geometry.
    pub fn path_const(mut self, path: BezPath) -> Self {
        self.path = path;
        self
    }

    /// Replaces the text with a single span.
    pub fn text_const(mut self, text: impl Into<String>) -> Self {
        self.spans.clear();
        self.spans.push(TextSpan::new(text));
        self
    }

    /// Appends a text span.
    pub fn span(mut self, span: TextSpan) -> Self {
        self.spans.push(span);
        self
    }

    /// Sets the font size.
    pub fn font_size_const(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the horizontal anchor.
    pub fn text_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the vertical baseline.
    pub fn text_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Finishes the mark.
    pub fn build(self) -> Mark {
        let payload = match self.kind {
            MarkKind::Rect => MarkPayload::Rect(RectPayload {
                rect: Rect::new(self.x, self.y, self.x + self.w, self.y + self.h),
                fill: self.fill,
            }),
            MarkKind::Path => MarkPayload::Path(PathPayload {
                path: self.path,
                fill: self.fill,
                stroke: self.stroke,
                stroke_width: self.stroke_width,
            }),
            MarkKind::Text => MarkPayload::Text(TextPayload {
                pos: Point::new(self.x, self.y),
                spans: self.spans,
                font_size: self.font_size,
                anchor: self.anchor,
                baseline: self.baseline,
                fill: self.fill,
            }),
        };
        Mark {
            id: self.id,
            z_index: self.z_index,
            payload,
        }
    }
}
