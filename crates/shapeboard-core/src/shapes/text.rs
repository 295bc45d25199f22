//! Text shape.

use super::{SerializableColor, ShapeId, ShapeKind, ShapeTrait};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// Font weight options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Measures the laid-out size of a run of text.
pub trait TextMeasure {
    fn measure(&self, content: &str, font_size: f64, weight: FontWeight) -> Size;
}

/// Approximate metrics used when no font backend is attached.
///
/// Every character advances by a fixed fraction of the font size and each
/// line is `font_size * line_height` tall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproxTextMeasure {
    pub advance: f64,
    pub line_height: f64,
    pub bold_factor: f64,
}

impl Default for ApproxTextMeasure {
    fn default() -> Self {
        Self {
            advance: 0.6,
            line_height: 1.16,
            bold_factor: 1.05,
        }
    }
}

impl TextMeasure for ApproxTextMeasure {
    fn measure(&self, content: &str, font_size: f64, weight: FontWeight) -> Size {
        let advance = match weight {
            FontWeight::Normal => font_size * self.advance,
            FontWeight::Bold => font_size * self.advance * self.bold_factor,
        };
        let mut lines = 0usize;
        let mut widest = 0usize;
        for line in content.split('\n') {
            lines += 1;
            widest = widest.max(line.chars().count());
        }
        Size::new(
            widest as f64 * advance,
            lines as f64 * font_size * self.line_height,
        )
    }
}

/// A text label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub(crate) id: Option<ShapeId>,
    /// Display name.
    pub name: String,
    /// Position (top-left corner of text bounding box).
    pub position: Point,
    /// The text content.
    pub content: String,
    /// Font size in pixels.
    pub font_size: f64,
    /// Font weight.
    pub font_weight: FontWeight,
    /// Fill color of the glyphs.
    pub fill: SerializableColor,
    /// Measured width, updated by [`Text::measure`].
    width: f64,
    /// Measured height, updated by [`Text::measure`].
    height: f64,
    #[serde(default = "unit_scale")]
    pub scale_x: f64,
    #[serde(default = "unit_scale")]
    pub scale_y: f64,
}

fn unit_scale() -> f64 {
    1.0
}

impl Text {
    /// Default font size.
    pub const DEFAULT_FONT_SIZE: f64 = 40.0;

    /// Create a new text shape. Its size is zero until measured.
    pub fn new(id: Option<ShapeId>, content: impl Into<String>) -> Self {
        Self {
            id,
            name: "Text".to_string(),
            position: Point::ZERO,
            content: content.into(),
            font_size: Self::DEFAULT_FONT_SIZE,
            font_weight: FontWeight::default(),
            fill: SerializableColor::black(),
            width: 0.0,
            height: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_font_weight(mut self, font_weight: FontWeight) -> Self {
        self.font_weight = font_weight;
        self
    }

    /// Recompute the intrinsic size from the current content and font.
    pub fn measure(&mut self, metrics: &dyn TextMeasure) {
        let size = metrics.measure(&self.content, self.font_size, self.font_weight);
        self.width = size.width;
        self.height = size.height;
    }

    /// Builder form of [`Text::measure`].
    pub fn measured(mut self, metrics: &dyn TextMeasure) -> Self {
        self.measure(metrics);
        self
    }
}

impl ShapeTrait for Text {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Text
    }

    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    fn scale(&self) -> (f64, f64) {
        (self.scale_x, self.scale_y)
    }

    fn set_scale(&mut self, scale_x: f64, scale_y: f64) {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
    }
}
