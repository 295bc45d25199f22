//! Rectangle shape.

use super::{SerializableColor, ShapeId, ShapeKind, ShapeTrait};
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// A filled rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub(crate) id: Option<ShapeId>,
    /// Display name.
    pub name: String,
    /// Top-left corner position.
    pub position: Point,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
    /// Fill color.
    pub fill: SerializableColor,
    #[serde(default = "unit_scale")]
    pub scale_x: f64,
    #[serde(default = "unit_scale")]
    pub scale_y: f64,
}

fn unit_scale() -> f64 {
    1.0
}

impl Rectangle {
    /// Create a new rectangle with a black fill.
    pub fn new(id: Option<ShapeId>, position: Point, width: f64, height: f64) -> Self {
        Self {
            id,
            name: "Rectangle".to_string(),
            position,
            width,
            height,
            fill: SerializableColor::black(),
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    /// Set the fill color.
    pub fn with_fill(mut self, fill: SerializableColor) -> Self {
        self.fill = fill;
        self
    }

    /// Get the unscaled rectangle as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }
}

impl ShapeTrait for Rectangle {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Rect
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
