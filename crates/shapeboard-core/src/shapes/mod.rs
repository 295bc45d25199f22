//! Shape definitions for the canvas.

mod rectangle;
mod text;

pub use rectangle::Rectangle;
pub use text::{ApproxTextMeasure, FontWeight, Text, TextMeasure};

use kurbo::{Point, Rect, Size};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from RGB channels and a CSS-style alpha in `0.0..=1.0`.
    pub fn rgba(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(r, g, b, a)
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Whether the color is fully transparent.
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Identifier assigned to a shape at creation time.
pub type ShapeId = String;

/// Type tag of a shape, as shown in the shape lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Text,
    Rect,
}

impl ShapeKind {
    /// The short tag used for display.
    pub fn tag(&self) -> &'static str {
        match self {
            ShapeKind::Text => "text",
            ShapeKind::Rect => "rect",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Get the identifier, if one was assigned.
    fn id(&self) -> Option<&str>;

    /// Get the display name.
    fn name(&self) -> &str;

    /// Get the type tag.
    fn kind(&self) -> ShapeKind;

    /// Top-left corner in canvas coordinates.
    fn position(&self) -> Point;

    /// Move the top-left corner.
    fn set_position(&mut self, position: Point);

    /// Unscaled size.
    fn size(&self) -> Size;

    /// Horizontal and vertical scale factors.
    fn scale(&self) -> (f64, f64);

    /// Set the scale factors.
    fn set_scale(&mut self, scale_x: f64, scale_y: f64);

    /// Width after applying the horizontal scale factor.
    fn scaled_width(&self) -> f64 {
        self.size().width * self.scale().0.abs()
    }

    /// Height after applying the vertical scale factor.
    fn scaled_height(&self) -> f64 {
        self.size().height * self.scale().1.abs()
    }

    /// Bounding box in canvas coordinates, scaled from the top-left corner.
    fn bounds(&self) -> Rect {
        Rect::from_origin_size(
            self.position(),
            Size::new(self.scaled_width(), self.scaled_height()),
        )
    }
}

/// Enum wrapper for all shape types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Text(Text),
    Rectangle(Rectangle),
}

impl Shape {
    fn inner(&self) -> &dyn ShapeTrait {
        match self {
            Shape::Text(s) => s,
            Shape::Rectangle(s) => s,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn ShapeTrait {
        match self {
            Shape::Text(s) => s,
            Shape::Rectangle(s) => s,
        }
    }

    /// Whether this shape carries the given identifier.
    pub fn has_id(&self, id: &str) -> bool {
        self.id() == Some(id)
    }
}

impl ShapeTrait for Shape {
    fn id(&self) -> Option<&str> {
        self.inner().id()
    }

    fn name(&self) -> &str {
        self.inner().name()
    }

    fn kind(&self) -> ShapeKind {
        self.inner().kind()
    }

    fn position(&self) -> Point {
        self.inner().position()
    }

    fn set_position(&mut self, position: Point) {
        self.inner_mut().set_position(position);
    }

    fn size(&self) -> Size {
        self.inner().size()
    }

    fn scale(&self) -> (f64, f64) {
        self.inner().scale()
    }

    fn set_scale(&mut self, scale_x: f64, scale_y: f64) {
        self.inner_mut().set_scale(scale_x, scale_y);
    }
}

impl From<Text> for Shape {
    fn from(text: Text) -> Self {
        Shape::Text(text)
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_alpha_conversion() {
        let color = SerializableColor::rgba(248, 180, 26, 0.6);
        assert_eq!(color, SerializableColor::new(248, 180, 26, 153));
        assert!(SerializableColor::transparent().is_transparent());
    }

    #[test]
    fn test_peniko_roundtrip() {
        let color = SerializableColor::new(10, 20, 30, 40);
        let peniko: Color = color.into();
        assert_eq!(SerializableColor::from(peniko), color);
    }

    #[test]
    fn test_enum_dispatch() {
        let mut shape: Shape = Rectangle::new(Some("r".into()), Point::new(5.0, 5.0), 10.0, 20.0).into();
        assert_eq!(shape.kind(), ShapeKind::Rect);
        assert!(shape.has_id("r"));
        shape.set_scale(2.0, 0.5);
        assert!((shape.scaled_width() - 20.0).abs() < f64::EPSILON);
        assert!((shape.scaled_height() - 10.0).abs() < f64::EPSILON);
        let bounds = shape.bounds();
        assert!((bounds.x1 - 25.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_default_display_names() {
        let text: Shape = Text::new(None, "label").into();
        let rect: Shape = Rectangle::new(None, Point::ZERO, 1.0, 1.0).into();
        assert_eq!(text.name(), "Text");
        assert_eq!(rect.name(), "Rectangle");
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(ShapeKind::Text.to_string(), "text");
        assert_eq!(ShapeKind::Rect.to_string(), "rect");
    }
}
