//! Rows shown in the shape lists.

use crate::shapes::{ShapeKind, ShapeTrait};
use std::fmt;

/// One entry of a shape list.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeRow {
    /// 1-based position in the list.
    pub index: usize,
    pub id: Option<String>,
    pub kind: ShapeKind,
    /// Scaled width.
    pub width: f64,
    /// Scaled height.
    pub height: f64,
}

impl fmt::Display for ShapeRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} width: {} height: {}",
            self.index,
            self.kind,
            format_dimension(self.width),
            format_dimension(self.height)
        )
    }
}

/// Format a dimension without trailing zeros, rounded to two decimals.
pub fn format_dimension(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let mut text = format!("{rounded:.2}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

/// Build list rows for shapes in display order.
pub fn rows<'a, S, I>(shapes: I) -> Vec<ShapeRow>
where
    S: ShapeTrait + 'a,
    I: IntoIterator<Item = &'a S>,
{
    shapes
        .into_iter()
        .enumerate()
        .map(|(i, shape)| ShapeRow {
            index: i + 1,
            id: shape.id().map(str::to_owned),
            kind: shape.kind(),
            width: shape.scaled_width(),
            height: shape.scaled_height(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Rectangle, Shape};
    use kurbo::Point;

    #[test]
    fn test_rows_are_one_based() {
        let mut big: Shape = Rectangle::new(Some("b".into()), Point::ZERO, 60.0, 60.0).into();
        big.set_scale(1.5, 1.5);
        let shapes = vec![
            Shape::from(Rectangle::new(Some("a".into()), Point::ZERO, 60.0, 60.0)),
            big,
        ];
        let rows = rows(&shapes);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].index, 1);
        assert_eq!(rows[1].index, 2);
        assert_eq!(rows[1].id.as_deref(), Some("b"));
        assert_eq!(rows[1].to_string(), "2.rect width: 90 height: 90");
    }

    #[test]
    fn test_format_dimension() {
        assert_eq!(format_dimension(60.0), "60");
        assert_eq!(format_dimension(37.12), "37.12");
        assert_eq!(format_dimension(37.1049), "37.1");
        assert_eq!(format_dimension(0.0), "0");
    }
}
