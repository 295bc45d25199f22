//! Side panel listing all shapes and the selected ones.

use shapeboard_core::{ShapeRegistry, ShapeRow, rows};
use std::fmt;

/// Rows of both shape lists, captured from a registry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapePanel {
    pub all: Vec<ShapeRow>,
    pub selected: Vec<ShapeRow>,
}

impl ShapePanel {
    pub fn from_registry(registry: &ShapeRegistry) -> Self {
        let state = registry.state();
        Self {
            all: rows(state.all_shapes()),
            selected: rows(state.selected_shapes()),
        }
    }
}

impl fmt::Display for ShapePanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current shapes:")?;
        for row in &self.all {
            writeln!(f, "  {row}")?;
        }
        writeln!(f, "Selected shapes:")?;
        for row in &self.selected {
            writeln!(f, "  {row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use pretty_assertions::assert_eq;
    use shapeboard_core::shapes::{Rectangle, Text};
    use shapeboard_core::{CanvasEvent, EventBus, Shape, ShapeKind};

    fn registry_with_square() -> ShapeRegistry {
        let mut bus = EventBus::new();
        let mut registry = ShapeRegistry::new();
        registry.bind(&mut bus).unwrap();
        let square = Rectangle::new(Some("r".into()), Point::ZERO, 60.0, 60.0);
        bus.emit(&CanvasEvent::ObjectAdded(square.clone().into()));
        bus.emit(&CanvasEvent::SelectionCreated(vec![square.into()]));
        registry
    }

    #[test]
    fn test_panel_text() {
        let panel = ShapePanel::from_registry(&registry_with_square());
        assert_eq!(panel.all[0].kind, ShapeKind::Rect);
        assert_eq!(
            panel.to_string(),
            "Current shapes:\n  1.rect width: 60 height: 60\nSelected shapes:\n  1.rect width: 60 height: 60\n"
        );
    }

    #[test]
    fn test_panel_follows_selection_changes() {
        let mut bus = EventBus::new();
        let mut registry = ShapeRegistry::new();
        registry.bind(&mut bus).unwrap();
        let text: Shape = Text::new(Some("t".into()), "").into();
        let square: Shape = Rectangle::new(Some("r".into()), Point::ZERO, 60.0, 60.0).into();
        bus.emit(&CanvasEvent::ObjectAdded(text));
        bus.emit(&CanvasEvent::ObjectAdded(square.clone()));
        bus.emit(&CanvasEvent::SelectionCreated(vec![square]));

        let panel = ShapePanel::from_registry(&registry);
        assert_eq!(
            panel.to_string(),
            "Current shapes:\n  1.text width: 0 height: 0\n  2.rect width: 60 height: 60\nSelected shapes:\n  1.rect width: 60 height: 60\n"
        );

        bus.emit(&CanvasEvent::SelectionCleared);
        assert_eq!(
            ShapePanel::from_registry(&registry).to_string(),
            "Current shapes:\n  1.text width: 0 height: 0\n  2.rect width: 60 height: 60\nSelected shapes:\n"
        );
    }
}
