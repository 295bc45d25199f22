//! Identifier generation for new shapes.

use crate::shapes::ShapeId;
use uuid::Uuid;

/// Source of process-unique shape identifiers.
pub trait IdGenerator {
    fn next_id(&mut self) -> ShapeId;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> ShapeId {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic `<prefix><n>` identifiers, counting from 1.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("shape-")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> ShapeId {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

impl<F> IdGenerator for F
where
    F: FnMut() -> ShapeId,
{
    fn next_id(&mut self) -> ShapeId {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIds::new("a");
        assert_eq!(ids.next_id(), "a1");
        assert_eq!(ids.next_id(), "a2");
    }

    #[test]
    fn test_uuid_ids_are_unique() {
        let mut ids = UuidIds;
        let first = ids.next_id();
        let second = ids.next_id();
        assert_ne!(first, second);
        assert!(Uuid::parse_str(&first).is_ok());
    }

    #[test]
    fn test_closure_generator() {
        let mut n = 0;
        let mut ids = move || {
            n += 1;
            format!("c{n}")
        };
        assert_eq!(IdGenerator::next_id(&mut ids), "c1");
    }
}
