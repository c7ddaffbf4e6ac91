//! Ordered collection of committed shapes.
//!
//! Insertion order is paint order (last added is topmost). All operations
//! are total: removing a missing id, undoing on an empty store, and
//! committing an empty erase batch are silent no-ops.

use crate::id::ShapeId;
use crate::model::{Path, Shape};

#[derive(Debug, Default, Clone)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finalize a captured path into a shape and append it.
    /// Returns the freshly assigned id.
    pub fn add(&mut self, path: Path) -> ShapeId {
        let shape = Shape::from_path(path);
        let id = shape.id;
        log::debug!("add shape {id} ({} points)", shape.path.points.len());
        self.shapes.push(shape);
        id
    }

    /// Remove a shape by id. No-op if absent.
    pub fn remove(&mut self, id: ShapeId) {
        self.shapes.retain(|s| s.id != id);
    }

    /// Pop the most recently added shape (single-level undo).
    /// No-op on an empty store.
    pub fn remove_last(&mut self) -> Option<ShapeId> {
        let popped = self.shapes.pop()?;
        log::debug!("undo: removed shape {}", popped.id);
        Some(popped.id)
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id == id)
    }

    /// Shapes in paint order (first = bottom).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Shape> {
        self.shapes.iter()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Mark a shape for the current erase sweep. No-op if absent.
    /// Returns whether the shape was newly marked.
    pub fn mark_pending_erase(&mut self, id: ShapeId) -> bool {
        match self.get_mut(id) {
            Some(shape) if !shape.pending_erase => {
                shape.pending_erase = true;
                true
            }
            _ => false,
        }
    }

    /// Unmark everything (erase gesture abandoned).
    pub fn clear_pending_erase(&mut self) {
        for shape in &mut self.shapes {
            shape.pending_erase = false;
        }
    }

    /// Remove every shape marked pending-erase as one atomic batch.
    /// Returns the removed ids.
    pub fn commit_erase(&mut self) -> Vec<ShapeId> {
        let removed: Vec<ShapeId> = self
            .shapes
            .iter()
            .filter(|s| s.pending_erase)
            .map(|s| s.id)
            .collect();
        if !removed.is_empty() {
            log::debug!("erase: removing {} shape(s)", removed.len());
            self.shapes.retain(|s| !s.pending_erase);
        }
        removed
    }

    /// Scale one shape's matrix in place. No-op if absent.
    pub fn rescale_shape(&mut self, id: ShapeId, factor: f32) {
        if let Some(shape) = self.get_mut(id) {
            shape.rescale(factor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, Point};
    use pretty_assertions::assert_eq;

    fn two_point_path(x: f32, y: f32) -> Path {
        let mut p = Path::begin(Color::BLACK, 5.0, Point::new(x, y));
        p.push(Point::new(x + 10.0, y + 10.0));
        p
    }

    #[test]
    fn add_assigns_unique_ids_in_order() {
        let mut store = ShapeStore::new();
        let a = store.add(two_point_path(0.0, 0.0));
        let b = store.add(two_point_path(5.0, 5.0));
        assert_ne!(a, b);
        let ids: Vec<_> = store.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut store = ShapeStore::new();
        let a = store.add(two_point_path(0.0, 0.0));
        store.remove(a);
        assert!(store.is_empty());
        // removing again must not panic or disturb anything
        store.remove(a);
        assert!(store.is_empty());
    }

    #[test]
    fn remove_last_on_empty_is_noop() {
        let mut store = ShapeStore::new();
        assert_eq!(store.remove_last(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn remove_last_pops_most_recent() {
        let mut store = ShapeStore::new();
        let a = store.add(two_point_path(0.0, 0.0));
        let b = store.add(two_point_path(5.0, 5.0));
        assert_eq!(store.remove_last(), Some(b));
        assert_eq!(store.len(), 1);
        assert!(store.get(a).is_some());
    }

    #[test]
    fn erase_batch_removes_only_marked() {
        let mut store = ShapeStore::new();
        let a = store.add(two_point_path(0.0, 0.0));
        let b = store.add(two_point_path(5.0, 5.0));
        let c = store.add(two_point_path(9.0, 9.0));

        assert!(store.mark_pending_erase(b));
        // marking twice reports false, stays marked
        assert!(!store.mark_pending_erase(b));

        let removed = store.commit_erase();
        assert_eq!(removed, vec![b]);
        assert!(store.get(a).is_some());
        assert!(store.get(c).is_some());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn clear_pending_abandons_sweep() {
        let mut store = ShapeStore::new();
        let a = store.add(two_point_path(0.0, 0.0));
        store.mark_pending_erase(a);
        store.clear_pending_erase();
        assert_eq!(store.commit_erase(), Vec::new());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn rescale_missing_is_noop() {
        let mut store = ShapeStore::new();
        store.rescale_shape(ShapeId::next(), 2.0);
        assert!(store.is_empty());
    }
}
