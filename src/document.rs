use im::Vector;
use log::info;

use crate::element::{DesignElement, ElementPatch, DUPLICATE_OFFSET};
use crate::error::EditorError;
use crate::id_generator::{generate_id, ElementId};

/// Ordered element sequence; insertion order is paint order (last = topmost).
///
/// Backed by a persistent vector so history snapshots share structure
/// instead of deep-copying every element.
pub type ElementSequence = Vector<DesignElement>;

/// Direction for one-step z-order changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderDirection {
    /// One position toward the top
    Forward,
    /// One position toward the bottom
    Backward,
}

/// The design element store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    elements: ElementSequence,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &ElementSequence {
        &self.elements
    }

    /// Cheap copy of the current sequence
    pub fn snapshot(&self) -> ElementSequence {
        self.elements.clone()
    }

    pub fn restore(&mut self, elements: ElementSequence) {
        self.elements = elements;
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &DesignElement> + '_ {
        self.elements.iter()
    }

    pub fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|element| element.id() == id)
    }

    pub fn find_element_by_id(&self, id: ElementId) -> Option<&DesignElement> {
        self.elements.iter().find(|element| element.id() == id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.index_of(id).is_some()
    }

    /// Appends `element` on top of the design
    pub fn add(&mut self, element: DesignElement) -> Result<(), EditorError> {
        element.validate()?;
        if self.contains(element.id()) {
            return Err(EditorError::DuplicateId(element.id()));
        }
        info!("➕ Adding {} element {}", element.element_type(), element.id());
        self.elements.push_back(element);
        Ok(())
    }

    /// Merges `patch` into the element with `id`; ordering is untouched.
    ///
    /// Returns false when the id is unknown or nothing changed.
    pub fn update(&mut self, id: ElementId, patch: &ElementPatch) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let Some(element) = self.elements.get_mut(index) else {
            return false;
        };
        let changed = patch.apply_to(element);
        if changed {
            info!("✏️ Updated element {}", id);
        }
        changed
    }

    /// Removes the element with `id`, if present
    pub fn remove(&mut self, id: ElementId) -> Option<DesignElement> {
        let index = self.index_of(id)?;
        let removed = self.elements.remove(index);
        info!("🗑️ Removed element {}", id);
        Some(removed)
    }

    /// Appends a copy of `id` under a fresh id, shifted by [`DUPLICATE_OFFSET`]
    pub fn duplicate(&mut self, id: ElementId) -> Result<ElementId, EditorError> {
        let source = self
            .find_element_by_id(id)
            .ok_or(EditorError::ElementNotFound(id))?;
        let copy = source.duplicate_with(generate_id(), DUPLICATE_OFFSET);
        let new_id = copy.id();
        self.elements.push_back(copy);
        info!("📄 Duplicated element {} as {}", id, new_id);
        Ok(new_id)
    }

    /// Swaps the element with its neighbour in `direction`.
    ///
    /// No-op for unknown ids and at the respective end of the sequence.
    pub fn reorder(&mut self, id: ElementId, direction: ReorderDirection) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let target = match direction {
            ReorderDirection::Forward if index + 1 < self.elements.len() => index + 1,
            ReorderDirection::Backward if index > 0 => index - 1,
            _ => return false,
        };
        self.elements.swap(index, target);
        info!("↕️ Moved element {} from {} to {}", id, index, target);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ElementKind, ShapeKind, ShapeProps};
    use egui::{pos2, vec2, Color32};

    fn shape_at(x: f32) -> DesignElement {
        DesignElement::new(
            generate_id(),
            pos2(x, 0.0),
            vec2(10.0, 10.0),
            ElementKind::Shape(ShapeProps::new(ShapeKind::Rectangle, Color32::BLUE)),
        )
    }

    fn ids(doc: &Document) -> Vec<ElementId> {
        doc.iter().map(|e| e.id()).collect()
    }

    #[test]
    fn test_add_appends_on_top() {
        let mut doc = Document::new();
        let a = shape_at(0.0);
        let b = shape_at(1.0);
        let (a_id, b_id) = (a.id(), b.id());
        doc.add(a).unwrap();
        doc.add(b).unwrap();
        assert_eq!(ids(&doc), vec![a_id, b_id]);
    }

    #[test]
    fn test_add_rejects_invalid_geometry_and_duplicate_ids() {
        let mut doc = Document::new();
        let mut bad = shape_at(0.0);
        bad.size = vec2(-5.0, 10.0);
        assert!(matches!(doc.add(bad), Err(EditorError::InvalidGeometry(_))));

        let element = shape_at(0.0);
        doc.add(element.clone()).unwrap();
        assert!(matches!(doc.add(element), Err(EditorError::DuplicateId(_))));
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_update_keeps_order_and_ignores_unknown_ids() {
        let mut doc = Document::new();
        let a = shape_at(0.0);
        let b = shape_at(1.0);
        let (a_id, b_id) = (a.id(), b.id());
        doc.add(a).unwrap();
        doc.add(b).unwrap();

        assert!(doc.update(a_id, &ElementPatch::position(pos2(50.0, 60.0))));
        assert_eq!(ids(&doc), vec![a_id, b_id]);
        assert_eq!(doc.find_element_by_id(a_id).unwrap().position, pos2(50.0, 60.0));

        assert!(!doc.update(generate_id(), &ElementPatch::position(pos2(1.0, 1.0))));
    }

    #[test]
    fn test_remove() {
        let mut doc = Document::new();
        let a = shape_at(0.0);
        let a_id = a.id();
        doc.add(a).unwrap();

        assert!(doc.remove(generate_id()).is_none());
        assert_eq!(doc.remove(a_id).map(|e| e.id()), Some(a_id));
        assert!(doc.is_empty());
    }

    #[test]
    fn test_duplicate_is_topmost_and_offset() {
        let mut doc = Document::new();
        let a = shape_at(5.0);
        let b = shape_at(7.0);
        let a_id = a.id();
        doc.add(a).unwrap();
        doc.add(b).unwrap();

        let copy_id = doc.duplicate(a_id).unwrap();
        let copy = doc.elements().last().unwrap();
        let source = doc.find_element_by_id(a_id).unwrap();

        assert_eq!(copy.id(), copy_id);
        assert_eq!(copy.position, source.position + vec2(20.0, 20.0));
        assert_eq!(copy.size, source.size);
        assert_eq!(copy.kind, source.kind);

        assert!(matches!(
            doc.duplicate(generate_id()),
            Err(EditorError::ElementNotFound(_))
        ));
    }

    #[test]
    fn test_reorder_swaps_neighbours() {
        let mut doc = Document::new();
        let elements: Vec<_> = (0..3).map(|i| shape_at(i as f32)).collect();
        let order: Vec<_> = elements.iter().map(|e| e.id()).collect();
        for element in elements {
            doc.add(element).unwrap();
        }

        assert!(doc.reorder(order[0], ReorderDirection::Forward));
        assert_eq!(ids(&doc), vec![order[1], order[0], order[2]]);

        assert!(doc.reorder(order[2], ReorderDirection::Backward));
        assert_eq!(ids(&doc), vec![order[1], order[2], order[0]]);
    }

    #[test]
    fn test_reorder_at_boundaries_is_noop() {
        let mut doc = Document::new();
        let a = shape_at(0.0);
        let b = shape_at(1.0);
        let (a_id, b_id) = (a.id(), b.id());
        doc.add(a).unwrap();
        doc.add(b).unwrap();

        assert!(!doc.reorder(b_id, ReorderDirection::Forward));
        assert!(!doc.reorder(a_id, ReorderDirection::Backward));
        assert!(!doc.reorder(generate_id(), ReorderDirection::Forward));
        assert_eq!(ids(&doc), vec![a_id, b_id]);
    }
}
