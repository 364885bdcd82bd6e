use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;

mod common;
pub mod factory;
mod image;
mod patch;
mod shape;
mod text;

pub use common::{
    normalize_rotation, parse_color, validate_geometry, DUPLICATE_OFFSET, MIN_ELEMENT_SIZE,
};
pub use factory::ElementFactory;
pub use image::ImageProps;
pub use patch::ElementPatch;
pub use shape::{ShapeKind, ShapeProps};
pub use text::{FontStyle, FontWeight, TextAlign, TextProps};

use crate::id_generator::ElementId;

/// The four kinds of item that can be placed on the sticker canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Text,
    Shape,
    Image,
    Clipart,
}

impl ElementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Text => "text",
            ElementType::Shape => "shape",
            ElementType::Image => "image",
            ElementType::Clipart => "clipart",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variant-specific payload of a design element.
///
/// Each variant only carries the fields that make sense for it, so a text
/// element can never expose a stale `shape_type` and a shape never a `src`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    Text(TextProps),
    Shape(ShapeProps),
    Image(ImageProps),
    Clipart(ImageProps),
}

impl ElementKind {
    pub fn element_type(&self) -> ElementType {
        match self {
            ElementKind::Text(_) => ElementType::Text,
            ElementKind::Shape(_) => ElementType::Shape,
            ElementKind::Image(_) => ElementType::Image,
            ElementKind::Clipart(_) => ElementType::Clipart,
        }
    }

    /// Image source for `image` and `clipart` elements
    pub fn source(&self) -> Option<&str> {
        match self {
            ElementKind::Image(props) | ElementKind::Clipart(props) => Some(&props.src),
            _ => None,
        }
    }
}

/// A single item placed on the sticker canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignElement {
    id: ElementId,
    /// Top-left corner in canvas coordinates
    pub position: Pos2,
    pub size: Vec2,
    /// Degrees, kept in `[0, 360)`
    pub rotation: f32,
    /// `0.0..=1.0`
    pub opacity: f32,
    pub kind: ElementKind,
}

impl DesignElement {
    pub fn new(id: ElementId, position: Pos2, size: Vec2, kind: ElementKind) -> Self {
        Self {
            id,
            position,
            size,
            rotation: 0.0,
            opacity: 1.0,
            kind,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn element_type(&self) -> ElementType {
        self.kind.element_type()
    }

    /// Axis-aligned bounding box, before rotation
    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.position, self.size)
    }

    /// Pivot used for rotation
    pub fn center(&self) -> Pos2 {
        self.rect().center()
    }

    /// Copies every field under a new id, shifted by `offset`
    pub fn duplicate_with(&self, id: ElementId, offset: Vec2) -> Self {
        Self {
            id,
            position: self.position + offset,
            ..self.clone()
        }
    }

    pub fn as_text(&self) -> Option<&TextProps> {
        match &self.kind {
            ElementKind::Text(props) => Some(props),
            _ => None,
        }
    }

    pub fn as_shape(&self) -> Option<&ShapeProps> {
        match &self.kind {
            ElementKind::Shape(props) => Some(props),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageProps> {
        match &self.kind {
            ElementKind::Image(props) | ElementKind::Clipart(props) => Some(props),
            _ => None,
        }
    }

    /// Checks geometry invariants (finite coordinates, non-negative size, opacity range)
    pub fn validate(&self) -> Result<(), crate::error::EditorError> {
        validate_geometry(self.position, self.size, self.rotation, self.opacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id_generator::generate_id;
    use egui::{pos2, vec2, Color32};

    fn shape() -> DesignElement {
        DesignElement::new(
            generate_id(),
            pos2(10.0, 20.0),
            vec2(100.0, 50.0),
            ElementKind::Shape(ShapeProps::new(ShapeKind::Rectangle, Color32::RED)),
        )
    }

    #[test]
    fn test_rect_and_center() {
        let element = shape();
        assert_eq!(element.rect().min, pos2(10.0, 20.0));
        assert_eq!(element.rect().max, pos2(110.0, 70.0));
        assert_eq!(element.center(), pos2(60.0, 45.0));
    }

    #[test]
    fn test_duplicate_with_only_changes_id_and_position() {
        let element = shape();
        let new_id = generate_id();
        let copy = element.duplicate_with(new_id, DUPLICATE_OFFSET);

        assert_eq!(copy.id(), new_id);
        assert_eq!(copy.position, pos2(30.0, 40.0));
        assert_eq!(copy.size, element.size);
        assert_eq!(copy.kind, element.kind);
        assert_eq!(copy.opacity, element.opacity);
        assert_eq!(copy.rotation, element.rotation);
    }

    #[test]
    fn test_variant_accessors() {
        let element = shape();
        assert!(element.as_shape().is_some());
        assert!(element.as_text().is_none());
        assert!(element.as_image().is_none());
        assert_eq!(element.element_type(), ElementType::Shape);
        assert_eq!(element.kind.source(), None);
    }

    #[test]
    fn test_serialized_kind_is_tagged() {
        let element = shape();
        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["kind"]["type"], "shape");
        assert_eq!(json["kind"]["shape_type"], "rectangle");
    }
}
