use egui::{Pos2, Rect, Vec2};

use crate::element::DesignElement;
use crate::id_generator::ElementId;

/// Rotates `point` by `degrees` around `pivot`
pub fn rotate_point(point: Pos2, pivot: Pos2, degrees: f32) -> Pos2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let offset = point - pivot;
    pivot + Vec2::new(offset.x * cos - offset.y * sin, offset.x * sin + offset.y * cos)
}

/// Corners of the element's rotated bounding box, clockwise from top-left
pub fn rotated_corners(rect: Rect, degrees: f32) -> [Pos2; 4] {
    let pivot = rect.center();
    [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
    ]
    .map(|corner| rotate_point(corner, pivot, degrees))
}

/// Whether `pos` falls inside the element's bounding box, honoring rotation
pub fn element_contains(element: &DesignElement, pos: Pos2) -> bool {
    let local = if element.rotation == 0.0 {
        pos
    } else {
        rotate_point(pos, element.center(), -element.rotation)
    };
    element.rect().contains(local)
}

/// Topmost element under `pos`; later elements paint on top
pub fn hit_test<'a>(
    elements: impl DoubleEndedIterator<Item = &'a DesignElement>,
    pos: Pos2,
) -> Option<ElementId> {
    elements
        .rev()
        .find(|element| element_contains(element, pos))
        .map(|element| element.id())
}
