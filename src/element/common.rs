use egui::{Color32, Pos2, Vec2};

use crate::error::EditorError;

// Common constants for all element types
pub const MIN_ELEMENT_SIZE: f32 = 0.0;
pub const DUPLICATE_OFFSET: Vec2 = Vec2::new(20.0, 20.0);

/// Validates that an element's geometry can be placed on the canvas
pub fn validate_geometry(
    position: Pos2,
    size: Vec2,
    rotation: f32,
    opacity: f32,
) -> Result<(), EditorError> {
    if !(position.x.is_finite() && position.y.is_finite()) {
        return Err(EditorError::InvalidGeometry(format!(
            "position must be finite, got {:?}",
            position
        )));
    }
    if !(size.x.is_finite() && size.y.is_finite()) {
        return Err(EditorError::InvalidGeometry(format!(
            "size must be finite, got {:?}",
            size
        )));
    }
    if size.x < MIN_ELEMENT_SIZE || size.y < MIN_ELEMENT_SIZE {
        return Err(EditorError::InvalidGeometry(format!(
            "size must not be negative. Width: {}, Height: {}",
            size.x, size.y
        )));
    }
    if !rotation.is_finite() {
        return Err(EditorError::InvalidGeometry(format!(
            "rotation must be finite, got {}",
            rotation
        )));
    }
    if !(0.0..=1.0).contains(&opacity) {
        return Err(EditorError::InvalidGeometry(format!(
            "opacity must be within 0..=1, got {}",
            opacity
        )));
    }
    Ok(())
}

/// Wraps degrees into `[0, 360)`
pub fn normalize_rotation(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Parses a configured color: `#rgb`, `#rrggbb`, `#rrggbbaa` or `transparent`
pub fn parse_color(value: &str) -> Option<Color32> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("transparent") {
        return Some(Color32::TRANSPARENT);
    }
    Color32::from_hex(value).ok()
}
