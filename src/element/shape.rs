use egui::Color32;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Circle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 2] = [ShapeKind::Rectangle, ShapeKind::Circle];

    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Circle => "Circle",
        }
    }
}

/// Fields only meaningful for `shape` elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeProps {
    pub shape_type: ShapeKind,
    pub fill: Color32,
    /// Outline color; no outline is drawn when unset
    pub stroke: Option<Color32>,
    pub stroke_width: f32,
}

impl ShapeProps {
    pub fn new(shape_type: ShapeKind, fill: Color32) -> Self {
        Self {
            shape_type,
            fill,
            stroke: None,
            stroke_width: 0.0,
        }
    }

    /// Outline to paint, if both a color and a positive width are set
    pub fn outline(&self) -> Option<(Color32, f32)> {
        match self.stroke {
            Some(color) if self.stroke_width > 0.0 => Some((color, self.stroke_width)),
            _ => None,
        }
    }
}
