use egui::{Color32, Pos2, Vec2};
use log::debug;
use serde::{Deserialize, Serialize};

use super::common::normalize_rotation;
use super::{DesignElement, ElementKind, FontStyle, FontWeight, ShapeKind, TextAlign};

/// Partial update of a design element.
///
/// Unset fields leave the element untouched. Variant-specific fields are
/// ignored when they don't apply to the element's type, and non-finite
/// numbers (e.g. from an emptied numeric input) are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementPatch {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub rotation: Option<f32>,
    pub opacity: Option<f32>,

    pub text: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<f32>,
    pub font_weight: Option<FontWeight>,
    pub font_style: Option<FontStyle>,
    pub text_align: Option<TextAlign>,

    /// Text color or shape fill
    pub fill: Option<Color32>,
    pub stroke: Option<Color32>,
    pub stroke_width: Option<f32>,
    pub shape_type: Option<ShapeKind>,

    pub src: Option<String>,
    pub original_size: Option<Vec2>,
}

fn finite(value: Option<f32>) -> Option<f32> {
    value.filter(|v| v.is_finite())
}

impl ElementPatch {
    pub fn position(pos: Pos2) -> Self {
        Self {
            x: Some(pos.x),
            y: Some(pos.y),
            ..Default::default()
        }
    }

    pub fn size(size: Vec2) -> Self {
        Self {
            width: Some(size.x),
            height: Some(size.y),
            ..Default::default()
        }
    }

    pub fn source(src: impl Into<String>) -> Self {
        Self {
            src: Some(src.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merges this patch into `element`, returning whether anything changed
    pub fn apply_to(&self, element: &mut DesignElement) -> bool {
        let before = element.clone();

        if let Some(x) = finite(self.x) {
            element.position.x = x;
        }
        if let Some(y) = finite(self.y) {
            element.position.y = y;
        }
        if let Some(width) = finite(self.width) {
            element.size.x = width.max(0.0);
        }
        if let Some(height) = finite(self.height) {
            element.size.y = height.max(0.0);
        }
        if let Some(rotation) = finite(self.rotation) {
            element.rotation = normalize_rotation(rotation);
        }
        if let Some(opacity) = finite(self.opacity) {
            element.opacity = opacity.clamp(0.0, 1.0);
        }

        match &mut element.kind {
            ElementKind::Text(props) => {
                if let Some(text) = &self.text {
                    props.text = text.clone();
                }
                if let Some(family) = &self.font_family {
                    props.font_family = family.clone();
                }
                if let Some(size) = finite(self.font_size) {
                    props.font_size = size.max(1.0);
                }
                if let Some(weight) = self.font_weight {
                    props.font_weight = weight;
                }
                if let Some(style) = self.font_style {
                    props.font_style = style;
                }
                if let Some(align) = self.text_align {
                    props.text_align = align;
                }
                if let Some(fill) = self.fill {
                    props.fill = fill;
                }
            }
            ElementKind::Shape(props) => {
                if let Some(shape_type) = self.shape_type {
                    props.shape_type = shape_type;
                }
                if let Some(fill) = self.fill {
                    props.fill = fill;
                }
                if let Some(stroke) = self.stroke {
                    props.stroke = Some(stroke);
                }
                if let Some(width) = finite(self.stroke_width) {
                    props.stroke_width = width.max(0.0);
                }
            }
            ElementKind::Image(props) | ElementKind::Clipart(props) => {
                match &self.src {
                    Some(src) if !src.trim().is_empty() => props.src = src.clone(),
                    Some(_) => debug!("Ignoring empty source for element {}", before.id()),
                    None => {}
                }
                if let Some(original) = self.original_size {
                    props.original_size = Some(original);
                }
            }
        }

        *element != before
    }
}
