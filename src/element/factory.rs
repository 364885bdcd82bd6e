//! Construction of new design elements with type-appropriate defaults.
//!
//! Every element is placed around the midpoint of the active canvas; caller
//! supplied overrides are merged on top and take precedence.

use egui::{pos2, Pos2, Vec2};
use log::{error, info};

use super::text::DEFAULT_TEXT;
use super::{
    DesignElement, ElementKind, ElementPatch, ElementType, ImageProps, ShapeKind, ShapeProps,
    TextProps,
};
use crate::clipart::ClipartItem;
use crate::config::StickerConfig;
use crate::error::EditorError;
use crate::id_generator::generate_id;

pub const TEXT_DEFAULT_SIZE: Vec2 = Vec2::new(100.0, 30.0);
pub const SHAPE_DEFAULT_SIZE: Vec2 = Vec2::new(100.0, 50.0);
pub const IMAGE_DEFAULT_SIZE: Vec2 = Vec2::new(100.0, 100.0);

/// Creates elements using the defaults of a [`StickerConfig`]
pub struct ElementFactory<'a> {
    config: &'a StickerConfig,
}

impl<'a> ElementFactory<'a> {
    pub fn new(config: &'a StickerConfig) -> Self {
        Self { config }
    }

    /// Builds a new element of `element_type` centered on `canvas_center`.
    ///
    /// `image` and `clipart` elements need a non-empty `src` in `overrides`.
    pub fn create(
        &self,
        element_type: ElementType,
        overrides: &ElementPatch,
        canvas_center: Pos2,
    ) -> Result<DesignElement, EditorError> {
        let (size, kind) = match element_type {
            ElementType::Text => (
                TEXT_DEFAULT_SIZE,
                ElementKind::Text(TextProps::new(
                    DEFAULT_TEXT,
                    self.config.default_font_family(),
                    self.config.text_color(),
                )),
            ),
            ElementType::Shape => (
                SHAPE_DEFAULT_SIZE,
                ElementKind::Shape(ShapeProps::new(
                    ShapeKind::Rectangle,
                    self.config.shape_fill(),
                )),
            ),
            ElementType::Image | ElementType::Clipart => {
                let src = match overrides.src.as_deref().map(str::trim) {
                    Some(src) if !src.is_empty() => src.to_owned(),
                    _ => {
                        error!("❌ Cannot create {} element without a source", element_type);
                        return Err(EditorError::MissingSource { element_type });
                    }
                };
                let props = ImageProps::new(src);
                let kind = if element_type == ElementType::Image {
                    ElementKind::Image(props)
                } else {
                    ElementKind::Clipart(props)
                };
                (IMAGE_DEFAULT_SIZE, kind)
            }
        };

        let position = pos2(canvas_center.x - size.x / 2.0, canvas_center.y - size.y / 2.0);
        let mut element = DesignElement::new(generate_id(), position, size, kind);
        overrides.apply_to(&mut element);
        element.validate()?;

        info!(
            "✅ Created {} element {} at {:?}",
            element_type,
            element.id(),
            element.position
        );
        Ok(element)
    }

    /// Clipart element for a catalog item, carrying the item's intrinsic size
    pub fn create_clipart(
        &self,
        item: &ClipartItem,
        canvas_center: Pos2,
    ) -> Result<DesignElement, EditorError> {
        let overrides = ElementPatch {
            src: Some(item.src.clone()),
            width: Some(IMAGE_DEFAULT_SIZE.x),
            height: Some(IMAGE_DEFAULT_SIZE.y),
            original_size: item.original_size(),
            ..Default::default()
        };
        self.create(ElementType::Clipart, &overrides, canvas_center)
    }
}
