use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{ProductOptions, CUSTOM_SIZE_NAME};
use crate::element::DesignElement;

pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 1000;
pub const DEFAULT_QUANTITY: u32 = 10;
pub const MIN_CUSTOM_CM: f32 = 1.0;
pub const MAX_CUSTOM_CM: f32 = 50.0;

/// Cut shape of the printed sticker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StickerShape {
    #[default]
    DieCut,
    Rectangle,
    Circle,
    Square,
}

impl fmt::Display for StickerShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            StickerShape::DieCut => "die-cut",
            StickerShape::Rectangle => "rectangle",
            StickerShape::Circle => "circle",
            StickerShape::Square => "square",
        };
        f.write_str(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickerSize {
    pub name: Option<String>,
    pub width_cm: f32,
    pub height_cm: f32,
}

/// Product configuration chosen for the current design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickerFinalDetails {
    pub size: StickerSize,
    pub shape: StickerShape,
    /// Material `value` from the configured list
    pub material: String,
    pub quantity: u32,
    pub estimated_price: f64,
}

impl StickerFinalDetails {
    /// First configured size, shape and material with the default quantity.
    ///
    /// The price is left at zero; the owner recomputes it right away.
    pub fn initial(options: &ProductOptions) -> Self {
        let size = options
            .sizes
            .first()
            .map(|size| StickerSize {
                name: Some(size.name.clone()),
                width_cm: size.width_cm,
                height_cm: size.height_cm,
            })
            .unwrap_or(StickerSize {
                name: None,
                width_cm: 5.0,
                height_cm: 5.0,
            });

        Self {
            size,
            shape: options.shapes.first().map(|s| s.value).unwrap_or_default(),
            material: options
                .materials
                .first()
                .map(|m| m.value.clone())
                .unwrap_or_default(),
            quantity: DEFAULT_QUANTITY,
            estimated_price: 0.0,
        }
    }

    pub fn is_custom_size(&self) -> bool {
        self.size.name.as_deref() == Some(CUSTOM_SIZE_NAME)
    }

    pub fn formatted_price(&self) -> String {
        format!("${:.2}", self.estimated_price)
    }
}

/// Partial change to [`StickerFinalDetails`], merged by a single entry point
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailsPatch {
    pub size_name: Option<String>,
    pub custom_width_cm: Option<f32>,
    pub custom_height_cm: Option<f32>,
    pub shape: Option<StickerShape>,
    pub material: Option<String>,
    pub quantity: Option<u32>,
}

impl DetailsPatch {
    /// Merges the patch, returning whether a price-relevant or visible field changed
    pub fn apply_to(&self, details: &mut StickerFinalDetails, options: &ProductOptions) -> bool {
        let before = details.clone();

        if let Some(name) = &self.size_name {
            match options.size(name) {
                Some(size) => {
                    details.size = StickerSize {
                        name: Some(size.name.clone()),
                        width_cm: size.width_cm,
                        height_cm: size.height_cm,
                    };
                }
                None => warn!("Ignoring unknown sticker size {:?}", name),
            }
        }

        if details.is_custom_size() {
            if let Some(width) = self.custom_width_cm.filter(|w| w.is_finite()) {
                details.size.width_cm = width.clamp(MIN_CUSTOM_CM, MAX_CUSTOM_CM);
            }
            if let Some(height) = self.custom_height_cm.filter(|h| h.is_finite()) {
                details.size.height_cm = height.clamp(MIN_CUSTOM_CM, MAX_CUSTOM_CM);
            }
        }

        if let Some(shape) = self.shape {
            details.shape = shape;
        }
        if let Some(material) = &self.material {
            details.material = material.clone();
        }
        if let Some(quantity) = self.quantity {
            details.quantity = quantity.clamp(MIN_QUANTITY, MAX_QUANTITY);
        }

        *details != before
    }
}

/// Design and product options handed over when the customer adds to cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub elements: Vec<DesignElement>,
    pub details: StickerFinalDetails,
}

impl CartEntry {
    pub fn total_price(&self) -> f64 {
        self.details.estimated_price
    }
}
