//! Static product and editor configuration.
//!
//! The catalog is read-only for the editor: the pricing calculator, the
//! element factory defaults and the properties panel all consume it. A JSON
//! file can replace the built-in catalog.

use egui::{Color32, Vec2};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::clipart::{generic_clipart, ClipartCategory};
use crate::element::parse_color;
use crate::product::StickerShape;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "STICKER_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontOption {
    pub name: String,
    /// CSS-style font stack
    pub value: String,
    pub generic_family: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeOption {
    pub name: String,
    pub value: StickerShape,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialOption {
    pub name: String,
    pub value: String,
    pub description: String,
    pub price_factor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeOption {
    pub name: String,
    #[serde(rename = "widthCM")]
    pub width_cm: f32,
    #[serde(rename = "heightCM")]
    pub height_cm: f32,
    pub price_factor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOptions {
    pub shapes: Vec<ShapeOption>,
    pub materials: Vec<MaterialOption>,
    pub sizes: Vec<SizeOption>,
}

impl ProductOptions {
    pub fn size(&self, name: &str) -> Option<&SizeOption> {
        self.sizes.iter().find(|size| size.name == name)
    }

    pub fn material(&self, value: &str) -> Option<&MaterialOption> {
        self.materials.iter().find(|material| material.value == value)
    }
}

impl Default for ProductOptions {
    fn default() -> Self {
        let material = |name: &str, value: &str, description: &str, price_factor| MaterialOption {
            name: name.into(),
            value: value.into(),
            description: description.into(),
            price_factor,
        };
        let size = |name: &str, width_cm, height_cm, price_factor| SizeOption {
            name: name.into(),
            width_cm,
            height_cm,
            price_factor,
        };

        Self {
            shapes: vec![
                ShapeOption { name: "Die-Cut (Follows Design)".into(), value: StickerShape::DieCut },
                ShapeOption { name: "Rectangle".into(), value: StickerShape::Rectangle },
                ShapeOption { name: "Circle".into(), value: StickerShape::Circle },
                ShapeOption { name: "Square".into(), value: StickerShape::Square },
            ],
            materials: vec![
                material("Glossy Vinyl", "vinyl-glossy", "Shiny, durable, waterproof.", 1.2),
                material("Matte Vinyl", "vinyl-matte", "Smooth, non-glare, durable.", 1.1),
                material("Paper", "paper", "Eco-friendly, for indoor use.", 0.8),
            ],
            sizes: vec![
                size("Small (5x5 cm)", 5.0, 5.0, 1.0),
                size("Medium (8x8 cm)", 8.0, 8.0, 1.5),
                size("Large (12x12 cm)", 12.0, 12.0, 2.2),
                size(CUSTOM_SIZE_NAME, 10.0, 10.0, 1.8),
            ],
        }
    }
}

/// Size entry whose dimensions the customer may edit
pub const CUSTOM_SIZE_NAME: &str = "Custom";

/// Everything the sticker builder reads but never mutates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StickerConfig {
    pub available_fonts: Vec<FontOption>,
    /// Palette as hex strings
    pub available_colors: Vec<String>,
    pub default_text_color: String,
    pub default_shape_fill: String,
    pub clipart_categories: Vec<ClipartCategory>,
    pub sticker_product_options: ProductOptions,
    pub canvas_default_width: f32,
    pub canvas_default_height: f32,
}

impl Default for StickerConfig {
    fn default() -> Self {
        let font = |name: &str, value: &str, generic: &str| FontOption {
            name: name.into(),
            value: value.into(),
            generic_family: generic.into(),
        };

        Self {
            available_fonts: vec![
                font("Arial", "Arial, sans-serif", "sans-serif"),
                font("Verdana", "Verdana, sans-serif", "sans-serif"),
                font("Georgia", "Georgia, serif", "serif"),
                font("Comic Sans MS", "\"Comic Sans MS\", cursive, sans-serif", "cursive"),
                font("Impact", "Impact, fantasy", "fantasy"),
                font("Lobster", "Lobster, cursive", "cursive"),
                font("Pacifico", "Pacifico, cursive", "cursive"),
            ],
            available_colors: [
                "#000000", "#FFFFFF", "#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#FF00FF",
                "#00FFFF", "#e11d48", "#db2777", "#c026d3", "#9333ea", "#7c3aed", "#6366f1",
                "#2563eb", "#0284c7", "#0e7490", "#0d9488", "#059669", "#16a34a", "#65a30d",
                "#ca8a04", "#d97706", "#ea580c",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
            default_text_color: "#FFFFFF".into(),
            default_shape_fill: "#6366f1".into(),
            clipart_categories: vec![
                ClipartCategory {
                    name: "Emojis".into(),
                    items: vec![
                        generic_clipart("Emojis", "Happy Face", "smile", &["emoji", "happy"]),
                        generic_clipart("Emojis", "Heart", "heart", &["emoji", "love"]),
                        generic_clipart("Emojis", "Star", "star", &["emoji", "favorite"]),
                        generic_clipart("Emojis", "Thumbs Up", "thumbsUp", &["emoji", "like", "approve"]),
                    ],
                },
                ClipartCategory {
                    name: "Abstract".into(),
                    items: vec![
                        generic_clipart("Abstract", "Swirl", "swirlAbstract", &["abstract", "swirl"]),
                        generic_clipart("Abstract", "Blocks", "blocksAbstract", &["abstract", "geometric"]),
                        generic_clipart("Abstract", "Lines", "linesAbstract", &["abstract", "pattern"]),
                    ],
                },
                ClipartCategory {
                    name: "Nature".into(),
                    items: vec![
                        generic_clipart("Nature", "Leaf", "leafNature", &["nature", "plant", "eco"]),
                        generic_clipart("Nature", "Mountain", "mountainNature", &["nature", "adventure", "peak"]),
                        generic_clipart("Nature", "Wave", "waveNature", &["nature", "water", "sea"]),
                    ],
                },
            ],
            sticker_product_options: ProductOptions::default(),
            canvas_default_width: 500.0,
            canvas_default_height: 500.0,
        }
    }
}

impl StickerConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: StickerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        info!("📄 Loaded sticker config from {}", path.display());
        Ok(config)
    }

    /// Rejects catalogs the pricing calculator or canvas can't work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let options = &self.sticker_product_options;
        if options.sizes.is_empty() {
            return Err(ConfigError::Invalid("at least one size is required".into()));
        }
        if options.materials.is_empty() {
            return Err(ConfigError::Invalid("at least one material is required".into()));
        }
        if options.shapes.is_empty() {
            return Err(ConfigError::Invalid("at least one shape is required".into()));
        }
        if self.canvas_default_width <= 0.0 || self.canvas_default_height <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "canvas size must be positive, got {}x{}",
                self.canvas_default_width, self.canvas_default_height
            )));
        }
        Ok(())
    }

    pub fn canvas_size(&self) -> Vec2 {
        Vec2::new(self.canvas_default_width, self.canvas_default_height)
    }

    pub fn default_font_family(&self) -> &str {
        self.available_fonts
            .first()
            .map(|font| font.value.as_str())
            .unwrap_or("sans-serif")
    }

    pub fn text_color(&self) -> Color32 {
        parse_color(&self.default_text_color).unwrap_or(Color32::WHITE)
    }

    pub fn shape_fill(&self) -> Color32 {
        parse_color(&self.default_shape_fill).unwrap_or(Color32::from_rgb(0x63, 0x66, 0xf1))
    }

    /// Palette entries that parse as colors
    pub fn palette(&self) -> Vec<Color32> {
        self.available_colors
            .iter()
            .filter_map(|c| parse_color(c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_valid() {
        let config = StickerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.canvas_size(), Vec2::new(500.0, 500.0));
        assert_eq!(config.palette().len(), 24);
        assert_eq!(config.text_color(), Color32::WHITE);
    }

    #[test]
    fn test_lookup_helpers() {
        let options = ProductOptions::default();
        assert_eq!(options.size("Medium (8x8 cm)").map(|s| s.price_factor), Some(1.5));
        assert_eq!(options.material("paper").map(|m| m.price_factor), Some(0.8));
        assert!(options.size("Huge").is_none());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config = StickerConfig::from_json_str(r##"{ "defaultShapeFill": "#ff0000" }"##).unwrap();
        assert_eq!(config.shape_fill(), Color32::from_rgb(255, 0, 0));
        assert_eq!(config.available_fonts.len(), 7);
    }

    #[test]
    fn test_json_uses_original_field_names() {
        let json = r#"{
            "stickerProductOptions": {
                "shapes": [{ "name": "Circle", "value": "circle" }],
                "materials": [{ "name": "Paper", "value": "paper", "description": "", "priceFactor": 0.8 }],
                "sizes": [{ "name": "Tiny", "widthCM": 2, "heightCM": 2, "priceFactor": 0.5 }]
            }
        }"#;
        let config = StickerConfig::from_json_str(json).unwrap();
        let options = &config.sticker_product_options;
        assert_eq!(options.sizes[0].width_cm, 2.0);
        assert_eq!(options.shapes[0].value, StickerShape::Circle);
    }

    #[test]
    fn test_invalid_configs_are_rejected() {
        let empty_sizes = r#"{ "stickerProductOptions": { "shapes": [], "materials": [], "sizes": [] } }"#;
        assert!(matches!(
            StickerConfig::from_json_str(empty_sizes),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            StickerConfig::from_json_str(r#"{ "canvasDefaultWidth": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            StickerConfig::from_json_str("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        assert!(matches!(
            StickerConfig::load("/nonexistent/sticker-config.json"),
            Err(ConfigError::Read(_))
        ));
    }
}
