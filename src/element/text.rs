use egui::Color32;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FONT_SIZE: f32 = 30.0;
pub const DEFAULT_TEXT: &str = "Hello!";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// Horizontal alignment relative to the element's x coordinate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub const ALL: [TextAlign; 3] = [TextAlign::Left, TextAlign::Center, TextAlign::Right];

    pub fn label(&self) -> &'static str {
        match self {
            TextAlign::Left => "Left",
            TextAlign::Center => "Center",
            TextAlign::Right => "Right",
        }
    }
}

/// Fields only meaningful for `text` elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextProps {
    pub text: String,
    pub font_family: String,
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub text_align: TextAlign,
    pub fill: Color32,
}

impl TextProps {
    pub fn new(text: impl Into<String>, font_family: impl Into<String>, fill: Color32) -> Self {
        Self {
            text: text.into(),
            font_family: font_family.into(),
            font_size: DEFAULT_FONT_SIZE,
            font_weight: FontWeight::default(),
            font_style: FontStyle::default(),
            text_align: TextAlign::default(),
            fill,
        }
    }
}
