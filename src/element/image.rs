use egui::{Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Fields only meaningful for `image` and `clipart` elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageProps {
    /// URL of the asset
    pub src: String,
    /// Intrinsic size of the asset, when known
    #[serde(default)]
    pub original_size: Option<Vec2>,
}

impl ImageProps {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            original_size: None,
        }
    }

    /// Rectangle the asset occupies inside `bounds` with aspect-fit ("meet") scaling.
    ///
    /// Without a known intrinsic size the asset fills the bounds.
    pub fn fitted_rect(&self, bounds: Rect) -> Rect {
        match self.original_size {
            Some(intrinsic) if intrinsic.x > 0.0 && intrinsic.y > 0.0 => {
                let scale = (bounds.width() / intrinsic.x).min(bounds.height() / intrinsic.y);
                Rect::from_center_size(bounds.center(), intrinsic * scale)
            }
            _ => bounds,
        }
    }
}
