use serde::{Deserialize, Serialize};
use std::fmt;

use crate::element::ElementType;

/// Creation/editing mode chosen in the toolbar.
///
/// `Text` and `Shape` act as one-shot actions: choosing them creates an
/// element and the session falls back to `Select`. `Clipart` and `Upload`
/// stay active while their picker panel is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveTool {
    #[default]
    Select,
    Text,
    Shape,
    Clipart,
    Upload,
}

impl ActiveTool {
    pub const ALL: [ActiveTool; 5] = [
        ActiveTool::Select,
        ActiveTool::Text,
        ActiveTool::Shape,
        ActiveTool::Clipart,
        ActiveTool::Upload,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ActiveTool::Select => "Select",
            ActiveTool::Text => "Text",
            ActiveTool::Shape => "Shape",
            ActiveTool::Clipart => "Clipart",
            ActiveTool::Upload => "Upload",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ActiveTool::Select => "⬉",
            ActiveTool::Text => "T",
            ActiveTool::Shape => "⬛",
            ActiveTool::Clipart => "✨",
            ActiveTool::Upload => "⬆",
        }
    }

    /// Element type created immediately when the tool is chosen
    pub fn creates(&self) -> Option<ElementType> {
        match self {
            ActiveTool::Text => Some(ElementType::Text),
            ActiveTool::Shape => Some(ElementType::Shape),
            _ => None,
        }
    }

    /// Whether the tool opens an auxiliary picker instead of creating an element
    pub fn opens_picker(&self) -> bool {
        matches!(self, ActiveTool::Clipart | ActiveTool::Upload)
    }
}

impl fmt::Display for ActiveTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_tools() {
        assert_eq!(ActiveTool::Text.creates(), Some(ElementType::Text));
        assert_eq!(ActiveTool::Shape.creates(), Some(ElementType::Shape));
        assert_eq!(ActiveTool::Select.creates(), None);
        assert_eq!(ActiveTool::Clipart.creates(), None);
    }

    #[test]
    fn test_picker_tools() {
        let pickers: Vec<_> = ActiveTool::ALL
            .iter()
            .filter(|tool| tool.opens_picker())
            .collect();
        assert_eq!(pickers, vec![&ActiveTool::Clipart, &ActiveTool::Upload]);
        assert_eq!(ActiveTool::default(), ActiveTool::Select);
    }
}
