use thiserror::Error;

use crate::element::ElementType;
use crate::id_generator::ElementId;

/// Errors raised by the editor core (element creation and store mutations)
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("{element_type} elements require a non-empty source reference")]
    MissingSource { element_type: ElementType },

    #[error("Invalid element geometry: {0}")]
    InvalidGeometry(String),

    #[error("Element {0} not found")]
    ElementNotFound(ElementId),

    #[error("Element {0} already exists in the design")]
    DuplicateId(ElementId),

    #[error("Failed to serialize design: {0}")]
    Serialization(#[from] serde_json::Error),
}
