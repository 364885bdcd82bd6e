#![warn(clippy::all, rust_2018_idioms)]

pub mod analysis;
pub mod app;
pub mod clipart;
pub mod command;
pub mod components;
pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod geometry;
pub mod id_generator;
pub mod marketplace;
pub mod panels;
pub mod pricing;
pub mod product;
pub mod renderer;
pub mod state;
pub mod tools;

pub use app::StickerBuilderApp;
pub use command::{Command, CommandHistory};
pub use config::StickerConfig;
pub use document::{Document, ElementSequence, ReorderDirection};
pub use element::{DesignElement, ElementKind, ElementPatch, ElementType};
pub use error::EditorError;
pub use id_generator::ElementId;
pub use renderer::Renderer;
pub use state::{EditorSession, EditorState};
pub use tools::ActiveTool;
