mod editor_state;
mod session;

pub use editor_state::{EditorState, PropertiesTab};
pub use session::EditorSession;
