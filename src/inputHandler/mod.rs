// Input handler module for window interaction
// Turns pointer gestures into move/resize actions and keyboard shortcuts into
// actions on the focused window

pub mod gesture;
pub mod shortcuts;
pub mod types;

pub use gesture::GestureController;
pub use shortcuts::{apply_shortcut, apply_shortcut_with_gestures, WindowShortcut};
pub use types::*;
