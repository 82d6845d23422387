// Keyboard shortcuts acting on the focused window

use serde::{Deserialize, Serialize};

use super::gesture::GestureController;
use crate::state::window::WindowInstance;
use crate::state::StateManager;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowShortcut {
    CloseFocused,
    MinimizeFocused,
    ToggleMaximizeFocused,
    CycleFocus,
}

impl WindowShortcut {
    pub const ALL: [WindowShortcut; 4] = [
        WindowShortcut::CloseFocused,
        WindowShortcut::MinimizeFocused,
        WindowShortcut::ToggleMaximizeFocused,
        WindowShortcut::CycleFocus,
    ];

    /// Parse from the names the webview uses
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "close" => Some(WindowShortcut::CloseFocused),
            "minimize" => Some(WindowShortcut::MinimizeFocused),
            "maximize" => Some(WindowShortcut::ToggleMaximizeFocused),
            "cycle" => Some(WindowShortcut::CycleFocus),
            _ => None,
        }
    }
}

/// Run a shortcut. Returns the window it acted on (the closed one for
/// `CloseFocused`), or `None` when there was nothing to act on.
pub fn apply_shortcut(
    store: &mut StateManager,
    shortcut: WindowShortcut,
) -> Option<WindowInstance> {
    if shortcut == WindowShortcut::CycleFocus {
        return store.cycle_focus();
    }

    let id = store.focused_window()?.id.clone();
    match shortcut {
        WindowShortcut::CloseFocused => store.close(&id),
        WindowShortcut::MinimizeFocused => store.minimize(&id),
        WindowShortcut::ToggleMaximizeFocused => store.maximize(&id),
        WindowShortcut::CycleFocus => None,
    }
}

/// `apply_shortcut`, then forget gestures on any window the shortcut closed
pub fn apply_shortcut_with_gestures(
    store: &mut StateManager,
    gestures: &mut GestureController,
    shortcut: WindowShortcut,
) -> Option<WindowInstance> {
    let window = apply_shortcut(store, shortcut);
    gestures.prune(store);
    window
}
