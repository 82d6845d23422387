// State-change notifications for whatever renders the windows

use serde::Serialize;

use super::window::WindowInstance;

/// Emitted by the store after every mutation that changed something
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type")]
pub enum WindowEvent {
    /// A new window was appended to the list
    Opened { window: WindowInstance },
    /// A window was removed from the list
    Closed { window_id: String },
    /// Geometry, stacking, or minimize/maximize state of a window changed
    Updated { window: WindowInstance },
    /// The focused window pointer moved
    FocusChanged { focused_window_id: Option<String> },
}

impl WindowEvent {
    /// Event name used when forwarding to the webview
    pub fn name(&self) -> &'static str {
        match self {
            WindowEvent::Opened { .. } => "window-created",
            WindowEvent::Closed { .. } => "window-closed",
            WindowEvent::Updated { .. } => "window-state-changed",
            WindowEvent::FocusChanged { .. } => "window-focus-changed",
        }
    }
}

/// Handle returned by `StateManager::subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SubscriptionId(pub(crate) u64);

pub(crate) type Listener = Box<dyn Fn(&WindowEvent) + Send>;
