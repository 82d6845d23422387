// Desktop surface: icons, dock, and file launching. These are the callers of
// the window store; the policies here are theirs, not the store's.

use serde::{Deserialize, Serialize};

use crate::state::error::StateResult;
use crate::state::geometry::WindowPosition;
use crate::state::registry::{AppId, Registry};
use crate::state::window::WindowInstance;
use crate::state::StateManager;

pub mod dock;
pub mod launcher;

const GRID_START_X: f64 = 40.0;
const GRID_START_Y: f64 = 40.0;
const GRID_GAP_Y: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesktopIconState {
    pub app_id: AppId,
    pub position: WindowPosition,
}

/// Icons on the desktop, one per registered app
#[derive(Debug, Clone)]
pub struct DesktopIcons {
    icons: Vec<DesktopIconState>,
}

impl DesktopIcons {
    /// Lay out one icon per registry entry in a single column
    pub fn from_registry(registry: &Registry) -> Self {
        let icons = registry
            .entries()
            .iter()
            .enumerate()
            .map(|(i, app)| DesktopIconState {
                app_id: app.id,
                position: WindowPosition::new(GRID_START_X, GRID_START_Y + i as f64 * GRID_GAP_Y),
            })
            .collect();
        Self { icons }
    }

    pub fn icons(&self) -> &[DesktopIconState] {
        &self.icons
    }

    /// Apply the offset of a finished icon drag
    pub fn move_icon(&mut self, app_id: AppId, dx: f64, dy: f64) -> Option<DesktopIconState> {
        let icon = self.icons.iter_mut().find(|icon| icon.app_id == app_id)?;
        icon.position = icon.position.offset(dx, dy);
        Some(*icon)
    }

    /// Double-click always opens a fresh window
    pub fn open_icon(
        &self,
        store: &mut StateManager,
        app_id: AppId,
    ) -> StateResult<WindowInstance> {
        store.open(app_id)
    }
}
