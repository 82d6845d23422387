// Dock: one button per app, bound to the first window of that app

use serde::Serialize;

use crate::state::error::StateResult;
use crate::state::registry::{AppId, AppRegistryEntry};
use crate::state::window::WindowInstance;
use crate::state::StateManager;

/// What a dock click did
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "action", content = "window", rename_all = "snake_case")]
pub enum DockOutcome {
    Opened(WindowInstance),
    Restored(WindowInstance),
    Minimized(WindowInstance),
    Focused(WindowInstance),
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DockItem {
    pub app: AppRegistryEntry,
    /// Some window of this app is open
    pub is_active: bool,
}

/// Dock click policy:
/// no window -> open one; minimized -> bring back and focus;
/// already focused -> minimize; otherwise -> focus
pub fn dock_click(store: &mut StateManager, app_id: AppId) -> StateResult<DockOutcome> {
    let existing = store.windows_for_app(app_id).next().cloned();
    let Some(existing) = existing else {
        return store.open(app_id).map(DockOutcome::Opened);
    };

    let outcome = if existing.is_minimized {
        store.set_minimized(&existing.id, false);
        store
            .focus(&existing.id)
            .map(DockOutcome::Restored)
            .unwrap_or(DockOutcome::Restored(existing))
    } else if store.focused_window_id() == Some(existing.id.as_str()) {
        store
            .minimize(&existing.id)
            .map(DockOutcome::Minimized)
            .unwrap_or(DockOutcome::Minimized(existing))
    } else {
        store
            .focus(&existing.id)
            .map(DockOutcome::Focused)
            .unwrap_or(DockOutcome::Focused(existing))
    };

    log::debug!("Dock click on {}: {}", app_id, outcome_name(&outcome));
    Ok(outcome)
}

/// Dock contents in registry order
pub fn dock_items(store: &StateManager) -> Vec<DockItem> {
    store
        .registry()
        .entries()
        .iter()
        .map(|app| DockItem {
            app: app.clone(),
            is_active: store.windows_for_app(app.id).next().is_some(),
        })
        .collect()
}

fn outcome_name(outcome: &DockOutcome) -> &'static str {
    match outcome {
        DockOutcome::Opened(_) => "opened",
        DockOutcome::Restored(_) => "restored",
        DockOutcome::Minimized(_) => "minimized",
        DockOutcome::Focused(_) => "focused",
    }
}
