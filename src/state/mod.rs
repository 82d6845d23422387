use serde::Serialize;
use uuid::Uuid;

use crate::config::WindowManagerConfig;

use self::error::StateResult;
use self::events::{Listener, SubscriptionId, WindowEvent};
use self::geometry::{maximize_fill_rect, WindowPosition, WindowSize};
use self::registry::{AppId, Registry};
use self::window::{OpenWindowRequest, WindowInstance};

pub mod error;
pub mod events;
pub mod geometry;
pub mod registry;
pub mod window;

/// Everything a renderer needs to draw the desktop
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WindowSnapshot {
    pub windows: Vec<WindowInstance>,
    pub focused_window_id: Option<String>,
}

/// Authoritative list of open windows, the focused-window pointer, and the
/// z-index counter. The action methods below are the only way to mutate them.
pub struct StateManager {
    registry: Registry,
    config: WindowManagerConfig,
    windows: Vec<WindowInstance>, // Creation order
    focused_window_id: Option<String>,
    z_index_counter: u64, // Last issued z-index
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription_id: u64,
}

impl StateManager {
    pub fn new() -> Self {
        Self::with_config(Registry::builtin(), WindowManagerConfig::default())
    }

    pub fn with_config(registry: Registry, config: WindowManagerConfig) -> Self {
        Self {
            registry,
            z_index_counter: config.initial_z_index,
            config,
            windows: Vec::new(),
            focused_window_id: None,
            listeners: Vec::new(),
            next_subscription_id: 0,
        }
    }

    // ===== Actions =====

    /// Open a new window for an app and focus it.
    /// Opening the same app twice gives two independent windows.
    pub fn open(&mut self, request: impl Into<OpenWindowRequest>) -> StateResult<WindowInstance> {
        let request = request.into();
        let app = self.registry.get(request.app_id)?;

        let title = request.title.unwrap_or_else(|| app.name.clone());
        let position = app.default_position;
        let size = app.default_size.clamped_min(self.config.min_window_size);

        let window = WindowInstance {
            id: format!("{}-{}", request.app_id, Uuid::new_v4().simple()),
            app_id: request.app_id,
            title,
            position,
            size,
            z_index: self.next_z_index(),
            is_minimized: false,
            is_maximized: false,
            pre_maximize_rect: None,
            props: request.props,
        };

        log::debug!(
            "Opened window {} ({}) at z {}",
            window.id,
            window.app_id,
            window.z_index
        );

        self.windows.push(window.clone());
        self.focused_window_id = Some(window.id.clone());

        self.emit(WindowEvent::Opened {
            window: window.clone(),
        });
        self.emit_focus_changed();

        Ok(window)
    }

    /// Remove a window. Unknown ids are ignored.
    /// Returns the window that was closed.
    pub fn close(&mut self, id: &str) -> Option<WindowInstance> {
        let index = self.find_index(id, "close")?;
        let removed = self.windows.remove(index);

        log::debug!("Closed window {}", id);
        self.emit(WindowEvent::Closed {
            window_id: removed.id.clone(),
        });

        if self.focused_window_id.as_deref() == Some(id) {
            self.focused_window_id = self.next_focus_candidate();
            self.emit_focus_changed();
        }

        Some(removed)
    }

    /// Raise a window above every other one and focus it
    pub fn focus(&mut self, id: &str) -> Option<WindowInstance> {
        let index = self.find_index(id, "focus")?;
        let z_index = self.next_z_index();

        let window = &mut self.windows[index];
        window.z_index = z_index;
        let window = window.clone();

        let focus_changed = self.focused_window_id.as_deref() != Some(id);
        self.focused_window_id = Some(window.id.clone());

        log::debug!("Focused window {} at z {}", id, z_index);
        self.emit(WindowEvent::Updated {
            window: window.clone(),
        });
        if focus_changed {
            self.emit_focus_changed();
        }

        Some(window)
    }

    /// Toggle minimized. Focus and stacking are left alone; the dock
    /// focuses a window separately when bringing it back.
    pub fn minimize(&mut self, id: &str) -> Option<WindowInstance> {
        let index = self.find_index(id, "minimize")?;
        let minimized = !self.windows[index].is_minimized;
        self.set_minimized(id, minimized)
    }

    pub fn set_minimized(&mut self, id: &str, minimized: bool) -> Option<WindowInstance> {
        let index = self.find_index(id, "set_minimized")?;
        let window = &mut self.windows[index];
        if window.is_minimized == minimized {
            return Some(window.clone());
        }

        window.is_minimized = minimized;
        let window = window.clone();

        log::debug!("Window {} minimized: {}", id, minimized);
        self.emit(WindowEvent::Updated {
            window: window.clone(),
        });
        Some(window)
    }

    /// Toggle between the maximize fill rect and the saved geometry
    pub fn maximize(&mut self, id: &str) -> Option<WindowInstance> {
        let index = self.find_index(id, "maximize")?;
        let maximized = !self.windows[index].is_maximized;
        self.set_maximized(id, maximized)
    }

    pub fn set_maximized(&mut self, id: &str, maximized: bool) -> Option<WindowInstance> {
        let index = self.find_index(id, "set_maximized")?;
        let fill = maximize_fill_rect(
            self.config.viewport,
            self.config.reserved_chrome_height,
            self.config.min_window_size,
        );

        let window = &mut self.windows[index];
        if window.is_maximized == maximized {
            return Some(window.clone());
        }

        if maximized {
            window.pre_maximize_rect = Some(window.rect());
            window.position = fill.position;
            window.size = fill.size;
        } else if let Some(saved) = window.pre_maximize_rect.take() {
            window.position = saved.position;
            window.size = saved.size;
        }
        window.is_maximized = maximized;
        let window = window.clone();

        log::debug!("Window {} maximized: {}", id, maximized);
        self.emit(WindowEvent::Updated {
            window: window.clone(),
        });
        Some(window)
    }

    /// Set a window's position. Maximized windows stay pinned.
    pub fn move_window(&mut self, id: &str, position: WindowPosition) -> Option<WindowInstance> {
        let index = self.find_index(id, "move")?;
        let window = &mut self.windows[index];
        if window.is_maximized {
            log::debug!("Ignoring move of maximized window {}", id);
            return Some(window.clone());
        }

        window.position = position;
        let window = window.clone();
        self.emit(WindowEvent::Updated {
            window: window.clone(),
        });
        Some(window)
    }

    /// Set a window's size, and its origin when resizing from a top/left edge.
    /// The size is clamped to the minimum; maximized windows stay pinned.
    pub fn resize(
        &mut self,
        id: &str,
        size: WindowSize,
        position: Option<WindowPosition>,
    ) -> Option<WindowInstance> {
        let index = self.find_index(id, "resize")?;
        let min = self.config.min_window_size;

        let window = &mut self.windows[index];
        if window.is_maximized {
            log::debug!("Ignoring resize of maximized window {}", id);
            return Some(window.clone());
        }

        let clamped = size.clamped_min(min);
        if let Some(mut position) = position {
            // A moved leading edge means a west/north resize: keep the
            // opposite edge where the caller put it
            if position.x != window.position.x {
                position.x -= clamped.width - size.width;
            }
            if position.y != window.position.y {
                position.y -= clamped.height - size.height;
            }
            window.position = position;
        }
        window.size = clamped;
        let window = window.clone();
        self.emit(WindowEvent::Updated {
            window: window.clone(),
        });
        Some(window)
    }

    /// Record a new viewport size and re-pin maximized windows to it
    pub fn set_viewport(&mut self, viewport: WindowSize) {
        self.config.viewport = viewport;
        let fill = maximize_fill_rect(
            viewport,
            self.config.reserved_chrome_height,
            self.config.min_window_size,
        );

        let mut refitted = Vec::new();
        for window in self.windows.iter_mut().filter(|w| w.is_maximized) {
            window.position = fill.position;
            window.size = fill.size;
            refitted.push(window.clone());
        }

        log::debug!(
            "Viewport now {}x{}, refitted {} maximized window(s)",
            viewport.width,
            viewport.height,
            refitted.len()
        );
        for window in refitted {
            self.emit(WindowEvent::Updated { window });
        }
    }

    /// Bring the bottom-most visible window to the front
    pub fn cycle_focus(&mut self) -> Option<WindowInstance> {
        let id = {
            let visible = self.visible_windows();
            if visible.len() < 2 {
                return None;
            }
            visible[0].id.clone()
        };
        self.focus(&id)
    }

    // ===== Queries =====

    /// Windows in creation order
    pub fn windows(&self) -> &[WindowInstance] {
        &self.windows
    }

    pub fn window(&self, id: &str) -> Option<&WindowInstance> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn focused_window_id(&self) -> Option<&str> {
        self.focused_window_id.as_deref()
    }

    pub fn focused_window(&self) -> Option<&WindowInstance> {
        self.focused_window_id
            .as_deref()
            .and_then(|id| self.window(id))
    }

    /// Non-minimized windows, bottom to top (render order)
    pub fn visible_windows(&self) -> Vec<&WindowInstance> {
        let mut visible: Vec<_> = self.windows.iter().filter(|w| w.is_visible()).collect();
        visible.sort_by_key(|w| w.z_index);
        visible
    }

    pub fn windows_for_app(&self, app_id: AppId) -> impl Iterator<Item = &WindowInstance> {
        self.windows.iter().filter(move |w| w.app_id == app_id)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &WindowManagerConfig {
        &self.config
    }

    pub fn snapshot(&self) -> WindowSnapshot {
        WindowSnapshot {
            windows: self.windows.clone(),
            focused_window_id: self.focused_window_id.clone(),
        }
    }

    // ===== Subscriptions =====

    pub fn subscribe(
        &mut self,
        listener: impl Fn(&WindowEvent) + Send + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription_id);
        self.next_subscription_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    // ===== Internals =====

    fn next_z_index(&mut self) -> u64 {
        let next = match self.z_index_counter.checked_add(1) {
            Some(next) => next,
            None => {
                self.renumber_z_indices();
                self.z_index_counter + 1
            }
        };
        self.z_index_counter = next;
        next
    }

    /// Compact stacking values to 1..=n, keeping the current order.
    /// Only reached when the counter runs out.
    fn renumber_z_indices(&mut self) {
        log::warn!(
            "Z-index counter exhausted, renumbering {} windows",
            self.windows.len()
        );
        let mut order: Vec<usize> = (0..self.windows.len()).collect();
        order.sort_by_key(|&i| self.windows[i].z_index);
        for (rank, index) in order.into_iter().enumerate() {
            self.windows[index].z_index = rank as u64 + 1;
        }
        self.z_index_counter = self.windows.len() as u64;

        for window in &self.windows {
            self.emit(WindowEvent::Updated {
                window: window.clone(),
            });
        }
    }

    fn find_index(&self, id: &str, action: &str) -> Option<usize> {
        let index = self.windows.iter().position(|w| w.id == id);
        if index.is_none() {
            log::debug!("Ignoring {} for unknown window {}", action, id);
        }
        index
    }

    /// Topmost visible window, else topmost of any
    fn next_focus_candidate(&self) -> Option<String> {
        self.windows
            .iter()
            .filter(|w| w.is_visible())
            .max_by_key(|w| w.z_index)
            .or_else(|| self.windows.iter().max_by_key(|w| w.z_index))
            .map(|w| w.id.clone())
    }

    fn emit(&self, event: WindowEvent) {
        for (_, listener) in &self.listeners {
            listener(&event);
        }
    }

    fn emit_focus_changed(&self) {
        self.emit(WindowEvent::FocusChanged {
            focused_window_id: self.focused_window_id.clone(),
        });
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::geometry::{WindowRect, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
    use super::window::WindowAppProps;
    use super::*;
    use std::sync::{Arc, Mutex};

    fn open(manager: &mut StateManager, app_id: AppId) -> WindowInstance {
        manager.open(app_id).unwrap()
    }

    #[test]
    fn test_open_uses_registry_defaults() {
        let mut manager = StateManager::new();
        let window = open(&mut manager, AppId::Finder);

        assert!(window.id.starts_with("finder-"));
        assert_eq!(window.title, "Finder");
        assert_eq!(window.size, WindowSize::new(800.0, 500.0));
        assert_eq!(window.position, WindowPosition::new(100.0, 100.0));
        assert_eq!(window.z_index, 101);
        assert!(!window.is_minimized && !window.is_maximized);
        assert_eq!(manager.focused_window_id(), Some(window.id.as_str()));
    }

    #[test]
    fn test_open_overrides_title_and_props() {
        let mut manager = StateManager::new();
        let request = OpenWindowRequest::new(AppId::TextEditor)
            .with_title("notes.txt")
            .with_props(WindowAppProps::TextDocument {
                content: "hello".to_string(),
            });
        let window = manager.open(request).unwrap();

        assert_eq!(window.title, "notes.txt");
        assert_eq!(
            window.props,
            Some(WindowAppProps::TextDocument {
                content: "hello".to_string()
            })
        );
    }

    #[test]
    fn test_open_same_app_twice_gives_two_windows() {
        let mut manager = StateManager::new();
        let a = open(&mut manager, AppId::Finder);
        let b = open(&mut manager, AppId::Finder);

        assert_ne!(a.id, b.id);
        assert_eq!(manager.windows_for_app(AppId::Finder).count(), 2);
    }

    #[test]
    fn test_open_unknown_app_fails() {
        let mut manager =
            StateManager::with_config(Registry::new(vec![]), WindowManagerConfig::default());
        assert!(manager.open(AppId::Compass).is_err());
        assert!(manager.windows().is_empty());
        assert_eq!(manager.focused_window_id(), None);
    }

    #[test]
    fn test_open_two_then_focus_first() {
        let mut manager = StateManager::new();
        let finder = open(&mut manager, AppId::Finder);
        let settings = open(&mut manager, AppId::Settings);
        assert_eq!(manager.focused_window_id(), Some(settings.id.as_str()));
        assert!(settings.z_index > finder.z_index);

        manager.focus(&finder.id).unwrap();

        let finder_z = manager.window(&finder.id).unwrap().z_index;
        let settings_z = manager.window(&settings.id).unwrap().z_index;
        assert!(finder_z > settings_z);
        assert_eq!(manager.focused_window_id(), Some(finder.id.as_str()));
    }

    #[test]
    fn test_focus_unknown_is_noop() {
        let mut manager = StateManager::new();
        let finder = open(&mut manager, AppId::Finder);

        assert!(manager.focus("nope").is_none());
        assert_eq!(manager.focused_window_id(), Some(finder.id.as_str()));
        assert_eq!(manager.window(&finder.id).unwrap().z_index, finder.z_index);
    }

    #[test]
    fn test_close_unknown_leaves_state_unchanged() {
        let mut manager = StateManager::new();
        open(&mut manager, AppId::Finder);
        open(&mut manager, AppId::Settings);
        let before = manager.snapshot();

        assert!(manager.close("missing-window").is_none());
        assert_eq!(manager.snapshot(), before);
    }

    #[test]
    fn test_close_focused_moves_focus_to_topmost() {
        let mut manager = StateManager::new();
        let finder = open(&mut manager, AppId::Finder);
        let settings = open(&mut manager, AppId::Settings);
        let browser = open(&mut manager, AppId::Browser);

        // finder is now the most recently focused of the remaining two
        manager.focus(&finder.id);
        manager.focus(&browser.id);
        manager.close(&browser.id);

        assert_eq!(manager.focused_window_id(), Some(finder.id.as_str()));
        assert_eq!(manager.windows().len(), 2);
        assert!(manager.window(&settings.id).is_some());
    }

    #[test]
    fn test_close_prefers_visible_windows() {
        let mut manager = StateManager::new();
        let finder = open(&mut manager, AppId::Finder);
        let settings = open(&mut manager, AppId::Settings);
        let browser = open(&mut manager, AppId::Browser);

        manager.minimize(&settings.id);
        manager.close(&browser.id);

        assert_eq!(manager.focused_window_id(), Some(finder.id.as_str()));
    }

    #[test]
    fn test_close_unfocused_keeps_focus() {
        let mut manager = StateManager::new();
        let finder = open(&mut manager, AppId::Finder);
        let settings = open(&mut manager, AppId::Settings);

        manager.close(&finder.id);
        assert_eq!(manager.focused_window_id(), Some(settings.id.as_str()));
    }

    #[test]
    fn test_close_last_clears_focus() {
        let mut manager = StateManager::new();
        let finder = open(&mut manager, AppId::Finder);

        let closed = manager.close(&finder.id).unwrap();
        assert_eq!(closed.id, finder.id);
        assert!(manager.windows().is_empty());
        assert_eq!(manager.focused_window_id(), None);
    }

    #[test]
    fn test_minimize_toggles_without_touching_focus() {
        let mut manager = StateManager::new();
        let finder = open(&mut manager, AppId::Finder);

        let minimized = manager.minimize(&finder.id).unwrap();
        assert!(minimized.is_minimized);
        assert_eq!(minimized.z_index, finder.z_index);
        assert_eq!(manager.focused_window_id(), Some(finder.id.as_str()));
        assert!(manager.visible_windows().is_empty());
        assert_eq!(manager.windows().len(), 1);

        let restored = manager.minimize(&finder.id).unwrap();
        assert!(!restored.is_minimized);
    }

    #[test]
    fn test_maximize_round_trip_restores_geometry() {
        let mut manager = StateManager::new();
        let finder = open(&mut manager, AppId::Finder);
        manager.move_window(&finder.id, WindowPosition::new(42.0, 24.0));
        manager.resize(&finder.id, WindowSize::new(500.0, 400.0), None);

        let maximized = manager.maximize(&finder.id).unwrap();
        assert!(maximized.is_maximized);
        assert_eq!(maximized.position, WindowPosition::ORIGIN);
        assert_eq!(maximized.size, WindowSize::new(1280.0, 640.0));
        assert_eq!(
            maximized.pre_maximize_rect,
            Some(WindowRect::new(
                WindowPosition::new(42.0, 24.0),
                WindowSize::new(500.0, 400.0)
            ))
        );

        let restored = manager.maximize(&finder.id).unwrap();
        assert!(!restored.is_maximized);
        assert_eq!(restored.position, WindowPosition::new(42.0, 24.0));
        assert_eq!(restored.size, WindowSize::new(500.0, 400.0));
        assert_eq!(restored.pre_maximize_rect, None);
    }

    #[test]
    fn test_move_on_maximized_is_ignored() {
        let mut manager = StateManager::new();
        let finder = open(&mut manager, AppId::Finder);
        manager.maximize(&finder.id);

        let after = manager
            .move_window(&finder.id, WindowPosition::new(300.0, 300.0))
            .unwrap();
        assert_eq!(after.position, WindowPosition::ORIGIN);

        let after = manager
            .resize(&finder.id, WindowSize::new(400.0, 300.0), None)
            .unwrap();
        assert_eq!(after.size, WindowSize::new(1280.0, 640.0));
    }

    #[test]
    fn test_maximized_window_can_be_minimized() {
        let mut manager = StateManager::new();
        let finder = open(&mut manager, AppId::Finder);
        manager.maximize(&finder.id);
        let window = manager.minimize(&finder.id).unwrap();
        assert!(window.is_maximized && window.is_minimized);
    }

    #[test]
    fn test_resize_clamps_to_minimum() {
        let mut manager = StateManager::new();
        let finder = open(&mut manager, AppId::Finder);

        let window = manager
            .resize(&finder.id, WindowSize::new(-50.0, 10.0), None)
            .unwrap();
        assert_eq!(window.size, WindowSize::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
        assert_eq!(window.position, WindowPosition::new(100.0, 100.0));
    }

    #[test]
    fn test_clamped_west_north_resize_keeps_far_edges() {
        let mut manager = StateManager::new();
        let finder = open(&mut manager, AppId::Finder);
        manager.resize(&finder.id, WindowSize::new(400.0, 300.0), None);

        // Right edge at 500, bottom edge at 400
        let window = manager
            .resize(
                &finder.id,
                WindowSize::new(200.0, 150.0),
                Some(WindowPosition::new(300.0, 250.0)),
            )
            .unwrap();
        assert_eq!(window.size, WindowSize::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
        assert_eq!(window.position, WindowPosition::new(200.0, 200.0));
        assert_eq!(window.position.x + window.size.width, 500.0);
        assert_eq!(window.position.y + window.size.height, 400.0);
    }

    #[test]
    fn test_clamped_east_resize_keeps_origin() {
        let mut manager = StateManager::new();
        let finder = open(&mut manager, AppId::Finder);

        let window = manager
            .resize(
                &finder.id,
                WindowSize::new(120.0, 500.0),
                Some(WindowPosition::new(100.0, 100.0)),
            )
            .unwrap();
        assert_eq!(window.size, WindowSize::new(MIN_WINDOW_WIDTH, 500.0));
        assert_eq!(window.position, WindowPosition::new(100.0, 100.0));
    }

    #[test]
    fn test_set_minimized_is_idempotent() {
        let mut manager = StateManager::new();
        let finder = open(&mut manager, AppId::Finder);

        assert!(manager.set_minimized(&finder.id, true).unwrap().is_minimized);
        assert!(manager.set_minimized(&finder.id, true).unwrap().is_minimized);
        assert!(!manager.set_minimized(&finder.id, false).unwrap().is_minimized);
        assert!(!manager.set_minimized(&finder.id, false).unwrap().is_minimized);
        assert!(manager.set_minimized("ghost", true).is_none());
    }

    #[test]
    fn test_set_maximized_twice_keeps_saved_rect() {
        let mut manager = StateManager::new();
        let finder = open(&mut manager, AppId::Finder);
        let original = finder.rect();

        let first = manager.set_maximized(&finder.id, true).unwrap();
        let second = manager.set_maximized(&finder.id, true).unwrap();
        assert!(second.is_maximized);
        assert_eq!(second.pre_maximize_rect, Some(original));
        assert_eq!(second.rect(), first.rect());

        let restored = manager.set_maximized(&finder.id, false).unwrap();
        assert_eq!(restored.rect(), original);
        assert_eq!(restored.pre_maximize_rect, None);

        let again = manager.set_maximized(&finder.id, false).unwrap();
        assert_eq!(again.rect(), original);
        assert!(!again.is_maximized);
    }

    #[test]
    fn test_exhausted_z_counter_renumbers_in_order() {
        let config = WindowManagerConfig {
            initial_z_index: u64::MAX - 1,
            ..WindowManagerConfig::default()
        };
        let mut manager = StateManager::with_config(Registry::builtin(), config);

        let finder = open(&mut manager, AppId::Finder);
        assert_eq!(finder.z_index, u64::MAX);
        let settings = open(&mut manager, AppId::Settings);
        let finder_z = manager.window(&finder.id).unwrap().z_index;

        assert_eq!(finder_z, 1);
        assert_eq!(settings.z_index, 2);
        assert_eq!(manager.focused_window_id(), Some(settings.id.as_str()));

        let refocused = manager.focus(&finder.id).unwrap();
        assert_eq!(refocused.z_index, 3);
    }

    #[test]
    fn test_set_viewport_refits_maximized() {
        let mut manager = StateManager::new();
        let finder = open(&mut manager, AppId::Finder);
        let settings = open(&mut manager, AppId::Settings);
        manager.maximize(&finder.id);

        manager.set_viewport(WindowSize::new(1920.0, 1080.0));

        assert_eq!(
            manager.window(&finder.id).unwrap().size,
            WindowSize::new(1920.0, 1000.0)
        );
        assert_eq!(manager.window(&settings.id).unwrap().size, settings.size);
    }

    #[test]
    fn test_cycle_focus_raises_bottom_window() {
        let mut manager = StateManager::new();
        let finder = open(&mut manager, AppId::Finder);
        open(&mut manager, AppId::Settings);

        let raised = manager.cycle_focus().unwrap();
        assert_eq!(raised.id, finder.id);
        assert_eq!(manager.focused_window_id(), Some(finder.id.as_str()));

        manager.close(&finder.id);
        assert!(manager.cycle_focus().is_none());
    }

    #[test]
    fn test_visible_windows_sorted_by_z() {
        let mut manager = StateManager::new();
        let finder = open(&mut manager, AppId::Finder);
        let settings = open(&mut manager, AppId::Settings);
        manager.focus(&finder.id);

        let order: Vec<_> = manager.visible_windows().iter().map(|w| w.id.clone()).collect();
        assert_eq!(order, vec![settings.id, finder.id]);
    }

    #[test]
    fn test_subscribers_receive_events() {
        let mut manager = StateManager::new();
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let subscription = manager.subscribe(move |event| {
            sink.lock().unwrap().push(event.name());
        });

        let finder = open(&mut manager, AppId::Finder);
        manager.close(&finder.id);
        manager.close(&finder.id);

        assert_eq!(
            *events.lock().unwrap(),
            vec![
                "window-created",
                "window-focus-changed",
                "window-closed",
                "window-focus-changed",
            ]
        );

        assert!(manager.unsubscribe(subscription));
        open(&mut manager, AppId::Finder);
        assert_eq!(events.lock().unwrap().len(), 4);
    }
}
