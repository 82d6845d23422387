// Drag and resize interaction controller

use std::collections::HashMap;

use super::types::{GestureSession, PointerPosition};
use crate::state::geometry::{resize_rect, ResizeDirection};
use crate::state::window::WindowInstance;
use crate::state::StateManager;

/// Tracks at most one gesture per window and converts pointer movement into
/// store actions. Holds no window state of its own.
#[derive(Debug, Default)]
pub struct GestureController {
    sessions: HashMap<String, GestureSession>,
}

impl GestureController {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    /// Pointer-down on the title bar. Always focuses the window; the drag
    /// itself is refused for maximized windows.
    pub fn begin_drag(
        &mut self,
        store: &mut StateManager,
        window_id: &str,
        pointer: PointerPosition,
    ) -> bool {
        let Some(window) = store.focus(window_id) else {
            return false;
        };
        if window.is_maximized {
            log::debug!("Not dragging maximized window {}", window_id);
            self.sessions.remove(window_id);
            return false;
        }

        self.start(
            window_id,
            GestureSession::Drag {
                pointer_start: pointer,
                position_start: window.position,
            },
        );
        true
    }

    /// Pointer-down on a resize handle. Handles are inactive while maximized.
    pub fn begin_resize(
        &mut self,
        store: &mut StateManager,
        window_id: &str,
        direction: ResizeDirection,
        pointer: PointerPosition,
    ) -> bool {
        let Some(window) = store.focus(window_id) else {
            return false;
        };
        if window.is_maximized {
            log::debug!("Not resizing maximized window {}", window_id);
            self.sessions.remove(window_id);
            return false;
        }

        self.start(
            window_id,
            GestureSession::Resize {
                direction,
                pointer_start: pointer,
                rect_start: window.rect(),
            },
        );
        true
    }

    /// Pointer-move while captured. Geometry is always computed from the
    /// gesture start, never accumulated.
    pub fn pointer_move(
        &mut self,
        store: &mut StateManager,
        window_id: &str,
        pointer: PointerPosition,
    ) -> Option<WindowInstance> {
        let session = *self.sessions.get(window_id)?;

        let Some(window) = store.window(window_id) else {
            log::debug!("Dropping gesture for closed window {}", window_id);
            self.sessions.remove(window_id);
            return None;
        };
        if window.is_maximized {
            return None;
        }

        let (dx, dy) = pointer.delta_from(session.pointer_start());
        match session {
            GestureSession::Drag { position_start, .. } => {
                store.move_window(window_id, position_start.offset(dx, dy))
            }
            GestureSession::Resize {
                direction,
                rect_start,
                ..
            } => {
                let min = store.config().min_window_size;
                let rect = resize_rect(rect_start, direction, dx, dy, min);
                store.resize(window_id, rect.size, Some(rect.position))
            }
        }
    }

    /// Pointer-up or pointer-cancel. Returns the session that ended.
    pub fn end_gesture(&mut self, window_id: &str) -> Option<GestureSession> {
        self.sessions.remove(window_id)
    }

    pub fn active_gesture(&self, window_id: &str) -> Option<&GestureSession> {
        self.sessions.get(window_id)
    }

    pub fn is_active(&self, window_id: &str) -> bool {
        self.sessions.contains_key(window_id)
    }

    /// Forget gestures whose windows are gone
    pub fn prune(&mut self, store: &StateManager) {
        self.sessions.retain(|id, _| store.window(id).is_some());
    }

    fn start(&mut self, window_id: &str, session: GestureSession) {
        if self
            .sessions
            .insert(window_id.to_string(), session)
            .is_some()
        {
            log::debug!("Replaced unfinished gesture on window {}", window_id);
        }
    }
}
