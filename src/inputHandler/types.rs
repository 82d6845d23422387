// Core data structures for pointer gestures

use serde::{Deserialize, Serialize};

use crate::state::geometry::{ResizeDirection, WindowPosition, WindowRect};

/// Pointer coordinates in desktop space (mouse, touch, or stylus)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset of this pointer from an earlier one
    pub fn delta_from(&self, start: PointerPosition) -> (f64, f64) {
        (self.x - start.x, self.y - start.y)
    }
}

/// In-flight gesture on one window. Lives from pointer-down to pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum GestureSession {
    /// Title bar drag
    Drag {
        pointer_start: PointerPosition,
        position_start: WindowPosition,
    },
    /// Edge or corner resize
    Resize {
        direction: ResizeDirection,
        pointer_start: PointerPosition,
        rect_start: WindowRect,
    },
}

impl GestureSession {
    pub fn pointer_start(&self) -> PointerPosition {
        match self {
            GestureSession::Drag { pointer_start, .. } => *pointer_start,
            GestureSession::Resize { pointer_start, .. } => *pointer_start,
        }
    }
}
