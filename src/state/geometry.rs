// Geometry for window placement: positions, sizes, and the resize/maximize math

use serde::{Deserialize, Serialize};

pub const MIN_WINDOW_WIDTH: f64 = 300.0;
pub const MIN_WINDOW_HEIGHT: f64 = 200.0;

/// Top-left corner of a window in desktop space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: f64,
    pub y: f64,
}

impl WindowPosition {
    pub const ORIGIN: WindowPosition = WindowPosition { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Shift by a pointer delta
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: f64,
    pub height: f64,
}

impl WindowSize {
    pub const MIN: WindowSize = WindowSize {
        width: MIN_WINDOW_WIDTH,
        height: MIN_WINDOW_HEIGHT,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Raise each axis to at least the given minimum
    pub fn clamped_min(&self, min: WindowSize) -> Self {
        Self {
            width: self.width.max(min.width),
            height: self.height.max(min.height),
        }
    }

    pub fn satisfies_min(&self, min: WindowSize) -> bool {
        self.width >= min.width && self.height >= min.height
    }
}

/// Position and size together, as saved before maximizing
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WindowRect {
    pub position: WindowPosition,
    pub size: WindowSize,
}

impl WindowRect {
    pub const fn new(position: WindowPosition, size: WindowSize) -> Self {
        Self { position, size }
    }
}

/// Edge or corner handle used to resize a window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeDirection {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl ResizeDirection {
    pub const ALL: [ResizeDirection; 8] = [
        ResizeDirection::N,
        ResizeDirection::S,
        ResizeDirection::E,
        ResizeDirection::W,
        ResizeDirection::NE,
        ResizeDirection::NW,
        ResizeDirection::SE,
        ResizeDirection::SW,
    ];

    /// Parse from the handle name used by the webview ("n", "se", ...)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "n" => Some(ResizeDirection::N),
            "s" => Some(ResizeDirection::S),
            "e" => Some(ResizeDirection::E),
            "w" => Some(ResizeDirection::W),
            "ne" => Some(ResizeDirection::NE),
            "nw" => Some(ResizeDirection::NW),
            "se" => Some(ResizeDirection::SE),
            "sw" => Some(ResizeDirection::SW),
            _ => None,
        }
    }

    pub fn moves_north(&self) -> bool {
        matches!(self, ResizeDirection::N | ResizeDirection::NE | ResizeDirection::NW)
    }

    pub fn moves_south(&self) -> bool {
        matches!(self, ResizeDirection::S | ResizeDirection::SE | ResizeDirection::SW)
    }

    pub fn moves_east(&self) -> bool {
        matches!(self, ResizeDirection::E | ResizeDirection::NE | ResizeDirection::SE)
    }

    pub fn moves_west(&self) -> bool {
        matches!(self, ResizeDirection::W | ResizeDirection::NW | ResizeDirection::SW)
    }
}

/// Compute the rect produced by dragging a resize handle by (dx, dy) from `start`.
///
/// Each axis is handled independently. East/South grow or shrink the far edge.
/// West/North move the origin while keeping the opposite edge fixed; once the
/// minimum is reached the origin stops advancing instead of jumping back.
pub fn resize_rect(
    start: WindowRect,
    direction: ResizeDirection,
    dx: f64,
    dy: f64,
    min: WindowSize,
) -> WindowRect {
    let mut rect = start;

    if direction.moves_east() {
        rect.size.width = (start.size.width + dx).max(min.width);
    }
    if direction.moves_west() {
        let width = (start.size.width - dx).max(min.width);
        rect.size.width = width;
        rect.position.x = start.position.x + (start.size.width - width);
    }
    if direction.moves_south() {
        rect.size.height = (start.size.height + dy).max(min.height);
    }
    if direction.moves_north() {
        let height = (start.size.height - dy).max(min.height);
        rect.size.height = height;
        rect.position.y = start.position.y + (start.size.height - height);
    }

    rect
}

/// Rect a maximized window is pinned to: origin at (0, 0), the whole viewport
/// minus the reserved chrome band, never below the minimum window size
pub fn maximize_fill_rect(
    viewport: WindowSize,
    reserved_chrome_height: f64,
    min: WindowSize,
) -> WindowRect {
    let size = WindowSize::new(viewport.width, viewport.height - reserved_chrome_height);
    WindowRect::new(WindowPosition::ORIGIN, size.clamped_min(min))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn direction() -> impl Strategy<Value = ResizeDirection> {
        prop::sample::select(ResizeDirection::ALL.to_vec())
    }

    proptest! {
        /// No delta, however adversarial, drives a window below the minimum
        #[test]
        fn resize_never_below_minimum(
            x in -2000.0..2000.0f64, y in -2000.0..2000.0f64,
            w in MIN_WINDOW_WIDTH..3000.0f64, h in MIN_WINDOW_HEIGHT..3000.0f64,
            dx in -5000.0..5000.0f64, dy in -5000.0..5000.0f64,
            dir in direction()
        ) {
            let start = WindowRect::new(WindowPosition::new(x, y), WindowSize::new(w, h));
            let result = resize_rect(start, dir, dx, dy, WindowSize::MIN);
            prop_assert!(result.size.satisfies_min(WindowSize::MIN));
        }

        /// West/North handles keep the opposite edge fixed
        #[test]
        fn opposite_edge_fixed(
            x in -2000.0..2000.0f64, y in -2000.0..2000.0f64,
            w in MIN_WINDOW_WIDTH..3000.0f64, h in MIN_WINDOW_HEIGHT..3000.0f64,
            dx in -5000.0..5000.0f64, dy in -5000.0..5000.0f64
        ) {
            let start = WindowRect::new(WindowPosition::new(x, y), WindowSize::new(w, h));
            let result = resize_rect(start, ResizeDirection::NW, dx, dy, WindowSize::MIN);
            prop_assert!(((result.position.x + result.size.width) - (x + w)).abs() < 1e-6);
            prop_assert!(((result.position.y + result.size.height) - (y + h)).abs() < 1e-6);
        }
    }
}
