use serde::{Deserialize, Serialize};

use super::geometry::{WindowPosition, WindowRect, WindowSize};
use super::registry::AppId;

/// Payload handed to the hosted app renderer. The store never looks inside.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum WindowAppProps {
    /// Text shown by the text editor
    TextDocument { content: String },
    /// Image shown by the image viewer
    Image { image_url: String },
    /// Letter opened from a notification
    Letter { letter_id: String },
}

/// One open application window
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct WindowInstance {
    pub id: String,                 // "{app_id}-{uuid}"
    pub app_id: AppId,              // Registry entry this window hosts
    pub title: String,              // Window title
    pub position: WindowPosition,   // Top-left in desktop space
    pub size: WindowSize,           // Never below the configured minimum
    pub z_index: u64,               // Stacking order, higher renders on top
    pub is_minimized: bool,         // Hidden from rendering, still listed
    pub is_maximized: bool,         // Pinned to the maximize fill rect
    pub pre_maximize_rect: Option<WindowRect>, // Set only while maximized
    pub props: Option<WindowAppProps>,
}

impl WindowInstance {
    pub fn rect(&self) -> WindowRect {
        WindowRect::new(self.position, self.size)
    }

    pub fn is_visible(&self) -> bool {
        !self.is_minimized
    }
}

/// Inbound "open window" request from the dock, a desktop icon, or a notification
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct OpenWindowRequest {
    pub app_id: AppId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub props: Option<WindowAppProps>,
}

impl OpenWindowRequest {
    pub fn new(app_id: AppId) -> Self {
        Self {
            app_id,
            title: None,
            props: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_props(mut self, props: WindowAppProps) -> Self {
        self.props = Some(props);
        self
    }
}

impl From<AppId> for OpenWindowRequest {
    fn from(app_id: AppId) -> Self {
        Self::new(app_id)
    }
}
