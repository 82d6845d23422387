// Static catalogue of hosted apps and their default window geometry

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{StateError, StateResult};
use super::geometry::{WindowPosition, WindowSize};

/// Identifier of a hosted application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppId {
    Finder,
    Settings,
    Browser,
    TextEditor,
    ImageViewer,
    LoveLetters,
    Bookstore,
    Compass,
    SoulSync,
}

impl AppId {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppId::Finder => "finder",
            AppId::Settings => "settings",
            AppId::Browser => "browser",
            AppId::TextEditor => "text-editor",
            AppId::ImageViewer => "image-viewer",
            AppId::LoveLetters => "love-letters",
            AppId::Bookstore => "bookstore",
            AppId::Compass => "compass",
            AppId::SoulSync => "soul-sync",
        }
    }

    /// Parse an app id sent by the webview
    pub fn parse(s: &str) -> StateResult<Self> {
        match s {
            "finder" => Ok(AppId::Finder),
            "settings" => Ok(AppId::Settings),
            "browser" => Ok(AppId::Browser),
            "text-editor" => Ok(AppId::TextEditor),
            "image-viewer" => Ok(AppId::ImageViewer),
            "love-letters" => Ok(AppId::LoveLetters),
            "bookstore" => Ok(AppId::Bookstore),
            "compass" => Ok(AppId::Compass),
            "soul-sync" => Ok(AppId::SoulSync),
            other => Err(StateError::UnknownApp(other.to_string())),
        }
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static descriptor of a hosted application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppRegistryEntry {
    pub id: AppId,
    pub name: String,
    /// Icon name the webview resolves (lucide icon set)
    pub icon: String,
    pub default_size: WindowSize,
    pub default_position: WindowPosition,
    /// Renderer key the webview maps to a component
    pub component: String,
}

impl AppRegistryEntry {
    pub fn new(
        id: AppId,
        name: &str,
        icon: &str,
        default_size: WindowSize,
        default_position: WindowPosition,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            icon: icon.to_string(),
            default_size,
            default_position,
            component: id.as_str().to_string(),
        }
    }
}

/// Ordered app catalogue. Order is the dock / desktop icon order.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<AppRegistryEntry>,
}

impl Registry {
    pub fn new(entries: Vec<AppRegistryEntry>) -> Self {
        Self { entries }
    }

    /// The apps shipped with the desktop
    pub fn builtin() -> Self {
        fn entry(
            id: AppId,
            name: &str,
            icon: &str,
            (w, h): (f64, f64),
            (x, y): (f64, f64),
        ) -> AppRegistryEntry {
            AppRegistryEntry::new(id, name, icon, WindowSize::new(w, h), WindowPosition::new(x, y))
        }

        Self::new(vec![
            entry(AppId::Finder, "Finder", "FolderOpen", (800.0, 500.0), (100.0, 100.0)),
            entry(AppId::LoveLetters, "Love Letters", "Heart", (860.0, 560.0), (140.0, 90.0)),
            entry(AppId::Bookstore, "Bookstore", "BookOpen", (960.0, 620.0), (120.0, 70.0)),
            entry(AppId::Compass, "Compass", "Compass", (1000.0, 640.0), (110.0, 60.0)),
            entry(AppId::SoulSync, "Soul Sync", "Music", (420.0, 560.0), (260.0, 100.0)),
            entry(AppId::Browser, "Browser", "Globe", (900.0, 600.0), (200.0, 80.0)),
            entry(AppId::TextEditor, "TextEdit", "FileText", (640.0, 480.0), (180.0, 140.0)),
            entry(AppId::ImageViewer, "Preview", "Image", (720.0, 520.0), (220.0, 110.0)),
            entry(AppId::Settings, "Settings", "Settings", (600.0, 450.0), (150.0, 120.0)),
        ])
    }

    /// Look up an app. A miss means the registry and its callers disagree.
    pub fn get(&self, id: AppId) -> StateResult<&AppRegistryEntry> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .ok_or_else(|| StateError::UnknownApp(id.to_string()))
    }

    pub fn entries(&self) -> &[AppRegistryEntry] {
        &self.entries
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
