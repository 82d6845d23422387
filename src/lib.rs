// Window state store, its data model, and the app registry
pub mod state;

// Input handler module for pointer gestures and window shortcuts
#[path = "inputHandler/mod.rs"]
pub mod input_handler;

// Desktop surface: icons, dock, and file launching
pub mod desktop;

// Runtime configuration
pub mod config;

// Tauri host
#[cfg(feature = "desktop")]
mod shell;

#[cfg(feature = "desktop")]
pub use shell::run;
