// Tauri host: exposes the window store to the webview as commands and
// forwards store events back as webview events

use std::sync::Mutex;

use tauri::{AppHandle, Emitter, Manager, State};
use tauri_plugin_global_shortcut::{Code, GlobalShortcutExt, Modifiers, Shortcut, ShortcutState};

use crate::config::WindowManagerConfig;
use crate::desktop::dock::{self, DockItem, DockOutcome};
use crate::desktop::launcher::{self, FileEntry};
use crate::desktop::{DesktopIconState, DesktopIcons};
use crate::input_handler::{
    apply_shortcut_with_gestures, GestureController, PointerPosition, WindowShortcut,
};
use crate::state::error::StateError;
use crate::state::geometry::{ResizeDirection, WindowPosition, WindowSize};
use crate::state::registry::{AppId, AppRegistryEntry, Registry};
use crate::state::window::{OpenWindowRequest, WindowAppProps, WindowInstance};
use crate::state::{StateManager, WindowSnapshot};

// ===== Window Management Commands =====

#[tauri::command]
fn open_window(
    app_id: String,
    title: Option<String>,
    props: Option<WindowAppProps>,
    state: State<Mutex<StateManager>>,
) -> Result<WindowInstance, String> {
    let app_id = AppId::parse(&app_id).map_err(|e| e.to_string())?;
    let mut manager = state.lock().map_err(|e| e.to_string())?;

    let request = OpenWindowRequest {
        app_id,
        title,
        props,
    };
    manager.open(request).map_err(|e| e.to_string())
}

#[tauri::command]
fn close_window(
    id: String,
    state: State<Mutex<StateManager>>,
    gestures: State<Mutex<GestureController>>,
) -> Result<Option<WindowInstance>, String> {
    let mut manager = state.lock().map_err(|e| e.to_string())?;
    let closed = manager.close(&id);

    let mut gestures = gestures.lock().map_err(|e| e.to_string())?;
    gestures.prune(&manager);

    Ok(closed)
}

#[tauri::command]
fn focus_window(
    id: String,
    state: State<Mutex<StateManager>>,
) -> Result<Option<WindowInstance>, String> {
    let mut manager = state.lock().map_err(|e| e.to_string())?;
    Ok(manager.focus(&id))
}

#[tauri::command]
fn minimize_window(
    id: String,
    state: State<Mutex<StateManager>>,
) -> Result<Option<WindowInstance>, String> {
    let mut manager = state.lock().map_err(|e| e.to_string())?;
    Ok(manager.minimize(&id))
}

#[tauri::command]
fn maximize_window(
    id: String,
    state: State<Mutex<StateManager>>,
) -> Result<Option<WindowInstance>, String> {
    let mut manager = state.lock().map_err(|e| e.to_string())?;
    Ok(manager.maximize(&id))
}

#[tauri::command]
fn move_window(
    id: String,
    position: WindowPosition,
    state: State<Mutex<StateManager>>,
) -> Result<Option<WindowInstance>, String> {
    let mut manager = state.lock().map_err(|e| e.to_string())?;
    Ok(manager.move_window(&id, position))
}

#[tauri::command]
fn resize_window(
    id: String,
    size: WindowSize,
    position: Option<WindowPosition>,
    state: State<Mutex<StateManager>>,
) -> Result<Option<WindowInstance>, String> {
    let mut manager = state.lock().map_err(|e| e.to_string())?;
    Ok(manager.resize(&id, size, position))
}

#[tauri::command]
fn get_windows(state: State<Mutex<StateManager>>) -> Result<WindowSnapshot, String> {
    let manager = state.lock().map_err(|e| e.to_string())?;
    Ok(manager.snapshot())
}

#[tauri::command]
fn get_app_registry(state: State<Mutex<StateManager>>) -> Result<Vec<AppRegistryEntry>, String> {
    let manager = state.lock().map_err(|e| e.to_string())?;
    Ok(manager.registry().entries().to_vec())
}

/// The webview reports its inner size on load and on every resize
#[tauri::command]
fn set_viewport(width: f64, height: f64, state: State<Mutex<StateManager>>) -> Result<(), String> {
    let mut manager = state.lock().map_err(|e| e.to_string())?;
    manager.set_viewport(WindowSize::new(width, height));
    Ok(())
}

#[tauri::command]
fn run_window_shortcut(
    shortcut: String,
    state: State<Mutex<StateManager>>,
    gestures: State<Mutex<GestureController>>,
) -> Result<Option<WindowInstance>, String> {
    let shortcut = WindowShortcut::from_str(&shortcut)
        .ok_or_else(|| format!("Invalid window shortcut: {}", shortcut))?;
    let mut manager = state.lock().map_err(|e| e.to_string())?;
    let mut gestures = gestures.lock().map_err(|e| e.to_string())?;
    Ok(apply_shortcut_with_gestures(&mut manager, &mut gestures, shortcut))
}

// ===== Pointer Gesture Commands =====

#[tauri::command]
fn begin_window_drag(
    id: String,
    x: f64,
    y: f64,
    state: State<Mutex<StateManager>>,
    gestures: State<Mutex<GestureController>>,
) -> Result<bool, String> {
    let mut manager = state.lock().map_err(|e| e.to_string())?;
    let mut gestures = gestures.lock().map_err(|e| e.to_string())?;
    Ok(gestures.begin_drag(&mut manager, &id, PointerPosition::new(x, y)))
}

#[tauri::command]
fn begin_window_resize(
    id: String,
    direction: String,
    x: f64,
    y: f64,
    state: State<Mutex<StateManager>>,
    gestures: State<Mutex<GestureController>>,
) -> Result<bool, String> {
    let direction = ResizeDirection::from_str(&direction)
        .ok_or_else(|| StateError::InvalidResizeDirection(direction.clone()).to_string())?;

    let mut manager = state.lock().map_err(|e| e.to_string())?;
    let mut gestures = gestures.lock().map_err(|e| e.to_string())?;
    Ok(gestures.begin_resize(&mut manager, &id, direction, PointerPosition::new(x, y)))
}

#[tauri::command]
fn window_pointer_move(
    id: String,
    x: f64,
    y: f64,
    state: State<Mutex<StateManager>>,
    gestures: State<Mutex<GestureController>>,
) -> Result<Option<WindowInstance>, String> {
    let mut manager = state.lock().map_err(|e| e.to_string())?;
    let mut gestures = gestures.lock().map_err(|e| e.to_string())?;
    Ok(gestures.pointer_move(&mut manager, &id, PointerPosition::new(x, y)))
}

/// Pointer-up and pointer-cancel both land here
#[tauri::command]
fn window_pointer_up(
    id: String,
    gestures: State<Mutex<GestureController>>,
) -> Result<bool, String> {
    let mut gestures = gestures.lock().map_err(|e| e.to_string())?;
    Ok(gestures.end_gesture(&id).is_some())
}

// ===== Dock / Desktop Commands =====

#[tauri::command]
fn dock_click(app_id: String, state: State<Mutex<StateManager>>) -> Result<DockOutcome, String> {
    let app_id = AppId::parse(&app_id).map_err(|e| e.to_string())?;
    let mut manager = state.lock().map_err(|e| e.to_string())?;
    dock::dock_click(&mut manager, app_id).map_err(|e| e.to_string())
}

#[tauri::command]
fn get_dock_items(state: State<Mutex<StateManager>>) -> Result<Vec<DockItem>, String> {
    let manager = state.lock().map_err(|e| e.to_string())?;
    Ok(dock::dock_items(&manager))
}

#[tauri::command]
fn get_desktop_icons(desktop: State<Mutex<DesktopIcons>>) -> Result<Vec<DesktopIconState>, String> {
    let icons = desktop.lock().map_err(|e| e.to_string())?;
    Ok(icons.icons().to_vec())
}

#[tauri::command]
fn move_desktop_icon(
    app_id: String,
    dx: f64,
    dy: f64,
    desktop: State<Mutex<DesktopIcons>>,
) -> Result<Option<DesktopIconState>, String> {
    let app_id = AppId::parse(&app_id).map_err(|e| e.to_string())?;
    let mut icons = desktop.lock().map_err(|e| e.to_string())?;
    Ok(icons.move_icon(app_id, dx, dy))
}

#[tauri::command]
fn open_desktop_icon(
    app_id: String,
    state: State<Mutex<StateManager>>,
    desktop: State<Mutex<DesktopIcons>>,
) -> Result<WindowInstance, String> {
    let app_id = AppId::parse(&app_id).map_err(|e| e.to_string())?;
    let mut manager = state.lock().map_err(|e| e.to_string())?;
    let icons = desktop.lock().map_err(|e| e.to_string())?;
    icons.open_icon(&mut manager, app_id).map_err(|e| e.to_string())
}

#[tauri::command]
fn open_file(
    file: FileEntry,
    state: State<Mutex<StateManager>>,
) -> Result<Option<WindowInstance>, String> {
    let mut manager = state.lock().map_err(|e| e.to_string())?;
    launcher::open_file(&mut manager, &file).map_err(|e| e.to_string())
}

#[tauri::command]
fn open_letter(
    letter_id: String,
    state: State<Mutex<StateManager>>,
) -> Result<WindowInstance, String> {
    let mut manager = state.lock().map_err(|e| e.to_string())?;
    manager
        .open(launcher::open_request_for_letter(&letter_id))
        .map_err(|e| e.to_string())
}

// ===== Global Shortcuts =====

/// Alt-chords acting on the focused window
fn default_shortcuts() -> Vec<(Shortcut, WindowShortcut)> {
    vec![
        (
            Shortcut::new(Some(Modifiers::ALT), Code::KeyW),
            WindowShortcut::CloseFocused,
        ),
        (
            Shortcut::new(Some(Modifiers::ALT), Code::KeyM),
            WindowShortcut::MinimizeFocused,
        ),
        (
            Shortcut::new(Some(Modifiers::ALT), Code::KeyF),
            WindowShortcut::ToggleMaximizeFocused,
        ),
        (
            Shortcut::new(Some(Modifiers::ALT), Code::Backquote),
            WindowShortcut::CycleFocus,
        ),
    ]
}

fn process_shortcut(app: &AppHandle, shortcut: &Shortcut) {
    let Some(action) = default_shortcuts()
        .into_iter()
        .find(|(bound, _)| bound == shortcut)
        .map(|(_, action)| action)
    else {
        return;
    };

    let state = app.state::<Mutex<StateManager>>();
    let mut manager = match state.lock() {
        Ok(m) => m,
        Err(e) => {
            log::error!("Failed to lock window state: {}", e);
            return;
        }
    };
    let gestures = app.state::<Mutex<GestureController>>();
    let mut gestures = match gestures.lock() {
        Ok(g) => g,
        Err(e) => {
            log::error!("Failed to lock gesture state: {}", e);
            return;
        }
    };
    apply_shortcut_with_gestures(&mut manager, &mut gestures, action);
}

/// Enable or disable global shortcuts (released while the app is unfocused)
#[tauri::command]
fn set_global_shortcuts_enabled(app: AppHandle, enabled: bool) -> Result<(), String> {
    if !enabled {
        log::debug!("Global shortcuts disabled");
        return app
            .global_shortcut()
            .unregister_all()
            .map_err(|e| format!("Failed to unregister shortcuts: {}", e));
    }

    // Start clean to avoid "already registered" errors
    let _ = app.global_shortcut().unregister_all();

    let mut registered = 0;
    let mut last_error = None;
    for (shortcut, _) in default_shortcuts() {
        match app.global_shortcut().register(shortcut.clone()) {
            Ok(_) => registered += 1,
            Err(e) => {
                log::warn!("Failed to register shortcut {:?}: {}", shortcut, e);
                last_error = Some(e);
            }
        }
    }

    match (registered, last_error) {
        (0, Some(e)) => Err(format!("Failed to register any shortcuts: {}", e)),
        (0, None) => Err("No shortcuts registered".to_string()),
        (n, _) => {
            log::debug!("Global shortcuts enabled ({} keys registered)", n);
            Ok(())
        }
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let config = WindowManagerConfig::from_env();
    let registry = Registry::builtin();
    let desktop = DesktopIcons::from_registry(&registry);
    let manager = StateManager::with_config(registry, config);

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(
            tauri_plugin_global_shortcut::Builder::new()
                .with_handler(|app, shortcut, event| {
                    // Only act on key press, not release
                    if event.state == ShortcutState::Pressed {
                        process_shortcut(app, shortcut);
                    }
                })
                .build(),
        )
        .manage(Mutex::new(manager))
        .manage(Mutex::new(GestureController::new()))
        .manage(Mutex::new(desktop))
        .setup(|app| {
            // Forward every store change to the webview
            let handle = app.handle().clone();
            let state = app.state::<Mutex<StateManager>>();
            let mut manager = state.lock().map_err(|e| e.to_string())?;
            manager.subscribe(move |event| {
                if let Err(e) = handle.emit(event.name(), event) {
                    log::warn!("Failed to emit {}: {}", event.name(), e);
                }
            });

            log::info!(
                "Window manager ready ({} apps, viewport {}x{})",
                manager.registry().entries().len(),
                manager.config().viewport.width,
                manager.config().viewport.height
            );
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Window management
            open_window,
            close_window,
            focus_window,
            minimize_window,
            maximize_window,
            move_window,
            resize_window,
            get_windows,
            get_app_registry,
            set_viewport,
            run_window_shortcut,
            // Pointer gestures
            begin_window_drag,
            begin_window_resize,
            window_pointer_move,
            window_pointer_up,
            // Dock and desktop
            dock_click,
            get_dock_items,
            get_desktop_icons,
            move_desktop_icon,
            open_desktop_icon,
            open_file,
            open_letter,
            // Shortcuts
            set_global_shortcuts_enabled,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
