use std::{collections::BTreeSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{config::ShellConfig, window_manager::WindowStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AppId {
    Portfolio,
    Notepad,
    MemoryTest,
    Calculator,
    Paint,
    Weather,
    Browser,
}

impl AppId {
    pub const ALL: [AppId; 7] = [
        Self::Portfolio,
        Self::Notepad,
        Self::MemoryTest,
        Self::Calculator,
        Self::Paint,
        Self::Weather,
        Self::Browser,
    ];

    /// Unique display title, also the key used by name-based lookups.
    pub fn name(self) -> &'static str {
        match self {
            Self::Portfolio => "Portfolio",
            Self::Notepad => "Notepad",
            Self::MemoryTest => "Memorytest",
            Self::Calculator => "Calculator",
            Self::Paint => "Paint",
            Self::Weather => "Weather",
            Self::Browser => "Browser",
        }
    }

    pub fn dom_id(self) -> String {
        format!("window-{}", self.name().to_ascii_lowercase())
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown application `{0}`")]
pub struct UnknownAppError(pub String);

impl FromStr for AppId {
    type Err = UnknownAppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let needle = raw.trim();
        Self::ALL
            .into_iter()
            .find(|app_id| app_id.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownAppError(needle.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub w: i32,
    pub h: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn at(position: WindowPosition, size: WindowSize) -> Self {
        Self {
            x: position.x,
            y: position.y,
            w: size.w,
            h: size.h,
        }
    }
}

/// Bounds of the simulated screen that hosts the desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopSurface {
    pub width: i32,
    pub height: i32,
}

impl DesktopSurface {
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl Default for DesktopSurface {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 640,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub app_id: AppId,
    pub is_open: bool,
    pub is_minimized: bool,
    pub is_maximized: bool,
    /// Top-left corner in surface pixels; `None` while the window is closed.
    pub position: Option<WindowPosition>,
}

impl WindowRecord {
    pub fn closed(app_id: AppId) -> Self {
        Self {
            app_id,
            is_open: false,
            is_minimized: false,
            is_maximized: false,
            position: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.is_open && !self.is_minimized
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub app_id: AppId,
    /// Pointer offset from the window's top-left corner at press time.
    pub offset_x: i32,
    pub offset_y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    Active,
    Locked,
    Sleeping,
    Restarting,
    ShutDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerAction {
    Sleep,
    Restart,
    ShutDown,
    Lock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QuickToggle {
    Wifi,
    Bluetooth,
    Airplane,
    Energy,
    Night,
    Accessibility,
    Volume,
    Battery,
}

impl QuickToggle {
    /// Tiles shown in the quick settings panel grid.
    pub const PANEL_TILES: [QuickToggle; 6] = [
        Self::Wifi,
        Self::Bluetooth,
        Self::Airplane,
        Self::Energy,
        Self::Night,
        Self::Accessibility,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Wifi => "wifi",
            Self::Bluetooth => "bluetooth",
            Self::Airplane => "airplane",
            Self::Energy => "energy",
            Self::Night => "night",
            Self::Accessibility => "accessibility",
            Self::Volume => "volume",
            Self::Battery => "battery",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Wifi => "📶",
            Self::Bluetooth => "🔵",
            Self::Airplane => "✈️",
            Self::Energy => "🌙",
            Self::Night => "☀️",
            Self::Accessibility => "⚙️",
            Self::Volume => "🔊",
            Self::Battery => "🔋",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickSettingsState {
    pub brightness: u8,
    pub volume: u8,
    pub battery_percentage: u8,
    pub active: QuickToggle,
    pub enabled: BTreeSet<QuickToggle>,
}

impl Default for QuickSettingsState {
    fn default() -> Self {
        Self {
            brightness: 50,
            volume: 75,
            battery_percentage: 75,
            active: QuickToggle::Wifi,
            enabled: BTreeSet::from([QuickToggle::Wifi]),
        }
    }
}

impl QuickSettingsState {
    pub fn is_enabled(&self, toggle: QuickToggle) -> bool {
        self.enabled.contains(&toggle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShellState {
    pub start_menu_open: bool,
    pub power_menu_open: bool,
    pub extra_icons_open: bool,
    pub time_popup_open: bool,
    pub quick_settings_open: bool,
    pub search_term: String,
    pub session: SessionState,
    pub lock_timer_secs: u32,
    pub entered_password: String,
    pub quick_settings: QuickSettingsState,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DesktopState {
    pub windows: WindowStore,
    pub shell: ShellState,
    pub config: ShellConfig,
}

impl DesktopState {
    pub fn new(config: ShellConfig, surface: DesktopSurface) -> Self {
        Self {
            windows: WindowStore::new(surface),
            shell: ShellState::default(),
            config,
        }
    }
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::new(ShellConfig::default(), DesktopSurface::default())
    }
}
