//! Window state store and geometry helpers used by the desktop reducer.
//!
//! [`WindowStore`] is the single owner of every [`WindowRecord`], the ordered open-window list,
//! and the active window. Readers get shared references; the mutating helpers are crate-private
//! so that only [`crate::reducer::reduce_desktop`] can drive transitions.

use std::collections::BTreeMap;

use crate::{
    apps,
    config::WindowDefaults,
    model::{AppId, DesktopSurface, WindowPosition, WindowRecord, WindowRect, WindowSize},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowStore {
    records: BTreeMap<AppId, WindowRecord>,
    open: Vec<AppId>,
    active: Option<AppId>,
    surface: DesktopSurface,
    revision: u64,
}

impl WindowStore {
    /// Seeds one closed record per registered application.
    pub fn new(surface: DesktopSurface) -> Self {
        let records = apps::app_registry()
            .iter()
            .map(|entry| (entry.app_id, WindowRecord::closed(entry.app_id)))
            .collect();
        Self {
            records,
            open: Vec::new(),
            active: None,
            surface,
            revision: 0,
        }
    }

    pub fn get_record(&self, app_id: AppId) -> Option<&WindowRecord> {
        self.records.get(&app_id)
    }

    /// Open windows in the order they were opened.
    pub fn list_open(&self) -> Vec<&WindowRecord> {
        self.open
            .iter()
            .filter_map(|app_id| self.records.get(app_id))
            .collect()
    }

    pub fn open_ids(&self) -> &[AppId] {
        &self.open
    }

    pub fn is_open(&self, app_id: AppId) -> bool {
        self.records.get(&app_id).is_some_and(|record| record.is_open)
    }

    pub fn active(&self) -> Option<AppId> {
        self.active
    }

    pub fn surface(&self) -> DesktopSurface {
        self.surface
    }

    /// Monotonic counter bumped once per call that changed the store.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Sets the focused window.
    ///
    /// Naming a window that is not open is a no-op. Naming a minimized window restores it first.
    /// Returns `true` when the store changed.
    pub fn set_active(&mut self, app_id: Option<AppId>) -> bool {
        let Some(app_id) = app_id else {
            if self.active.take().is_some() {
                self.touch();
                return true;
            }
            return false;
        };

        let Some(record) = self.records.get_mut(&app_id).filter(|r| r.is_open) else {
            return false;
        };
        let restored = std::mem::replace(&mut record.is_minimized, false);
        if !restored && self.active == Some(app_id) {
            return false;
        }

        self.active = Some(app_id);
        self.touch();
        true
    }

    pub(crate) fn insert_open(&mut self, app_id: AppId, position: WindowPosition) -> bool {
        let Some(record) = self.records.get_mut(&app_id) else {
            return false;
        };
        if record.is_open {
            return false;
        }

        record.is_open = true;
        record.is_minimized = false;
        record.position = Some(position);
        self.open.push(app_id);
        self.touch();
        true
    }

    pub(crate) fn remove_open(&mut self, app_id: AppId) -> bool {
        if !self.is_open(app_id) {
            return false;
        }

        self.open.retain(|id| *id != app_id);
        self.records.insert(app_id, WindowRecord::closed(app_id));
        if self.active == Some(app_id) {
            self.active = self.next_active_candidate();
        }
        self.touch();
        true
    }

    pub(crate) fn minimize(&mut self, app_id: AppId) -> bool {
        let Some(record) = self.records.get_mut(&app_id).filter(|r| r.is_open) else {
            return false;
        };
        if record.is_minimized {
            return false;
        }

        record.is_minimized = true;
        if self.active == Some(app_id) {
            self.active = self.next_active_candidate();
        }
        self.touch();
        true
    }

    pub(crate) fn toggle_maximized(&mut self, app_id: AppId) -> bool {
        let Some(record) = self.records.get_mut(&app_id).filter(|r| r.is_open) else {
            return false;
        };

        record.is_maximized = !record.is_maximized;
        self.touch();
        true
    }

    /// Writes a new top-left corner. Ignored while the window is closed or maximized.
    pub(crate) fn set_position(&mut self, app_id: AppId, position: WindowPosition) -> bool {
        let Some(record) = self
            .records
            .get_mut(&app_id)
            .filter(|r| r.is_open && !r.is_maximized)
        else {
            return false;
        };
        if record.position == Some(position) {
            return false;
        }

        record.position = Some(position);
        self.touch();
        true
    }

    /// Stores a new surface and recenters every open, non-maximized window against it.
    pub(crate) fn set_surface(&mut self, surface: DesktopSurface, defaults: WindowDefaults) -> bool {
        let mut changed = self.surface != surface;
        self.surface = surface;

        for app_id in &self.open {
            let Some(record) = self.records.get_mut(app_id) else {
                continue;
            };
            if record.is_maximized {
                continue;
            }
            let centered = Some(centered_position(surface, *app_id, defaults));
            if record.position != centered {
                record.position = centered;
                changed = true;
            }
        }

        if changed {
            self.touch();
        }
        changed
    }

    /// Earliest open window that is not minimized.
    fn next_active_candidate(&self) -> Option<AppId> {
        self.open.iter().copied().find(|app_id| {
            self.records
                .get(app_id)
                .is_some_and(|record| record.is_visible())
        })
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

/// Window size used when `app_id` is opened on `surface`.
///
/// Apps with a fixed size in the registry keep it; others take a share of the surface, capped.
pub fn default_window_size(
    surface: DesktopSurface,
    app_id: AppId,
    defaults: WindowDefaults,
) -> WindowSize {
    if let Some(size) = apps::app_descriptor(app_id).default_size {
        return size;
    }

    WindowSize {
        w: scaled_extent(surface.width, defaults.viewport_percent, defaults.max_width),
        h: scaled_extent(surface.height, defaults.viewport_percent, defaults.max_height),
    }
}

/// `percent` of `extent`, capped. Widened so huge surfaces cannot overflow.
fn scaled_extent(extent: i32, percent: i32, cap: i32) -> i32 {
    let scaled = (i64::from(extent) * i64::from(percent) / 100).min(i64::from(cap));
    i32::try_from(scaled).unwrap_or(cap)
}

/// Top-left corner that centers `app_id`'s default size within `surface`, never negative.
pub fn centered_position(
    surface: DesktopSurface,
    app_id: AppId,
    defaults: WindowDefaults,
) -> WindowPosition {
    let size = default_window_size(surface, app_id, defaults);
    WindowPosition {
        x: ((surface.width - size.w) / 2).max(0),
        y: ((surface.height - size.h) / 2).max(0),
    }
}

/// Area a maximized window fills: the whole surface minus the taskbar band.
///
/// The surface spans the full shell, taskbar included, so the band is removed only here.
pub fn maximized_rect(surface: DesktopSurface, taskbar_height_px: i32) -> WindowRect {
    WindowRect {
        x: 0,
        y: 0,
        w: surface.width,
        h: surface.height.saturating_sub(taskbar_height_px).max(0),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowVisibility {
    Hidden,
    Floating,
    Maximized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPlacement {
    pub app_id: AppId,
    pub visibility: WindowVisibility,
    pub rect: WindowRect,
    pub z_index: u32,
    pub is_active: bool,
}

/// Computes where and in which stacking order each open window is drawn.
///
/// The active window is always topmost; the others stack in open-list order.
pub fn render_plan(
    store: &WindowStore,
    defaults: WindowDefaults,
    taskbar_height_px: i32,
) -> Vec<WindowPlacement> {
    let surface = store.surface();
    let top_z = store.open_ids().len() as u32 + 1;

    store
        .list_open()
        .into_iter()
        .enumerate()
        .map(|(idx, record)| {
            let is_active = store.active() == Some(record.app_id);
            let visibility = if record.is_minimized {
                WindowVisibility::Hidden
            } else if record.is_maximized {
                WindowVisibility::Maximized
            } else {
                WindowVisibility::Floating
            };
            let rect = match visibility {
                WindowVisibility::Maximized => maximized_rect(surface, taskbar_height_px),
                _ => WindowRect::at(
                    record.position.unwrap_or_default(),
                    default_window_size(surface, record.app_id, defaults),
                ),
            };

            WindowPlacement {
                app_id: record.app_id,
                visibility,
                rect,
                z_index: if is_active { top_z } else { idx as u32 + 1 },
                is_active,
            }
        })
        .collect()
}
