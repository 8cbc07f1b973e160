//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

mod system;

use thiserror::Error;

use crate::{
    model::{
        AppId, DesktopState, DesktopSurface, DragSession, InteractionState, PointerPosition,
        PowerAction, QuickToggle, UnknownAppError, WindowPosition,
    },
    window_manager::centered_position,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open an app window, restore it if minimized, or focus it if already visible.
    OpenApp {
        /// App to open.
        app_id: AppId,
    },
    /// Same as [`DesktopAction::OpenApp`] for a free-form app name.
    OpenAppByName {
        /// Display name to resolve against the app registry.
        name: String,
    },
    /// Close an app window and reset its record.
    CloseApp {
        /// App to close.
        app_id: AppId,
    },
    /// Hide an app window while keeping it open.
    MinimizeApp {
        /// App to minimize.
        app_id: AppId,
    },
    /// Flip an app window between maximized and floating.
    ToggleMaximizeApp {
        /// App to toggle.
        app_id: AppId,
    },
    /// Make an open window the active (topmost) one.
    FocusApp {
        /// App to focus.
        app_id: AppId,
    },
    /// Taskbar button click for an open app.
    ActivateTaskbarEntry {
        /// App behind the taskbar button.
        app_id: AppId,
    },
    /// Begin dragging a window by its titlebar.
    BeginDrag {
        /// Window under the pointer.
        app_id: AppId,
        /// Pointer position at press time.
        pointer: PointerPosition,
    },
    /// Update an in-progress drag.
    UpdateDrag {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active drag.
    EndDrag,
    /// The desktop surface changed size.
    ResizeSurface {
        /// New surface bounds.
        surface: DesktopSurface,
    },
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Replace the shared taskbar/start menu search text.
    SetSearchTerm {
        /// New search text.
        term: String,
    },
    /// Toggle the power menu inside the start menu.
    TogglePowerMenu,
    /// Close the power menu if open.
    ClosePowerMenu,
    /// Run a power menu entry.
    Power(PowerAction),
    /// Leave sleep on pointer activity.
    Wake,
    /// Complete a pending restart.
    FinishRestart,
    /// Power the machine back on after a shut down.
    PowerOn,
    /// Replace the lock screen password field.
    SetEnteredPassword {
        /// Typed password text.
        password: String,
    },
    /// Submit the lock screen password field.
    SubmitPassword,
    /// One wall-clock second elapsed.
    ClockTick,
    /// Taskbar tray icon click: select and flip a quick setting, and open the panel.
    TrayQuickSetting {
        /// Tray setting clicked.
        toggle: QuickToggle,
    },
    /// Quick settings panel tile click.
    ToggleQuickSettingTile {
        /// Tile clicked.
        toggle: QuickToggle,
    },
    /// Close the quick settings panel.
    CloseQuickSettings,
    /// Set display brightness (percent).
    SetBrightness {
        /// Requested brightness; values above 100 are clamped.
        value: u8,
    },
    /// Set output volume (percent).
    SetVolume {
        /// Requested volume; values above 100 are clamped.
        value: u8,
    },
    /// Nudge the simulated battery level.
    AdjustBattery {
        /// Signed percentage delta.
        delta: i8,
    },
    /// Toggle the taskbar overflow icon tray.
    ToggleExtraIcons,
    /// Toggle the taskbar clock popup.
    ToggleTimePopup,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Dispatch [`DesktopAction::FinishRestart`] after the delay.
    ScheduleRestartComplete {
        /// Delay before the restart completes, in milliseconds.
        delay_ms: u32,
    },
    /// Tell the user the lock screen password was wrong.
    PasswordRejected,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that cannot be applied. State is left untouched.
pub enum ReducerError {
    /// The action named an app that is not in the registry.
    #[error(transparent)]
    UnknownApp(#[from] UnknownAppError),
    /// A surface resize reported non-positive bounds.
    #[error("invalid desktop surface {width}x{height}")]
    InvalidSurface {
        /// Reported width.
        width: i32,
        /// Reported height.
        height: i32,
    },
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// Window transitions go through the [`crate::window_manager::WindowStore`] helpers so the
/// open-list and active-window invariants hold after every action. Actions aimed at windows
/// that are not open are no-ops.
///
/// # Errors
///
/// Returns [`ReducerError::UnknownApp`] for names outside the registry and
/// [`ReducerError::InvalidSurface`] for non-positive surface bounds.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenApp { app_id } | DesktopAction::ActivateTaskbarEntry { app_id } => {
            open_app(state, app_id);
        }
        DesktopAction::OpenAppByName { name } => {
            let app_id = name.parse::<AppId>()?;
            open_app(state, app_id);
        }
        DesktopAction::CloseApp { app_id } => {
            state.windows.remove_open(app_id);
            end_drag_for(interaction, app_id);
        }
        DesktopAction::MinimizeApp { app_id } => {
            state.windows.minimize(app_id);
            end_drag_for(interaction, app_id);
        }
        DesktopAction::ToggleMaximizeApp { app_id } => {
            state.windows.toggle_maximized(app_id);
        }
        DesktopAction::FocusApp { app_id } => {
            state.windows.set_active(Some(app_id));
        }
        DesktopAction::BeginDrag { app_id, pointer } => {
            state.windows.set_active(Some(app_id));
            interaction.dragging = state
                .windows
                .get_record(app_id)
                .filter(|record| record.is_open)
                .and_then(|record| record.position)
                .map(|origin| DragSession {
                    app_id,
                    offset_x: pointer.x.saturating_sub(origin.x),
                    offset_y: pointer.y.saturating_sub(origin.y),
                });
        }
        DesktopAction::UpdateDrag { pointer } => {
            if let Some(session) = interaction.dragging {
                state.windows.set_position(
                    session.app_id,
                    WindowPosition {
                        x: pointer.x.saturating_sub(session.offset_x),
                        y: pointer.y.saturating_sub(session.offset_y),
                    },
                );
            }
        }
        DesktopAction::EndDrag => {
            interaction.dragging = None;
        }
        DesktopAction::ResizeSurface { surface } => {
            if !surface.is_valid() {
                return Err(ReducerError::InvalidSurface {
                    width: surface.width,
                    height: surface.height,
                });
            }
            state
                .windows
                .set_surface(surface, state.config.window_defaults);
        }
        other => system::reduce_system_action(state, other, &mut effects),
    }

    Ok(effects)
}

fn open_app(state: &mut DesktopState, app_id: AppId) {
    let position = centered_position(
        state.windows.surface(),
        app_id,
        state.config.window_defaults,
    );
    state.windows.insert_open(app_id, position);
    state.windows.set_active(Some(app_id));
}

fn end_drag_for(interaction: &mut InteractionState, app_id: AppId) {
    if interaction
        .dragging
        .is_some_and(|session| session.app_id == app_id)
    {
        interaction.dragging = None;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{SessionState, WindowRecord};

    fn desktop(width: i32, height: i32) -> (DesktopState, InteractionState) {
        let state = DesktopState::new(
            crate::config::ShellConfig::default(),
            DesktopSurface { width, height },
        );
        (state, InteractionState::default())
    }

    fn apply(state: &mut DesktopState, interaction: &mut InteractionState, action: DesktopAction) {
        reduce_desktop(state, interaction, action).expect("action applies");
    }

    fn open_ids(state: &DesktopState) -> Vec<AppId> {
        state.windows.open_ids().to_vec()
    }

    #[test]
    fn open_centers_new_window_and_focuses_it() {
        let (mut state, mut ui) = desktop(1000, 600);
        apply(&mut state, &mut ui, DesktopAction::OpenApp { app_id: AppId::Calculator });

        let record = state.windows.get_record(AppId::Calculator).unwrap();
        assert!(record.is_open);
        assert!(!record.is_minimized);
        assert_eq!(record.position, Some(WindowPosition { x: 350, y: 100 }));
        assert_eq!(state.windows.active(), Some(AppId::Calculator));
    }

    #[test]
    fn reopening_focused_window_is_a_pure_noop() {
        let (mut state, mut ui) = desktop(1000, 600);
        apply(&mut state, &mut ui, DesktopAction::OpenApp { app_id: AppId::Notepad });
        let before = state.clone();

        apply(&mut state, &mut ui, DesktopAction::OpenApp { app_id: AppId::Notepad });
        assert_eq!(state, before);
    }

    #[test]
    fn reopening_keeps_dragged_position() {
        let (mut state, mut ui) = desktop(1000, 600);
        apply(&mut state, &mut ui, DesktopAction::OpenApp { app_id: AppId::Paint });
        apply(&mut state, &mut ui, DesktopAction::OpenApp { app_id: AppId::Notepad });
        apply(
            &mut state,
            &mut ui,
            DesktopAction::BeginDrag {
                app_id: AppId::Paint,
                pointer: PointerPosition { x: 150, y: 70 },
            },
        );
        apply(
            &mut state,
            &mut ui,
            DesktopAction::UpdateDrag {
                pointer: PointerPosition { x: 160, y: 90 },
            },
        );
        apply(&mut state, &mut ui, DesktopAction::EndDrag);
        apply(&mut state, &mut ui, DesktopAction::FocusApp { app_id: AppId::Notepad });

        apply(&mut state, &mut ui, DesktopAction::OpenApp { app_id: AppId::Paint });
        assert_eq!(
            state.windows.get_record(AppId::Paint).unwrap().position,
            Some(WindowPosition { x: 110, y: 80 })
        );
        assert_eq!(state.windows.active(), Some(AppId::Paint));
    }

    #[test]
    fn open_then_close_restores_seeded_record() {
        for app_id in AppId::ALL {
            let (mut state, mut ui) = desktop(1280, 800);
            apply(&mut state, &mut ui, DesktopAction::OpenApp { app_id });
            apply(&mut state, &mut ui, DesktopAction::ToggleMaximizeApp { app_id });
            apply(&mut state, &mut ui, DesktopAction::CloseApp { app_id });

            assert_eq!(
                state.windows.get_record(app_id),
                Some(&WindowRecord::closed(app_id))
            );
            assert!(state.windows.list_open().is_empty());
            assert_eq!(state.windows.active(), None);
        }
    }

    #[test]
    fn closing_active_window_focuses_earliest_visible_window() {
        let (mut state, mut ui) = desktop(1000, 600);
        apply(&mut state, &mut ui, DesktopAction::OpenApp { app_id: AppId::Paint });
        apply(&mut state, &mut ui, DesktopAction::OpenApp { app_id: AppId::Notepad });
        apply(&mut state, &mut ui, DesktopAction::OpenApp { app_id: AppId::Weather });
        apply(&mut state, &mut ui, DesktopAction::MinimizeApp { app_id: AppId::Paint });
        apply(&mut state, &mut ui, DesktopAction::FocusApp { app_id: AppId::Weather });

        apply(&mut state, &mut ui, DesktopAction::CloseApp { app_id: AppId::Weather });
        assert_eq!(state.windows.active(), Some(AppId::Notepad));
        assert_eq!(open_ids(&state), vec![AppId::Paint, AppId::Notepad]);
    }

    #[test]
    fn closing_inactive_window_keeps_focus() {
        let (mut state, mut ui) = desktop(1000, 600);
        apply(&mut state, &mut ui, DesktopAction::OpenApp { app_id: AppId::Paint });
        apply(&mut state, &mut ui, DesktopAction::OpenApp { app_id: AppId::Notepad });

        apply(&mut state, &mut ui, DesktopAction::CloseApp { app_id: AppId::Paint });
        assert_eq!(state.windows.active(), Some(AppId::Notepad));
    }

    #[test]
    fn toggle_maximize_twice_restores_flag_and_position() {
        let (mut state, mut ui) = desktop(1000, 600);
        apply(&mut state, &mut ui, DesktopAction::OpenApp { app_id: AppId::Portfolio });
        let before = state.windows.get_record(AppId::Portfolio).cloned();

        apply(&mut state, &mut ui, DesktopAction::ToggleMaximizeApp { app_id: AppId::Portfolio });
        assert!(state.windows.get_record(AppId::Portfolio).unwrap().is_maximized);
        assert_eq!(state.windows.active(), Some(AppId::Portfolio));

        apply(&mut state, &mut ui, DesktopAction::ToggleMaximizeApp { app_id: AppId::Portfolio });
        assert_eq!(state.windows.get_record(AppId::Portfolio).cloned(), before);
    }

    #[test]
    fn maximize_leaves_minimized_flag_alone() {
        let (mut state, mut ui) = desktop(1000, 600);
        apply(&mut state, &mut ui, DesktopAction::OpenApp { app_id: AppId::Paint });
        apply(&mut state, &mut ui, DesktopAction::MinimizeApp { app_id: AppId::Paint });
        apply(&mut state, &mut ui, DesktopAction::ToggleMaximizeApp { app_id: AppId::Paint });

        let record = state.windows.get_record(AppId::Paint).unwrap();
        assert!(record.is_minimized);
        assert!(record.is_maximized);
        assert_eq!(state.windows.active(), None);
    }

    #[test]
    fn drag_moves_window_by_pointer_delta() {
        let (mut state, mut ui) = desktop(1000, 600);
        apply(&mut state, &mut ui, DesktopAction::OpenApp { app_id: AppId::Calculator });

        apply(
            &mut state,
            &mut ui,
            DesktopAction::BeginDrag {
                app_id: AppId::Calculator,
                pointer: PointerPosition { x: 400, y: 110 },
            },
        );
        apply(
            &mut state,
            &mut ui,
            DesktopAction::UpdateDrag {
                pointer: PointerPosition { x: 425, y: 150 },
            },
        );

        assert_eq!(
            state.windows.get_record(AppId::Calculator).unwrap().position,
            Some(WindowPosition { x: 375, y: 140 })
        );
        assert!(ui.dragging.is_some());

        apply(&mut state, &mut ui, DesktopAction::EndDrag);
        assert_eq!(ui.dragging, None);

        apply(
            &mut state,
            &mut ui,
            DesktopAction::UpdateDrag {
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        assert_eq!(
            state.windows.get_record(AppId::Calculator).unwrap().position,
            Some(WindowPosition { x: 375, y: 140 })
        );
    }

    #[test]
    fn drag_press_focuses_the_pressed_window() {
        let (mut state, mut ui) = desktop(1000, 600);
        apply(&mut state, &mut ui, DesktopAction::OpenApp { app_id: AppId::Paint });
        apply(&mut state, &mut ui, DesktopAction::OpenApp { app_id: AppId::Calculator });

        apply(
            &mut state,
            &mut ui,
            DesktopAction::BeginDrag {
                app_id: AppId::Paint,
                pointer: PointerPosition { x: 120, y: 70 },
            },
        );
        assert_eq!(state.windows.active(), Some(AppId::Paint));
        assert_eq!(ui.dragging.map(|session| session.app_id), Some(AppId::Paint));
        assert_eq!(open_ids(&state), vec![AppId::Paint, AppId::Calculator]);
    }

    #[test]
    fn dragging_maximized_window_leaves_position_alone() {
        let (mut state, mut ui) = desktop(1000, 600);
        apply(&mut state, &mut ui, DesktopAction::OpenApp { app_id: AppId::Paint });
        apply(&mut state, &mut ui, DesktopAction::ToggleMaximizeApp { app_id: AppId::Paint });
        let before = state.windows.get_record(AppId::Paint).unwrap().position;

        apply(
            &mut state,
            &mut ui,
            DesktopAction::BeginDrag {
                app_id: AppId::Paint,
                pointer: PointerPosition { x: 10, y: 10 },
            },
        );
        apply(
            &mut state,
            &mut ui,
            DesktopAction::UpdateDrag {
                pointer: PointerPosition { x: 300, y: 300 },
            },
        );

        assert_eq!(state.windows.get_record(AppId::Paint).unwrap().position, before);
    }

    #[test]
    fn closing_dragged_window_ends_the_drag() {
        let (mut state, mut ui) = desktop(1000, 600);
        apply(&mut state, &mut ui, DesktopAction::OpenApp { app_id: AppId::Paint });
        apply(
            &mut state,
            &mut ui,
            DesktopAction::BeginDrag {
                app_id: AppId::Paint,
                pointer: PointerPosition { x: 120, y: 70 },
            },
        );

        apply(&mut state, &mut ui, DesktopAction::CloseApp { app_id: AppId::Paint });
        assert_eq!(ui.dragging, None);
    }

    #[test]
    fn drag_on_closed_window_starts_no_session() {
        let (mut state, mut ui) = desktop(1000, 600);
        apply(
            &mut state,
            &mut ui,
            DesktopAction::BeginDrag {
                app_id: AppId::Paint,
                pointer: PointerPosition { x: 120, y: 70 },
            },
        );
        assert_eq!(ui.dragging, None);
    }

    #[test]
    fn resize_recenters_open_floating_windows_only() {
        let (mut state, mut ui) = desktop(1000, 600);
        apply(&mut state, &mut ui, DesktopAction::OpenApp { app_id: AppId::Calculator });
        apply(&mut state, &mut ui, DesktopAction::OpenApp { app_id: AppId::Paint });
        apply(&mut state, &mut ui, DesktopAction::ToggleMaximizeApp { app_id: AppId::Paint });
        apply(&mut state, &mut ui, DesktopAction::MinimizeApp { app_id: AppId::Calculator });
        let paint_before = state.windows.get_record(AppId::Paint).cloned();

        let resize = DesktopAction::ResizeSurface {
            surface: DesktopSurface {
                width: 1200,
                height: 700,
            },
        };
        apply(&mut state, &mut ui, resize.clone());
        let calculator = state.windows.get_record(AppId::Calculator).unwrap();
        assert_eq!(calculator.position, Some(WindowPosition { x: 450, y: 150 }));
        assert!(calculator.is_minimized);
        assert_eq!(state.windows.get_record(AppId::Paint).cloned(), paint_before);

        let after_first = state.clone();
        apply(&mut state, &mut ui, resize);
        assert_eq!(state, after_first);
    }

    #[test]
    fn invalid_surface_is_rejected_without_changes() {
        let (mut state, mut ui) = desktop(1000, 600);
        let before = state.clone();

        let result = reduce_desktop(
            &mut state,
            &mut ui,
            DesktopAction::ResizeSurface {
                surface: DesktopSurface {
                    width: 0,
                    height: 600,
                },
            },
        );
        assert_eq!(
            result,
            Err(ReducerError::InvalidSurface {
                width: 0,
                height: 600
            })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn huge_surface_recenters_with_capped_size() {
        let (mut state, mut ui) = desktop(1000, 600);
        apply(&mut state, &mut ui, DesktopAction::OpenApp { app_id: AppId::Notepad });

        apply(
            &mut state,
            &mut ui,
            DesktopAction::ResizeSurface {
                surface: DesktopSurface {
                    width: 30_000_000,
                    height: 600,
                },
            },
        );
        assert_eq!(
            state.windows.get_record(AppId::Notepad).unwrap().position,
            Some(WindowPosition { x: 14_999_600, y: 60 })
        );
    }

    #[test]
    fn unknown_app_name_leaves_state_unchanged() {
        let (mut state, mut ui) = desktop(1000, 600);
        apply(&mut state, &mut ui, DesktopAction::OpenApp { app_id: AppId::Paint });
        let before = state.clone();

        let result = reduce_desktop(
            &mut state,
            &mut ui,
            DesktopAction::OpenAppByName {
                name: "Solitaire".to_string(),
            },
        );
        assert_eq!(
            result,
            Err(ReducerError::UnknownApp(UnknownAppError(
                "Solitaire".to_string()
            )))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn open_by_name_resolves_registry_entry() {
        let (mut state, mut ui) = desktop(1000, 600);
        apply(
            &mut state,
            &mut ui,
            DesktopAction::OpenAppByName {
                name: "memorytest".to_string(),
            },
        );
        assert_eq!(state.windows.active(), Some(AppId::MemoryTest));
    }

    #[test]
    fn lifecycle_actions_on_closed_windows_are_noops() {
        let (mut state, mut ui) = desktop(1000, 600);
        let before = state.clone();
        for action in [
            DesktopAction::CloseApp { app_id: AppId::Paint },
            DesktopAction::MinimizeApp { app_id: AppId::Paint },
            DesktopAction::ToggleMaximizeApp { app_id: AppId::Paint },
            DesktopAction::FocusApp { app_id: AppId::Paint },
            DesktopAction::EndDrag,
        ] {
            let effects = reduce_desktop(&mut state, &mut ui, action).expect("no-op applies");
            assert!(effects.is_empty());
        }
        assert_eq!(state, before);
        assert_eq!(state.shell.session, SessionState::Active);
    }
}
