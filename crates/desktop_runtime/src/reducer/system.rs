//! Reducer helpers for shell chrome: menus, power/session overlays, and quick settings.

use crate::{
    model::{DesktopState, PowerAction, QuickToggle, SessionState, ShellState},
    reducer::{DesktopAction, RuntimeEffect},
};

const PERCENT_MAX: u8 = 100;

pub(super) fn reduce_system_action(
    state: &mut DesktopState,
    action: DesktopAction,
    effects: &mut Vec<RuntimeEffect>,
) {
    let restart_delay_ms = state.config.restart_delay_ms;
    let shell = &mut state.shell;
    match action {
        DesktopAction::ToggleStartMenu => {
            shell.start_menu_open = !shell.start_menu_open;
            if !shell.start_menu_open {
                shell.power_menu_open = false;
            }
        }
        DesktopAction::CloseStartMenu => {
            shell.start_menu_open = false;
            shell.power_menu_open = false;
        }
        DesktopAction::SetSearchTerm { term } => {
            shell.search_term = term;
        }
        DesktopAction::TogglePowerMenu => {
            shell.power_menu_open = !shell.power_menu_open;
        }
        DesktopAction::ClosePowerMenu => {
            shell.power_menu_open = false;
        }
        DesktopAction::Power(power) => {
            shell.power_menu_open = false;
            shell.start_menu_open = false;
            match power {
                PowerAction::Sleep => shell.session = SessionState::Sleeping,
                PowerAction::ShutDown => shell.session = SessionState::ShutDown,
                PowerAction::Lock => lock(shell),
                PowerAction::Restart => {
                    shell.session = SessionState::Restarting;
                    effects.push(RuntimeEffect::ScheduleRestartComplete {
                        delay_ms: restart_delay_ms,
                    });
                }
            }
        }
        DesktopAction::Wake => {
            leave_session(shell, SessionState::Sleeping);
        }
        DesktopAction::FinishRestart => {
            leave_session(shell, SessionState::Restarting);
        }
        DesktopAction::PowerOn => {
            leave_session(shell, SessionState::ShutDown);
        }
        DesktopAction::SetEnteredPassword { password } => {
            if shell.session == SessionState::Locked {
                shell.entered_password = password;
            }
        }
        DesktopAction::SubmitPassword => {
            if shell.session != SessionState::Locked {
                return;
            }
            if shell.entered_password == state.config.lock_password {
                shell.session = SessionState::Active;
                shell.entered_password.clear();
                shell.lock_timer_secs = 0;
            } else {
                effects.push(RuntimeEffect::PasswordRejected);
            }
        }
        DesktopAction::ClockTick => {
            if shell.session == SessionState::Locked {
                shell.lock_timer_secs = shell.lock_timer_secs.saturating_add(1);
            }
        }
        DesktopAction::TrayQuickSetting { toggle } => {
            shell.quick_settings_open = true;
            flip_quick_setting(shell, toggle);
        }
        DesktopAction::ToggleQuickSettingTile { toggle } => {
            flip_quick_setting(shell, toggle);
        }
        DesktopAction::CloseQuickSettings => {
            shell.quick_settings_open = false;
        }
        DesktopAction::SetBrightness { value } => {
            shell.quick_settings.brightness = value.min(PERCENT_MAX);
        }
        DesktopAction::SetVolume { value } => {
            shell.quick_settings.volume = value.min(PERCENT_MAX);
        }
        DesktopAction::AdjustBattery { delta } => {
            let level = shell.quick_settings.battery_percentage;
            shell.quick_settings.battery_percentage =
                level.saturating_add_signed(delta).min(PERCENT_MAX);
        }
        DesktopAction::ToggleExtraIcons => {
            shell.extra_icons_open = !shell.extra_icons_open;
        }
        DesktopAction::ToggleTimePopup => {
            shell.time_popup_open = !shell.time_popup_open;
        }
        // Window actions are handled by `reduce_desktop` before delegating here.
        DesktopAction::OpenApp { .. }
        | DesktopAction::OpenAppByName { .. }
        | DesktopAction::CloseApp { .. }
        | DesktopAction::MinimizeApp { .. }
        | DesktopAction::ToggleMaximizeApp { .. }
        | DesktopAction::FocusApp { .. }
        | DesktopAction::ActivateTaskbarEntry { .. }
        | DesktopAction::BeginDrag { .. }
        | DesktopAction::UpdateDrag { .. }
        | DesktopAction::EndDrag
        | DesktopAction::ResizeSurface { .. } => {}
    }
}

fn lock(shell: &mut ShellState) {
    shell.session = SessionState::Locked;
    shell.lock_timer_secs = 0;
    shell.entered_password.clear();
}

fn leave_session(shell: &mut ShellState, from: SessionState) {
    if shell.session == from {
        shell.session = SessionState::Active;
    }
}

fn flip_quick_setting(shell: &mut ShellState, toggle: QuickToggle) {
    let settings = &mut shell.quick_settings;
    settings.active = toggle;
    if !settings.enabled.remove(&toggle) {
        settings.enabled.insert(toggle);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        model::{DesktopState, InteractionState, PowerAction, QuickToggle, SessionState},
        reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
    };

    fn run(state: &mut DesktopState, action: DesktopAction) -> Vec<RuntimeEffect> {
        let mut interaction = InteractionState::default();
        reduce_desktop(state, &mut interaction, action).expect("shell action applies")
    }

    #[test]
    fn closing_start_menu_also_closes_power_menu() {
        let mut state = DesktopState::default();
        run(&mut state, DesktopAction::ToggleStartMenu);
        run(&mut state, DesktopAction::TogglePowerMenu);
        assert!(state.shell.start_menu_open && state.shell.power_menu_open);

        run(&mut state, DesktopAction::ToggleStartMenu);
        assert!(!state.shell.start_menu_open);
        assert!(!state.shell.power_menu_open);
    }

    #[test]
    fn sleep_then_wake_returns_to_active() {
        let mut state = DesktopState::default();
        run(&mut state, DesktopAction::ToggleStartMenu);
        run(&mut state, DesktopAction::Power(PowerAction::Sleep));
        assert_eq!(state.shell.session, SessionState::Sleeping);
        assert!(!state.shell.start_menu_open);

        run(&mut state, DesktopAction::Wake);
        assert_eq!(state.shell.session, SessionState::Active);
    }

    #[test]
    fn wake_does_not_unlock() {
        let mut state = DesktopState::default();
        run(&mut state, DesktopAction::Power(PowerAction::Lock));
        run(&mut state, DesktopAction::Wake);
        assert_eq!(state.shell.session, SessionState::Locked);
    }

    #[test]
    fn restart_schedules_completion() {
        let mut state = DesktopState::default();
        let effects = run(&mut state, DesktopAction::Power(PowerAction::Restart));
        assert_eq!(state.shell.session, SessionState::Restarting);
        assert_eq!(
            effects,
            vec![RuntimeEffect::ScheduleRestartComplete { delay_ms: 5_000 }]
        );

        run(&mut state, DesktopAction::FinishRestart);
        assert_eq!(state.shell.session, SessionState::Active);
    }

    #[test]
    fn shut_down_waits_for_power_on() {
        let mut state = DesktopState::default();
        run(&mut state, DesktopAction::Power(PowerAction::ShutDown));
        run(&mut state, DesktopAction::FinishRestart);
        assert_eq!(state.shell.session, SessionState::ShutDown);

        run(&mut state, DesktopAction::PowerOn);
        assert_eq!(state.shell.session, SessionState::Active);
    }

    #[test]
    fn lock_screen_accepts_configured_password_only() {
        let mut state = DesktopState::default();
        run(&mut state, DesktopAction::Power(PowerAction::Lock));
        run(&mut state, DesktopAction::ClockTick);
        run(&mut state, DesktopAction::ClockTick);
        assert_eq!(state.shell.lock_timer_secs, 2);

        run(
            &mut state,
            DesktopAction::SetEnteredPassword {
                password: "hunter2".to_string(),
            },
        );
        let effects = run(&mut state, DesktopAction::SubmitPassword);
        assert_eq!(effects, vec![RuntimeEffect::PasswordRejected]);
        assert_eq!(state.shell.session, SessionState::Locked);
        assert_eq!(state.shell.entered_password, "hunter2");
        assert_eq!(state.shell.lock_timer_secs, 2);

        run(
            &mut state,
            DesktopAction::SetEnteredPassword {
                password: "aryan".to_string(),
            },
        );
        let effects = run(&mut state, DesktopAction::SubmitPassword);
        assert!(effects.is_empty());
        assert_eq!(state.shell.session, SessionState::Active);
        assert_eq!(state.shell.entered_password, "");
        assert_eq!(state.shell.lock_timer_secs, 0);
    }

    #[test]
    fn clock_tick_only_counts_while_locked() {
        let mut state = DesktopState::default();
        run(&mut state, DesktopAction::ClockTick);
        assert_eq!(state.shell.lock_timer_secs, 0);
    }

    #[test]
    fn tray_click_opens_panel_and_flips_setting() {
        let mut state = DesktopState::default();
        run(
            &mut state,
            DesktopAction::TrayQuickSetting {
                toggle: QuickToggle::Volume,
            },
        );
        assert!(state.shell.quick_settings_open);
        assert_eq!(state.shell.quick_settings.active, QuickToggle::Volume);
        assert!(state.shell.quick_settings.is_enabled(QuickToggle::Volume));

        run(
            &mut state,
            DesktopAction::ToggleQuickSettingTile {
                toggle: QuickToggle::Wifi,
            },
        );
        assert!(!state.shell.quick_settings.is_enabled(QuickToggle::Wifi));

        run(&mut state, DesktopAction::CloseQuickSettings);
        assert!(!state.shell.quick_settings_open);
    }

    #[test]
    fn levels_stay_within_percent_range() {
        let mut state = DesktopState::default();
        run(&mut state, DesktopAction::SetBrightness { value: 180 });
        run(&mut state, DesktopAction::SetVolume { value: 0 });
        assert_eq!(state.shell.quick_settings.brightness, 100);
        assert_eq!(state.shell.quick_settings.volume, 0);

        run(&mut state, DesktopAction::AdjustBattery { delta: 100 });
        assert_eq!(state.shell.quick_settings.battery_percentage, 100);
        run(&mut state, DesktopAction::AdjustBattery { delta: -128 });
        assert_eq!(state.shell.quick_settings.battery_percentage, 0);
        run(&mut state, DesktopAction::AdjustBattery { delta: 3 });
        assert_eq!(state.shell.quick_settings.battery_percentage, 3);
    }

    #[test]
    fn popups_toggle_independently() {
        let mut state = DesktopState::default();
        run(&mut state, DesktopAction::ToggleExtraIcons);
        run(&mut state, DesktopAction::ToggleTimePopup);
        assert!(state.shell.extra_icons_open && state.shell.time_popup_open);

        run(&mut state, DesktopAction::ToggleExtraIcons);
        assert!(!state.shell.extra_icons_open);
        assert!(state.shell.time_popup_open);
    }

    #[test]
    fn search_term_is_stored_verbatim() {
        let mut state = DesktopState::default();
        run(
            &mut state,
            DesktopAction::SetSearchTerm {
                term: "Pa".to_string(),
            },
        );
        assert_eq!(state.shell.search_term, "Pa");
    }
}
