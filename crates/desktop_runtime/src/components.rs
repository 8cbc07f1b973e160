//! Desktop shell UI composition and interaction surfaces.

mod menus;
mod overlays;
mod taskbar;
mod window;

use std::time::Duration;

use leptos::*;

use self::{
    menus::StartMenu,
    overlays::{QuickSettingsPanel, SystemOverlays},
    taskbar::Taskbar,
    window::DesktopWindow,
};

use crate::{
    apps,
    host::DESKTOP_SHELL_DOM_ID,
    model::{PointerPosition, SessionState, WindowRect},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the full desktop shell UI and processes queued [`crate::RuntimeEffect`] values.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let shell_ref = create_node_ref::<html::Div>();

    shell_ref.on_load(move |_| sync_desktop_surface(runtime));

    let resize_listener = window_event_listener(ev::resize, move |_| {
        sync_desktop_surface(runtime);
    });
    on_cleanup(move || resize_listener.remove());

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if runtime.interaction.get_untracked().dragging.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateDrag {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let on_pointer_end = move |_| end_active_drag(runtime);
    let on_mouse_move = move |_| {
        if state.get_untracked().shell.session == SessionState::Sleeping {
            runtime.dispatch_action(DesktopAction::Wake);
        }
    };

    view! {
        <div
            id=DESKTOP_SHELL_DOM_ID
            class="desktop-shell"
            node_ref=shell_ref
            tabindex="-1"
            data-ui-kind="desktop-root"
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
            on:pointerleave=on_pointer_end
            on:mousemove=on_mouse_move
        >
            <div class="desktop-surface" data-ui-slot="surface">
                <div
                    data-ui-slot="dismiss-layer"
                    on:mousedown=move |_| {
                        runtime.dispatch_action(DesktopAction::CloseStartMenu);
                        runtime.dispatch_action(DesktopAction::CloseQuickSettings);
                    }
                />
                <div class="desktop-icon-grid" data-ui-slot="desktop-icons">
                    <For each=move || apps::desktop_icon_apps() key=|app| app.app_id let:app>
                        {{
                            let app_id = app.app_id;
                            view! {
                                <button
                                    class="desktop-icon"
                                    data-app=app.name()
                                    on:click=move |_| {
                                        runtime.dispatch_action(DesktopAction::OpenApp { app_id });
                                    }
                                >
                                    <span class="desktop-icon-glyph" aria-hidden="true">{app.icon}</span>
                                    <span class="desktop-icon-label">{app.name()}</span>
                                </button>
                            }
                        }}
                    </For>
                </div>

                <div class="desktop-window-layer" data-ui-slot="window-layer">
                    <For
                        each=move || state.get().windows.open_ids().to_vec()
                        key=|app_id| *app_id
                        let:app_id
                    >
                        <DesktopWindow app_id=app_id />
                    </For>
                </div>
            </div>

            <StartMenu />
            <QuickSettingsPanel />
            <Taskbar />
            <SystemOverlays />
        </div>
    }
}

fn sync_desktop_surface(runtime: DesktopRuntimeContext) {
    let surface = runtime.host.get_value().desktop_surface();
    runtime.dispatch_action(DesktopAction::ResizeSurface { surface });
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn end_active_drag(runtime: DesktopRuntimeContext) {
    if runtime.interaction.get_untracked().dragging.is_some() {
        runtime.dispatch_action(DesktopAction::EndDrag);
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn window_rect_style(rect: WindowRect, z_index: u32) -> String {
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
        rect.x, rect.y, rect.w, rect.h, z_index
    )
}

/// Zero-padded 24-hour `HH:MM`.
fn format_clock(hour: u32, minute: u32) -> String {
    format!("{:02}:{:02}", hour, minute)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockSnapshot {
    year: u32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

impl ClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                year: date.get_full_year(),
                month: date.get_month() + 1,
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                year: 1970,
                month: 1,
                day: 1,
                hour: 0,
                minute: 0,
            }
        }
    }

    fn time_text(self) -> String {
        format_clock(self.hour, self.minute)
    }

    fn date_text(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Wall-clock snapshot refreshed on the configured clock tick.
fn use_clock() -> ReadSignal<ClockSnapshot> {
    let runtime = use_desktop_runtime();
    let tick_ms = runtime
        .state
        .with_untracked(|desktop| desktop.config.clock_tick_ms);
    let clock_now = create_rw_signal(ClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(ClockSnapshot::now()),
        Duration::from_millis(u64::from(tick_ms)),
    ) {
        on_cleanup(move || interval.clear());
    }

    clock_now.read_only()
}
