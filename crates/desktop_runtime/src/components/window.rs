use super::*;
use crate::{
    apps::app_descriptor,
    model::AppId,
    window_manager::{render_plan, WindowPlacement, WindowVisibility},
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn window_class(placement: WindowPlacement) -> String {
    let mut class = String::from("desktop-window");
    if placement.is_active {
        class.push_str(" focused");
    }
    match placement.visibility {
        WindowVisibility::Hidden => class.push_str(" minimized"),
        WindowVisibility::Maximized => class.push_str(" maximized"),
        WindowVisibility::Floating => {}
    }
    class
}

/// Accessible label and glyph for the maximize/restore control.
fn maximize_control(maximized: bool) -> (&'static str, &'static str) {
    if maximized {
        ("Restore window", "❐")
    } else {
        ("Maximize window", "□")
    }
}

#[component]
pub(super) fn DesktopWindow(app_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let placement = create_memo(move |_| {
        runtime.state.with(|desktop| {
            render_plan(
                &desktop.windows,
                desktop.config.window_defaults,
                desktop.config.taskbar_height_px,
            )
            .into_iter()
            .find(|placement| placement.app_id == app_id)
        })
    });

    let focus = move |_| {
        let should_focus = placement
            .get_untracked()
            .is_some_and(|placement| !placement.is_active);
        if should_focus {
            runtime.dispatch_action(DesktopAction::FocusApp { app_id });
        }
    };
    let minimize = move |_| runtime.dispatch_action(DesktopAction::MinimizeApp { app_id });
    let close = move |_| runtime.dispatch_action(DesktopAction::CloseApp { app_id });
    let toggle_maximize =
        move |_| runtime.dispatch_action(DesktopAction::ToggleMaximizeApp { app_id });
    let begin_drag = move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        if ev.pointer_type() != "mouse" && !ev.is_primary() {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginDrag {
            app_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::ToggleMaximizeApp { app_id });
    };

    let is_maximized =
        move || placement.get().is_some_and(|p| p.visibility == WindowVisibility::Maximized);

    view! {
        <Show when=move || placement.get().is_some() fallback=|| ()>
            <section
                id=app_id.dom_id()
                class=move || placement.get().map(window_class).unwrap_or_default()
                style=move || {
                    placement
                        .get()
                        .map(|p| window_rect_style(p.rect, p.z_index))
                        .unwrap_or_default()
                }
                aria-hidden=move || {
                    placement
                        .get()
                        .is_some_and(|p| p.visibility == WindowVisibility::Hidden)
                        .to_string()
                }
                on:pointerdown=focus
                role="dialog"
                aria-label=app_id.name()
            >
                <header
                    class="titlebar"
                    on:pointerdown=begin_drag
                    on:dblclick=titlebar_double_click
                >
                    <div class="titlebar-title">
                        <span class="titlebar-app-icon" aria-hidden="true">
                            {app_descriptor(app_id).icon}
                        </span>
                        <span>{app_id.name()}</span>
                    </div>
                    <div class="titlebar-controls">
                        <button
                            aria-label="Minimize window"
                            on:pointerdown=move |ev: web_sys::PointerEvent| {
                                ev.prevent_default();
                                ev.stop_propagation();
                            }
                            on:mousedown=move |ev| stop_mouse_event(&ev)
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                minimize(ev);
                            }
                        >
                            "−"
                        </button>
                        <button
                            aria-label=move || maximize_control(is_maximized()).0
                            on:pointerdown=move |ev: web_sys::PointerEvent| {
                                ev.prevent_default();
                                ev.stop_propagation();
                            }
                            on:mousedown=move |ev| stop_mouse_event(&ev)
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                toggle_maximize(ev);
                            }
                        >
                            {move || maximize_control(is_maximized()).1}
                        </button>
                        <button
                            class="titlebar-close"
                            aria-label="Close window"
                            on:pointerdown=move |ev: web_sys::PointerEvent| {
                                ev.prevent_default();
                                ev.stop_propagation();
                            }
                            on:mousedown=move |ev| stop_mouse_event(&ev)
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                close(ev);
                            }
                        >
                            "✕"
                        </button>
                    </div>
                </header>
                <div class="window-body">
                    <WindowBody app_id=app_id />
                </div>
            </section>
        </Show>
    }
}

#[component]
fn WindowBody(app_id: AppId) -> impl IntoView {
    view! {
        <div class="window-body-content" data-app=app_id.name()>
            <p>{format!("Content for {}", app_id.name())}</p>
        </div>
    }
}
