use super::*;
use crate::{
    apps::{app_descriptor, TrayExtra},
    model::{AppId, QuickToggle, WindowRecord},
};

fn taskbar_window_button_class(record: &WindowRecord, is_active: bool) -> &'static str {
    match (record.is_minimized, is_active) {
        (true, _) => "taskbar-app minimized",
        (false, true) => "taskbar-app active",
        (false, false) => "taskbar-app",
    }
}

fn battery_glyph(percentage: u8) -> &'static str {
    if percentage <= 20 {
        "🪫"
    } else {
        QuickToggle::Battery.glyph()
    }
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock = use_clock();

    let running = move || {
        state.with(|desktop| {
            desktop
                .windows
                .list_open()
                .into_iter()
                .map(|record| (record.clone(), desktop.windows.active() == Some(record.app_id)))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <footer
            class="taskbar"
            role="toolbar"
            aria-label="Desktop taskbar"
            on:mousedown=move |ev| ev.stop_propagation()
        >
            <div class="taskbar-left">
                <div class="taskbar-weather" aria-label="Weather">
                    <span aria-hidden="true">"☁️"</span>
                    <span>"73°F"</span>
                    <span class="taskbar-weather-detail">"Cloudy"</span>
                </div>
            </div>

            <div class="taskbar-center">
                <button
                    id="taskbar-start-button"
                    class="start-button"
                    aria-label="Open start menu"
                    aria-haspopup="menu"
                    aria-expanded=move || state.get().shell.start_menu_open.to_string()
                    on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleStartMenu)
                >
                    <span class="taskbar-glyph" aria-hidden="true">"⊞"</span>
                </button>

                <input
                    class="taskbar-search"
                    type="text"
                    placeholder="Type here to search"
                    prop:value=move || state.get().shell.search_term
                    on:input=move |ev| {
                        runtime.dispatch_action(DesktopAction::SetSearchTerm {
                            term: event_target_value(&ev),
                        });
                    }
                />

                <div class="taskbar-running-strip" role="group" aria-label="Running windows">
                    <For each=running key=|(record, is_active)| (record.app_id, record.is_minimized, *is_active) let:entry>
                        {{
                            let (record, is_active) = entry;
                            let app_id: AppId = record.app_id;
                            view! {
                                <button
                                    class=taskbar_window_button_class(&record, is_active)
                                    data-app=app_id.name()
                                    title=app_id.name()
                                    aria-pressed=is_active.to_string()
                                    on:click=move |_| {
                                        runtime.dispatch_action(DesktopAction::CloseStartMenu);
                                        runtime.dispatch_action(DesktopAction::ActivateTaskbarEntry {
                                            app_id,
                                        });
                                    }
                                >
                                    <span class="taskbar-app-icon" aria-hidden="true">
                                        {app_descriptor(app_id).icon}
                                    </span>
                                </button>
                            }
                        }}
                    </For>
                </div>
            </div>

            <div class="taskbar-tray">
                <button
                    class="tray-button"
                    class:enabled=move || state.get().shell.quick_settings.is_enabled(QuickToggle::Wifi)
                    aria-label="Wi-Fi"
                    on:click=move |_| {
                        runtime.dispatch_action(DesktopAction::TrayQuickSetting {
                            toggle: QuickToggle::Wifi,
                        });
                    }
                >
                    {QuickToggle::Wifi.glyph()}
                </button>
                <button
                    class="tray-button"
                    aria-label="Volume"
                    on:click=move |_| {
                        runtime.dispatch_action(DesktopAction::TrayQuickSetting {
                            toggle: QuickToggle::Volume,
                        });
                    }
                >
                    {QuickToggle::Volume.glyph()}
                </button>
                <button
                    class="tray-button"
                    aria-label="Battery"
                    title=move || format!("{}%", state.get().shell.quick_settings.battery_percentage)
                    on:click=move |_| {
                        runtime.dispatch_action(DesktopAction::TrayQuickSetting {
                            toggle: QuickToggle::Battery,
                        });
                    }
                >
                    {move || battery_glyph(state.get().shell.quick_settings.battery_percentage)}
                </button>
                <div class="taskbar-clock-wrap">
                    <button
                        class="taskbar-clock"
                        aria-haspopup="dialog"
                        aria-expanded=move || state.get().shell.time_popup_open.to_string()
                        on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleTimePopup)
                    >
                        {move || clock.get().time_text()}
                    </button>
                    <Show when=move || state.get().shell.time_popup_open fallback=|| ()>
                        <div class="taskbar-time-popup" role="dialog" aria-label="Date and time">
                            <div class="taskbar-time-popup-time">{move || clock.get().time_text()}</div>
                            <div class="taskbar-time-popup-date">{move || clock.get().date_text()}</div>
                        </div>
                    </Show>
                </div>
                <div class="taskbar-extra-wrap">
                    <button
                        class="tray-button"
                        aria-label="Show hidden icons"
                        aria-expanded=move || state.get().shell.extra_icons_open.to_string()
                        on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleExtraIcons)
                    >
                        "⌃"
                    </button>
                    <Show when=move || state.get().shell.extra_icons_open fallback=|| ()>
                        <div class="taskbar-extra-icons" role="menu">
                            {TrayExtra::ALL
                                .into_iter()
                                .map(|extra| {
                                    view! {
                                        <button class="tray-button" role="menuitem" title=extra.label()>
                                            {extra.glyph()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Show>
                </div>
            </div>
        </footer>
    }
}
