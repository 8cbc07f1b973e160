use super::*;
use crate::model::QuickToggle;

fn slider_value(raw: &str) -> u8 {
    raw.trim()
        .parse::<f64>()
        .map(|value| value.clamp(0.0, 100.0).round() as u8)
        .unwrap_or(0)
}

#[component]
pub(super) fn QuickSettingsPanel() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let settings = create_memo(move |_| state.with(|desktop| desktop.shell.quick_settings.clone()));

    view! {
        <Show when=move || state.get().shell.quick_settings_open fallback=|| ()>
            <div
                class="quick-settings"
                role="dialog"
                aria-label="Quick settings"
                on:mousedown=move |ev| ev.stop_propagation()
            >
                <div class="quick-settings-grid">
                    {QuickToggle::PANEL_TILES
                        .into_iter()
                        .map(|toggle| {
                            view! {
                                <button
                                    class="quick-settings-tile"
                                    class:enabled=move || settings.get().is_enabled(toggle)
                                    class:selected=move || settings.get().active == toggle
                                    aria-pressed=move || settings.get().is_enabled(toggle).to_string()
                                    on:click=move |_| {
                                        runtime.dispatch_action(DesktopAction::ToggleQuickSettingTile {
                                            toggle,
                                        });
                                    }
                                >
                                    <span aria-hidden="true">{toggle.glyph()}</span>
                                    <span class="quick-settings-tile-label">{toggle.label()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="quick-settings-sliders">
                    <label class="quick-settings-slider">
                        <span aria-hidden="true">"☀️"</span>
                        <input
                            type="range"
                            min="0"
                            max="100"
                            step="1"
                            aria-label="Brightness"
                            prop:value=move || settings.get().brightness.to_string()
                            on:input=move |ev| {
                                runtime.dispatch_action(DesktopAction::SetBrightness {
                                    value: slider_value(&event_target_value(&ev)),
                                });
                            }
                        />
                        <span>{move || format!("{}%", settings.get().brightness)}</span>
                    </label>
                    <label class="quick-settings-slider">
                        <span aria-hidden="true">{QuickToggle::Volume.glyph()}</span>
                        <input
                            type="range"
                            min="0"
                            max="100"
                            step="1"
                            aria-label="Volume"
                            prop:value=move || settings.get().volume.to_string()
                            on:input=move |ev| {
                                runtime.dispatch_action(DesktopAction::SetVolume {
                                    value: slider_value(&event_target_value(&ev)),
                                });
                            }
                        />
                        <span>{move || format!("{}%", settings.get().volume)}</span>
                    </label>
                </div>
                <footer class="quick-settings-footer">
                    <span>
                        <span aria-hidden="true">{QuickToggle::Battery.glyph()}</span>
                        {move || format!("{}%", settings.get().battery_percentage)}
                    </span>
                    <button
                        class="quick-settings-close"
                        aria-label="Close quick settings"
                        on:click=move |_| runtime.dispatch_action(DesktopAction::CloseQuickSettings)
                    >
                        "✕"
                    </button>
                </footer>
            </div>
        </Show>
    }
}

#[component]
pub(super) fn SystemOverlays() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let session = create_memo(move |_| state.with(|desktop| desktop.shell.session));
    let clock = use_clock();

    view! {
        {move || match session.get() {
            SessionState::Active => ().into_view(),
            SessionState::Locked => view! {
                <div class="system-overlay lock-screen" role="dialog" aria-label="Lock screen">
                    <div class="lock-screen-clock">{move || clock.get().time_text()}</div>
                    <div class="lock-screen-elapsed">
                        {move || format!("Locked for {}s", state.get().shell.lock_timer_secs)}
                    </div>
                    <input
                        type="password"
                        class="lock-screen-password"
                        placeholder="Enter password"
                        prop:value=move || state.get().shell.entered_password
                        on:input=move |ev| {
                            runtime.dispatch_action(DesktopAction::SetEnteredPassword {
                                password: event_target_value(&ev),
                            });
                        }
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                runtime.dispatch_action(DesktopAction::SubmitPassword);
                            }
                        }
                    />
                </div>
            }
            .into_view(),
            SessionState::Restarting => view! {
                <div class="system-overlay restart-screen" role="status">
                    <div class="restart-spinner" aria-hidden="true">"🔄"</div>
                    <p>"Restarting..."</p>
                </div>
            }
            .into_view(),
            SessionState::ShutDown => view! {
                <div class="system-overlay shutdown-screen">
                    <button
                        class="power-on-button"
                        aria-label="Power on"
                        on:click=move |_| runtime.dispatch_action(DesktopAction::PowerOn)
                    >
                        "⏻"
                    </button>
                </div>
            }
            .into_view(),
            SessionState::Sleeping => view! {
                <div class="system-overlay sleep-screen" aria-hidden="true"></div>
            }
            .into_view(),
        }}
    }
}
