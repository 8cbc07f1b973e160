use super::*;
use crate::{
    apps::{filter_pinned, filter_recommended, PinnedEntry},
    model::PowerAction,
};

const POWER_ENTRIES: [(PowerAction, &str, &str); 4] = [
    (PowerAction::Sleep, "🌙", "Sleep"),
    (PowerAction::Restart, "🔄", "Restart"),
    (PowerAction::ShutDown, "⏻", "Shut down"),
    (PowerAction::Lock, "🔒", "Lock"),
];

fn launch_pinned(runtime: DesktopRuntimeContext, entry: PinnedEntry) {
    if let Some(app_id) = entry.app_id {
        runtime.dispatch_action(DesktopAction::CloseStartMenu);
        runtime.dispatch_action(DesktopAction::OpenApp { app_id });
    }
}

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let search_term = create_memo(move |_| state.with(|desktop| desktop.shell.search_term.clone()));
    let pinned = move || filter_pinned(&search_term.get());
    let recommended = move || filter_recommended(&search_term.get());

    view! {
        <Show when=move || state.get().shell.start_menu_open fallback=|| ()>
            <div
                id="desktop-launcher-menu"
                class="start-menu"
                role="menu"
                aria-label="Start menu"
                on:mousedown=move |ev| ev.stop_propagation()
            >
                <div class="start-menu-search">
                    <span aria-hidden="true">"🔍"</span>
                    <input
                        type="text"
                        placeholder="Type to search"
                        prop:value=move || search_term.get()
                        on:input=move |ev| {
                            runtime.dispatch_action(DesktopAction::SetSearchTerm {
                                term: event_target_value(&ev),
                            });
                        }
                    />
                </div>

                <div class="start-menu-scroll">
                    <section class="start-menu-pinned">
                        <header class="start-menu-section-header">
                            <h2>"Pinned"</h2>
                            <button class="start-menu-link">"All apps"</button>
                        </header>
                        <div class="start-menu-pinned-grid">
                            <For each=pinned key=|entry| entry.label let:entry>
                                <button
                                    class="start-menu-tile"
                                    role="menuitem"
                                    aria-disabled=entry.app_id.is_none().to_string()
                                    on:click=move |_| launch_pinned(runtime, entry)
                                >
                                    <span class="start-menu-tile-icon" aria-hidden="true">{entry.icon}</span>
                                    <span class="start-menu-tile-label">{entry.label}</span>
                                </button>
                            </For>
                        </div>
                    </section>

                    <Show when=move || !recommended().is_empty() fallback=|| ()>
                        <section class="start-menu-recommended">
                            <header class="start-menu-section-header">
                                <h2>"Recommended"</h2>
                                <button class="start-menu-link">"More"</button>
                            </header>
                            <div class="start-menu-recommended-grid">
                                <For each=recommended key=|item| item.name let:item>
                                    <button class="start-menu-recommended-item" role="menuitem">
                                        <span aria-hidden="true">{item.icon}</span>
                                        <div class="start-menu-recommended-text">
                                            <div class="start-menu-recommended-name">{item.name}</div>
                                            <div class="start-menu-recommended-kind">{item.kind}</div>
                                        </div>
                                    </button>
                                </For>
                            </div>
                        </section>
                    </Show>
                </div>

                <footer class="start-menu-user">
                    <div class="start-menu-user-badge">
                        <span class="start-menu-avatar" aria-hidden="true">"👤"</span>
                        <span>"User"</span>
                    </div>
                    <div class="start-menu-power">
                        <button
                            class="start-menu-power-button"
                            aria-label="Power"
                            aria-haspopup="menu"
                            aria-expanded=move || state.get().shell.power_menu_open.to_string()
                            on:click=move |_| runtime.dispatch_action(DesktopAction::TogglePowerMenu)
                        >
                            "⏻"
                        </button>
                        <PowerMenu />
                    </div>
                </footer>
            </div>
        </Show>
    }
}

#[component]
fn PowerMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <Show when=move || state.get().shell.power_menu_open fallback=|| ()>
            <div class="power-menu" role="menu" aria-label="Power options">
                {POWER_ENTRIES
                    .into_iter()
                    .map(|(action, glyph, label)| {
                        view! {
                            <button
                                class="power-menu-item"
                                role="menuitem"
                                on:click=move |ev| {
                                    stop_mouse_event(&ev);
                                    runtime.dispatch_action(DesktopAction::Power(action));
                                }
                            >
                                <span class="power-menu-glyph" aria-hidden="true">{glyph}</span>
                                <span>{label}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </Show>
    }
}
