use desktop_runtime::{use_desktop_runtime, DesktopAction, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Portfolio Desktop" />
        <Meta name="description" content="A desktop-style portfolio shell with draggable windows." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/open/:app" view=DesktopLaunchRoute />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider>
            <DesktopShell />
        </DesktopProvider>
    }
}

#[component]
fn DesktopLaunchRoute() -> impl IntoView {
    let params = use_params_map();
    let app = params.with_untracked(|map| map.get("app").cloned());

    view! {
        <DesktopProvider>
            <DesktopShell />
            <LaunchOnMount app=app />
        </DesktopProvider>
    }
}

#[component]
fn LaunchOnMount(app: Option<String>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    if let Some(name) = app {
        runtime.dispatch_action(DesktopAction::OpenAppByName { name });
    }
}
