#[cfg(target_arch = "wasm32")]
use leptos::logging;

use crate::model::DesktopSurface;

pub(super) fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            logging::warn!("alert failed: {err:?}");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    leptos::logging::log!("alert: {message}");
}

pub(super) fn desktop_surface() -> DesktopSurface {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let measured = window
                .document()
                .and_then(|document| document.get_element_by_id(super::DESKTOP_SHELL_DOM_ID))
                .map(|element| element.get_bounding_client_rect())
                .map(|rect| DesktopSurface {
                    width: rect.width() as i32,
                    height: rect.height() as i32,
                })
                .filter(|surface| surface.is_valid());
            if let Some(surface) = measured {
                return surface;
            }

            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32);
            return viewport_surface(width, height);
        }
    }

    viewport_surface(None, None)
}

/// Surface for a viewport of the given size. The taskbar band stays inside it.
fn viewport_surface(width: Option<i32>, height: Option<i32>) -> DesktopSurface {
    let fallback = DesktopSurface::default();
    DesktopSurface {
        width: width.unwrap_or(fallback.width).max(320),
        height: height.unwrap_or(fallback.height).max(220),
    }
}
