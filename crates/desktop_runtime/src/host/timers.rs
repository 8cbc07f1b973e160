use std::time::Duration;

use leptos::{logging, on_cleanup, set_interval_with_handle, set_timeout, SignalWithUntracked};

use crate::{reducer::DesktopAction, runtime_context::DesktopRuntimeContext};

const MAX_BATTERY_DRIFT: i8 = 5;

pub(super) fn dispatch_after(runtime: DesktopRuntimeContext, delay_ms: u32, action: DesktopAction) {
    set_timeout(
        move || runtime.dispatch_action(action),
        Duration::from_millis(u64::from(delay_ms)),
    );
}

pub(super) fn install(runtime: DesktopRuntimeContext) {
    let config = runtime
        .state
        .with_untracked(|desktop| desktop.config.clone());

    match set_interval_with_handle(
        move || runtime.dispatch_action(DesktopAction::ClockTick),
        Duration::from_millis(u64::from(config.clock_tick_ms)),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => logging::warn!("clock tick interval failed: {err:?}"),
    }

    match set_interval_with_handle(
        move || {
            runtime.dispatch_action(DesktopAction::AdjustBattery {
                delta: battery_drift_delta(random_sample()),
            })
        },
        Duration::from_millis(u64::from(config.battery_drift_interval_ms)),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => logging::warn!("battery drift interval failed: {err:?}"),
    }
}

/// Maps a uniform sample in `[0, 1)` onto a battery step in `-5..=5`.
pub fn battery_drift_delta(sample: f64) -> i8 {
    let step = (sample.clamp(0.0, 1.0) * 11.0).floor() as i8 - MAX_BATTERY_DRIFT;
    step.min(MAX_BATTERY_DRIFT)
}

fn random_sample() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.5
    }
}
