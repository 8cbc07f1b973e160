//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Reducer semantics never touch the browser directly. Surface measurement, alerts, and timers
//! live behind this boundary so the reducer stays testable off-target.

mod host_ui;
mod timers;

use crate::{
    model::DesktopSurface,
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

pub use timers::battery_drift_delta;

/// DOM id of the shell root. Its bounds, taskbar included, define the desktop surface.
pub const DESKTOP_SHELL_DOM_ID: &str = "desktop-shell-root";

#[derive(Clone, Default)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext;

impl DesktopHostContext {
    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::ScheduleRestartComplete { delay_ms } => {
                timers::dispatch_after(runtime, delay_ms, DesktopAction::FinishRestart);
            }
            RuntimeEffect::PasswordRejected => host_ui::alert("Incorrect password"),
        }
    }

    /// Starts the clock tick and battery drift intervals for the lifetime of the provider.
    pub fn install_timers(&self, runtime: DesktopRuntimeContext) {
        timers::install(runtime);
    }

    /// Measures the shell root, falling back to the browser viewport.
    pub fn desktop_surface(&self) -> DesktopSurface {
        host_ui::desktop_surface()
    }
}
