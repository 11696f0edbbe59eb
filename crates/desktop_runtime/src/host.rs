//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Reducer semantics stay pure; effect execution, DOM focus and pointer listener wiring live behind
//! this boundary so the preference backend can be injected and mocked.

mod boot;
mod effects;
mod host_ui;
mod persistence_effects;

use std::rc::Rc;

use leptos::Callback;
use platform_host::PrefsStore;

use crate::{
    model::{DesktopConfig, WindowId, WindowRect},
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

pub(crate) use host_ui::pointer_from_pointer_event;

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    prefs: Rc<dyn PrefsStore>,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self::new(platform_host_web::prefs_store())
    }
}

impl DesktopHostContext {
    /// Builds a host context around an explicit preference store.
    pub fn new(prefs: Rc<dyn PrefsStore>) -> Self {
        Self { prefs }
    }

    /// Preference store used for dock pins.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        Rc::clone(&self.prefs)
    }

    /// Loads persisted dock pins and hydrates them into the runtime once mounted.
    pub fn install_boot_hydration(&self, dispatch: Callback<DesktopAction>) {
        boot::install_boot_hydration(self.clone(), dispatch);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        effects::run_runtime_effect(self.clone(), runtime, effect);
    }

    /// Handles a request to focus the active window's primary input.
    ///
    /// Apps opt in by rendering [`desktop_app_contract::window_primary_input_dom_id`] on their
    /// primary text field.
    pub fn focus_window_input(&self, window_id: WindowId) {
        host_ui::focus_window_input(window_id);
    }

    /// Returns the current window-layer rect: the screen minus the top bar and dock reserve.
    pub fn desktop_viewport_rect(&self, config: &DesktopConfig) -> WindowRect {
        let (width, height) = host_ui::screen_size();
        config.desktop_viewport(width, height)
    }
}
