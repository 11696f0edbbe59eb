//! Runtime-effect dispatch for the desktop host boundary.

use crate::{
    host::{host_ui, persistence_effects, DesktopHostContext},
    reducer::RuntimeEffect,
    runtime_context::DesktopRuntimeContext,
};

pub(super) fn run_runtime_effect(
    host: DesktopHostContext,
    runtime: DesktopRuntimeContext,
    effect: RuntimeEffect,
) {
    match effect {
        RuntimeEffect::PersistPins => persistence_effects::persist_pins(host, runtime),
        RuntimeEffect::FocusWindowInput(window_id) => host.focus_window_input(window_id),
        RuntimeEffect::AttachPointerListeners(window_id) => {
            host_ui::attach_pointer_listeners(runtime, window_id)
        }
        RuntimeEffect::DetachPointerListeners(window_id) => {
            host_ui::detach_pointer_listeners(runtime, &window_id)
        }
    }
}
