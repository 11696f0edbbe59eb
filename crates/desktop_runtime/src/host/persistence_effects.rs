use leptos::{logging, spawn_local, SignalWithUntracked};

use crate::{host::DesktopHostContext, persistence, runtime_context::DesktopRuntimeContext};

pub(super) fn persist_pins(host: DesktopHostContext, runtime: DesktopRuntimeContext) {
    let pins = runtime.state.with_untracked(|state| state.pinned_apps.clone());
    let prefs = host.prefs_store();
    spawn_local(async move {
        if let Err(err) = persistence::persist_pinned_apps(prefs.as_ref(), &pins).await {
            logging::warn!("persist pinned apps failed: {err}");
        }
    });
}
