use leptos::{create_effect, logging, spawn_local, Callable, Callback};

use crate::{host::DesktopHostContext, persistence, reducer::DesktopAction};

pub(super) fn install_boot_hydration(host: DesktopHostContext, dispatch: Callback<DesktopAction>) {
    create_effect(move |_| {
        let prefs = host.prefs_store();
        spawn_local(async move {
            match persistence::load_pinned_apps(prefs.as_ref()).await {
                Ok(Some(pinned_apps)) => dispatch.call(DesktopAction::HydratePins { pinned_apps }),
                Ok(None) => {}
                Err(err) => logging::warn!("pinned apps load failed: {err}"),
            }
        });
    });
}
