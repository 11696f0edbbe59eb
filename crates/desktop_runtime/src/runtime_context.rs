//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, the live gesture
//! listener table and host bootstrap wiring. UI composition stays in [`crate::components`].

use std::rc::Rc;

use desktop_app_contract::{AppLauncher, ApplicationId};
use leptos::*;
use platform_host::PrefsStore;

use crate::{
    effect_executor,
    gesture::InteractionState,
    host::DesktopHostContext,
    listeners::WindowGestureListeners,
    model::{DesktopConfig, DesktopState, WindowRect},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive per-window drag/resize session table.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Window-layer rectangle; tracks browser resizes.
    pub viewport: RwSignal<WindowRect>,
    /// Pointer listeners held for in-flight gestures, one guard per window.
    pub listeners: StoredValue<WindowGestureListeners>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
    /// Launch handle given to hosted apps.
    pub launcher: AppLauncher,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Opens `app_id`, or restores and focuses its window when already open.
    pub fn launch(&self, app_id: ApplicationId) {
        self.dispatch_action(DesktopAction::Open { app_id });
    }
}

fn install_runtime_orchestration(runtime: DesktopRuntimeContext) {
    runtime
        .host
        .get_value()
        .install_boot_hydration(runtime.dispatch);
    effect_executor::install(runtime);
}

fn install_viewport_tracking(runtime: DesktopRuntimeContext) {
    let resize_listener = window_event_listener(ev::resize, move |_| {
        let config = runtime
            .state
            .with_untracked(|state| *state.registry.config());
        runtime
            .viewport
            .set(runtime.host.get_value().desktop_viewport_rect(&config));
    });
    on_cleanup(move || resize_listener.remove());
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and boots persisted state.
pub fn DesktopProvider(
    /// Preference backend for dock pins. Defaults to the host's store.
    #[prop(optional)]
    prefs: Option<Rc<dyn PrefsStore>>,
    /// Window placement and chrome tunables.
    #[prop(optional)]
    config: Option<DesktopConfig>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let host_context = prefs.map(DesktopHostContext::new).unwrap_or_default();
    let viewport = create_rw_signal(host_context.desktop_viewport_rect(&config));
    let host = store_value(host_context);
    let state = create_rw_signal(DesktopState::with_config(config));
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let listeners = store_value(WindowGestureListeners::default());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        let new_effects = reduce_desktop(&mut desktop, &mut ui, action);
        if desktop != previous_desktop {
            state.set(desktop);
        }
        if ui != previous_ui {
            interaction.set(ui);
        }
        if !new_effects.is_empty() {
            let mut queue = effects.get_untracked();
            queue.extend(new_effects);
            effects.set(queue);
        }
    });
    let launcher = AppLauncher::new(Callback::new(move |app_id: ApplicationId| {
        dispatch.call(DesktopAction::Open { app_id });
    }));

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        effects,
        viewport,
        listeners,
        dispatch,
        launcher,
    };

    provide_context(runtime);

    install_runtime_orchestration(runtime);
    install_viewport_tracking(runtime);
    on_cleanup(move || {
        listeners.try_update_value(|listeners| listeners.detach_all());
    });

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
