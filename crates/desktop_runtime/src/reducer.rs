//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use desktop_app_contract::ApplicationId;

use crate::{
    apps, dock,
    gesture::InteractionState,
    model::{DesktopState, PointerId, PointerPosition, ResizeEdge, WindowId, WindowPatch},
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open an app's window, or restore and focus the one already open.
    Open {
        /// Catalog app to launch.
        app_id: ApplicationId,
    },
    /// Close a window by id.
    Close {
        /// Window to close.
        window_id: WindowId,
    },
    /// Minimize a window.
    Minimize {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Un-minimize, raise and focus a window.
    Restore {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Flip a window between its resting geometry and filling the viewport.
    ToggleMaximize {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Focus (and raise) a window by id.
    Focus {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Set a window's absolute position.
    Move {
        /// Window to move.
        window_id: WindowId,
        /// New left edge.
        x: i32,
        /// New top edge.
        y: i32,
    },
    /// Set a window's size, clamped to the configured minimums.
    Resize {
        /// Window to resize.
        window_id: WindowId,
        /// Requested width.
        w: i32,
        /// Requested height.
        h: i32,
    },
    /// Merge a partial geometry/flag update into a window.
    Update {
        /// Window to update.
        window_id: WindowId,
        /// Fields to overwrite.
        patch: WindowPatch,
    },
    /// Pointer went down on a title bar.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer that owns the drag.
        pointer_id: PointerId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Pointer moved during a drag.
    UpdateMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Pointer released during a drag; commits the final position.
    EndMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at release.
        pointer: PointerPosition,
    },
    /// Pointer went down on one of a window's resize handles.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Edge or corner being dragged.
        edge: ResizeEdge,
        /// Pointer that owns the resize.
        pointer_id: PointerId,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Pointer moved during a resize.
    UpdateResize {
        /// Window being resized.
        window_id: WindowId,
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Pointer released during a resize.
    EndResize {
        /// Window being resized.
        window_id: WindowId,
    },
    /// A pointer was released outside any window listener; ends only the gestures it owns.
    EndPointerGestures {
        /// Released pointer.
        pointer_id: PointerId,
        /// Pointer position at release.
        pointer: PointerPosition,
    },
    /// Pin or unpin an app in the dock.
    TogglePin {
        /// App to toggle.
        app_id: ApplicationId,
    },
    /// Replace dock pins with values loaded from preferences.
    HydratePins {
        /// Loaded pins.
        pinned_apps: Vec<ApplicationId>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Persist the dock pin list.
    PersistPins,
    /// Move focus into the newly focused window's primary input.
    FocusWindowInput(WindowId),
    /// Install document-level pointer listeners for a window's new gesture.
    AttachPointerListeners(WindowId),
    /// Remove the pointer listeners held for a window's gesture.
    DetachPointerListeners(WindowId),
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// Actions naming windows that are not open, or apps missing from the catalog, leave state
/// untouched. Nothing is reported back to the caller beyond the emitted effects.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::Open { app_id } => open_app(state, &app_id, &mut effects),
        DesktopAction::Close { window_id } => {
            cancel_gesture(interaction, &window_id, &mut effects);
            state.registry.close(&window_id);
        }
        DesktopAction::Minimize { window_id } => {
            cancel_gesture(interaction, &window_id, &mut effects);
            state.registry.minimize(&window_id);
        }
        DesktopAction::Restore { window_id } => {
            if state.registry.restore(&window_id) {
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            }
        }
        DesktopAction::ToggleMaximize { window_id } => {
            cancel_gesture(interaction, &window_id, &mut effects);
            state.registry.toggle_maximize(&window_id);
        }
        DesktopAction::Focus { window_id } => {
            if state.registry.focus(&window_id) {
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            }
        }
        DesktopAction::Move { window_id, x, y } => {
            state.registry.move_to(&window_id, x, y);
        }
        DesktopAction::Resize { window_id, w, h } => {
            state.registry.resize(&window_id, w, h);
        }
        DesktopAction::Update { window_id, patch } => {
            if patch.minimized == Some(true) || patch.maximized.is_some() {
                cancel_gesture(interaction, &window_id, &mut effects);
            }
            state.registry.update(&window_id, patch);
        }
        DesktopAction::BeginMove {
            window_id,
            pointer_id,
            pointer,
        } => {
            state.registry.focus(&window_id);
            match interaction.begin_drag(&state.registry, &window_id, pointer_id, pointer) {
                Ok(()) => effects.push(RuntimeEffect::AttachPointerListeners(window_id)),
                Err(refusal) => leptos::logging::warn!("drag not started: {refusal}"),
            }
        }
        DesktopAction::UpdateMove { window_id, pointer } => {
            interaction.update_drag(&window_id, pointer);
        }
        DesktopAction::EndMove { window_id, pointer } => {
            if interaction.end_drag(&mut state.registry, &window_id, pointer) {
                effects.push(RuntimeEffect::DetachPointerListeners(window_id));
            }
        }
        DesktopAction::BeginResize {
            window_id,
            edge,
            pointer_id,
            pointer,
        } => {
            state.registry.focus(&window_id);
            match interaction.begin_resize(&state.registry, &window_id, edge, pointer_id, pointer) {
                Ok(()) => effects.push(RuntimeEffect::AttachPointerListeners(window_id)),
                Err(refusal) => leptos::logging::warn!("resize not started: {refusal}"),
            }
        }
        DesktopAction::UpdateResize { window_id, pointer } => {
            interaction.update_resize(&mut state.registry, &window_id, pointer);
        }
        DesktopAction::EndResize { window_id } => {
            if interaction.end_resize(&window_id) {
                effects.push(RuntimeEffect::DetachPointerListeners(window_id));
            }
        }
        DesktopAction::EndPointerGestures {
            pointer_id,
            pointer,
        } => {
            effects.extend(
                interaction
                    .end_pointer(&mut state.registry, pointer_id, pointer)
                    .into_iter()
                    .map(RuntimeEffect::DetachPointerListeners),
            );
        }
        DesktopAction::TogglePin { app_id } => {
            dock::toggle_pin(&mut state.pinned_apps, &app_id);
            effects.push(RuntimeEffect::PersistPins);
        }
        DesktopAction::HydratePins { pinned_apps } => {
            state.pinned_apps = pinned_apps;
        }
    }
    effects
}

fn open_app(
    state: &mut DesktopState,
    app_id: &ApplicationId,
    effects: &mut Vec<RuntimeEffect>,
) {
    let Some(manifest) = apps::app_manifest(app_id) else {
        leptos::logging::warn!("ignoring launch of unknown app `{app_id}`");
        return;
    };
    let window_id = state.registry.open(&manifest);
    effects.push(RuntimeEffect::FocusWindowInput(window_id));
}

fn cancel_gesture(
    interaction: &mut InteractionState,
    window_id: &WindowId,
    effects: &mut Vec<RuntimeEffect>,
) {
    if interaction.cancel(window_id) {
        effects.push(RuntimeEffect::DetachPointerListeners(window_id.clone()));
    }
}
