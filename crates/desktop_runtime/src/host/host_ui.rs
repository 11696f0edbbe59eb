#[cfg(target_arch = "wasm32")]
use desktop_app_contract::window_primary_input_dom_id;
use leptos::{ev, window_event_listener, SignalWithUntracked};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{
    gesture::GestureKind,
    listeners::ListenerGuard,
    model::{PointerPosition, WindowId},
    reducer::DesktopAction,
    runtime_context::DesktopRuntimeContext,
};

pub(crate) fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

pub(super) fn focus_window_input(window_id: WindowId) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let Some(element) =
            document.get_element_by_id(&window_primary_input_dom_id(window_id.app_id()))
        else {
            return;
        };
        let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        let callback = Closure::once_into_js(move || {
            let _ = element.focus();
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = window_id;
}

/// Inner size of the browser window, with a fixed fallback off-browser.
pub(super) fn screen_size() -> (i32, i32) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(1280);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(800);
            return (width, height);
        }
    }

    (1280, 800)
}

/// Installs window-level move/release listeners for one window's gesture.
///
/// The listeners route to that window's session only, ignore events from any pointer other than
/// the one that started the session, and stay attached until the matching
/// [`detach_pointer_listeners`] call drops their guard.
pub(super) fn attach_pointer_listeners(runtime: DesktopRuntimeContext, window_id: WindowId) {
    let move_id = window_id.clone();
    let on_move = window_event_listener(ev::pointermove, move |ev| {
        let pointer = pointer_from_pointer_event(&ev);
        let kind = runtime.interaction.with_untracked(|interaction| {
            interaction.gesture_kind_for_pointer(&move_id, ev.pointer_id())
        });
        let action = match kind {
            Some(GestureKind::Drag) => DesktopAction::UpdateMove {
                window_id: move_id.clone(),
                pointer,
            },
            Some(GestureKind::Resize) => DesktopAction::UpdateResize {
                window_id: move_id.clone(),
                pointer,
            },
            None => return,
        };
        runtime.dispatch_action(action);
    });

    let up_id = window_id.clone();
    let on_up = window_event_listener(ev::pointerup, move |ev| {
        end_gesture(runtime, &up_id, &ev);
    });

    let cancel_id = window_id.clone();
    let on_cancel = window_event_listener(ev::pointercancel, move |ev| {
        end_gesture(runtime, &cancel_id, &ev);
    });

    let guard = ListenerGuard::new(vec![on_move, on_up, on_cancel]);
    runtime
        .listeners
        .update_value(|listeners| listeners.attach(window_id, guard));
}

pub(super) fn detach_pointer_listeners(runtime: DesktopRuntimeContext, window_id: &WindowId) {
    runtime.listeners.update_value(|listeners| {
        listeners.detach(window_id);
    });
}

fn end_gesture(runtime: DesktopRuntimeContext, window_id: &WindowId, ev: &web_sys::PointerEvent) {
    let pointer = pointer_from_pointer_event(ev);
    let kind = runtime.interaction.with_untracked(|interaction| {
        interaction.gesture_kind_for_pointer(window_id, ev.pointer_id())
    });
    match kind {
        Some(GestureKind::Drag) => runtime.dispatch_action(DesktopAction::EndMove {
            window_id: window_id.clone(),
            pointer,
        }),
        Some(GestureKind::Resize) => runtime.dispatch_action(DesktopAction::EndResize {
            window_id: window_id.clone(),
        }),
        None => {}
    }
}
