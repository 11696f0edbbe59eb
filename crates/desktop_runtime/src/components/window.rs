use desktop_app_contract::AppMountContext;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use super::*;
use crate::{
    model::{ResizeEdge, WindowId},
    scene::SceneWindow,
};

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

fn stop_pointer_event(ev: &web_sys::PointerEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId, scene: Memo<DesktopScene>) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let window_key = window_id.clone();
    let window = create_memo(move |_| scene.with(|scene| scene.window(&window_key).cloned()));

    let focus_id = window_id.clone();
    let focus = move |_: web_sys::PointerEvent| {
        let is_focused = window.with_untracked(|w| w.as_ref().is_some_and(|w| w.focused));
        if !is_focused {
            runtime.dispatch_action(DesktopAction::Focus {
                window_id: focus_id.clone(),
            });
        }
    };
    let minimize_id = window_id.clone();
    let minimize = move || {
        runtime.dispatch_action(DesktopAction::Minimize {
            window_id: minimize_id.clone(),
        })
    };
    let close_id = window_id.clone();
    let close = move || {
        runtime.dispatch_action(DesktopAction::Close {
            window_id: close_id.clone(),
        })
    };
    let maximize_id = window_id.clone();
    let toggle_maximize = move || {
        runtime.dispatch_action(DesktopAction::ToggleMaximize {
            window_id: maximize_id.clone(),
        })
    };
    let move_id = window_id.clone();
    let begin_move = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        if !window.with_untracked(|w| w.as_ref().is_some_and(|w| w.draggable)) {
            return;
        }
        try_set_pointer_capture(&ev);
        stop_pointer_event(&ev);
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id: move_id.clone(),
            pointer_id: ev.pointer_id(),
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let maximize_button = toggle_maximize.clone();
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        toggle_maximize();
    };

    let frame_class = move || {
        window.with(|w| {
            let Some(w) = w else {
                return "desktop-window".to_string();
            };
            format!(
                "desktop-window{}{}{}",
                if w.focused { " focused" } else { "" },
                if w.maximized { " maximized" } else { "" },
                match w.gesture {
                    Some(crate::gesture::GestureKind::Drag) => " dragging",
                    Some(crate::gesture::GestureKind::Resize) => " resizing",
                    None => "",
                }
            )
        })
    };
    let frame_style = move || {
        window.with(|w| {
            w.as_ref()
                .map(|w| {
                    format!(
                        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                        w.rect.x, w.rect.y, w.rect.w, w.rect.h, w.z_index
                    )
                })
                .unwrap_or_default()
        })
    };
    let title = move || {
        window.with(|w| w.as_ref().map(|w| w.title.clone()).unwrap_or_default())
    };
    let icon_id = move || {
        window.with(|w| w.as_ref().map(|w| w.icon_id.clone()).unwrap_or_default())
    };
    let maximized = move || window.with(|w| w.as_ref().is_some_and(|w| w.maximized));
    let content_blocked =
        move || window.with(|w| w.as_ref().is_some_and(|w| !w.content_interactive));
    let handles = move || {
        window.with(|w| {
            w.as_ref()
                .map(|w| w.resize_handles.clone())
                .unwrap_or_default()
        })
    };

    let body_id = window_id.clone();
    let handle_id = window_id.clone();

    view! {
        <section
            class=frame_class
            style=frame_style
            on:pointerdown=focus
            role="dialog"
            aria-label=title
            data-window-id=window_id.to_string()
        >
            <header
                class="titlebar"
                on:pointerdown=begin_move
                on:dblclick=titlebar_double_click
            >
                <div class="titlebar-title">
                    <span class="app-icon" data-icon=icon_id aria-hidden="true"></span>
                    <span>{title}</span>
                </div>
                <div class="titlebar-controls">
                    <button
                        type="button"
                        aria-label="Minimize window"
                        on:pointerdown=move |ev| stop_pointer_event(&ev)
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            minimize();
                        }
                    >
                        "_"
                    </button>
                    <button
                        type="button"
                        aria-label=move || {
                            if maximized() { "Restore window" } else { "Maximize window" }
                        }
                        on:pointerdown=move |ev| stop_pointer_event(&ev)
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            maximize_button();
                        }
                    >
                        {move || if maximized() { "❐" } else { "□" }}
                    </button>
                    <button
                        type="button"
                        aria-label="Close window"
                        on:pointerdown=move |ev| stop_pointer_event(&ev)
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            close();
                        }
                    >
                        "×"
                    </button>
                </div>
            </header>
            <div class="window-body">
                <WindowBody window_id=body_id window=window />
                <Show when=content_blocked fallback=|| ()>
                    <div class="window-content-shield" aria-hidden="true"></div>
                </Show>
            </div>
            <For each=handles key=|edge| *edge let:edge>
                <WindowResizeHandle window_id=handle_id.clone() edge=edge />
            </For>
        </section>
    }
}

#[component]
fn WindowResizeHandle(window_id: WindowId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let class_name = format!("window-resize-handle {}", edge.css_class());

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        stop_pointer_event(&ev);
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id: window_id.clone(),
            edge,
            pointer_id: ev.pointer_id(),
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    view! {
        <div
            class=class_name
            aria-hidden="true"
            on:pointerdown=on_pointerdown
        />
    }
}

/// Mounts the app's content once; later geometry changes only flow through the viewport signal.
#[component]
fn WindowBody(window_id: WindowId, window: Memo<Option<SceneWindow>>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let app_id = window_id.app_id().clone();
    let viewport = Signal::derive(move || {
        window.with(|w| w.as_ref().map(SceneWindow::client_viewport).unwrap_or_default())
    });
    let contents = apps::app_module(&app_id)
        .map(|module| {
            module.mount(AppMountContext {
                app_id: app_id.clone(),
                viewport,
                launcher: runtime.launcher,
            })
        })
        .unwrap_or_else(|| view! { <p>"Unknown app"</p> }.into_view());

    view! {
        <div class="window-body-content">
            {contents}
        </div>
    }
}
