//! Desktop shell UI composition and interaction surfaces.

mod dock;
mod window;

use leptos::*;

use self::{dock::Dock, window::DesktopWindow};

use crate::{
    apps,
    host::pointer_from_pointer_event,
    reducer::DesktopAction,
    scene::{compose_scene, DesktopScene},
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the full desktop shell UI: top bar, desktop icons, the window layer and the dock.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let interaction = runtime.interaction;
    let viewport = runtime.viewport;

    let scene = create_memo(move |_| {
        state.with(|desktop| {
            interaction
                .with(|interaction| compose_scene(&desktop.registry, interaction, viewport.get()))
        })
    });
    let layer_style = move || {
        let config = state.with(|desktop| *desktop.registry.config());
        format!(
            "top:{}px;bottom:{}px;",
            config.top_bar_height_px, config.dock_reserved_px
        )
    };

    let on_pointer_end = move |ev: web_sys::PointerEvent| {
        let pointer_id = ev.pointer_id();
        if !interaction.with_untracked(|interaction| interaction.owns_pointer(pointer_id)) {
            return;
        }
        runtime.dispatch_action(DesktopAction::EndPointerGestures {
            pointer_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            tabindex="-1"
            data-ui-kind="desktop-root"
            data-gesture-active=move || (!interaction.with(|i| i.is_idle())).to_string()
            on:pointerup=on_pointer_end
        >
            <TopBar scene=scene />
            <DesktopIconGrid />
            <div class="desktop-window-layer" data-ui-slot="window-layer" style=layer_style>
                <For
                    each=move || scene.with(|scene| scene.windows.clone())
                    key=|win| win.id.clone()
                    let:win
                >
                    <DesktopWindow window_id=win.id scene=scene />
                </For>
            </div>
            <Dock />
        </div>
    }
}

#[component]
fn TopBar(scene: Memo<DesktopScene>) -> impl IntoView {
    let focused_title = move || {
        scene.with(|scene| {
            scene
                .focused
                .as_ref()
                .and_then(|id| scene.window(id))
                .map(|win| win.title.clone())
                .unwrap_or_else(|| "Desktop".to_string())
        })
    };

    view! {
        <header class="desktop-top-bar" data-ui-slot="top-bar">
            <span class="desktop-top-bar-brand">"browserOS"</span>
            <span class="desktop-top-bar-title">{focused_title}</span>
        </header>
    }
}

#[component]
fn DesktopIconGrid() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <div class="desktop-icon-grid" data-ui-slot="desktop-icons">
            {apps::desktop_icon_apps()
                .into_iter()
                .map(|app| {
                    let app_id = app.application_id();
                    view! {
                        <button
                            type="button"
                            class="desktop-icon"
                            on:click=move |_| runtime.launch(app_id.clone())
                        >
                            <span class="app-icon" data-icon=app.icon_id aria-hidden="true"></span>
                            <span class="desktop-icon-label">{app.name}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}
