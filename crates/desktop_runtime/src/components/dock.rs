use super::*;
use crate::dock::{dock_items, DockItem};

#[component]
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let items = create_memo(move |_| {
        state.with(|desktop| dock_items(&desktop.pinned_apps, &desktop.registry))
    });

    view! {
        <nav class="desktop-dock" data-ui-slot="dock" aria-label="Dock">
            <For
                each=move || items.get()
                key=|item| (item.app_id.clone(), item.pinned, item.running, item.active)
                let:item
            >
                <DockButton item=item />
            </For>
        </nav>
    }
}

#[component]
fn DockButton(item: DockItem) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let launch_id = item.app_id.clone();
    let pin_id = item.app_id.clone();
    let class_name = format!(
        "dock-item{}{}{}",
        if item.pinned { " pinned" } else { "" },
        if item.running { " running" } else { "" },
        if item.active { " active" } else { "" },
    );
    let pin_hint = if item.pinned {
        "right-click to unpin"
    } else {
        "right-click to pin"
    };

    view! {
        <button
            type="button"
            class=class_name
            title=format!("{} ({pin_hint})", item.label)
            aria-pressed=item.active.to_string()
            on:click=move |_| runtime.launch(launch_id.clone())
            on:contextmenu=move |ev| {
                stop_mouse_event(&ev);
                runtime.dispatch_action(DesktopAction::TogglePin {
                    app_id: pin_id.clone(),
                });
            }
        >
            <span class="app-icon" data-icon=item.icon_id.clone() aria-hidden="true"></span>
            <Show when=move || item.running fallback=|| ()>
                <span class="dock-running-indicator" aria-hidden="true"></span>
            </Show>
        </button>
    }
}
