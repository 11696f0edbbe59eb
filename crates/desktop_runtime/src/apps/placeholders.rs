//! Built-in placeholder content for the catalog apps.
//!
//! The window manager treats these as opaque; they only exist so every catalog entry has
//! something to mount.

use desktop_app_contract::{window_primary_input_dom_id, AppMountContext};
use leptos::*;

use super::{settings_application_id, system_application_id};

pub(super) fn mount_terminal(_: AppMountContext) -> View {
    view! {
        <div class="app-shell app-terminal-shell">
            <pre class="app-terminal-output">
                "browserOS terminal\n"
                "type `help` for a list of commands\n"
                "guest@browseros:~$ "
            </pre>
        </div>
    }
    .into_view()
}

pub(super) fn mount_explorer(_: AppMountContext) -> View {
    let entries = [
        ("Documents", "dir"),
        ("Pictures", "dir"),
        ("Downloads", "dir"),
        ("readme.md", "file"),
        ("todo.txt", "file"),
    ];
    view! {
        <div class="app-shell app-explorer-shell">
            <ul class="app-explorer-list" role="list">
                {entries
                    .into_iter()
                    .map(|(name, kind)| {
                        view! { <li data-entry-kind=kind>{name}</li> }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
    .into_view()
}

pub(super) fn mount_ide(_: AppMountContext) -> View {
    view! {
        <div class="app-shell app-ide-shell">
            <aside class="app-ide-sidebar">"EXPLORER"</aside>
            <pre class="app-ide-editor">
                "fn main() {\n    println!(\"hello, browserOS\");\n}\n"
            </pre>
        </div>
    }
    .into_view()
}

pub(super) fn mount_doom(_: AppMountContext) -> View {
    view! {
        <div class="app-shell app-doom-shell">
            <p>"Loading doom.wasm..."</p>
        </div>
    }
    .into_view()
}

pub(super) fn mount_browser(_: AppMountContext) -> View {
    view! {
        <div class="app-shell app-browser-shell">
            <input
                class="app-browser-address"
                type="url"
                value="https://example.com"
                readonly=true
            />
            <p class="app-browser-page">"Page rendering is provided by the host browser."</p>
        </div>
    }
    .into_view()
}

pub(super) fn mount_system_monitor(context: AppMountContext) -> View {
    let viewport = context.viewport;
    view! {
        <div class="app-shell app-system-shell">
            <h2>"System"</h2>
            <p>{move || {
                let size = viewport.get();
                format!("Window client area: {} x {}", size.width, size.height)
            }}</p>
        </div>
    }
    .into_view()
}

pub(super) fn mount_notes(context: AppMountContext) -> View {
    let note = create_rw_signal(String::new());
    view! {
        <div class="app-shell app-notes-shell">
            <textarea
                id=window_primary_input_dom_id(&context.app_id)
                class="app-notes-editor"
                placeholder="Start typing..."
                prop:value=move || note.get()
                on:input=move |ev| note.set(event_target_value(&ev))
            />
        </div>
    }
    .into_view()
}

pub(super) fn mount_settings(context: AppMountContext) -> View {
    let launcher = context.launcher;
    view! {
        <div class="app-shell app-settings-shell">
            <h2>"Settings"</h2>
            <button
                type="button"
                class="app-action"
                on:click=move |_| launcher.launch(system_application_id())
            >
                "About this desktop"
            </button>
            <button
                type="button"
                class="app-action"
                on:click=move |_| launcher.launch(settings_application_id())
            >
                "Bring to front"
            </button>
        </div>
    }
    .into_view()
}
