//! Built-in app catalog: manifests the window manager reads plus opaque content modules.

mod placeholders;

use desktop_app_contract::{AppManifest, AppModule, ApplicationId};

#[derive(Debug, Clone, Copy)]
pub struct AppDescriptor {
    pub app_id: &'static str,
    pub name: &'static str,
    pub icon_id: &'static str,
    pub default_size: Option<(i32, i32)>,
    pub show_on_desktop: bool,
    pub module: AppModule,
}

impl AppDescriptor {
    pub fn application_id(&self) -> ApplicationId {
        ApplicationId::trusted(self.app_id)
    }

    pub fn manifest(&self) -> AppManifest {
        let manifest = AppManifest::new(self.application_id(), self.name, self.icon_id);
        match self.default_size {
            Some((width, height)) => manifest.with_default_size(width, height),
            None => manifest,
        }
    }
}

const APP_REGISTRY: [AppDescriptor; 8] = [
    AppDescriptor {
        app_id: "terminal",
        name: "Terminal",
        icon_id: "terminal",
        default_size: Some((600, 400)),
        show_on_desktop: true,
        module: AppModule::new(placeholders::mount_terminal),
    },
    AppDescriptor {
        app_id: "explorer",
        name: "Files",
        icon_id: "folder",
        default_size: Some((700, 500)),
        show_on_desktop: true,
        module: AppModule::new(placeholders::mount_explorer),
    },
    AppDescriptor {
        app_id: "vscode",
        name: "VS Code",
        icon_id: "code",
        default_size: Some((1000, 700)),
        show_on_desktop: true,
        module: AppModule::new(placeholders::mount_ide),
    },
    AppDescriptor {
        app_id: "doom",
        name: "Doom",
        icon_id: "gamepad",
        default_size: Some((800, 600)),
        show_on_desktop: true,
        module: AppModule::new(placeholders::mount_doom),
    },
    AppDescriptor {
        app_id: "browser",
        name: "Browser",
        icon_id: "globe",
        default_size: Some((900, 600)),
        show_on_desktop: false,
        module: AppModule::new(placeholders::mount_browser),
    },
    AppDescriptor {
        app_id: "system",
        name: "System",
        icon_id: "cpu",
        default_size: Some((600, 450)),
        show_on_desktop: false,
        module: AppModule::new(placeholders::mount_system_monitor),
    },
    AppDescriptor {
        app_id: "notes",
        name: "Notes",
        icon_id: "file-text",
        default_size: Some((400, 500)),
        show_on_desktop: false,
        module: AppModule::new(placeholders::mount_notes),
    },
    AppDescriptor {
        app_id: "settings",
        name: "Settings",
        icon_id: "settings",
        default_size: Some((600, 500)),
        show_on_desktop: false,
        module: AppModule::new(placeholders::mount_settings),
    },
];

pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

pub fn app_descriptor(app_id: &ApplicationId) -> Option<&'static AppDescriptor> {
    app_registry()
        .iter()
        .find(|entry| entry.app_id == app_id.as_str())
}

pub fn app_manifest(app_id: &ApplicationId) -> Option<AppManifest> {
    app_descriptor(app_id).map(AppDescriptor::manifest)
}

pub fn app_module(app_id: &ApplicationId) -> Option<AppModule> {
    app_descriptor(app_id).map(|entry| entry.module)
}

pub fn desktop_icon_apps() -> Vec<AppDescriptor> {
    app_registry()
        .iter()
        .copied()
        .filter(|entry| entry.show_on_desktop)
        .collect()
}

pub fn settings_application_id() -> ApplicationId {
    ApplicationId::trusted("settings")
}

pub fn system_application_id() -> ApplicationId {
    ApplicationId::trusted("system")
}
