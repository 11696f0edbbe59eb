//! Shared contract types between the desktop window manager and the apps it hosts.
//!
//! The window manager only ever reads an app's [`AppManifest`] (id, display name, icon and
//! optional default size). App content stays opaque: an [`AppModule`] is a single "mount into
//! this viewport" capability that the shell invokes when a window body is rendered.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::{Callable, Callback, Signal, View};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const MAX_APPLICATION_ID_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Reasons an application id string is rejected.
pub enum ApplicationIdError {
    /// The id was empty.
    #[error("application id is empty")]
    Empty,
    /// The id exceeded the maximum slug length.
    #[error("application id `{0}` is longer than 32 characters")]
    TooLong(String),
    /// The id contained characters outside the lowercase slug alphabet.
    #[error("invalid application id `{0}`; expected a lowercase slug such as `terminal`")]
    InvalidSlug(String),
}

/// Stable identifier for an app and, because the shell allows one window per app, for its window.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Returns an app identifier when `raw` is a lowercase slug (`[a-z][a-z0-9-]*`).
    pub fn new(raw: impl Into<String>) -> Result<Self, ApplicationIdError> {
        let raw = raw.into();
        validate_slug(&raw)?;
        Ok(Self(raw))
    }

    /// Creates an id without validation for trusted compile-time constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ApplicationId {
    type Error = ApplicationIdError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<ApplicationId> for String {
    fn from(id: ApplicationId) -> Self {
        id.0
    }
}

fn validate_slug(raw: &str) -> Result<(), ApplicationIdError> {
    let Some(first) = raw.bytes().next() else {
        return Err(ApplicationIdError::Empty);
    };
    if raw.len() > MAX_APPLICATION_ID_LEN {
        return Err(ApplicationIdError::TooLong(raw.to_string()));
    }
    let alphabet_ok = raw
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');
    if !first.is_ascii_lowercase() || !alphabet_ok || raw.ends_with('-') {
        return Err(ApplicationIdError::InvalidSlug(raw.to_string()));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Registration metadata the window manager reads for an app.
pub struct AppManifest {
    /// Canonical app id; doubles as the window id.
    pub id: ApplicationId,
    /// Display name shown in the title bar, dock tooltip and desktop icon.
    pub name: String,
    /// Icon reference resolved by the shell.
    pub icon: String,
    /// Preferred window width in pixels.
    pub default_width: Option<i32>,
    /// Preferred window height in pixels.
    pub default_height: Option<i32>,
}

impl AppManifest {
    /// Creates a manifest with no preferred size.
    pub fn new(id: ApplicationId, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            icon: icon.into(),
            default_width: None,
            default_height: None,
        }
    }

    /// Sets the preferred window size.
    #[must_use]
    pub fn with_default_size(mut self, width: i32, height: i32) -> Self {
        self.default_width = Some(width);
        self.default_height = Some(height);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Size of the client area an app renders into.
pub struct AppViewport {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

#[derive(Clone, Copy)]
/// Handle that lets hosted apps ask the shell to launch (or focus) another app.
pub struct AppLauncher {
    sender: Callback<ApplicationId>,
}

impl AppLauncher {
    /// Wraps the shell's launch callback.
    pub fn new(sender: Callback<ApplicationId>) -> Self {
        Self { sender }
    }

    /// Requests that `app_id` be opened or brought to front.
    pub fn launch(&self, app_id: ApplicationId) {
        self.sender.call(app_id);
    }
}

#[derive(Clone)]
/// Context handed to an app when its content is mounted into a window.
pub struct AppMountContext {
    /// App whose content is being mounted.
    pub app_id: ApplicationId,
    /// Reactive client-area size of the hosting window.
    pub viewport: Signal<AppViewport>,
    /// Launch handle for cross-app navigation.
    pub launcher: AppLauncher,
}

/// Static mount function used by the runtime app catalog.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Opaque renderable content for an app: the single "render into this viewport" capability.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}

/// DOM id an app gives its primary text input so the shell can focus it when the window is
/// focused.
pub fn window_primary_input_dom_id(app_id: &ApplicationId) -> String {
    format!("browseros-window-input-{}", app_id.as_str())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn application_id_accepts_lowercase_slugs_only() {
        assert!(ApplicationId::new("terminal").is_ok());
        assert!(ApplicationId::new("vscode").is_ok());
        assert!(ApplicationId::new("dial-up2").is_ok());
        assert_eq!(ApplicationId::new(""), Err(ApplicationIdError::Empty));
        assert!(matches!(
            ApplicationId::new("Terminal"),
            Err(ApplicationIdError::InvalidSlug(_))
        ));
        assert!(matches!(
            ApplicationId::new("2048"),
            Err(ApplicationIdError::InvalidSlug(_))
        ));
        assert!(matches!(
            ApplicationId::new("notes-"),
            Err(ApplicationIdError::InvalidSlug(_))
        ));
        assert!(matches!(
            ApplicationId::new("a".repeat(33)),
            Err(ApplicationIdError::TooLong(_))
        ));
    }

    #[test]
    fn application_id_deserialization_validates() {
        let id: ApplicationId = serde_json::from_str("\"notes\"").expect("valid id");
        assert_eq!(id.as_str(), "notes");
        assert!(serde_json::from_str::<ApplicationId>("\"Not Valid\"").is_err());
    }

    #[test]
    fn manifest_builder_sets_default_size() {
        let manifest = AppManifest::new(ApplicationId::trusted("explorer"), "Files", "folder")
            .with_default_size(700, 500);
        assert_eq!(manifest.default_width, Some(700));
        assert_eq!(manifest.default_height, Some(500));
        assert_eq!(manifest.name, "Files");
    }

    #[test]
    fn primary_input_dom_id_is_scoped_to_app() {
        assert_eq!(
            window_primary_input_dom_id(&ApplicationId::trusted("notes")),
            "browseros-window-input-notes"
        );
    }
}
