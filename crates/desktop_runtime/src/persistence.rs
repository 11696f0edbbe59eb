//! Dock pin persistence through the host [`PrefsStore`].

use desktop_app_contract::ApplicationId;
use platform_host::{load_pref_with, save_pref_with, PrefsError, PrefsStore};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dock::PINNED_APPS_PREF_KEY;

/// Current schema version for [`PinnedAppsPref`].
pub const PINNED_APPS_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    #[error(transparent)]
    Prefs(#[from] PrefsError),
    #[error("unsupported pinned apps schema version {0}")]
    UnsupportedSchema(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinnedAppsPref {
    pub schema_version: u32,
    pub pinned: Vec<String>,
}

/// Accepted on-disk shapes. Early builds stored a bare JSON array of app ids.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredPins {
    Versioned(PinnedAppsPref),
    Legacy(Vec<String>),
}

fn migrate_pins(stored: StoredPins) -> Result<Vec<String>, PersistenceError> {
    match stored {
        StoredPins::Legacy(pinned) => Ok(pinned),
        StoredPins::Versioned(pref) if pref.schema_version <= PINNED_APPS_SCHEMA_VERSION => {
            Ok(pref.pinned)
        }
        StoredPins::Versioned(pref) => {
            Err(PersistenceError::UnsupportedSchema(pref.schema_version))
        }
    }
}

/// Loads the pinned dock apps, or `None` when nothing has been saved yet.
///
/// Entries that are not valid app ids are dropped with a warning; duplicates keep their first
/// position.
///
/// # Errors
///
/// Returns an error when the store fails, the JSON is malformed, or the schema is newer than this
/// build understands.
pub async fn load_pinned_apps<S: PrefsStore + ?Sized>(
    store: &S,
) -> Result<Option<Vec<ApplicationId>>, PersistenceError> {
    let Some(stored) = load_pref_with::<S, StoredPins>(store, PINNED_APPS_PREF_KEY).await? else {
        return Ok(None);
    };

    let mut pins: Vec<ApplicationId> = Vec::new();
    for raw in migrate_pins(stored)? {
        match ApplicationId::new(raw) {
            Ok(app_id) if !pins.contains(&app_id) => pins.push(app_id),
            Ok(_) => {}
            Err(err) => leptos::logging::warn!("dropping pinned app entry: {err}"),
        }
    }
    Ok(Some(pins))
}

/// Saves the pinned dock apps at the current schema version.
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub async fn persist_pinned_apps<S: PrefsStore + ?Sized>(
    store: &S,
    pins: &[ApplicationId],
) -> Result<(), PersistenceError> {
    let pref = PinnedAppsPref {
        schema_version: PINNED_APPS_SCHEMA_VERSION,
        pinned: pins.iter().map(|id| id.as_str().to_string()).collect(),
    };
    save_pref_with(store, PINNED_APPS_PREF_KEY, &pref).await?;
    Ok(())
}
