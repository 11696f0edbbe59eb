//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Off-browser builds compile the same types; they behave as an empty store so the desktop
//! runtime can be exercised natively in tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::rc::Rc;

use platform_host::PrefsStore;

pub mod storage;

pub use storage::local_prefs::WebPrefsStore;

/// Returns the preference store the desktop shell should use on this host.
pub fn prefs_store() -> Rc<dyn PrefsStore> {
    Rc::new(WebPrefsStore)
}
