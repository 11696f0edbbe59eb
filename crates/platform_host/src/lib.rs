//! Host-agnostic platform contracts used by the desktop runtime.
//!
//! Concrete browser adapters live in `platform_host_web`; this crate only defines the storage
//! traits, the error type shared by every adapter, and in-memory implementations for tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod storage;

pub use storage::prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsError, PrefsStore,
    PrefsStoreFuture,
};
