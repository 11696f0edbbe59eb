//! Storage contracts.

pub mod prefs;
