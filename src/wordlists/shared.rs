//! Process-wide shared word store
//!
//! The store is loaded on first use and lives for the rest of the process.
//! Loading is serialised, so concurrent first callers block until one load
//! finishes and then all observe the same store.

use super::{WordStore, loader};
use crate::error::DictionaryError;
use once_cell::sync::OnceCell;
use std::path::Path;
use tracing::debug;

static STORE: OnceCell<WordStore> = OnceCell::new();

/// Get the shared store, loading it from `dir` on first use
///
/// Later calls return the already-loaded store and ignore `dir`. A failed
/// load leaves the store uninitialised so a later call can retry.
///
/// # Errors
///
/// Returns the `DictionaryError` from `loader::load_dir` if the first load fails.
pub fn get_or_load<P: AsRef<Path>>(dir: P) -> Result<&'static WordStore, DictionaryError> {
    get_or_init_with(|| loader::load_dir(dir))
}

/// Get the shared store if it has already been loaded
#[must_use]
pub fn get() -> Option<&'static WordStore> {
    STORE.get()
}

fn get_or_init_with<F>(load: F) -> Result<&'static WordStore, DictionaryError>
where
    F: FnOnce() -> Result<WordStore, DictionaryError>,
{
    STORE.get_or_try_init(|| {
        let store = load()?;
        debug!(tiers = store.tier_count(), "initialised shared word store");
        Ok(store)
    })
}
