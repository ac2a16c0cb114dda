//! # `localStorage` preferences: browser-side persistence
//!
//! [`LocalStoragePrefs`] is the [`PreferenceStore`] used on the web platform.
//! It reads and writes `window.localStorage`, so a preference survives page
//! reloads and new sessions in the same browser profile.
//!
//! The handle is a zero-size struct that looks the storage object up on every
//! call. When storage is unavailable (private mode, sandboxed iframe) reads
//! return `None` and writes are dropped.

use crate::prefs::PreferenceStore;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStoragePrefs;

impl LocalStoragePrefs {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl PreferenceStore for LocalStoragePrefs {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, {key} not saved");
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            tracing::warn!("cannot store preference {key}: {e:?}");
        }
    }
}
