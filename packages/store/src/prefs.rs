use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Small key/value storage for client preferences.
///
/// Storage errors never reach the caller: a missing or broken backend reads
/// as "nothing stored" and failed writes are logged and dropped.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory preferences for tests and platforms without storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryPrefs {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }
}
