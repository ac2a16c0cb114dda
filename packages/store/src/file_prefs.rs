//! # Filesystem-backed preferences
//!
//! [`FilePrefs`] keeps one small file per preference key under a base
//! directory. Native builds use it to keep the theme across restarts; the
//! base is typically `<data_dir>/visitor-desk/`.
//!
//! ```text
//! <base_dir>/
//! └── prefs/
//!     └── theme          # file containing "light" or "dark"
//! ```

use std::path::PathBuf;

use crate::prefs::PreferenceStore;

#[derive(Clone, Debug)]
pub struct FilePrefs {
    base: PathBuf,
}

impl FilePrefs {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn prefs_dir(&self) -> PathBuf {
        self.base.join("prefs")
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.prefs_dir().join(key)
    }
}

impl PreferenceStore for FilePrefs {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key))
            .ok()
            .map(|value| value.trim().to_string())
    }

    fn set(&self, key: &str, value: &str) {
        let dir = self.prefs_dir();
        if let Err(e) = std::fs::create_dir_all(&dir) {
            tracing::warn!("cannot create {}: {e}", dir.display());
            return;
        }
        let path = self.key_path(key);
        if let Err(e) = std::fs::write(&path, value) {
            tracing::warn!("cannot store preference {key} at {}: {e}", path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_prefs_persist() {
        let base = std::env::temp_dir().join(format!("visitor-desk-prefs-{}", std::process::id()));
        let prefs = FilePrefs::new(base.clone());
        assert_eq!(prefs.get("theme"), None);

        prefs.set("theme", "dark");
        // A fresh instance sees the stored value.
        assert_eq!(FilePrefs::new(base.clone()).get("theme").as_deref(), Some("dark"));

        let _ = std::fs::remove_dir_all(base);
    }

    #[test]
    fn test_unwritable_base_reads_as_unset() {
        // A regular file where the prefs directory should be makes every write fail.
        let base = std::env::temp_dir().join(format!("visitor-desk-blocked-{}", std::process::id()));
        std::fs::write(&base, "not a directory").unwrap();

        let prefs = FilePrefs::new(base.clone());
        prefs.set("theme", "dark");
        assert_eq!(prefs.get("theme"), None);

        let _ = std::fs::remove_file(base);
    }
}
