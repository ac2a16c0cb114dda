//! Platform preference store.
//!
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStoragePrefs`]
//! - **WASM without `web`**: in-memory, nothing survives a reload
//! - **Native**: one file per key under `<data_dir>/visitor-desk/`

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type Prefs = store::LocalStoragePrefs;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type Prefs = store::MemoryPrefs;
#[cfg(not(target_arch = "wasm32"))]
pub type Prefs = store::FilePrefs;

pub fn make_prefs() -> Prefs {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStoragePrefs::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryPrefs::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("visitor-desk");
        store::FilePrefs::new(base)
    }
}
