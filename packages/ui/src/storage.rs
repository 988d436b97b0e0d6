//! Platform-appropriate persistence for the session.
//!
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStore`]
//! - **Desktop / native**: one file per key under `<data_dir>/talent-admin/`
//! - **WASM without `web`**: in-memory only, nothing survives a reload

use store::{KeyValueStore, SessionStore};

/// Directory name under the platform data directory.
pub const DATA_DIR_NAME: &str = "talent-admin";

/// Session persistence for `scope` on the current platform.
pub fn session_store(scope: &str) -> SessionStore<impl KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionStore::with_scope(store::LocalStore::new(), scope)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        SessionStore::with_scope(store::MemoryStore::new(), scope)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join(DATA_DIR_NAME);
        SessionStore::with_scope(store::FileStore::new(base), scope)
    }
}
