//! # Key/value persistence seam
//!
//! [`KeyValueStore`] is the small async interface the session store writes through.
//! Values are plain strings, mirroring what a browser's `localStorage` can hold, so
//! every backend behaves the same way:
//!
//! | Backend | Platform | Module |
//! |---------|----------|--------|
//! | [`MemoryStore`](crate::MemoryStore) | any (tests, fallback) | `memory` |
//! | [`FileStore`](crate::FileStore) | native | `file_store` |
//! | [`LocalStore`](crate::LocalStore) | wasm + `web` feature | `local` |
//!
//! Reads return `None` both for "absent" and for "backend could not be read";
//! writes report failures so the caller can decide whether they matter.

use crate::error::StoreError;

/// Async string key/value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Option<String>>;
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
    fn remove(&self, key: &str) -> impl std::future::Future<Output = Result<(), StoreError>>;
}
