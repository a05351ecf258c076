//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on web, in-memory elsewhere)
//! - Cookies (document.cookie on web, a fixed map elsewhere)

pub mod cookies;
pub mod storage;

pub use cookies::{CookieSource, StaticCookies};
pub use storage::{KeyValueStore, MemoryStore};

#[cfg(target_arch = "wasm32")]
pub use cookies::DocumentCookies;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
