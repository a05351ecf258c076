//! Lab Settings - client-side user preferences
//!
//! Core modules:
//! - `settings`: The preference schema and its defaults
//! - `manager`: Merge persisted overrides over defaults, typed get/set
//! - `server_settings`: Feature flags the server advertises via cookie
//! - `statistics`: Statistics page option types
//! - `platform`: Browser/native storage and cookie abstraction

pub mod error;
pub mod manager;
pub mod platform;
pub mod server_settings;
pub mod settings;
pub mod statistics;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use error::{SettingsError, StorageError};
pub use manager::SettingsManager;
pub use server_settings::ServerSettings;
pub use settings::{CurrencyDisplayMode, SettingKey, Settings, SettingsMap, StatisticsKey};

/// Storage and cookie identifiers
pub mod consts {
    /// LocalStorage key holding the settings JSON object
    pub const SETTINGS_STORAGE_KEY: &str = "lab_app_settings";
    /// Cookie carrying server-side feature flags
    pub const SERVER_SETTINGS_COOKIE: &str = "lab_server_settings";

    /// Server setting: user registration allowed
    pub const REGISTRATION_ENABLED_KEY: &str = "r";
    /// Server setting: data export allowed
    pub const EXPORT_ENABLED_KEY: &str = "e";
}
