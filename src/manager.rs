//! Settings manager
//!
//! Reads the persisted settings blob, overlays it on the schema defaults and
//! writes whole objects back. Nothing here fails visibly: corrupt storage
//! reads as empty, unknown keys are dropped, storage errors are logged.
//!
//! The merge is shallow. A stored `statistics` object replaces the default
//! `statistics` object as a whole, it is not merged into it key by key.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::consts::SETTINGS_STORAGE_KEY;
use crate::error::SettingsError;
use crate::platform::KeyValueStore;
use crate::settings::{
    CurrencyDisplayMode, FilterMap, SettingKey, Settings, SettingsMap, StatisticsKey, decode,
    default_settings,
};
use crate::statistics::{ChartDataType, ChartType, DateRangeType, SortingType};

/// Typed and untyped access to user settings stored in `S`
pub struct SettingsManager<S> {
    store: S,
    storage_key: String,
}

impl<S: KeyValueStore> SettingsManager<S> {
    pub fn new(store: S) -> Self {
        Self::with_storage_key(store, SETTINGS_STORAGE_KEY)
    }

    pub fn with_storage_key(store: S, storage_key: &str) -> Self {
        Self {
            store,
            storage_key: storage_key.to_string(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    // === Generic operations ===

    /// Load the persisted object, reporting why it could not be used.
    ///
    /// A missing or empty entry is an empty object, not an error.
    pub fn load_persisted(&self) -> Result<SettingsMap, SettingsError> {
        let Some(json) = self.store.get_item(&self.storage_key)? else {
            return Ok(SettingsMap::new());
        };
        if json.is_empty() {
            return Ok(SettingsMap::new());
        }

        match serde_json::from_str::<Value>(&json)? {
            Value::Object(map) => Ok(map),
            Value::Null => Ok(SettingsMap::new()),
            Value::Bool(_) => Err(SettingsError::NotAnObject("boolean")),
            Value::Number(_) => Err(SettingsError::NotAnObject("number")),
            Value::String(_) => Err(SettingsError::NotAnObject("string")),
            Value::Array(_) => Err(SettingsError::NotAnObject("array")),
        }
    }

    /// Persisted settings only, without defaults. Unreadable storage is empty.
    pub fn raw_persisted(&self) -> SettingsMap {
        match self.load_persisted() {
            Ok(map) => map,
            Err(e) => {
                log::warn!("Settings in storage are invalid, using defaults: {}", e);
                SettingsMap::new()
            }
        }
    }

    /// Defaults overlaid with persisted settings. Always has every schema key.
    pub fn effective(&self) -> SettingsMap {
        let mut settings = default_settings().clone();
        settings.extend(self.raw_persisted());
        settings
    }

    /// Replace the stored object with `settings`
    pub fn persist(&self, settings: &SettingsMap) {
        let json = match serde_json::to_string(settings) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set_item(&self.storage_key, &json) {
            log::warn!("Failed to save settings: {}", e);
        }
    }

    pub fn option(&self, key: &str) -> Option<Value> {
        self.effective().remove(key)
    }

    /// Persisted value only, so "never set" stays distinguishable from "set
    /// to the default"
    pub fn original_option(&self, key: &str) -> Option<Value> {
        self.raw_persisted().remove(key)
    }

    pub fn sub_option(&self, key: &str, sub_key: &str) -> Option<Value> {
        match self.option(key) {
            Some(Value::Object(mut options)) => options.remove(sub_key),
            _ => None,
        }
    }

    /// Set a top-level option. Unknown keys are ignored.
    pub fn set_option(&self, key: &str, value: Value) {
        if SettingKey::from_key(key).is_none() {
            log::debug!("Ignoring unknown setting `{}`", key);
            return;
        }

        let mut settings = self.effective();
        settings.insert(key.to_string(), value);
        self.persist(&settings);
    }

    /// Set one key inside a nested option.
    ///
    /// Ignored unless `sub_key` belongs to the default object of `key`; the
    /// currently stored object is not consulted for that check.
    pub fn set_sub_option(&self, key: &str, sub_key: &str, value: Value) {
        let Some(setting) = SettingKey::from_key(key) else {
            log::debug!("Ignoring unknown setting `{}`", key);
            return;
        };
        if !setting.sub_keys().contains(&sub_key) {
            log::debug!("Ignoring unknown setting `{}.{}`", key, sub_key);
            return;
        }

        let mut settings = self.effective();
        let mut options = match settings.remove(key) {
            Some(Value::Object(options)) => options,
            _ => SettingsMap::new(),
        };
        options.insert(sub_key.to_string(), value);
        settings.insert(key.to_string(), Value::Object(options));
        self.persist(&settings);
    }

    /// Forget everything stored; reads fall back to defaults
    pub fn clear(&self) {
        match self.store.remove_item(&self.storage_key) {
            Ok(()) => log::info!("Settings cleared"),
            Err(e) => log::warn!("Failed to clear settings: {}", e),
        }
    }

    /// Effective settings decoded into the typed record
    pub fn snapshot(&self) -> Settings {
        Settings::from_map(&self.effective())
    }

    // === Typed helpers ===

    fn typed<T: DeserializeOwned>(&self, key: SettingKey, fallback: impl FnOnce() -> T) -> T {
        self.option(key.as_str())
            .and_then(|v| decode(key.as_str(), &v))
            .unwrap_or_else(fallback)
    }

    fn set_typed<T: Serialize>(&self, key: SettingKey, value: T) {
        match serde_json::to_value(value) {
            Ok(v) => self.set_option(key.as_str(), v),
            Err(e) => log::warn!("Failed to serialize `{}`: {}", key.as_str(), e),
        }
    }

    fn statistic<T: DeserializeOwned>(&self, sub_key: StatisticsKey) -> Option<T> {
        self.sub_option(SettingKey::Statistics.as_str(), sub_key.as_str())
            .and_then(|v| decode(sub_key.as_str(), &v))
    }

    fn set_statistic<T: Serialize>(&self, sub_key: StatisticsKey, value: T) {
        match serde_json::to_value(value) {
            Ok(v) => self.set_sub_option(SettingKey::Statistics.as_str(), sub_key.as_str(), v),
            Err(e) => log::warn!("Failed to serialize `{}`: {}", sub_key.as_str(), e),
        }
    }

    // === Named options ===

    /// Language explicitly chosen by the user, `None` if never set
    pub fn language(&self) -> Option<String> {
        self.original_option(SettingKey::Lang.as_str())
            .and_then(|v| decode(SettingKey::Lang.as_str(), &v))
    }

    pub fn set_language(&self, lang: &str) {
        self.set_typed(SettingKey::Lang, lang);
    }

    pub fn is_enable_debug(&self) -> bool {
        self.typed(SettingKey::Debug, || Settings::default().debug)
    }

    pub fn set_enable_debug(&self, value: bool) {
        self.set_typed(SettingKey::Debug, value);
    }

    pub fn is_enable_application_lock(&self) -> bool {
        self.typed(SettingKey::ApplicationLock, || {
            Settings::default().application_lock
        })
    }

    pub fn set_enable_application_lock(&self, value: bool) {
        self.set_typed(SettingKey::ApplicationLock, value);
    }

    pub fn is_enable_application_lock_web_authn(&self) -> bool {
        self.typed(SettingKey::ApplicationLockWebAuthn, || {
            Settings::default().application_lock_web_authn
        })
    }

    pub fn set_enable_application_lock_web_authn(&self, value: bool) {
        self.set_typed(SettingKey::ApplicationLockWebAuthn, value);
    }

    pub fn is_auto_update_exchange_rates_data(&self) -> bool {
        self.typed(SettingKey::AutoUpdateExchangeRatesData, || {
            Settings::default().auto_update_exchange_rates_data
        })
    }

    pub fn set_auto_update_exchange_rates_data(&self, value: bool) {
        self.set_typed(SettingKey::AutoUpdateExchangeRatesData, value);
    }

    pub fn is_enable_thousands_separator(&self) -> bool {
        self.typed(SettingKey::ThousandsSeparator, || {
            Settings::default().thousands_separator
        })
    }

    pub fn set_enable_thousands_separator(&self, value: bool) {
        self.set_typed(SettingKey::ThousandsSeparator, value);
    }

    pub fn currency_display_mode(&self) -> CurrencyDisplayMode {
        self.typed(SettingKey::CurrencyDisplayMode, CurrencyDisplayMode::default)
    }

    pub fn set_currency_display_mode(&self, mode: CurrencyDisplayMode) {
        self.set_typed(SettingKey::CurrencyDisplayMode, mode);
    }

    pub fn is_show_amount_in_home_page(&self) -> bool {
        self.typed(SettingKey::ShowAmountInHomePage, || {
            Settings::default().show_amount_in_home_page
        })
    }

    pub fn set_show_amount_in_home_page(&self, value: bool) {
        self.set_typed(SettingKey::ShowAmountInHomePage, value);
    }

    pub fn is_show_account_balance(&self) -> bool {
        self.typed(SettingKey::ShowAccountBalance, || {
            Settings::default().show_account_balance
        })
    }

    pub fn set_show_account_balance(&self, value: bool) {
        self.set_typed(SettingKey::ShowAccountBalance, value);
    }

    // Statistics getters are `None` when a stored `statistics` object lacks
    // the key or holds something that does not decode.

    pub fn statistics_default_chart_type(&self) -> Option<ChartType> {
        self.statistic(StatisticsKey::DefaultChartType)
    }

    pub fn set_statistics_default_chart_type(&self, value: ChartType) {
        self.set_statistic(StatisticsKey::DefaultChartType, value);
    }

    pub fn statistics_default_chart_data_type(&self) -> Option<ChartDataType> {
        self.statistic(StatisticsKey::DefaultChartDataType)
    }

    pub fn set_statistics_default_chart_data_type(&self, value: ChartDataType) {
        self.set_statistic(StatisticsKey::DefaultChartDataType, value);
    }

    pub fn statistics_default_date_range(&self) -> Option<DateRangeType> {
        self.statistic(StatisticsKey::DefaultDataRangeType)
    }

    pub fn set_statistics_default_date_range(&self, value: DateRangeType) {
        self.set_statistic(StatisticsKey::DefaultDataRangeType, value);
    }

    pub fn statistics_default_account_filter(&self) -> Option<FilterMap> {
        self.statistic(StatisticsKey::DefaultAccountFilter)
    }

    pub fn set_statistics_default_account_filter(&self, value: &FilterMap) {
        self.set_statistic(StatisticsKey::DefaultAccountFilter, value);
    }

    pub fn statistics_default_transaction_category_filter(&self) -> Option<FilterMap> {
        self.statistic(StatisticsKey::DefaultTransactionCategoryFilter)
    }

    pub fn set_statistics_default_transaction_category_filter(&self, value: &FilterMap) {
        self.set_statistic(StatisticsKey::DefaultTransactionCategoryFilter, value);
    }

    pub fn statistics_sorting_type(&self) -> Option<SortingType> {
        self.statistic(StatisticsKey::SortingType)
    }

    pub fn set_statistics_sorting_type(&self, value: SortingType) {
        self.set_statistic(StatisticsKey::SortingType, value);
    }

    pub fn is_enable_animate(&self) -> bool {
        self.typed(SettingKey::Animate, || Settings::default().animate)
    }

    pub fn set_enable_animate(&self, value: bool) {
        self.set_typed(SettingKey::Animate, value);
    }

    pub fn is_enable_auto_dark_mode(&self) -> bool {
        self.typed(SettingKey::AutoDarkMode, || Settings::default().auto_dark_mode)
    }

    pub fn set_enable_auto_dark_mode(&self, value: bool) {
        self.set_typed(SettingKey::AutoDarkMode, value);
    }
}
