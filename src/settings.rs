//! User preferences schema
//!
//! The canonical defaults every lookup falls back to. Persisted overrides
//! live in LocalStorage and are merged over these by
//! [`SettingsManager`](crate::SettingsManager).

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::statistics::{
    ChartDataType, ChartType, DEFAULT_CHART_DATA_TYPE, DEFAULT_CHART_TYPE,
    DEFAULT_DATA_RANGE_TYPE, DEFAULT_SORTING_TYPE, DateRangeType, SortingType,
};

/// Untyped settings object, as stored and as merged
pub type SettingsMap = Map<String, Value>;

/// Id -> hidden flag, as used by the statistics filters
pub type FilterMap = BTreeMap<String, bool>;

/// How amounts show their currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyDisplayMode {
    #[default]
    Symbol,
    None,
    Code,
    Name,
}

impl CurrencyDisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyDisplayMode::Symbol => "symbol",
            CurrencyDisplayMode::None => "none",
            CurrencyDisplayMode::Code => "code",
            CurrencyDisplayMode::Name => "name",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "symbol" => Some(CurrencyDisplayMode::Symbol),
            "none" => Some(CurrencyDisplayMode::None),
            "code" => Some(CurrencyDisplayMode::Code),
            "name" => Some(CurrencyDisplayMode::Name),
            _ => None,
        }
    }
}

/// Defaults for the statistics page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSettings {
    pub default_chart_type: ChartType,
    pub default_chart_data_type: ChartDataType,
    pub default_data_range_type: DateRangeType,
    /// Accounts hidden from charts
    pub default_account_filter: FilterMap,
    /// Transaction categories hidden from charts
    pub default_transaction_category_filter: FilterMap,
    pub sorting_type: SortingType,
}

impl Default for StatisticsSettings {
    fn default() -> Self {
        Self {
            default_chart_type: DEFAULT_CHART_TYPE,
            default_chart_data_type: DEFAULT_CHART_DATA_TYPE,
            default_data_range_type: DEFAULT_DATA_RANGE_TYPE,
            default_account_filter: FilterMap::new(),
            default_transaction_category_filter: FilterMap::new(),
            sorting_type: DEFAULT_SORTING_TYPE,
        }
    }
}

/// User preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// UI language tag
    pub lang: String,
    pub debug: bool,

    // === Security ===
    /// Require unlocking the app with a PIN
    pub application_lock: bool,
    /// Allow WebAuthn to unlock instead of the PIN
    pub application_lock_web_authn: bool,

    // === Data ===
    pub auto_update_exchange_rates_data: bool,

    // === Display ===
    pub thousands_separator: bool,
    pub currency_display_mode: CurrencyDisplayMode,
    pub show_amount_in_home_page: bool,
    pub show_account_balance: bool,

    pub statistics: StatisticsSettings,

    // === Appearance ===
    pub animate: bool,
    /// Follow the system color scheme
    pub auto_dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            debug: false,

            application_lock: false,
            application_lock_web_authn: false,

            auto_update_exchange_rates_data: true,

            thousands_separator: true,
            currency_display_mode: CurrencyDisplayMode::Symbol,
            show_amount_in_home_page: true,
            show_account_balance: true,

            statistics: StatisticsSettings::default(),

            animate: true,
            auto_dark_mode: true,
        }
    }
}

static DEFAULT_SETTINGS: LazyLock<SettingsMap> = LazyLock::new(|| Settings::default().to_map());

/// Schema defaults as an untyped object. Built once.
pub fn default_settings() -> &'static SettingsMap {
    &DEFAULT_SETTINGS
}

impl Settings {
    /// Untyped view of these settings
    pub fn to_map(&self) -> SettingsMap {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                log::error!("Settings serialized to a non-object: {}", other);
                SettingsMap::new()
            }
            Err(e) => {
                log::error!("Failed to serialize settings: {}", e);
                SettingsMap::new()
            }
        }
    }

    /// Decode an effective settings object field by field.
    ///
    /// Fields that are missing or do not decode keep their default, so a
    /// single bad value never discards the rest.
    pub fn from_map(map: &SettingsMap) -> Self {
        let d = Self::default();
        Self {
            lang: field(map, SettingKey::Lang.as_str(), d.lang),
            debug: field(map, SettingKey::Debug.as_str(), d.debug),
            application_lock: field(map, SettingKey::ApplicationLock.as_str(), d.application_lock),
            application_lock_web_authn: field(
                map,
                SettingKey::ApplicationLockWebAuthn.as_str(),
                d.application_lock_web_authn,
            ),
            auto_update_exchange_rates_data: field(
                map,
                SettingKey::AutoUpdateExchangeRatesData.as_str(),
                d.auto_update_exchange_rates_data,
            ),
            thousands_separator: field(
                map,
                SettingKey::ThousandsSeparator.as_str(),
                d.thousands_separator,
            ),
            currency_display_mode: field(
                map,
                SettingKey::CurrencyDisplayMode.as_str(),
                d.currency_display_mode,
            ),
            show_amount_in_home_page: field(
                map,
                SettingKey::ShowAmountInHomePage.as_str(),
                d.show_amount_in_home_page,
            ),
            show_account_balance: field(
                map,
                SettingKey::ShowAccountBalance.as_str(),
                d.show_account_balance,
            ),
            statistics: match map.get(SettingKey::Statistics.as_str()) {
                Some(Value::Object(stats)) => StatisticsSettings::from_map(stats),
                _ => d.statistics,
            },
            animate: field(map, SettingKey::Animate.as_str(), d.animate),
            auto_dark_mode: field(map, SettingKey::AutoDarkMode.as_str(), d.auto_dark_mode),
        }
    }
}

impl StatisticsSettings {
    /// Same leniency as [`Settings::from_map`]
    pub fn from_map(map: &SettingsMap) -> Self {
        let d = Self::default();
        Self {
            default_chart_type: field(
                map,
                StatisticsKey::DefaultChartType.as_str(),
                d.default_chart_type,
            ),
            default_chart_data_type: field(
                map,
                StatisticsKey::DefaultChartDataType.as_str(),
                d.default_chart_data_type,
            ),
            default_data_range_type: field(
                map,
                StatisticsKey::DefaultDataRangeType.as_str(),
                d.default_data_range_type,
            ),
            default_account_filter: field(
                map,
                StatisticsKey::DefaultAccountFilter.as_str(),
                d.default_account_filter,
            ),
            default_transaction_category_filter: field(
                map,
                StatisticsKey::DefaultTransactionCategoryFilter.as_str(),
                d.default_transaction_category_filter,
            ),
            sorting_type: field(map, StatisticsKey::SortingType.as_str(), d.sorting_type),
        }
    }
}

/// Decode `map[key]`, or `fallback` when absent or mistyped
pub(crate) fn field<T: DeserializeOwned>(map: &SettingsMap, key: &str, fallback: T) -> T {
    match map.get(key) {
        Some(value) => decode(key, value).unwrap_or(fallback),
        None => fallback,
    }
}

/// Decode a single stored value, logging (at debug) when it has the wrong shape
pub(crate) fn decode<T: DeserializeOwned>(key: &str, value: &Value) -> Option<T> {
    match T::deserialize(value) {
        Ok(v) => Some(v),
        Err(e) => {
            log::debug!("Ignoring stored value for `{}` ({}): {}", key, value, e);
            None
        }
    }
}

/// Recognized top-level setting keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    Lang,
    Debug,
    ApplicationLock,
    ApplicationLockWebAuthn,
    AutoUpdateExchangeRatesData,
    ThousandsSeparator,
    CurrencyDisplayMode,
    ShowAmountInHomePage,
    ShowAccountBalance,
    Statistics,
    Animate,
    AutoDarkMode,
}

impl SettingKey {
    pub const ALL: [SettingKey; 12] = [
        SettingKey::Lang,
        SettingKey::Debug,
        SettingKey::ApplicationLock,
        SettingKey::ApplicationLockWebAuthn,
        SettingKey::AutoUpdateExchangeRatesData,
        SettingKey::ThousandsSeparator,
        SettingKey::CurrencyDisplayMode,
        SettingKey::ShowAmountInHomePage,
        SettingKey::ShowAccountBalance,
        SettingKey::Statistics,
        SettingKey::Animate,
        SettingKey::AutoDarkMode,
    ];

    /// Key as stored in the persisted object
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::Lang => "lang",
            SettingKey::Debug => "debug",
            SettingKey::ApplicationLock => "applicationLock",
            SettingKey::ApplicationLockWebAuthn => "applicationLockWebAuthn",
            SettingKey::AutoUpdateExchangeRatesData => "autoUpdateExchangeRatesData",
            SettingKey::ThousandsSeparator => "thousandsSeparator",
            SettingKey::CurrencyDisplayMode => "currencyDisplayMode",
            SettingKey::ShowAmountInHomePage => "showAmountInHomePage",
            SettingKey::ShowAccountBalance => "showAccountBalance",
            SettingKey::Statistics => "statistics",
            SettingKey::Animate => "animate",
            SettingKey::AutoDarkMode => "autoDarkMode",
        }
    }

    /// Exact, case-sensitive lookup
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }

    /// Keys allowed inside this option's default object. Empty for scalars.
    pub fn sub_keys(&self) -> &'static [&'static str] {
        match self {
            SettingKey::Statistics => &STATISTICS_SUB_KEYS,
            _ => &[],
        }
    }
}

/// Recognized keys of the `statistics` object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatisticsKey {
    DefaultChartType,
    DefaultChartDataType,
    DefaultDataRangeType,
    DefaultAccountFilter,
    DefaultTransactionCategoryFilter,
    SortingType,
}

impl StatisticsKey {
    pub const ALL: [StatisticsKey; 6] = [
        StatisticsKey::DefaultChartType,
        StatisticsKey::DefaultChartDataType,
        StatisticsKey::DefaultDataRangeType,
        StatisticsKey::DefaultAccountFilter,
        StatisticsKey::DefaultTransactionCategoryFilter,
        StatisticsKey::SortingType,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            StatisticsKey::DefaultChartType => "defaultChartType",
            StatisticsKey::DefaultChartDataType => "defaultChartDataType",
            StatisticsKey::DefaultDataRangeType => "defaultDataRangeType",
            StatisticsKey::DefaultAccountFilter => "defaultAccountFilter",
            StatisticsKey::DefaultTransactionCategoryFilter => "defaultTransactionCategoryFilter",
            StatisticsKey::SortingType => "sortingType",
        }
    }
}

const STATISTICS_SUB_KEYS: [&str; 6] = [
    StatisticsKey::DefaultChartType.as_str(),
    StatisticsKey::DefaultChartDataType.as_str(),
    StatisticsKey::DefaultDataRangeType.as_str(),
    StatisticsKey::DefaultAccountFilter.as_str(),
    StatisticsKey::DefaultTransactionCategoryFilter.as_str(),
    StatisticsKey::SortingType.as_str(),
];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_map_has_exactly_the_schema_keys() {
        let defaults = default_settings();
        assert_eq!(defaults.len(), SettingKey::ALL.len());
        for key in SettingKey::ALL {
            assert!(defaults.contains_key(key.as_str()), "missing {}", key.as_str());
        }
    }

    #[test]
    fn test_default_values() {
        let defaults = default_settings();
        assert_eq!(defaults["lang"], json!("en"));
        assert_eq!(defaults["debug"], json!(false));
        assert_eq!(defaults["applicationLockWebAuthn"], json!(false));
        assert_eq!(defaults["autoUpdateExchangeRatesData"], json!(true));
        assert_eq!(defaults["currencyDisplayMode"], json!("symbol"));
        assert_eq!(defaults["autoDarkMode"], json!(true));
        assert_eq!(
            defaults["statistics"],
            json!({
                "defaultChartType": 0,
                "defaultChartDataType": 1,
                "defaultDataRangeType": 7,
                "defaultAccountFilter": {},
                "defaultTransactionCategoryFilter": {},
                "sortingType": 0
            })
        );
    }

    #[test]
    fn test_statistics_sub_keys_match_default_object() {
        let defaults = default_settings();
        let Value::Object(stats) = &defaults["statistics"] else {
            panic!("statistics default is not an object");
        };
        let sub_keys = SettingKey::Statistics.sub_keys();
        assert_eq!(stats.len(), sub_keys.len());
        for key in sub_keys {
            assert!(stats.contains_key(*key));
        }
        assert!(SettingKey::Debug.sub_keys().is_empty());
    }

    #[test]
    fn test_key_lookup_is_exact() {
        assert_eq!(SettingKey::from_key("autoDarkMode"), Some(SettingKey::AutoDarkMode));
        assert_eq!(SettingKey::from_key("autodarkmode"), None);
        assert_eq!(SettingKey::from_key("toString"), None);
        assert_eq!(SettingKey::from_key(""), None);
    }

    #[test]
    fn test_from_map_is_lenient_per_field() {
        let map = json!({
            "lang": "de",
            "debug": "yes",
            "currencyDisplayMode": "code",
            "statistics": { "sortingType": 2, "defaultChartType": 42 },
            "stale": 1
        });
        let Value::Object(map) = map else { unreachable!() };
        let settings = Settings::from_map(&map);
        assert_eq!(settings.lang, "de");
        assert!(!settings.debug);
        assert_eq!(settings.currency_display_mode, CurrencyDisplayMode::Code);
        assert_eq!(settings.statistics.sorting_type, SortingType::Name);
        assert_eq!(settings.statistics.default_chart_type, ChartType::Pie);
        assert!(settings.animate);
    }

    #[test]
    fn test_currency_display_mode_names() {
        for mode in [
            CurrencyDisplayMode::Symbol,
            CurrencyDisplayMode::None,
            CurrencyDisplayMode::Code,
            CurrencyDisplayMode::Name,
        ] {
            assert_eq!(CurrencyDisplayMode::from_name(mode.as_str()), Some(mode));
            assert_eq!(serde_json::to_value(mode).unwrap(), json!(mode.as_str()));
        }
        assert_eq!(CurrencyDisplayMode::from_name("Symbol"), None);
    }
}
