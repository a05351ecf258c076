//! JavaScript bindings
//!
//! Exposes the settings manager and server flags to the web frontend,
//! backed by `window.localStorage` and `document.cookie`.

use wasm_bindgen::prelude::*;

use crate::manager::SettingsManager;
use crate::platform::{DocumentCookies, LocalStorage};
use crate::server_settings;
use crate::settings::{CurrencyDisplayMode, FilterMap};
use crate::statistics::{ChartDataType, ChartType, DateRangeType, SortingType};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed (module loaded twice)
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("Failed to init logger: {}", e).into());
    }
}

fn parse_filter(json: &str) -> Option<FilterMap> {
    match serde_json::from_str(json) {
        Ok(filter) => Some(filter),
        Err(e) => {
            log::warn!("Ignoring invalid filter JSON: {}", e);
            None
        }
    }
}

fn filter_json(filter: Option<FilterMap>) -> Option<String> {
    filter.and_then(|f| serde_json::to_string(&f).ok())
}

fn type_or_warn<T: TryFrom<u8, Error = crate::error::UnknownTypeError>>(value: u8) -> Option<T> {
    match T::try_from(value) {
        Ok(t) => Some(t),
        Err(e) => {
            log::warn!("Ignoring {}", e);
            None
        }
    }
}

#[wasm_bindgen]
pub struct WebSettings {
    manager: SettingsManager<LocalStorage>,
    cookies: DocumentCookies,
}

#[wasm_bindgen]
impl WebSettings {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WebSettings, JsValue> {
        let storage = LocalStorage::new().map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            manager: SettingsManager::new(storage),
            cookies: DocumentCookies,
        })
    }

    #[wasm_bindgen(js_name = getLanguage)]
    pub fn language(&self) -> Option<String> {
        self.manager.language()
    }

    #[wasm_bindgen(js_name = setLanguage)]
    pub fn set_language(&self, value: &str) {
        self.manager.set_language(value);
    }

    #[wasm_bindgen(js_name = isEnableDebug)]
    pub fn is_enable_debug(&self) -> bool {
        self.manager.is_enable_debug()
    }

    #[wasm_bindgen(js_name = setEnableDebug)]
    pub fn set_enable_debug(&self, value: bool) {
        self.manager.set_enable_debug(value);
    }

    #[wasm_bindgen(js_name = isEnableApplicationLock)]
    pub fn is_enable_application_lock(&self) -> bool {
        self.manager.is_enable_application_lock()
    }

    #[wasm_bindgen(js_name = setEnableApplicationLock)]
    pub fn set_enable_application_lock(&self, value: bool) {
        self.manager.set_enable_application_lock(value);
    }

    #[wasm_bindgen(js_name = isEnableApplicationLockWebAuthn)]
    pub fn is_enable_application_lock_web_authn(&self) -> bool {
        self.manager.is_enable_application_lock_web_authn()
    }

    #[wasm_bindgen(js_name = setEnableApplicationLockWebAuthn)]
    pub fn set_enable_application_lock_web_authn(&self, value: bool) {
        self.manager.set_enable_application_lock_web_authn(value);
    }

    #[wasm_bindgen(js_name = isAutoUpdateExchangeRatesData)]
    pub fn is_auto_update_exchange_rates_data(&self) -> bool {
        self.manager.is_auto_update_exchange_rates_data()
    }

    #[wasm_bindgen(js_name = setAutoUpdateExchangeRatesData)]
    pub fn set_auto_update_exchange_rates_data(&self, value: bool) {
        self.manager.set_auto_update_exchange_rates_data(value);
    }

    #[wasm_bindgen(js_name = isEnableThousandsSeparator)]
    pub fn is_enable_thousands_separator(&self) -> bool {
        self.manager.is_enable_thousands_separator()
    }

    #[wasm_bindgen(js_name = setEnableThousandsSeparator)]
    pub fn set_enable_thousands_separator(&self, value: bool) {
        self.manager.set_enable_thousands_separator(value);
    }

    #[wasm_bindgen(js_name = getCurrencyDisplayMode)]
    pub fn currency_display_mode(&self) -> String {
        self.manager.currency_display_mode().as_str().to_string()
    }

    /// Unknown mode names are ignored
    #[wasm_bindgen(js_name = setCurrencyDisplayMode)]
    pub fn set_currency_display_mode(&self, value: &str) {
        match CurrencyDisplayMode::from_name(value) {
            Some(mode) => self.manager.set_currency_display_mode(mode),
            None => log::warn!("Ignoring unknown currency display mode `{}`", value),
        }
    }

    #[wasm_bindgen(js_name = isShowAmountInHomePage)]
    pub fn is_show_amount_in_home_page(&self) -> bool {
        self.manager.is_show_amount_in_home_page()
    }

    #[wasm_bindgen(js_name = setShowAmountInHomePage)]
    pub fn set_show_amount_in_home_page(&self, value: bool) {
        self.manager.set_show_amount_in_home_page(value);
    }

    #[wasm_bindgen(js_name = isShowAccountBalance)]
    pub fn is_show_account_balance(&self) -> bool {
        self.manager.is_show_account_balance()
    }

    #[wasm_bindgen(js_name = setShowAccountBalance)]
    pub fn set_show_account_balance(&self, value: bool) {
        self.manager.set_show_account_balance(value);
    }

    #[wasm_bindgen(js_name = getStatisticsDefaultChartType)]
    pub fn statistics_default_chart_type(&self) -> Option<u8> {
        self.manager
            .statistics_default_chart_type()
            .map(|t| t.type_id())
    }

    #[wasm_bindgen(js_name = setStatisticsDefaultChartType)]
    pub fn set_statistics_default_chart_type(&self, value: u8) {
        if let Some(t) = type_or_warn::<ChartType>(value) {
            self.manager.set_statistics_default_chart_type(t);
        }
    }

    #[wasm_bindgen(js_name = getStatisticsDefaultChartDataType)]
    pub fn statistics_default_chart_data_type(&self) -> Option<u8> {
        self.manager
            .statistics_default_chart_data_type()
            .map(|t| t.type_id())
    }

    #[wasm_bindgen(js_name = setStatisticsDefaultChartDataType)]
    pub fn set_statistics_default_chart_data_type(&self, value: u8) {
        if let Some(t) = type_or_warn::<ChartDataType>(value) {
            self.manager.set_statistics_default_chart_data_type(t);
        }
    }

    #[wasm_bindgen(js_name = getStatisticsDefaultDateRange)]
    pub fn statistics_default_date_range(&self) -> Option<u8> {
        self.manager
            .statistics_default_date_range()
            .map(|t| t.type_id())
    }

    #[wasm_bindgen(js_name = setStatisticsDefaultDateRange)]
    pub fn set_statistics_default_date_range(&self, value: u8) {
        if let Some(t) = type_or_warn::<DateRangeType>(value) {
            self.manager.set_statistics_default_date_range(t);
        }
    }

    /// JSON object of hidden account ids
    #[wasm_bindgen(js_name = getStatisticsDefaultAccountFilter)]
    pub fn statistics_default_account_filter(&self) -> Option<String> {
        filter_json(self.manager.statistics_default_account_filter())
    }

    #[wasm_bindgen(js_name = setStatisticsDefaultAccountFilter)]
    pub fn set_statistics_default_account_filter(&self, json: &str) {
        if let Some(filter) = parse_filter(json) {
            self.manager.set_statistics_default_account_filter(&filter);
        }
    }

    /// JSON object of hidden category ids
    #[wasm_bindgen(js_name = getStatisticsDefaultTransactionCategoryFilter)]
    pub fn statistics_default_transaction_category_filter(&self) -> Option<String> {
        filter_json(self.manager.statistics_default_transaction_category_filter())
    }

    #[wasm_bindgen(js_name = setStatisticsDefaultTransactionCategoryFilter)]
    pub fn set_statistics_default_transaction_category_filter(&self, json: &str) {
        if let Some(filter) = parse_filter(json) {
            self.manager
                .set_statistics_default_transaction_category_filter(&filter);
        }
    }

    #[wasm_bindgen(js_name = getStatisticsSortingType)]
    pub fn statistics_sorting_type(&self) -> Option<u8> {
        self.manager.statistics_sorting_type().map(|t| t.type_id())
    }

    #[wasm_bindgen(js_name = setStatisticsSortingType)]
    pub fn set_statistics_sorting_type(&self, value: u8) {
        if let Some(t) = type_or_warn::<SortingType>(value) {
            self.manager.set_statistics_sorting_type(t);
        }
    }

    #[wasm_bindgen(js_name = isEnableAnimate)]
    pub fn is_enable_animate(&self) -> bool {
        self.manager.is_enable_animate()
    }

    #[wasm_bindgen(js_name = setEnableAnimate)]
    pub fn set_enable_animate(&self, value: bool) {
        self.manager.set_enable_animate(value);
    }

    #[wasm_bindgen(js_name = isEnableAutoDarkMode)]
    pub fn is_enable_auto_dark_mode(&self) -> bool {
        self.manager.is_enable_auto_dark_mode()
    }

    #[wasm_bindgen(js_name = setEnableAutoDarkMode)]
    pub fn set_enable_auto_dark_mode(&self, value: bool) {
        self.manager.set_enable_auto_dark_mode(value);
    }

    #[wasm_bindgen(js_name = isUserRegistrationEnabled)]
    pub fn is_user_registration_enabled(&self) -> bool {
        server_settings::is_user_registration_enabled(&self.cookies)
    }

    #[wasm_bindgen(js_name = isDataExportingEnabled)]
    pub fn is_data_exporting_enabled(&self) -> bool {
        server_settings::is_data_exporting_enabled(&self.cookies)
    }

    #[wasm_bindgen(js_name = clearSettings)]
    pub fn clear_settings(&self) {
        self.manager.clear();
    }
}
