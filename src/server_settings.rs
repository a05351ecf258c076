//! Feature flags advertised by the server
//!
//! The backend sets a cookie of the form `r.1_e.0`: `_`-separated segments,
//! each a key and a value joined by `.`. Nothing here is persisted; every
//! lookup re-reads the cookie.

use crate::consts::{EXPORT_ENABLED_KEY, REGISTRATION_ENABLED_KEY, SERVER_SETTINGS_COOKIE};
use crate::platform::CookieSource;

/// Value meaning "enabled" for boolean flags
const ENABLED: &str = "1";

/// Parsed view over one server settings cookie value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerSettings {
    raw: String,
}

impl ServerSettings {
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
        }
    }

    /// Read the default server settings cookie. A missing cookie reads as empty.
    pub fn from_cookies<C: CookieSource>(cookies: &C) -> Self {
        Self::from_cookie_named(cookies, SERVER_SETTINGS_COOKIE)
    }

    pub fn from_cookie_named<C: CookieSource>(cookies: &C, name: &str) -> Self {
        Self {
            raw: cookies.cookie(name).unwrap_or_default(),
        }
    }

    /// Value of the first segment whose key is exactly `key`.
    ///
    /// Keys are not required to be unique; later duplicates are ignored. A
    /// matching segment with no `.` has no value, and ends the search.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.raw.split('_').find_map(|segment| {
            let (pair_key, pair_value) = match segment.split_once('.') {
                Some((k, v)) => (k, Some(v)),
                None => (segment, None),
            };
            (pair_key == key).then_some(pair_value)
        })?
    }

    pub fn is_enabled(&self, key: &str) -> bool {
        self.get(key) == Some(ENABLED)
    }

    pub fn is_user_registration_enabled(&self) -> bool {
        self.is_enabled(REGISTRATION_ENABLED_KEY)
    }

    pub fn is_data_exporting_enabled(&self) -> bool {
        self.is_enabled(EXPORT_ENABLED_KEY)
    }
}

/// Look up a single server setting from the current cookie
pub fn server_setting<C: CookieSource>(cookies: &C, key: &str) -> Option<String> {
    ServerSettings::from_cookies(cookies).get(key).map(str::to_string)
}

pub fn is_user_registration_enabled<C: CookieSource>(cookies: &C) -> bool {
    ServerSettings::from_cookies(cookies).is_user_registration_enabled()
}

pub fn is_data_exporting_enabled<C: CookieSource>(cookies: &C) -> bool {
    ServerSettings::from_cookies(cookies).is_data_exporting_enabled()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::StaticCookies;
    use proptest::prelude::*;

    fn cookies(value: &str) -> StaticCookies {
        StaticCookies::new().with(SERVER_SETTINGS_COOKIE, value)
    }

    #[test]
    fn test_registration_on_export_off() {
        let jar = cookies("r.1_e.0");
        assert!(is_user_registration_enabled(&jar));
        assert!(!is_data_exporting_enabled(&jar));
    }

    #[test]
    fn test_missing_or_empty_cookie() {
        let none = StaticCookies::new();
        assert!(!is_user_registration_enabled(&none));
        assert!(!is_data_exporting_enabled(&none));
        assert_eq!(server_setting(&none, "r"), None);

        let empty = cookies("");
        assert!(!is_user_registration_enabled(&empty));
        assert!(!is_data_exporting_enabled(&empty));
    }

    #[test]
    fn test_first_match_wins() {
        let settings = ServerSettings::parse("e.1_r.0_e.0_r.1");
        assert_eq!(settings.get("e"), Some("1"));
        assert_eq!(settings.get("r"), Some("0"));
        assert!(settings.is_data_exporting_enabled());
        assert!(!settings.is_user_registration_enabled());
    }

    #[test]
    fn test_value_split_on_first_dot() {
        let settings = ServerSettings::parse("v.1.2.3_r.1");
        assert_eq!(settings.get("v"), Some("1.2.3"));
        assert_eq!(settings.get("r"), Some("1"));
    }

    #[test]
    fn test_segment_without_value() {
        let settings = ServerSettings::parse("r_r.1");
        assert_eq!(settings.get("r"), None);
        assert!(!settings.is_user_registration_enabled());

        let settings = ServerSettings::parse("r._e.1");
        assert_eq!(settings.get("r"), Some(""));
        assert_eq!(settings.get("x"), None);
    }

    #[test]
    fn test_flags_are_exact_match() {
        let settings = ServerSettings::parse("r.11_e.true");
        assert!(!settings.is_user_registration_enabled());
        assert!(!settings.is_data_exporting_enabled());
        assert!(!ServerSettings::parse("R.1").is_user_registration_enabled());
    }

    #[test]
    fn test_flags_from_cookie_header() {
        let jar = StaticCookies::from_header(
            "theme=dark; lab_server_settings=r.0_e.1; lab_server_settings=r.1",
        );
        assert!(!is_user_registration_enabled(&jar));
        assert!(is_data_exporting_enabled(&jar));
        assert_eq!(server_setting(&jar, "e").as_deref(), Some("1"));
    }

    #[test]
    fn test_custom_cookie_name() {
        let jar = StaticCookies::new().with("other", "e.1");
        assert!(ServerSettings::from_cookie_named(&jar, "other").is_data_exporting_enabled());
        assert!(!ServerSettings::from_cookies(&jar).is_data_exporting_enabled());
    }

    proptest! {
        #[test]
        fn prop_first_segment_for_key_wins(
            pairs in proptest::collection::vec(("[a-z]", "[0-9]{1,2}"), 1..8)
        ) {
            let raw = pairs
                .iter()
                .map(|(k, v)| format!("{k}.{v}"))
                .collect::<Vec<_>>()
                .join("_");
            let settings = ServerSettings::parse(&raw);
            for (key, _) in &pairs {
                let expected = pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str());
                prop_assert_eq!(settings.get(key), expected);
            }
        }
    }
}
