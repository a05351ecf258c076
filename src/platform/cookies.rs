//! Read-only cookie access

use std::collections::HashMap;

/// Source of cookie values, looked up by name
pub trait CookieSource {
    /// `None` when no cookie with that name is set
    fn cookie(&self, name: &str) -> Option<String>;
}

impl<T: CookieSource + ?Sized> CookieSource for &T {
    fn cookie(&self, name: &str) -> Option<String> {
        (**self).cookie(name)
    }
}

/// Fixed set of cookies (native builds, tests, server-side rendering)
#[derive(Debug, Clone, Default)]
pub struct StaticCookies {
    cookies: HashMap<String, String>,
}

impl StaticCookies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.cookies.insert(name.to_string(), value.to_string());
        self
    }

    /// Parse a `Cookie:` header / `document.cookie` string
    pub fn from_header(header: &str) -> Self {
        let mut cookies = HashMap::new();
        for (name, value) in header_pairs(header) {
            // First occurrence wins, as in browsers' lookup order
            cookies.entry(name.to_string()).or_insert(value);
        }
        Self { cookies }
    }
}

impl CookieSource for StaticCookies {
    fn cookie(&self, name: &str) -> Option<String> {
        self.cookies.get(name).cloned()
    }
}

/// Look up `name` in a `name=value; name2=value2` string
pub fn parse_cookie_header(header: &str, name: &str) -> Option<String> {
    header_pairs(header).find_map(|(n, v)| (n == name).then_some(v))
}

fn header_pairs(header: &str) -> impl Iterator<Item = (&str, String)> {
    header.split(';').filter_map(|part| {
        let (name, value) = part.trim().split_once('=')?;
        let value = value.trim();
        let value = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .unwrap_or(value);
        Some((name.trim(), decode_value(value)))
    })
}

/// URL-decode a cookie value. Values that do not decode to UTF-8 are
/// returned as written.
fn decode_value(value: &str) -> String {
    match urlencoding::decode(value) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => value.to_string(),
    }
}

/// `document.cookie`, read fresh on every lookup
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentCookies;

#[cfg(target_arch = "wasm32")]
impl CookieSource for DocumentCookies {
    fn cookie(&self, name: &str) -> Option<String> {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()?
            .document()?
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()?;
        let header = document.cookie().ok()?;
        parse_cookie_header(&header, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cookie_header() {
        let header = "theme=dark; lab_server_settings=r.1_e.0;session=abc";
        assert_eq!(
            parse_cookie_header(header, "lab_server_settings").as_deref(),
            Some("r.1_e.0")
        );
        assert_eq!(parse_cookie_header(header, "session").as_deref(), Some("abc"));
        assert_eq!(parse_cookie_header(header, "missing"), None);
        assert_eq!(parse_cookie_header("", "theme"), None);
    }

    #[test]
    fn test_first_cookie_wins() {
        let header = "a=1; a=2";
        assert_eq!(parse_cookie_header(header, "a").as_deref(), Some("1"));
        assert_eq!(StaticCookies::from_header(header).cookie("a").as_deref(), Some("1"));
    }

    #[test]
    fn test_quoted_and_encoded_values() {
        assert_eq!(parse_cookie_header("a=\"x y\"", "a").as_deref(), Some("x y"));
        assert_eq!(parse_cookie_header("a=r.1%5Fe.1", "a").as_deref(), Some("r.1_e.1"));
        assert_eq!(parse_cookie_header("a=100%", "a").as_deref(), Some("100%"));
        assert_eq!(parse_cookie_header("a=%zz", "a").as_deref(), Some("%zz"));
    }

    #[test]
    fn test_non_utf8_escape_kept_verbatim() {
        let header = "lab_server_settings=r.%FF_e.1";
        assert_eq!(
            parse_cookie_header(header, "lab_server_settings").as_deref(),
            Some("r.%FF_e.1")
        );
    }

    #[test]
    fn test_static_cookies_builder() {
        let cookies = StaticCookies::new().with("x", "1");
        assert_eq!(cookies.cookie("x").as_deref(), Some("1"));
        assert_eq!(cookies.cookie("y"), None);
    }
}
