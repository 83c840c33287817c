use std::collections::HashMap;

use url::form_urlencoded;

/// Chrome toggles read from the page URL (`?navbar=false&menu=false`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlOverrides {
    pub navbar: Option<bool>,
    pub menu: Option<bool>,
    pub footer: Option<bool>,
}

impl UrlOverrides {
    /// Parse from a query string, with or without the leading `?`
    pub fn from_query(query: &str) -> Self {
        let params = parse_query(query);
        let flag = |name: &str| params.get(name).and_then(|value| parse_bool(value));
        Self {
            navbar: flag("navbar"),
            menu: flag("menu"),
            footer: flag("footer"),
        }
    }

    /// Overrides for the page currently loaded in the browser
    #[cfg(target_arch = "wasm32")]
    pub fn from_window() -> Self {
        web_sys::window()
            .and_then(|window| window.location().search().ok())
            .map(|search| Self::from_query(&search))
            .unwrap_or_default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_window() -> Self {
        // No browser location during server rendering
        Self::default()
    }
}

/// Decode `a=1&b=two` into a map; later duplicates win
pub fn parse_query(query: &str) -> HashMap<String, String> {
    form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .into_owned()
        .collect()
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
