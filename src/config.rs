//! Shell configuration
//!
//! Layout settings, role table, label table and the route tree, loaded from
//! `assets/config.json` which is compiled into the binary.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::models::{PermissionSet, RouteNode};
use crate::shared::errors::{AppError, Result};
use crate::shared::logging::log_config_loaded;
use crate::shared::utils::UrlOverrides;

const EMBEDDED_CONFIG: &str = include_str!("../assets/config.json");

static CONFIG: Lazy<Result<AppConfig>> = Lazy::new(|| AppConfig::from_json(EMBEDDED_CONFIG));

/// Which pieces of chrome are shown and how large they are
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutSettings {
    pub navbar: bool,
    pub menu: bool,
    pub footer: bool,
    pub menu_width: u32,
    pub collapsed_width: u32,
    pub navbar_height: u32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            navbar: true,
            menu: true,
            footer: true,
            menu_width: 220,
            collapsed_width: 48,
            navbar_height: 70,
        }
    }
}

impl LayoutSettings {
    /// Query parameters can only hide chrome, never force it back on
    pub fn apply_overrides(&self, overrides: &UrlOverrides) -> Self {
        Self {
            navbar: self.navbar && overrides.navbar.unwrap_or(true),
            menu: self.menu && overrides.menu.unwrap_or(true),
            footer: self.footer && overrides.footer.unwrap_or(true),
            ..self.clone()
        }
    }

    pub fn sider_width(&self, collapsed: bool) -> u32 {
        if collapsed {
            self.collapsed_width
        } else {
            self.menu_width
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default)]
    pub settings: LayoutSettings,
    /// Role name to granted tokens
    pub roles: BTreeMap<String, Vec<String>>,
    pub default_role: String,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    pub routes: Vec<RouteNode>,
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(json)?;
        if !config.roles.contains_key(&config.default_role) {
            return Err(AppError::UnknownRole(config.default_role));
        }
        ensure_no_root_leaf(&config.routes)?;
        log_config_loaded(config.routes.len(), config.roles.len());
        Ok(config)
    }

    /// The configuration compiled into the binary, parsed once
    pub fn embedded() -> Result<&'static AppConfig> {
        CONFIG.as_ref().map_err(Clone::clone)
    }

    /// Route tree under a synthetic root
    pub fn route_tree(&self) -> RouteNode {
        RouteNode::root(self.routes.clone())
    }

    pub fn permissions_for(&self, role: &str) -> Result<PermissionSet> {
        self.roles
            .get(role)
            .map(|tokens| PermissionSet::from_tokens(tokens.iter().cloned()))
            .ok_or_else(|| AppError::UnknownRole(role.to_string()))
    }

    /// Role to switch to from `role`, cycling in name order
    pub fn next_role<'a>(&'a self, role: &'a str) -> &'a str {
        let names = self.roles.keys().map(String::as_str);
        let first = names.clone().next().unwrap_or(role);
        names
            .skip_while(|name| *name != role)
            .nth(1)
            .unwrap_or(first)
    }

    /// Display text for a label key, falling back to the key itself
    pub fn label<'a>(&'a self, name: &'a str) -> &'a str {
        self.labels.get(name).map(String::as_str).unwrap_or(name)
    }
}

/// `/` is the redirect to the default page, so no leaf may live there
fn ensure_no_root_leaf(nodes: &[RouteNode]) -> Result<()> {
    for node in nodes {
        if node.is_leaf() && node.resolved_path() == "/" {
            return Err(AppError::ConfigError(format!(
                "route '{}' cannot use the root path",
                node.key
            )));
        }
        ensure_no_root_leaf(node.children())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "settings": { "menuWidth": 240, "footer": false },
        "roles": { "admin": ["menu.dashboard.monitor", "menu.example"], "user": [] },
        "defaultRole": "admin",
        "labels": { "menu.dashboard": "Dashboard" },
        "routes": [
            { "key": "dashboard", "name": "menu.dashboard", "children": [
                { "key": "dashboard/workplace", "name": "menu.dashboard.workplace" }
            ]}
        ]
    }"#;

    #[test]
    fn test_parse_sample() {
        let config = AppConfig::from_json(SAMPLE).unwrap();
        assert_eq!(config.settings.menu_width, 240);
        assert!(!config.settings.footer);
        assert!(config.settings.navbar);
        assert_eq!(config.route_tree().children().len(), 1);
    }

    #[test]
    fn test_unknown_default_role_rejected() {
        let json = SAMPLE.replace(r#""defaultRole": "admin""#, r#""defaultRole": "root""#);
        assert_eq!(
            AppConfig::from_json(&json).unwrap_err(),
            AppError::UnknownRole("root".to_string())
        );
    }

    #[test]
    fn test_leaf_on_root_path_rejected() {
        let json = SAMPLE.replace(
            r#"{ "key": "dashboard/workplace", "name": "menu.dashboard.workplace" }"#,
            r#"{ "key": "dashboard/workplace", "name": "menu.dashboard.workplace", "path": "/" }"#,
        );
        assert!(matches!(AppConfig::from_json(&json), Err(AppError::ConfigError(_))));
    }

    #[test]
    fn test_permissions_for_role() {
        let config = AppConfig::from_json(SAMPLE).unwrap();
        assert_eq!(config.permissions_for("admin").unwrap().len(), 2);
        assert!(config.permissions_for("user").unwrap().is_empty());
        assert!(config.permissions_for("guest").is_err());
    }

    #[test]
    fn test_next_role_cycles() {
        let config = AppConfig::from_json(SAMPLE).unwrap();
        assert_eq!(config.next_role("admin"), "user");
        assert_eq!(config.next_role("user"), "admin");
        assert_eq!(config.next_role("unknown"), "admin");
    }

    #[test]
    fn test_label_fallback() {
        let config = AppConfig::from_json(SAMPLE).unwrap();
        assert_eq!(config.label("menu.dashboard"), "Dashboard");
        assert_eq!(config.label("menu.other"), "menu.other");
    }

    #[test]
    fn test_overrides_only_hide() {
        let settings = LayoutSettings {
            footer: false,
            ..LayoutSettings::default()
        };
        let overrides = UrlOverrides {
            navbar: Some(false),
            menu: None,
            footer: Some(true),
        };

        let applied = settings.apply_overrides(&overrides);
        assert!(!applied.navbar);
        assert!(applied.menu);
        assert!(!applied.footer);
        assert_eq!(applied.sider_width(true), 48);
        assert_eq!(applied.sider_width(false), 220);
    }

    #[test]
    fn test_embedded_config_is_valid() {
        let config = AppConfig::embedded().unwrap();
        assert!(config.roles.contains_key(&config.default_role));
        assert!(!config.routes.is_empty());
    }
}
