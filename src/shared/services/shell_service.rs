use std::rc::Rc;

use crate::config::AppConfig;
use crate::domain::services::{NavigationController, PageLoaderCache, PageSource, RouteCatalog, RouteTable};
use crate::shared::errors::Result;

/// Startup wiring: configuration, route catalog and page loaders
pub struct ShellService {
    config: AppConfig,
    catalog: RouteCatalog,
}

impl ShellService {
    /// Build the catalog and authorize every configured role once, so a bad
    /// configuration fails here instead of on the first role switch.
    pub fn new(config: AppConfig, source: Rc<dyn PageSource>) -> Result<Self> {
        let catalog = RouteCatalog::new(config.route_tree(), PageLoaderCache::new(source))?;
        for role in config.roles.keys() {
            catalog.authorize(&config.permissions_for(role)?)?;
        }
        catalog.authorize(&config.permissions_for(&config.default_role)?)?;
        Ok(Self { config, catalog })
    }

    /// Embedded configuration with the platform's page source
    pub fn embedded() -> Result<Self> {
        let config = AppConfig::embedded()?.clone();
        Self::new(config, default_page_source()?)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// A saved role if it still exists, else the default role
    pub fn resolve_role(&self, saved: Option<&str>) -> String {
        match saved {
            Some(role) if self.config.roles.contains_key(role) => role.to_string(),
            _ => self.config.default_role.clone(),
        }
    }

    /// Authorized table for `role`; unknown roles fall back to the default role
    pub fn table_for(&self, role: &str) -> Rc<RouteTable> {
        let role = self.resolve_role(Some(role));
        let table = self
            .config
            .permissions_for(&role)
            .and_then(|permissions| self.catalog.authorize(&permissions));
        match table {
            Ok(table) => table,
            Err(err) => {
                tracing::error!(role = %role, error = %err, "Failed to authorize routes, showing empty menu");
                Rc::new(RouteTable::empty())
            }
        }
    }

    pub fn controller_for(&self, role: &str, pathname: &str) -> NavigationController {
        NavigationController::new(self.table_for(role), pathname)
    }
}

#[cfg(target_arch = "wasm32")]
fn default_page_source() -> Result<Rc<dyn PageSource>> {
    Ok(Rc::new(crate::domain::services::HttpPageSource::new("/pages")))
}

#[cfg(not(target_arch = "wasm32"))]
fn default_page_source() -> Result<Rc<dyn PageSource>> {
    Ok(Rc::new(crate::domain::services::EmbeddedPageSource::embedded()?))
}
