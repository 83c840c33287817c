//! Lazy, single-flight resolution of page modules.
//!
//! A [`PageLoaderCache`] hands out cheap [`RouteLoader`] handles. Nothing is
//! fetched until [`RouteLoader::load`] is called; concurrent calls for the
//! same key share one underlying fetch, and a resolved module stays cached
//! for the session. Failed fetches are evicted so a later attempt retries.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use futures::future::{FutureExt, LocalBoxFuture, Shared};
use serde_json::{Map, Value};

use crate::domain::models::PageModule;
use crate::shared::errors::{AppError, Result};
use crate::shared::logging::{log_page_fetch_result, log_page_fetch_start};

/// Where page modules come from
pub trait PageSource {
    /// Start fetching the module for `key`. Called at most once per in-flight load.
    fn fetch(&self, key: &str) -> LocalBoxFuture<'static, Result<PageModule>>;
}

type LoadResult = Result<Rc<PageModule>>;
type SharedLoad = Shared<LocalBoxFuture<'static, LoadResult>>;
type InflightMap = RefCell<HashMap<String, SharedLoad>>;

/// Single-flight cache keyed by route key
#[derive(Clone)]
pub struct PageLoaderCache {
    source: Rc<dyn PageSource>,
    inflight: Rc<InflightMap>,
}

impl PageLoaderCache {
    pub fn new(source: Rc<dyn PageSource>) -> Self {
        Self {
            source,
            inflight: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// Bind a loader for `key` without starting it
    pub fn loader(&self, key: &str) -> RouteLoader {
        RouteLoader {
            key: key.to_string(),
            cache: self.clone(),
        }
    }

    fn load(&self, key: &str) -> SharedLoad {
        if let Some(existing) = self.inflight.borrow().get(key) {
            return existing.clone();
        }

        log_page_fetch_start(key);
        let fetch = self.source.fetch(key);
        let inflight: Weak<InflightMap> = Rc::downgrade(&self.inflight);
        let owned_key = key.to_string();

        let shared = async move {
            let result = fetch.await.map(Rc::new);
            log_page_fetch_result(&owned_key, result.is_ok());
            if result.is_err() {
                if let Some(map) = inflight.upgrade() {
                    map.borrow_mut().remove(&owned_key);
                }
            }
            result
        }
        .boxed_local()
        .shared();

        self.inflight
            .borrow_mut()
            .insert(key.to_string(), shared.clone());
        shared
    }

    fn peek(&self, key: &str) -> Option<Rc<PageModule>> {
        let map = self.inflight.borrow();
        match map.get(key)?.peek()? {
            Ok(module) => Some(Rc::clone(module)),
            Err(_) => None,
        }
    }
}

impl fmt::Debug for PageLoaderCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageLoaderCache")
            .field("cached", &self.inflight.borrow().len())
            .finish()
    }
}

/// Zero-argument, idempotent loader bound to one route
#[derive(Clone, Debug)]
pub struct RouteLoader {
    key: String,
    cache: PageLoaderCache,
}

impl RouteLoader {
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Resolve the page module, joining any load already in flight
    pub fn load(&self) -> SharedLoad {
        self.cache.load(&self.key)
    }

    /// The module, if a previous load already resolved it
    pub fn resolved(&self) -> Option<Rc<PageModule>> {
        self.cache.peek(&self.key)
    }
}

/// Page manifests compiled into the binary
pub struct EmbeddedPageSource {
    manifests: Map<String, Value>,
}

impl EmbeddedPageSource {
    /// Parse a JSON object of `key -> manifest`
    pub fn from_json(json: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(json)? {
            Value::Object(manifests) => Ok(Self { manifests }),
            _ => Err(AppError::ConfigError(
                "page manifests must be a JSON object".to_string(),
            )),
        }
    }

    pub fn embedded() -> Result<Self> {
        Self::from_json(include_str!("../../../assets/pages.json"))
    }

    /// Raw manifest for `key`, served by the pages endpoint
    pub fn manifest(&self, key: &str) -> Option<&Value> {
        self.manifests.get(key)
    }

    fn resolve(&self, key: &str) -> Result<PageModule> {
        let manifest = self
            .manifests
            .get(key)
            .ok_or_else(|| AppError::load_failure(key, "no page module registered"))?;
        let mut module: PageModule = serde_json::from_value(manifest.clone())
            .map_err(|e| AppError::load_failure(key, e))?;
        module.key = key.to_string();
        Ok(module)
    }
}

impl PageSource for EmbeddedPageSource {
    fn fetch(&self, key: &str) -> LocalBoxFuture<'static, Result<PageModule>> {
        futures::future::ready(self.resolve(key)).boxed_local()
    }
}

/// Fetches `{base_url}/{key}.json` from the server
#[cfg(target_arch = "wasm32")]
pub struct HttpPageSource {
    base_url: String,
}

#[cfg(target_arch = "wasm32")]
impl HttpPageSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl PageSource for HttpPageSource {
    fn fetch(&self, key: &str) -> LocalBoxFuture<'static, Result<PageModule>> {
        use gloo_net::http::Request;

        let url = format!(
            "{}/{}.json",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(key)
        );
        let key = key.to_string();
        async move {
            let response = Request::get(&url)
                .send()
                .await
                .map_err(|e| AppError::load_failure(&key, e))?;
            if !response.ok() {
                return Err(AppError::load_failure(
                    &key,
                    format!("HTTP {}: {}", response.status(), response.status_text()),
                ));
            }
            let mut module = response
                .json::<PageModule>()
                .await
                .map_err(|e| AppError::load_failure(&key, e))?;
            module.key = key;
            Ok(module)
        }
        .boxed_local()
    }
}
