use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::domain::models::{LeafTrail, MenuEntry, MenuTree, PermissionSet, RouteNode};
use crate::domain::services::breadcrumb::BreadcrumbResolver;
use crate::domain::services::menu_builder::{self, branch_keys};
use crate::domain::services::page_loader::PageLoaderCache;
use crate::domain::services::permission_filter;
use crate::domain::services::route_flattener::{self, FlattenedRoute};
use crate::shared::errors::Result;
use crate::shared::logging::{log_filter_result, log_table_built, log_table_reused};

/// Everything derived from the route tree for one permission set.
///
/// Immutable once built; a permission change produces a new table.
#[derive(Debug)]
pub struct RouteTable {
    version: String,
    tree: RouteNode,
    routes: Vec<FlattenedRoute>,
    by_key: HashMap<String, usize>,
    menu: MenuTree,
    branch_keys: HashSet<String>,
}

impl RouteTable {
    pub fn build(config: &RouteNode, permissions: &PermissionSet, loaders: &PageLoaderCache) -> Result<Self> {
        let version = permissions.fingerprint();
        let tree = permission_filter::filter(config, permissions);
        let routes = route_flattener::flatten(&tree, loaders)?;
        log_filter_result(&version, permissions.len(), routes.len());

        let menu = menu_builder::build(&tree);
        let branch_keys = branch_keys(&menu.entries).into_iter().collect();
        let by_key = routes
            .iter()
            .enumerate()
            .map(|(idx, route)| (route.key.clone(), idx))
            .collect();

        log_table_built(&version, routes.len(), menu.entries.len());
        Ok(Self {
            version,
            tree,
            routes,
            by_key,
            menu,
            branch_keys,
        })
    }

    /// Table with no routes, shown as the "no access" state
    pub fn empty() -> Self {
        Self {
            version: String::from("empty"),
            tree: RouteNode::root(Vec::new()),
            routes: Vec::new(),
            by_key: HashMap::new(),
            menu: MenuTree::default(),
            branch_keys: HashSet::new(),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// The authorized subtree
    pub fn tree(&self) -> &RouteNode {
        &self.tree
    }

    pub fn routes(&self) -> &[FlattenedRoute] {
        &self.routes
    }

    pub fn menu(&self) -> &[MenuEntry] {
        &self.menu.entries
    }

    /// No accessible routes: render the empty state
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Landing route for `/`: the first authorized leaf
    pub fn default_route(&self) -> Option<&FlattenedRoute> {
        self.routes.first()
    }

    pub fn route_by_key(&self, key: &str) -> Option<&FlattenedRoute> {
        self.by_key.get(key).map(|&idx| &self.routes[idx])
    }

    pub fn route_by_path(&self, path: &str) -> Option<&FlattenedRoute> {
        self.trail(path).and_then(|trail| self.route_by_key(&trail.key))
    }

    pub fn is_branch(&self, key: &str) -> bool {
        self.branch_keys.contains(key)
    }

    pub fn breadcrumbs(&self) -> BreadcrumbResolver<'_> {
        BreadcrumbResolver::new(&self.menu.breadcrumbs)
    }

    pub fn trail(&self, path: &str) -> Option<&LeafTrail> {
        self.breadcrumbs().trail(path)
    }
}

/// Owns the full configuration and caches the table for the active permission set
pub struct RouteCatalog {
    config: RouteNode,
    loaders: PageLoaderCache,
    current: RefCell<Option<Rc<RouteTable>>>,
}

impl RouteCatalog {
    /// Validates the unfiltered tree so duplicates hidden by permissions still fail
    pub fn new(config: RouteNode, loaders: PageLoaderCache) -> Result<Self> {
        route_flattener::ensure_unique_keys(&config)?;
        Ok(Self {
            config,
            loaders,
            current: RefCell::new(None),
        })
    }

    pub fn config(&self) -> &RouteNode {
        &self.config
    }

    /// Table for `permissions`, rebuilt only when the permission fingerprint changes
    pub fn authorize(&self, permissions: &PermissionSet) -> Result<Rc<RouteTable>> {
        let version = permissions.fingerprint();
        if let Some(table) = self.current.borrow().as_ref() {
            if table.version() == version {
                log_table_reused(&version);
                return Ok(Rc::clone(table));
            }
        }

        let table = Rc::new(RouteTable::build(&self.config, permissions, &self.loaders)?);
        *self.current.borrow_mut() = Some(Rc::clone(&table));
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::page_loader::testing::ScriptedPageSource;
    use crate::shared::errors::AppError;

    fn catalog() -> RouteCatalog {
        let config = RouteNode::root(vec![
            RouteNode::branch(
                "dashboard",
                "menu.dashboard",
                vec![
                    RouteNode::leaf("dashboard/workplace", "menu.dashboard.workplace"),
                    RouteNode::leaf("dashboard/monitor", "menu.dashboard.monitor").with_permission("monitor"),
                ],
            ),
            RouteNode::leaf("about", "menu.about").with_path("/about-us"),
        ]);
        RouteCatalog::new(config, PageLoaderCache::new(Rc::new(ScriptedPageSource::default()))).unwrap()
    }

    #[test]
    fn test_table_indexes() {
        let table = catalog().authorize(&PermissionSet::new()).unwrap();

        assert_eq!(table.routes().len(), 2);
        assert_eq!(table.default_route().unwrap().key, "dashboard/workplace");
        assert_eq!(table.route_by_key("about").unwrap().path, "/about-us");
        assert_eq!(table.route_by_path("/about-us").unwrap().key, "about");
        assert!(table.route_by_key("dashboard/monitor").is_none());
        assert!(table.is_branch("dashboard"));
        assert!(!table.is_branch("about"));
    }

    #[test]
    fn test_authorize_reuses_same_version() {
        let catalog = catalog();
        let first = catalog.authorize(&PermissionSet::from_tokens(["monitor"])).unwrap();
        let second = catalog.authorize(&PermissionSet::from_tokens(["monitor"])).unwrap();
        assert!(Rc::ptr_eq(&first, &second));

        let third = catalog.authorize(&PermissionSet::new()).unwrap();
        assert!(!Rc::ptr_eq(&first, &third));
        assert_ne!(first.version(), third.version());
        assert_eq!(third.routes().len(), 2);
        assert_eq!(first.routes().len(), 3);
    }

    #[test]
    fn test_catalog_rejects_hidden_duplicates() {
        let config = RouteNode::root(vec![
            RouteNode::leaf("x", "X"),
            RouteNode::leaf("x", "X again").with_path("/x2").with_permission("secret"),
        ]);
        let loaders = PageLoaderCache::new(Rc::new(ScriptedPageSource::default()));

        match RouteCatalog::new(config, loaders) {
            Err(err) => assert_eq!(err, AppError::DuplicateRouteKey("x".to_string())),
            Ok(_) => panic!("duplicate key accepted"),
        }
    }

    #[test]
    fn test_empty_authorized_table() {
        let config = RouteNode::root(vec![RouteNode::leaf("a", "A").with_permission("x")]);
        let loaders = PageLoaderCache::new(Rc::new(ScriptedPageSource::default()));
        let table = RouteCatalog::new(config, loaders)
            .unwrap()
            .authorize(&PermissionSet::new())
            .unwrap();

        assert!(table.is_empty());
        assert!(table.default_route().is_none());
        assert!(table.menu().is_empty());
        assert!(table.tree().children().is_empty());
    }

    #[test]
    fn test_irregular_config_paths_match_router_paths() {
        let config = RouteNode::root(vec![
            RouteNode::leaf("a", "A").with_path("/a/"),
            RouteNode::leaf("b", "B").with_path("b"),
        ]);
        let loaders = PageLoaderCache::new(Rc::new(ScriptedPageSource::default()));
        let table = RouteCatalog::new(config, loaders)
            .unwrap()
            .authorize(&PermissionSet::new())
            .unwrap();

        assert_eq!(table.route_by_path("/a").unwrap().key, "a");
        assert_eq!(table.route_by_path("/a/").unwrap().key, "a");
        assert_eq!(table.route_by_path("/b").unwrap().key, "b");
        assert_eq!(table.breadcrumbs().resolve("/a/"), vec!["A"]);
    }
}
