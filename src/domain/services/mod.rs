// Routing services
// Framework-agnostic, 100% testable

pub mod permission_filter;
pub mod page_loader;
pub mod route_flattener;
pub mod menu_builder;
pub mod breadcrumb;
pub mod route_table;
pub mod navigation_controller;

pub use breadcrumb::BreadcrumbResolver;
pub use navigation_controller::{navigate, ControllerCell, NavigationAttempt, NavigationController, NavigationHistory};
pub use page_loader::{EmbeddedPageSource, PageLoaderCache, PageSource, RouteLoader};
#[cfg(target_arch = "wasm32")]
pub use page_loader::HttpPageSource;
pub use route_flattener::FlattenedRoute;
pub use route_table::{RouteCatalog, RouteTable};
