// Domain models (routing entities)
// Pure Rust, no framework dependencies

pub mod route;
pub mod permission;
pub mod menu;
pub mod navigation;
pub mod page;

pub use route::RouteNode;
pub use permission::PermissionSet;
pub use menu::{BreadcrumbMap, LeafTrail, MenuEntry, MenuEntryKind, MenuIcon, MenuTitle, MenuTree};
pub use navigation::{AttemptOutcome, NavigationPhase, NavigationState};
pub use page::{PageModule, PageSection};
