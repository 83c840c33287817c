//! Structured logging module for the admin shell
//!
//! Provides consistent, contextual logging for the routing core.
//! Every event carries an `operation` field plus the route identifiers involved.

/// Operations that emit log events
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Config,
    RouteFilter,
    RouteFlatten,
    MenuBuild,
    Navigation,
    PageLoad,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Config => "config",
            LogOperation::RouteFilter => "route_filter",
            LogOperation::RouteFlatten => "route_flatten",
            LogOperation::MenuBuild => "menu_build",
            LogOperation::Navigation => "navigation",
            LogOperation::PageLoad => "page_load",
        }
    }
}

/// Log configuration load
pub fn log_config_loaded(route_count: usize, role_count: usize) {
    tracing::info!(
        operation = LogOperation::Config.as_str(),
        top_level_routes = route_count,
        roles = role_count,
        "Shell configuration loaded"
    );
}

/// Log permission filtering result
pub fn log_filter_result(version: &str, permission_count: usize, leaf_count: usize) {
    tracing::debug!(
        operation = LogOperation::RouteFilter.as_str(),
        version = version,
        permissions = permission_count,
        authorized_leaves = leaf_count,
        "Route tree filtered"
    );
    if leaf_count == 0 {
        tracing::warn!(
            operation = LogOperation::RouteFilter.as_str(),
            version = version,
            "No accessible routes for this permission set"
        );
    }
}

/// Log duplicate configuration entries
pub fn log_duplicate_route(kind: &str, value: &str) {
    tracing::error!(
        operation = LogOperation::RouteFlatten.as_str(),
        duplicate = kind,
        value = value,
        "Route configuration contains a duplicate"
    );
}

/// Log route table rebuild
pub fn log_table_built(version: &str, route_count: usize, menu_entries: usize) {
    tracing::info!(
        operation = LogOperation::MenuBuild.as_str(),
        version = version,
        routes = route_count,
        top_level_entries = menu_entries,
        "Route table rebuilt"
    );
}

/// Log route table cache hit
pub fn log_table_reused(version: &str) {
    tracing::trace!(
        operation = LogOperation::MenuBuild.as_str(),
        version = version,
        "Route table reused"
    );
}

/// Log an ignored click on a key with no authorized route
pub fn log_unknown_route_key(key: &str) {
    tracing::warn!(
        operation = LogOperation::Navigation.as_str(),
        route_key = key,
        "Ignoring click on unknown route key"
    );
}

/// Log navigation attempt start
pub fn log_navigation_start(key: &str, attempt: u64) {
    tracing::debug!(
        operation = LogOperation::Navigation.as_str(),
        route_key = key,
        attempt = attempt,
        "Navigation started"
    );
}

/// Log navigation commit
pub fn log_navigation_committed(key: &str, path: &str, attempt: u64) {
    tracing::info!(
        operation = LogOperation::Navigation.as_str(),
        route_key = key,
        path = path,
        attempt = attempt,
        "Navigation committed"
    );
}

/// Log a completion discarded because a newer attempt exists
pub fn log_navigation_superseded(key: &str, attempt: u64, latest: u64) {
    tracing::debug!(
        operation = LogOperation::Navigation.as_str(),
        route_key = key,
        attempt = attempt,
        latest_attempt = latest,
        "Discarding superseded navigation"
    );
}

/// Log an attempt whose driver was dropped mid-load
pub fn log_navigation_abandoned(attempt: u64) {
    tracing::debug!(
        operation = LogOperation::Navigation.as_str(),
        attempt = attempt,
        "Navigation abandoned before its page loaded"
    );
}

/// Log navigation failure
pub fn log_navigation_failed(key: &str, attempt: u64, error: &str) {
    tracing::error!(
        operation = LogOperation::Navigation.as_str(),
        route_key = key,
        attempt = attempt,
        error = error,
        "Navigation failed, keeping current route"
    );
}

/// Log page module fetch start
pub fn log_page_fetch_start(key: &str) {
    tracing::debug!(
        operation = LogOperation::PageLoad.as_str(),
        route_key = key,
        "Fetching page module"
    );
}

/// Log page module fetch result
pub fn log_page_fetch_result(key: &str, ok: bool) {
    if ok {
        tracing::debug!(
            operation = LogOperation::PageLoad.as_str(),
            route_key = key,
            "Page module resolved"
        );
    } else {
        tracing::warn!(
            operation = LogOperation::PageLoad.as_str(),
            route_key = key,
            "Page module failed to resolve, evicted from cache"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::Config.as_str(), "config");
        assert_eq!(LogOperation::RouteFilter.as_str(), "route_filter");
        assert_eq!(LogOperation::RouteFlatten.as_str(), "route_flatten");
        assert_eq!(LogOperation::MenuBuild.as_str(), "menu_build");
        assert_eq!(LogOperation::Navigation.as_str(), "navigation");
        assert_eq!(LogOperation::PageLoad.as_str(), "page_load");
    }
}
