use std::collections::HashSet;

use crate::domain::models::RouteNode;
use crate::domain::services::page_loader::{PageLoaderCache, RouteLoader};
use crate::shared::errors::{AppError, Result};
use crate::shared::logging::log_duplicate_route;

/// A navigable leaf route with its (not yet started) page loader
#[derive(Debug, Clone)]
pub struct FlattenedRoute {
    pub key: String,
    pub path: String,
    pub name: String,
    pub loader: RouteLoader,
}

/// Collect the leaves of `tree` depth-first, binding a lazy loader to each.
///
/// The root itself is never emitted. Duplicate keys (on any node) and
/// duplicate leaf paths are configuration errors.
pub fn flatten(tree: &RouteNode, loaders: &PageLoaderCache) -> Result<Vec<FlattenedRoute>> {
    let leaves = collect_leaves(tree)?;

    let mut seen_paths = HashSet::new();
    let mut routes = Vec::with_capacity(leaves.len());
    for leaf in leaves {
        let path = leaf.resolved_path();
        if !seen_paths.insert(path.clone()) {
            log_duplicate_route("path", &path);
            return Err(AppError::DuplicateRoutePath(path));
        }
        routes.push(FlattenedRoute {
            key: leaf.key.clone(),
            name: leaf.name.clone(),
            loader: loaders.loader(&leaf.key),
            path,
        });
    }
    Ok(routes)
}

/// Fail on the first key that appears twice anywhere below the root
pub fn ensure_unique_keys(tree: &RouteNode) -> Result<()> {
    collect_leaves(tree).map(|_| ())
}

fn collect_leaves(tree: &RouteNode) -> Result<Vec<&RouteNode>> {
    let mut seen = HashSet::new();
    let mut leaves = Vec::new();
    let mut stack: Vec<&RouteNode> = tree.children().iter().rev().collect();

    while let Some(node) = stack.pop() {
        if !seen.insert(node.key.as_str()) {
            log_duplicate_route("key", &node.key);
            return Err(AppError::DuplicateRouteKey(node.key.clone()));
        }
        if node.is_leaf() {
            leaves.push(node);
        } else {
            stack.extend(node.children().iter().rev());
        }
    }
    Ok(leaves)
}
