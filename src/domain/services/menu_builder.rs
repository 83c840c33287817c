use crate::domain::models::{
    BreadcrumbMap, LeafTrail, MenuEntry, MenuEntryKind, MenuIcon, MenuTitle, MenuTree, RouteNode,
};

/// Build the side menu and the breadcrumb lookup for an authorized tree.
///
/// Both outputs are built from scratch on every call.
pub fn build(tree: &RouteNode) -> MenuTree {
    build_level(tree.children(), 1, &[], &[])
}

fn build_level(nodes: &[RouteNode], level: usize, ancestry: &[String], ancestors: &[String]) -> MenuTree {
    let mut entries = Vec::with_capacity(nodes.len());
    let mut breadcrumbs = BreadcrumbMap::new();

    for node in nodes {
        let title = MenuTitle {
            icon: MenuIcon::from_key(&node.key),
            label: node.name.clone(),
        };

        if node.is_leaf() {
            let mut labels = ancestry.to_vec();
            if node.breadcrumb {
                labels.push(node.name.clone());
            }
            let path = node.resolved_path();
            breadcrumbs.insert(
                path.clone(),
                LeafTrail {
                    key: node.key.clone(),
                    labels: labels.clone(),
                    ancestors: ancestors.to_vec(),
                },
            );
            entries.push(MenuEntry {
                key: node.key.clone(),
                title,
                level,
                kind: MenuEntryKind::Item {
                    path,
                    breadcrumb: labels,
                },
            });
            continue;
        }

        let mut child_ancestry = ancestry.to_vec();
        if node.breadcrumb {
            child_ancestry.push(node.name.clone());
        }
        let mut child_ancestors = ancestors.to_vec();
        child_ancestors.push(node.key.clone());

        let sub = build_level(node.children(), level + 1, &child_ancestry, &child_ancestors);
        breadcrumbs.extend(sub.breadcrumbs);
        entries.push(MenuEntry {
            key: node.key.clone(),
            title,
            level,
            kind: MenuEntryKind::SubMenu {
                children: sub.entries,
            },
        });
    }

    MenuTree {
        entries,
        breadcrumbs,
    }
}

/// Keys of every submenu in the tree
pub fn branch_keys(entries: &[MenuEntry]) -> Vec<String> {
    entries
        .iter()
        .filter(|entry| matches!(entry.kind, MenuEntryKind::SubMenu { .. }))
        .flat_map(|entry| {
            std::iter::once(entry.key.clone()).chain(branch_keys(entry.children()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::PermissionSet;
    use crate::domain::services::page_loader::testing::ScriptedPageSource;
    use crate::domain::services::page_loader::PageLoaderCache;
    use crate::domain::services::permission_filter::filter;
    use crate::domain::services::route_flattener::flatten;
    use std::collections::HashSet;
    use std::rc::Rc;

    #[test]
    fn test_breadcrumb_skips_hidden_branch() {
        let tree = RouteNode::root(vec![RouteNode::branch(
            "a",
            "A",
            vec![RouteNode::branch("b", "B", vec![RouteNode::leaf("c", "C")]).without_breadcrumb()],
        )]);

        let menu = build(&tree);
        let trail = menu.breadcrumbs.get("/c").unwrap();
        assert_eq!(trail.labels, vec!["A", "C"]);
        assert_eq!(trail.ancestors, vec!["a", "b"]);
        assert_eq!(trail.key, "c");
    }

    #[test]
    fn test_leaf_without_breadcrumb_keeps_ancestry() {
        let tree = RouteNode::root(vec![RouteNode::branch(
            "a",
            "A",
            vec![RouteNode::leaf("hidden", "Hidden").without_breadcrumb()],
        )]);

        let menu = build(&tree);
        assert_eq!(menu.breadcrumbs["/hidden"].labels, vec!["A"]);
    }

    #[test]
    fn test_entries_are_tagged_with_level() {
        let tree = RouteNode::root(vec![
            RouteNode::leaf("home", "Home"),
            RouteNode::branch("dashboard", "Dashboard", vec![RouteNode::leaf("dashboard/monitor", "Monitor")]),
        ]);

        let menu = build(&tree);
        assert_eq!(menu.entries.len(), 2);
        assert!(menu.entries[0].is_top_level());
        assert_eq!(menu.entries[1].level, 1);
        assert_eq!(menu.entries[1].title.icon, MenuIcon::Dashboard);

        let child = &menu.entries[1].children()[0];
        assert_eq!(child.level, 2);
        assert!(matches!(
            &child.kind,
            MenuEntryKind::Item { path, breadcrumb } if path == "/dashboard/monitor" && breadcrumb == &vec!["Dashboard".to_string(), "Monitor".to_string()]
        ));
    }

    #[test]
    fn test_breadcrumb_map_uses_explicit_path() {
        let tree = RouteNode::root(vec![RouteNode::leaf("welcome", "Welcome").with_path("/home/")]);

        let menu = build(&tree);
        assert!(menu.breadcrumbs.contains_key("/home"));
        assert!(!menu.breadcrumbs.contains_key("/welcome"));
    }

    #[test]
    fn test_menu_and_flatten_agree_on_leaves() {
        let tree = RouteNode::root(vec![
            RouteNode::branch(
                "dashboard",
                "Dashboard",
                vec![
                    RouteNode::leaf("dashboard/workplace", "W"),
                    RouteNode::leaf("dashboard/monitor", "M").with_permission("monitor"),
                ],
            ),
            RouteNode::branch(
                "example",
                "Example",
                vec![RouteNode::branch("example/nested", "N", vec![RouteNode::leaf("example/nested/x", "X")])],
            ),
            RouteNode::branch("empty", "Empty", vec![]),
        ]);
        let loaders = PageLoaderCache::new(Rc::new(ScriptedPageSource::default()));

        for perms in [PermissionSet::new(), PermissionSet::from_tokens(["monitor"])] {
            let authorized = filter(&tree, &perms);
            let flat: HashSet<String> = flatten(&authorized, &loaders)
                .unwrap()
                .into_iter()
                .map(|r| r.key)
                .collect();
            let menu: HashSet<String> = build(&authorized).leaf_keys().into_iter().collect();
            assert_eq!(flat, menu);
        }
    }

    #[test]
    fn test_branch_keys() {
        let tree = RouteNode::root(vec![
            RouteNode::branch("a", "A", vec![RouteNode::branch("a/b", "B", vec![RouteNode::leaf("a/b/c", "C")])]),
            RouteNode::leaf("d", "D"),
        ]);

        assert_eq!(branch_keys(&build(&tree).entries), vec!["a", "a/b"]);
    }
}
