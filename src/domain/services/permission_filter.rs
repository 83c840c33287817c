use crate::domain::models::{PermissionSet, RouteNode};

/// Prune `tree` down to the subtree visible with `permissions`.
///
/// The root is always returned, possibly without children. Leaves survive when
/// their requirement is met; branches survive when their own requirement is
/// met and at least one descendant leaf survives.
pub fn filter(tree: &RouteNode, permissions: &PermissionSet) -> RouteNode {
    RouteNode {
        children: Some(filter_children(tree.children(), permissions)),
        ..shallow_clone(tree)
    }
}

fn filter_children(nodes: &[RouteNode], permissions: &PermissionSet) -> Vec<RouteNode> {
    nodes
        .iter()
        .filter_map(|node| filter_node(node, permissions))
        .collect()
}

fn filter_node(node: &RouteNode, permissions: &PermissionSet) -> Option<RouteNode> {
    if !node.is_permitted(permissions) {
        return None;
    }
    if node.is_leaf() {
        return Some(node.clone());
    }

    let children = filter_children(node.children(), permissions);
    if children.is_empty() {
        return None;
    }
    Some(RouteNode {
        children: Some(children),
        ..shallow_clone(node)
    })
}

fn shallow_clone(node: &RouteNode) -> RouteNode {
    RouteNode {
        key: node.key.clone(),
        name: node.name.clone(),
        path: node.path.clone(),
        children: None,
        required_permission: node.required_permission.clone(),
        one_of_permission: node.one_of_permission,
        breadcrumb: node.breadcrumb,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample_tree() -> RouteNode {
        RouteNode::root(vec![
            RouteNode::branch(
                "dashboard",
                "menu.dashboard",
                vec![
                    RouteNode::leaf("dashboard/workplace", "menu.dashboard.workplace"),
                    RouteNode::leaf("dashboard/monitor", "menu.dashboard.monitor")
                        .with_permission("menu.dashboard.monitor"),
                ],
            ),
            RouteNode::branch(
                "admin",
                "menu.admin",
                vec![
                    RouteNode::leaf("admin/users", "menu.admin.users").with_permission("admin"),
                    RouteNode::leaf("admin/audit", "menu.admin.audit")
                        .with_permission("admin")
                        .with_permission("audit"),
                ],
            ),
            RouteNode::leaf("about", "menu.about"),
        ])
    }

    fn leaf_set(tree: &RouteNode) -> HashSet<String> {
        tree.children().iter().flat_map(RouteNode::leaf_keys).collect()
    }

    #[test]
    fn test_empty_permissions_keep_unrestricted_leaves() {
        let filtered = filter(&sample_tree(), &PermissionSet::new());
        let keys: Vec<String> = filtered.children().iter().map(|n| n.key.clone()).collect();

        assert_eq!(keys, vec!["dashboard", "about"]);
        assert_eq!(filtered.children()[0].children().len(), 1);
    }

    #[test]
    fn test_all_tokens_required() {
        let filtered = filter(&sample_tree(), &PermissionSet::from_tokens(["admin"]));
        let leaves = leaf_set(&filtered);

        assert!(leaves.contains("admin/users"));
        assert!(!leaves.contains("admin/audit"));
    }

    #[test]
    fn test_preserves_order() {
        let perms = PermissionSet::from_tokens(["admin", "audit", "menu.dashboard.monitor"]);
        let filtered = filter(&sample_tree(), &perms);

        assert_eq!(
            filtered.children().iter().flat_map(RouteNode::leaf_keys).collect::<Vec<_>>(),
            vec![
                "dashboard/workplace",
                "dashboard/monitor",
                "admin/users",
                "admin/audit",
                "about"
            ]
        );
    }

    #[test]
    fn test_branch_requirement_hides_subtree() {
        let tree = RouteNode::root(vec![RouteNode::branch(
            "ops",
            "menu.ops",
            vec![RouteNode::leaf("ops/status", "menu.ops.status")],
        )
        .with_permission("ops")]);

        assert!(filter(&tree, &PermissionSet::new()).children().is_empty());
        assert_eq!(filter(&tree, &PermissionSet::from_tokens(["ops"])).children().len(), 1);
    }

    #[test]
    fn test_filter_is_monotonic() {
        let tree = sample_tree();
        let sets = [
            PermissionSet::new(),
            PermissionSet::from_tokens(["admin"]),
            PermissionSet::from_tokens(["admin", "audit"]),
            PermissionSet::from_tokens(["admin", "audit", "menu.dashboard.monitor"]),
        ];

        for small in &sets {
            for large in &sets {
                if small.is_subset(large) {
                    let lhs = leaf_set(&filter(&tree, small));
                    let rhs = leaf_set(&filter(&tree, large));
                    assert!(lhs.is_subset(&rhs), "{:?} not within {:?}", lhs, rhs);
                }
            }
        }
    }

    #[test]
    fn test_fully_restricted_tree_keeps_root() {
        let tree = RouteNode::root(vec![
            RouteNode::leaf("a", "A").with_permission("x"),
            RouteNode::branch("b", "B", vec![RouteNode::leaf("b/c", "C").with_permission("y")]),
        ]);

        let filtered = filter(&tree, &PermissionSet::new());
        assert_eq!(filtered.key, "");
        assert!(filtered.children().is_empty());
    }
}
