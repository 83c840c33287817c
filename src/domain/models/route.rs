use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::models::PermissionSet;

/// A node in the declarative route configuration tree.
///
/// A node with no children (or an empty children list) is a leaf and bears a
/// page. A node with children is a branch and only contributes menu structure
/// and breadcrumb labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteNode {
    pub key: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<RouteNode>>,
    #[serde(
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub required_permission: Vec<String>,
    /// Any one of `required_permission` is enough instead of all of them
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub one_of_permission: bool,
    #[serde(default = "default_breadcrumb")]
    pub breadcrumb: bool,
}

fn default_breadcrumb() -> bool {
    true
}

/// Accepts `"token"` as well as `["a", "b"]`
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(token)) => vec![token],
        Some(OneOrMany::Many(tokens)) => tokens,
    })
}

impl RouteNode {
    /// Create a leaf route
    pub fn leaf(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            path: None,
            children: None,
            required_permission: Vec::new(),
            one_of_permission: false,
            breadcrumb: true,
        }
    }

    /// Create a branch route
    pub fn branch(key: impl Into<String>, name: impl Into<String>, children: Vec<RouteNode>) -> Self {
        Self {
            children: Some(children),
            ..Self::leaf(key, name)
        }
    }

    /// Synthetic root holding the top-level routes
    pub fn root(children: Vec<RouteNode>) -> Self {
        Self::branch("", "", children)
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_permission(mut self, token: impl Into<String>) -> Self {
        self.required_permission.push(token.into());
        self
    }

    pub fn with_one_of_permission(mut self) -> Self {
        self.one_of_permission = true;
        self
    }

    pub fn without_breadcrumb(mut self) -> Self {
        self.breadcrumb = false;
        self
    }

    /// Child nodes; empty for a leaf
    pub fn children(&self) -> &[RouteNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// An empty children list counts as a leaf, never as an empty branch
    pub fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }

    /// Explicit path, or `/` + key, in the router's form: one leading
    /// slash, no trailing slash
    pub fn resolved_path(&self) -> String {
        let raw = self.path.as_deref().unwrap_or(&self.key);
        format!("/{}", raw.trim().trim_matches('/'))
    }

    /// Whether `permissions` satisfies this node's own requirement
    pub fn is_permitted(&self, permissions: &PermissionSet) -> bool {
        if self.required_permission.is_empty() {
            return true;
        }
        if self.one_of_permission {
            self.required_permission.iter().any(|token| permissions.contains(token))
        } else {
            self.required_permission.iter().all(|token| permissions.contains(token))
        }
    }

    /// Leaf keys in depth-first order
    pub fn leaf_keys(&self) -> Vec<String> {
        if self.is_leaf() {
            return vec![self.key.clone()];
        }
        self.children().iter().flat_map(RouteNode::leaf_keys).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_children_is_leaf() {
        let node = RouteNode::branch("settings", "menu.settings", vec![]);
        assert!(node.is_leaf());
        assert_eq!(node.leaf_keys(), vec!["settings".to_string()]);
    }

    #[test]
    fn test_resolved_path_defaults_to_key() {
        assert_eq!(RouteNode::leaf("dashboard/workplace", "w").resolved_path(), "/dashboard/workplace");
        assert_eq!(RouteNode::leaf("home", "h").with_path("/welcome").resolved_path(), "/welcome");
    }

    #[test]
    fn test_resolved_path_is_normalized() {
        assert_eq!(RouteNode::leaf("a", "A").with_path("/a/").resolved_path(), "/a");
        assert_eq!(RouteNode::leaf("b", "B").with_path("b").resolved_path(), "/b");
        assert_eq!(RouteNode::leaf("c", "C").with_path("/").resolved_path(), "/");
    }

    #[test]
    fn test_deserialize_permission_forms() {
        let single: RouteNode = serde_json::from_str(
            r#"{"key":"a","name":"A","requiredPermission":"menu.a"}"#,
        )
        .unwrap();
        assert_eq!(single.required_permission, vec!["menu.a".to_string()]);
        assert!(single.breadcrumb);

        let many: RouteNode = serde_json::from_str(
            r#"{"key":"b","name":"B","requiredPermission":["x","y"],"oneOfPermission":true,"breadcrumb":false}"#,
        )
        .unwrap();
        assert_eq!(many.required_permission.len(), 2);
        assert!(many.one_of_permission);
        assert!(!many.breadcrumb);

        let none: RouteNode = serde_json::from_str(r#"{"key":"c","name":"C"}"#).unwrap();
        assert!(none.required_permission.is_empty());
        assert!(none.is_leaf());
    }

    #[test]
    fn test_is_permitted() {
        let perms = PermissionSet::from_tokens(["x"]);
        let all = RouteNode::leaf("a", "A").with_permission("x").with_permission("y");
        let any = all.clone().with_one_of_permission();

        assert!(RouteNode::leaf("open", "Open").is_permitted(&perms));
        assert!(!all.is_permitted(&perms));
        assert!(any.is_permitted(&perms));
    }
}
