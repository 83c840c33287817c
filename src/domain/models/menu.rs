use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Icon shown next to a menu label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuIcon {
    Dashboard,
    Tag,
    /// Placeholder keeping labels aligned
    Empty,
}

impl MenuIcon {
    pub fn from_key(key: &str) -> Self {
        match key {
            "dashboard" => MenuIcon::Dashboard,
            "example" => MenuIcon::Tag,
            _ => MenuIcon::Empty,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            MenuIcon::Dashboard => "📊",
            MenuIcon::Tag => "🏷️",
            MenuIcon::Empty => "",
        }
    }
}

/// Render-ready title: icon plus label key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuTitle {
    pub icon: MenuIcon,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuEntryKind {
    Item {
        path: String,
        breadcrumb: Vec<String>,
    },
    SubMenu {
        children: Vec<MenuEntry>,
    },
}

/// One entry of the side menu, mirroring the authorized route tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub key: String,
    pub title: MenuTitle,
    /// 1 for top-level entries
    pub level: usize,
    pub kind: MenuEntryKind,
}

impl MenuEntry {
    pub fn is_top_level(&self) -> bool {
        self.level == 1
    }

    pub fn children(&self) -> &[MenuEntry] {
        match &self.kind {
            MenuEntryKind::SubMenu { children } => children,
            MenuEntryKind::Item { .. } => &[],
        }
    }

    /// Leaf keys below (or at) this entry, depth-first
    pub fn leaf_keys(&self) -> Vec<String> {
        match &self.kind {
            MenuEntryKind::Item { .. } => vec![self.key.clone()],
            MenuEntryKind::SubMenu { children } => {
                children.iter().flat_map(MenuEntry::leaf_keys).collect()
            }
        }
    }
}

/// What the shell knows about a leaf reachable at a given path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafTrail {
    pub key: String,
    pub labels: Vec<String>,
    /// Keys of the enclosing branches, outermost first
    pub ancestors: Vec<String>,
}

/// Path to breadcrumb lookup
pub type BreadcrumbMap = HashMap<String, LeafTrail>;

/// Output of one menu build: entries plus the breadcrumb lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuTree {
    pub entries: Vec<MenuEntry>,
    pub breadcrumbs: BreadcrumbMap,
}

impl MenuTree {
    pub fn leaf_keys(&self) -> Vec<String> {
        self.entries.iter().flat_map(MenuEntry::leaf_keys).collect()
    }
}
