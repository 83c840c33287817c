use serde::{Deserialize, Serialize};

/// A block of page content, body in Markdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSection {
    pub heading: String,
    #[serde(default)]
    pub body: String,
}

/// Page module resolved by a route loader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageModule {
    /// Filled in from the route key when resolved
    #[serde(default)]
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub sections: Vec<PageSection>,
}
