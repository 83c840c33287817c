use crate::domain::models::{BreadcrumbMap, LeafTrail};

/// Current path to breadcrumb lookup over a prebuilt map
#[derive(Debug, Clone, Copy)]
pub struct BreadcrumbResolver<'a> {
    map: &'a BreadcrumbMap,
}

impl<'a> BreadcrumbResolver<'a> {
    pub fn new(map: &'a BreadcrumbMap) -> Self {
        Self { map }
    }

    /// Labels for `pathname`; unknown paths yield an empty trail
    pub fn resolve(&self, pathname: &str) -> Vec<String> {
        self.trail(pathname)
            .map(|trail| trail.labels.clone())
            .unwrap_or_default()
    }

    pub fn trail(&self, pathname: &str) -> Option<&'a LeafTrail> {
        self.map.get(normalize(pathname))
    }
}

/// Drop query string, fragment and a trailing slash
fn normalize(pathname: &str) -> &str {
    let end = pathname.find(['?', '#']).unwrap_or(pathname.len());
    let path = &pathname[..end];
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}
