use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Capability tokens granted to the current session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(BTreeSet<String>);

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tokens.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    pub fn insert(&mut self, token: impl Into<String>) -> bool {
        self.0.insert(token.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_subset(&self, other: &PermissionSet) -> bool {
        self.0.is_subset(&other.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Stable hex digest of the sorted tokens, used as the route table version
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for token in &self.0 {
            hasher.update(token.as_bytes());
            hasher.update([0u8]);
        }
        format!("{:x}", hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_ignores_insertion_order() {
        let a = PermissionSet::from_tokens(["menu.dashboard", "menu.example"]);
        let b = PermissionSet::from_tokens(["menu.example", "menu.dashboard"]);
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.fingerprint().len(), 64);
    }

    #[test]
    fn test_fingerprint_token_boundaries() {
        let joined = PermissionSet::from_tokens(["ab"]);
        let split = PermissionSet::from_tokens(["a", "b"]);
        assert_ne!(joined.fingerprint(), split.fingerprint());
        assert_ne!(PermissionSet::new().fingerprint(), joined.fingerprint());
    }
}
