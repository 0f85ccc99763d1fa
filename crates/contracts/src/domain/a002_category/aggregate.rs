use serde::{Deserialize, Serialize};

/// Synthetic category that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// Ordered category names, always starting with [`ALL_CATEGORIES`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySet(Vec<String>);

impl Default for CategorySet {
    fn default() -> Self {
        Self(vec![ALL_CATEGORIES.to_string()])
    }
}

impl CategorySet {
    /// Build from the categories endpoint: `"All"` goes first, remote order is
    /// kept, blanks and repeats are dropped.
    pub fn from_remote(names: Vec<String>) -> Self {
        let mut set = Self::default();
        for name in names {
            set.insert(&name);
        }
        set
    }

    /// Append a trimmed category unless it is blank, `"All"`, or already
    /// present. Returns whether the set changed.
    pub fn insert(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.0.push(name.to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|c| c == name)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when only the synthetic `"All"` entry is present.
    pub fn is_empty(&self) -> bool {
        self.0.len() <= 1
    }
}
