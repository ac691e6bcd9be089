use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Per-admin permission flags for actions outside the fixed rule table.
/// A key that is absent reads as not granted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionOverrides(BTreeMap<String, bool>);

impl PermissionOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the persisted JSON column. Only boolean members are kept;
    /// anything that is not an object yields an empty set.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Object(map) => map
                .iter()
                .filter_map(|(action, flag)| flag.as_bool().map(|flag| (action.clone(), flag)))
                .collect(),
            _ => Self::default(),
        }
    }

    pub fn grant(mut self, action: impl Into<String>, allowed: bool) -> Self {
        self.0.insert(action.into(), allowed);
        self
    }

    /// True only when the flag is present and exactly `true`
    pub fn is_granted(&self, action: &str) -> bool {
        self.0.get(action).copied().unwrap_or(false)
    }

    /// Actions whose flag is `true`, in name order
    pub fn granted(&self) -> impl Iterator<Item = &str> {
        self.0.iter().filter(|(_, allowed)| **allowed).map(|(action, _)| action.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, bool)> for PermissionOverrides {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
