//! Placeholder bindings supplied by an execution context.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::AppError;

/// Builtin binding holding the provisioning root directory.
pub const PROJECT_ROOT: &str = "project_root";

/// Key to value mapping used when resolving placeholders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceholderBindings {
    values: BTreeMap<String, Value>,
}

impl PlaceholderBindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Overlay `other` on top of these bindings; later values win.
    pub fn extend(&mut self, other: PlaceholderBindings) {
        self.values.extend(other.values);
    }

    /// Parse a `KEY=VALUE` pair. The value is kept as a string and may
    /// itself contain `=`.
    pub fn parse_pair(pair: &str) -> Result<(String, String), AppError> {
        match pair.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                Ok((key.trim().to_string(), value.to_string()))
            }
            _ => Err(AppError::InvalidBinding(pair.to_string())),
        }
    }

    /// Build bindings from `KEY=VALUE` pairs.
    pub fn from_pairs<S: AsRef<str>>(pairs: &[S]) -> Result<Self, AppError> {
        let mut bindings = Self::new();
        for pair in pairs {
            let (key, value) = Self::parse_pair(pair.as_ref())?;
            bindings.insert(key, value);
        }
        Ok(bindings)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for PlaceholderBindings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bindings = Self::new();
        for (key, value) in iter {
            bindings.insert(key, value);
        }
        bindings
    }
}
