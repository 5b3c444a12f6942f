//! Test double for `PlaceholderResolver`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::PlaceholderBindings;
use crate::ports::PlaceholderResolver;

/// Resolver with canned answers that records every template it sees.
///
/// Templates without a canned answer resolve to `None`.
#[derive(Clone, Debug, Default)]
pub struct StaticResolver {
    answers: HashMap<String, String>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, template: &str, resolved: &str) -> Self {
        self.answers.insert(template.to_string(), resolved.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl PlaceholderResolver for StaticResolver {
    fn resolve(&self, template: &str, _bindings: &PlaceholderBindings) -> Option<String> {
        self.calls.lock().unwrap().push(template.to_string());
        self.answers.get(template).cloned()
    }
}
