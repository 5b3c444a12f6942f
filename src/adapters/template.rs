use minijinja::{Environment, UndefinedBehavior};
use std::sync::OnceLock;

use crate::domain::PlaceholderBindings;
use crate::ports::PlaceholderResolver;

/// Placeholder resolver using Minijinja `{{ name }}` expressions.
///
/// Undefined variables are errors, so a path never silently loses a
/// segment; on any failure the caller keeps its raw value.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinijinjaPlaceholderResolver;

impl MinijinjaPlaceholderResolver {
    pub fn new() -> Self {
        Self
    }
}

impl PlaceholderResolver for MinijinjaPlaceholderResolver {
    fn resolve(&self, template: &str, bindings: &PlaceholderBindings) -> Option<String> {
        if !template.contains("{{") {
            return None;
        }

        if let Some(token) = disallowed_template_token(template) {
            tracing::warn!(template, token, "template blocks are not allowed in placeholders");
            return None;
        }

        let env = ENV.get_or_init(|| {
            let mut env = Environment::new();
            env.set_undefined_behavior(UndefinedBehavior::Strict);
            env
        });

        match env.render_str(template, bindings) {
            Ok(rendered) => Some(rendered),
            Err(err) => {
                tracing::warn!(template, error = %err, "placeholder resolution failed");
                None
            }
        }
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn disallowed_template_token(template: &str) -> Option<&'static str> {
    if template.contains("{%") {
        return Some("{%");
    }
    if template.contains("{#") {
        return Some("{#");
    }
    None
}
