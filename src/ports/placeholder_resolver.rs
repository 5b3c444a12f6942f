use crate::domain::PlaceholderBindings;

/// Port for substituting placeholder tokens in a string.
///
/// This abstraction keeps the template engine out of the instruction core.
pub trait PlaceholderResolver {
    /// Resolve `template` against `bindings`.
    ///
    /// Returns `None` when no substitution applies; callers keep their
    /// current value in that case.
    fn resolve(&self, template: &str, bindings: &PlaceholderBindings) -> Option<String>;
}
