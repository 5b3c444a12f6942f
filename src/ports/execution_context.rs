use crate::domain::PlaceholderBindings;

/// Port supplying the placeholder bindings for one run.
pub trait ExecutionContext {
    fn placeholder_bindings(&self) -> &PlaceholderBindings;
}

impl ExecutionContext for PlaceholderBindings {
    fn placeholder_bindings(&self) -> &PlaceholderBindings {
        self
    }
}
