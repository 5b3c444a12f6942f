use crate::domain::InstructionEvent;

/// Port for reporting instruction outcomes to the rest of the system.
///
/// Delivery is fire-and-forget: implementations must not fail the caller.
pub trait NotificationSink {
    /// Report an instruction that could not be executed at all.
    fn report_error(&self, text: &str);

    /// Report an instruction that reached a terminal status after validation.
    fn report_completion(&self, event: &InstructionEvent);
}

impl<T: NotificationSink + ?Sized> NotificationSink for &T {
    fn report_error(&self, text: &str) {
        (**self).report_error(text)
    }

    fn report_completion(&self, event: &InstructionEvent) {
        (**self).report_completion(event)
    }
}
