/// Test-reporting capability used by every assertion.
///
/// Implementations record the message against the currently running test and
/// mark it failed. Recording must not abort the test.
pub trait Reporter {
    fn record_failure(&self, message: String);
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn record_failure(&self, message: String) {
        (**self).record_failure(message);
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn record_failure(&self, message: String) {
        (**self).record_failure(message);
    }
}
