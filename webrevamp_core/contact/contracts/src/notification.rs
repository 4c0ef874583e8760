use std::future::Future;

use thiserror::Error;
use webrevamp_models::contact::ContactSubmission;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactNotificationService: Send + Sync + 'static {
    /// Alert the agency about the submission and send a confirmation to the
    /// submitter.
    ///
    /// Both messages are attempted even if one of them fails.
    fn notify(
        &self,
        submission: &ContactSubmission,
    ) -> impl Future<Output = Result<(), ContactNotifyError>> + Send;
}

#[derive(Debug, Error)]
#[error("Failed to deliver contact notifications: {failures:?}")]
pub struct ContactNotifyError {
    pub failures: Vec<ContactNotifyFailure>,
}

#[derive(Debug)]
pub struct ContactNotifyFailure {
    pub notification: ContactNotification,
    pub reason: ContactNotifyFailureReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactNotification {
    AdminAlert,
    Confirmation,
}

#[derive(Debug)]
pub enum ContactNotifyFailureReason {
    /// The smtp server did not accept the message.
    Rejected,
    /// The message could not be sent within the configured timeout.
    Timeout,
    Error(anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactNotificationService {
    pub fn with_notify(
        mut self,
        submission: ContactSubmission,
        result: Result<(), ContactNotifyError>,
    ) -> Self {
        self.expect_notify()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
