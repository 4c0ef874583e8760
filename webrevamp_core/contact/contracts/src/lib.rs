use std::future::Future;

use thiserror::Error;
use webrevamp_models::contact::{ContactSubmission, ContactSubmissionId};

pub mod notification;
pub mod spam;
pub mod validation;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Run a raw contact form submission through the intake pipeline.
    ///
    /// Spam is rejected before any validation takes place. Accepted
    /// submissions are stored before the notification emails are sent, and
    /// failing notifications never cause the submission to be rejected.
    fn submit(
        &self,
        request: ContactSubmitRequest,
    ) -> impl Future<Output = Result<ContactSubmissionId, ContactSubmitError>> + Send;

    /// Return all stored submissions in the order they were accepted.
    fn list_submissions(
        &self,
    ) -> impl Future<Output = anyhow::Result<Vec<ContactSubmission>>> + Send;
}

/// The fields of a contact form submission as received from the client.
///
/// `website` is a honeypot field which is hidden from human visitors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmitRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub current_website: Option<String>,
    pub message: Option<String>,
    pub website: Option<String>,
    /// Fields which were submitted with a value that is not a string. Their
    /// entries above are `None`.
    pub malformed: Vec<ContactField>,
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("Spam submission detected.")]
    Spam,
    #[error("The submission is invalid.")]
    Validation(Vec<ContactViolation>),
    #[error("The submission store is unavailable: {0:#}")]
    Storage(anyhow::Error),
}

/// A single failed validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactViolation {
    pub field: ContactField,
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Company,
    CurrentWebsite,
    Message,
}

impl ContactField {
    /// The name of the field in the contact form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::CurrentWebsite => "currentWebsite",
            Self::Message => "message",
        }
    }
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(
        mut self,
        request: ContactSubmitRequest,
        result: Result<ContactSubmissionId, ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_list_submissions(mut self, result: anyhow::Result<Vec<ContactSubmission>>) -> Self {
        self.expect_list_submissions()
            .once()
            .return_once(|| Box::pin(std::future::ready(result)));
        self
    }
}
