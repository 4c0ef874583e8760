use webrevamp_models::contact::NewContactSubmission;

use crate::{ContactSubmitRequest, ContactViolation};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactValidationService: Send + Sync + 'static {
    /// Check every field of the submission and normalize the accepted
    /// values.
    ///
    /// On failure, all violations are returned in form order.
    fn validate(
        &self,
        request: ContactSubmitRequest,
    ) -> Result<NewContactSubmission, Vec<ContactViolation>>;
}

#[cfg(feature = "mock")]
impl MockContactValidationService {
    pub fn with_validate(
        mut self,
        request: ContactSubmitRequest,
        result: Result<NewContactSubmission, Vec<ContactViolation>>,
    ) -> Self {
        self.expect_validate()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(|_| result);
        self
    }
}
