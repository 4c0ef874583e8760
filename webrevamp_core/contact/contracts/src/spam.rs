use crate::ContactSubmitRequest;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactSpamService: Send + Sync + 'static {
    /// Return whether the submission was sent by a bot.
    fn is_spam(&self, request: &ContactSubmitRequest) -> bool;
}

#[cfg(feature = "mock")]
impl MockContactSpamService {
    pub fn with_is_spam(mut self, request: ContactSubmitRequest, result: bool) -> Self {
        self.expect_is_spam()
            .once()
            .with(mockall::predicate::eq(request))
            .return_const(result);
        self
    }
}
