use std::future::Future;

use thiserror::Error;
use webrevamp_models::contact::ContactSubmission;

#[derive(Debug, Error)]
pub enum ContactRepoError {
    #[error("A contact submission with the same id already exists.")]
    Conflict,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Return all contact submissions in the order they were created.
    fn list(&self, txn: &mut Txn)
        -> impl Future<Output = anyhow::Result<Vec<ContactSubmission>>> + Send;

    /// Store a new contact submission.
    ///
    /// Fails with [`ContactRepoError::Conflict`] instead of overwriting an
    /// existing submission with the same id.
    fn create(
        &self,
        txn: &mut Txn,
        submission: &ContactSubmission,
    ) -> impl Future<Output = Result<(), ContactRepoError>> + Send;
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockContactRepository<Txn> {
    pub fn with_list(mut self, result: Vec<ContactSubmission>) -> Self {
        self.expect_list()
            .once()
            .with(mockall::predicate::always())
            .return_once(|_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_create(
        mut self,
        submission: ContactSubmission,
        result: Result<(), ContactRepoError>,
    ) -> Self {
        self.expect_create()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(submission),
            )
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }
}
