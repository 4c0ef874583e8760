use anyhow::{anyhow, Context};
use tracing::{info, warn};
use webrevamp_core_contact_contracts::{
    notification::ContactNotificationService, spam::ContactSpamService,
    validation::ContactValidationService, ContactFeatureService, ContactSubmitError,
    ContactSubmitRequest,
};
use webrevamp_di::Build;
use webrevamp_models::contact::{ContactSubmission, ContactSubmissionId};
use webrevamp_persistence_contracts::{
    contact::{ContactRepoError, ContactRepository},
    Database, Transaction,
};
use webrevamp_shared_contracts::{id::IdService, time::TimeService};
use webrevamp_utils::trace_instrument;

pub mod notification;
pub mod spam;
pub mod validation;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Build)]
#[cfg_attr(test, derive(Default))]
pub struct ContactFeatureServiceImpl<Db, Id, Time, Spam, Validation, Notification, ContactRepo> {
    db: Db,
    id: Id,
    time: Time,
    spam: Spam,
    validation: Validation,
    notification: Notification,
    contact_repo: ContactRepo,
}

impl<Db, Id, Time, Spam, Validation, Notification, ContactRepo> ContactFeatureService
    for ContactFeatureServiceImpl<Db, Id, Time, Spam, Validation, Notification, ContactRepo>
where
    Db: Database,
    Id: IdService,
    Time: TimeService,
    Spam: ContactSpamService,
    Validation: ContactValidationService,
    Notification: ContactNotificationService,
    ContactRepo: ContactRepository<Db::Transaction>,
{
    #[trace_instrument(skip(self))]
    async fn submit(
        &self,
        request: ContactSubmitRequest,
    ) -> Result<ContactSubmissionId, ContactSubmitError> {
        if self.spam.is_spam(&request) {
            info!("Rejected contact submission with filled honeypot field");
            return Err(ContactSubmitError::Spam);
        }

        let submission = self
            .validation
            .validate(request)
            .map_err(ContactSubmitError::Validation)?
            .into_submission(self.id.generate(), self.time.now());

        self.store(&submission)
            .await
            .map_err(ContactSubmitError::Storage)?;

        if let Err(err) = self.notification.notify(&submission).await {
            warn!(id = %submission.id, "Failed to send contact notifications: {err}");
        }

        Ok(submission.id)
    }

    #[trace_instrument(skip(self))]
    async fn list_submissions(&self) -> anyhow::Result<Vec<ContactSubmission>> {
        let mut txn = self.db.begin_transaction().await?;

        self.contact_repo
            .list(&mut txn)
            .await
            .context("Failed to get contact submissions from database")
    }
}

impl<Db, Id, Time, Spam, Validation, Notification, ContactRepo>
    ContactFeatureServiceImpl<Db, Id, Time, Spam, Validation, Notification, ContactRepo>
where
    Db: Database,
    ContactRepo: ContactRepository<Db::Transaction>,
{
    async fn store(&self, submission: &ContactSubmission) -> anyhow::Result<()> {
        let mut txn = self.db.begin_transaction().await?;

        self.contact_repo
            .create(&mut txn, submission)
            .await
            .map_err(|err| match err {
                ContactRepoError::Conflict => {
                    anyhow!("Contact submission {} already exists", submission.id)
                }
                ContactRepoError::Other(err) => err,
            })
            .context("Failed to save contact submission in database")?;

        txn.commit().await
    }
}
