use webrevamp_di::Build;
use webrevamp_models::contact::ContactSubmission;
use webrevamp_persistence_contracts::contact::{ContactRepoError, ContactRepository};
use webrevamp_utils::trace_instrument;

use crate::MemoryTransaction;

#[derive(Debug, Clone, Copy, Default, Build)]
pub struct MemoryContactRepository;

impl ContactRepository<MemoryTransaction> for MemoryContactRepository {
    #[trace_instrument(skip(self, txn))]
    async fn list(&self, txn: &mut MemoryTransaction) -> anyhow::Result<Vec<ContactSubmission>> {
        let tables = txn.state.tables.read().await;
        Ok(tables
            .contact_submissions
            .iter()
            .chain(&txn.contact_submissions)
            .cloned()
            .collect())
    }

    #[trace_instrument(skip(self, txn))]
    async fn create(
        &self,
        txn: &mut MemoryTransaction,
        submission: &ContactSubmission,
    ) -> Result<(), ContactRepoError> {
        let committed = txn
            .state
            .tables
            .read()
            .await
            .contact_submission_ids
            .contains(&submission.id);

        if committed || txn.contact_submissions.iter().any(|s| s.id == submission.id) {
            return Err(ContactRepoError::Conflict);
        }

        txn.contact_submissions.push(submission.clone());

        Ok(())
    }
}
