use bb8_postgres::tokio_postgres::{self, Row};
use chrono::{DateTime, Utc};
use uuid::Uuid;
use webrevamp_di::Build;
use webrevamp_models::contact::ContactSubmission;
use webrevamp_persistence_contracts::contact::{ContactRepoError, ContactRepository};
use webrevamp_utils::trace_instrument;

use crate::{arg_indices, columns, ColumnCounter, PostgresTransaction};

#[derive(Debug, Clone, Copy, Default, Build)]
pub struct PostgresContactRepository;

columns!(contact_submission as "cs": "id", "name", "email", "company", "current_website", "message", "created_at");

impl ContactRepository<PostgresTransaction> for PostgresContactRepository {
    #[trace_instrument(skip(self, txn))]
    async fn list(&self, txn: &mut PostgresTransaction) -> anyhow::Result<Vec<ContactSubmission>> {
        txn.txn()?
            .query(
                &format!(
                    "select {CONTACT_SUBMISSION_COLS} from contact_submissions cs order by cs.seq"
                ),
                &[],
            )
            .await
            .map_err(Into::into)
            .and_then(|rows| {
                rows.iter()
                    .map(|row| decode_contact_submission(row, &mut Default::default()))
                    .collect()
            })
    }

    #[trace_instrument(skip(self, txn))]
    async fn create(
        &self,
        txn: &mut PostgresTransaction,
        submission: &ContactSubmission,
    ) -> Result<(), ContactRepoError> {
        txn.txn()?
            .execute(
                &format!(
                    "insert into contact_submissions ({CONTACT_SUBMISSION_COL_NAMES}) values ({})",
                    arg_indices(1..=CONTACT_SUBMISSION_CNT)
                ),
                &[
                    &*submission.id,
                    &submission.name.as_str(),
                    &submission.email.as_str(),
                    &submission.company.as_deref().map(String::as_str),
                    &submission.current_website.as_ref().map(|url| url.as_str()),
                    &submission.message.as_str(),
                    &submission.created_at,
                ],
            )
            .await
            .map_err(map_contact_repo_error)?;

        Ok(())
    }
}

fn decode_contact_submission(
    row: &Row,
    cnt: &mut ColumnCounter,
) -> anyhow::Result<ContactSubmission> {
    Ok(ContactSubmission {
        id: row.get::<_, Uuid>(cnt.idx()).into(),
        name: row.get::<_, String>(cnt.idx()).try_into()?,
        email: row.get::<_, String>(cnt.idx()).parse()?,
        company: row.get::<_, Option<String>>(cnt.idx()).map(Into::into),
        current_website: row
            .get::<_, Option<String>>(cnt.idx())
            .map(|url| url.parse())
            .transpose()?,
        message: row.get::<_, String>(cnt.idx()).try_into()?,
        created_at: row.get::<_, DateTime<Utc>>(cnt.idx()),
    })
}

fn map_contact_repo_error(err: tokio_postgres::Error) -> ContactRepoError {
    match err.as_db_error() {
        Some(err) if err.constraint() == Some("contact_submissions_pkey") => {
            ContactRepoError::Conflict
        }
        _ => ContactRepoError::Other(err.into()),
    }
}
