use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use uuid::uuid;
use webrevamp_demo::contact::{ALL_SUBMISSIONS, ASHA, JO};
use webrevamp_models::contact::ContactSubmission;
use webrevamp_persistence_contracts::{
    contact::{ContactRepoError, ContactRepository},
    Database, Transaction,
};
use webrevamp_persistence_postgres::contact::PostgresContactRepository;

use crate::common::{setup, setup_clean};

const REPO: PostgresContactRepository = PostgresContactRepository;

fn new_submission() -> ContactSubmission {
    ContactSubmission {
        id: uuid!("5e2b7d41-6c3a-4f90-8d12-7a4b9c0e3f58").into(),
        name: "Priya Nair".try_into().unwrap(),
        email: "priya@nairdesigns.example".parse().unwrap(),
        company: None,
        current_website: Some("http://nairdesigns.example/portfolio".parse().unwrap()),
        message: "Could you audit our portfolio site before the relaunch?"
            .try_into()
            .unwrap(),
        created_at: Utc.with_ymd_and_hms(2024, 5, 4, 8, 30, 0).unwrap(),
    }
}

#[tokio::test]
async fn list() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let result = REPO.list(&mut txn).await.unwrap();
    let expected = ALL_SUBMISSIONS.iter().copied().cloned().collect::<Vec<_>>();
    assert_eq!(result, expected);
}

#[tokio::test]
async fn list_empty() {
    let db = setup_clean().await;
    db.run_migrations(None).await.unwrap();
    let mut txn = db.begin_transaction().await.unwrap();

    let result = REPO.list(&mut txn).await.unwrap();
    assert!(result.is_empty());
}

#[tokio::test]
async fn create() {
    let db = setup().await;
    let submission = new_submission();

    let mut txn = db.begin_transaction().await.unwrap();
    REPO.create(&mut txn, &submission).await.unwrap();
    txn.commit().await.unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO.list(&mut txn).await.unwrap();
    assert_eq!(result.len(), ALL_SUBMISSIONS.len() + 1);
    assert_eq!(result.last().unwrap(), &submission);
}

#[tokio::test]
async fn create_keeps_insertion_order() {
    let db = setup_clean().await;
    db.run_migrations(None).await.unwrap();

    // insert newest first to make sure ordering does not follow created_at
    let mut txn = db.begin_transaction().await.unwrap();
    REPO.create(&mut txn, &JO).await.unwrap();
    REPO.create(&mut txn, &ASHA).await.unwrap();
    txn.commit().await.unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO.list(&mut txn).await.unwrap();
    assert_eq!(result, [JO.clone(), ASHA.clone()]);
}

#[tokio::test]
async fn create_conflict() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let result = REPO.create(&mut txn, &ASHA).await;
    assert!(matches!(result, Err(ContactRepoError::Conflict)));
}

#[tokio::test]
async fn rollback() {
    let db = setup().await;

    let mut txn = db.begin_transaction().await.unwrap();
    REPO.create(&mut txn, &new_submission()).await.unwrap();
    txn.rollback().await.unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO.list(&mut txn).await.unwrap();
    assert_eq!(result.len(), ALL_SUBMISSIONS.len());
}
