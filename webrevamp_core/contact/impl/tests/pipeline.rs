use std::{
    collections::HashSet,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use webrevamp_core_contact_contracts::{
    notification::{ContactNotificationService, ContactNotifyError},
    ContactFeatureService, ContactField, ContactSubmitError, ContactSubmitRequest,
};
use webrevamp_core_contact_impl::{
    spam::ContactSpamServiceImpl, validation::ContactValidationServiceImpl,
    ContactFeatureServiceImpl,
};
use webrevamp_di::{provider, Provide};
use webrevamp_models::contact::ContactSubmission;
use webrevamp_persistence_memory::{contact::MemoryContactRepository, MemoryDatabase};
use webrevamp_shared_impl::{id::IdServiceImpl, time::TimeServiceImpl};
use webrevamp_utils::assert_matches;

type Sut = ContactFeatureServiceImpl<
    MemoryDatabase,
    IdServiceImpl,
    TimeServiceImpl,
    ContactSpamServiceImpl,
    ContactValidationServiceImpl,
    CountingNotification,
    MemoryContactRepository,
>;

provider! {
    TestProvider {
        db: MemoryDatabase,
        notification: CountingNotification,
    }
}

#[derive(Debug, Clone, Default)]
struct CountingNotification(Arc<AtomicUsize>);

impl ContactNotificationService for CountingNotification {
    async fn notify(&self, _submission: &ContactSubmission) -> Result<(), ContactNotifyError> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn setup() -> (Sut, MemoryDatabase, CountingNotification) {
    let db = MemoryDatabase::new();
    let notification = CountingNotification::default();
    let mut provider = TestProvider {
        _cache: Default::default(),
        db: db.clone(),
        notification: notification.clone(),
    };
    (provider.provide(), db, notification)
}

fn request(i: usize) -> ContactSubmitRequest {
    ContactSubmitRequest {
        name: Some(format!("Client {i}")),
        email: Some(format!("client{i}@example.com")),
        company: None,
        current_website: None,
        message: Some(format!("Request number {i} for a website audit")),
        website: None,
        malformed: Vec::new(),
    }
}

#[tokio::test]
async fn accepted_submission_is_listed() {
    // Arrange
    let (sut, _, notification) = setup();
    let request = ContactSubmitRequest {
        name: Some("Asha Rao".into()),
        email: Some("asha@biz.com".into()),
        company: Some("".into()),
        current_website: Some("https://raoclinic.example.com".into()),
        message: Some("I need a full site redesign for my clinic, please advise".into()),
        website: Some("".into()),
        malformed: Vec::new(),
    };

    // Act
    let id = sut.submit(request).await.unwrap();
    let submissions = sut.list_submissions().await.unwrap();

    // Assert
    assert_eq!(submissions.len(), 1);
    let submission = &submissions[0];
    assert_eq!(submission.id, id);
    assert_eq!(*submission.name, "Asha Rao");
    assert_eq!(submission.email.as_str(), "asha@biz.com");
    assert_eq!(submission.company, None);
    assert_eq!(
        submission.current_website.as_ref().unwrap().as_str(),
        "https://raoclinic.example.com/"
    );
    assert_eq!(notification.0.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn rejected_submissions_are_not_stored() {
    // Arrange
    let (sut, _, notification) = setup();
    let spam = ContactSubmitRequest {
        website: Some("x".into()),
        ..request(0)
    };
    let invalid = ContactSubmitRequest {
        message: Some("short".into()),
        ..request(1)
    };

    // Act
    let spam = sut.submit(spam).await;
    let invalid = sut.submit(invalid).await;

    // Assert
    assert_matches!(spam, Err(ContactSubmitError::Spam));
    assert_matches!(invalid, Err(ContactSubmitError::Validation(_)));
    assert!(sut.list_submissions().await.unwrap().is_empty());
    assert_eq!(notification.0.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn honeypot_wins_over_malformed_fields() {
    // Arrange
    let (sut, _, notification) = setup();
    let request = ContactSubmitRequest {
        name: None,
        email: None,
        message: Some("short".into()),
        website: Some("bot-filled".into()),
        malformed: vec![ContactField::Name, ContactField::Email],
        ..request(0)
    };

    // Act
    let result = sut.submit(request).await;

    // Assert
    assert_matches!(result, Err(ContactSubmitError::Spam));
    assert!(sut.list_submissions().await.unwrap().is_empty());
    assert_eq!(notification.0.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn storage_unavailable() {
    // Arrange
    let (sut, db, notification) = setup();
    db.set_available(false);

    // Act
    let result = sut.submit(request(0)).await;

    // Assert
    assert_matches!(result, Err(ContactSubmitError::Storage(_)));
    assert_eq!(notification.0.load(Ordering::SeqCst), 0);

    db.set_available(true);
    assert!(sut.list_submissions().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_submissions() {
    // Arrange
    const N: usize = 64;
    let (sut, _, notification) = setup();

    // Act
    let ids = futures::future::join_all((0..N).map(|i| {
        let sut = sut.clone();
        tokio::spawn(async move { sut.submit(request(i)).await.unwrap() })
    }))
    .await
    .into_iter()
    .map(Result::unwrap)
    .collect::<Vec<_>>();

    // Assert
    let submissions = sut.list_submissions().await.unwrap();
    assert_eq!(submissions.len(), N);
    assert_eq!(ids.iter().collect::<HashSet<_>>().len(), N);

    let listed = submissions.iter().map(|s| s.id).collect::<HashSet<_>>();
    assert_eq!(listed, ids.into_iter().collect::<HashSet<_>>());

    // every submission is complete, no interleaving of fields
    for submission in &submissions {
        let i = submission.name.strip_prefix("Client ").unwrap();
        assert_eq!(submission.email.as_str(), format!("client{i}@example.com"));
        assert_eq!(
            *submission.message,
            format!("Request number {i} for a website audit")
        );
    }
    assert_eq!(notification.0.load(Ordering::SeqCst), N);
}
