use std::sync::LazyLock;

use chrono::{TimeZone, Utc};
use uuid::uuid;
use webrevamp_models::contact::ContactSubmission;
use webrevamp_persistence_contracts::contact::ContactRepository;

pub static ALL_SUBMISSIONS: LazyLock<Vec<&ContactSubmission>> =
    LazyLock::new(|| vec![&ASHA, &JO, &MARCUS]);

pub static ASHA: LazyLock<ContactSubmission> = LazyLock::new(|| ContactSubmission {
    id: uuid!("3f1d7c62-5a0b-4f7e-9a43-1c2b8d9e0f11").into(),
    name: "Asha Rao".try_into().unwrap(),
    email: "asha@biz.com".parse().unwrap(),
    company: Some("Rao Family Clinic".to_owned().into()),
    current_website: Some("https://raoclinic.example.com/".parse().unwrap()),
    message: "I need a full site redesign for my clinic, please advise"
        .try_into()
        .unwrap(),
    created_at: Utc.with_ymd_and_hms(2024, 5, 2, 9, 15, 0).unwrap(),
});

pub static JO: LazyLock<ContactSubmission> = LazyLock::new(|| ContactSubmission {
    id: uuid!("8b0e4a2d-93c1-4d55-b7f6-2e6a1f3c9d40").into(),
    name: "Jo".try_into().unwrap(),
    email: "jo@x.com".parse().unwrap(),
    company: None,
    current_website: None,
    message: "Looking for a landing page for our bakery launch."
        .try_into()
        .unwrap(),
    created_at: Utc.with_ymd_and_hms(2024, 5, 3, 17, 42, 10).unwrap(),
});

pub static MARCUS: LazyLock<ContactSubmission> = LazyLock::new(|| ContactSubmission {
    id: uuid!("c47a9e15-0d2f-4b8a-8e6c-5f9d3b1a7e22").into(),
    name: "Marcus Lee".try_into().unwrap(),
    email: "marcus@leeandpartners.example".parse().unwrap(),
    company: Some("Lee & Partners".to_owned().into()),
    current_website: None,
    message: "Our law firm site is slow on mobile. Can you take a look?"
        .try_into()
        .unwrap(),
    created_at: Utc.with_ymd_and_hms(2024, 5, 3, 18, 0, 0).unwrap(),
});

pub async fn create<Txn: Send + Sync + 'static>(
    txn: &mut Txn,
    repo: impl ContactRepository<Txn>,
) -> anyhow::Result<()> {
    for &submission in ALL_SUBMISSIONS.iter() {
        repo.create(txn, submission).await?;
    }
    Ok(())
}
