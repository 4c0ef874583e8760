use std::time::{Duration, Instant};

use anyhow::Context;
use serde::Deserialize;
use url::Url;
use uuid::Uuid;
use webrevamp_email_contracts::{ContentType, Email, EmailService};
use webrevamp_email_impl::EmailServiceImpl;
use webrevamp_models::email_address::EmailAddressWithName;

#[tokio::test]
async fn send_email() {
    let client = setup().await;

    let result = client
        .email
        .send(Email {
            recipient: "hello@webrevampstudio.com".parse().unwrap(),
            subject: "New Website Audit Request from Asha Rao".into(),
            body: "<p>Asha Rao wants an audit</p>".into(),
            content_type: ContentType::Html,
            reply_to: Some("asha@biz.com".parse().unwrap()),
        })
        .await
        .unwrap();

    assert!(result);

    let mail = client.wait_for_mail().await;
    assert_eq!(mail.from, client.from.0.email.as_ref());
    assert_eq!(mail.to, "hello@webrevampstudio.com");
    assert_eq!(mail.subject, "New Website Audit Request from Asha Rao");

    let details = client.fetch_email_details(mail.id).await;
    assert!(!details.plain_text);
    let reply_to = details
        .headers
        .into_iter()
        .find(|h| h.name == "Reply-To")
        .unwrap();
    assert_eq!(reply_to.value, "asha@biz.com");

    let source = client.fetch_email_source(mail.id).await;
    assert_eq!(source, "<p>Asha Rao wants an audit</p>");
}

#[tokio::test]
async fn ping() {
    let client = setup().await;
    client.email.ping().await.unwrap();
}

#[tokio::test]
async fn ping_unreachable() {
    let email = EmailServiceImpl::new(
        "smtp://127.0.0.1:1",
        "noreply@webrevampstudio.com".parse().unwrap(),
    )
    .await
    .unwrap();

    assert!(email.ping().await.is_err());
}

struct TestClient {
    email: EmailServiceImpl,
    from: EmailAddressWithName,
    smtp4dev_url: Url,
}

impl TestClient {
    async fn reset(&self) {
        reqwest::Client::new()
            .delete(self.smtp4dev_url.join("api/Messages/*").unwrap())
            .send()
            .await
            .unwrap()
            .error_for_status()
            .unwrap();
    }

    async fn wait_for_mail(&self) -> EmailSummary {
        let now = Instant::now();
        while now.elapsed() < Duration::from_secs(2) {
            if let Some(mail) = self.fetch_mailbox().await.pop() {
                return mail;
            }
        }
        panic!("No email received");
    }

    async fn fetch_mailbox(&self) -> Vec<EmailSummary> {
        self.get(self.smtp4dev_url.join("api/Messages").unwrap())
            .await
            .json::<PaginationResponse<_>>()
            .await
            .unwrap()
            .results
    }

    async fn fetch_email_details(&self, id: Uuid) -> EmailDetails {
        self.get(self.smtp4dev_url.join(&format!("api/Messages/{id}")).unwrap())
            .await
            .json()
            .await
            .unwrap()
    }

    async fn fetch_email_source(&self, id: Uuid) -> String {
        self.get(
            self.smtp4dev_url
                .join(&format!("api/Messages/{id}/source"))
                .unwrap(),
        )
        .await
        .text()
        .await
        .unwrap()
    }

    async fn get(&self, url: Url) -> reqwest::Response {
        reqwest::Client::new()
            .get(url)
            .send()
            .await
            .unwrap()
            .error_for_status()
            .unwrap()
    }
}

async fn setup() -> TestClient {
    let config = webrevamp_config::load().unwrap();

    let email = EmailServiceImpl::new(&config.email.smtp_url, config.email.from.clone())
        .await
        .unwrap();

    let smtp4dev_url = std::env::var("SMTP4DEV_URL")
        .context("Failed to read SMTP4DEV_URL environment variable")
        .unwrap()
        .parse()
        .context("Failed to parse SMTP4DEV_URL environment variable")
        .unwrap();

    let client = TestClient {
        email,
        from: config.email.from,
        smtp4dev_url,
    };

    client.reset().await;

    client
}

#[derive(Debug, Deserialize)]
struct PaginationResponse<T> {
    results: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct EmailSummary {
    id: Uuid,
    from: String,
    to: String,
    subject: String,
}

#[derive(Debug, Deserialize)]
struct EmailDetails {
    headers: Vec<EmailHeader>,
    #[serde(rename = "hasPlainTextBody")]
    plain_text: bool,
}

#[derive(Debug, Deserialize)]
struct EmailHeader {
    name: String,
    value: String,
}
