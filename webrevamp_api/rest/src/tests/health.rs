use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::{json, Value};
use webrevamp_core_contact_contracts::MockContactFeatureService;
use webrevamp_core_health_contracts::{HealthStatus, MockHealthFeatureService};

use super::serve;

#[tokio::test]
async fn ok() {
    // Arrange
    let timestamp = Utc.with_ymd_and_hms(2024, 11, 5, 9, 30, 0).unwrap();
    let health = MockHealthFeatureService::new().with_get_status(HealthStatus {
        database: true,
        email: false,
        timestamp,
    });
    let base = serve(health, MockContactFeatureService::new()).await;

    // Act
    let response = reqwest::get(format!("{base}/api/health")).await.unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({
            "status": "ok",
            "timestamp": "2024-11-05T09:30:00Z",
            "database": true,
            "email": false,
        })
    );
}

#[tokio::test]
async fn database_down() {
    // Arrange
    let timestamp = Utc.with_ymd_and_hms(2024, 11, 5, 9, 30, 0).unwrap();
    let health = MockHealthFeatureService::new().with_get_status(HealthStatus {
        database: false,
        email: true,
        timestamp,
    });
    let base = serve(health, MockContactFeatureService::new()).await;

    // Act
    let response = reqwest::get(format!("{base}/api/health")).await.unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = response.json::<Value>().await.unwrap();
    assert_eq!(body["status"], json!("unavailable"));
    assert_eq!(body["database"], json!(false));
    assert_eq!(body["email"], json!(true));
}

#[tokio::test]
async fn unknown_route() {
    // Arrange
    let base = serve(
        MockHealthFeatureService::new(),
        MockContactFeatureService::new(),
    )
    .await;

    // Act
    let response = reqwest::get(format!("{base}/api/nope")).await.unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
