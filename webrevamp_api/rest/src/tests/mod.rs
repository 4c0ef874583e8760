use std::{net::SocketAddr, sync::Arc};

use tokio::net::TcpListener;
use webrevamp_core_contact_contracts::MockContactFeatureService;
use webrevamp_core_health_contracts::MockHealthFeatureService;

use crate::{RestServer, RestServerConfig};

mod health;

type Sut = RestServer<MockHealthFeatureService, MockContactFeatureService>;

/// Serve the api on a random local port and return its base url.
async fn serve(health: MockHealthFeatureService, contact: MockContactFeatureService) -> String {
    serve_with_origins(health, contact, Vec::new()).await
}

async fn serve_with_origins(
    health: MockHealthFeatureService,
    contact: MockContactFeatureService,
    allowed_origins: Vec<String>,
) -> String {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let address = listener.local_addr().unwrap();

    let sut: Sut = RestServer {
        health,
        contact,
        config: RestServerConfig {
            address,
            allowed_origins: Arc::new(allowed_origins),
        },
    };
    tokio::spawn(sut.serve_with(listener));

    format!("http://{address}")
}

#[test]
fn cors_layer_origins() {
    assert!(crate::cors_layer(&["https://webrevampstudio.com".into()])
        .unwrap()
        .is_some());
    assert!(crate::cors_layer(&[]).unwrap().is_none());
    assert!(crate::cors_layer(&["bad\norigin".into()]).is_err());
}
