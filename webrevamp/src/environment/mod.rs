use std::sync::Arc;

use webrevamp_api_rest::RestServerConfig;
use webrevamp_config::Config;
use webrevamp_core_contact_impl::notification::ContactNotificationServiceConfig;
use webrevamp_core_health_impl::HealthFeatureConfig;
use webrevamp_di::provider;
use types::{Database, Email};

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        database: Database,
        email: Email,
        ..config: ConfigProvider {
            RestServerConfig,
            ContactNotificationServiceConfig,
            HealthFeatureConfig,
        }
    }
}

impl Provider {
    pub fn new(config: ConfigProvider, database: Database, email: Email) -> Self {
        Self {
            _cache: Default::default(),
            database,
            email,
            config,
        }
    }
}

provider! {
    /// Reduced provider, capable of providing services that only depend on the configuration
    pub ConfigProvider {
        rest_server_config: RestServerConfig,
        contact_notification_service_config: ContactNotificationServiceConfig,
        health_feature_config: HealthFeatureConfig,
    }
}

impl ConfigProvider {
    pub fn new(config: &Config) -> Self {
        let rest_server_config = RestServerConfig {
            address: config.http.address,
            allowed_origins: config.http.allowed_origins.clone().into(),
        };

        let contact_notification_service_config = ContactNotificationServiceConfig {
            admin_email: Arc::new(config.contact.admin_email.clone()),
            send_timeout: config.contact.send_timeout.into(),
        };

        let health_feature_config = HealthFeatureConfig {
            cache_ttl: config.health.cache_ttl.into(),
        };

        Self {
            _cache: Default::default(),
            rest_server_config,
            contact_notification_service_config,
            health_feature_config,
        }
    }
}
