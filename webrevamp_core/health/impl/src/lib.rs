use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::error;
use webrevamp_core_health_contracts::{HealthFeatureService, HealthStatus};
use webrevamp_di::Build;
use webrevamp_email_contracts::EmailService;
use webrevamp_persistence_contracts::Database;
use webrevamp_shared_contracts::time::TimeService;
use webrevamp_utils::trace_instrument;

#[derive(Debug, Clone, Build)]
pub struct HealthFeatureServiceImpl<Time, Db, Email> {
    time: Time,
    db: Db,
    email: Email,
    config: HealthFeatureConfig,
    #[state]
    state: Arc<State>,
}

#[derive(Debug, Clone)]
pub struct HealthFeatureConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Default)]
struct State {
    cache: RwLock<Option<CachedProbes>>,
}

#[derive(Debug, Clone, Copy)]
struct CachedProbes {
    database: bool,
    email: bool,
    probed_at: DateTime<Utc>,
}

impl<Time, Db, Email> HealthFeatureService for HealthFeatureServiceImpl<Time, Db, Email>
where
    Time: TimeService,
    Db: Database,
    Email: EmailService,
{
    #[trace_instrument(skip(self))]
    async fn get_status(&self) -> HealthStatus {
        let now = self.time.now();
        let probes = self.probes(now).await;

        HealthStatus {
            database: probes.database,
            email: probes.email,
            timestamp: now,
        }
    }
}

impl<Time, Db, Email> HealthFeatureServiceImpl<Time, Db, Email>
where
    Db: Database,
    Email: EmailService,
{
    async fn probes(&self, now: DateTime<Utc>) -> CachedProbes {
        let is_fresh = |c: &&CachedProbes| now < c.probed_at + self.config.cache_ttl;

        if let Some(&cached) = self.state.cache.read().await.as_ref().filter(is_fresh) {
            return cached;
        }

        let mut cache_guard = self.state.cache.write().await;
        if let Some(&cached) = cache_guard.as_ref().filter(is_fresh) {
            return cached;
        }

        let (database, email) = tokio::join!(self.db.ping(), self.email.ping());
        let probes = CachedProbes {
            database: database
                .inspect_err(|err| error!("Failed to ping database: {err:#}"))
                .is_ok(),
            email: email
                .inspect_err(|err| error!("Failed to ping smtp server: {err:#}"))
                .is_ok(),
            probed_at: now,
        };

        *cache_guard.insert(probes)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use webrevamp_email_contracts::MockEmailService;
    use webrevamp_persistence_contracts::MockDatabase;
    use webrevamp_shared_contracts::time::MockTimeService;

    use super::*;

    type Sut = HealthFeatureServiceImpl<MockTimeService, MockDatabase, MockEmailService>;

    fn config() -> HealthFeatureConfig {
        HealthFeatureConfig {
            cache_ttl: Duration::from_secs(10),
        }
    }

    fn at(secs: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 2, 9, 15, secs).unwrap()
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let sut = Sut {
            time: MockTimeService::new().with_now(at(0)),
            db: MockDatabase::new().with_ping(true),
            email: MockEmailService::new().with_ping(true),
            config: config(),
            state: Default::default(),
        };

        // Act
        let result = sut.get_status().await;

        // Assert
        assert_eq!(
            result,
            HealthStatus {
                database: true,
                email: true,
                timestamp: at(0),
            }
        );
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn email_down_is_still_ok() {
        // Arrange
        let sut = Sut {
            time: MockTimeService::new().with_now(at(0)),
            db: MockDatabase::new().with_ping(true),
            email: MockEmailService::new().with_ping(false),
            config: config(),
            state: Default::default(),
        };

        // Act
        let result = sut.get_status().await;

        // Assert
        assert!(!result.email);
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn database_down() {
        // Arrange
        let sut = Sut {
            time: MockTimeService::new().with_now(at(0)),
            db: MockDatabase::new().with_ping(false),
            email: MockEmailService::new().with_ping(true),
            config: config(),
            state: Default::default(),
        };

        // Act
        let result = sut.get_status().await;

        // Assert
        assert!(!result.database);
        assert!(!result.is_ok());
    }

    #[tokio::test]
    async fn cached() {
        // Arrange
        let mut times = [at(0), at(5), at(10)].into_iter();
        let mut time = MockTimeService::new();
        time.expect_now()
            .times(3)
            .returning(move || times.next().unwrap());

        let mut pings = [Ok(()), Err(anyhow::anyhow!("connection refused"))].into_iter();
        let mut db = MockDatabase::new();
        db.expect_ping()
            .times(2)
            .returning(move || Box::pin(std::future::ready(pings.next().unwrap())));

        let mut email = MockEmailService::new();
        email
            .expect_ping()
            .times(2)
            .returning(|| Box::pin(std::future::ready(Ok(()))));

        let sut = Sut {
            time,
            db,
            email,
            config: config(),
            state: Default::default(),
        };

        // Act
        let first = sut.get_status().await;
        let second = sut.get_status().await;
        let third = sut.get_status().await;

        // Assert
        assert!(first.database);
        assert!(second.database);
        assert_eq!(second.timestamp, at(5));
        assert!(!third.database);
        assert_eq!(third.timestamp, at(10));
    }
}
