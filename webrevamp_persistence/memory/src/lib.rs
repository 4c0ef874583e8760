//! In-process storage backend.
//!
//! Committed rows live behind a single lock. A transaction buffers its writes
//! and appends them atomically on commit, so concurrent transactions never
//! interleave partially and insertion order is the order of commits.

use std::{
    collections::HashSet,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use anyhow::{anyhow, ensure};
use tokio::sync::RwLock;
use tracing::trace;
use webrevamp_models::contact::{ContactSubmission, ContactSubmissionId};
use webrevamp_persistence_contracts::{Database, Transaction};

pub mod contact;

#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    state: Arc<State>,
}

#[derive(Debug, Default)]
struct State {
    tables: RwLock<Tables>,
    unavailable: AtomicBool,
}

#[derive(Debug, Default)]
struct Tables {
    contact_submissions: Vec<ContactSubmission>,
    contact_submission_ids: HashSet<ContactSubmissionId>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate an outage: while unavailable, starting or committing a
    /// transaction and pinging the database fail.
    pub fn set_available(&self, available: bool) {
        self.state.unavailable.store(!available, Ordering::SeqCst);
    }
}

impl State {
    fn ensure_available(&self) -> anyhow::Result<()> {
        ensure!(
            !self.unavailable.load(Ordering::SeqCst),
            "Memory database is unavailable"
        );
        Ok(())
    }
}

impl Database for MemoryDatabase {
    type Transaction = MemoryTransaction;

    async fn begin_transaction(&self) -> anyhow::Result<Self::Transaction> {
        trace!("begin transaction");
        self.state.ensure_available()?;

        Ok(MemoryTransaction {
            state: Arc::clone(&self.state),
            contact_submissions: Vec::new(),
        })
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.state.ensure_available()
    }
}

#[derive(Debug)]
pub struct MemoryTransaction {
    state: Arc<State>,
    contact_submissions: Vec<ContactSubmission>,
}

impl Transaction for MemoryTransaction {
    async fn commit(self) -> anyhow::Result<()> {
        trace!("commit transaction");

        let Self {
            state,
            contact_submissions,
        } = self;
        state.ensure_available()?;

        let mut tables = state.tables.write().await;
        if let Some(conflict) = contact_submissions
            .iter()
            .find(|s| tables.contact_submission_ids.contains(&s.id))
        {
            return Err(anyhow!(
                "Contact submission {} has been created concurrently",
                conflict.id
            ));
        }

        for submission in contact_submissions {
            tables.contact_submission_ids.insert(submission.id);
            tables.contact_submissions.push(submission);
        }

        Ok(())
    }

    async fn rollback(self) -> anyhow::Result<()> {
        trace!("rollback transaction");
        Ok(())
    }
}
