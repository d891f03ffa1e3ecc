//! RecordingHost: a SectionHost that records every registration.

use crate::error::HostError;
use crate::host::SectionHost;
use crate::section::SectionRegistration;
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

/// A host that accepts sections into a list. It can be told to become
/// ready only after a number of polls, and to reject the next N
/// registrations.
pub struct RecordingHost {
    registrations: Mutex<Vec<SectionRegistration>>,
    ready_after: AtomicU32,
    polls: AtomicU32,
    failures_left: AtomicU32,
    attempts: AtomicU32,
}

impl RecordingHost {
    /// A host that is ready immediately and accepts everything.
    pub fn new() -> Self {
        Self {
            registrations: Mutex::new(Vec::new()),
            ready_after: AtomicU32::new(0),
            polls: AtomicU32::new(0),
            failures_left: AtomicU32::new(0),
            attempts: AtomicU32::new(0),
        }
    }

    /// Report ready only from the `polls`-th readiness check on.
    /// `u32::MAX` means never ready.
    pub fn ready_after(self, polls: u32) -> Self {
        self.ready_after.store(polls, Ordering::SeqCst);
        self
    }

    /// Reject the next `n` registrations with [`HostError::Unavailable`].
    pub fn fail_next(&self, n: u32) {
        self.failures_left.store(n, Ordering::SeqCst);
    }

    /// Snapshot of accepted registrations, oldest first.
    pub fn registrations(&self) -> Vec<SectionRegistration> {
        self.registrations.lock().unwrap().clone()
    }

    /// Number of `register_section` calls, including rejected ones.
    pub fn attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }

    /// Number of `is_ready` calls so far.
    pub fn polls(&self) -> u32 {
        self.polls.load(Ordering::SeqCst)
    }

    /// Forget accepted registrations.
    pub fn reset(&self) {
        self.registrations.lock().unwrap().clear();
    }
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SectionHost for RecordingHost {
    async fn is_ready(&self) -> bool {
        let seen = self.polls.fetch_add(1, Ordering::SeqCst) + 1;
        let needed = self.ready_after.load(Ordering::SeqCst);
        needed != u32::MAX && seen >= needed
    }

    async fn register_section(&self, registration: SectionRegistration) -> Result<(), HostError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        let rejected = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if rejected {
            return Err(HostError::Unavailable("recording host rejecting".into()));
        }
        self.registrations.lock().unwrap().push(registration);
        Ok(())
    }
}
