//! Request generations for one action.
//!
//! # Design
//! - Each invocation takes a [`Ticket`] stamped with a fresh generation.
//! - When a reply arrives, only the ticket holding the newest generation may
//!   write the output region; older replies are dropped.
//! - Outstanding tickets are counted so a front-end can disable the trigger
//!   while a request is in flight. Dropping a ticket releases it, so a
//!   cancelled future never leaves the trigger disabled.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Generation counter and in-flight count for one action.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    latest: AtomicU64,
    outstanding: AtomicUsize,
}

impl RequestGeneration {
    /// Counter with no requests issued.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latest: AtomicU64::new(0),
            outstanding: AtomicUsize::new(0),
        }
    }

    /// Start a new invocation, superseding every earlier one.
    #[must_use]
    pub fn begin(&self) -> Ticket<'_> {
        self.outstanding.fetch_add(1, Ordering::AcqRel);
        let generation = self.latest.fetch_add(1, Ordering::AcqRel) + 1;
        Ticket {
            owner: self,
            generation,
        }
    }

    /// Generation of the most recent invocation (`0` before the first).
    #[must_use]
    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::Acquire)
    }

    /// Whether any invocation is still waiting for its reply.
    #[must_use]
    pub fn in_flight(&self) -> bool {
        self.outstanding.load(Ordering::Acquire) > 0
    }
}

/// Claim on one invocation; released on drop.
#[derive(Debug)]
pub struct Ticket<'a> {
    owner: &'a RequestGeneration,
    generation: u64,
}

impl Ticket<'_> {
    /// Generation stamped on this ticket.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether no newer invocation has started since this one.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.owner.latest() == self.generation
    }
}

impl Drop for Ticket<'_> {
    fn drop(&mut self) {
        self.owner.outstanding.fetch_sub(1, Ordering::AcqRel);
    }
}
