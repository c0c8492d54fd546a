// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-input deduplication over the batching core.

use alloc::vec;
use alloc::vec::Vec;
use core::hash::Hash;

use crate::coalescer::{Batch, BatchId, CoalesceOptions, Coalescer, Submit, Ticket};

/// In-flight deduplication with a permanent result cache.
///
/// The single-input specialization of [`Coalescer`]: batch size one, caching
/// on, no debounce. The first submission of a key hands back a one-input
/// [`Batch`] to dispatch immediately; submissions of the same key while it is
/// in flight ride along; once settled, the key answers from cache forever.
///
/// ```rust
/// use thicket_coalesce::{Deduped, Submit};
///
/// let mut fetch: Deduped<&'static str, u32> = Deduped::new();
///
/// let (first, batch) = match fetch.submit("user/7") {
///     Submit::Flush(ticket, batch) => (ticket, batch),
///     _ => unreachable!(),
/// };
/// // A concurrent identical request joins the same flight.
/// let second = match fetch.submit("user/7") {
///     Submit::Pending(ticket) => ticket,
///     _ => unreachable!(),
/// };
///
/// let settled = fetch.resolve(batch.id, 7);
/// assert_eq!(settled, vec![(first, 7), (second, 7)]);
///
/// // Later requests never leave the cache.
/// assert_eq!(fetch.submit("user/7"), Submit::Cached(7));
/// ```
#[derive(Debug)]
pub struct Deduped<I, O> {
    inner: Coalescer<I, O>,
}

impl<I: Hash, O: Clone> Deduped<I, O> {
    /// Create a deduplicator.
    pub fn new() -> Self {
        Self {
            inner: Coalescer::new(CoalesceOptions {
                cache: true,
                size: Some(1),
                timeout_ms: 0,
            }),
        }
    }

    /// Submit one request.
    ///
    /// No clock is needed: with batch size one there is no debounce window,
    /// so every first submission flushes on the spot.
    pub fn submit(&mut self, input: I) -> Submit<I, O> {
        self.inner.submit(input, 0)
    }

    /// Settle a dispatched flight with its output.
    pub fn resolve(&mut self, id: BatchId, output: O) -> Vec<(Ticket, O)> {
        self.inner.resolve(id, vec![output])
    }

    /// Fail a dispatched flight; returns the tickets to fail.
    ///
    /// The failure is not cached: the next submission of the key starts a
    /// fresh flight.
    pub fn reject(&mut self, id: BatchId) -> Vec<Ticket> {
        self.inner.reject(id)
    }
}

impl<I: Hash, O: Clone> Default for Deduped<I, O> {
    fn default() -> Self {
        Self::new()
    }
}
