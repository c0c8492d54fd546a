// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The batching coalescer core.

use alloc::vec::Vec;
use core::hash::{BuildHasher, Hash};

use foldhash::fast::FixedState;
use hashbrown::HashMap;

/// Fixed seed so keys are stable across coalescer instances and runs.
const KEY_SEED: u64 = 0x7d1c_3a55_9e24_b601;

/// Handle to one caller's pending request.
///
/// The host pairs each ticket with whatever continuation it uses (a oneshot
/// sender, a callback, a future's waker) and completes it when the ticket
/// comes back from [`Coalescer::resolve`] or [`Coalescer::reject`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Ticket(u64);

/// Identity of one dispatched batch, passed back at settlement.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct BatchId(u64);

/// A batch the host must run the operation over, exactly once.
///
/// `inputs` are in submission order; the operation must produce one output
/// per input, in the same order.
#[derive(Clone, Debug, PartialEq)]
pub struct Batch<I> {
    /// Identity to settle the batch under.
    pub id: BatchId,
    /// Staged inputs, in submission order.
    pub inputs: Vec<I>,
}

/// Outcome of one [`Coalescer::submit`] call.
#[derive(Clone, Debug, PartialEq)]
pub enum Submit<I, O> {
    /// A cached output was available; the request is already settled.
    Cached(O),
    /// The request joined a staged or in-flight key, or started the debounce
    /// window; the ticket settles later.
    Pending(Ticket),
    /// The request filled the batch to its size threshold. The host must
    /// dispatch the batch now; the ticket settles with it.
    Flush(Ticket, Batch<I>),
}

/// Coalescer configuration.
#[derive(Copy, Clone, Debug, Default)]
pub struct CoalesceOptions {
    /// Keep settled outputs and serve repeat keys from them forever.
    pub cache: bool,
    /// Dispatch as soon as this many distinct keys are staged.
    pub size: Option<usize>,
    /// Debounce window: a batch dispatches this long after the most recently
    /// staged *new* key, unless the size threshold fires first.
    pub timeout_ms: u64,
}

/// Content-addressed request coalescer with batching.
///
/// Per key — a fixed-seed structural hash of the input — at most one
/// operation is in flight at any time. See the crate docs for the host
/// protocol.
#[derive(Debug)]
pub struct Coalescer<I, O> {
    options: CoalesceOptions,
    /// Staged (key, input) pairs for the next batch, in submission order.
    staged: Vec<(u64, I)>,
    /// Tickets awaiting settlement, per key. An entry exists while its key
    /// is staged or in flight and is drained atomically at settlement, so
    /// late joiners attach to the flight that will settle them and a key
    /// re-requested after settlement starts a fresh entry.
    waiters: HashMap<u64, Vec<Ticket>>,
    /// Keys of each dispatched, unsettled batch.
    in_flight: HashMap<u64, Vec<u64>>,
    cached: HashMap<u64, O>,
    deadline: Option<u64>,
    next_ticket: u64,
    next_batch: u64,
}

impl<I: Hash, O: Clone> Coalescer<I, O> {
    /// Create a coalescer with the given options.
    pub fn new(options: CoalesceOptions) -> Self {
        Self {
            options,
            staged: Vec::new(),
            waiters: HashMap::new(),
            in_flight: HashMap::new(),
            cached: HashMap::new(),
            deadline: None,
            next_ticket: 0,
            next_batch: 0,
        }
    }

    /// Submit one request at host time `now_ms`.
    pub fn submit(&mut self, input: I, now_ms: u64) -> Submit<I, O> {
        let key = self.key_of(&input);
        if let Some(output) = self.cached.get(&key) {
            return Submit::Cached(output.clone());
        }

        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;

        let waiters = self.waiters.entry(key).or_default();
        waiters.push(ticket);
        if waiters.len() > 1 {
            // The key is already staged or in flight; ride along.
            return Submit::Pending(ticket);
        }

        self.staged.push((key, input));
        if self
            .options
            .size
            .is_some_and(|size| self.staged.len() >= size)
        {
            Submit::Flush(ticket, self.take_batch())
        } else {
            self.deadline = Some(now_ms + self.options.timeout_ms);
            Submit::Pending(ticket)
        }
    }

    /// When the staged batch is due, if one is staged.
    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Release the staged batch once its deadline has passed.
    pub fn take_due(&mut self, now_ms: u64) -> Option<Batch<I>> {
        if self.deadline.is_some_and(|deadline| now_ms >= deadline) {
            Some(self.take_batch())
        } else {
            None
        }
    }

    /// Settle a dispatched batch with its outputs, one per input in order.
    ///
    /// Returns every (ticket, output) pair to complete, covering all callers
    /// that attached to the batch's keys up to this point. Panics if the
    /// batch is unknown, already settled, or the output count differs from
    /// the input count.
    pub fn resolve(&mut self, id: BatchId, outputs: Vec<O>) -> Vec<(Ticket, O)> {
        let keys = self.take_in_flight(id);
        assert_eq!(
            keys.len(),
            outputs.len(),
            "batch must settle with exactly one output per input"
        );

        let mut settled = Vec::new();
        for (key, output) in keys.into_iter().zip(outputs) {
            if self.options.cache {
                self.cached.insert(key, output.clone());
            }
            for ticket in self.waiters.remove(&key).unwrap_or_default() {
                settled.push((ticket, output.clone()));
            }
        }
        settled
    }

    /// Fail a dispatched batch.
    ///
    /// Returns every ticket to fail with the host's error. Nothing is
    /// cached; the keys become free for fresh attempts. Panics if the batch
    /// is unknown or already settled.
    pub fn reject(&mut self, id: BatchId) -> Vec<Ticket> {
        let keys = self.take_in_flight(id);
        let mut failed = Vec::new();
        for key in keys {
            failed.extend(self.waiters.remove(&key).unwrap_or_default());
        }
        failed
    }

    /// Number of distinct keys staged for the next batch.
    pub fn staged_len(&self) -> usize {
        self.staged.len()
    }

    fn key_of(&self, input: &I) -> u64 {
        FixedState::with_seed(KEY_SEED).hash_one(input)
    }

    fn take_batch(&mut self) -> Batch<I> {
        let id = BatchId(self.next_batch);
        self.next_batch += 1;
        self.deadline = None;

        let mut keys = Vec::with_capacity(self.staged.len());
        let mut inputs = Vec::with_capacity(self.staged.len());
        for (key, input) in self.staged.drain(..) {
            keys.push(key);
            inputs.push(input);
        }
        self.in_flight.insert(id.0, keys);
        Batch { id, inputs }
    }

    fn take_in_flight(&mut self, id: BatchId) -> Vec<u64> {
        self.in_flight
            .remove(&id.0)
            .expect("batch must be dispatched and not yet settled")
    }
}
