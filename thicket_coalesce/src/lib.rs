// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Coalesce: content-addressed request coalescing.
//!
//! ## Overview
//!
//! When many callers ask for the same expensive thing at nearly the same
//! time, the underlying operation should run once and everyone should get
//! its result. [`Coalescer`] keys each request by a deterministic structural
//! hash of its input and guarantees that, per key, at most one operation is
//! ever in flight; callers that arrive while a key is staged or in flight
//! attach to it and observe the same settlement. On top of that it batches:
//! distinct keys staged within a debounce window (or up to a size threshold)
//! submit as one multi-input operation call.
//!
//! The crate is sans-IO. It never calls the operation, owns no timer, and
//! returns [`Ticket`]s instead of futures. The host:
//!
//! 1. calls [`Coalescer::submit`] per request, remembering the ticket;
//! 2. dispatches a [`Batch`] whenever `submit` hands one back or
//!    [`Coalescer::take_due`] releases one at the deadline from
//!    [`Coalescer::deadline`];
//! 3. runs the operation over `batch.inputs` (one call, submission order);
//! 4. feeds the outcome to [`Coalescer::resolve`] or [`Coalescer::reject`]
//!    and settles the returned tickets with its own promise/future machinery.
//!
//! Operation failure settles every waiting ticket for the batch's keys with
//! the host's error, is never cached, and is never retried from in here.
//!
//! [`Deduped`] is the single-input specialization — batch size one, caching
//! on, zero debounce — i.e. pure in-flight deduplication plus a permanent
//! result cache.
//!
//! ## Minimal example
//!
//! ```rust
//! use thicket_coalesce::{Coalescer, CoalesceOptions, Submit};
//!
//! let mut lookup: Coalescer<u32, &'static str> = Coalescer::new(CoalesceOptions {
//!     size: Some(2),
//!     timeout_ms: 1_000,
//!     ..CoalesceOptions::default()
//! });
//!
//! let first = match lookup.submit(7, 0) {
//!     Submit::Pending(ticket) => ticket,
//!     _ => unreachable!(),
//! };
//! // Hitting the size threshold releases the batch immediately.
//! let (second, batch) = match lookup.submit(8, 0) {
//!     Submit::Flush(ticket, batch) => (ticket, batch),
//!     _ => unreachable!(),
//! };
//! assert_eq!(batch.inputs, vec![7, 8]);
//!
//! let settled = lookup.resolve(batch.id, vec!["seven", "eight"]);
//! assert_eq!(settled, vec![(first, "seven"), (second, "eight")]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod coalescer;
mod deduped;

pub use coalescer::{Batch, BatchId, CoalesceOptions, Coalescer, Submit, Ticket};
pub use deduped::Deduped;
