// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Claim: first-wins ownership claims on dispatched events.
//!
//! ## Overview
//!
//! When one physical input event is offered to many listeners in the same
//! dispatch pass, some of those listeners need to know what the event already
//! did. The motivating case: a mousedown toggles a popover open, and in the
//! same pass every open popover runs its outside-click check. Without a
//! record that the event was spent opening *that* popover, the popover would
//! close itself on the click that opened it — while unrelated popovers should
//! still treat the same event as an outside click and close.
//!
//! [`ClaimTable`] is that record: a map from event identity to an opaque
//! owner identity. Claims are first-wins — once an event is claimed, later
//! claims are ignored, never overwritten — and at most one claim exists per
//! event.
//!
//! A claim is only meaningful while its event is being dispatched. The host
//! retires claims with [`ClaimTable::expire`] once the pass is over, which
//! bounds the association's lifetime by the event's rather than the
//! claimant's: a disposed popover leaves nothing behind here, and claims
//! never accumulate across passes.
//!
//! ## Minimal example
//!
//! ```rust
//! use thicket_claim::ClaimTable;
//!
//! let mut claims: ClaimTable<u64, &'static str> = ClaimTable::new();
//!
//! claims.claim(1, "inner");
//! claims.claim(1, "outer"); // too late; first claim wins
//!
//! assert!(claims.is_claimed(1));
//! assert!(claims.is_claimed_by(1, &"inner"));
//! assert!(!claims.is_claimed_by(1, &"outer"));
//!
//! claims.expire(1); // end of dispatch pass
//! assert!(!claims.is_claimed(1));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

use core::hash::Hash;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

/// First-wins map from event identity to owner identity.
///
/// `E` names a dispatched event (any copyable id the host allocates per
/// event); `T` is the claimant's identity token. Neither is interpreted
/// beyond equality.
#[derive(Debug)]
pub struct ClaimTable<E, T> {
    claims: HashMap<E, T>,
}

impl<E, T> ClaimTable<E, T>
where
    E: Copy + Eq + Hash,
    T: PartialEq,
{
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            claims: HashMap::new(),
        }
    }

    /// Claim `event` for `identity` if it is not claimed yet.
    ///
    /// Returns `true` if this call established the claim. A claim, once set,
    /// is never overwritten; claiming an already-claimed event is a no-op
    /// even for the existing owner.
    pub fn claim(&mut self, event: E, identity: T) -> bool {
        match self.claims.entry(event) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(identity);
                true
            }
        }
    }

    /// `true` iff `event` is claimed by exactly `identity`.
    pub fn is_claimed_by(&self, event: E, identity: &T) -> bool {
        self.claims.get(&event) == Some(identity)
    }

    /// `true` iff any identity claimed `event`.
    pub fn is_claimed(&self, event: E) -> bool {
        self.claims.contains_key(&event)
    }

    /// Retire the claim for `event`, if any. Called by the host once the
    /// event's dispatch pass is over.
    pub fn expire(&mut self, event: E) {
        self.claims.remove(&event);
    }

    /// Drop every claim.
    pub fn clear(&mut self) {
        self.claims.clear();
    }

    /// Number of live claims.
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// `true` if no claims are live.
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}

impl<E, T> Default for ClaimTable<E, T>
where
    E: Copy + Eq + Hash,
    T: PartialEq,
{
    fn default() -> Self {
        Self::new()
    }
}
