// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-window shared state controllers coordinate through.

use smallvec::SmallVec;
use thicket_claim::ClaimTable;
use thicket_input::{
    BindingId, CursorStack, EventId, EventIds, KeyBindings, KeyPass, KeyState, PointerState,
};

use crate::mount::MountRegistry;

/// Identity of one popover instance.
///
/// Opaque and copyable; claim tables and mount registries key on it. Stable
/// for the lifetime of the controller, including across close/re-open.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PopoverId(u64);

impl PopoverId {
    pub(crate) const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// Per-window shared state: input singletons, claims, bindings, mounts.
///
/// The host owns exactly one per window, feeds its input state from raw
/// events, and passes it to every controller call. Controllers never talk to
/// each other directly — everything cross-instance goes through here, which
/// is also what makes teardown auditable: every entry a controller adds has
/// a scope cleanup that removes it.
#[derive(Debug)]
pub struct OverlayContext<K> {
    /// First-wins event ownership claims for the current dispatch passes.
    pub claims: ClaimTable<EventId, PopoverId>,
    /// Chord bindings; Escape dismissal registers here.
    pub bindings: KeyBindings,
    /// Held keys, fed by the host's key events.
    pub key_state: KeyState,
    /// The window pointer, fed by the host's pointer events.
    pub pointer: PointerState,
    /// Scoped cursor requests.
    pub cursors: CursorStack,
    /// Mount nodes of currently open popovers.
    pub mounts: MountRegistry<K>,
    /// Event id allocator for dispatch passes.
    pub events: EventIds,
    portal: K,
    next_popover: u64,
}

impl<K: Copy + Eq> OverlayContext<K> {
    /// Create the context for a window whose portal root is `portal`.
    pub fn new(portal: K) -> Self {
        Self {
            claims: ClaimTable::new(),
            bindings: KeyBindings::new(),
            key_state: KeyState::new(),
            pointer: PointerState::new(),
            cursors: CursorStack::new(),
            mounts: MountRegistry::new(),
            events: EventIds::new(),
            portal,
            next_popover: 0,
        }
    }

    /// The window's top-level portal root, where unnested popovers mount.
    pub fn portal(&self) -> K {
        self.portal
    }

    /// Allocate an identity for a new popover instance.
    pub fn next_popover_id(&mut self) -> PopoverId {
        let id = PopoverId::from_raw(self.next_popover);
        self.next_popover += 1;
        id
    }

    /// Offer a key press to the bindings, against the held-key state.
    ///
    /// Returns the bindings that fired, innermost first; feed the result to
    /// each controller's
    /// [`on_key_fired`](crate::PopoverController::on_key_fired).
    pub fn dispatch_key(&mut self, key: &str, pass: KeyPass) -> SmallVec<[BindingId; 1]> {
        self.bindings.dispatch(key, &self.key_state, pass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popover_ids_are_unique() {
        let mut ctx: OverlayContext<u32> = OverlayContext::new(0);
        let a = ctx.next_popover_id();
        let b = ctx.next_popover_id();
        assert_ne!(a, b);
    }

    #[test]
    fn dispatch_key_consults_held_state() {
        let mut ctx: OverlayContext<u32> = OverlayContext::new(0);
        let binding = ctx
            .bindings
            .bind("Control+k", thicket_input::BindOptions::default());

        let pass = KeyPass {
            now_ms: 0,
            editing: false,
        };
        assert!(ctx.dispatch_key("k", pass).is_empty());

        ctx.key_state.on_key_down("Control");
        assert_eq!(ctx.dispatch_key("k", pass).as_slice(), [binding]);
    }
}
