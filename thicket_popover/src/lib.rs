// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Popover: overlay lifecycle controllers.
//!
//! ## Overview
//!
//! A popover is a small state machine — closed or open — surrounded by a lot
//! of coordination: which input events open it, which events near it must
//! *not* close it, where its content mounts so nested overlays stack and tear
//! down correctly, and who answers Escape when several overlays are open at
//! once. This crate owns that coordination. Rendering stays with the host:
//! controllers consume dispatched events and hand back decisions (open,
//! closed, prevent-default, mount under this parent).
//!
//! ## Pieces
//!
//! - [`OverlayContext`]: the per-window shared state — claim table, key
//!   bindings, pointer/key state, mount registry, portal root. The host owns
//!   exactly one and threads it through every call.
//! - [`PopoverController`]: one overlay instance with its triggers
//!   ([`TriggerKind`]), open state, mount node, and Escape binding.
//! - [`SimplePopover`]: single-trigger convenience with a `close()` surface
//!   and a `disabled` gate.
//! - [`ContextMenu`] and [`Dropdown`]: thin policy layers over
//!   [`SimplePopover`].
//!
//! ## Dispatch protocol
//!
//! The host forwards each window event to every live controller, in two
//! phases for pointer-down-like events, mirroring target-then-window listener
//! order:
//!
//! 1. Update [`OverlayContext`] input state ([`OverlayContext::pointer`],
//!    [`OverlayContext::key_state`]) and allocate an
//!    [`EventId`](thicket_input::EventId) for the pass.
//! 2. **Trigger phase**: [`PopoverController::on_trigger_event`] for every
//!    controller. Whoever's trigger the event landed on toggles and claims
//!    the event, first claim wins.
//! 3. **Dismissal phase**: [`PopoverController::on_global_mouse_down`] for
//!    every controller, in creation order (outermost first — matching the
//!    order their global listeners would have been attached). Open
//!    controllers decide whether the event was an outside interaction and
//!    close. The ordering matters: an outer popover must run its check
//!    while its nested popover is still registered, so it can defer to it.
//! 4. The host retires the event's claim
//!    ([`ClaimTable::expire`](thicket_claim::ClaimTable::expire)) and, for
//!    controllers that opened, creates a mount node and calls
//!    [`PopoverController::attach_mount`].
//!
//! Key presses go through [`OverlayContext::dispatch_key`] and then
//! [`PopoverController::on_key_fired`]; pointer movement through
//! [`PopoverController::on_pointer_move`].
//!
//! The phase split is what makes the ownership rules work: a mousedown that
//! opens a popover is already claimed by the time any dismissal check sees
//! it, so the new popover survives its own opening click while unrelated
//! popovers still close on it.
//!
//! Every registration a controller performs against the shared context is
//! paired with a [`thicket_reactive::Scope`] cleanup, so closing and
//! disposing are the same deterministic teardown and both are idempotent.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod context;
mod controller;
mod dropdown;
mod menu;
mod mount;
mod simple;

pub use context::{OverlayContext, PopoverId};
pub use controller::{PopoverController, Transition, Trigger, TriggerKind, TriggerResponse};
pub use dropdown::Dropdown;
pub use menu::{ContextMenu, MenuEntry, Selection};
pub use mount::{MountRegistry, ParentLookup, contains};
pub use simple::{SimplePopover, SimplePopoverOptions};
pub use thicket_placement::{AnchoredPosition, Placement, PlacementInput};
