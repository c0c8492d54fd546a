// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Input: page-global pointer and keyboard state.
//!
//! ## Overview
//!
//! Physical input state is genuinely global to a window: there is one cursor,
//! one set of held buttons, one set of held keys. This crate owns that state
//! as plain structs the host mutates through event entry points and every
//! other component only reads:
//!
//! - [`PointerState`]: viewport-relative cursor plus the running page scroll,
//!   combined into a page-absolute position behind an equality gate, and the
//!   held-button set with its window-blur release rule.
//! - [`KeyState`]: the set of held key names, also released wholesale on
//!   window blur.
//! - [`KeyBindings`]: chord bindings (`"Control+k"` style) dispatched
//!   most-recent-registration-first, where a stop-propagation binding
//!   consumes the pass. This ordering is what lets the innermost open
//!   popover's Escape binding shadow every outer one.
//! - [`CursorStack`]: scoped cursor requests where the earliest active
//!   request wins, from which the host derives the cursor to show.
//!
//! Event identity for claim tracking lives here too: [`EventId`] names one
//! dispatched input event for exactly as long as the host keeps dispatching
//! it, and [`PointerPass`] carries the per-event facts overlay controllers
//! consume.
//!
//! There is no teardown story for the global state itself — its lifetime is
//! the application's. Bindings and cursor requests, by contrast, are scoped:
//! they hand back tokens their owners release through
//! [`thicket_reactive::Scope`] cleanups.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cursor;
mod event;
mod keys;
mod pointer;

pub use cursor::{CursorStack, CursorToken};
pub use cursor_icon::CursorIcon;
pub use event::{EventId, EventIds, PointerPass};
pub use keys::{BindOptions, BindingId, KeyBindings, KeyChord, KeyPass, KeyState};
pub use pointer::{PointerButtons, PointerState};
