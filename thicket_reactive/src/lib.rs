// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Reactive: cleanup scopes and equality-gated value cells.
//!
//! ## Overview
//!
//! This crate provides the two primitives the rest of the Thicket workspace
//! builds interaction lifecycles on:
//!
//! - [`Scope`]: an explicit ownership frame for paired acquire/release work.
//!   Every registration a component performs against a shared table is
//!   mirrored by a deferred cleanup; disposing the scope runs the cleanups in
//!   reverse registration order, exactly once each.
//! - [`Gated`]: a value cell whose writes are gated on equality. A write that
//!   does not change the value is invisible to observers; a write that does
//!   bumps a monotonically increasing version. Hosts poll the version (or use
//!   the boolean result of [`Gated::set`]) instead of subscribing callbacks.
//!
//! Full auto-tracking effect graphs are deliberately out of scope. The host
//! framework owns scheduling; these primitives only make state transitions
//! observable and teardown deterministic.
//!
//! ## Minimal example
//!
//! ```rust
//! use thicket_reactive::{Gated, Scope};
//!
//! struct Registry {
//!     names: Vec<&'static str>,
//! }
//!
//! let mut registry = Registry { names: Vec::new() };
//! let mut scope: Scope<Registry> = Scope::new();
//!
//! registry.names.push("listener");
//! scope.defer(|r: &mut Registry| {
//!     r.names.retain(|n| *n != "listener");
//! });
//!
//! let mut size = Gated::new(0.0_f64);
//! assert!(size.set(12.5));
//! assert!(!size.set(12.5)); // equal write, no version bump
//!
//! scope.dispose(&mut registry);
//! assert!(registry.names.is_empty());
//! scope.dispose(&mut registry); // second dispose is a no-op
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod gate;
mod scope;

pub use gate::{Gated, MostRecent, Previous};
pub use scope::Scope;
