// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket List: list virtualization and tree flattening kernels.
//!
//! ## Overview
//!
//! Two pure helpers behind scrolling list UIs:
//!
//! - [`FixedStrip`]: virtualization for a dense strip of equally sized
//!   items. Given a scroll offset and viewport extent it computes which
//!   index window to realize and where each realized item sits, so the host
//!   mounts a handful of rows inside a correctly sized scroll container
//!   instead of thousands.
//! - [`TreeModel`]: turns a flat item list with path-like grouping keys into
//!   ordered visible rows — folder headers and items with depths — tracking
//!   which folders are expanded and auto-expanding any folder that shelters
//!   a selected item.
//!
//! Both produce plain comparable values, so hosts can hide them behind an
//! equality gate and re-render only when the visible set really changed.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod strip;
mod tree;

pub use strip::{FixedStrip, StripWindow};
pub use tree::{TreeModel, TreeRow};
