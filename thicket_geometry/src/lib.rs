// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Geometry: reactive element geometry observers.
//!
//! ## Overview
//!
//! Overlay positioning needs three facts about an anchor element: where it is
//! in page coordinates, how big it is, and how far its own content is
//! scrolled. In a browser those arrive through `getBoundingClientRect`,
//! resize observation, and scroll events; in other hosts through layout
//! trees. This crate does not know which — the host implements
//! [`GeometrySource`] over its own element handles, forwards the
//! invalidating events, and the observers turn the samples into
//! equality-gated values.
//!
//! - [`ElementPosition`]: page-coordinate top-left (viewport rect origin plus
//!   page scroll). Re-sample on window scroll, wheel, and resize — the host
//!   should listen at the capture phase so nested scroll containers are
//!   caught — and on every retarget.
//! - [`ElementSize`]: width/height rounded to one decimal. Re-sample on
//!   resize-observation callbacks and eagerly on retarget.
//! - [`ElementScroll`]: the element's own interior scroll offset. Re-sample
//!   on its scroll events and on retarget.
//!
//! An absent target is a valid state, not an error: every observer reports a
//! zero-valued default until a target is attached. Retargeting replaces the
//! watched element and re-samples exactly once, so a host that tears down the
//! old event subscription when `retarget` returns cannot leak listeners
//! across target changes.
//!
//! All observed values sit behind [`thicket_reactive::Gated`] cells: an event
//! that does not actually move the geometry is invisible to downstream
//! consumers.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size, Vec2};
//! use thicket_geometry::{ElementPosition, GeometrySource};
//!
//! struct OneBox {
//!     rect: Option<Rect>,
//!     page_scroll: Vec2,
//! }
//!
//! impl GeometrySource<&'static str> for OneBox {
//!     fn viewport_rect(&self, _element: &&'static str) -> Option<Rect> {
//!         self.rect
//!     }
//!     fn element_scroll(&self, _element: &&'static str) -> Vec2 {
//!         Vec2::ZERO
//!     }
//!     fn page_scroll(&self) -> Vec2 {
//!         self.page_scroll
//!     }
//!     fn viewport(&self) -> Size {
//!         Size::new(800.0, 600.0)
//!     }
//! }
//!
//! let mut host = OneBox {
//!     rect: Some(Rect::new(40.0, 30.0, 90.0, 50.0)),
//!     page_scroll: Vec2::ZERO,
//! };
//!
//! let mut position = ElementPosition::new();
//! position.retarget(Some("anchor"), &host);
//! assert_eq!(position.get(), Point::new(40.0, 30.0));
//!
//! // The page scrolls; the host forwards the event.
//! host.page_scroll = Vec2::new(0.0, 100.0);
//! assert!(position.refresh(&host));
//! assert_eq!(position.get(), Point::new(40.0, 130.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod observe;
mod round;
mod source;

pub use observe::{ElementPosition, ElementScroll, ElementSize};
pub use round::round_to_tenth;
pub use source::GeometrySource;
