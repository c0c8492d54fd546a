// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Placement: pure anchored-overlay positioning.
//!
//! ## Overview
//!
//! [`resolve`] maps a placement mode and the current geometry — anchor
//! rectangle, content size, mouse position, viewport size, all in page
//! coordinates — to the absolute offsets an overlay should be mounted at.
//! It is a pure function of its inputs: no hidden state, no host queries,
//! which is what makes every overflow-fallback rule directly unit-testable.
//!
//! ## Modes
//!
//! - [`Placement::InitialMouse`] / [`Placement::Mouse`]: 10px right and below
//!   the cursor; flips to the left of the cursor when the content would
//!   overflow the right viewport edge. The vertical side never flips. For
//!   `InitialMouse` the caller samples the cursor once when the overlay
//!   opens; for `Mouse` it feeds the live position.
//! - [`Placement::Left`] / [`Placement::Right`]: vertically centered on the
//!   anchor, 5px outside its edge. `Left` is expressed as a right-edge
//!   offset so the overlay keeps hugging the anchor when the viewport
//!   resizes.
//! - [`Placement::Top`]: horizontally centered (clamped 10px off the left
//!   viewport edge), 5px above.
//! - [`Placement::Bottom`]: horizontally centered with the same clamp, 5px
//!   below; flips to 5px above when the bottom would overflow the viewport.
//! - [`Placement::BottomLeft`] / [`Placement::BottomRight`]: 5px below,
//!   right- or left-aligned to the anchor.
//!
//! Offsets are rounded to one decimal place, matching the geometry observers
//! feeding them.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use thicket_placement::{Placement, PlacementInput, resolve};
//!
//! let input = PlacementInput {
//!     anchor_origin: Point::new(100.0, 500.0),
//!     anchor_size: Size::new(50.0, 20.0),
//!     content_size: Size::new(30.0, 40.0),
//!     mouse: Point::ZERO,
//!     viewport: Size::new(800.0, 700.0),
//! };
//!
//! let position = resolve(Placement::Bottom, &input);
//! assert_eq!(position.top, Some(525.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use core::fmt;

use kurbo::{Point, Size};
use thicket_geometry::round_to_tenth;

/// Where an overlay sits relative to its anchor.
///
/// The set is closed on purpose: [`resolve`] dispatches through an exhaustive
/// match, so adding a mode is a compile-time reminder to define its overflow
/// rule.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Placement {
    /// At the cursor position sampled once when the overlay opened.
    InitialMouse,
    /// At the live cursor position.
    #[default]
    Mouse,
    /// Outside the anchor's left edge, vertically centered.
    Left,
    /// Outside the anchor's right edge, vertically centered.
    Right,
    /// Above the anchor, horizontally centered.
    Top,
    /// Below the anchor, horizontally centered; flips above on overflow.
    Bottom,
    /// Below the anchor, right-aligned to its right edge.
    BottomLeft,
    /// Below the anchor, left-aligned to its left edge.
    BottomRight,
}

impl Placement {
    /// `true` for the modes anchored to the cursor rather than the anchor
    /// element.
    pub fn is_mouse_anchored(self) -> bool {
        matches!(self, Self::InitialMouse | Self::Mouse)
    }

    /// `true` for the mode that keeps following the live cursor after open.
    pub fn tracks_mouse(self) -> bool {
        matches!(self, Self::Mouse)
    }
}

/// Geometry snapshot [`resolve`] positions against.
///
/// Everything is in page coordinates. Zero-valued anchor or content geometry
/// is fine — it is what the observers report before their targets exist — and
/// simply produces a position at the degenerate rectangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacementInput {
    /// Top-left corner of the anchor.
    pub anchor_origin: Point,
    /// Size of the anchor.
    pub anchor_size: Size,
    /// Measured size of the overlay content.
    pub content_size: Size,
    /// Cursor position (sampled at open for [`Placement::InitialMouse`],
    /// live for [`Placement::Mouse`]).
    pub mouse: Point,
    /// Viewport size the overflow rules clamp against.
    pub viewport: Size,
}

/// Absolute edge offsets for an overlay, in pixels, rounded to one decimal.
///
/// At most two offsets are set per placement: a horizontal one (`left` or
/// `right`) and `top`. `bottom` exists for parity with host style systems
/// but no current mode emits it.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct AnchoredPosition {
    /// Offset from the viewport's left edge.
    pub left: Option<f64>,
    /// Offset from the viewport's top edge.
    pub top: Option<f64>,
    /// Offset from the viewport's right edge.
    pub right: Option<f64>,
    /// Offset from the viewport's bottom edge.
    pub bottom: Option<f64>,
}

impl AnchoredPosition {
    fn left_top(left: f64, top: f64) -> Self {
        Self {
            left: Some(round_to_tenth(left)),
            top: Some(round_to_tenth(top)),
            ..Self::default()
        }
    }

    fn right_top(right: f64, top: f64) -> Self {
        Self {
            right: Some(round_to_tenth(right)),
            top: Some(round_to_tenth(top)),
            ..Self::default()
        }
    }
}

impl fmt::Display for AnchoredPosition {
    /// Renders as a CSS inline style fragment, e.g. `left:720px;top:170.5px;`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, offset) in [
            ("left", self.left),
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
        ] {
            if let Some(px) = offset {
                write!(f, "{name}:{px}px;")?;
            }
        }
        Ok(())
    }
}

/// Compute the overlay position for `placement` under `input`.
pub fn resolve(placement: Placement, input: &PlacementInput) -> AnchoredPosition {
    let anchor = input.anchor_origin;
    let anchor_size = input.anchor_size;
    let content = input.content_size;

    match placement {
        Placement::InitialMouse | Placement::Mouse => {
            let preferred = input.mouse.x + 10.0;
            let fits = preferred + content.width < input.viewport.width;
            let left = if fits {
                preferred
            } else {
                input.mouse.x - 10.0 - content.width
            };
            AnchoredPosition::left_top(left, input.mouse.y + 10.0)
        }
        Placement::Left => {
            let right = input.viewport.width - anchor.x + 5.0;
            let top = anchor.y + anchor_size.height / 2.0 - content.height / 2.0;
            AnchoredPosition::right_top(right, top)
        }
        Placement::Right => {
            let left = anchor.x + anchor_size.width + 5.0;
            let top = anchor.y + anchor_size.height / 2.0 - content.height / 2.0;
            AnchoredPosition::left_top(left, top)
        }
        Placement::Top => {
            let left = (anchor.x + anchor_size.width / 2.0 - content.width / 2.0).max(10.0);
            let top = anchor.y - content.height - 5.0;
            AnchoredPosition::left_top(left, top)
        }
        Placement::Bottom => {
            let preferred = anchor.y + anchor_size.height + 5.0;
            let fits = preferred + content.height < input.viewport.height;
            let left = (anchor.x + anchor_size.width / 2.0 - content.width / 2.0).max(10.0);
            let top = if fits {
                preferred
            } else {
                anchor.y - content.height - 5.0
            };
            AnchoredPosition::left_top(left, top)
        }
        Placement::BottomLeft => {
            let left = anchor.x + anchor_size.width - content.width;
            let top = anchor.y + anchor_size.height + 5.0;
            AnchoredPosition::left_top(left, top)
        }
        Placement::BottomRight => {
            let left = anchor.x;
            let top = anchor.y + anchor_size.height + 5.0;
            AnchoredPosition::left_top(left, top)
        }
    }
}
