// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-extent strip virtualization.

/// The index window to realize, with its placement facts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StripWindow {
    /// First index to realize.
    pub start: usize,
    /// One past the last index to realize.
    pub end: usize,
}

impl StripWindow {
    /// Number of realized items.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// `true` when nothing is visible.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A dense strip of `len` items, each `item_extent` pixels along the scroll
/// axis, optionally preceded by a fixed lead offset.
///
/// The host owns the scroll container; this computes which indices are in
/// view and where they sit. Windows are plain values, so the usual pattern
/// is to store the last one behind an equality gate and re-render only on
/// real change.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedStrip {
    len: usize,
    item_extent: f64,
    lead_offset: f64,
}

impl FixedStrip {
    /// A strip of `len` items of `item_extent` pixels each.
    ///
    /// Panics on a non-positive or non-finite extent; a strip of
    /// zero-height items has no meaningful window.
    pub fn new(len: usize, item_extent: f64) -> Self {
        assert!(
            item_extent.is_finite() && item_extent > 0.0,
            "item extent must be positive and finite"
        );
        Self {
            len,
            item_extent,
            lead_offset: 0.0,
        }
    }

    /// Add a fixed extent before the first item (a header, padding).
    pub fn with_lead_offset(mut self, lead_offset: f64) -> Self {
        self.lead_offset = lead_offset;
        self
    }

    /// Number of items in the strip.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` when the strip has no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total scrollable extent: all items plus the lead offset.
    pub fn content_extent(&self) -> f64 {
        self.len as f64 * self.item_extent + self.lead_offset
    }

    /// Scroll-axis position of item `index`.
    pub fn item_offset(&self, index: usize) -> f64 {
        index as f64 * self.item_extent + self.lead_offset
    }

    /// The window of items in view at `scroll` with `viewport_extent` of
    /// visible space.
    pub fn window(&self, scroll: f64, viewport_extent: f64) -> StripWindow {
        let start = floor_non_negative(scroll / self.item_extent).min(self.len);
        let visible = ceil_non_negative(viewport_extent / self.item_extent);
        let end = (start + visible).min(self.len);
        StripWindow { start, end }
    }
}

fn floor_non_negative(value: f64) -> usize {
    if value <= 0.0 || !value.is_finite() {
        return 0;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "screen-scale ratios are far inside usize range"
    )]
    {
        value as usize
    }
}

fn ceil_non_negative(value: f64) -> usize {
    let floored = floor_non_negative(value);
    if value > floored as f64 {
        floored + 1
    } else {
        floored
    }
}
