// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-element observers: position, size, and interior scroll.

use kurbo::{Point, Size, Vec2};
use thicket_reactive::Gated;

use crate::round::round_to_tenth;
use crate::source::GeometrySource;

/// Observes an element's top-left corner in page coordinates.
///
/// The sampled value is the viewport rectangle origin plus the page scroll
/// offset, so it stays correct while the page scrolls. The host forwards
/// window scroll, wheel, and resize events to [`ElementPosition::refresh`];
/// [`ElementPosition::retarget`] re-samples eagerly.
#[derive(Debug)]
pub struct ElementPosition<E> {
    target: Option<E>,
    value: Gated<Point>,
}

impl<E> ElementPosition<E> {
    /// Create an observer with no target; reports [`Point::ZERO`].
    pub fn new() -> Self {
        Self {
            target: None,
            value: Gated::new(Point::ZERO),
        }
    }

    /// Replace the watched element and re-sample immediately.
    ///
    /// Returns `true` if the observed position changed. The host should tear
    /// down event subscriptions for the previous target when this is called;
    /// the observer itself never holds more than the current one.
    pub fn retarget(&mut self, target: Option<E>, source: &impl GeometrySource<E>) -> bool {
        self.target = target;
        self.refresh(source)
    }

    /// Re-sample after a window scroll, wheel, or resize event.
    ///
    /// Returns `true` if the observed position changed.
    pub fn refresh(&mut self, source: &impl GeometrySource<E>) -> bool {
        let sampled = match &self.target {
            Some(target) => match source.viewport_rect(target) {
                Some(rect) => rect.origin() + source.page_scroll(),
                None => Point::ZERO,
            },
            None => Point::ZERO,
        };
        self.value.set(sampled)
    }

    /// The current page-coordinate position.
    pub fn get(&self) -> Point {
        *self.value.get()
    }

    /// Change version of the observed position.
    pub fn version(&self) -> u64 {
        self.value.version()
    }
}

impl<E> Default for ElementPosition<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Observes an element's border-box size, rounded to one decimal place.
///
/// The host wires its resize-observation mechanism to
/// [`ElementSize::resized`]; [`ElementSize::retarget`] re-samples eagerly so
/// a fresh target is measured before its first resize callback.
#[derive(Debug)]
pub struct ElementSize<E> {
    target: Option<E>,
    value: Gated<Size>,
}

impl<E> ElementSize<E> {
    /// Create an observer with no target; reports [`Size::ZERO`].
    pub fn new() -> Self {
        Self {
            target: None,
            value: Gated::new(Size::ZERO),
        }
    }

    /// Replace the watched element and re-sample immediately.
    ///
    /// Returns `true` if the observed size changed.
    pub fn retarget(&mut self, target: Option<E>, source: &impl GeometrySource<E>) -> bool {
        self.target = target;
        self.resized(source)
    }

    /// Re-sample after a resize observation fired for the target.
    ///
    /// Returns `true` if the observed size changed. Sub-tenth jitter from the
    /// host's measurements is rounded away before the equality gate, so it
    /// never reads as change.
    pub fn resized(&mut self, source: &impl GeometrySource<E>) -> bool {
        let sampled = match &self.target {
            Some(target) => match source.viewport_rect(target) {
                Some(rect) => Size::new(
                    round_to_tenth(rect.width()),
                    round_to_tenth(rect.height()),
                ),
                None => Size::ZERO,
            },
            None => Size::ZERO,
        };
        self.value.set(sampled)
    }

    /// The current rounded size.
    pub fn get(&self) -> Size {
        *self.value.get()
    }

    /// Change version of the observed size.
    pub fn version(&self) -> u64 {
        self.value.version()
    }
}

impl<E> Default for ElementSize<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Observes an element's own interior scroll offset.
#[derive(Debug)]
pub struct ElementScroll<E> {
    target: Option<E>,
    value: Gated<Vec2>,
}

impl<E> ElementScroll<E> {
    /// Create an observer with no target; reports [`Vec2::ZERO`].
    pub fn new() -> Self {
        Self {
            target: None,
            value: Gated::new(Vec2::ZERO),
        }
    }

    /// Replace the watched element and re-sample immediately.
    ///
    /// Returns `true` if the observed offset changed.
    pub fn retarget(&mut self, target: Option<E>, source: &impl GeometrySource<E>) -> bool {
        self.target = target;
        self.scrolled(source)
    }

    /// Re-sample after the target's scroll event.
    ///
    /// Returns `true` if the observed offset changed.
    pub fn scrolled(&mut self, source: &impl GeometrySource<E>) -> bool {
        let sampled = match &self.target {
            Some(target) => source.element_scroll(target),
            None => Vec2::ZERO,
        };
        self.value.set(sampled)
    }

    /// The current interior scroll offset.
    pub fn get(&self) -> Vec2 {
        *self.value.get()
    }

    /// Change version of the observed offset.
    pub fn version(&self) -> u64 {
        self.value.version()
    }
}

impl<E> Default for ElementScroll<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;

    struct StubHost {
        rect: Option<Rect>,
        element_scroll: Vec2,
        page_scroll: Vec2,
    }

    impl StubHost {
        fn new(rect: Option<Rect>) -> Self {
            Self {
                rect,
                element_scroll: Vec2::ZERO,
                page_scroll: Vec2::ZERO,
            }
        }
    }

    impl GeometrySource<u32> for StubHost {
        fn viewport_rect(&self, _element: &u32) -> Option<Rect> {
            self.rect
        }

        fn element_scroll(&self, _element: &u32) -> Vec2 {
            self.element_scroll
        }

        fn page_scroll(&self) -> Vec2 {
            self.page_scroll
        }

        fn viewport(&self) -> Size {
            Size::new(800.0, 600.0)
        }
    }

    #[test]
    fn absent_target_reports_zero_defaults() {
        let host = StubHost::new(Some(Rect::new(10.0, 10.0, 50.0, 30.0)));
        let mut position: ElementPosition<u32> = ElementPosition::new();
        let mut size: ElementSize<u32> = ElementSize::new();
        let mut scroll: ElementScroll<u32> = ElementScroll::new();

        assert!(!position.refresh(&host));
        assert!(!size.resized(&host));
        assert!(!scroll.scrolled(&host));

        assert_eq!(position.get(), Point::ZERO);
        assert_eq!(size.get(), Size::ZERO);
        assert_eq!(scroll.get(), Vec2::ZERO);
    }

    #[test]
    fn position_combines_viewport_rect_with_page_scroll() {
        let mut host = StubHost::new(Some(Rect::new(40.0, 30.0, 90.0, 50.0)));
        let mut position = ElementPosition::new();

        assert!(position.retarget(Some(1_u32), &host));
        assert_eq!(position.get(), Point::new(40.0, 30.0));

        host.page_scroll = Vec2::new(5.0, 100.0);
        assert!(position.refresh(&host));
        assert_eq!(position.get(), Point::new(45.0, 130.0));
    }

    #[test]
    fn refresh_without_movement_is_not_a_change() {
        let host = StubHost::new(Some(Rect::new(40.0, 30.0, 90.0, 50.0)));
        let mut position = ElementPosition::new();
        position.retarget(Some(1_u32), &host);
        let version = position.version();

        assert!(!position.refresh(&host));
        assert!(!position.refresh(&host));
        assert_eq!(position.version(), version);
    }

    #[test]
    fn size_rounds_to_one_decimal() {
        let host = StubHost::new(Some(Rect::new(0.0, 0.0, 100.04, 49.96)));
        let mut size = ElementSize::new();

        size.retarget(Some(1_u32), &host);
        assert_eq!(size.get(), Size::new(100.0, 50.0));

        // A sub-tenth wiggle rounds to the same size and is gated out.
        let host = StubHost::new(Some(Rect::new(0.0, 0.0, 100.01, 49.99)));
        assert!(!size.resized(&host));
    }

    #[test]
    fn retarget_samples_eagerly_and_detachment_resets() {
        let host = StubHost::new(Some(Rect::new(10.0, 20.0, 60.0, 40.0)));
        let mut position = ElementPosition::new();

        assert!(position.retarget(Some(7_u32), &host));
        assert_eq!(position.get(), Point::new(10.0, 20.0));

        assert!(position.retarget(None, &host));
        assert_eq!(position.get(), Point::ZERO);
    }

    #[test]
    fn element_scroll_tracks_interior_offset() {
        let mut host = StubHost::new(Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
        let mut scroll = ElementScroll::new();
        scroll.retarget(Some(1_u32), &host);

        host.element_scroll = Vec2::new(0.0, 250.0);
        assert!(scroll.scrolled(&host));
        assert_eq!(scroll.get(), Vec2::new(0.0, 250.0));
    }
}
