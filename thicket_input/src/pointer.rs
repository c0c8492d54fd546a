// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Global pointer state: page-absolute position and held buttons.

use bitflags::bitflags;
use kurbo::{Point, Vec2};
use thicket_reactive::Gated;

bitflags! {
    /// Pointer buttons currently held down.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PointerButtons: u8 {
        /// Primary button (usually left).
        const PRIMARY   = 0b0000_0001;
        /// Secondary button (usually right).
        const SECONDARY = 0b0000_0010;
        /// Auxiliary button (usually middle).
        const AUXILIARY = 0b0000_0100;
    }
}

/// The window's pointer, tracked in page coordinates.
///
/// The host feeds viewport-relative move/hover positions and the running page
/// scroll offset; the combined page-absolute position sits behind an equality
/// gate so consumers only see it move when the sum actually changes. Scrolling
/// the page moves the page-absolute cursor even while the physical pointer is
/// still, which is exactly what anchor-at-cursor placement wants.
///
/// Held buttons follow the usual release rules: a button is held between its
/// down and up events, and a window blur releases everything (the up event is
/// lost to another window).
#[derive(Debug)]
pub struct PointerState {
    client: Point,
    page_scroll: Vec2,
    position: Gated<Point>,
    buttons: PointerButtons,
}

impl PointerState {
    /// Create the state with the cursor at the origin and no buttons held.
    pub fn new() -> Self {
        Self {
            client: Point::ZERO,
            page_scroll: Vec2::ZERO,
            position: Gated::new(Point::ZERO),
            buttons: PointerButtons::empty(),
        }
    }

    /// Feed a pointer position in viewport coordinates, from any event that
    /// carries one (move, hover, press).
    ///
    /// Returns `true` if the page-absolute position changed.
    pub fn on_pointer_move(&mut self, client: Point) -> bool {
        self.client = client;
        self.recombine()
    }

    /// Feed the page scroll offset after a scroll or resize event.
    ///
    /// Returns `true` if the page-absolute position changed.
    pub fn on_page_scroll(&mut self, offset: Vec2) -> bool {
        self.page_scroll = offset;
        self.recombine()
    }

    /// Record a button press.
    pub fn on_button_down(&mut self, button: PointerButtons) {
        self.buttons |= button;
    }

    /// Record a button release.
    pub fn on_button_up(&mut self, button: PointerButtons) {
        self.buttons -= button;
    }

    /// The window lost focus; release everything.
    pub fn on_blur(&mut self) {
        self.buttons = PointerButtons::empty();
    }

    /// Page-absolute cursor position.
    pub fn position(&self) -> Point {
        *self.position.get()
    }

    /// Change version of the page-absolute position.
    pub fn position_version(&self) -> u64 {
        self.position.version()
    }

    /// Buttons currently held.
    pub fn buttons(&self) -> PointerButtons {
        self.buttons
    }

    /// `true` while any button is held.
    ///
    /// Hover triggers consult this so a drag passing over them does not open
    /// anything.
    pub fn held(&self) -> bool {
        !self.buttons.is_empty()
    }

    fn recombine(&mut self) -> bool {
        self.position.set(self.client + self.page_scroll)
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_combines_client_and_scroll() {
        let mut pointer = PointerState::new();
        assert!(pointer.on_pointer_move(Point::new(100.0, 40.0)));
        assert_eq!(pointer.position(), Point::new(100.0, 40.0));

        assert!(pointer.on_page_scroll(Vec2::new(0.0, 300.0)));
        assert_eq!(pointer.position(), Point::new(100.0, 340.0));
    }

    #[test]
    fn unmoved_position_does_not_notify() {
        let mut pointer = PointerState::new();
        pointer.on_pointer_move(Point::new(10.0, 10.0));
        let version = pointer.position_version();

        assert!(!pointer.on_pointer_move(Point::new(10.0, 10.0)));
        assert!(!pointer.on_page_scroll(Vec2::ZERO));
        assert_eq!(pointer.position_version(), version);
    }

    #[test]
    fn compensating_scroll_and_move_cancel_out() {
        let mut pointer = PointerState::new();
        pointer.on_pointer_move(Point::new(50.0, 50.0));
        let version = pointer.position_version();

        // Cursor moves up by the same amount the page scrolled down.
        pointer.on_page_scroll(Vec2::new(0.0, 20.0));
        assert!(pointer.on_pointer_move(Point::new(50.0, 30.0)));
        assert_eq!(pointer.position(), Point::new(50.0, 50.0));
        // Two real changes happened along the way.
        assert_eq!(pointer.position_version(), version + 2);
    }

    #[test]
    fn held_spans_down_to_up() {
        let mut pointer = PointerState::new();
        assert!(!pointer.held());

        pointer.on_button_down(PointerButtons::PRIMARY);
        assert!(pointer.held());

        pointer.on_button_down(PointerButtons::SECONDARY);
        pointer.on_button_up(PointerButtons::PRIMARY);
        assert!(pointer.held());

        pointer.on_button_up(PointerButtons::SECONDARY);
        assert!(!pointer.held());
    }

    #[test]
    fn blur_releases_held_buttons() {
        let mut pointer = PointerState::new();
        pointer.on_button_down(PointerButtons::PRIMARY);

        pointer.on_blur();

        assert!(!pointer.held());
        assert_eq!(pointer.buttons(), PointerButtons::empty());
    }
}
