// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-side geometry query surface.

use kurbo::{Rect, Size, Vec2};

/// Layout queries the host answers about its own element handles.
///
/// `E` is whatever the host uses to refer to a rendered element (a DOM node
/// handle, a widget id, a box-tree key). Observers never hold geometry of
/// their own; they re-query the source when the host tells them something may
/// have moved.
pub trait GeometrySource<E> {
    /// Bounding rectangle of `element` in viewport coordinates, if it is
    /// currently laid out. `None` means the element is absent, which
    /// observers treat as zero geometry rather than an error.
    fn viewport_rect(&self, element: &E) -> Option<Rect>;

    /// The element's own interior scroll offset.
    fn element_scroll(&self, element: &E) -> Vec2;

    /// The page scroll offset, added to viewport coordinates to obtain page
    /// coordinates.
    fn page_scroll(&self) -> Vec2;

    /// Size of the viewport the page is laid out against.
    fn viewport(&self) -> Size;
}
