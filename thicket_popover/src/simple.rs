// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-trigger convenience wrapper.

use kurbo::{Point, Size};
use thicket_input::{BindingId, PointerPass};
use thicket_placement::{AnchoredPosition, Placement};

use crate::context::{OverlayContext, PopoverId};
use crate::controller::{PopoverController, Transition, Trigger, TriggerKind, TriggerResponse};
use crate::mount::ParentLookup;

/// Configuration for [`SimplePopover`].
#[derive(Copy, Clone, Debug)]
pub struct SimplePopoverOptions<K> {
    /// The single trigger kind. Defaults to hover.
    pub trigger: TriggerKind,
    /// Placement mode. Defaults to following the mouse.
    pub placement: Placement,
    /// Position relative to this element instead of the trigger child.
    pub anchor: Option<K>,
    /// Size the overlay content to the anchor's width.
    pub inherit_width: bool,
}

impl<K> Default for SimplePopoverOptions<K> {
    fn default() -> Self {
        Self {
            trigger: TriggerKind::Hover,
            placement: Placement::Mouse,
            anchor: None,
            inherit_width: false,
        }
    }
}

/// One trigger element, one popover, a `close()` surface, and a disabled
/// gate.
///
/// The convenience shape most widgets want: the trigger child doubles as the
/// anchor unless the options name another, and content render functions get
/// [`SimplePopover::close`] to dismiss from within. While disabled the
/// wrapper reports closed, opens for nothing, and claims nothing — as if the
/// overlay machinery were not rendered at all.
#[derive(Debug)]
pub struct SimplePopover<K> {
    controller: PopoverController<K>,
    disabled: bool,
    inherit_width: bool,
}

impl<K: Copy + Eq + 'static> SimplePopover<K> {
    /// Create around a trigger `child`.
    pub fn new(
        ctx: &mut OverlayContext<K>,
        child: K,
        options: SimplePopoverOptions<K>,
    ) -> Self {
        let anchor = options.anchor.unwrap_or(child);
        let trigger = Trigger {
            element: child,
            kind: options.trigger,
        };
        Self {
            controller: PopoverController::new(ctx, anchor, options.placement, [trigger]),
            disabled: false,
            inherit_width: options.inherit_width,
        }
    }

    /// This popover's identity.
    pub fn id(&self) -> PopoverId {
        self.controller.id()
    }

    /// `true` while open and not disabled.
    pub fn is_open(&self) -> bool {
        !self.disabled && self.controller.is_open()
    }

    /// `true` while the wrapper ignores all input.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// The mount node of the current open phase, if any.
    pub fn mount(&self) -> Option<K> {
        self.controller.mount()
    }

    /// See [`PopoverController::evasive`].
    pub fn evasive(&self) -> bool {
        self.controller.evasive()
    }

    /// The content width to apply, when sized off the anchor.
    pub fn content_width(&self, anchor_size: Size) -> Option<f64> {
        self.inherit_width.then_some(anchor_size.width)
    }

    /// Enable or disable the wrapper. Disabling closes it immediately.
    pub fn set_disabled(&mut self, disabled: bool, ctx: &mut OverlayContext<K>) {
        self.disabled = disabled;
        if disabled {
            self.controller.close(ctx);
        }
    }

    /// Dismiss from within — handed to content render functions.
    pub fn close(&mut self, ctx: &mut OverlayContext<K>) -> Transition {
        self.controller.close(ctx)
    }

    /// See [`PopoverController::on_pointer_move`]. Inert while disabled.
    pub fn on_pointer_move(
        &mut self,
        hover_target: Option<K>,
        ctx: &mut OverlayContext<K>,
        lookup: &impl ParentLookup<K>,
    ) -> Transition {
        if self.disabled {
            return Transition::None;
        }
        self.controller.on_pointer_move(hover_target, ctx, lookup)
    }

    /// See [`PopoverController::on_trigger_event`]. Inert while disabled.
    pub fn on_trigger_event(
        &mut self,
        kind: TriggerKind,
        pass: PointerPass<K>,
        ctx: &mut OverlayContext<K>,
        lookup: &impl ParentLookup<K>,
    ) -> TriggerResponse {
        if self.disabled {
            return TriggerResponse {
                transition: Transition::None,
                prevent_default: false,
            };
        }
        self.controller.on_trigger_event(kind, pass, ctx, lookup)
    }

    /// See [`PopoverController::on_global_mouse_down`].
    pub fn on_global_mouse_down(
        &mut self,
        pass: PointerPass<K>,
        ctx: &mut OverlayContext<K>,
        lookup: &impl ParentLookup<K>,
    ) -> Transition {
        self.controller.on_global_mouse_down(pass, ctx, lookup)
    }

    /// See [`PopoverController::on_key_fired`].
    pub fn on_key_fired(&mut self, fired: &[BindingId], ctx: &mut OverlayContext<K>) -> Transition {
        self.controller.on_key_fired(fired, ctx)
    }

    /// See [`PopoverController::attach_mount`].
    pub fn attach_mount(
        &mut self,
        node: K,
        ctx: &mut OverlayContext<K>,
        lookup: &impl ParentLookup<K>,
    ) -> K {
        self.controller.attach_mount(node, ctx, lookup)
    }

    /// See [`PopoverController::position`].
    pub fn position(
        &self,
        anchor_origin: Point,
        anchor_size: Size,
        content_size: Size,
        viewport: Size,
        ctx: &OverlayContext<K>,
    ) -> AnchoredPosition {
        self.controller
            .position(anchor_origin, anchor_size, content_size, viewport, ctx)
    }

    /// See [`PopoverController::dispose`].
    pub fn dispose(&mut self, ctx: &mut OverlayContext<K>) {
        self.controller.dispose(ctx);
    }
}
