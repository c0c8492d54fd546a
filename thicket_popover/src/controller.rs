// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The popover lifecycle state machine.

use kurbo::{Point, Size};
use smallvec::SmallVec;
use thicket_input::{BindOptions, BindingId, PointerPass};
use thicket_placement::{AnchoredPosition, Placement, PlacementInput, resolve};
use thicket_reactive::Scope;

use crate::context::{OverlayContext, PopoverId};
use crate::mount::{ParentLookup, contains};

/// What kind of input opens a trigger's popover.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TriggerKind {
    /// Open while the pointer rests over the trigger (and no button is held).
    Hover,
    /// Toggle on click.
    Click,
    /// Toggle on mouse-down.
    MouseDown,
    /// Toggle on the context-menu gesture; the host suppresses the native menu.
    ContextMenu,
}

/// Binds one host element to one [`TriggerKind`].
#[derive(Copy, Clone, Debug)]
pub struct Trigger<K> {
    /// The element whose subtree arms the trigger.
    pub element: K,
    /// The input kind that fires it.
    pub kind: TriggerKind,
}

impl<K> Trigger<K> {
    /// A hover trigger on `element`.
    pub fn hover(element: K) -> Self {
        Self {
            element,
            kind: TriggerKind::Hover,
        }
    }

    /// A click trigger on `element`.
    pub fn click(element: K) -> Self {
        Self {
            element,
            kind: TriggerKind::Click,
        }
    }

    /// A mouse-down trigger on `element`.
    pub fn mouse_down(element: K) -> Self {
        Self {
            element,
            kind: TriggerKind::MouseDown,
        }
    }

    /// A context-menu trigger on `element`.
    pub fn context_menu(element: K) -> Self {
        Self {
            element,
            kind: TriggerKind::ContextMenu,
        }
    }
}

/// State change produced by one controller call.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Transition {
    /// The open state did not change.
    None,
    /// The popover went from closed to open. The host should now create a
    /// mount node and call [`PopoverController::attach_mount`].
    Opened,
    /// The popover went from open to closed; its mount was unregistered.
    Closed,
}

impl Transition {
    /// `true` for [`Transition::Opened`].
    pub fn opened(self) -> bool {
        self == Self::Opened
    }

    /// `true` for [`Transition::Closed`].
    pub fn closed(self) -> bool {
        self == Self::Closed
    }
}

/// Outcome of offering a trigger-phase event to a controller.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TriggerResponse {
    /// Open-state change, if any.
    pub transition: Transition,
    /// The host must call `preventDefault` (suppress the native context
    /// menu) for this event.
    pub prevent_default: bool,
}

impl TriggerResponse {
    const NONE: Self = Self {
        transition: Transition::None,
        prevent_default: false,
    };
}

/// One overlay instance: triggers, open state, mount node, Escape binding.
///
/// The state machine is Closed ⇄ Open; re-opening is a transition back, not
/// a new instance, and the instance's [`PopoverId`] is stable throughout.
/// See the crate docs for the dispatch protocol the host drives.
#[derive(Debug)]
pub struct PopoverController<K> {
    id: PopoverId,
    placement: Placement,
    anchor: K,
    triggers: SmallVec<[Trigger<K>; 2]>,
    open: bool,
    mount: Option<K>,
    opened_mouse: Point,
    escape: Option<BindingId>,
    scope: Scope<OverlayContext<K>>,
}

impl<K: Copy + Eq + 'static> PopoverController<K> {
    /// Create a closed controller anchored to `anchor`.
    pub fn new(
        ctx: &mut OverlayContext<K>,
        anchor: K,
        placement: Placement,
        triggers: impl IntoIterator<Item = Trigger<K>>,
    ) -> Self {
        Self {
            id: ctx.next_popover_id(),
            placement,
            anchor,
            triggers: triggers.into_iter().collect(),
            open: false,
            mount: None,
            opened_mouse: Point::ZERO,
            escape: None,
            scope: Scope::new(),
        }
    }

    /// This instance's identity.
    pub fn id(&self) -> PopoverId {
        self.id
    }

    /// `true` while open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The anchor element the popover is positioned relative to.
    pub fn anchor(&self) -> K {
        self.anchor
    }

    /// The placement mode.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// The mount node attached for the current open phase, if any.
    pub fn mount(&self) -> Option<K> {
        self.mount
    }

    /// `true` iff every trigger is hover-based.
    ///
    /// An evasive popover's content must ignore pointer events, so the
    /// pointer can neither re-trigger hover logic on the overlay itself nor
    /// be blocked from the element underneath.
    pub fn evasive(&self) -> bool {
        !self.triggers.is_empty()
            && self
                .triggers
                .iter()
                .all(|trigger| trigger.kind == TriggerKind::Hover)
    }

    /// Feed a pointer move. Drives hover triggers only.
    ///
    /// The popover is open exactly while the pointer is inside some hover
    /// trigger's subtree and no button is held — a drag sweeping across the
    /// trigger opens nothing.
    pub fn on_pointer_move(
        &mut self,
        hover_target: Option<K>,
        ctx: &mut OverlayContext<K>,
        lookup: &impl ParentLookup<K>,
    ) -> Transition {
        let mut has_hover = false;
        let mut over = false;
        for trigger in &self.triggers {
            if trigger.kind == TriggerKind::Hover {
                has_hover = true;
                over = over || contains(trigger.element, hover_target, lookup);
            }
        }
        if !has_hover {
            return Transition::None;
        }
        self.set_open(over && !ctx.pointer.held(), ctx)
    }

    /// Trigger phase: offer a dispatched click / mouse-down / context-menu
    /// event.
    ///
    /// If the event landed in a matching trigger's subtree and nobody
    /// claimed it yet, the popover toggles and claims the event, so the
    /// dismissal phase of this same pass recognizes it. Returns whether the
    /// host must suppress the event's default action.
    pub fn on_trigger_event(
        &mut self,
        kind: TriggerKind,
        pass: PointerPass<K>,
        ctx: &mut OverlayContext<K>,
        lookup: &impl ParentLookup<K>,
    ) -> TriggerResponse {
        if kind == TriggerKind::Hover {
            return TriggerResponse::NONE;
        }

        let mut matched = false;
        let mut prevent_default = false;
        for trigger in &self.triggers {
            if trigger.kind != kind || !contains(trigger.element, pass.target, lookup) {
                continue;
            }
            matched = true;
            if kind == TriggerKind::ContextMenu {
                prevent_default = true;
            }
        }

        let transition = if matched && ctx.claims.claim(pass.event, self.id) {
            self.set_open(!self.open, ctx)
        } else {
            Transition::None
        };
        TriggerResponse {
            transition,
            prevent_default,
        }
    }

    /// Dismissal phase: offer a dispatched mouse-down to an open popover's
    /// outside-interaction check.
    ///
    /// Closes unless one of the keep-open conditions holds: the event is
    /// claimed by this instance (it just opened or toggled us), its target
    /// is inside our mount subtree, or our mount hosts a nested popover and
    /// the event carries no claim (an inner overlay owns interactions we
    /// cannot see from here).
    pub fn on_global_mouse_down(
        &mut self,
        pass: PointerPass<K>,
        ctx: &mut OverlayContext<K>,
        lookup: &impl ParentLookup<K>,
    ) -> Transition {
        if !self.open {
            return Transition::None;
        }

        let claimed_by_self = ctx.claims.is_claimed_by(pass.event, &self.id);
        let inside_mount = self
            .mount
            .is_some_and(|mount| contains(mount, pass.target, lookup));
        let shelters_nested = self
            .mount
            .is_some_and(|mount| ctx.mounts.hosts_nested_popover(mount, self.id, lookup));

        let close = !claimed_by_self
            && !inside_mount
            && (!shelters_nested || ctx.claims.is_claimed(pass.event));
        if close {
            self.set_open(false, ctx)
        } else {
            Transition::None
        }
    }

    /// React to fired key bindings from
    /// [`OverlayContext::dispatch_key`](crate::OverlayContext::dispatch_key).
    ///
    /// Closes when this popover's own Escape binding is among them. Because
    /// bindings dispatch innermost-first and Escape bindings stop
    /// propagation, only the most recently opened popover closes per press.
    pub fn on_key_fired(&mut self, fired: &[BindingId], ctx: &mut OverlayContext<K>) -> Transition {
        match self.escape {
            Some(escape) if fired.contains(&escape) => self.set_open(false, ctx),
            _ => Transition::None,
        }
    }

    /// Attach the host-created mount node after a transition to open.
    ///
    /// Registers the node for nested-popover checks and returns the parent
    /// the host must append it under: the nearest ancestor popover mount of
    /// the anchor, or the window's portal root. Unregistration is deferred
    /// to the close/dispose scope.
    pub fn attach_mount(
        &mut self,
        node: K,
        ctx: &mut OverlayContext<K>,
        lookup: &impl ParentLookup<K>,
    ) -> K {
        let parent = ctx
            .mounts
            .mount_parent(Some(self.anchor), ctx.portal(), lookup);
        ctx.mounts.register(self.id, node);
        let id = self.id;
        self.scope.defer(move |ctx: &mut OverlayContext<K>| {
            ctx.mounts.unregister(id);
        });
        self.mount = Some(node);
        parent
    }

    /// Open programmatically, as if a trigger fired.
    pub fn open(&mut self, ctx: &mut OverlayContext<K>) -> Transition {
        self.set_open(true, ctx)
    }

    /// Close programmatically.
    pub fn close(&mut self, ctx: &mut OverlayContext<K>) -> Transition {
        self.set_open(false, ctx)
    }

    /// Tear the instance down.
    ///
    /// Runs the same scope cleanups closing does; disposing twice, or
    /// disposing an instance that never opened, is a no-op.
    pub fn dispose(&mut self, ctx: &mut OverlayContext<K>) {
        self.set_open(false, ctx);
    }

    /// Resolve the overlay position from current geometry.
    ///
    /// `anchor_origin`/`anchor_size` come from the geometry observers
    /// watching the anchor, `content_size` from the one watching the mounted
    /// content. Mouse-anchored placements read the cursor sampled at open
    /// time, or the live cursor for [`Placement::Mouse`].
    pub fn position(
        &self,
        anchor_origin: Point,
        anchor_size: Size,
        content_size: Size,
        viewport: Size,
        ctx: &OverlayContext<K>,
    ) -> AnchoredPosition {
        let mouse = if self.placement.tracks_mouse() {
            ctx.pointer.position()
        } else {
            self.opened_mouse
        };
        resolve(
            self.placement,
            &PlacementInput {
                anchor_origin,
                anchor_size,
                content_size,
                mouse,
                viewport,
            },
        )
    }

    fn set_open(&mut self, open: bool, ctx: &mut OverlayContext<K>) -> Transition {
        if open == self.open {
            return Transition::None;
        }
        self.open = open;
        if open {
            self.opened_mouse = ctx.pointer.position();
            if self.triggers.iter().any(|t| t.kind != TriggerKind::Hover) {
                let binding = ctx.bindings.bind(
                    "Escape",
                    BindOptions {
                        stop_propagation: true,
                        ..BindOptions::default()
                    },
                );
                self.escape = Some(binding);
                self.scope.defer(move |ctx: &mut OverlayContext<K>| {
                    ctx.bindings.unbind(binding);
                });
            }
            Transition::Opened
        } else {
            self.scope.dispose(ctx);
            self.escape = None;
            self.mount = None;
            Transition::Closed
        }
    }
}
