// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cross-instance scenarios: ownership, nesting, Escape shadowing, teardown.
//!
//! The host here is a tiny fixed node tree plus the two-phase dispatch the
//! crate docs describe: trigger phase over every controller, then dismissal
//! phase, then claim expiry and mount attachment.

use std::collections::HashMap;

use thicket_input::{KeyPass, PointerPass};
use thicket_popover::{
    OverlayContext, Placement, PopoverController, Transition, Trigger, TriggerKind,
};

/// Node keys:
///
/// ```text
/// 0 portal root
/// 10, 11      two trigger buttons
/// 100         parent popover mount (child of portal)
/// 101         a row rendered inside the parent popover
/// 200         child popover mount
/// 201         content inside the child popover
/// ```
struct Tree {
    parents: HashMap<u32, u32>,
}

impl Tree {
    fn new() -> Self {
        let mut parents = HashMap::new();
        parents.insert(100_u32, 0_u32);
        parents.insert(101, 100);
        parents.insert(200, 100);
        parents.insert(201, 200);
        Self { parents }
    }

    fn lookup(&self) -> impl Fn(u32) -> Option<u32> + '_ {
        |node| self.parents.get(&node).copied()
    }
}

/// One full mouse-down pass: trigger phase, dismissal phase, claim expiry,
/// and mount attachment for whoever opened.
fn mouse_down(
    ctx: &mut OverlayContext<u32>,
    controllers: &mut [&mut PopoverController<u32>],
    target: u32,
    lookup: &impl Fn(u32) -> Option<u32>,
    next_mount: &mut u32,
) {
    let pass = PointerPass {
        event: ctx.events.next(),
        target: Some(target),
    };
    let mut opened: Vec<usize> = Vec::new();
    for (index, controller) in controllers.iter_mut().enumerate() {
        let response = controller.on_trigger_event(TriggerKind::MouseDown, pass, ctx, lookup);
        if response.transition.opened() {
            opened.push(index);
        }
    }
    for controller in controllers.iter_mut() {
        controller.on_global_mouse_down(pass, ctx, lookup);
    }
    ctx.claims.expire(pass.event);
    for index in opened {
        if controllers[index].is_open() {
            let mount = *next_mount;
            *next_mount += 1;
            controllers[index].attach_mount(mount, ctx, lookup);
        }
    }
}

#[test]
fn the_opening_event_does_not_dismiss_its_own_popover() {
    let tree = Tree::new();
    let lookup = tree.lookup();
    let mut ctx: OverlayContext<u32> = OverlayContext::new(0);
    let mut popover =
        PopoverController::new(&mut ctx, 10, Placement::Bottom, [Trigger::mouse_down(10)]);
    let mut next_mount = 300;

    mouse_down(&mut ctx, &mut [&mut popover], 10, &lookup, &mut next_mount);

    assert!(popover.is_open());
    popover.dispose(&mut ctx);
}

#[test]
fn an_opening_event_still_closes_unrelated_popovers() {
    let tree = Tree::new();
    let lookup = tree.lookup();
    let mut ctx: OverlayContext<u32> = OverlayContext::new(0);
    let mut first =
        PopoverController::new(&mut ctx, 10, Placement::Bottom, [Trigger::mouse_down(10)]);
    let mut second =
        PopoverController::new(&mut ctx, 11, Placement::Bottom, [Trigger::mouse_down(11)]);
    let mut next_mount = 300;

    mouse_down(
        &mut ctx,
        &mut [&mut first, &mut second],
        10,
        &lookup,
        &mut next_mount,
    );
    assert!(first.is_open());
    assert!(!second.is_open());

    // Opening the second closes the first in the same pass.
    mouse_down(
        &mut ctx,
        &mut [&mut first, &mut second],
        11,
        &lookup,
        &mut next_mount,
    );
    assert!(!first.is_open());
    assert!(second.is_open());

    first.dispose(&mut ctx);
    second.dispose(&mut ctx);
}

#[test]
fn a_plain_outside_click_closes_an_open_popover() {
    let tree = Tree::new();
    let lookup = tree.lookup();
    let mut ctx: OverlayContext<u32> = OverlayContext::new(0);
    let mut popover =
        PopoverController::new(&mut ctx, 10, Placement::Bottom, [Trigger::mouse_down(10)]);
    let mut next_mount = 300;

    mouse_down(&mut ctx, &mut [&mut popover], 10, &lookup, &mut next_mount);
    assert!(popover.is_open());

    // Somewhere else entirely.
    mouse_down(&mut ctx, &mut [&mut popover], 11, &lookup, &mut next_mount);
    assert!(!popover.is_open());
}

#[test]
fn a_click_inside_the_mount_subtree_keeps_the_popover_open() {
    let tree = Tree::new();
    let lookup = tree.lookup();
    let mut ctx: OverlayContext<u32> = OverlayContext::new(0);
    let mut popover =
        PopoverController::new(&mut ctx, 10, Placement::Bottom, [Trigger::mouse_down(10)]);

    popover.open(&mut ctx);
    popover.attach_mount(100, &mut ctx, &lookup);

    let mut next_mount = 300;
    mouse_down(&mut ctx, &mut [&mut popover], 101, &lookup, &mut next_mount);
    assert!(popover.is_open());

    popover.dispose(&mut ctx);
}

#[test]
fn a_mouse_down_inside_a_child_popover_does_not_close_the_parent() {
    let tree = Tree::new();
    let lookup = tree.lookup();
    let mut ctx: OverlayContext<u32> = OverlayContext::new(0);

    let mut parent =
        PopoverController::new(&mut ctx, 10, Placement::Bottom, [Trigger::mouse_down(10)]);
    parent.open(&mut ctx);
    let parent_of_mount = parent.attach_mount(100, &mut ctx, &lookup);
    assert_eq!(parent_of_mount, 0, "top-level popover mounts at the portal");

    // The child popover is anchored to a row inside the parent's content, so
    // its mount lands under the parent's mount.
    let mut child =
        PopoverController::new(&mut ctx, 101, Placement::Right, [Trigger::mouse_down(101)]);
    child.open(&mut ctx);
    let child_parent = child.attach_mount(200, &mut ctx, &lookup);
    assert_eq!(child_parent, 100, "nested popover mounts inside its parent");

    // Click content inside the child: neither popover closes, even though the
    // target is not inside the parent's own content.
    let mut next_mount = 300;
    mouse_down(
        &mut ctx,
        &mut [&mut parent, &mut child],
        201,
        &lookup,
        &mut next_mount,
    );
    assert!(parent.is_open());
    assert!(child.is_open());

    parent.dispose(&mut ctx);
    child.dispose(&mut ctx);
}

#[test]
fn outside_clicks_dismiss_nested_popovers_inside_out() {
    let tree = Tree::new();
    let lookup = tree.lookup();
    let mut ctx: OverlayContext<u32> = OverlayContext::new(0);

    let mut parent =
        PopoverController::new(&mut ctx, 10, Placement::Bottom, [Trigger::mouse_down(10)]);
    parent.open(&mut ctx);
    parent.attach_mount(100, &mut ctx, &lookup);
    let mut child =
        PopoverController::new(&mut ctx, 101, Placement::Right, [Trigger::mouse_down(101)]);
    child.open(&mut ctx);
    child.attach_mount(200, &mut ctx, &lookup);

    // An unclaimed click outside everything: the child closes, but the
    // parent defers to the overlay that was still open inside it.
    let mut next_mount = 300;
    mouse_down(
        &mut ctx,
        &mut [&mut parent, &mut child],
        11,
        &lookup,
        &mut next_mount,
    );
    assert!(!child.is_open());
    assert!(parent.is_open());

    // With the child gone, the next outside click closes the parent.
    mouse_down(
        &mut ctx,
        &mut [&mut parent, &mut child],
        11,
        &lookup,
        &mut next_mount,
    );
    assert!(!parent.is_open());
}

#[test]
fn escape_closes_the_innermost_popover_first() {
    let tree = Tree::new();
    let lookup = tree.lookup();
    let mut ctx: OverlayContext<u32> = OverlayContext::new(0);

    let mut outer =
        PopoverController::new(&mut ctx, 10, Placement::Bottom, [Trigger::mouse_down(10)]);
    outer.open(&mut ctx);
    outer.attach_mount(100, &mut ctx, &lookup);
    let mut inner =
        PopoverController::new(&mut ctx, 101, Placement::Right, [Trigger::mouse_down(101)]);
    inner.open(&mut ctx);
    inner.attach_mount(200, &mut ctx, &lookup);

    let pass = KeyPass {
        now_ms: 0,
        editing: false,
    };
    let fired = ctx.dispatch_key("Escape", pass);
    assert_eq!(outer.on_key_fired(&fired, &mut ctx), Transition::None);
    assert_eq!(inner.on_key_fired(&fired, &mut ctx), Transition::Closed);
    assert!(outer.is_open());

    let fired = ctx.dispatch_key("Escape", pass);
    assert_eq!(outer.on_key_fired(&fired, &mut ctx), Transition::Closed);
    assert_eq!(inner.on_key_fired(&fired, &mut ctx), Transition::None);

    outer.dispose(&mut ctx);
    inner.dispose(&mut ctx);
}

#[test]
fn teardown_leaves_no_residual_registrations() {
    let tree = Tree::new();
    let lookup = tree.lookup();
    let mut ctx: OverlayContext<u32> = OverlayContext::new(0);

    let mut popover =
        PopoverController::new(&mut ctx, 10, Placement::Bottom, [Trigger::mouse_down(10)]);
    popover.open(&mut ctx);
    popover.attach_mount(100, &mut ctx, &lookup);

    popover.dispose(&mut ctx);
    popover.dispose(&mut ctx);

    assert!(ctx.bindings.is_empty());
    assert!(!ctx.mounts.is_mount(100));
    assert!(ctx.claims.is_empty());

    // Escape after teardown fires nothing and touches nothing.
    let fired = ctx.dispatch_key(
        "Escape",
        KeyPass {
            now_ms: 0,
            editing: false,
        },
    );
    assert!(fired.is_empty());
    assert_eq!(popover.on_key_fired(&fired, &mut ctx), Transition::None);
}
