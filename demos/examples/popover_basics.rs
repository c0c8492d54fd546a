// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A popover's full life: open on click, position, outside-dismiss, Escape.
//!
//! The "host" here is a handful of hard-coded nodes and geometry; a real
//! integration feeds the same calls from its event loop and layout tree.
//!
//! Run:
//! - `cargo run -p thicket_demos --example popover_basics`

use std::collections::HashMap;

use kurbo::{Rect, Size, Vec2};
use thicket_geometry::{ElementPosition, ElementSize, GeometrySource};
use thicket_input::{KeyPass, PointerPass};
use thicket_popover::{OverlayContext, Placement, PopoverController, Trigger, TriggerKind};

const PORTAL: u32 = 0;
const BUTTON: u32 = 10;
const MOUNT: u32 = 100;
const ELSEWHERE: u32 = 42;

struct Layout {
    rects: HashMap<u32, Rect>,
}

impl GeometrySource<u32> for Layout {
    fn viewport_rect(&self, element: &u32) -> Option<Rect> {
        self.rects.get(element).copied()
    }

    fn element_scroll(&self, _element: &u32) -> Vec2 {
        Vec2::ZERO
    }

    fn page_scroll(&self) -> Vec2 {
        Vec2::ZERO
    }

    fn viewport(&self) -> Size {
        Size::new(800.0, 600.0)
    }
}

fn main() {
    let layout = Layout {
        rects: HashMap::from([
            (BUTTON, Rect::new(100.0, 500.0, 150.0, 520.0)),
            (MOUNT, Rect::new(0.0, 0.0, 30.0, 40.0)),
        ]),
    };
    let parent_of = |node: u32| (node == MOUNT).then_some(PORTAL);

    let mut ctx: OverlayContext<u32> = OverlayContext::new(PORTAL);
    let mut popover =
        PopoverController::new(&mut ctx, BUTTON, Placement::Bottom, [Trigger::click(BUTTON)]);

    let mut anchor_position = ElementPosition::new();
    let mut anchor_size = ElementSize::new();
    anchor_position.retarget(Some(BUTTON), &layout);
    anchor_size.retarget(Some(BUTTON), &layout);
    let mut content_size = ElementSize::new();

    // Click the button: trigger phase, dismissal phase, claim expiry.
    let pass = PointerPass {
        event: ctx.events.next(),
        target: Some(BUTTON),
    };
    popover.on_trigger_event(TriggerKind::Click, pass, &mut ctx, &parent_of);
    popover.on_global_mouse_down(pass, &mut ctx, &parent_of);
    ctx.claims.expire(pass.event);
    assert!(popover.is_open(), "the opening click must not self-dismiss");
    println!("== after click ==\n  open: {}", popover.is_open());

    // The host creates the mount node and measures the content.
    let parent = popover.attach_mount(MOUNT, &mut ctx, &parent_of);
    content_size.retarget(Some(MOUNT), &layout);
    println!("  mounted under node {parent}");

    let position = popover.position(
        anchor_position.get(),
        anchor_size.get(),
        content_size.get(),
        layout.viewport(),
        &ctx,
    );
    println!("  style: {position}");
    assert_eq!(position.top, Some(525.0));

    // A mousedown somewhere else closes it.
    let pass = PointerPass {
        event: ctx.events.next(),
        target: Some(ELSEWHERE),
    };
    popover.on_trigger_event(TriggerKind::Click, pass, &mut ctx, &parent_of);
    popover.on_global_mouse_down(pass, &mut ctx, &parent_of);
    ctx.claims.expire(pass.event);
    println!("== after outside click ==\n  open: {}", popover.is_open());
    assert!(!popover.is_open());

    // Re-open, then dismiss with Escape.
    let pass = PointerPass {
        event: ctx.events.next(),
        target: Some(BUTTON),
    };
    popover.on_trigger_event(TriggerKind::Click, pass, &mut ctx, &parent_of);
    popover.on_global_mouse_down(pass, &mut ctx, &parent_of);
    ctx.claims.expire(pass.event);
    popover.attach_mount(MOUNT, &mut ctx, &parent_of);

    ctx.key_state.on_key_down("Escape");
    let fired = ctx.dispatch_key(
        "Escape",
        KeyPass {
            now_ms: 0,
            editing: false,
        },
    );
    popover.on_key_fired(&fired, &mut ctx);
    ctx.key_state.on_key_up("Escape");
    println!("== after Escape ==\n  open: {}", popover.is_open());
    assert!(!popover.is_open());

    popover.dispose(&mut ctx);
    assert!(ctx.bindings.is_empty());
}
