// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driving the coalescer from a host event loop.
//!
//! The host owns the clock, the timer, and the operation; the coalescer
//! decides what runs and who gets the results. Here the "operation" is a
//! pretend name lookup and the "timer" is a loop over milliseconds.
//!
//! Run:
//! - `cargo run -p thicket_demos --example coalesce_basics`

use std::collections::HashMap;

use thicket_coalesce::{Batch, CoalesceOptions, Coalescer, Deduped, Submit, Ticket};

/// One multi-input "network" call.
fn lookup_names(ids: &[u32]) -> Vec<String> {
    println!("  operation called with {ids:?}");
    ids.iter().map(|id| format!("user-{id}")).collect()
}

fn run_batch(
    coalescer: &mut Coalescer<u32, String>,
    batch: Batch<u32>,
    settled: &mut HashMap<Ticket, String>,
) {
    let outputs = lookup_names(&batch.inputs);
    for (ticket, output) in coalescer.resolve(batch.id, outputs) {
        settled.insert(ticket, output);
    }
}

fn main() {
    let mut names: Coalescer<u32, String> = Coalescer::new(CoalesceOptions {
        cache: true,
        size: Some(3),
        timeout_ms: 50,
    });
    let mut settled: HashMap<Ticket, String> = HashMap::new();
    let mut tickets = Vec::new();

    println!("== debounced batch ==");
    // Two requests land inside the window; a duplicate rides along.
    for (input, at) in [(1_u32, 0_u64), (2, 10), (1, 20)] {
        match names.submit(input, at) {
            Submit::Pending(ticket) => tickets.push(ticket),
            Submit::Flush(ticket, batch) => {
                tickets.push(ticket);
                run_batch(&mut names, batch, &mut settled);
            }
            Submit::Cached(name) => println!("  cached: {name}"),
        }
    }

    // The host's timer fires at the deadline.
    let deadline = names.deadline().expect("a batch is staged");
    if let Some(batch) = names.take_due(deadline) {
        run_batch(&mut names, batch, &mut settled);
    }
    for ticket in &tickets {
        println!("  {ticket:?} -> {}", settled[ticket]);
    }
    // Three callers, one operation call, two distinct inputs.
    assert_eq!(tickets.len(), 3);

    println!("== size threshold ==");
    // Three distinct keys hit `size: 3` and flush without waiting.
    for (input, at) in [(10_u32, 100_u64), (11, 101)] {
        match names.submit(input, at) {
            Submit::Pending(ticket) => tickets.push(ticket),
            other => panic!("no flush expected yet, got {other:?}"),
        }
    }
    match names.submit(12, 102) {
        Submit::Flush(_, batch) => {
            assert_eq!(batch.inputs, vec![10, 11, 12]);
            run_batch(&mut names, batch, &mut settled);
        }
        other => panic!("expected the size threshold to flush, got {other:?}"),
    }

    println!("== cache ==");
    match names.submit(1, 500) {
        Submit::Cached(name) => println!("  cached: {name}"),
        other => panic!("expected a cached result, got {other:?}"),
    }

    println!("== deduped ==");
    let mut avatar: Deduped<&str, &str> = Deduped::new();
    let Submit::Flush(first, batch) = avatar.submit("robin") else {
        panic!("first submission must flush");
    };
    // A second caller before settlement joins the same flight.
    let Submit::Pending(second) = avatar.submit("robin") else {
        panic!("concurrent submission must ride along");
    };
    let outcomes = avatar.resolve(batch.id, "robin.png");
    assert_eq!(outcomes, vec![(first, "robin.png"), (second, "robin.png")]);
    println!("  both callers settled with {:?}", outcomes[0].1);
}
