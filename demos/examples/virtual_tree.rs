// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A virtualized tree listing: flatten, then window the visible rows.
//!
//! Run:
//! - `cargo run -p thicket_demos --example virtual_tree`

use thicket_list::{FixedStrip, TreeModel, TreeRow};

fn main() {
    let files = [
        "src/lib.rs",
        "src/parser/expr.rs",
        "src/parser/stmt.rs",
        "tests/parser.rs",
        "README.md",
        "Cargo.toml",
    ];

    let mut tree = TreeModel::new();
    tree.expand_all();
    let rows = tree.flatten(
        &files,
        |file| file.split('/').map(str::to_string).collect(),
        |file| *file == "src/parser/stmt.rs",
    );

    // A 3-row viewport over 24px rows, scrolled down one row.
    let strip = FixedStrip::new(rows.len(), 24.0);
    let window = strip.window(24.0, 72.0);
    println!(
        "rows {}..{} of {} ({}px of content)",
        window.start,
        window.end,
        rows.len(),
        strip.content_extent()
    );

    for (index, row) in rows.iter().enumerate() {
        let realized = index >= window.start && index < window.end;
        let marker = if realized { '*' } else { ' ' };
        match row {
            TreeRow::Folder {
                name,
                depth,
                expanded,
                selected,
                ..
            } => {
                let arrow = if *expanded { 'v' } else { '>' };
                let sel = if *selected { " (selected within)" } else { "" };
                println!("{marker} {:indent$}{arrow} {name}/{sel}", "", indent = depth * 2);
            }
            TreeRow::Item {
                index: file,
                depth,
                selected,
            } => {
                let sel = if *selected { " <-" } else { "" };
                println!("{marker} {:indent$}{}{sel}", "", files[*file], indent = depth * 2);
            }
        }
    }

    assert_eq!(window.len(), 3);
}
