// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path-grouped tree flattening with expansion state.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashSet;

/// One visible row of a flattened tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeRow {
    /// A folder header.
    Folder {
        /// The folder's own name (last path segment).
        name: String,
        /// Full path from the root.
        path: Vec<String>,
        /// Nesting depth; the root's children are at depth 1.
        depth: usize,
        /// Whether the folder's children are currently shown.
        expanded: bool,
        /// Whether some item inside the folder is selected.
        selected: bool,
    },
    /// An item row.
    Item {
        /// Index into the item slice given to [`TreeModel::flatten`].
        index: usize,
        /// Nesting depth of the folder the item sits in.
        depth: usize,
        /// Whether this item is selected.
        selected: bool,
    },
}

/// Expansion state plus flattening for path-grouped items.
///
/// Items group by caller-provided path parts: all parts before the last are
/// folder names, the last is the item's own name. Flattening emits, per
/// folder level, the folder header, then subfolders in sorted name order
/// (each flattened recursively), then the folder's direct items.
///
/// Folders containing a selected item expand themselves and stay expanded —
/// selection must never be hidden. [`TreeModel::collapse_all`] resets to
/// exactly that baseline.
#[derive(Clone, Debug, Default)]
pub struct TreeModel {
    expanded: HashSet<Vec<String>>,
    expand_all_pending: bool,
}

impl TreeModel {
    /// Create with every folder collapsed.
    pub fn new() -> Self {
        Self {
            expanded: HashSet::new(),
            expand_all_pending: false,
        }
    }

    /// Expand the folder at `path`.
    pub fn expand<I: Into<String>>(&mut self, path: impl IntoIterator<Item = I>) {
        self.expanded.insert(path.into_iter().map(Into::into).collect());
    }

    /// Collapse the folder at `path`.
    ///
    /// A folder sheltering a selected item re-expands at the next flatten.
    pub fn collapse<I: Into<String>>(&mut self, path: impl IntoIterator<Item = I>) {
        let path: Vec<String> = path.into_iter().map(Into::into).collect();
        self.expanded.remove(&path);
    }

    /// Expand every folder encountered by the next flatten.
    pub fn expand_all(&mut self) {
        self.expand_all_pending = true;
    }

    /// Collapse everything except folders sheltering a selected item.
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
        self.expand_all_pending = false;
    }

    /// Flatten `items` into visible rows.
    ///
    /// `parts_of` yields an item's grouping path (folders plus its own
    /// name); `is_selected` marks the items whose folders must stay open.
    pub fn flatten<T>(
        &mut self,
        items: &[T],
        parts_of: impl Fn(&T) -> Vec<String>,
        is_selected: impl Fn(&T) -> bool,
    ) -> Vec<TreeRow> {
        let parts: Vec<Vec<String>> = items.iter().map(&parts_of).collect();
        let selected: Vec<bool> = items.iter().map(&is_selected).collect();
        let indices: Vec<usize> = (0..items.len()).collect();

        let mut rows = Vec::new();
        let mut path = Vec::new();
        self.flatten_group(&mut rows, &parts, &selected, indices, &mut path, true);
        self.expand_all_pending = false;
        rows
    }

    fn flatten_group(
        &mut self,
        rows: &mut Vec<TreeRow>,
        parts: &[Vec<String>],
        selected: &[bool],
        indices: Vec<usize>,
        path: &mut Vec<String>,
        visible: bool,
    ) {
        let depth = path.len();
        let mut child_visible = visible;
        if depth > 0 {
            let any_selected = indices.iter().any(|&index| selected[index]);
            if self.expand_all_pending || any_selected {
                self.expanded.insert(path.clone());
            }
            let expanded = self.expanded.contains(path.as_slice());
            if visible {
                rows.push(TreeRow::Folder {
                    name: path.last().cloned().unwrap_or_default(),
                    path: path.clone(),
                    depth,
                    expanded,
                    selected: any_selected,
                });
            }
            child_visible = visible && expanded;
        }

        let mut direct: Vec<usize> = Vec::new();
        let mut folders: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for index in indices {
            let item_parts = &parts[index];
            if item_parts.len() > depth + 1 && !item_parts[depth].is_empty() {
                folders
                    .entry(item_parts[depth].clone())
                    .or_default()
                    .push(index);
            } else {
                direct.push(index);
            }
        }

        for (name, group) in folders {
            path.push(name);
            self.flatten_group(rows, parts, selected, group, path, child_visible);
            path.pop();
        }

        if child_visible {
            for index in direct {
                rows.push(TreeRow::Item {
                    index,
                    depth,
                    selected: selected[index],
                });
            }
        }
    }
}
