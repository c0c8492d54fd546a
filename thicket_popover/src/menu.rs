// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Context-menu policy over the popover machinery.

use alloc::string::String;
use alloc::vec::Vec;

use thicket_input::PointerPass;
use thicket_placement::Placement;

use crate::context::OverlayContext;
use crate::controller::{Transition, TriggerKind, TriggerResponse};
use crate::mount::ParentLookup;
use crate::simple::{SimplePopover, SimplePopoverOptions};

/// One entry in a context menu.
#[derive(Clone, Debug)]
pub struct MenuEntry {
    /// Label shown to the user.
    pub label: String,
    /// Shown but not selectable.
    pub disabled: bool,
    /// Not shown at all.
    pub hidden: bool,
}

impl MenuEntry {
    /// A plain selectable entry.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
            hidden: false,
        }
    }

    /// Mark the entry disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Mark the entry hidden.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

/// What a menu selection should act on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection<T> {
    /// Index into [`ContextMenu::visible_entries`].
    pub entry: usize,
    /// The items to apply the action to. When the menu's own target is part
    /// of the current multi-selection, the whole selection is included with
    /// the target first; otherwise just the target.
    pub targets: Vec<T>,
}

/// A right-click menu: context-menu trigger, cursor placement, an entry
/// list, and selection-set policy.
///
/// `T` is whatever the surrounding UI selects (row ids, file handles).
/// A menu whose entries are all hidden degrades to nothing: its trigger
/// ignores the context-menu gesture entirely and the host renders only the
/// plain child.
#[derive(Debug)]
pub struct ContextMenu<K, T> {
    popover: SimplePopover<K>,
    entries: Vec<MenuEntry>,
    target: Option<T>,
    selection: Vec<T>,
}

impl<K: Copy + Eq + 'static, T: Clone + PartialEq> ContextMenu<K, T> {
    /// Create a menu around `child` with the given entries.
    pub fn new(ctx: &mut OverlayContext<K>, child: K, entries: Vec<MenuEntry>) -> Self {
        Self {
            popover: SimplePopover::new(
                ctx,
                child,
                SimplePopoverOptions {
                    trigger: TriggerKind::ContextMenu,
                    placement: Placement::InitialMouse,
                    ..SimplePopoverOptions::default()
                },
            ),
            entries,
            target: None,
            selection: Vec::new(),
        }
    }

    /// Replace the entry list.
    pub fn set_entries(&mut self, entries: Vec<MenuEntry>) {
        self.entries = entries;
    }

    /// The item the menu was opened on.
    pub fn set_target(&mut self, target: Option<T>) {
        self.target = target;
    }

    /// The surrounding multi-selection, if any.
    pub fn set_selection(&mut self, selection: Vec<T>) {
        self.selection = selection;
    }

    /// The entries to render, hidden ones filtered out.
    pub fn visible_entries(&self) -> impl Iterator<Item = &MenuEntry> {
        self.entries.iter().filter(|entry| !entry.hidden)
    }

    /// `true` when at least one entry would be shown.
    pub fn has_entries(&self) -> bool {
        self.entries.iter().any(|entry| !entry.hidden)
    }

    /// `true` while the menu overlay is open.
    pub fn is_open(&self) -> bool {
        self.popover.is_open()
    }

    /// Select the `index`-th visible entry.
    ///
    /// Returns the selection to act on and closes the menu, or `None` for a
    /// disabled entry or an index past the visible list.
    pub fn select(&mut self, index: usize, ctx: &mut OverlayContext<K>) -> Option<Selection<T>> {
        let entry = self.visible_entries().nth(index)?;
        if entry.disabled {
            return None;
        }

        let targets = match &self.target {
            Some(target) if self.selection.contains(target) => {
                let mut targets = Vec::with_capacity(self.selection.len());
                targets.push(target.clone());
                targets.extend(
                    self.selection
                        .iter()
                        .filter(|item| *item != target)
                        .cloned(),
                );
                targets
            }
            Some(target) => {
                let mut targets = Vec::with_capacity(1);
                targets.push(target.clone());
                targets
            }
            None => Vec::new(),
        };

        self.popover.close(ctx);
        Some(Selection {
            entry: index,
            targets,
        })
    }

    /// See [`SimplePopover::on_trigger_event`]. A menu without visible
    /// entries ignores the gesture (no claim, no suppressed default).
    pub fn on_trigger_event(
        &mut self,
        kind: TriggerKind,
        pass: PointerPass<K>,
        ctx: &mut OverlayContext<K>,
        lookup: &impl ParentLookup<K>,
    ) -> TriggerResponse {
        if !self.has_entries() {
            return TriggerResponse {
                transition: Transition::None,
                prevent_default: false,
            };
        }
        self.popover.on_trigger_event(kind, pass, ctx, lookup)
    }

    /// Access the underlying popover for the remaining dispatch calls.
    pub fn popover(&self) -> &SimplePopover<K> {
        &self.popover
    }

    /// Mutable access to the underlying popover.
    pub fn popover_mut(&mut self) -> &mut SimplePopover<K> {
        &mut self.popover
    }

    /// See [`SimplePopover::dispose`].
    pub fn dispose(&mut self, ctx: &mut OverlayContext<K>) {
        self.popover.dispose(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn flat(_: u32) -> Option<u32> {
        None
    }

    fn open_menu(
        menu: &mut ContextMenu<u32, u32>,
        ctx: &mut OverlayContext<u32>,
    ) -> TriggerResponse {
        let pass = PointerPass {
            event: ctx.events.next(),
            target: Some(1),
        };
        menu.on_trigger_event(TriggerKind::ContextMenu, pass, ctx, &flat)
    }

    #[test]
    fn opens_at_the_cursor_and_suppresses_the_native_menu() {
        let mut ctx: OverlayContext<u32> = OverlayContext::new(0);
        let mut menu: ContextMenu<u32, u32> =
            ContextMenu::new(&mut ctx, 1, vec![MenuEntry::new("Rename")]);

        let response = open_menu(&mut menu, &mut ctx);
        assert!(response.prevent_default);
        assert!(menu.is_open());
        menu.dispose(&mut ctx);
    }

    #[test]
    fn hidden_entries_are_filtered_and_an_empty_menu_degrades() {
        let mut ctx: OverlayContext<u32> = OverlayContext::new(0);
        let mut menu: ContextMenu<u32, u32> = ContextMenu::new(
            &mut ctx,
            1,
            vec![
                MenuEntry::new("Visible"),
                MenuEntry::new("Gone").hidden(),
            ],
        );
        assert_eq!(menu.visible_entries().count(), 1);

        menu.set_entries(vec![MenuEntry::new("Gone").hidden()]);
        assert!(!menu.has_entries());

        let response = open_menu(&mut menu, &mut ctx);
        assert!(!response.prevent_default);
        assert!(!menu.is_open());
    }

    #[test]
    fn selecting_closes_and_reports_the_target() {
        let mut ctx: OverlayContext<u32> = OverlayContext::new(0);
        let mut menu: ContextMenu<u32, u32> =
            ContextMenu::new(&mut ctx, 1, vec![MenuEntry::new("Delete")]);
        menu.set_target(Some(7));

        open_menu(&mut menu, &mut ctx);
        let selection = menu.select(0, &mut ctx).expect("entry is selectable");

        assert_eq!(selection.entry, 0);
        assert_eq!(selection.targets, vec![7]);
        assert!(!menu.is_open());
    }

    #[test]
    fn a_target_inside_the_selection_acts_on_the_whole_selection() {
        let mut ctx: OverlayContext<u32> = OverlayContext::new(0);
        let mut menu: ContextMenu<u32, u32> =
            ContextMenu::new(&mut ctx, 1, vec![MenuEntry::new("Archive")]);
        menu.set_target(Some(7));
        menu.set_selection(vec![3, 7, 9]);

        let selection = menu.select(0, &mut ctx).expect("entry is selectable");
        // Target first, then the rest of the selection in order.
        assert_eq!(selection.targets, vec![7, 3, 9]);
    }

    #[test]
    fn a_target_outside_the_selection_acts_alone() {
        let mut ctx: OverlayContext<u32> = OverlayContext::new(0);
        let mut menu: ContextMenu<u32, u32> =
            ContextMenu::new(&mut ctx, 1, vec![MenuEntry::new("Archive")]);
        menu.set_target(Some(4));
        menu.set_selection(vec![3, 7, 9]);

        let selection = menu.select(0, &mut ctx).expect("entry is selectable");
        assert_eq!(selection.targets, vec![4]);
    }

    #[test]
    fn disabled_entries_do_not_select() {
        let mut ctx: OverlayContext<u32> = OverlayContext::new(0);
        let mut menu: ContextMenu<u32, u32> = ContextMenu::new(
            &mut ctx,
            1,
            vec![MenuEntry::new("Read-only").disabled()],
        );

        open_menu(&mut menu, &mut ctx);
        assert_eq!(menu.select(0, &mut ctx), None);
        // The menu stays open after a refused selection.
        assert!(menu.is_open());
        menu.dispose(&mut ctx);
    }
}
