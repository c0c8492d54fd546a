// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dropdown policy over the popover machinery.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use thicket_placement::Placement;

use crate::context::OverlayContext;
use crate::simple::{SimplePopover, SimplePopoverOptions};
use crate::controller::TriggerKind;

/// A select-like control: mouse-down trigger, bottom placement, options
/// list, and the anchor's width inherited by the overlay.
///
/// The dropdown is a controlled component: [`Dropdown::choose`] reports the
/// chosen option and closes, but the host decides whether to commit it via
/// [`Dropdown::set_value`], same as it would against any external state.
#[derive(Debug)]
pub struct Dropdown<K, T> {
    popover: SimplePopover<K>,
    options: Vec<T>,
    aliases: Option<Vec<String>>,
    value: T,
}

impl<K: Copy + Eq + 'static, T: Clone + PartialEq> Dropdown<K, T> {
    /// Create a dropdown whose input row is `child`.
    pub fn new(ctx: &mut OverlayContext<K>, child: K, options: Vec<T>, value: T) -> Self {
        Self::with_placement(ctx, child, options, value, Placement::Bottom)
    }

    /// Create with a non-default placement (e.g. opening upward).
    pub fn with_placement(
        ctx: &mut OverlayContext<K>,
        child: K,
        options: Vec<T>,
        value: T,
        placement: Placement,
    ) -> Self {
        Self {
            popover: SimplePopover::new(
                ctx,
                child,
                SimplePopoverOptions {
                    trigger: TriggerKind::MouseDown,
                    placement,
                    inherit_width: true,
                    ..SimplePopoverOptions::default()
                },
            ),
            options,
            aliases: None,
            value,
        }
    }

    /// Display labels to use instead of each option's `Display` form.
    pub fn with_aliases(mut self, aliases: Vec<String>) -> Self {
        self.aliases = Some(aliases);
        self
    }

    /// The current value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Commit a value (typically one returned by [`Dropdown::choose`]).
    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }

    /// The options on offer.
    pub fn options(&self) -> &[T] {
        &self.options
    }

    /// `true` while the option list is open.
    pub fn is_open(&self) -> bool {
        self.popover.is_open()
    }

    /// Choose the `index`-th option: closes the list and returns the option
    /// for the host to commit. `None` for an out-of-range index.
    pub fn choose(&mut self, index: usize, ctx: &mut OverlayContext<K>) -> Option<T> {
        let option = self.options.get(index)?.clone();
        self.popover.close(ctx);
        Some(option)
    }

    /// Access the underlying popover for event dispatch and positioning.
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

impl<K: Copy + Eq + 'static, T: Clone + PartialEq + fmt::Display> Dropdown<K, T> {
    /// One label per option: the alias when provided, the `Display` form
    /// otherwise.
    pub fn labels(&self) -> Vec<String> {
        match &self.aliases {
            Some(aliases) => aliases.clone(),
            None => self.options.iter().map(ToString::to_string).collect(),
        }
    }

    /// The label of the current value.
    ///
    /// `None` when the value is not among the options (or has no alias);
    /// hosts typically render an "invalid value" placeholder then.
    pub fn current_label(&self) -> Option<String> {
        let index = self.options.iter().position(|option| *option == self.value)?;
        match &self.aliases {
            Some(aliases) => aliases.get(index).cloned(),
            None => Some(self.value.to_string()),
        }
    }
}
