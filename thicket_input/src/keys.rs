// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Held-key tracking and chord bindings with shadowing dispatch.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use hashbrown::HashSet;
use smallvec::SmallVec;

/// The set of key names currently held down.
///
/// Keys are the host's layout-resolved names (`"a"`, `"Control"`, `"Escape"`).
/// A window blur releases every held key at once, since the matching up
/// events will be delivered to some other window.
#[derive(Debug, Default)]
pub struct KeyState {
    held: HashSet<String>,
}

impl KeyState {
    /// Create with no keys held.
    pub fn new() -> Self {
        Self {
            held: HashSet::new(),
        }
    }

    /// Record a key press.
    pub fn on_key_down(&mut self, key: &str) {
        self.held.insert(key.to_string());
    }

    /// Record a key release.
    pub fn on_key_up(&mut self, key: &str) {
        self.held.remove(key);
    }

    /// The window lost focus; release everything.
    ///
    /// Returns the keys that were held so the host can synthesize release
    /// notifications for listeners that track individual keys.
    pub fn on_blur(&mut self) -> Vec<String> {
        self.held.drain().collect()
    }

    /// `true` while `key` is held.
    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }
}

/// A parsed key chord: zero or more modifiers and one action key.
///
/// The textual form joins parts with `+`, so `"Control+k"` means the
/// `Control` key held while `k` goes down. An empty part names the literal
/// `+` key, so `"Control++"` is `Control` plus `+`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyChord {
    parts: Vec<String>,
}

impl KeyChord {
    /// Parse the textual chord form.
    pub fn parse(chord: &str) -> Self {
        let parts = chord
            .split('+')
            .map(|part| {
                if part.is_empty() {
                    "+".to_string()
                } else {
                    part.to_string()
                }
            })
            .collect();
        Self { parts }
    }

    /// The key whose press fires the chord.
    pub fn action(&self) -> &str {
        // `parse` always produces at least one part, even for "".
        self.parts.last().map(String::as_str).unwrap_or("+")
    }

    /// The keys that must already be held.
    pub fn modifiers(&self) -> &[String] {
        &self.parts[..self.parts.len().saturating_sub(1)]
    }

    /// Does a press of `key` with `held` modifiers fire this chord?
    pub fn matches(&self, key: &str, held: &KeyState) -> bool {
        self.action() == key && self.modifiers().iter().all(|m| held.is_held(m))
    }
}

/// Handle to one registered binding.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct BindingId(u64);

/// Per-binding dispatch behavior.
#[derive(Copy, Clone, Debug)]
pub struct BindOptions {
    /// Consume the pass: bindings registered earlier do not see the key.
    pub stop_propagation: bool,
    /// After firing, ignore further presses for this many milliseconds.
    pub disable_for_ms: u64,
    /// Fire even while the host reports a text editor focused.
    pub allow_while_editing: bool,
}

impl Default for BindOptions {
    fn default() -> Self {
        Self {
            stop_propagation: false,
            disable_for_ms: 0,
            allow_while_editing: true,
        }
    }
}

/// Per-dispatch context the host supplies with each key press.
#[derive(Copy, Clone, Debug)]
pub struct KeyPass {
    /// Host clock, milliseconds. Only differences matter.
    pub now_ms: u64,
    /// `true` while a text-editing element has focus.
    pub editing: bool,
}

#[derive(Debug)]
struct Binding {
    id: BindingId,
    chord: KeyChord,
    stop_propagation: bool,
    disable_for_ms: u64,
    disabled_until_ms: u64,
    allow_while_editing: bool,
}

/// Chord bindings dispatched most-recent-registration-first.
///
/// Registration order is the nesting order: whoever bound last is innermost
/// and sees the key first. A matching binding with `stop_propagation`
/// consumes the pass for everything registered before it — whether or not
/// its own cooldown let it fire — which is how an inner popover's Escape
/// shadows the outer one's without unbinding it.
#[derive(Debug, Default)]
pub struct KeyBindings {
    bindings: Vec<Binding>,
    next_id: u64,
}

impl KeyBindings {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a chord binding; newest bindings dispatch first.
    pub fn bind(&mut self, chord: &str, options: BindOptions) -> BindingId {
        let id = BindingId(self.next_id);
        self.next_id += 1;
        self.bindings.push(Binding {
            id,
            chord: KeyChord::parse(chord),
            stop_propagation: options.stop_propagation,
            disable_for_ms: options.disable_for_ms,
            disabled_until_ms: 0,
            allow_while_editing: options.allow_while_editing,
        });
        id
    }

    /// Remove a binding. Removing an already-removed id is a no-op.
    pub fn unbind(&mut self, id: BindingId) {
        self.bindings.retain(|binding| binding.id != id);
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// `true` if no bindings are registered.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Offer a key press to the bindings.
    ///
    /// Returns the bindings that fired, in dispatch order (innermost first).
    pub fn dispatch(&mut self, key: &str, held: &KeyState, pass: KeyPass) -> SmallVec<[BindingId; 1]> {
        let mut fired = SmallVec::new();
        for binding in self.bindings.iter_mut().rev() {
            if !binding.chord.matches(key, held) {
                continue;
            }
            let eligible = pass.now_ms >= binding.disabled_until_ms
                && (binding.allow_while_editing || !pass.editing);
            if eligible {
                binding.disabled_until_ms = pass.now_ms + binding.disable_for_ms;
                fired.push(binding.id);
            }
            if binding.stop_propagation {
                break;
            }
        }
        fired
    }
}
