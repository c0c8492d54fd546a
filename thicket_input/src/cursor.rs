// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped cursor requests.

use alloc::vec::Vec;
use cursor_icon::CursorIcon;

/// Handle to one cursor request.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct CursorToken(u64);

/// Scoped cursor requests; the earliest active request wins.
///
/// Components push a request while their interaction wants a particular
/// cursor (a resize handle, a drag in progress) and release it from a scope
/// cleanup. Requests that arrive while another is active queue behind it and
/// take over when it is released. An empty stack means the host shows its
/// default cursor.
#[derive(Debug, Default)]
pub struct CursorStack {
    entries: Vec<(CursorToken, CursorIcon)>,
    next: u64,
}

impl CursorStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next: 0,
        }
    }

    /// Request `icon`; the request stays active until released.
    pub fn push(&mut self, icon: CursorIcon) -> CursorToken {
        let token = CursorToken(self.next);
        self.next += 1;
        self.entries.push((token, icon));
        token
    }

    /// Release a request. Releasing twice is a no-op.
    pub fn release(&mut self, token: CursorToken) {
        self.entries.retain(|(t, _)| *t != token);
    }

    /// The cursor the host should show, if any request is active.
    pub fn current(&self) -> Option<CursorIcon> {
        self.entries.first().map(|(_, icon)| *icon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earliest_request_wins() {
        let mut stack = CursorStack::new();
        assert_eq!(stack.current(), None);

        let grab = stack.push(CursorIcon::Grabbing);
        let _text = stack.push(CursorIcon::Text);
        assert_eq!(stack.current(), Some(CursorIcon::Grabbing));

        stack.release(grab);
        assert_eq!(stack.current(), Some(CursorIcon::Text));
    }

    #[test]
    fn releasing_twice_is_harmless() {
        let mut stack = CursorStack::new();
        let token = stack.push(CursorIcon::Pointer);
        stack.release(token);
        stack.release(token);
        assert_eq!(stack.current(), None);
    }
}
