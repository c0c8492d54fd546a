// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cleanup scope: deferred release work, run in reverse registration order.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// An ownership frame for paired acquire/release work.
///
/// A scope collects cleanup callbacks as side effects are performed and runs
/// them when the scope is disposed. Cleanups run in reverse registration
/// order, so releases mirror acquires. Each cleanup runs at most once.
///
/// The context type `C` is whatever shared state the cleanups need to undo
/// their registrations against (a binding table, a mount registry, ...).
/// Passing it explicitly at disposal time keeps the scope free of interior
/// mutability and borrow juggling.
///
/// Disposing an empty or already-disposed scope is a no-op; components may
/// therefore dispose unconditionally from any teardown path. Deferring after
/// a disposal re-arms the scope for the next disposal.
pub struct Scope<C> {
    cleanups: Vec<Box<dyn FnOnce(&mut C)>>,
}

impl<C> Scope<C> {
    /// Create an empty scope.
    pub const fn new() -> Self {
        Self {
            cleanups: Vec::new(),
        }
    }

    /// Register a cleanup to run when the scope is disposed.
    pub fn defer(&mut self, cleanup: impl FnOnce(&mut C) + 'static) {
        self.cleanups.push(Box::new(cleanup));
    }

    /// Number of cleanups currently pending.
    pub fn pending(&self) -> usize {
        self.cleanups.len()
    }

    /// Returns `true` if no cleanups are pending.
    pub fn is_empty(&self) -> bool {
        self.cleanups.is_empty()
    }

    /// Run all pending cleanups in reverse registration order.
    ///
    /// The scope is empty afterwards; a second call does nothing.
    pub fn dispose(&mut self, ctx: &mut C) {
        while let Some(cleanup) = self.cleanups.pop() {
            cleanup(ctx);
        }
    }
}

impl<C> Default for Scope<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for Scope<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("pending", &self.cleanups.len())
            .finish_non_exhaustive()
    }
}
