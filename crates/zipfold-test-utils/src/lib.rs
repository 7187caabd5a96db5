//! Test utilities and scenario fixtures for zipfold development.
//!
//! Provides an ownership-tracking element ([`Tracked`]) whose release hook
//! and `Drop` report to a shared [`Ledger`], so tests can assert exact
//! release counts and catch leaks or double releases. The [`fixtures`]
//! module holds small client programs built on the engine.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use zipfold_array::Array;

/// Shared counters for a family of [`Tracked`] elements.
#[derive(Debug, Default)]
pub struct Ledger {
    created: Cell<usize>,
    released: Cell<usize>,
    double_releases: Cell<usize>,
    dropped: Cell<usize>,
}

impl Ledger {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Number of tracked resources created.
    pub fn created(&self) -> usize {
        self.created.get()
    }

    /// Number of distinct resources whose release hook has run.
    pub fn released(&self) -> usize {
        self.released.get()
    }

    /// Number of release calls on an already released resource.
    pub fn double_releases(&self) -> usize {
        self.double_releases.get()
    }

    /// Number of tracked elements dropped.
    pub fn dropped(&self) -> usize {
        self.dropped.get()
    }

    /// Elements created but not yet dropped.
    pub fn live(&self) -> usize {
        self.created() - self.dropped()
    }

    /// Resources created but never released.
    pub fn unreleased(&self) -> usize {
        self.created() - self.released()
    }

    /// Snapshot of `(released, dropped)`, handy for before/after deltas.
    pub fn counts(&self) -> (usize, usize) {
        (self.released(), self.dropped())
    }

    fn bump(cell: &Cell<usize>) {
        cell.set(cell.get() + 1);
    }
}

/// An element owning one tracked resource.
///
/// [`Tracked::release`] is the release hook: it marks the resource released
/// and records a double release if it was already. Dropping the element is
/// recorded separately, so a test can tell "freed but never released"
/// apart from "released and freed".
pub struct Tracked<T> {
    value: T,
    ledger: Rc<Ledger>,
    released: bool,
}

impl<T> Tracked<T> {
    pub fn new(value: T, ledger: &Rc<Ledger>) -> Self {
        Ledger::bump(&ledger.created);
        Self {
            value,
            ledger: Rc::clone(ledger),
            released: false,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Release hook for arrays of tracked elements.
    pub fn release(&mut self) {
        if self.released {
            Ledger::bump(&self.ledger.double_releases);
        } else {
            self.released = true;
            Ledger::bump(&self.ledger.released);
        }
    }
}

impl<T: Clone> Clone for Tracked<T> {
    /// Clones own a fresh, unreleased resource.
    fn clone(&self) -> Self {
        Self::new(self.value.clone(), &self.ledger)
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        Ledger::bump(&self.ledger.dropped);
    }
}

impl<T: fmt::Debug> fmt::Debug for Tracked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracked")
            .field("value", &self.value)
            .field("released", &self.released)
            .finish()
    }
}

/// Build an array of tracked values with [`Tracked::release`] as its hook.
pub fn tracked_array<T>(
    values: impl IntoIterator<Item = T>,
    ledger: &Rc<Ledger>,
) -> Array<Tracked<T>> {
    values
        .into_iter()
        .map(|value| Tracked::new(value, ledger))
        .collect::<Array<_>>()
        .with_release(Tracked::release)
}
