//! A comprehensive memory management unit for terms.
//!
//! This module defines the core functions used to manipulate an arena: a pre-allocated,
//! append-only memory of fixed-width cells, each holding one encoded [`Term`]. It exposes bump
//! allocation, atomic load/store/exchange on cells, and the three counters named in the
//! specification: the write frontier (`end`), the interaction counter (`itr`), and a reserved
//! base index (`ini`).
//!
//! Every memory operation here uses [relaxed ordering](Ordering::Relaxed). The atomic primitives
//! are retained so that the arena remains free to be driven by a future parallel reducer; as
//! specified (§5), no two actors touch the same cell concurrently in the present engine.

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

use crate::term::{Loc, Term};

/// A pre-allocated, append-only arena of term cells.
///
/// Cells are never reclaimed during a run (spec §3, "Lifecycles"): `end` only grows, and no cell
/// below `end` is ever freed. The arena is dropped wholesale at the end of a run.
pub struct Arena {
    cells: Vec<AtomicU64>,
    ini: AtomicU32,
    end: AtomicU32,
    itr: AtomicU32,
}

impl Arena {
    /// Creates a new arena with room for exactly `capacity` cells, all initially [`Term::VOID`].
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let mut cells = Vec::with_capacity(capacity);
        cells.resize_with(capacity, || AtomicU64::new(0));
        Self {
            cells,
            ini: AtomicU32::new(0),
            end: AtomicU32::new(0),
            itr: AtomicU32::new(0),
        }
    }

    /// The arena's reserved capacity, in cells.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Atomically advances the write frontier by `n` cells and returns the old value.
    ///
    /// Contract (spec §4.1): the caller must write exactly `n` consecutive cells, starting at the
    /// returned location, before any other actor reads them.
    ///
    /// # Panics
    /// If the allocation would exceed the arena's reserved capacity. Arena exhaustion is fatal
    /// and aborts the run (spec §7): it is not a recoverable error.
    #[must_use]
    pub fn alloc(&self, n: u32) -> Loc {
        let loc = self.end.fetch_add(n, Ordering::Relaxed);
        let new_end = loc as u64 + u64::from(n);
        assert!(
            new_end as usize <= self.capacity(),
            "arena exhausted: attempted to allocate {n} cells at {loc}, capacity is {}",
            self.capacity()
        );
        log::trace!("alloc({n}) -> {loc}");
        loc
    }

    /// Loads the term currently occupying `loc`.
    pub fn get(&self, loc: Loc) -> Term {
        Term::from_raw(self.cells[loc as usize].load(Ordering::Relaxed))
    }

    /// Stores `term` at `loc`.
    pub fn set(&self, loc: Loc, term: Term) {
        self.cells[loc as usize].store(term.raw(), Ordering::Relaxed);
    }

    /// Atomically exchanges the cell at `loc` for `term`, returning the previous occupant.
    pub fn swap(&self, loc: Loc, term: Term) -> Term {
        Term::from_raw(self.cells[loc as usize].swap(term.raw(), Ordering::Relaxed))
    }

    /// Consumes the cell at `loc`, leaving a detectable hole ([`Term::VOID`]) behind.
    ///
    /// Equivalent to `swap(loc, Term::VOID)`.
    pub fn take(&self, loc: Loc) -> Term {
        self.swap(loc, Term::VOID)
    }

    /// The reserved base index. Unused by every rewrite rule (spec §9, Open Question 3); kept for
    /// a future compacting pass.
    #[must_use]
    pub fn ini(&self) -> Loc {
        self.ini.load(Ordering::Relaxed)
    }

    /// Sets the reserved base index.
    pub fn set_ini(&self, value: Loc) {
        self.ini.store(value, Ordering::Relaxed);
    }

    /// The write frontier: one past the highest cell ever allocated.
    #[must_use]
    pub fn end(&self) -> Loc {
        self.end.load(Ordering::Relaxed)
    }

    /// Sets the write frontier. Used by the injector to declare the highest cell it wrote.
    pub fn set_end(&self, value: Loc) {
        self.end.store(value, Ordering::Relaxed);
    }

    /// The interaction counter: incremented exactly once per rule firing.
    #[must_use]
    pub fn itr(&self) -> Loc {
        self.itr.load(Ordering::Relaxed)
    }

    /// Resets the interaction counter, typically done by the injector before a run.
    pub fn set_itr(&self, value: Loc) {
        self.itr.store(value, Ordering::Relaxed);
    }

    /// Increments the interaction counter by one and returns its previous value.
    pub(crate) fn inc_itr(&self) -> Loc {
        self.itr.fetch_add(1, Ordering::Relaxed)
    }
}
