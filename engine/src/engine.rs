//! The engine handle: ties the arena, the reducer and the normalizer together behind the
//! external interface described in the specification (§6).

use std::io::{self, Write};

use crate::arena::Arena;
use crate::error::{Error, Result};
use crate::normalize;
use crate::term::{Loc, Term};

/// A single evaluation engine: an arena plus the scratch traversal stack [`reduce`](crate::reduce)
/// needs.
///
/// Created with [`Engine::new`], populated with [`Engine::inject`], then driven to normal form
/// with [`Engine::normalize`]. A handle owns everything a run touches; dropping it frees the
/// arena wholesale, as specified (§3, "the arena is freed wholesale at process exit").
pub struct Engine {
    arena: Arena,
    stack: Vec<Term>,
}

impl Engine {
    /// Creates a new engine with the given arena and traversal-stack capacities.
    #[must_use]
    pub fn new(arena_capacity: usize, stack_capacity: usize) -> Self {
        log::debug!("new engine: arena_capacity={arena_capacity}, stack_capacity={stack_capacity}");
        Self {
            arena: Arena::new(arena_capacity),
            stack: vec![Term::VOID; stack_capacity],
        }
    }

    /// The underlying arena, for callers that want to inspect cells directly (e.g. an injector).
    #[must_use]
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Injects an initial graph, writing terms into arena cells by index.
    ///
    /// Sets the write frontier to one past the highest written index and zeros the interaction
    /// counter, as specified (§6). The root of evaluation must reside at arena index 0; this is a
    /// precondition on `cells`, not something `inject` itself enforces (the engine has no way to
    /// know which of several written cells the caller intends as the root until `normalize` reads
    /// index 0).
    ///
    /// # Errors
    /// Returns [`Error::ArenaTooSmall`] if the highest index in `cells` does not fit in the
    /// arena's reserved capacity. This is a configuration mistake caught before any rewriting
    /// begins, not a mid-reduction failure (spec §7 reserves "fatal, aborts the run" for
    /// exhaustion discovered *during* reduction).
    pub fn inject(&mut self, cells: &[(Loc, Term)]) -> Result<()> {
        let capacity = self.arena.capacity();
        let highest = cells.iter().map(|&(loc, _)| loc as usize + 1).max().unwrap_or(0);
        if highest > capacity {
            return Err(Error::ArenaTooSmall { cells: highest, capacity });
        }

        for &(loc, term) in cells {
            self.arena.set(loc, term);
        }
        self.arena.set_ini(0);
        self.arena.set_end(highest as Loc);
        self.arena.set_itr(0);
        log::info!("injected {} cells, frontier at {highest}", cells.len());
        Ok(())
    }

    /// Normalizes the graph rooted at arena index 0, returning the normalized root term, the
    /// number of interactions performed, and the node count (write frontier) after normalization.
    pub fn normalize(&mut self) -> (Term, Loc, Loc) {
        let root = self.arena.get(0);
        log::info!("normalizing from root {root:?}");
        let result = normalize::normal(&self.arena, &mut self.stack, root);
        let itr = self.arena.itr();
        let size = self.arena.end();
        log::info!("normalized in {itr} interactions, {size} nodes");
        (result, itr, size)
    }

    /// Writes the debug dump of the arena to `writer` (spec §6).
    ///
    /// # Errors
    /// Propagates any I/O error from `writer`.
    pub fn dump(&self, writer: &mut dyn Write) -> io::Result<()> {
        crate::dump::dump(&self.arena, writer)
    }
}
