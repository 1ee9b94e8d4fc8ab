//! A small collection of closure-based helpers for building term graphs.
//!
//! This mirrors the teacher lineage's [`builder`](https://gitlab.crans.org/loutr/proost) module:
//! users manipulate closures which, when called, allocate the node they describe and wire up its
//! children, so that a graph's shape in code mirrors its shape on paper. Here the payload is an
//! interaction-net node rather than a calculus-of-constructions term, but the idea is the same —
//! a [`lam`](GraphBuilder::lam) call receives the freshly bound variable as a [`Term`] so the
//! caller's closure can refer to it directly, the way `abs` in the teacher's builder passes down
//! a de Bruijn-compatible environment.
//!
//! This is purely a convenience for constructing fixtures and tests; the engine itself never
//! calls into it — an injector is free to populate the arena however it likes.

use crate::arena::Arena;
use crate::term::{Label, Tag, Term};

/// Builds nodes into a borrowed [`Arena`], allocating as it goes.
pub struct GraphBuilder<'arena> {
    arena: &'arena Arena,
}

impl<'arena> GraphBuilder<'arena> {
    /// Creates a builder over `arena`.
    #[must_use]
    pub const fn new(arena: &'arena Arena) -> Self {
        Self { arena }
    }

    /// Builds an eraser. Arity 0, no allocation.
    #[must_use]
    pub fn era(&mut self) -> Term {
        Term::make(Tag::Era, 0, 0)
    }

    /// Builds an application of `fun` to `arg`.
    pub fn app(&mut self, fun: Term, arg: Term) -> Term {
        let loc = self.arena.alloc(2);
        self.arena.set(loc, fun);
        self.arena.set(loc + 1, arg);
        Term::make(Tag::App, 0, loc)
    }

    /// Builds a lambda. `body` receives the builder and the freshly bound variable, and returns
    /// the lambda's body.
    pub fn lam<F>(&mut self, body: F) -> Term
    where
        F: FnOnce(&mut Self, Term) -> Term,
    {
        let loc = self.arena.alloc(2);
        self.arena.set(loc, Term::make(Tag::Sub, 0, 0));
        let bound = Term::make(Tag::Var, 0, loc);
        let result = body(self, bound);
        self.arena.set(loc + 1, result);
        Term::make(Tag::Lam, 0, loc)
    }

    /// Builds a superposition of `left` and `right` under `label`.
    pub fn sup(&mut self, label: Label, left: Term, right: Term) -> Term {
        let loc = self.arena.alloc(2);
        self.arena.set(loc, left);
        self.arena.set(loc + 1, right);
        Term::make(Tag::Sup, label, loc)
    }

    /// Builds a duplicator over `body` under `label`, returning its `(DP0, DP1)` projections.
    pub fn dup(&mut self, label: Label, body: Term) -> (Term, Term) {
        let loc = self.arena.alloc(3);
        self.arena.set(loc, Term::make(Tag::Sub, 0, 0));
        self.arena.set(loc + 1, Term::make(Tag::Sub, 0, 0));
        self.arena.set(loc + 2, body);
        (Term::make(Tag::Dp0, label, loc), Term::make(Tag::Dp1, label, loc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lam_passes_the_bound_variable_to_its_body_closure() {
        let arena = Arena::new(8);
        let mut b = GraphBuilder::new(&arena);
        let identity = b.lam(|_, x| x);
        assert_eq!(identity.tag(), Tag::Lam);
        let body = arena.get(identity.loc() + 1);
        assert_eq!(body.tag(), Tag::Var);
        assert_eq!(body.key(), identity.loc());
    }

    #[test]
    fn dup_shares_one_node_between_both_projections() {
        let arena = Arena::new(8);
        let mut b = GraphBuilder::new(&arena);
        let era = b.era();
        let (dp0, dp1) = b.dup(3, era);
        assert_eq!(dp0.loc(), dp1.loc());
        assert_eq!(dp0.label(), 3);
        assert_eq!(dp1.label(), 3);
        assert_eq!(arena.get(dp0.loc() + 2), era);
    }
}
