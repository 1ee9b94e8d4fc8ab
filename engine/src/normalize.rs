//! The full normalizer.
//!
//! [`normal`] drives weak-head reduction under all positions until no redex remains anywhere in
//! the graph. Unlike [`reduce`](crate::reduce::reduce), this is specified recursively: its depth
//! tracks the shape of the normal-form term, which is shallow by construction for the workloads
//! this engine targets (spec §9).
//!
//! Termination is guaranteed whenever the underlying term has a normal form; the engine makes no
//! attempt to detect non-termination (spec §7) — an external bound (wall-clock timeout, or a cap
//! on the interaction counter) is the caller's responsibility.

use crate::arena::Arena;
use crate::reduce::reduce;
use crate::term::{Tag, Term};

/// Fully normalizes `t`: reduces it to WHNF, then recursively normalizes every subterm a redex
/// could still be hiding in, writing each normalized subterm back in place.
pub fn normal(arena: &Arena, stack: &mut [Term], t: Term) -> Term {
    let whnf = reduce(arena, stack, t);
    let loc = whnf.loc();

    match whnf.tag() {
        Tag::App => {
            let fun = normal(arena, stack, arena.get(loc));
            let arg = normal(arena, stack, arena.get(loc + 1));
            arena.set(loc, fun);
            arena.set(loc + 1, arg);
            whnf
        },

        Tag::Lam => {
            let body = normal(arena, stack, arena.get(loc + 1));
            arena.set(loc + 1, body);
            whnf
        },

        Tag::Sup => {
            let left = normal(arena, stack, arena.get(loc));
            let right = normal(arena, stack, arena.get(loc + 1));
            arena.set(loc, left);
            arena.set(loc + 1, right);
            whnf
        },

        Tag::Dp0 | Tag::Dp1 => {
            let body = normal(arena, stack, arena.get(loc + 2));
            arena.set(loc + 2, body);
            whnf
        },

        // ERA, VAR, SUB: no subterms to recurse into.
        Tag::Era | Tag::Var | Tag::Sub => whnf,
    }
}
