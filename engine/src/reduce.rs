//! The weak-head reducer.
//!
//! [`reduce`] walks the graph along the evaluation spine using an explicit stack, invoking the
//! rewriter (§4.3) whenever a redex is uncovered, and returns the weak-head normal form (WHNF) of
//! its argument: either an eraser, a lambda, a superposition, or an unbound variable.
//!
//! The traversal stack is explicit rather than recursive because the spine can be millions of
//! frames deep (the P24 fixture reaches into the tens of millions of interactions); a recursive
//! implementation would overflow the call stack (spec §9).
//!
//! # Spine write-back
//!
//! On termination the engine reinstalls `next` into the position it was loaded from, so later
//! traversals see the WHNF rather than the original redex. The specification's source writes
//! back only the frame at which termination occurs, not every frame ever pushed, and then always
//! returns the *bottom* frame of the stack (`path[0]`) rather than the current term whenever any
//! frame remains pending. This under-writes the spine: an ancestor two or more levels up keeps
//! pointing at a stale redex, which a later `normal` call re-reduces. This is wasteful but
//! correct for full normalization, and it is preserved here bit-for-bit (rather than "improved")
//! because the interaction-count baseline for the P24 fixture depends on it (spec §9, Open
//! Question 1).

use crate::arena::Arena;
use crate::rewrite;
use crate::term::{Tag, Term};

/// Computes the weak-head normal form of `term`.
///
/// `stack` is scratch space for the traversal; it is indexed from `0`, reused across calls, and
/// only ever read back up to the high-water mark this call itself writes.
///
/// # Panics
/// If the spine is deeper than `stack.len()`. The traversal stack is a pre-allocated buffer sized
/// to the caller's chosen capacity (spec §5); overflowing it is fatal (spec §7), not a recoverable
/// error.
pub fn reduce(arena: &Arena, stack: &mut [Term], term: Term) -> Term {
    let mut spos = 0usize;
    let mut next = term;

    loop {
        match next.tag() {
            Tag::App => {
                push(stack, &mut spos, next);
                next = arena.get(next.loc());
                continue;
            },

            Tag::Dp0 | Tag::Dp1 => {
                let sub = arena.get(next.key());
                if sub.tag() == Tag::Sub {
                    push(stack, &mut spos, next);
                    next = arena.get(next.loc() + 2);
                    continue;
                }
                next = sub;
                continue;
            },

            Tag::Var => {
                let sub = arena.get(next.key());
                if sub.tag() != Tag::Sub {
                    next = sub;
                    continue;
                }
                // Unbound variable on the spine: WHNF reached, fall through to the write-back.
            },

            Tag::Era | Tag::Lam | Tag::Sup => {
                if spos != 0 {
                    spos -= 1;
                    let prev = stack[spos];
                    if let Some(result) = rewrite::interact(arena, prev, next) {
                        next = result;
                        continue;
                    }
                    // Not a redex: the host (`prev`) is already popped, the term is stuck.
                }
                // Either the stack was empty, or the pair wasn't a redex: WHNF reached.
            },

            Tag::Sub => {
                // A SUB is never the tag of a reference term (spec §3); reachable only if an
                // injector wrote one directly at a VAR/DP0/DP1 target, which is ill-formed input.
                unreachable!("SUB is never the tag of a reference term");
            },
        }

        if spos == 0 {
            return next;
        }
        spos -= 1;
        let host = stack[spos];
        match host.tag() {
            Tag::App => arena.set(host.loc(), next),
            Tag::Dp0 | Tag::Dp1 => arena.set(host.loc() + 2, next),
            _ => unreachable!("only APP/DP0/DP1 are ever pushed onto the traversal stack"),
        }
        return stack[0];
    }
}

fn push(stack: &mut [Term], spos: &mut usize, term: Term) {
    assert!(
        *spos < stack.len(),
        "traversal stack overflow: spine deeper than the reserved capacity of {}",
        stack.len()
    );
    stack[*spos] = term;
    *spos += 1;
}
