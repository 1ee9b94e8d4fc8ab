//! The six interaction rules.
//!
//! Each rule consumes a redex — a pair `(active, passive)` where `active` is either an
//! application or a duplicator projection, and `passive` sits where `active` expects a value —
//! and produces one term: the value to substitute in the hole `active` previously occupied. Each
//! rule is a constant-time local transformation of arena cells that may allocate new cells, and
//! increments the interaction counter exactly once.
//!
//! Newly allocated duplicator/superposition nodes inherit the label already present on the
//! existing duplicator/superposition participating in the rule (Open Question 2 of the
//! specification): `APP_SUP` takes it from the passive `SUP`, `DUP_LAM` takes it from the active
//! duplicator. The other four rules never allocate a labeled node.

use crate::arena::Arena;
use crate::term::{Tag, Term};

/// `(⋆ a) ⇒ ⋆`. The argument cell is orphaned, not reclaimed.
pub fn app_era(arena: &Arena, _app: Term, era: Term) -> Term {
    arena.inc_itr();
    era
}

/// `(λx.B) a ⇒ B[x := a]`. Binds the lambda's argument into its binder cell and returns the body.
pub fn app_lam(arena: &Arena, app: Term, lam: Term) -> Term {
    arena.inc_itr();
    let app_loc = app.loc();
    let lam_loc = lam.loc();
    let arg = arena.get(app_loc + 1);
    let bod = arena.get(lam_loc + 1);
    arena.set(lam_loc, arg);
    bod
}

/// `({p q} a) ⇒ let {a0 a1} = a in {(p a0) (q a1)}`.
pub fn app_sup(arena: &Arena, app: Term, sup: Term) -> Term {
    arena.inc_itr();
    let app_loc = app.loc();
    let sup_loc = sup.loc();
    let label = sup.label();

    let arg = arena.get(app_loc + 1);
    let p = arena.get(sup_loc);
    let q = arena.get(sup_loc + 1);

    let du0 = arena.alloc(3);
    let su0 = arena.alloc(2);
    let ap0 = arena.alloc(2);
    let ap1 = arena.alloc(2);

    arena.set(du0, Term::make(Tag::Sub, 0, 0));
    arena.set(du0 + 1, Term::make(Tag::Sub, 0, 0));
    arena.set(du0 + 2, arg);

    arena.set(ap0, p);
    arena.set(ap0 + 1, Term::make(Tag::Dp0, label, du0));
    arena.set(ap1, q);
    arena.set(ap1 + 1, Term::make(Tag::Dp1, label, du0));

    arena.set(su0, Term::make(Tag::App, 0, ap0));
    arena.set(su0 + 1, Term::make(Tag::App, 0, ap1));

    Term::make(Tag::Sup, label, su0)
}

/// `{x y} = ⋆`. Writes `ERA` into both output cells of the duplicator.
pub fn dup_era(arena: &Arena, dup: Term, era: Term) -> Term {
    arena.inc_itr();
    let dup_loc = dup.loc();
    let projection = dup.tag().projection();
    arena.set(dup_loc, era);
    arena.set(dup_loc + 1, era);
    arena.get(dup_loc + projection)
}

/// `{r s} = λx.B ⇒ let {B0 B1} = B in (r := λx0.B0, s := λx1.B1, x := {x0 x1})`.
pub fn dup_lam(arena: &Arena, dup: Term, lam: Term) -> Term {
    arena.inc_itr();
    let dup_loc = dup.loc();
    let projection = dup.tag().projection();
    let label = dup.label();
    let lam_loc = lam.loc();
    let bod = arena.get(lam_loc + 1);

    let du0 = arena.alloc(3);
    let lm0 = arena.alloc(2);
    let lm1 = arena.alloc(2);
    let su0 = arena.alloc(2);

    arena.set(du0, Term::make(Tag::Sub, 0, 0));
    arena.set(du0 + 1, Term::make(Tag::Sub, 0, 0));
    arena.set(du0 + 2, bod);

    arena.set(lm0, Term::make(Tag::Sub, 0, 0));
    arena.set(lm0 + 1, Term::make(Tag::Dp0, label, du0));
    arena.set(lm1, Term::make(Tag::Sub, 0, 0));
    arena.set(lm1 + 1, Term::make(Tag::Dp1, label, du0));

    arena.set(su0, Term::make(Tag::Var, 0, lm0));
    arena.set(su0 + 1, Term::make(Tag::Var, 0, lm1));

    arena.set(dup_loc, Term::make(Tag::Lam, 0, lm0));
    arena.set(dup_loc + 1, Term::make(Tag::Lam, 0, lm1));
    arena.set(lam_loc, Term::make(Tag::Sup, label, su0));

    arena.get(dup_loc + projection)
}

/// `{x y} = {a b}`. Writes `a` and `b` into the duplicator's output cells.
pub fn dup_sup(arena: &Arena, dup: Term, sup: Term) -> Term {
    arena.inc_itr();
    let dup_loc = dup.loc();
    let projection = dup.tag().projection();
    let sup_loc = sup.loc();
    let a = arena.get(sup_loc);
    let b = arena.get(sup_loc + 1);
    arena.set(dup_loc, a);
    arena.set(dup_loc + 1, b);
    arena.get(dup_loc + projection)
}

/// Dispatches a recognized `(host, passive)` pair to the interaction rule it denotes.
///
/// Returns `None` when the pair is not a redex recognized by any of the six rules — a correct
/// outcome (spec §7), not an error: the term is stuck (e.g. a free-variable application).
pub fn interact(arena: &Arena, host: Term, passive: Term) -> Option<Term> {
    match (host.tag(), passive.tag()) {
        (Tag::App, Tag::Era) => Some(app_era(arena, host, passive)),
        (Tag::App, Tag::Lam) => Some(app_lam(arena, host, passive)),
        (Tag::App, Tag::Sup) => Some(app_sup(arena, host, passive)),
        (Tag::Dp0 | Tag::Dp1, Tag::Era) => Some(dup_era(arena, host, passive)),
        (Tag::Dp0 | Tag::Dp1, Tag::Lam) => Some(dup_lam(arena, host, passive)),
        (Tag::Dp0 | Tag::Dp1, Tag::Sup) => Some(dup_sup(arena, host, passive)),
        _ => None,
    }
}
