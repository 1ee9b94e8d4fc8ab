//! Named graphs the driver can inject, for `--fixture <name>`.
//!
//! [`p24`] is transcribed verbatim, cell for cell, from the injector in
//! `original_source/HVML.c` — the classic duplication-heavy benchmark this engine's interaction
//! counter was tuned against. The rest are small hand-built scenarios covering the same rule
//! combinations as the engine crate's own rule-law tests, useful for a quick `--dump` inspection
//! from the command line.

use engine::build::GraphBuilder;
use engine::{Engine, Loc, Tag, Term};

fn cell(tag: Tag, label: u32, loc: Loc) -> Term {
    Term::make(tag, label, loc)
}

/// The P24 benchmark: 241 cells, expected to normalize in exactly 16,777,215 interactions.
///
/// Structurally this is a chain of 24 nested `{x y} = ...; dup` layers feeding a final constant,
/// laid out exactly as the reference injector wrote it — preserving the raw cell layout (rather
/// than rebuilding it with [`GraphBuilder`]) is what makes the interaction count reproducible.
#[rustfmt::skip]
pub fn p24() -> Vec<(Loc, Term)> {
    use Tag::{App, Dp0, Dp1, Lam, Sub, Var};
    let raw: &[(Tag, u32, Loc)] = &[
        (App, 0, 0x001), (App, 0, 0x003), (Lam, 0, 0x0ed), (Lam, 0, 0x005),
        (Lam, 0, 0x0df), (Sub, 0, 0x000), (Lam, 0, 0x0d9), (Sub, 0, 0x000),
        (Sub, 0, 0x000), (Var, 0, 0x005), (Sub, 0, 0x000), (Sub, 0, 0x000),
        (Lam, 0, 0x00d), (Sub, 0, 0x000), (App, 0, 0x00f), (Dp0, 0, 0x007),
        (App, 0, 0x011), (Dp1, 0, 0x007), (Var, 0, 0x00d), (Sub, 0, 0x000),
        (Sub, 0, 0x000), (Lam, 0, 0x016), (Sub, 0, 0x000), (App, 0, 0x018),
        (Dp0, 0, 0x00a), (App, 0, 0x01a), (Dp1, 0, 0x00a), (Var, 0, 0x016),
        (Sub, 0, 0x000), (Sub, 0, 0x000), (Lam, 0, 0x01f), (Sub, 0, 0x000),
        (App, 0, 0x021), (Dp0, 0, 0x013), (App, 0, 0x023), (Dp1, 0, 0x013),
        (Var, 0, 0x01f), (Sub, 0, 0x000), (Sub, 0, 0x000), (Lam, 0, 0x028),
        (Sub, 0, 0x000), (App, 0, 0x02a), (Dp0, 0, 0x01c), (App, 0, 0x02c),
        (Dp1, 0, 0x01c), (Var, 0, 0x028), (Sub, 0, 0x000), (Sub, 0, 0x000),
        (Lam, 0, 0x031), (Sub, 0, 0x000), (App, 0, 0x033), (Dp0, 0, 0x025),
        (App, 0, 0x035), (Dp1, 0, 0x025), (Var, 0, 0x031), (Sub, 0, 0x000),
        (Sub, 0, 0x000), (Lam, 0, 0x03a), (Sub, 0, 0x000), (App, 0, 0x03c),
        (Dp0, 0, 0x02e), (App, 0, 0x03e), (Dp1, 0, 0x02e), (Var, 0, 0x03a),
        (Sub, 0, 0x000), (Sub, 0, 0x000), (Lam, 0, 0x043), (Sub, 0, 0x000),
        (App, 0, 0x045), (Dp0, 0, 0x037), (App, 0, 0x047), (Dp1, 0, 0x037),
        (Var, 0, 0x043), (Sub, 0, 0x000), (Sub, 0, 0x000), (Lam, 0, 0x04c),
        (Sub, 0, 0x000), (App, 0, 0x04e), (Dp0, 0, 0x040), (App, 0, 0x050),
        (Dp1, 0, 0x040), (Var, 0, 0x04c), (Sub, 0, 0x000), (Sub, 0, 0x000),
        (Lam, 0, 0x055), (Sub, 0, 0x000), (App, 0, 0x057), (Dp0, 0, 0x049),
        (App, 0, 0x059), (Dp1, 0, 0x049), (Var, 0, 0x055), (Sub, 0, 0x000),
        (Sub, 0, 0x000), (Lam, 0, 0x05e), (Sub, 0, 0x000), (App, 0, 0x060),
        (Dp0, 0, 0x052), (App, 0, 0x062), (Dp1, 0, 0x052), (Var, 0, 0x05e),
        (Sub, 0, 0x000), (Sub, 0, 0x000), (Lam, 0, 0x067), (Sub, 0, 0x000),
        (App, 0, 0x069), (Dp0, 0, 0x05b), (App, 0, 0x06b), (Dp1, 0, 0x05b),
        (Var, 0, 0x067), (Sub, 0, 0x000), (Sub, 0, 0x000), (Lam, 0, 0x070),
        (Sub, 0, 0x000), (App, 0, 0x072), (Dp0, 0, 0x064), (App, 0, 0x074),
        (Dp1, 0, 0x064), (Var, 0, 0x070), (Sub, 0, 0x000), (Sub, 0, 0x000),
        (Lam, 0, 0x079), (Sub, 0, 0x000), (App, 0, 0x07b), (Dp0, 0, 0x06d),
        (App, 0, 0x07d), (Dp1, 0, 0x06d), (Var, 0, 0x079), (Sub, 0, 0x000),
        (Sub, 0, 0x000), (Lam, 0, 0x082), (Sub, 0, 0x000), (App, 0, 0x084),
        (Dp0, 0, 0x076), (App, 0, 0x086), (Dp1, 0, 0x076), (Var, 0, 0x082),
        (Sub, 0, 0x000), (Sub, 0, 0x000), (Lam, 0, 0x08b), (Sub, 0, 0x000),
        (App, 0, 0x08d), (Dp0, 0, 0x07f), (App, 0, 0x08f), (Dp1, 0, 0x07f),
        (Var, 0, 0x08b), (Sub, 0, 0x000), (Sub, 0, 0x000), (Lam, 0, 0x094),
        (Sub, 0, 0x000), (App, 0, 0x096), (Dp0, 0, 0x088), (App, 0, 0x098),
        (Dp1, 0, 0x088), (Var, 0, 0x094), (Sub, 0, 0x000), (Sub, 0, 0x000),
        (Lam, 0, 0x09d), (Sub, 0, 0x000), (App, 0, 0x09f), (Dp0, 0, 0x091),
        (App, 0, 0x0a1), (Dp1, 0, 0x091), (Var, 0, 0x09d), (Sub, 0, 0x000),
        (Sub, 0, 0x000), (Lam, 0, 0x0a6), (Sub, 0, 0x000), (App, 0, 0x0a8),
        (Dp0, 0, 0x09a), (App, 0, 0x0aa), (Dp1, 0, 0x09a), (Var, 0, 0x0a6),
        (Sub, 0, 0x000), (Sub, 0, 0x000), (Lam, 0, 0x0af), (Sub, 0, 0x000),
        (App, 0, 0x0b1), (Dp0, 0, 0x0a3), (App, 0, 0x0b3), (Dp1, 0, 0x0a3),
        (Var, 0, 0x0af), (Sub, 0, 0x000), (Sub, 0, 0x000), (Lam, 0, 0x0b8),
        (Sub, 0, 0x000), (App, 0, 0x0ba), (Dp0, 0, 0x0ac), (App, 0, 0x0bc),
        (Dp1, 0, 0x0ac), (Var, 0, 0x0b8), (Sub, 0, 0x000), (Sub, 0, 0x000),
        (Lam, 0, 0x0c1), (Sub, 0, 0x000), (App, 0, 0x0c3), (Dp0, 0, 0x0b5),
        (App, 0, 0x0c5), (Dp1, 0, 0x0b5), (Var, 0, 0x0c1), (Sub, 0, 0x000),
        (Sub, 0, 0x000), (Lam, 0, 0x0ca), (Sub, 0, 0x000), (App, 0, 0x0cc),
        (Dp0, 0, 0x0be), (App, 0, 0x0ce), (Dp1, 0, 0x0be), (Var, 0, 0x0ca),
        (Sub, 0, 0x000), (Sub, 0, 0x000), (Lam, 0, 0x0d3), (Sub, 0, 0x000),
        (App, 0, 0x0d5), (Dp0, 0, 0x0c7), (App, 0, 0x0d7), (Dp1, 0, 0x0c7),
        (Var, 0, 0x0d3), (Sub, 0, 0x000), (App, 0, 0x0db), (Dp0, 0, 0x0d0),
        (App, 0, 0x0dd), (Dp1, 0, 0x0d0), (Var, 0, 0x0d9), (Sub, 0, 0x000),
        (App, 0, 0x0e1), (App, 0, 0x0e3), (Lam, 0, 0x0e9), (Var, 0, 0x0df),
        (Lam, 0, 0x0e5), (Sub, 0, 0x000), (Lam, 0, 0x0e7), (Sub, 0, 0x000),
        (Var, 0, 0x0e7), (Sub, 0, 0x000), (Lam, 0, 0x0eb), (Sub, 0, 0x000),
        (Var, 0, 0x0e9), (Sub, 0, 0x000), (Lam, 0, 0x0ef), (Sub, 0, 0x000),
        (Var, 0, 0x0ed),
    ];
    raw.iter().enumerate().map(|(loc, &(tag, label, field))| (loc as Loc, cell(tag, label, field))).collect()
}

/// Builds a root term with `f` and writes it into the reserved root slot at arena index 0.
///
/// Index 0 is special: it holds the root term *value*, never a node's own payload cells, so it
/// must be reserved before the builder allocates anything else (mirrors how the reference
/// injector keeps cell 0 free of any node body, see [`p24`]'s first entry).
fn inject_root<F>(engine: &Engine, f: F)
where
    F: FnOnce(&mut GraphBuilder<'_>) -> Term,
{
    let root_slot = engine.arena().alloc(1);
    debug_assert_eq!(root_slot, 0, "fixtures must be the first thing built on a fresh engine");
    let mut b = GraphBuilder::new(engine.arena());
    let root = f(&mut b);
    engine.arena().set(root_slot, root);
}

/// `(⋆ ⋆)`: an eraser applied to an eraser, normalizing to `⋆` in 1 interaction.
pub fn era_app(engine: &Engine) {
    inject_root(engine, |b| {
        let arg = b.era();
        let head = b.era();
        b.app(head, arg)
    });
}

/// `(λx.x) ⋆`: the identity applied to an eraser, normalizing to `⋆` in 1 interaction.
pub fn identity_app(engine: &Engine) {
    inject_root(engine, |b| {
        let id = b.lam(|_, x| x);
        let arg = b.era();
        b.app(id, arg)
    });
}

/// `(λx.λy.x) ⋆ ⋆`: the K combinator applied to two erasers, normalizing to `⋆` in 2 interactions.
pub fn k_combinator(engine: &Engine) {
    inject_root(engine, |b| {
        let k = b.lam(|b, x| b.lam(move |_, _y| x));
        let a1 = b.era();
        let a2 = b.era();
        let applied = b.app(k, a1);
        b.app(applied, a2)
    });
}
