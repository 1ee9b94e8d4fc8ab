//! The P24 duplication benchmark, transcribed verbatim from `original_source/HVML.c`'s injector.
//!
//! Ignored by default: 16.7 million interactions is a multi-second run, too heavy for a routine
//! `cargo test`. Run explicitly with `cargo test --test p24 -- --ignored`.

use engine::{Engine, Loc, Tag, Term};

#[rustfmt::skip]
fn p24() -> Vec<(Loc, Term)> {
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
    raw.iter().enumerate().map(|(loc, &(tag, label, field))| (loc as Loc, Term::make(tag, label, field))).collect()
}

#[test]
#[ignore = "takes several seconds: 16.7M interactions"]
fn p24_normalizes_in_exactly_16_777_215_interactions() {
    let mut engine = Engine::new(1 << 27, 1 << 12);
    engine.inject(&p24()).expect("P24 fits comfortably in a 2^27-cell arena");

    let (result, itr, size) = engine.normalize();
    assert_eq!(itr, 16_777_215);
    assert_eq!(result.tag(), Tag::Lam);
    assert!(size > 241, "normalization should have allocated new cells beyond the injected 241");
}
