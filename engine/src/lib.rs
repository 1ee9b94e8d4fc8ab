//! A minimal interaction-combinator runtime.
//!
//! This crate implements an optimal-evaluation reducer for an affine lambda calculus augmented
//! with duplicator/superposition nodes. Given an initial term graph encoded in a flat memory
//! arena, it rewrites the graph to normal form by performing local graph rewrites
//! ("interactions") and returns the count of interactions performed plus the reduced graph.
//!
//! The four pieces, leaves first: [`term`] (the pure bit-level codec), [`arena`] (the
//! bump-allocated, atomic cell storage), [`rewrite`] (the six interaction rules) and [`reduce`]
//! together with [`normalize`] (the weak-head reducer and the full normalizer built atop it).
//! [`Engine`](engine::Engine) ties these together behind the external interface described in the
//! specification: `inject`, `normalize`, `dump`.
#![deny(clippy::correctness, clippy::suspicious)]
#![warn(clippy::complexity, clippy::perf, clippy::style)]
#![allow(clippy::module_name_repetitions)]

pub mod arena;
pub mod build;
pub mod dump;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod reduce;
pub mod rewrite;
pub mod term;

pub use engine::Engine;
pub use error::{Error, Result};
pub use term::{Loc, Tag, Term};
