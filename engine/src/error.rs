//! Errors surfaced at the engine's API boundary.
//!
//! Per the specification (§7), the core exposes no recoverable errors *during* reduction: arena
//! exhaustion and traversal-stack overflow are fatal and abort the run (see [`arena::Arena::alloc`]
//! and [`reduce::reduce`], which panic). The one place a `Result` is idiomatic is validating an
//! injector's input against the arena's capacity *before* any rewriting begins — a configuration
//! mistake, not a mid-reduction failure.
//!
//! [`arena::Arena::alloc`]: crate::arena::Arena::alloc
//! [`reduce::reduce`]: crate::reduce::reduce

use derive_more::Display;

/// An error raised while preparing an [`Engine`](crate::engine::Engine) for reduction.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Error {
    /// The fixture handed to [`inject`](crate::engine::Engine::inject) does not fit in the
    /// arena's reserved capacity.
    #[display(fmt = "fixture has {cells} cells but the arena capacity is only {capacity}")]
    ArenaTooSmall {
        /// Number of cells the fixture would occupy.
        cells: usize,
        /// The arena's reserved capacity.
        capacity: usize,
    },
}

impl std::error::Error for Error {}

/// The result type used at the engine's API boundary.
pub type Result<T> = core::result::Result<T, Error>;
