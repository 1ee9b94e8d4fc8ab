//! The term codec: pure bit-level pack/unpack of a `(tag, label, location)` triple into a single
//! 64-bit word.
//!
//! The encoding is canonical (spec §3): the low 8 bits are the tag, the next 24 are the label,
//! and the top 32 are the location of the node's first payload cell. [`Term::VOID`] is the
//! all-zero word and denotes an empty cell.

use derive_more::Display;

/// The arena index of a node's first payload cell.
pub type Loc = u32;

/// A duplicator/superposition color. Only the low 24 bits are meaningful.
pub type Label = u32;

/// A node kind, stored in the low 8 bits of a [`Term`].
///
/// `SUB` is never the tag of a *reference* term, only of a resident cell (spec §3): it marks a
/// binder cell that has not yet been bound.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Tag {
    /// Substitution hole: a binder cell awaiting its value.
    #[display(fmt = "SUB")]
    Sub = 0,
    /// Variable reference: `location` points to the binder cell to dereference.
    #[display(fmt = "VAR")]
    Var = 1,
    /// Duplicator, left projection. 3-cell node `[left_out, right_out, body]`.
    #[display(fmt = "DP0")]
    Dp0 = 2,
    /// Duplicator, right projection. Shares the 3-cell node of its `DP0` twin.
    #[display(fmt = "DP1")]
    Dp1 = 3,
    /// Application. 2-cell node `[function, argument]`.
    #[display(fmt = "APP")]
    App = 4,
    /// Eraser. Arity 0, inert.
    #[display(fmt = "ERA")]
    Era = 5,
    /// Lambda. 2-cell node `[binder, body]`.
    #[display(fmt = "LAM")]
    Lam = 6,
    /// Superposition. 2-cell node `[left, right]`.
    #[display(fmt = "SUP")]
    Sup = 7,
}

impl Tag {
    /// Recovers a tag from its raw encoding, for cells whose bit pattern is trusted (i.e. every
    /// cell ever written by [`Term::make`]).
    ///
    /// # Panics
    /// If `raw` does not correspond to a known tag. This can only happen if a cell was corrupted
    /// outside the engine's own writes, which is a bug in the caller, not a recoverable condition.
    #[must_use]
    pub(crate) const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::Sub,
            1 => Self::Var,
            2 => Self::Dp0,
            3 => Self::Dp1,
            4 => Self::App,
            5 => Self::Era,
            6 => Self::Lam,
            7 => Self::Sup,
            _ => panic!("corrupt arena cell: unknown tag"),
        }
    }

    /// Whether this tag denotes one of the two duplicator projections.
    #[must_use]
    pub const fn is_dup(self) -> bool {
        matches!(self, Self::Dp0 | Self::Dp1)
    }

    /// The projection index of a duplicator tag: 0 for `DP0`, 1 for `DP1`.
    ///
    /// # Panics
    /// If `self` is not a duplicator tag.
    #[must_use]
    pub const fn projection(self) -> u32 {
        match self {
            Self::Dp0 => 0,
            Self::Dp1 => 1,
            _ => panic!("projection() called on a non-duplicator tag"),
        }
    }
}

/// A single encoded term: a `(tag, label, location)` triple packed into a 64-bit word.
///
/// Terms are `Copy` and cheap to pass around; the arena is what gives them meaning by
/// interpreting `location` as a cell index.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct Term(u64);

impl Term {
    /// The all-zero word: an empty cell, never a meaningful reference.
    pub const VOID: Self = Self(0);

    /// Packs a `(tag, label, location)` triple into a term.
    #[inline]
    #[must_use]
    pub const fn make(tag: Tag, label: Label, loc: Loc) -> Self {
        let tag_enc = tag as u64;
        let lab_enc = ((label & 0x00FF_FFFF) as u64) << 8;
        let loc_enc = (loc as u64) << 32;
        Self(tag_enc | lab_enc | loc_enc)
    }

    /// The node kind.
    #[inline]
    #[must_use]
    pub const fn tag(self) -> Tag {
        Tag::from_raw((self.0 & 0xFF) as u8)
    }

    /// The duplicator/superposition color.
    #[inline]
    #[must_use]
    pub const fn label(self) -> Label {
        ((self.0 >> 8) & 0x00FF_FFFF) as Label
    }

    /// The arena index of the node's first payload cell.
    #[inline]
    #[must_use]
    pub const fn loc(self) -> Loc {
        (self.0 >> 32) as Loc
    }

    /// The raw 64-bit encoding, used only by the debug dump and round-trip tests.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Rebuilds a term from a previously observed raw encoding.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Whether this term is the all-zero empty-cell marker.
    #[inline]
    #[must_use]
    pub const fn is_void(self) -> bool {
        self.0 == 0
    }

    /// The binder cell this reference reads, or `0` for terms that aren't references to a
    /// binder (spec §4.2). Named `key` in the specification.
    #[inline]
    #[must_use]
    pub const fn key(self) -> Loc {
        match self.tag() {
            Tag::Var | Tag::Dp0 => self.loc(),
            Tag::Dp1 => self.loc() + 1,
            _ => 0,
        }
    }
}

impl core::fmt::Debug for Term {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Term")
            .field("tag", &self.tag())
            .field("label", &self.label())
            .field("loc", &self.loc())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_the_bit_packing() {
        let t = Term::make(Tag::App, 0, 0x1234);
        assert_eq!(t.tag(), Tag::App);
        assert_eq!(t.label(), 0);
        assert_eq!(t.loc(), 0x1234);
    }

    #[test]
    fn label_is_masked_to_24_bits() {
        let t = Term::make(Tag::Lam, 0xFFFF_FFFF, 7);
        assert_eq!(t.label(), 0x00FF_FFFF);
        assert_eq!(t.loc(), 7);
    }

    #[test]
    fn void_is_the_all_zero_word() {
        assert!(Term::VOID.is_void());
        assert_eq!(Term::VOID.raw(), 0);
    }

    #[test]
    fn key_reads_the_right_offset_per_tag() {
        assert_eq!(Term::make(Tag::Var, 0, 10).key(), 10);
        assert_eq!(Term::make(Tag::Dp0, 0, 10).key(), 10);
        assert_eq!(Term::make(Tag::Dp1, 0, 10).key(), 11);
        assert_eq!(Term::make(Tag::App, 0, 10).key(), 0);
        assert_eq!(Term::make(Tag::Era, 0, 10).key(), 0);
    }

    #[test]
    fn dp0_and_dp1_share_offset_encoding() {
        // DP0 and DP1 are dual views of the same 3-cell node: equal location, different tag.
        let dp0 = Term::make(Tag::Dp0, 0, 42);
        let dp1 = Term::make(Tag::Dp1, 0, 42);
        assert_eq!(dp0.loc(), dp1.loc());
        assert_ne!(dp0.tag(), dp1.tag());
    }

    #[test]
    fn projection_matches_dup_tag() {
        assert_eq!(Tag::Dp0.projection(), 0);
        assert_eq!(Tag::Dp1.projection(), 1);
    }
}
