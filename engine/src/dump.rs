//! The debug dump: the only stringification the engine provides (spec §1's Non-goals exclude a
//! full term pretty-printer).
//!
//! For each nonzero cell below the write frontier, [`dump`] emits one line reproducing the cell
//! in a form that could itself seed an injector: `set(heap, <loc>, new_term(<tag_name>, <label>,
//! <loc_field>));`.

use std::io::{self, Write};

use crate::arena::Arena;

/// Maps a raw tag byte to its name, per spec §6. Reads the byte directly rather than going
/// through [`Tag::from_raw`](crate::term::Tag::from_raw), which panics on out-of-range values:
/// the dump is a read-only diagnostic over whatever bits happen to be in the arena and must not
/// panic on a corrupt cell, printing `???` instead.
fn tag_name(raw_tag: u8) -> &'static str {
    match raw_tag {
        0 => "SUB",
        1 => "VAR",
        2 => "DP0",
        3 => "DP1",
        4 => "APP",
        5 => "ERA",
        6 => "LAM",
        7 => "SUP",
        _ => "???",
    }
}

/// Writes the debug dump of `arena` to `writer`: one `set(...)` line per nonzero cell below the
/// write frontier.
///
/// # Errors
/// Propagates any I/O error from `writer`.
pub fn dump(arena: &Arena, writer: &mut dyn Write) -> io::Result<()> {
    let end = arena.end();
    for loc in 0..end {
        let term = arena.get(loc);
        if term.is_void() {
            continue;
        }
        let raw_tag = (term.raw() & 0xFF) as u8;
        writeln!(writer, "set(heap, {loc}, new_term({}, {}, {}));", tag_name(raw_tag), term.label(), term.loc())?;
    }
    Ok(())
}

/// Collects the same lines [`dump`] would write, as strings. Test-only: every non-test caller
/// already has a [`Write`] sink to hand `dump` directly (the runner writes to a file).
#[cfg(test)]
#[must_use]
fn dump_lines(arena: &Arena) -> Vec<String> {
    let mut buf = Vec::new();
    dump(arena, &mut buf).expect("writing to an in-memory buffer cannot fail");
    String::from_utf8(buf)
        .expect("dump output is always ASCII")
        .lines()
        .map(ToOwned::to_owned)
        .collect()
}
