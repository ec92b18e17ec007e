//! Bit-count lookup table emitter.
//!
//! Renders the 8-bit population-count table as a C/C++ array declaration.
//! The layout is fixed byte-for-byte so the output can replace an existing
//! table without touching anything around it:
//!
//! - the header `uint8_t lookupTable[256] = {` with no newline after `{`;
//! - before every 16th entry, a newline and one tab;
//! - each entry as a decimal, followed by `,` unless it is the last one,
//!   and then always by a single space;
//! - a newline, `}` and a final newline.
//!
//! The first and last rows therefore read (`\t` is the tab, `␠` the trailing
//! space):
//!
//! ```text
//! \t0, 1, 1, 2, 1, 2, 2, 3, 1, 2, 2, 3, 2, 3, 3, 4,␠
//! \t4, 5, 5, 6, 5, 6, 6, 7, 5, 6, 6, 7, 6, 7, 7, 8␠
//! ```

use std::io::Write;

use anyhow::Result;

use crate::emit::{self, SourceFragment};
use crate::popcount::count_bits_set;

/// Element type of the emitted array.
pub const ELEMENT_TYPE: &str = "uint8_t";

/// Identifier of the emitted array.
pub const TABLE_NAME: &str = "lookupTable";

/// Number of entries: one per 8-bit value.
pub const ENTRY_COUNT: usize = 256;

/// Entries per row of the emitted body.
pub const VALUES_PER_ROW: usize = 16;

/// Indentation unit at the start of every row.
pub const INDENT: &str = "\t";

const LAST_INDEX: usize = ENTRY_COUNT - 1;

/// Summary of an emitted table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableReport {
    /// Entries written.
    pub entries: usize,
    /// Rows in the body.
    pub rows: usize,
    /// Bytes written to the output.
    pub bytes: usize,
}

/// Returns the table entries: `values[i] == count_bits_set(i)`.
pub fn lookup_values() -> [u8; ENTRY_COUNT] {
    let mut values = [0u8; ENTRY_COUNT];
    for (index, value) in (0u64..).zip(values.iter_mut()) {
        // At most 8 bits are set in an index below 256.
        *value = count_bits_set(index) as u8;
    }
    values
}

/// The declaration line up to and including the opening brace.
pub fn header() -> String {
    format!("{ELEMENT_TYPE} {TABLE_NAME}[{ENTRY_COUNT}] = {{")
}

/// Renders the complete table fragment.
pub fn render_lookup_table() -> String {
    let mut f = SourceFragment::new(&header());

    for (i, value) in lookup_values().iter().enumerate() {
        if i % VALUES_PER_ROW == 0 {
            f.text("\n");
            f.text(INDENT);
        }
        f.value(value);
        if i != LAST_INDEX {
            f.text(",");
        }
        f.text(" ");
    }

    f.text("\n");
    f.line("}");
    f.finish()
}

/// Renders the table and writes it to `out`.
///
/// # Errors
///
/// Returns an error as soon as writing or flushing `out` fails.
pub fn emit_lookup_table<W: Write>(out: &mut W) -> Result<TableReport> {
    let content = render_lookup_table();
    emit::write_fragment(out, &content)?;
    Ok(TableReport {
        entries: ENTRY_COUNT,
        rows: ENTRY_COUNT / VALUES_PER_ROW,
        bytes: content.len(),
    })
}
