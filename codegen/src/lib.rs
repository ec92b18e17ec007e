//! Bit-count code generator.
//!
//! Produces the 8-bit population-count lookup table as a C/C++ source
//! fragment (`uint8_t lookupTable[256] = { ... }`) ready to paste into a
//! consumer that counts bits one byte at a time.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod emit;
pub mod lookup;
pub mod popcount;
pub mod table;

use std::io::Write;

use anyhow::{Context, Result};

/// Report of what was generated.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Number of table entries written.
    pub entries: usize,
    /// Number of rows in the table body.
    pub rows: usize,
    /// Bytes written to the output.
    pub bytes: usize,
}

/// Generates the lookup table fragment into `out`.
///
/// # Errors
///
/// Returns an error if `out` cannot be written or flushed.
pub fn generate<W: Write>(out: &mut W) -> Result<GenerationReport> {
    let table = table::emit_lookup_table(out)
        .with_context(|| format!("Failed to emit `{}`", table::TABLE_NAME))?;

    let report = GenerationReport {
        entries: table.entries,
        rows: table.rows,
        bytes: table.bytes,
    };
    log::debug!(
        "Generated {}: {} entries in {} rows, {} bytes",
        table::TABLE_NAME,
        report.entries,
        report.rows,
        report.bytes
    );
    Ok(report)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn generate_writes_full_table() {
        let mut out = Vec::new();
        let report = generate(&mut out).unwrap();
        assert_eq!(
            report,
            GenerationReport {
                entries: 256,
                rows: 16,
                bytes: out.len(),
            }
        );
        assert!(out.starts_with(b"uint8_t lookupTable[256] = {\n\t0, 1, 1, 2, "));
        assert!(out.ends_with(b"7, 7, 8 \n}\n"));
    }
}
