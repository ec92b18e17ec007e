//! Source fragment buffer and output helpers.

use std::fmt::Display;
use std::io::Write;

use anyhow::{Context, Result};

/// Accumulates generated source text before it is written out.
///
/// Unlike a whole-file emitter, a fragment carries no preamble: its text is
/// meant to be pasted into an existing file verbatim, so callers control
/// every byte including line breaks.
#[derive(Debug, Default)]
pub struct SourceFragment {
    buf: String,
}

impl SourceFragment {
    /// Starts a fragment with `header` as its first text (no trailing newline).
    pub fn new(header: &str) -> Self {
        Self {
            buf: header.to_string(),
        }
    }

    /// Appends `text` verbatim.
    pub fn text(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Appends the `Display` form of `value`.
    pub fn value<T: Display>(&mut self, value: T) {
        self.buf.push_str(&value.to_string());
    }

    /// Appends `text` followed by a newline.
    pub fn line(&mut self, text: &str) {
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    /// Consumes the fragment, returning its text.
    pub fn finish(self) -> String {
        self.buf
    }
}

/// Writes `content` to `out` and flushes it.
///
/// # Errors
///
/// Returns an error if the write or the flush fails. Nothing is retried.
pub fn write_fragment<W: Write>(out: &mut W, content: &str) -> Result<()> {
    out.write_all(content.as_bytes())
        .context("Failed to write generated fragment")?;
    out.flush().context("Failed to flush generated fragment")?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io;

    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn fragment_keeps_exact_text() {
        let mut f = SourceFragment::new("head {");
        f.text("\n\t");
        f.value(7u8);
        f.text(", ");
        f.line("");
        f.line("}");
        assert_eq!(f.finish(), "head {\n\t7, \n}\n");
    }

    #[test]
    fn write_fragment_copies_bytes() {
        let mut out = Vec::new();
        write_fragment(&mut out, "abc\n").unwrap();
        assert_eq!(out, b"abc\n");
    }

    #[test]
    fn write_failure_propagates() {
        let err = write_fragment(&mut ClosedPipe, "abc").unwrap_err();
        let io_err = err.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::BrokenPipe);
    }
}
