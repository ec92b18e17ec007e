//! `generate-bit-count` — Prints the 8-bit bit-count lookup table as a C/C++
//! source fragment.
//!
//! The table is written to stdout and nothing else is; diagnostics go to
//! stderr through `env_logger` (`RUST_LOG=debug` shows the generation report).
//!
//! **Usage:**
//! ```
//! generate-bit-count > table.inc
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::io;

use anyhow::{bail, Context, Result};
use clap::Parser;

/// Print the 8-bit population-count lookup table.
#[derive(Parser)]
#[command(
    name = "generate-bit-count",
    version,
    about = "Print a C/C++ uint8_t lookup table of bit counts for 0..256"
)]
struct Args {}

/// Fails if fd 1 was closed when the process started.
///
/// The runtime reopens a closed fd 1 read-write on `/dev/null` before `main`
/// runs, so writes to it vanish and succeed. A shell redirect to `/dev/null`
/// opens it write-only and is left alone.
#[cfg(unix)]
fn ensure_stdout_open() -> Result<()> {
    use std::fs::{self, File};
    use std::os::fd::AsFd;
    use std::os::unix::fs::{FileTypeExt, MetadataExt};

    // SAFETY: F_GETFL only reads the status flags of fd 1.
    let flags = unsafe { libc::fcntl(libc::STDOUT_FILENO, libc::F_GETFL) };
    if flags == -1 {
        return Err(io::Error::last_os_error()).context("stdout is not open");
    }
    if flags & libc::O_ACCMODE != libc::O_RDWR {
        return Ok(());
    }

    let fd = io::stdout()
        .as_fd()
        .try_clone_to_owned()
        .context("Failed to inspect stdout")?;
    let meta = File::from(fd)
        .metadata()
        .context("Failed to inspect stdout")?;
    let Ok(null) = fs::metadata("/dev/null") else {
        return Ok(());
    };
    if meta.file_type().is_char_device() && meta.rdev() == null.rdev() {
        bail!("stdout was closed at startup");
    }
    Ok(())
}

#[cfg(not(unix))]
fn ensure_stdout_open() -> Result<()> {
    Ok(())
}

fn main() -> Result<()> {
    let _args = Args::parse();
    env_logger::init();

    ensure_stdout_open().context("Failed to write lookup table to stdout")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = bitcount_codegen::generate(&mut out)
        .context("Failed to write lookup table to stdout")?;

    log::info!(
        "Wrote {} entries ({} bytes) to stdout",
        report.entries,
        report.bytes
    );
    Ok(())
}
