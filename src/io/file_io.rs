//! File open helpers for the decode driver.
//!
//! - [`open_src_file`] — resolves a path string to a `Box<dyn Read>`,
//!   handling the `"stdin"` sentinel and rejecting directories.
//! - [`open_dst_file`] — resolves a path string to a [`DstFile`],
//!   handling the `"stdout"` and discard sentinels and enforcing the
//!   overwrite policy from [`Prefs`].

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, IsTerminal, Read, Write};
use std::path::Path;

use crate::cli::constants::display_level;
use crate::displaylevel;
use crate::io::prefs::Prefs;
use crate::util::is_directory;

// ---------------------------------------------------------------------------
// Sentinel strings
// ---------------------------------------------------------------------------

/// Sentinel: read from standard input.
pub const STDIN_MARK: &str = "stdin";

/// Sentinel: write to standard output.
pub const STDOUT_MARK: &str = "stdout";

/// Sentinel: discard output.
#[cfg(windows)]
pub const NUL_MARK: &str = "nul";
#[cfg(not(windows))]
pub const NUL_MARK: &str = "/dev/null";

/// Alternate spelling accepted on the command line for discard output.
pub const NULL_OUTPUT: &str = "null";

#[inline]
pub fn is_stdin(s: &str) -> bool {
    s == STDIN_MARK
}

#[inline]
pub fn is_stdout(s: &str) -> bool {
    s == STDOUT_MARK
}

#[inline]
pub fn is_dev_null(s: &str) -> bool {
    s == NUL_MARK
}

// ---------------------------------------------------------------------------
// Source file
// ---------------------------------------------------------------------------

/// Opens a source for reading.
///
/// - `"stdin"` returns standard input.
/// - A directory is rejected with [`io::ErrorKind::InvalidInput`].
/// - Anything else is opened as a file behind a [`BufReader`].
pub fn open_src_file(path: &str) -> io::Result<Box<dyn Read>> {
    if is_stdin(path) {
        displaylevel!(4, "Using stdin for input\n");
        return Ok(Box::new(io::stdin()));
    }

    if is_directory(Path::new(path)) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{}: is a directory", path),
        ));
    }

    let f = File::open(path)?;
    Ok(Box::new(BufReader::new(f)))
}

// ---------------------------------------------------------------------------
// Destination file
// ---------------------------------------------------------------------------

/// A write-capable destination produced by [`open_dst_file`]: a regular
/// file, stdout, or a discard sink.
pub struct DstFile {
    inner: Box<dyn Write>,
    /// `true` when the destination is a regular file on disk.
    pub is_file: bool,
}

impl Write for DstFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }
    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Asks on stderr whether `path` may be overwritten.  Only called when
/// stdin is a terminal.
fn confirm_overwrite(path: &str) -> io::Result<bool> {
    eprint!("{} already exists; do you want to overwrite (y/N) ? ", path);
    let _ = io::stderr().flush();
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let first = line.trim_start().chars().next().unwrap_or('\0');
    Ok(first == 'y' || first == 'Y')
}

/// Opens a destination for writing.
///
/// - `"stdout"` → stdout.
/// - [`NUL_MARK`] → [`io::sink`].
/// - An existing file is only replaced when `prefs.overwrite` is set, or
///   after an interactive confirmation when stdin is a terminal and the
///   display level is above 1.  Otherwise the call fails with
///   [`io::ErrorKind::AlreadyExists`].
pub fn open_dst_file(path: &str, prefs: &Prefs) -> io::Result<DstFile> {
    let may_ask = display_level() > 1 && io::stdin().is_terminal();
    open_dst(path, prefs, may_ask)
}

fn open_dst(path: &str, prefs: &Prefs, may_ask: bool) -> io::Result<DstFile> {
    if is_stdout(path) {
        displaylevel!(4, "Using stdout for output\n");
        return Ok(DstFile {
            inner: Box::new(io::stdout()),
            is_file: false,
        });
    }

    if is_dev_null(path) {
        return Ok(DstFile {
            inner: Box::new(io::sink()),
            is_file: false,
        });
    }

    if !prefs.overwrite
        && Path::new(path).exists()
        && (!may_ask || !confirm_overwrite(path)?)
    {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{}: already exists; not overwritten", path),
        ));
    }

    let f = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    Ok(DstFile {
        inner: Box::new(io::BufWriter::new(f)),
        is_file: true,
    })
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
