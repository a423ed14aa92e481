//! File-level decode driver.
//!
//! Reads one whole raw LZ4 block from a file or stdin, decodes it, and
//! writes the result to a file, stdout, or a discard sink.  The block is
//! decoded before the destination is opened, so corrupt input never
//! truncates an existing output file.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::Context;
use xxhash_rust::xxh32::xxh32;

use crate::block::{decode, decode_with_limit, DecompressError};
use crate::displaylevel;
use crate::io::file_io::{is_stdin, open_dst_file, open_src_file};
use crate::io::prefs::Prefs;
use crate::util::copy_file_mtime;

/// Seed used for the content digest.
pub const XXH32_SEED: u32 = 0;

/// Summary of one decoded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecompressStats {
    pub compressed_bytes: u64,
    pub decompressed_bytes: u64,
    /// XXH32 of the decoded bytes, when requested through
    /// [`Prefs::content_checksum`].
    pub checksum: Option<u32>,
}

/// Decodes an in-memory block honouring the size hint and output limit in
/// `prefs`.
pub fn decode_buffer(compressed: &[u8], prefs: &Prefs) -> Result<Vec<u8>, DecompressError> {
    let hint = prefs.size_hint.map(Vec::with_capacity);
    match prefs.max_size {
        Some(limit) => decode_with_limit(hint, compressed, limit),
        None => decode(hint, compressed),
    }
}

/// Decodes the block stored in `src` and writes it to `dst`.
///
/// `src` may be the stdin sentinel; `dst` may be the stdout or discard
/// sentinel.  When both ends are regular files the output takes the
/// source's modification time.  With `prefs.remove_src_file` the source
/// file is deleted after the output has been written.
pub fn decompress_filename(src: &str, dst: &str, prefs: &Prefs) -> anyhow::Result<DecompressStats> {
    let mut reader = open_src_file(src).with_context(|| format!("{}: cannot open", src))?;
    let mut compressed = Vec::new();
    reader
        .read_to_end(&mut compressed)
        .with_context(|| format!("{}: read error", src))?;
    displaylevel!(4, "{}: read {} compressed bytes\n", src, compressed.len());

    let decoded = decode_buffer(&compressed, prefs).with_context(|| format!("{}: decoding failed", src))?;

    let mut out = open_dst_file(dst, prefs).with_context(|| format!("{}: cannot open for writing", dst))?;
    out.write_all(&decoded)
        .and_then(|()| out.flush())
        .with_context(|| format!("{}: write error", dst))?;
    let dst_is_file = out.is_file;
    drop(out);

    if dst_is_file && !is_stdin(src) {
        if let Err(e) = copy_file_mtime(Path::new(src), Path::new(dst)) {
            displaylevel!(2, "Warning : {}: could not copy file time: {}\n", dst, e);
        }
    }

    if prefs.remove_src_file && !is_stdin(src) {
        fs::remove_file(src).with_context(|| format!("{}: cannot remove", src))?;
    }

    displaylevel!(
        2,
        "{:<30}: decoded {} bytes into {} bytes\n",
        src,
        compressed.len(),
        decoded.len()
    );

    Ok(DecompressStats {
        compressed_bytes: compressed.len() as u64,
        decompressed_bytes: decoded.len() as u64,
        checksum: prefs.content_checksum.then(|| xxh32(&decoded, XXH32_SEED)),
    })
}
