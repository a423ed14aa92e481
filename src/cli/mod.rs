//! Command-line interface for the `lz4-block` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity, the shared `DISPLAY_LEVEL` atomic, and the display macros. |
//! | [`args`]      | `clap` definition and resolution into [`args::ParsedArgs`]. |
//!
//! Typical call sequence: `parse_args` → `set_display_level` →
//! `io::decompress_filename`.

pub mod constants;
pub mod args;
