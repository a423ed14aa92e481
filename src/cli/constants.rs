// cli/constants.rs — program identity, display level, and display macros

use std::sync::atomic::{AtomicU32, Ordering};

use crate::config::DISPLAY_LEVEL_DEFAULT;

// ── Identity ──────────────────────────────────────────────────────────────────
pub const PROGRAM_NAME: &str = "lz4-block";

// ── Display level ─────────────────────────────────────────────────────────────
//
// 0 = no output; 1 = errors only; 2 = normal; 3 = info; 4 = verbose;
// 5 = decoder traces (debug builds only)
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(DISPLAY_LEVEL_DEFAULT);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

// ── Display helpers ───────────────────────────────────────────────────────────
//
//   displayout!(...)      → stdout
//   display!(...)         → stderr
//   displaylevel!(l, ...) → stderr when display_level() >= l
//   debugoutput!(...)     → stderr at level 5, debug builds only

/// Print to stdout.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => { print!($($arg)*) };
}

/// Print to stderr.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Conditionally print to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}

/// Decoder trace output.  Compiled out of release builds.
#[macro_export]
macro_rules! debugoutput {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) && $crate::cli::constants::display_level() >= 5 {
            eprint!($($arg)*);
        }
    };
}
