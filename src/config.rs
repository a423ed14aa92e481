// config.rs — Compile-time defaults for the command-line front end.

// Default display level: 0 = silent, 1 = errors, 2 = normal, 3 = info, 4 = verbose.
pub const DISPLAY_LEVEL_DEFAULT: u32 = 2;

// Highest display level that changes output.
pub const DISPLAY_LEVEL_MAX: u32 = 5;

// Extension stripped from the input name to derive the output name.
pub const LZ4_EXTENSION: &str = ".lz4";
