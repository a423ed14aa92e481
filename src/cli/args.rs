//! Command-line argument parsing for `lz4-block`.
//!
//! [`CliArgs`] is the raw `clap` definition.  [`ParsedArgs`] is what the
//! dispatch phase consumes: input and output resolved to concrete paths or
//! sentinels, the display level computed, and the decoding [`Prefs`] filled
//! in.  [`parse_args_from`] takes an explicit argument list so the whole
//! pipeline can be unit-tested.
//!
//! [`ParsedArgs::apply_console`] then checks the resolved names against the
//! terminal state of stdin and stdout, given as a [`Console`] value.

use std::io::IsTerminal;

use anyhow::{anyhow, bail};
use clap::{ArgAction, Parser};

use crate::config::{DISPLAY_LEVEL_DEFAULT, DISPLAY_LEVEL_MAX, LZ4_EXTENSION};
use crate::display;
use crate::io::file_io::{is_stdin, is_stdout, NULL_OUTPUT, NUL_MARK, STDIN_MARK, STDOUT_MARK};
use crate::io::prefs::Prefs;
use crate::util::strip_suffix;

/// Decode one raw LZ4 block (no frame header) to its original bytes.
#[derive(Debug, Parser)]
#[command(name = "lz4-block", version, about)]
pub struct CliArgs {
    /// Compressed block to read; `-` or omitted reads stdin.
    pub input: Option<String>,

    /// Destination; `-` writes stdout, `null` discards.  Derived from INPUT
    /// by stripping `.lz4` when omitted.
    pub output: Option<String>,

    /// Write to stdout regardless of OUTPUT.
    #[arg(short = 'c', long = "stdout")]
    pub stdout: bool,

    /// Overwrite existing output files.
    #[arg(short, long)]
    pub force: bool,

    /// More messages on stderr (repeatable).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Fewer messages on stderr (repeatable).
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Keep the input file (default).
    #[arg(short, long, overrides_with = "rm")]
    pub keep: bool,

    /// Remove the input file after a successful decode.
    #[arg(long, overrides_with = "keep")]
    pub rm: bool,

    /// Initial output buffer capacity in bytes.
    #[arg(long, value_name = "BYTES")]
    pub size_hint: Option<usize>,

    /// Reject blocks that decode to more than BYTES.
    #[arg(long, value_name = "BYTES")]
    pub max_size: Option<usize>,

    /// Print the XXH32 digest of the decoded output.
    #[arg(long)]
    pub xxh32: bool,
}

/// Fully resolved options ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArgs {
    /// Input path or [`STDIN_MARK`].
    pub input_filename: String,
    /// Output path, [`STDOUT_MARK`] or [`NUL_MARK`].
    pub output_filename: String,
    pub display_level: u32,
    /// `-c` was given.
    pub force_stdout: bool,
    pub prefs: Prefs,
}

/// Whether stdin and stdout are attached to a terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Console {
    pub stdin_is_tty: bool,
    pub stdout_is_tty: bool,
}

impl Console {
    /// Queries the process's standard streams.
    pub fn detect() -> Self {
        Self {
            stdin_is_tty: std::io::stdin().is_terminal(),
            stdout_is_tty: std::io::stdout().is_terminal(),
        }
    }
}

fn normalize_input(input: Option<&str>) -> String {
    match input {
        None | Some("-") | Some(STDIN_MARK) => STDIN_MARK.to_string(),
        Some(path) => path.to_string(),
    }
}

fn resolve_output(input: &str, output: Option<&str>, force_stdout: bool) -> anyhow::Result<String> {
    if force_stdout {
        return Ok(STDOUT_MARK.to_string());
    }
    match output {
        Some("-") | Some(STDOUT_MARK) => Ok(STDOUT_MARK.to_string()),
        Some(NULL_OUTPUT) => Ok(NUL_MARK.to_string()),
        Some(path) => Ok(path.to_string()),
        None if input == STDIN_MARK => Ok(STDOUT_MARK.to_string()),
        None => strip_suffix(input, LZ4_EXTENSION)
            .map(str::to_string)
            .ok_or_else(|| {
                anyhow!(
                    "cannot determine an output filename for '{}' (no {} extension); use -c or name OUTPUT",
                    input,
                    LZ4_EXTENSION
                )
            }),
    }
}

impl ParsedArgs {
    /// Resolves raw arguments into concrete names, display level and prefs.
    pub fn resolve(cli: CliArgs) -> anyhow::Result<Self> {
        let input_filename = normalize_input(cli.input.as_deref());
        let output_filename = resolve_output(&input_filename, cli.output.as_deref(), cli.stdout)?;

        let display_level = (DISPLAY_LEVEL_DEFAULT + cli.verbose as u32)
            .saturating_sub(cli.quiet as u32)
            .min(DISPLAY_LEVEL_MAX);

        if let (true, Some(ignored)) = (cli.stdout, cli.output.as_deref()) {
            if display_level >= 2 {
                display!("Warning : -c given, ignoring output file {}\n", ignored);
            }
        }

        let mut prefs = Prefs::default();
        prefs.set_overwrite(cli.force);
        prefs.set_remove_src_file(cli.rm);
        prefs.set_size_hint(cli.size_hint);
        prefs.set_max_size(cli.max_size);
        prefs.set_content_checksum(cli.xxh32);

        Ok(Self {
            input_filename,
            output_filename,
            display_level,
            force_stdout: cli.stdout,
            prefs,
        })
    }

    /// Refuses console I/O and quiets the summary line when decoded bytes go
    /// to stdout.
    ///
    /// - stdin as input fails when stdin is a terminal.
    /// - stdout as output fails when stdout is a terminal and `-c` was not
    ///   given.
    /// - stdout as output lowers display level 2 to 1.
    pub fn apply_console(&mut self, console: Console) -> anyhow::Result<()> {
        if is_stdin(&self.input_filename) && console.stdin_is_tty {
            bail!("refusing to read from a console");
        }
        if is_stdout(&self.output_filename) {
            if console.stdout_is_tty && !self.force_stdout {
                bail!("refusing to write to console without -c");
            }
            if self.display_level == 2 {
                self.display_level = 1;
            }
        }
        Ok(())
    }
}

/// Parses an explicit argument list (first element is the program name).
///
/// `--help` and `--version` surface as `Err` carrying a `clap::Error`; the
/// binary lets clap print those itself.
pub fn parse_args_from<I, T>(argv: I) -> anyhow::Result<ParsedArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = CliArgs::try_parse_from(argv)?;
    ParsedArgs::resolve(cli)
}

/// Parses `std::env::args()`.
pub fn parse_args() -> anyhow::Result<ParsedArgs> {
    parse_args_from(std::env::args_os())
}
