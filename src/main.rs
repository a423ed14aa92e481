//! Binary entry point for the `lz4-block` command-line tool.
//!
//! 1. [`parse_args`] processes all flags and resolves input/output names.
//! 2. [`ParsedArgs::apply_console`] refuses terminal input, and terminal
//!    output without `-c`.
//! 3. [`run`] decodes the block and prints the optional digest.
//!
//! Errors are reported on stderr at display level 1 and turn into exit
//! code 1.

use std::process::ExitCode;

use lz4_block::cli::args::{parse_args, Console, ParsedArgs};
use lz4_block::cli::constants::{set_display_level, PROGRAM_NAME};
use lz4_block::io::{decompress_filename, STDOUT_MARK};

fn run(args: &ParsedArgs) -> anyhow::Result<()> {
    lz4_block::displaylevel!(
        3,
        "*** {} v{} {}-bit ***\n",
        PROGRAM_NAME,
        lz4_block::VERSION_STRING,
        std::mem::size_of::<*const ()>() * 8
    );
    lz4_block::displaylevel!(
        4,
        "{} -> {} (size hint {:?}, max size {:?})\n",
        args.input_filename,
        args.output_filename,
        args.prefs.size_hint,
        args.prefs.max_size
    );

    let stats = decompress_filename(&args.input_filename, &args.output_filename, &args.prefs)?;

    if let Some(digest) = stats.checksum {
        // Keep the digest off stdout when stdout carries the decoded bytes.
        if args.output_filename == STDOUT_MARK {
            lz4_block::display!("{:08x}  {}\n", digest, args.input_filename);
        } else {
            lz4_block::displayout!("{:08x}  {}\n", digest, args.input_filename);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let mut args = match parse_args() {
        Ok(args) => args,
        Err(e) => match e.downcast::<clap::Error>() {
            // --help, --version and usage errors are printed by clap.
            Ok(clap_err) => clap_err.exit(),
            Err(e) => {
                lz4_block::display!("{}: bad usage: {}\n", PROGRAM_NAME, e);
                return ExitCode::FAILURE;
            }
        },
    };
    set_display_level(args.display_level);
    if let Err(e) = args.apply_console(Console::detect()) {
        lz4_block::displaylevel!(1, "{}: {}\n", PROGRAM_NAME, e);
        return ExitCode::FAILURE;
    }
    set_display_level(args.display_level);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            lz4_block::displaylevel!(1, "{}: {:#}\n", PROGRAM_NAME, e);
            ExitCode::FAILURE
        }
    }
}
