use crate::cli::{
    args::{ValidateArgs, Width},
    config::Settings,
    handlers::{exit_code, read_tokens},
};
use k_hhc::{HhcInt, decode};
use std::io::{self, Write};
use std::process::ExitCode;

pub fn handle(
    args: ValidateArgs,
    settings: &Settings,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let width = args.width.unwrap_or(settings.width);
    let strings = read_tokens(args.strings)?;

    match width {
        Width::Bits32 => validate_all::<u32>(&strings),
        Width::Bits64 => validate_all::<u64>(&strings),
    }
}

fn validate_all<T: HhcInt>(strings: &[String]) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut stdout = io::stdout().lock();
    let mut failures = 0;

    for token in strings {
        match decode::<T>(token) {
            Ok(_) => writeln!(stdout, "{}\tok", token)?,
            Err(e) => {
                writeln!(stdout, "{}\t{}: {}", token, e.kind(), e)?;
                failures += 1;
            }
        }
    }

    stdout.flush()?;
    Ok(exit_code(failures))
}
