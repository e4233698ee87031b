use crate::cli::{
    args::{DecodeArgs, Width},
    config::Settings,
    handlers::{exit_code, read_tokens},
};
use k_hhc::{HhcInt, decode};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;

pub fn handle(args: DecodeArgs, settings: &Settings) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let width = args.width.unwrap_or(settings.width);
    let strings = read_tokens(args.strings)?;
    debug!(count = strings.len(), %width, "decoding strings");

    match width {
        Width::Bits32 => decode_all::<u32>(&strings),
        Width::Bits64 => decode_all::<u64>(&strings),
    }
}

fn decode_all<T: HhcInt>(strings: &[String]) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut stdout = io::stdout().lock();
    let mut failures = 0;

    for token in strings {
        match decode::<T>(token) {
            Ok(value) => writeln!(stdout, "{}", value)?,
            Err(e) => {
                debug!(token = %token, kind = %e.kind(), "decode failed");
                eprintln!("error: '{}': {}", token, e);
                failures += 1;
            }
        }
    }

    stdout.flush()?;
    Ok(exit_code(failures))
}
