use crate::cli::{
    args::{EncodeArgs, Width},
    config::Settings,
    handlers::{exit_code, read_tokens},
};
use k_hhc::{HhcInt, encode_padded, encode_unpadded};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;

pub fn handle(args: EncodeArgs, settings: &Settings) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let width = args.width.unwrap_or(settings.width);
    let padded = if args.unpadded {
        false
    } else {
        args.padded || settings.padded
    };

    let values = read_tokens(args.values)?;
    debug!(count = values.len(), %width, padded, "encoding values");

    match width {
        Width::Bits32 => encode_all::<u32>(&values, padded),
        Width::Bits64 => encode_all::<u64>(&values, padded),
    }
}

fn encode_all<T: HhcInt>(
    values: &[String],
    padded: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut stdout = io::stdout().lock();
    let mut buf = T::Buffer::default();
    let mut failures = 0;

    for token in values {
        let Ok(value) = token.parse::<T>() else {
            eprintln!(
                "error: '{}' is not a valid {}-bit unsigned integer",
                token,
                T::BITS
            );
            failures += 1;
            continue;
        };

        let encoded = if padded {
            encode_padded(value, &mut buf)
        } else {
            encode_unpadded(value, &mut buf)
        };
        writeln!(stdout, "{}", encoded)?;
    }

    stdout.flush()?;
    Ok(exit_code(failures))
}
