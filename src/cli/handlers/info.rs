use crate::cli::args::InfoArgs;
use k_hhc::{ALPHABET, BASE, HhcInt, PADDING};
use serde::Serialize;
use std::process::ExitCode;

#[derive(Serialize)]
struct Info {
    alphabet: &'static str,
    base: usize,
    padding: char,
    widths: Vec<WidthInfo>,
}

#[derive(Serialize)]
struct WidthInfo {
    bits: u32,
    encoded_length: usize,
    max_string: &'static str,
    max_value: u64,
}

impl WidthInfo {
    fn of<T: HhcInt + Into<u64>>(max_value: T) -> Self {
        WidthInfo {
            bits: T::BITS,
            encoded_length: T::ENCODED_LENGTH,
            max_string: T::MAX_STRING,
            max_value: max_value.into(),
        }
    }
}

pub fn handle(args: InfoArgs) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let info = Info {
        alphabet: ALPHABET,
        base: BASE,
        padding: char::from(PADDING),
        widths: vec![WidthInfo::of(u32::MAX), WidthInfo::of(u64::MAX)],
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("Alphabet: {}", info.alphabet);
    println!("Base:     {}", info.base);
    println!("Padding:  {}", info.padding);
    println!();
    for width in &info.widths {
        println!(
            "  {}-bit  {:>2} characters  max {} = {}",
            width.bits, width.encoded_length, width.max_string, width.max_value
        );
    }
    Ok(ExitCode::SUCCESS)
}
