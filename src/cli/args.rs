use clap::{Args, Subcommand, ValueEnum};
use serde::Deserialize;
use std::fmt;

/// Integer width to encode or decode
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(try_from = "u32")]
pub enum Width {
    /// 32-bit values, 6-character encodings
    #[value(name = "32")]
    Bits32,
    /// 64-bit values, 11-character encodings
    #[value(name = "64")]
    Bits64,
}

impl TryFrom<u32> for Width {
    type Error = String;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            32 => Ok(Width::Bits32),
            64 => Ok(Width::Bits64),
            other => Err(format!("unsupported width {}, expected 32 or 64", other)),
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Width::Bits32 => write!(f, "32"),
            Width::Bits64 => write!(f, "64"),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode integers as base-66 strings
    Encode(EncodeArgs),
    /// Decode base-66 strings back to integers
    Decode(DecodeArgs),
    /// Check strings without printing decoded values
    Validate(ValidateArgs),
    /// Show the alphabet and per-width constants
    Info(InfoArgs),
}

/// Arguments for encoding integers
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Values to encode (reads whitespace-separated values from stdin if none given)
    pub values: Vec<String>,

    /// Integer width
    #[arg(short = 'w', long, value_enum)]
    pub width: Option<Width>,

    /// Strip leading padding digits
    #[arg(short = 'u', long, conflicts_with = "padded")]
    pub unpadded: bool,

    /// Always emit the full fixed-width encoding
    #[arg(short = 'p', long)]
    pub padded: bool,
}

/// Arguments for decoding strings
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Strings to decode (reads whitespace-separated strings from stdin if none given).
    /// Put `--` before the strings when one starts with '-'
    pub strings: Vec<String>,

    /// Integer width
    #[arg(short = 'w', long, value_enum)]
    pub width: Option<Width>,
}

/// Arguments for validating strings
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Strings to check (reads whitespace-separated strings from stdin if none given).
    /// Put `--` before the strings when one starts with '-'
    pub strings: Vec<String>,

    /// Integer width
    #[arg(short = 'w', long, value_enum)]
    pub width: Option<Width>,
}

/// Arguments for showing codec information
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}
