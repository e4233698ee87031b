pub mod decode;
pub mod encode;
pub mod info;
pub mod validate;

use std::io::{self, Read};
use std::process::ExitCode;

/// Returns `items`, or whitespace-separated tokens from stdin when empty.
pub fn read_tokens(items: Vec<String>) -> io::Result<Vec<String>> {
    if !items.is_empty() {
        return Ok(items);
    }
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer.split_whitespace().map(str::to_string).collect())
}

pub fn exit_code(failures: usize) -> ExitCode {
    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
