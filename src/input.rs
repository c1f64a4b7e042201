use std::fmt;
use std::io::{BufRead, Write};

use crate::choice::Choice;

#[derive(Debug)]
pub enum InputError {
    Decode(std::string::FromUtf8Error),
    Io(std::io::Error),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Decode(e) => write!(f, "input is not valid UTF-8: {}", e),
            InputError::Io(e) => write!(f, "failed to read input: {}", e),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Decode(e) => Some(e),
            InputError::Io(e) => Some(e),
        }
    }
}

/// Reads through the next newline (or end of stream) and trims the result.
/// End of stream yields an empty string.
pub fn read_raw_line<R: BufRead>(reader: &mut R) -> std::result::Result<String, InputError> {
    let mut buffer = Vec::new();
    reader
        .read_until(b'\n', &mut buffer)
        .map_err(InputError::Io)?;
    let text = String::from_utf8(buffer).map_err(InputError::Decode)?;
    Ok(text.trim().to_string())
}

/// Never fails: unreadable input becomes an empty string, which no choice parses.
pub fn read_line<R: BufRead, W: Write>(reader: &mut R, out: &mut W) -> String {
    match read_raw_line(reader) {
        Ok(line) => line,
        Err(InputError::Decode(e)) => {
            log::debug!("discarding undecodable input: {}", e);
            let _ = writeln!(out, "Could not get string from data.");
            String::new()
        }
        Err(e) => {
            log::warn!("{}", e);
            String::new()
        }
    }
}

pub fn read_choice<R: BufRead, W: Write>(reader: &mut R, out: &mut W) -> Option<Choice> {
    Choice::parse(&read_line(reader, out))
}
