// File Operations for RSA Encryption/Decryption
// Handles key files and whole-file reading and writing

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use num_bigint::BigUint;

use crate::rsa::{self, KeyMaterial};

/// Errors that can occur during file operations
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Key file is missing the {0} line")]
    MissingLine(&'static str),

    #[error("Invalid {field} in key file: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Crypto error: {0}")]
    Crypto(#[from] rsa::Error),
}

/// Result type for file operations
pub type FileResult<T> = Result<T, FileError>;

/// Parse key text: decimal modulus on the first line, decimal exponent on
/// the second. Blank lines and surrounding whitespace are ignored.
pub fn parse_key_text(text: &str) -> FileResult<KeyMaterial> {
    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());

    let modulus = parse_decimal(lines.next(), "modulus")?;
    let exponent = parse_decimal(lines.next(), "exponent")?;

    Ok(KeyMaterial::new(modulus, exponent)?)
}

fn parse_decimal(line: Option<&str>, field: &'static str) -> FileResult<BigUint> {
    let line = line.ok_or(FileError::MissingLine(field))?;
    BigUint::parse_bytes(line.as_bytes(), 10).ok_or_else(|| FileError::InvalidNumber {
        field,
        value: line.to_string(),
    })
}

/// Read and parse a key file
pub fn read_key_file(path: &Path) -> FileResult<KeyMaterial> {
    let text = std::fs::read_to_string(path)?;
    parse_key_text(&text)
}

/// Read entire file into memory
pub fn read_file(path: &Path) -> FileResult<Vec<u8>> {
    let mut file = File::open(path)?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)?;
    Ok(data)
}

/// Write data to file
pub fn write_file(path: &Path, data: &[u8]) -> FileResult<()> {
    let mut file = File::create(path)?;
    file.write_all(data)?;
    Ok(())
}
