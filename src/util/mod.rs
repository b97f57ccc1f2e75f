// Utility Module
// File and key-file handling around the RSA core

pub mod file_ops;

pub use file_ops::{parse_key_text, read_file, read_key_file, write_file, FileError, FileResult};
