// RSA Errors
// Every error is fatal to the operation that raised it

/// Errors that can occur while transforming data or generating primes.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Modulus too small: {bits} bits leaves no room for a plaintext block")]
    KeyTooSmall { bits: u64 },

    #[error("Input not aligned to block size {block_size}: got {len} bytes")]
    UnalignedInput { block_size: usize, len: usize },

    #[error("Decrypted data too short for header: {len} bytes")]
    ShortHeader { len: usize },

    #[error("Decrypted length header mismatch: header says {declared} bytes, {available} available")]
    TruncatedFrame { declared: u64, available: usize },

    #[error("Transformed block needs {value_bytes} bytes but the output block holds {block_size}")]
    BlockOverflow { block_size: usize, value_bytes: usize },

    #[error("Modulus must be positive")]
    ZeroModulus,

    #[error("Bit length must be at least 2, got {bits}")]
    BitLengthTooSmall { bits: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;
