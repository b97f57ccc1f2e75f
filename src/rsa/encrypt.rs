// RSA Encryption Implementation
// Frames the plaintext, then exponentiates it block by block

use super::error::Result;
use super::keys::EncryptionKey;
use super::padding::encode;
use super::transform::{transform_blocks, TransformConfig};

/// Encrypt bytes using an encryption key
/// Returns ciphertext as bytes, `n_bytes` per plaintext block
pub fn encrypt_bytes(plaintext: &[u8], key: &EncryptionKey) -> Result<Vec<u8>> {
    encrypt_bytes_with(plaintext, key, &TransformConfig::default())
}

pub fn encrypt_bytes_with(
    plaintext: &[u8],
    key: &EncryptionKey,
    config: &TransformConfig,
) -> Result<Vec<u8>> {
    let params = &key.params;
    let frame = encode(plaintext, params.plain_bytes());
    tracing::debug!(payload = plaintext.len(), frame = frame.len(), "plaintext framed");

    transform_blocks(
        &frame,
        &key.e,
        params.modulus(),
        params.plain_bytes(),
        params.n_bytes(),
        config,
    )
}

/// Encrypt a string using an encryption key
pub fn encrypt_string(plaintext: &str, key: &EncryptionKey) -> Result<Vec<u8>> {
    encrypt_bytes(plaintext.as_bytes(), key)
}
