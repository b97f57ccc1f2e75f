// RSA Decryption Implementation
// Exponentiates ciphertext block by block, then strips the frame

use super::error::{Error, Result};
use super::keys::DecryptionKey;
use super::padding::decode;
use super::transform::{transform_blocks, TransformConfig};

/// Decrypt ciphertext bytes using a decryption key
/// Returns the original payload
pub fn decrypt_bytes(ciphertext: &[u8], key: &DecryptionKey) -> Result<Vec<u8>> {
    decrypt_bytes_with(ciphertext, key, &TransformConfig::default())
}

pub fn decrypt_bytes_with(
    ciphertext: &[u8],
    key: &DecryptionKey,
    config: &TransformConfig,
) -> Result<Vec<u8>> {
    let params = &key.params;

    // Validate ciphertext size
    if ciphertext.len() % params.n_bytes() != 0 {
        return Err(Error::UnalignedInput {
            block_size: params.n_bytes(),
            len: ciphertext.len(),
        });
    }

    let decrypted = transform_blocks(
        ciphertext,
        &key.d,
        params.modulus(),
        params.n_bytes(),
        params.plain_bytes(),
        config,
    )?;

    decode(&decrypted)
}

/// Decrypt ciphertext to a string
pub fn decrypt_to_string(ciphertext: &[u8], key: &DecryptionKey) -> anyhow::Result<String> {
    let plaintext = decrypt_bytes(ciphertext, key)?;
    Ok(String::from_utf8(plaintext)?)
}
