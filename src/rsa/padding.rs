// Length-Header Framing
// Format: 8-byte big-endian length || payload || zero fill to the block size
//
// The zero fill is not a secure padding scheme; it only aligns the frame.

use super::error::{Error, Result};

/// Size of the big-endian length header in bytes
pub const HEADER_SIZE: usize = 8;

/// Prefix `plaintext` with its length and zero-fill to a multiple of `block_size`.
pub fn encode(plaintext: &[u8], block_size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(HEADER_SIZE + plaintext.len() + block_size);
    data.extend_from_slice(&(plaintext.len() as u64).to_be_bytes());
    data.extend_from_slice(plaintext);

    let rem = data.len().checked_rem(block_size).unwrap_or(0);
    if rem != 0 {
        data.resize(data.len() + block_size - rem, 0);
    }

    data
}

/// Read the length header and return exactly that many payload bytes,
/// discarding the zero fill.
pub fn decode(decrypted: &[u8]) -> Result<Vec<u8>> {
    if decrypted.len() < HEADER_SIZE {
        return Err(Error::ShortHeader {
            len: decrypted.len(),
        });
    }

    let (header, body) = decrypted.split_at(HEADER_SIZE);
    let mut len_bytes = [0u8; HEADER_SIZE];
    len_bytes.copy_from_slice(header);
    let declared = u64::from_be_bytes(len_bytes);

    match usize::try_from(declared) {
        Ok(len) if len <= body.len() => Ok(body[..len].to_vec()),
        _ => Err(Error::TruncatedFrame {
            declared,
            available: body.len(),
        }),
    }
}
