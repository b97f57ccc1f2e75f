// Block Transform
// Shared block-by-block exponentiation used by both directions

use rayon::prelude::*;

use super::bigint::{from_bytes, pow_mod, to_bytes_padded, RsaBigInt};
use super::chunk::split;
use super::decrypt::decrypt_bytes_with;
use super::encrypt::encrypt_bytes_with;
use super::error::Result;
use super::keys::KeyMaterial;
use super::mode::{decide, Mode};

/// Configuration for block transforms
#[derive(Clone, Debug)]
pub struct TransformConfig {
    /// Transform blocks on the rayon pool instead of one at a time
    pub parallel: bool,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl TransformConfig {
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Raise one big-endian block to `exponent` mod `modulus` and re-encode
/// the result as exactly `out_len` bytes.
pub fn transform_block(
    block: &[u8],
    exponent: &RsaBigInt,
    modulus: &RsaBigInt,
    out_len: usize,
) -> Result<Vec<u8>> {
    let x = from_bytes(block);
    let y = pow_mod(&x, exponent, modulus)?;
    to_bytes_padded(&y, out_len)
}

/// Split `data` into `in_len` blocks, transform each, and concatenate the
/// `out_len` results in input order.
pub fn transform_blocks(
    data: &[u8],
    exponent: &RsaBigInt,
    modulus: &RsaBigInt,
    in_len: usize,
    out_len: usize,
    config: &TransformConfig,
) -> Result<Vec<u8>> {
    let blocks = split(data, in_len)?;
    tracing::debug!(
        blocks = blocks.len(),
        in_len,
        out_len,
        parallel = config.parallel,
        "transforming blocks"
    );

    let out: Vec<Vec<u8>> = if config.parallel {
        blocks
            .par_iter()
            .map(|block| transform_block(block, exponent, modulus, out_len))
            .collect::<Result<_>>()?
    } else {
        blocks
            .iter()
            .map(|block| transform_block(block, exponent, modulus, out_len))
            .collect::<Result<_>>()?
    };

    Ok(out.concat())
}

/// Classify `input`, tag the key's exponent for that direction and run it.
pub fn process(
    material: &KeyMaterial,
    input: &[u8],
    config: &TransformConfig,
) -> Result<(Mode, Vec<u8>)> {
    let mode = decide(input.len(), material.params.n_bytes());
    tracing::debug!(%mode, input_len = input.len(), n_bytes = material.params.n_bytes(), "mode decided");

    let output = match mode {
        Mode::Encrypt => encrypt_bytes_with(input, &material.encryption_key(), config)?,
        Mode::Decrypt => decrypt_bytes_with(input, &material.decryption_key(), config)?,
    };

    Ok((mode, output))
}
