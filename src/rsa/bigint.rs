// RSA Big Integer Operations
// Wrapper around num-bigint for RSA-specific operations

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use super::error::{Error, Result};

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Create a big integer from bytes (big-endian)
pub fn from_bytes(bytes: &[u8]) -> RsaBigInt {
    RsaBigInt::from_bytes_be(bytes)
}

/// Convert big integer to exactly `width` big-endian bytes, zero-filled on the left.
///
/// Fails with [`Error::BlockOverflow`] when the value needs more than `width` bytes.
pub fn to_bytes_padded(n: &RsaBigInt, width: usize) -> Result<Vec<u8>> {
    if n.is_zero() {
        return Ok(vec![0u8; width]);
    }

    let bytes = n.to_bytes_be();
    if bytes.len() > width {
        return Err(Error::BlockOverflow {
            block_size: width,
            value_bytes: bytes.len(),
        });
    }

    let mut result = vec![0u8; width];
    result[width - bytes.len()..].copy_from_slice(&bytes);
    Ok(result)
}

/// Modular exponentiation: base^exp mod modulus
///
/// Left-to-right square-and-multiply over the bits of `exp`: square the
/// accumulator for every bit and multiply in `base` when the bit is set.
/// An exponent of zero yields 1. Not constant-time.
pub fn pow_mod(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> Result<RsaBigInt> {
    if modulus.is_zero() {
        return Err(Error::ZeroModulus);
    }

    let base = base % modulus;
    let mut result = RsaBigInt::one();

    for i in (0..exp.bits()).rev() {
        result = (&result * &result) % modulus;
        if exp.bit(i) {
            result = (&result * &base) % modulus;
        }
    }

    Ok(result)
}

/// Extended Euclidean Algorithm
///
/// Returns (x, y, d) such that a*x + b*y = d = gcd(a, b).
/// Iterative, so the depth does not grow with the operand size.
pub fn extended_gcd(a: &RsaBigInt, b: &RsaBigInt) -> (BigInt, BigInt, RsaBigInt) {
    let (mut old_r, mut r) = (BigInt::from(a.clone()), BigInt::from(b.clone()));
    let (mut old_x, mut x) = (BigInt::one(), BigInt::zero());
    let (mut old_y, mut y) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let (q, rem) = old_r.div_rem(&r);
        old_r = std::mem::replace(&mut r, rem);

        let next_x = &old_x - &q * &x;
        old_x = std::mem::replace(&mut x, next_x);

        let next_y = &old_y - &q * &y;
        old_y = std::mem::replace(&mut y, next_y);
    }

    // old_r is a non-negative remainder chain seeded from unsigned inputs
    let d = old_r.to_biguint().unwrap_or_default();
    (old_x, old_y, d)
}
