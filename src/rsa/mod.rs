// RSA Module - Main module file
// Exports the modular arithmetic, framing and transform functionality

pub mod bigint;
pub mod chunk;
pub mod decrypt;
pub mod encrypt;
pub mod error;
pub mod keys;
pub mod mode;
pub mod padding;
pub mod prime;
pub mod transform;

pub use bigint::{extended_gcd, pow_mod, RsaBigInt};
pub use decrypt::{decrypt_bytes, decrypt_bytes_with, decrypt_to_string};
pub use encrypt::{encrypt_bytes, encrypt_bytes_with, encrypt_string};
pub use error::{Error, Result};
pub use keys::{DecryptionKey, EncryptionKey, KeyMaterial, KeyParameters};
pub use mode::{decide, Mode};
pub use prime::{fermat, generate_candidate, miller_rabin, FERMAT_ROUNDS};
pub use transform::{process, TransformConfig};
