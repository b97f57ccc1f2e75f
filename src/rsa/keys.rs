// RSA Key Material
// Block sizes derived from the modulus and direction-tagged exponents

use super::bigint::RsaBigInt;
use super::error::{Error, Result};

/// Block sizes derived from a modulus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyParameters {
    modulus: RsaBigInt,
    n_bytes: usize,
    plain_bytes: usize,
}

impl KeyParameters {
    /// Derive block sizes from `modulus`.
    ///
    /// `n_bytes` holds any residue mod N; `plain_bytes` is one bit short of
    /// the modulus so every plaintext block value stays below N.
    pub fn new(modulus: RsaBigInt) -> Result<Self> {
        let bits = modulus.bits();
        let plain_bytes = (bits.saturating_sub(1) / 8) as usize;
        if plain_bytes == 0 {
            return Err(Error::KeyTooSmall { bits });
        }

        let n_bytes = ((bits + 7) / 8) as usize;

        Ok(Self {
            modulus,
            n_bytes,
            plain_bytes,
        })
    }

    pub fn modulus(&self) -> &RsaBigInt {
        &self.modulus
    }

    /// Ciphertext block size in bytes
    pub fn n_bytes(&self) -> usize {
        self.n_bytes
    }

    /// Plaintext block size in bytes
    pub fn plain_bytes(&self) -> usize {
        self.plain_bytes
    }

    /// Bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.modulus.bits()
    }
}

/// A modulus with an exponent whose direction is not yet known,
/// as read from a key file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMaterial {
    pub params: KeyParameters,
    pub exponent: RsaBigInt,
}

impl KeyMaterial {
    pub fn new(modulus: RsaBigInt, exponent: RsaBigInt) -> Result<Self> {
        Ok(Self {
            params: KeyParameters::new(modulus)?,
            exponent,
        })
    }

    /// Use the exponent for encryption
    pub fn encryption_key(&self) -> EncryptionKey {
        EncryptionKey {
            params: self.params.clone(),
            e: self.exponent.clone(),
        }
    }

    /// Use the exponent for decryption
    pub fn decryption_key(&self) -> DecryptionKey {
        DecryptionKey {
            params: self.params.clone(),
            d: self.exponent.clone(),
        }
    }
}

/// Key that can only encrypt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptionKey {
    pub params: KeyParameters,
    pub e: RsaBigInt,
}

/// Key that can only decrypt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptionKey {
    pub params: KeyParameters,
    pub d: RsaBigInt,
}

impl EncryptionKey {
    pub fn new(modulus: RsaBigInt, e: RsaBigInt) -> Result<Self> {
        Ok(Self {
            params: KeyParameters::new(modulus)?,
            e,
        })
    }

    /// Encrypt a message using this key
    /// Returns ciphertext as bytes
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        use super::encrypt::encrypt_bytes;
        encrypt_bytes(plaintext, self)
    }
}

impl DecryptionKey {
    pub fn new(modulus: RsaBigInt, d: RsaBigInt) -> Result<Self> {
        Ok(Self {
            params: KeyParameters::new(modulus)?,
            d,
        })
    }

    /// Decrypt a ciphertext using this key
    /// Returns plaintext as bytes
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        use super::decrypt::decrypt_bytes;
        decrypt_bytes(ciphertext, self)
    }
}
