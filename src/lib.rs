//! RSA-style file transform and probable prime generation.
//!
//! Files are framed with an 8-byte length header, zero-filled to the
//! plaintext block size and exponentiated block by block under a supplied
//! modulus and exponent. Primes come from random sampling plus Fermat
//! testing. Textbook arithmetic only: the zero fill is not secure padding
//! and exponentiation is not constant-time.

pub mod rsa;
pub mod util;
