// Probable Prime Generation
// Fermat and Miller-Rabin tests plus the random candidate search

use num_bigint::RandBigInt;
use num_integer::Integer;
use num_traits::One;
use rand::Rng;

use super::bigint::{pow_mod, RsaBigInt};
use super::error::{Error, Result};

/// Fermat witnesses used when accepting a generated candidate.
pub const FERMAT_ROUNDS: usize = 20;

/// Number of factors of two in `n`. Zero has none by convention.
pub fn factor_two(n: &RsaBigInt) -> u64 {
    n.trailing_zeros().unwrap_or(0)
}

/// Single Fermat check: a^(n-1) mod n == 1
pub fn fermat_witness(n: &RsaBigInt, a: &RsaBigInt) -> bool {
    let n_minus_1 = n - 1u8;
    matches!(pow_mod(a, &n_minus_1, n), Ok(r) if r.is_one())
}

/// Single Miller-Rabin check for `n - 1 = 2^t * u` with `u` odd.
///
/// Walks a^u, a^(2u), ... a^(2^t u) = a^(n-1). A value of 1 reached from
/// anything other than 1 or n-1 is a nontrivial square root of unity, and
/// the walk must end at 1.
pub fn miller_rabin_witness(n: &RsaBigInt, a: &RsaBigInt, t: u64, u: &RsaBigInt) -> bool {
    let n_minus_1 = n - 1u8;

    let mut curr = match pow_mod(a, u, n) {
        Ok(v) => v,
        Err(_) => return false,
    };

    for _ in 0..t {
        let prev = curr;
        curr = (&prev * &prev) % n;
        if curr.is_one() && !prev.is_one() && prev != n_minus_1 {
            return false;
        }
    }

    curr.is_one()
}

/// Fermat primality test with `k` random witnesses in [1, n-1].
///
/// Carmichael numbers pass for every witness coprime to them, so a
/// composite can be reported as prime.
pub fn fermat<R: Rng + ?Sized>(n: &RsaBigInt, k: usize, rng: &mut R) -> bool {
    if *n <= RsaBigInt::one() {
        return false;
    }

    let one = RsaBigInt::one();
    (0..k).all(|_| {
        let a = rng.gen_biguint_range(&one, n);
        fermat_witness(n, &a)
    })
}

/// Miller-Rabin primality test with `k` random witnesses in [1, n-1].
///
/// Expects an odd candidate greater than 2.
pub fn miller_rabin<R: Rng + ?Sized>(n: &RsaBigInt, k: usize, rng: &mut R) -> bool {
    if *n <= RsaBigInt::one() {
        return false;
    }

    let n_minus_1 = n - 1u8;
    let t = factor_two(&n_minus_1);
    let u = &n_minus_1 >> t;

    let one = RsaBigInt::one();
    (0..k).all(|_| {
        let a = rng.gen_biguint_range(&one, n);
        miller_rabin_witness(n, &a, t, &u)
    })
}

/// Sample random integers of up to `bit_length` bits until one passes
/// the Fermat test with [`FERMAT_ROUNDS`] witnesses.
///
/// The top bit is not forced, so the result may be shorter than requested.
/// Even candidates are not filtered before testing.
pub fn generate_candidate<R: Rng + ?Sized>(bit_length: u64, rng: &mut R) -> Result<RsaBigInt> {
    // one bit only ever yields 0 or 1
    if bit_length < 2 {
        return Err(Error::BitLengthTooSmall { bits: bit_length });
    }

    let two = RsaBigInt::from(2u8);
    let mut attempts: u64 = 0;

    loop {
        attempts += 1;
        let candidate = rng.gen_biguint(bit_length);

        if candidate <= two {
            continue;
        }

        if fermat(&candidate, FERMAT_ROUNDS, rng) {
            tracing::debug!(bit_length, attempts, "found probable prime");
            return Ok(candidate);
        }

        tracing::trace!(attempts, even = candidate.is_even(), "candidate rejected");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::bigint::from_u64;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const CARMICHAEL: [u64; 4] = [561, 1105, 1729, 41041];

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn test_factor_two() {
        assert_eq!(factor_two(&from_u64(560)), 4);
        assert_eq!(factor_two(&from_u64(35)), 0);
        assert_eq!(factor_two(&from_u64(1 << 20)), 20);
    }

    #[test]
    fn test_known_primes() {
        let mut rng = rng();
        for p in [3u64, 5, 7, 13, 97, 7919, (1 << 31) - 1, (1 << 61) - 1] {
            let p = from_u64(p);
            assert!(fermat(&p, 20, &mut rng), "fermat rejected {}", p);
            assert!(miller_rabin(&p, 20, &mut rng), "miller-rabin rejected {}", p);
        }
    }

    #[test]
    fn test_known_composites() {
        let mut rng = rng();
        for n in [9u64, 15, 91, 7917, 1 << 20, 1_000_000_007 * 3] {
            let n = from_u64(n);
            assert!(!fermat(&n, 20, &mut rng), "fermat accepted {}", n);
            assert!(!miller_rabin(&n, 20, &mut rng), "miller-rabin accepted {}", n);
        }
    }

    #[test]
    fn test_carmichael_fools_fermat_witness() {
        // 2 is coprime to 561, so the Fermat check passes on a composite
        let n = from_u64(561);
        let a = from_u64(2);
        assert!(fermat_witness(&n, &a));

        // 2^35 -> 263 -> 166 -> 67 -> 1 exposes a nontrivial root of unity
        let n_minus_1 = &n - 1u8;
        let t = factor_two(&n_minus_1);
        let u = &n_minus_1 >> t;
        assert!(!miller_rabin_witness(&n, &a, t, &u));
    }

    #[test]
    fn test_miller_rabin_rejects_carmichael() {
        let mut rng = rng();
        for n in CARMICHAEL {
            assert!(!miller_rabin(&from_u64(n), 20, &mut rng), "accepted {}", n);
        }
    }

    #[test]
    fn test_fermat_single_coprime_witness_accepts_carmichael() {
        // Every witness coprime to a Carmichael number passes
        for n in CARMICHAEL {
            let n = from_u64(n);
            for a in [2u64, 4, 8, 16, 32] {
                let a = from_u64(a);
                if a.gcd(&n).is_one() {
                    assert!(fermat_witness(&n, &a));
                }
            }
        }
    }

    #[test]
    fn test_trivial_inputs() {
        let mut rng = rng();
        assert!(!fermat(&from_u64(0), 5, &mut rng));
        assert!(!fermat(&from_u64(1), 5, &mut rng));
        assert!(!miller_rabin(&from_u64(1), 5, &mut rng));
    }

    #[test]
    fn test_generate_candidate() {
        let mut rng = rng();
        for bits in [2u64, 8, 32, 128, 512] {
            let p = generate_candidate(bits, &mut rng).unwrap();
            assert!(p > from_u64(2));
            assert!(p.bits() <= bits);
            assert!(fermat(&p, FERMAT_ROUNDS, &mut rng));
        }
    }

    #[test]
    fn test_generate_candidate_is_reproducible() {
        let a = generate_candidate(64, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate_candidate(64, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_candidate_too_short() {
        let mut rng = rng();
        assert_eq!(
            generate_candidate(1, &mut rng),
            Err(Error::BitLengthTooSmall { bits: 1 })
        );
        assert_eq!(
            generate_candidate(0, &mut rng),
            Err(Error::BitLengthTooSmall { bits: 0 })
        );
    }
}
