use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Small primes used both for trial division and as Miller-Rabin witnesses.
///
/// This witness set is deterministic for every candidate below
/// 3.3 * 10^24; beyond that the test is a strong probable-prime check with
/// error probability far below anything a caller obligation would accept.
const WITNESSES: [u8; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Miller-Rabin primality test.
pub fn is_probable_prime(n: &BigUint) -> bool {
    let two = BigUint::from(2u8);
    if n < &two {
        return false;
    }
    for &p in &WITNESSES {
        let p = BigUint::from(p);
        if *n == p {
            return true;
        }
        if (n % &p).is_zero() {
            return false;
        }
    }

    // Write n - 1 = d * 2^s with d odd. n is odd here, so s >= 1.
    let n_minus_one = n - 1u32;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    'witnesses: for &a in &WITNESSES {
        let mut x = BigUint::from(a).modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                continue 'witnesses;
            }
        }
        return false;
    }
    true
}
