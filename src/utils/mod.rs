use num_bigint::BigUint;
use num_traits::Zero;
use rand::rngs::OsRng;
use rand::RngCore;
use crate::errors::PolynomError;

// FIELD ORDER VALIDATION
// ================================================================================================

/// Checks that `q` can serve as the order of a coefficient field; orders below 2
/// admit no non-trivial residues and are rejected.
pub fn ensure_field_order(q: &BigUint) -> Result<(), PolynomError> {
    if *q < BigUint::from(2u32) {
        return Err(PolynomError::InvalidFieldOrder(q.clone()));
    }
    return Ok(());
}

// RANDOM SAMPLING
// ================================================================================================

/// Draws a uniformly distributed integer in [0, n) from the operating system's
/// CSPRNG using rejection sampling; masking the excess bits of the top byte keeps
/// the acceptance probability at 1/2 or better. A zero bound admits no value
/// and is rejected.
pub fn random_int(n: &BigUint) -> Result<BigUint, PolynomError> {
    if n.is_zero() {
        return Err(PolynomError::InvalidFieldOrder(n.clone()));
    }

    let num_bytes = ((n.bits() + 7) / 8) as usize;
    let mask = 0xffu8 >> (num_bytes as u64 * 8 - n.bits());

    let mut buf = vec![0u8; num_bytes];
    loop {
        match OsRng.try_fill_bytes(&mut buf) {
            Ok(()) => (),
            Err(err) => return Err(PolynomError::RandomGenerationFailure(err)),
        }
        buf[0] &= mask;
        let candidate = BigUint::from_bytes_be(&buf);
        if candidate < *n {
            return Ok(candidate);
        }
    }
}
