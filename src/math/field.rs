use num_bigint::{ BigInt, BigUint };
use num_integer::Integer;
use num_traits::{ One, Zero };

// BASIC ARITHMETIC
// ------------------------------------------------------------------------------------------------

/// Computes (a + b) % m; the operands do not need to be reduced.
pub fn add(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    return (a + b) % m;
}

/// Computes (a - b) % m as a canonical residue in [0, m).
pub fn sub(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    return add(a, &neg(b, m), m);
}

/// Computes (-x) % m as a canonical residue in [0, m).
pub fn neg(x: &BigUint, m: &BigUint) -> BigUint {
    let x = x % m;
    if x.is_zero() {
        return x;
    }
    return m - x;
}

/// Computes (a * b) % m; the operands do not need to be reduced.
pub fn mul(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    return (a * b) % m;
}

/// Computes y such that (x * y) % m = 1 via the extended Euclidean algorithm;
/// returns None when x and m are not coprime.
pub fn inv(x: &BigUint, m: &BigUint) -> Option<BigUint> {
    let modulus = BigInt::from(m.clone());
    let result = BigInt::from(x % m).extended_gcd(&modulus);
    if !result.gcd.is_one() {
        return None;
    }
    return result.x.mod_floor(&modulus).to_biguint();
}

// TESTS
// ================================================================================================
#[cfg(test)]
mod tests {

    use num_bigint::BigUint;

    fn u(value: u32) -> BigUint {
        return BigUint::from(value);
    }

    #[test]
    fn add() {
        let m = u(7);
        assert_eq!(u(0), super::add(&u(3), &u(4), &m));
        assert_eq!(u(6), super::add(&u(13), &u(14), &m));
    }

    #[test]
    fn sub() {
        let m = u(7);
        assert_eq!(u(2), super::sub(&u(5), &u(3), &m));
        // wraps around instead of going negative
        assert_eq!(u(5), super::sub(&u(3), &u(5), &m));
        assert_eq!(u(0), super::sub(&u(10), &u(3), &m));
    }

    #[test]
    fn neg() {
        let m = u(7);
        assert_eq!(u(4), super::neg(&u(3), &m));
        assert_eq!(u(0), super::neg(&u(0), &m));
        assert_eq!(u(0), super::neg(&u(14), &m));
    }

    #[test]
    fn mul() {
        let m = u(7);
        assert_eq!(u(6), super::mul(&u(4), &u(5), &m));
        assert_eq!(u(0), super::mul(&u(7), &u(5), &m));
    }

    #[test]
    fn inv() {
        let m = u(7);
        for x in 1u32..7 {
            let y = super::inv(&u(x), &m).unwrap();
            assert_eq!(u(1), super::mul(&u(x), &y, &m));
        }

        // 4 shares a factor with 8, so it has no inverse mod 8
        assert_eq!(None, super::inv(&u(4), &u(8)));
        // but 3 is coprime to 8
        let y = super::inv(&u(3), &u(8)).unwrap();
        assert_eq!(u(1), super::mul(&u(3), &y, &u(8)));
    }
}
