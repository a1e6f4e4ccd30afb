use std::cmp;
use std::sync::Arc;
use log::debug;
use num_bigint::BigUint;
use num_traits::{ One, Zero };
use serde::{ Deserialize, Serialize };
use crate::errors::PolynomError;
use crate::math::field;
use crate::utils;


// TYPES AND INTERFACES
// ================================================================================================

/// A polynomial over the integers modulo a field order, with the degree-i coefficient
/// stored at index i. Coefficients are always canonical residues in [0, field_order);
/// arithmetic returns new values and never mutates an operand, so polynomials can be
/// read from multiple threads. The field order is shared across every polynomial
/// derived from the same family.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Polynomial {
    field_order  : Arc<BigUint>,
    coefficients : Vec<BigUint>,
}

// POLYNOMIAL IMPLEMENTATION
// ================================================================================================
impl Polynomial {

    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    /// Returns a new polynomial over the field of the specified order; every coefficient
    /// is reduced mod the field order before it is stored.
    pub fn new(field_order: BigUint, coefficients: Vec<BigUint>) -> Result<Polynomial, PolynomError> {
        utils::ensure_field_order(&field_order)?;
        if coefficients.is_empty() {
            return Err(PolynomError::EmptyCoefficients);
        }
        let field_order = Arc::new(field_order);
        let coefficients = coefficients.iter().map(|c| c % &*field_order).collect();
        return Ok(Polynomial { field_order, coefficients });
    }

    /// Returns a polynomial of the specified degree with coefficients drawn uniformly
    /// at random from [0, field_order); random source failures are propagated.
    pub fn random(field_order: BigUint, degree: u32) -> Result<Polynomial, PolynomError> {
        utils::ensure_field_order(&field_order)?;
        let mut coefficients = Vec::with_capacity(degree as usize + 1);
        for _ in 0..=degree {
            coefficients.push(utils::random_int(&field_order)?);
        }
        debug!("built a random degree {} polynomial", degree);
        return Polynomial::new(field_order, coefficients);
    }

    /// Builds a sibling polynomial over the same field; the coefficients must
    /// already be canonical residues.
    fn derive(&self, coefficients: Vec<BigUint>) -> Polynomial {
        return Polynomial {
            field_order  : self.field_order.clone(),
            coefficients,
        };
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the degree-i coefficient, or None when i is out of range.
    pub fn get(&self, i: usize) -> Option<&BigUint> {
        return self.coefficients.get(i);
    }

    /// Returns the number of coefficients.
    pub fn len(&self) -> usize {
        return self.coefficients.len();
    }

    /// Returns the degree of the polynomial.
    pub fn degree(&self) -> u32 {
        return (self.len() - 1) as u32;
    }

    pub fn field_order(&self) -> &BigUint {
        return &self.field_order;
    }

    pub fn coefficients(&self) -> &[BigUint] {
        return &self.coefficients;
    }

    // IN-PLACE MUTATORS
    // --------------------------------------------------------------------------------------------

    /// Sets the constant term, reduced mod the field order. This and `reduce` are the
    /// only operations that mutate a polynomial; callers must hold exclusive access.
    pub fn set_constant(&mut self, value: BigUint) {
        self.coefficients[0] = value % &*self.field_order;
    }

    /// Reduces every coefficient mod the field order in place.
    pub fn reduce(&mut self) {
        for c in self.coefficients.iter_mut() {
            *c = &*c % &*self.field_order;
        }
    }

    // NORMALIZATION
    // --------------------------------------------------------------------------------------------

    /// Returns a copy with zero coefficients above the highest non-zero term removed;
    /// the zero polynomial trims to the single coefficient [0].
    pub fn remove_leading_zeros(&self) -> Polynomial {
        let mut end = 0;
        for i in (0..self.len()).rev() {
            if !self.coefficients[i].is_zero() {
                end = i;
                break;
            }
        }
        return self.derive(self.coefficients[..=end].to_vec());
    }

    /// Returns true if the highest-degree coefficient is non-zero; a single-coefficient
    /// constant is always valid, even when that constant is zero.
    pub fn is_valid(&self) -> bool {
        return self.len() == 1 || !self.coefficients[self.len() - 1].is_zero();
    }

    /// Returns true if every coefficient is zero.
    pub fn is_zero(&self) -> bool {
        return self.coefficients.iter().all(|c| c.is_zero());
    }

    // EVALUATION AND DIFFERENTIATION
    // --------------------------------------------------------------------------------------------

    /// Evaluates the polynomial at `x` using Horner's method; evaluation at zero
    /// returns the constant term directly.
    pub fn evaluate(&self, x: &BigUint) -> BigUint {
        if x.is_zero() {
            return self.coefficients[0].clone();
        }
        let m = &*self.field_order;
        let mut result = self.coefficients[self.len() - 1].clone();
        for i in (0..self.len() - 1).rev() {
            result = field::add(&field::mul(&result, x, m), &self.coefficients[i], m);
        }
        return result;
    }

    /// Returns the k-th formal derivative; each surviving degree-i term is scaled by
    /// the falling factorial i * (i - 1) * ... * (i - k + 1) mod the field order.
    /// Differentiating more times than there are coefficients yields the zero polynomial.
    pub fn differentiate(&self, k: u32) -> Polynomial {
        let length = self.len() as u32;
        if k >= length {
            return self.derive(vec![BigUint::zero()]);
        }
        let m = &*self.field_order;
        let mut result = Vec::with_capacity((length - k) as usize);
        for i in k..length {
            let mut multiplier = BigUint::one();
            for j in 0..k {
                multiplier = field::mul(&multiplier, &BigUint::from(i - j), m);
            }
            result.push(field::mul(&self.coefficients[i as usize], &multiplier, m));
        }
        return self.derive(result);
    }

    // ARITHMETIC
    // --------------------------------------------------------------------------------------------

    /// Adds two polynomials; both operands must be valid.
    pub fn add(&self, other: &Polynomial) -> Result<Polynomial, PolynomError> {
        if !self.is_valid() || !other.is_valid() {
            return Err(PolynomError::InvalidPolynomial);
        }
        return Ok(self.add_unchecked(other));
    }

    fn add_unchecked(&self, other: &Polynomial) -> Polynomial {
        let a = self.remove_leading_zeros();
        let b = other.remove_leading_zeros();
        let m = &*self.field_order;
        let zero = BigUint::zero();

        let result_len = cmp::max(a.len(), b.len());
        let mut result = Vec::with_capacity(result_len);
        for i in 0..result_len {
            let c1 = if i < a.len() { &a.coefficients[i] } else { &zero };
            let c2 = if i < b.len() { &b.coefficients[i] } else { &zero };
            result.push(field::add(c1, c2, m));
        }
        return self.derive(result).remove_leading_zeros();
    }

    /// Subtracts `other` from this polynomial; both operands must be valid.
    pub fn sub(&self, other: &Polynomial) -> Result<Polynomial, PolynomError> {
        if !self.is_valid() || !other.is_valid() {
            return Err(PolynomError::InvalidPolynomial);
        }
        return Ok(self.sub_unchecked(other));
    }

    fn sub_unchecked(&self, other: &Polynomial) -> Polynomial {
        let a = self.remove_leading_zeros();
        let b = other.remove_leading_zeros();
        let m = &*self.field_order;
        let zero = BigUint::zero();

        let result_len = cmp::max(a.len(), b.len());
        let mut result = Vec::with_capacity(result_len);
        for i in 0..result_len {
            let c1 = if i < a.len() { &a.coefficients[i] } else { &zero };
            let c2 = if i < b.len() { &b.coefficients[i] } else { &zero };
            result.push(field::sub(c1, c2, m));
        }
        return self.derive(result).remove_leading_zeros();
    }

    /// Multiplies two polynomials using schoolbook convolution; both operands must
    /// be valid.
    pub fn mul(&self, other: &Polynomial) -> Result<Polynomial, PolynomError> {
        if !self.is_valid() || !other.is_valid() {
            return Err(PolynomError::InvalidPolynomial);
        }
        return Ok(self.mul_unchecked(other));
    }

    fn mul_unchecked(&self, other: &Polynomial) -> Polynomial {
        let a = self.remove_leading_zeros();
        let b = other.remove_leading_zeros();
        let m = &*self.field_order;

        let mut result = vec![BigUint::zero(); a.len() + b.len() - 1];
        for i in 0..a.len() {
            for j in 0..b.len() {
                let s = field::mul(&a.coefficients[i], &b.coefficients[j], m);
                result[i + j] = field::add(&result[i + j], &s, m);
            }
        }
        return self.derive(result).remove_leading_zeros();
    }

    // FAST DIVISION
    // --------------------------------------------------------------------------------------------

    /// Returns the reversal x^k * p(1/x): the degree-i coefficient moves to degree k - i.
    /// A `k` below the polynomial's degree would call for negative-degree terms and is
    /// rejected.
    pub fn rev(&self, k: u32) -> Result<Polynomial, PolynomError> {
        if k < self.degree() {
            return Err(PolynomError::InvalidReversalDegree {
                requested : k,
                degree    : self.degree(),
            });
        }
        let mut result = vec![BigUint::zero(); k as usize + 1];
        for i in 0..self.len() {
            result[k as usize - i] = self.coefficients[i].clone();
        }
        return Ok(self.derive(result).remove_leading_zeros());
    }

    /// Computes g such that p * g = 1 (mod x^l), the truncated inverse of the
    /// polynomial viewed as a power series. The constant term must be invertible
    /// mod the field order; the series is scaled to a unit constant term before the
    /// Newton iteration and the result is scaled back. Every polynomial is congruent
    /// to zero mod x^0, so l = 0 yields the zero polynomial.
    pub fn invert(&self, l: usize) -> Result<Polynomial, PolynomError> {
        if l == 0 {
            return Ok(self.derive(vec![BigUint::zero()]));
        }
        let scale = match field::inv(&self.coefficients[0], &self.field_order) {
            Some(value) => self.derive(vec![value]),
            None => return Err(PolynomError::NonInvertibleConstantTerm),
        };
        let normalized = self.mul_unchecked(&scale);
        let inverse = normalized.newton_invert(l);
        return Ok(inverse.mul_unchecked(&scale).truncated(l));
    }

    /// Newton iteration for power-series inversion (von zur Gathen & Gerhard,
    /// algorithm 9.3): each step doubles the number of correct low-order coefficients,
    /// so ceil(log2(l)) multiplications suffice.
    fn newton_invert(&self, l: usize) -> Polynomial {
        debug_assert!(self.coefficients[0].is_one(), "constant term must be the field unit");
        let two = self.derive(vec![BigUint::from(2u32) % &*self.field_order]);

        // g = 2 - p is the inverse mod x^2 because p has a unit constant term
        let mut g = two.sub_unchecked(self).truncated(2);
        let r = l.next_power_of_two().trailing_zeros();
        for i in 2..=r {
            let g_squared = g.mul_unchecked(&g);
            g = two.mul_unchecked(&g)
                .sub_unchecked(&self.mul_unchecked(&g_squared))
                .truncated(1 << i);
        }
        return g.truncated(l);
    }

    /// Fast division with remainder (von zur Gathen & Gerhard, algorithm 9.5):
    /// reverses the operands so the divisor's leading coefficient becomes a constant
    /// term, inverts that series mod x^(m+1), and reads the quotient off the product.
    /// Returns (q, r) with p = b * q + r and deg(r) < deg(b), or r identically zero.
    pub fn div_rem(&self, b: &Polynomial) -> Result<(Polynomial, Polynomial), PolynomError> {
        if !self.is_valid() || !b.is_valid() {
            return Err(PolynomError::InvalidPolynomial);
        }
        if b.is_zero() {
            return Err(PolynomError::DivisionByZero);
        }
        let b = b.remove_leading_zeros();
        if self.degree() < b.degree() {
            return Ok((self.derive(vec![BigUint::zero()]), self.clone()));
        }

        let m = self.degree() - b.degree();
        debug!("dividing a degree {} polynomial by a degree {} polynomial", self.degree(), b.degree());

        let rev_b = b.rev(b.degree())?;
        let inv_rev_b = rev_b.invert(m as usize + 1)?;
        let q_star = self.rev(self.degree())?
            .mul_unchecked(&inv_rev_b)
            .truncated(m as usize + 1);
        let q = q_star.rev(m)?;
        let r = self.sub_unchecked(&b.mul_unchecked(&q));
        return Ok((q, r));
    }

    // HELPERS
    // --------------------------------------------------------------------------------------------

    /// Keeps only the terms of degree below `l`, trimming the result.
    fn truncated(&self, l: usize) -> Polynomial {
        let end = cmp::min(l, self.len());
        return self.derive(self.coefficients[..end].to_vec()).remove_leading_zeros();
    }
}
