use super::Transreal;
use log::{debug, trace};
use num_bigint::BigInt;
use num_traits::{One, Zero};

/// Number of decimal places retained by an inexact root
pub const PRECISION: u32 = 9;

impl Transreal {
    /// Calculate the `power`-th root of the number.
    ///
    /// Integer roots are found with Newton's method and truncated to [PRECISION]
    /// decimal places. If the truncated value raised back to `power` does not
    /// reproduce the input, the result is marked approximated. A fractional
    /// `power = p/q` is evaluated as `(self^q)^(1/p)`.
    ///
    /// Roots of negative numbers are not real, and the result is nullity for
    /// them. The other special cases follow from `x^(1/power)`: the 0-th root
    /// is `x^∞`, the ∞-th root of a finite number is zero and the roots of
    /// infinity are infinity (negative infinity for a negative `power`).
    pub fn root<P: Into<Transreal>>(&self, power: P) -> Transreal {
        let power = power.into();
        self.root_ref(&power).approximated_if(power.approximate)
    }

    fn root_ref(&self, power: &Transreal) -> Transreal {
        if self.is_negative() || self.is_nullity() || power.is_nullity() {
            return Transreal::nullity();
        }

        if self.is_infinite() {
            return if power.is_infinite() {
                Transreal::nullity()
            } else if power.is_negative() {
                Transreal::neg_infinity()
            } else {
                Transreal::infinity()
            };
        }

        if power.is_infinite() {
            return Transreal::zero();
        }
        if power.is_zero() {
            return self.pow(Transreal::infinity());
        }
        if power.is_negative() {
            return self.root_ref(&-power).recip();
        }
        if !power.is_integer() {
            return self
                .pow(power.denom.clone())
                .root_ref(&Transreal::from(power.numer.clone()));
        }
        if self.is_zero() || power.is_one() {
            return self.clone();
        }

        self.newton_root(power)
    }

    // Newton's method on x^n - self, with n a positive integer
    fn newton_root(&self, n: &Transreal) -> Transreal {
        let tolerance = Transreal::new(1, BigInt::from(10).pow(PRECISION));
        let n_minus_one = n - 1;

        let mut previous = Transreal::zero();
        let mut guess = Transreal::one();
        let mut iterations = 0usize;
        while (&guess - &previous).abs() > tolerance {
            // keep the fractions short, the extra digits don't improve the result
            previous = guess.round(PRECISION * 2);
            let step = (previous.pow(n) - self) / (n * previous.pow(&n_minus_one));
            guess = &previous - step;

            iterations += 1;
            trace!("root iteration {}: {}", iterations, guess);
        }

        let result = guess.round(PRECISION);
        let exact = result.pow(n) == *self;
        debug!(
            "{}-th root of {} is {} after {} iterations (exact: {})",
            n, self, result, iterations, exact
        );
        result.approximated_if(!exact)
    }
}
