//! Property-based tests for transreal arithmetic.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use proptest::prelude::*;

use crate::Transreal;

// Strategy for generating finite fractions
fn finite() -> impl Strategy<Value = Transreal> {
    (-1000i64..1000i64, 1i64..1000i64).prop_map(|(n, d)| Transreal::new(n, d))
}

// Strategy for generating any transreal, non-finite values included
fn transreal() -> impl Strategy<Value = Transreal> {
    prop_oneof![
        8 => finite(),
        1 => Just(Transreal::infinity()),
        1 => Just(Transreal::neg_infinity()),
        1 => Just(Transreal::nullity()),
    ]
}

// Strategy for generating non-zero finite fractions
fn non_zero() -> impl Strategy<Value = Transreal> {
    (
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)],
        1i64..1000i64,
    )
        .prop_map(|(n, d)| Transreal::new(n, d))
}

proptest! {
    // Canonical form

    #[test]
    fn canonical_form(n in -1000i64..1000i64, d in -1000i64..1000i64) {
        let t = Transreal::new(n, d);
        prop_assert!(!t.denom().is_negative());
        if t.denom().is_zero() {
            prop_assert!(t.numer().abs() <= BigInt::one());
            prop_assert!(!t.is_approximate());
        } else {
            prop_assert!(t.numer().gcd(t.denom()).is_one());
        }
        let again = Transreal::new(t.numer().clone(), t.denom().clone());
        prop_assert_eq!(again.numer(), t.numer());
        prop_assert_eq!(again.denom(), t.denom());
    }

    // Additive and multiplicative laws

    #[test]
    fn add_commutative(a in transreal(), b in transreal()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn add_associative(a in transreal(), b in transreal(), c in transreal()) {
        prop_assert_eq!(&a + (&b + &c), (&a + &b) + &c);
    }

    #[test]
    fn mul_commutative(a in transreal(), b in transreal()) {
        prop_assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn mul_associative(a in transreal(), b in transreal(), c in transreal()) {
        prop_assert_eq!(&a * (&b * &c), (&a * &b) * &c);
    }

    #[test]
    fn distributive_finite(a in finite(), b in transreal(), c in transreal()) {
        prop_assert_eq!(&a * (&b + &c), &a * &b + &a * &c);
    }

    #[test]
    fn sub_is_add_opposite(a in transreal(), b in transreal()) {
        prop_assert_eq!(&a - &b, &a + (-&b));
    }

    #[test]
    fn div_is_mul_reciprocal(a in transreal(), b in transreal()) {
        prop_assert_eq!(&a / &b, &a * b.recip());
    }

    #[test]
    fn reciprocal_involution(a in non_zero()) {
        prop_assert_eq!(a.recip().recip(), a.clone());
        prop_assert_eq!(&a / &a, Transreal::one());
    }

    #[test]
    fn nullity_absorbs(a in transreal()) {
        prop_assert!((&a + Transreal::nullity()).is_nullity());
        prop_assert!((&a * Transreal::nullity()).is_nullity());
        prop_assert!(Transreal::nullity().pow(&a).is_nullity());
    }

    // Ordering

    #[test]
    fn ordering_matches_float(a in finite(), b in finite()) {
        let (fa, fb) = (a.to_f64().unwrap(), b.to_f64().unwrap());
        prop_assert_eq!(a < b, fa < fb);
        prop_assert_eq!(a == b, fa == fb);
    }

    #[test]
    fn infinities_bound_finite(a in finite()) {
        prop_assert!(Transreal::neg_infinity() < a);
        prop_assert!(a < Transreal::infinity());
        prop_assert!(a.partial_cmp(&Transreal::nullity()).is_none());
    }

    // Floor arithmetic

    #[test]
    fn floor_bounds(a in finite()) {
        let f = a.floor();
        prop_assert!(f.is_integer());
        prop_assert!(f <= a);
        prop_assert!(a < f + 1);
    }

    #[test]
    fn div_mod_floor_identity(a in finite(), b in non_zero()) {
        let (q, r) = a.div_mod_floor(&b);
        prop_assert!(q.is_integer());
        prop_assert_eq!(&q * &b + &r, a);
        if b.is_positive() {
            prop_assert!(Transreal::zero() <= r && r < b);
        } else {
            prop_assert!(b < r && r <= Transreal::zero());
        }
    }

    #[test]
    fn integer_pow(a in non_zero(), e in 0u32..6) {
        let mut expected = Transreal::one();
        for _ in 0..e {
            expected *= &a;
        }
        prop_assert_eq!(a.pow(e), expected.clone());
        prop_assert_eq!(a.pow(-(e as i64)), expected.recip());
    }

    // Roots

    #[test]
    fn perfect_root_is_exact(k in 1u32..50, n in 2u32..5) {
        let r = Transreal::from(k.pow(n)).root(n);
        prop_assert!(!r.is_approximate());
        prop_assert_eq!(r, Transreal::from(k));
    }

    #[test]
    fn root_bounds(x in 1u32..10000, n in 2u32..5) {
        let x = Transreal::from(x);
        let r = x.root(n);
        let ulp = Transreal::new(1, BigInt::from(10).pow(crate::PRECISION));
        prop_assert!((&r - &ulp).pow(n) <= x);
        prop_assert!(x <= (&r + &ulp).pow(n));
        prop_assert_eq!(r.is_approximate(), r.pow(n) != x);
    }

    // Text form

    #[test]
    fn display_parse_agree(a in transreal(), approximate in any::<bool>()) {
        let a = Transreal::with_approximation(a.numer().clone(), a.denom().clone(), approximate);
        let parsed: Transreal = a.to_string().parse().unwrap();
        prop_assert_eq!(parsed.is_approximate(), a.is_approximate());
        prop_assert_eq!(parsed, a);
    }
}
