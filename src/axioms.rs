//! The axioms of transreal arithmetic, checked exhaustively over a set of
//! representative values: nullity, both infinities, zero, and a few finite
//! numbers of each sign including an approximated irrational.

use crate::Transreal;
use num_traits::{One, Zero};

fn samples() -> Vec<Transreal> {
    let root2 = Transreal::from(2).root(2);
    vec![
        Transreal::nullity(),
        Transreal::neg_infinity(),
        -Transreal::new(3, 2),
        -&root2,
        -Transreal::one(),
        -Transreal::new(1, 3),
        Transreal::zero(),
        Transreal::new(1, 3),
        Transreal::one(),
        root2,
        Transreal::new(3, 2),
        Transreal::infinity(),
    ]
}

fn is_infinite_or_nullity(a: &Transreal) -> bool {
    a.abs() == Transreal::infinity() || a.is_nullity()
}

#[test]
fn additive_associativity_test() {
    let values = samples();
    for a in &values {
        for b in &values {
            for c in &values {
                assert_eq!(a + (b + c), (a + b) + c);
            }
        }
    }
}

#[test]
fn additive_commutativity_test() {
    let values = samples();
    for a in &values {
        for b in &values {
            assert_eq!(a + b, b + a);
        }
    }
}

#[test]
fn additive_identity_test() {
    for a in &samples() {
        assert_eq!(0 + a, *a);
    }
}

#[test]
fn additive_nullity_test() {
    for a in &samples() {
        assert_eq!(Transreal::nullity() + a, Transreal::nullity());
    }
}

#[test]
fn additive_infinity_test() {
    for a in &samples() {
        if *a == Transreal::neg_infinity() || a.is_nullity() {
            continue;
        }
        assert_eq!(a + Transreal::infinity(), Transreal::infinity());
    }
}

#[test]
fn subtraction_test() {
    let values = samples();
    for a in &values {
        for b in &values {
            assert_eq!(a - b, a + (-b));
        }
    }
}

#[test]
fn opposite_bijectivity_test() {
    for a in &samples() {
        assert_eq!(-(-a), *a);
    }
}

#[test]
fn additive_inverse_test() {
    for a in &samples() {
        if is_infinite_or_nullity(a) {
            continue;
        }
        assert_eq!(a - a, 0);
    }
}

#[test]
fn opposite_of_nullity_test() {
    assert_eq!(-Transreal::nullity(), Transreal::nullity());
}

#[test]
fn subtract_infinity_test() {
    for a in &samples() {
        if is_infinite_or_nullity(a) {
            continue;
        }
        assert_eq!(a - Transreal::infinity(), Transreal::neg_infinity());
    }
    assert_eq!(
        Transreal::infinity() - Transreal::infinity(),
        Transreal::nullity()
    );
}

#[test]
fn multiplicative_associativity_test() {
    let values = samples();
    for a in &values {
        for b in &values {
            for c in &values {
                assert_eq!(a * (b * c), (a * b) * c);
            }
        }
    }
}

#[test]
fn multiplicative_commutativity_test() {
    let values = samples();
    for a in &values {
        for b in &values {
            assert_eq!(a * b, b * a);
        }
    }
}

#[test]
fn multiplicative_identity_test() {
    for a in &samples() {
        assert_eq!(1 * a, *a);
    }
}

#[test]
fn multiplicative_nullity_test() {
    for a in &samples() {
        assert_eq!(Transreal::nullity() * a, Transreal::nullity());
    }
    assert_eq!(Transreal::infinity() * 0, Transreal::nullity());
}

#[test]
fn division_test() {
    let values = samples();
    for a in &values {
        for b in &values {
            assert_eq!(a / b, a * b.pow(-1));
        }
    }
}

#[test]
fn multiplicative_inverse_test() {
    for a in &samples() {
        if a.is_zero() || is_infinite_or_nullity(a) {
            continue;
        }
        assert_eq!(a / a, 1);
    }
}

#[test]
fn reciprocal_test() {
    for a in &samples() {
        if *a == Transreal::neg_infinity() {
            continue;
        }
        assert_eq!(a.pow(-1).pow(-1), *a);
    }
    assert_eq!(Transreal::zero().pow(-1), Transreal::infinity());
    assert_eq!(Transreal::neg_infinity().pow(-1), 0);
    assert_eq!(Transreal::nullity().pow(-1), Transreal::nullity());
}

#[test]
fn positive_test() {
    let inf = Transreal::infinity();
    for a in &samples() {
        if *a > 0 {
            assert_eq!(&inf * a, inf);
        }
        if &inf * a == inf {
            assert!(*a > 0);
        }
    }
    assert!(inf > 0);
}

#[test]
fn negative_test() {
    let inf = Transreal::infinity();
    for a in &samples() {
        if 0 > *a {
            assert_eq!(&inf * a, Transreal::neg_infinity());
        }
        if &inf * a == Transreal::neg_infinity() {
            assert!(0 > *a);
        }
    }
}

#[test]
fn ordering_test() {
    let values = samples();
    for a in &values {
        for b in &values {
            if a - b > 0 {
                assert!(a > b);
            }
            if a > b {
                assert!(a - b > 0);
                assert!(b < a);
            }
            if b < a {
                assert!(a > b);
            }
        }
    }
}

#[test]
fn ordering_composition_test() {
    let values = samples();
    for a in &values {
        for b in &values {
            assert_eq!(a >= b, a > b || a == b);
            assert_eq!(a <= b, a < b || a == b);
            if a <= b {
                assert!(b >= a);
            }
            if b >= a {
                assert!(a <= b);
            }
        }
    }
}

#[test]
fn quadrachotomy_test() {
    for a in &samples() {
        let cases = [*a < 0, *a == 0, *a > 0, a.is_nullity()];
        assert_eq!(cases.iter().filter(|&&c| c).count(), 1);
    }
}

#[test]
fn distributivity_test() {
    let values = samples();
    for a in &values {
        for b in &values {
            for c in &values {
                // infinity does not distribute over sums of differently signed terms
                if a.abs() == Transreal::infinity() && b.sign() != c.sign() {
                    continue;
                }
                assert_eq!(a * (b + c), (a * b) + (a * c));
            }
        }
    }
}
