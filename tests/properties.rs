//! Property-based tests for the evaluator's arithmetic laws.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use proptest::prelude::*;
use tally::{
    Error, evaluate,
    error::{Division, RuntimeError},
    interpreter::parser::unary::factorial,
};

fn value_of(src: &str) -> f64 {
    evaluate(src).unwrap_or_else(|e| panic!("{src:?} failed: {e}"))
                 .unwrap_or_else(|| panic!("{src:?} produced no value"))
}

fn close(actual: f64, expected: f64, scale: f64) -> bool {
    (actual - expected).abs() <= 1e-9 * scale.max(1.0)
}

proptest! {
    #[test]
    fn literal_is_its_own_value(n in 0.0f64..1e12) {
        prop_assert_eq!(value_of(&format!("{n}")), n);
    }

    #[test]
    fn integer_literal_is_its_own_value(n in 0u32..u32::MAX) {
        prop_assert_eq!(value_of(&n.to_string()), f64::from(n));
    }

    #[test]
    fn adding_then_subtracting_restores(a in -1e6f64..1e6, b in -1e6f64..1e6) {
        let result = value_of(&format!("{a} + {b} - {b}"));
        prop_assert!(close(result, a, a.abs().max(b.abs())), "{} != {}", result, a);
    }

    #[test]
    fn multiplying_then_dividing_restores(a in -1e6f64..1e6,
                                          b in prop_oneof![-1e6f64..-1e-3, 1e-3f64..1e6]) {
        let result = value_of(&format!("{a} * {b} / {b}"));
        prop_assert!(close(result, a, a.abs()), "{} != {}", result, a);
    }

    #[test]
    fn division_by_zero_never_yields(a in -1e6f64..1e6) {
        let quotient = evaluate(&format!("{a} / 0"));
        prop_assert!(matches!(quotient,
                              Err(Error::Runtime(RuntimeError::DivideByZero(Division::Quotient)))));

        let remainder = evaluate(&format!("{a} % (1 - 1)"));
        prop_assert!(matches!(remainder,
                              Err(Error::Runtime(RuntimeError::DivideByZero(Division::Remainder)))));
    }

    #[test]
    fn multiplication_binds_tighter(a in 0u16.., b in 0u16.., c in 0u16..) {
        let (x, y, z) = (f64::from(a), f64::from(b), f64::from(c));
        prop_assert_eq!(value_of(&format!("{a} + {b} * {c}")), x + y * z);
        prop_assert_eq!(value_of(&format!("({a} + {b}) * {c}")), (x + y) * z);
    }

    #[test]
    fn factorial_recurrence(n in 1u8..=170) {
        let n = f64::from(n);
        let expected = n * factorial(n - 1.0).unwrap();
        prop_assert!(close(factorial(n).unwrap(), expected, expected));
    }

    #[test]
    fn negative_factorial_fails(n in 1u32..1000) {
        let is_negative_factorial = matches!(evaluate(&format!("(0 - {n})!")),
                              Err(Error::Runtime(RuntimeError::NegativeFactorial { .. })));
        prop_assert!(is_negative_factorial);
    }
}
