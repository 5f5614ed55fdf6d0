use proptest::prelude::*;
use stackcalc::{ErrorKind, evaluate, evaluate_with};

/// Whitespace that may separate tokens.
fn gap() -> impl Strategy<Value = String> {
    "[ \t\n]{0,3}"
}

/// Non-negative integer literals, so no literal carries its own sign.
fn operand() -> impl Strategy<Value = u32> {
    0u32..100_000
}

/// Non-zero divisors.
fn divisor() -> impl Strategy<Value = u32> {
    1u32..1_000
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn subtraction_is_left_associative(a in operand(), b in operand(), c in operand()) {
        let (x, y, z) = (f64::from(a), f64::from(b), f64::from(c));
        prop_assert_eq!(evaluate(&format!("{a} - {b} - {c}")).unwrap(), (x - y) - z);
    }

    #[test]
    fn division_is_left_associative(a in operand(), b in divisor(), c in divisor()) {
        let (x, y, z) = (f64::from(a), f64::from(b), f64::from(c));
        prop_assert_eq!(evaluate(&format!("{a} / {b} / {c}")).unwrap(), (x / y) / z);
    }

    #[test]
    fn products_bind_tighter_than_sums(a in operand(), b in operand(), c in divisor(), d in operand()) {
        let (x, y, z, w) = (f64::from(a), f64::from(b), f64::from(c), f64::from(d));
        let source = format!("{a} + {b} / {c} - {d} * {a}");
        prop_assert_eq!(evaluate(&source).unwrap(), x + y / z - w * x);
    }

    #[test]
    fn whitespace_between_tokens_is_ignored(a in operand(),
                                            b in operand(),
                                            c in divisor(),
                                            gaps in prop::collection::vec(gap(), 8)) {
        let compact = format!("({a}+{b})/{c}");
        let spaced = format!("{}({}{a}{}+{}{b}{}){}/{}{c}{}",
                             gaps[0], gaps[1], gaps[2], gaps[3], gaps[4], gaps[5], gaps[6], gaps[7]);
        prop_assert_eq!(evaluate(&spaced).unwrap(), evaluate(&compact).unwrap());
    }

    #[test]
    fn redundant_parentheses_change_nothing(a in operand(), depth in 1usize..20) {
        let source = format!("{}a{}", "(".repeat(depth), ")".repeat(depth));
        let value = evaluate_with(&source, [("a", f64::from(a))]).unwrap();
        prop_assert_eq!(value, f64::from(a));
    }

    #[test]
    fn leading_minus_negates_first_term(a in operand(), b in divisor(), c in operand()) {
        let (x, y, z) = (f64::from(a), f64::from(b), f64::from(c));
        prop_assert_eq!(evaluate(&format!("-{a} * {b} + {c}")).unwrap(), -(x * y) + z);
    }

    #[test]
    fn dividing_by_a_zero_expression_fails(a in operand(), b in operand()) {
        let err = evaluate(&format!("{a} / ({b} - {b})")).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    }
}
