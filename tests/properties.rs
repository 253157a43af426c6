use proptest::prelude::*;
use xscript::{Environment, Value, parse, run};

fn eval_with(a: i32, b: i32, source: &str) -> Value {
    let mut env = Environment::new();
    env.define("a", Value::Integer(a));
    env.define("b", Value::Integer(b));
    run(source, &mut env).unwrap_or_else(|e| panic!("{source} failed for a={a}, b={b}: {e}"))
}

proptest! {
    #[test]
    fn integer_arithmetic_wraps_like_i32(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(eval_with(a, b, "a + b;"), Value::Integer(a.wrapping_add(b)));
        prop_assert_eq!(eval_with(a, b, "a - b;"), Value::Integer(a.wrapping_sub(b)));
        prop_assert_eq!(eval_with(a, b, "a * b;"), Value::Integer(a.wrapping_mul(b)));
    }

    #[test]
    fn integer_division_truncates(a in any::<i32>(), b in any::<i32>().prop_filter("non-zero", |b| *b != 0)) {
        prop_assert_eq!(eval_with(a, b, "a / b;"), Value::Integer(a.wrapping_div(b)));
        prop_assert_eq!(eval_with(a, b, "a % b;"), Value::Integer(a.wrapping_rem(b)));
    }

    #[test]
    fn integer_literals_evaluate_to_themselves(n in 0..=i32::MAX) {
        let mut env = Environment::new();
        prop_assert_eq!(run(&format!("{n};"), &mut env).ok(), Some(Value::Integer(n)));
    }

    #[test]
    fn parsing_arbitrary_text_never_panics(source in "\\PC{0,64}") {
        let _ = parse(&source);
    }
}
