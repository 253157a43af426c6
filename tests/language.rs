use pretty_assertions::assert_eq;
use xscript::{
    Environment, Error, Options, ParseError, RuntimeError, Value, ValueKind,
    error::LexErrorKind, parse, run, run_with,
};

fn eval(source: &str) -> Value {
    let mut env = Environment::with_natives();
    run(source, &mut env).unwrap_or_else(|e| panic!("Script failed:\n{source}\nError: {e}"))
}

fn assert_value(source: &str, expected: impl Into<Value>) {
    assert_eq!(eval(source), expected.into(), "script: {source}");
}

fn runtime_error(source: &str) -> RuntimeError {
    let mut env = Environment::with_natives();
    match run(source, &mut env) {
        Err(Error::Runtime(e)) => e,
        Err(Error::Parse(e)) => panic!("Expected a runtime error, got a parse error: {e}"),
        Ok(value) => panic!("Expected a runtime error, got {value}:\n{source}"),
    }
}

fn parse_error(source: &str) -> ParseError {
    parse(source).err()
                 .unwrap_or_else(|| panic!("Expected a parse error:\n{source}"))
}

#[test]
fn integer_arithmetic() {
    assert_value("1 + 2 * 3;", 7);
    assert_value("(1 + 2) * 3;", 9);
    assert_value("1 / 2;", 0);
    assert_value("-7 / 2;", -3);
    assert_value("7 % 3;", 1);
    assert_value("10 - 2 - 3;", 5);
}

#[test]
fn integer_arithmetic_wraps() {
    assert_value("2147483647 + 1;", i32::MIN);
    assert_value("-2147483647 - 2;", i32::MAX);
    assert_value("65536 * 65536;", 0);
}

#[test]
fn float_arithmetic() {
    assert_value("1.0 / 2.0;", 0.5_f32);
    assert_value("1 + 0.5;", 1.5_f32);
    assert_value("0.5 * 4;", 2.0_f32);
    assert_value("-1.5;", -1.5_f32);

    match eval("1.0 / 0.0;") {
        Value::Float(x) => assert!(x.is_infinite()),
        other => panic!("Expected a float, got {other}"),
    }
}

#[test]
fn power_produces_a_float_and_binds_tighter_than_multiplication() {
    assert_value("2 ^ 3;", 8.0_f32);
    assert_value("2 * 3 ^ 2;", 18.0_f32);
}

#[test]
fn division_by_zero() {
    assert!(matches!(runtime_error("1 / 0;"), RuntimeError::DivisionByZero { line: 1 }));
    assert!(matches!(runtime_error("var x = 0;\n5 % x;"),
                     RuntimeError::DivisionByZero { line: 2 }));
}

#[test]
fn comparisons() {
    assert_value("1 < 2;", true);
    assert_value("2 <= 1;", false);
    assert_value("1 < 1.5;", true);
    assert_value("1 == 1.0;", true);
    assert_value("3 != 3;", false);
    assert_value("'a' < 'b';", true);
    assert_value("'a' == 97;", true);
    assert_value("\"abc\" < \"abd\";", true);
    assert_value("\"x\" == \"x\";", true);
}

#[test]
fn characters_and_strings() {
    assert_value("\"ab\" + \"cd\";", "abcd");
    assert_value("'a' + 'b';", "ab");
    assert_value("'a' + 1;", 98);
    assert_value("\"two\nlines\";", "two\nlines");
}

#[test]
fn mismatched_operands_are_rejected() {
    for source in ["true + 1;", "\"a\" + 'b';", "\"a\" == 'a';", "null == null;", "\"a\" * 2;"] {
        assert!(matches!(runtime_error(source), RuntimeError::TypeMismatch { .. }),
                "script: {source}");
    }
}

#[test]
fn logic_operators() {
    assert_value("true and false;", false);
    assert_value("true or false;", true);
    assert_value("true xor true;", false);
    assert_value("not true;", false);
    assert_value("var b = false; not b;", true);
    assert_value("1 < 2 and 2 < 3;", true);
}

#[test]
fn logic_operators_evaluate_both_sides() {
    let source = r"
        var calls = 0;
        fun bump(): bool {
            calls = calls + 1;
            return true;
        }
        false and bump();
        true or bump();
        calls;
    ";
    assert_value(source, 2);
}

#[test]
fn type_tags() {
    assert_value("typeof 5;", ValueKind::Integer);
    assert_value("typeof \"s\";", ValueKind::String);
    assert_value("typeof 5 == INT;", true);
    assert_value("typeof 1.5 != int;", true);
    assert_value("5 is INT;", true);
    assert_value("5 is int;", true);
    assert_value("5 is FLT;", false);
    assert_value("'c' is chr;", true);
    assert_value("true is BOOL;", true);
    assert_value("null is NULL;", true);
    assert_value("var t = typeof 1; t is INT;", false);
}

#[test]
fn is_needs_a_type_on_the_right() {
    assert!(matches!(runtime_error("5 is 5;"), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn variables() {
    assert_value("var x = 1; x = x + 1; x;", 2);
    assert_value("var x; x;", Value::Null);
    assert_value("var a = 0; var b = 0; a = b = 3; a + b;", 6);
    assert_value("var $total_1 = 3; $total_1;", 3);
}

#[test]
fn assignment_requires_a_declaration() {
    assert!(matches!(runtime_error("x = 3;"), RuntimeError::UnboundIdentifier { .. }));
    assert!(matches!(runtime_error("y + 1;"), RuntimeError::UnboundIdentifier { .. }));
}

#[test]
fn redeclaration_in_the_same_frame_fails() {
    let error = runtime_error("var x = 1;\nvar x = 2;");
    assert_eq!(error,
               RuntimeError::RedeclaredIdentifier { name: "x".to_string(),
                                                    line: 2 });
}

#[test]
fn blocks_shadow_and_release_their_bindings() {
    assert_value("var x = 1; { var x = 2; } x;", 1);
    assert_value("var x = 1; { x = 5; } x;", 5);
    assert!(matches!(runtime_error("{ var inner = 1; } inner;"),
                     RuntimeError::UnboundIdentifier { .. }));
}

#[test]
fn if_else_uses_truthiness() {
    assert_value("var r = 0; if (0) r = 1; else r = 2; r;", 1);
    assert_value("var r = 0; if (null) r = 1; else r = 2; r;", 2);
    assert_value("var r = 0; if (\"\") { r = 1; } r;", 1);
    assert_value("var r = 0; if (false) r = 1; else if (true) r = 2; else r = 3; r;", 2);
}

#[test]
fn while_loops() {
    let source = r"
        var i = 0;
        var sum = 0;
        while (i < 5) {
            var step = i + 1;
            i = step;
            sum = sum + step;
        }
        sum;
    ";
    assert_value(source, 15);
    assert_value("var i = 0; while (false) { i = i + 1; } i;", 0);
}

#[test]
fn match_runs_the_case_for_the_subject_kind() {
    let program = |subject: &str| {
        format!("var r = 0; match ({subject}) {{ INT: r = 1; str: {{ r = 2; }} _: r = 3; }} r;")
    };
    assert_value(&program("5"), 1);
    assert_value(&program("\"x\""), 2);
    assert_value(&program("1.5"), 3);

    assert_value("var r = 0; match (true) { INT: r = 1; } r;", 0);
}

#[test]
fn match_allows_one_default() {
    let error = parse_error("match (1) { _: 1; _: 2; }");
    assert!(matches!(error, ParseError::DuplicateDefaultCase { .. }), "{error}");
}

#[test]
fn functions() {
    let source = r"
        fun add(int a, int b): int {
            return a + b;
        }
        add(2, 3);
    ";
    assert_value(source, 5);
}

#[test]
fn recursion() {
    let source = r"
        fun fact(int n): int {
            if (n <= 1) return 1;
            return n * fact(n - 1);
        }
        fact(10);
    ";
    assert_value(source, 3_628_800);
}

#[test]
fn falling_off_the_end_of_a_function_returns_null() {
    assert_value("fun f(): int { var x = 1; } f();", Value::Null);
    assert_value("fun f(): int { return; } f();", Value::Null);
}

#[test]
fn return_leaves_loops_and_blocks() {
    let source = r"
        fun first_over(int limit): int {
            var i = 0;
            while (true) {
                i = i + 1;
                if (i > limit) { return i; }
            }
        }
        first_over(3);
    ";
    assert_value(source, 4);
}

#[test]
fn calls_restore_the_callers_frame() {
    let source = r"
        fun inner(int x): int { return x + 1; }
        fun outer(int x): int {
            var y = inner(x);
            return y + x;
        }
        outer(1);
    ";
    assert_value(source, 3);
}

#[test]
fn functions_see_bindings_at_the_call_site() {
    assert_value("var g = 10; fun f(): int { return g; } f();", 10);
    assert_value("var g = 1; fun set(): NULL { g = 7; } set(); g;", 7);
}

#[test]
fn parameters_do_not_leak() {
    assert!(matches!(runtime_error("fun f(int p): int { return p; } f(1); p;"),
                     RuntimeError::UnboundIdentifier { .. }));
}

#[test]
fn user_functions_check_arity_not_kinds() {
    let declare = "fun add(int a, int b): int { return a + b; }\n";
    for call in ["add(2);", "add(1, 2, 3);"] {
        let error = runtime_error(&format!("{declare}{call}"));
        assert!(matches!(error, RuntimeError::ArgumentMismatch { line: 2, .. }), "{error}");
    }
    assert_eq!(runtime_error(&format!("{declare}add(2);")).to_string(),
               "Error on line 2: cannot call add(INT, INT) as add(INT)");

    assert_value(&format!("{declare}add(1.5, 2);"), 3.5_f32);
    assert_value("fun half(flt x): flt { return x / 2.0; } half(3);", 1.5_f32);
    assert!(matches!(runtime_error(&format!("{declare}add(1, \"x\");")),
                     RuntimeError::TypeMismatch { line: 1, .. }));
}

#[test]
fn native_functions_check_argument_kinds() {
    let error = runtime_error("assert(1);");
    assert_eq!(error.to_string(), "Error on line 1: cannot call assert(BOOL) as assert(INT)");
}

#[test]
fn calling_something_that_is_not_a_function() {
    assert!(matches!(runtime_error("nope(1);"), RuntimeError::UnknownFunction { .. }));
    assert!(matches!(runtime_error("var x = 1; x(2);"), RuntimeError::UnknownFunction { .. }));
}

#[test]
fn functions_cannot_be_redeclared() {
    let error = runtime_error("fun f(): int { return 1; }\nfun f(): int { return 2; }");
    assert!(matches!(error, RuntimeError::RedeclaredIdentifier { line: 2, .. }), "{error}");
}

#[test]
fn functions_cannot_be_nested() {
    let error = parse_error("fun f(): int {\n    fun g(): int { return 1; }\n    return 1;\n}");
    match error {
        ParseError::NestedFunction { name, position } => {
            assert_eq!(name, "g");
            assert_eq!(position.line, 2);
        },
        other => panic!("Expected a nested function error, got {other}"),
    }
}

#[test]
fn call_depth_is_limited() {
    let mut env = Environment::with_natives();
    let options = Options { max_call_depth: 16,
                            ..Options::default() };
    let source = "fun forever(int n): int { return forever(n + 1); }\nforever(0);";

    match run_with(source, &mut env, options) {
        Err(Error::Runtime(RuntimeError::CallDepthExceeded { limit, .. })) => assert_eq!(limit, 16),
        other => panic!("Expected the call depth to be exceeded, got {other:?}"),
    }
    assert_eq!(env.depth(), 1);
}

#[test]
fn frames_are_released_when_a_call_fails() {
    let mut env = Environment::with_natives();
    let source = r"
        fun bad(int n): int {
            {
                var z = n;
                return z / 0;
            }
        }
        { bad(1); }
    ";
    assert!(run(source, &mut env).is_err());
    assert_eq!(env.depth(), 1);

    // The environment is still usable afterwards.
    assert_eq!(run("bad;", &mut env).map(|v| v.kind()).ok(), Some(ValueKind::Function));
}

#[test]
fn top_level_return_stops_the_program() {
    let mut env = Environment::new();
    assert_eq!(run("var x = 1; return x + 1; x = 100;", &mut env).ok(),
               Some(Value::Integer(2)));
    assert_eq!(env.get("x"), Some(&Value::Integer(1)));
}

#[test]
fn bindings_persist_between_runs() {
    let mut env = Environment::with_natives();
    run("var count = 1; fun next(): int { count = count + 1; return count; }", &mut env).unwrap();
    run("next();", &mut env).unwrap();
    assert_eq!(run("next();", &mut env).unwrap(), Value::Integer(3));
}

#[test]
fn effects_before_an_error_are_kept() {
    let mut env = Environment::new();
    assert!(run("var a = 1; a = 2; a / 0; a = 3;", &mut env).is_err());
    assert_eq!(env.get("a"), Some(&Value::Integer(2)));
}

#[test]
fn natives() {
    assert_value("print(\"a\", 1, 'c', 2.5, null);", Value::Null);
    assert_value("print();", Value::Null);
    assert_value("assert(1 == 1);", Value::Null);

    assert!(matches!(runtime_error("assert(1 == 2);"), RuntimeError::AssertionFailed { .. }));
    assert!(matches!(runtime_error("assert(1);"), RuntimeError::ArgumentMismatch { .. }));
}

#[test]
fn natives_are_optional() {
    let mut env = Environment::new();
    assert!(matches!(run("print(1);", &mut env),
                     Err(Error::Runtime(RuntimeError::UnknownFunction { .. }))));
}

#[test]
fn comments_and_whitespace() {
    assert_value("// leading comment\nvar x = 1; // trailing\n\n\t x;", 1);
    assert_value("", Value::Null);
}

#[test]
fn unary_operands_are_restricted() {
    for source in ["-true;", "not 1;", "- -1;", "not \"s\";"] {
        assert!(matches!(parse_error(source), ParseError::UnexpectedToken { .. }),
                "script: {source}");
    }
    assert!(matches!(runtime_error("var s = \"x\"; -s;"), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error("var n = 1; not n;"), RuntimeError::TypeMismatch { .. }));
    assert_value("fun one(): int { return 1; } -one();", -1);
}

#[test]
fn parse_errors_report_positions() {
    let error = parse_error("1 +;");
    assert_eq!(error.to_string(),
               "Error on line 1, column 4: expected expression, found ';'\n    1 +;\n       ^");

    let error = parse_error("var x = 1;\nvar = 2;");
    assert_eq!(error.position().line, 2);
    assert_eq!(error.position().column, 5);
    assert_eq!(error.position().source_line, "var = 2;");

    let error = parse_error("var x = 1");
    assert!(matches!(error, ParseError::UnexpectedEndOfInput { .. }), "{error}");
    assert_eq!(error.position().line, 1);
}

#[test]
fn reserved_tokens_are_not_expressions() {
    for source in ["var x => 1;", "[1];", "x[0];"] {
        assert!(parse(source).is_err(), "script: {source}");
    }
}

#[test]
fn lex_errors() {
    let cases = [("var x = 12.;", LexErrorKind::MalformedNumber),
                 ("var x = 99999999999;", LexErrorKind::IntegerTooLarge),
                 ("var s = \"abc;", LexErrorKind::UnterminatedString),
                 ("var c = 'a;", LexErrorKind::UnterminatedChar),
                 ("var c = '';", LexErrorKind::UnterminatedChar),
                 ("var x = 1 # 2;", LexErrorKind::UnrecognizedCharacter)];

    for (source, expected) in cases {
        match parse_error(source) {
            ParseError::Lex(error) => assert_eq!(error.kind, expected, "script: {source}"),
            other => panic!("Expected a lex error for {source}, got {other}"),
        }
    }
}

#[test]
fn lex_errors_point_at_the_offending_text() {
    match parse_error("var x = 1;\nvar y = @;") {
        ParseError::Lex(error) => {
            assert_eq!(error.lexeme, "@");
            assert_eq!(error.position.line, 2);
            assert_eq!(error.position.column, 9);
            assert_eq!(error.position.source_line, "var y = @;");
        },
        other => panic!("Expected a lex error, got {other}"),
    }
}

#[test]
fn values_display_and_repr() {
    assert_eq!(Value::Float(8.0).to_string(), "8.0");
    assert_eq!(Value::Float(0.25).to_string(), "0.25");
    assert_eq!(Value::Integer(-3).to_string(), "-3");
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::Type(ValueKind::String).to_string(), "STR");
    assert_eq!(Value::from("s").repr(), "\"s\"");

    let add = eval("fun add(int a, int b): int { return a + b; } add;");
    assert_eq!(add.to_string(), "<fun add(INT, INT): INT>");
    let print = eval("print;");
    assert_eq!(print.to_string(), "<native print(ANY...)>");
}

#[test]
fn char_literals_may_be_any_character() {
    assert_value("'é';", 'é');
    assert_value("var c = '€'; c;", '€');
    assert_value("typeof '\u{1F600}';", Value::Type(ValueKind::Char));
}

#[test]
fn errors_after_a_newline_char_literal_report_the_right_line() {
    let error = runtime_error("var c = '\n';\nmissing;");
    assert!(matches!(error, RuntimeError::UnboundIdentifier { line: 3, .. }), "{error}");
}

#[test]
fn end_of_input_errors_show_the_last_line() {
    let error = parse_error("var x = 1");
    assert!(matches!(error, ParseError::UnexpectedEndOfInput { .. }), "{error}");
    assert!(error.to_string().ends_with("\n    var x = 1\n             ^"), "{error}");
}

#[test]
fn parameters_must_have_distinct_names() {
    match parse_error("fun f(int a, flt b, int a): int { return a; }") {
        ParseError::DuplicateParameter { function, name, .. } => {
            assert_eq!(function, "f");
            assert_eq!(name, "a");
        },
        other => panic!("Expected a duplicate parameter error, got {other}"),
    }
}

#[test]
fn moderate_nesting_parses() {
    let source = format!("{}1{};", "(".repeat(50), ")".repeat(50));
    assert_value(&source, 1);
    assert_value("var x = 2; if (true) if (true) { { { x = x = 3; } } } x;", 3);
}

#[test]
fn deep_nesting_is_a_parse_error() {
    let sources = [format!("{}1{};", "(".repeat(200), ")".repeat(200)),
                   format!("{}1;", "if (true) ".repeat(200)),
                   format!("{}{}", "{".repeat(200), "}".repeat(200)),
                   format!("var a; {}1;", "a = ".repeat(200)),
                   format!("f({}1{});", "g(".repeat(200), ")".repeat(200))];

    for source in &sources {
        match parse_error(source) {
            ParseError::NestingTooDeep { limit, position } => {
                assert_eq!(limit, 64);
                assert_eq!(position.line, 1);
            },
            other => panic!("Expected a nesting error, got {other}"),
        }
    }
}

#[test]
fn expression_nesting_is_limited_at_runtime() {
    let chain = vec!["1"; 40].join(" + ");
    let mut env = Environment::new();
    let options = Options { max_nesting_depth: 16,
                            ..Options::default() };

    match run_with(&format!("{chain};"), &mut env, options) {
        Err(Error::Runtime(RuntimeError::NestingTooDeep { limit, line })) => {
            assert_eq!((limit, line), (16, 1));
        },
        other => panic!("Expected the nesting limit to be hit, got {other:?}"),
    }

    let chain = vec!["1"; 500].join(" + ");
    assert_value(&format!("{chain};"), 500);
}
