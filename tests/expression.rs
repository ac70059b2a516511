use approx::assert_relative_eq;
use graphcalc::{
    AngleMode, Context, ErrorKind,
    ast::{BUILTIN_FUNCTIONS, Expr, Function},
    error::ParseError,
    evaluate, parse,
};
use rstest::rstest;

fn eval(src: &str) -> f64 {
    evaluate(src, &Context::new()).unwrap_or_else(|e| panic!("'{src}' failed: {e}"))
}

fn eval_with_x(src: &str, x: f64) -> f64 {
    let context = Context::new().with_binding("x", x);
    evaluate(src, &context).unwrap_or_else(|e| panic!("'{src}' failed: {e}"))
}

fn error_of(src: &str) -> (ErrorKind, Option<usize>) {
    match evaluate(src, &Context::new()) {
        Ok(v) => panic!("'{src}' evaluated to {v} but was expected to fail"),
        Err(e) => (e.kind(), e.position()),
    }
}

#[rstest]
#[case("2 + 3 * 4", 14.0)]
#[case("(2 + 3) * 4", 20.0)]
#[case("2 ^ 10", 1024.0)]
#[case("10 - 4 - 3", 3.0)]
#[case("48 / 4 / 2", 6.0)]
#[case("2 ^ 3 ^ 2", 512.0)]
#[case("7", 7.0)]
#[case("3.", 3.0)]
#[case(".5 + .5", 1.0)]
#[case("((((1))))", 1.0)]
fn arithmetic_precedence(#[case] src: &str, #[case] expected: f64) {
    assert_eq!(eval(src), expected);
}

#[rstest]
#[case("8 − 3", 5.0)]
#[case("6 × 7", 42.0)]
#[case("9 ÷ 3", 3.0)]
#[case("2 × 3 − 8 ÷ 4", 4.0)]
fn localized_glyphs_match_ascii(#[case] src: &str, #[case] expected: f64) {
    assert_eq!(eval(src), expected);
}

#[rstest]
#[case("-2 ^ 2", 4.0)]
#[case("--3", 3.0)]
#[case("-(2 + 3)", -5.0)]
#[case("4 - -1", 5.0)]
#[case("-3²", -9.0)]
#[case("2 ^ -1", 0.5)]
fn unary_minus(#[case] src: &str, #[case] expected: f64) {
    assert_eq!(eval(src), expected);
}

#[rstest]
#[case("2x", 5.0, 10.0)]
#[case("3(x + 1)", 2.0, 9.0)]
#[case("(x + 1)(x - 1)", 3.0, 8.0)]
#[case("2x²", 3.0, 18.0)]
#[case("2x^2", 3.0, 18.0)]
#[case("x² + 2x + 1", 4.0, 25.0)]
#[case("4√x", 9.0, 12.0)]
#[case("1 / 2x", 2.0, 1.0)]
#[case("2²x", 3.0, 12.0)]
#[case("(x + 1)²(x - 1)", 3.0, 32.0)]
#[case("2²sin(0) + x", 3.0, 3.0)]
fn implicit_multiplication(#[case] src: &str, #[case] x: f64, #[case] expected: f64) {
    assert_eq!(eval_with_x(src, x), expected);
}

#[test]
fn constant_times_number() {
    assert_relative_eq!(eval("2π"), std::f64::consts::TAU);
    assert_relative_eq!(eval("2pi"), std::f64::consts::TAU);
    assert_relative_eq!(eval("π"), eval("pi"));
}

#[rstest]
#[case("√16", 4.0)]
#[case("√(9 + 16)", 5.0)]
#[case("sqrt(16)", 4.0)]
#[case("√4²", 4.0)]
#[case("√4 + 1", 3.0)]
#[case("(1 + 2)²", 9.0)]
#[case("2²²", 16.0)]
fn radical_and_square(#[case] src: &str, #[case] expected: f64) {
    assert_eq!(eval(src), expected);
}

#[test]
fn builtin_functions() {
    assert_eq!(eval("sin(0)"), 0.0);
    assert_eq!(eval("cos(0)"), 1.0);
    assert_eq!(eval("tan(0)"), 0.0);
    assert_eq!(eval("ln(1)"), 0.0);
    assert_relative_eq!(eval("sin(π / 2)"), 1.0);
    assert_relative_eq!(eval("cos(π)"), -1.0);
}

#[test]
fn degree_mode_applies_to_trigonometry_only() {
    let degrees = Context::new().with_angle_mode(AngleMode::Degrees);

    let sin_30 = evaluate("sin(30)", &degrees).unwrap();
    assert_relative_eq!(sin_30, 0.5, epsilon = 1e-12);

    let cos_60 = evaluate("cos(60)", &degrees).unwrap();
    assert_relative_eq!(cos_60, 0.5, epsilon = 1e-12);

    let tan_45 = evaluate("tan(45)", &degrees).unwrap();
    assert_relative_eq!(tan_45, 1.0, epsilon = 1e-12);

    // Non-trigonometric functions ignore the angle mode.
    assert_eq!(evaluate("√16 + ln(1)", &degrees).unwrap(), 4.0);

    // Radians remain the default.
    assert_relative_eq!(eval("sin(30)"), 30.0_f64.sin());
}

#[test]
fn division_by_zero_is_an_error_not_infinity() {
    assert_eq!(error_of("1 / 0"), (ErrorKind::DivisionByZero, Some(2)));
    assert_eq!(error_of("5 ÷ (2 - 2)"), (ErrorKind::DivisionByZero, Some(2)));
    assert_eq!(error_of("0 ^ -1").0, ErrorKind::DivisionByZero);
}

#[rstest]
#[case("ln(0)")]
#[case("ln(-1)")]
#[case("√-4")]
#[case("sqrt(-1)")]
#[case("(-8) ^ 0.5")]
fn domain_errors(#[case] src: &str) {
    assert_eq!(error_of(src).0, ErrorKind::Domain);
}

#[test]
fn domain_error_points_at_the_function() {
    assert_eq!(error_of("1 + ln(0)"), (ErrorKind::Domain, Some(4)));
}

#[test]
fn unbound_variable_reports_name_and_position() {
    let err = evaluate("2 + y", &Context::new().with_binding("x", 1.0)).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnboundVariable);
    assert_eq!(err.position(), Some(4));
    assert!(err.to_string().contains("'y'"));
}

#[rstest]
#[case("2 # 3", ErrorKind::Lex, Some(2))]
#[case("2 × foo", ErrorKind::Lex, Some(4))]
#[case("xy", ErrorKind::Lex, Some(0))]
#[case(".", ErrorKind::Lex, Some(0))]
#[case("", ErrorKind::Parse, None)]
#[case("   ", ErrorKind::Parse, None)]
#[case("2 +", ErrorKind::Parse, Some(3))]
#[case("2 + * 3", ErrorKind::Parse, Some(4))]
#[case("* 3", ErrorKind::Parse, Some(0))]
#[case("(1 + 2", ErrorKind::Parse, Some(0))]
#[case("(", ErrorKind::Parse, Some(0))]
#[case("2(", ErrorKind::Parse, Some(1))]
#[case("sin(", ErrorKind::Parse, Some(3))]
#[case("(1 + 2))", ErrorKind::Parse, Some(7))]
#[case(")", ErrorKind::Parse, Some(0))]
#[case("sin 30", ErrorKind::Parse, Some(0))]
#[case("2 3", ErrorKind::Parse, Some(2))]
#[case("x(2)", ErrorKind::Parse, Some(1))]
fn parse_failures(#[case] src: &str, #[case] kind: ErrorKind, #[case] position: Option<usize>) {
    assert_eq!(error_of(src), (kind, position));
}

#[rstest]
#[case("(", 0)]
#[case("2(", 1)]
#[case("sin(", 3)]
#[case("3 × (", 4)]
#[case("(1 + 2", 0)]
fn unclosed_group_names_the_opening_paren(#[case] src: &str, #[case] position: usize) {
    assert_eq!(parse(src), Err(ParseError::ExpectedClosingParen { position }));
}

#[test]
fn positions_count_characters_not_bytes() {
    // `×` and `π` are multi-byte in UTF-8 but one character each.
    assert_eq!(error_of("π × 2 # 1"), (ErrorKind::Lex, Some(6)));
}

#[test]
fn parse_errors_win_over_runtime_errors() {
    // The unbound `x` is never reached: the text does not parse.
    assert_eq!(error_of("x +").0, ErrorKind::Parse);
}

#[test]
fn evaluation_is_deterministic() {
    let context = Context::new().with_angle_mode(AngleMode::Degrees)
                                .with_binding("x", 1.25);
    let src = "3sin(x)² + √(x + 2) ÷ ln(x + 1)";

    let first = evaluate(src, &context).unwrap();
    for _ in 0..10 {
        assert_eq!(evaluate(src, &context).unwrap().to_bits(), first.to_bits());
    }
}

#[test]
fn context_is_not_modified_by_evaluation() {
    let context = Context::new().with_binding("x", 2.0);
    let before = context.clone();

    evaluate("x + 1", &context).unwrap();
    evaluate("1 / 0", &context).unwrap_err();

    assert_eq!(context, before);
}

#[test]
fn parse_once_evaluate_many() {
    let tree = parse("x² - 1").unwrap();
    let values: Vec<f64> = (0..4).map(|x| {
                                     let context = Context::new().with_binding("x", f64::from(x));
                                     context.eval(&tree).unwrap()
                                 })
                                 .collect();

    assert_eq!(values, vec![-1.0, 0.0, 3.0, 8.0]);
}

#[rstest]
#[case("2 + 3 × 4", "(2 + (3 * 4))")]
#[case("-2^2", "((-2) ^ 2)")]
#[case("2x²", "(2 * (x ^ 2))")]
#[case("√4 + sin(π)", "(sqrt(4) + sin(pi))")]
#[case("2 ^ 3 ^ 2", "(2 ^ (3 ^ 2))")]
fn canonical_rendering(#[case] src: &str, #[case] rendered: &str) {
    let tree = parse(src).unwrap();
    assert_eq!(tree.to_string(), rendered);

    // The rendering is itself a valid expression with the same value.
    let reparsed = parse(rendered).unwrap();
    let context = Context::new().with_binding("x", 3.0);
    assert_eq!(reparsed.to_string(), rendered);
    assert_eq!(context.eval(&tree).unwrap(), context.eval(&reparsed).unwrap());
}

#[test]
fn every_builtin_name_is_callable() {
    for name in BUILTIN_FUNCTIONS {
        let function = Function::from_name(name).unwrap();
        let tree = parse(&format!("{name}(1)")).unwrap();

        assert!(matches!(tree, Expr::FunctionCall { function: f, .. } if f == function),
                "'{name}' did not parse as a call");
    }
}
