use stackcalc::{
    Error, ErrorKind, Evaluator, ParseError, Position, RuntimeError, TokenKind, TrailingInput,
    evaluate, evaluate_with,
};

fn eval_error(source: &str) -> Error {
    match evaluate(source) {
        Ok(value) => panic!("expected error, received value {value}"),
        Err(err) => err,
    }
}

#[test]
fn unexpected_character_carries_character_and_position() {
    let err = eval_error("1 + 2 $ 3");
    assert_eq!(err.kind(), ErrorKind::Lex);
    assert_eq!(err,
               Error::Parse(ParseError::UnexpectedCharacter { character: '$',
                                                              position:  Position::new(1, 7), }));
    assert_eq!(err.to_string(),
               "Error on line 1, column 7: Unexpected character '$'.");
}

#[test]
fn lexical_error_on_a_later_line() {
    let err = eval_error("1 +\n  2 # 3");
    assert_eq!(err.position(), Position::new(2, 5));
    assert_eq!(err.kind(), ErrorKind::Lex);
}

#[test]
fn lexical_error_after_complete_expression_is_reported_when_pulled() {
    // The character right after the expression is read as the lookahead.
    assert_eq!(eval_error("1 $").kind(), ErrorKind::Lex);
    // Anything further away is never scanned.
    assert_eq!(evaluate("1 1 $").unwrap(), 1.0);
}

#[test]
fn missing_closing_paren_reports_end_of_input() {
    let err = eval_error("(1 + 2");
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(err,
               Error::Parse(ParseError::UnexpectedEndOfInput { expected: &[TokenKind::RightParen],
                                                               position: Position::new(1, 7), }));
    assert_eq!(err.to_string(),
               "Error on line 1, column 7: Expected ')' but found end of input.");
}

#[test]
fn wrong_token_reports_expected_and_found_kinds() {
    let (expected, found, position) = match eval_error("3 * -2") {
        Error::Parse(ParseError::UnexpectedToken { expected,
                                                   found,
                                                   position, }) => (expected, found, position),
        other => panic!("expected an unexpected-token error, found {other:?}"),
    };
    assert_eq!(expected,
               &[TokenKind::LeftParen, TokenKind::Number, TokenKind::Identifier]);
    assert_eq!(found, TokenKind::Minus);
    assert_eq!(position, Position::new(1, 5));
}

#[test]
fn syntax_error_message_lists_alternatives() {
    let err = eval_error("(2 + )");
    assert_eq!(err.to_string(),
               "Error on line 1, column 6: Expected '(', number or identifier but found ')'.");
}

#[test]
fn empty_input_is_a_syntax_error() {
    let err = eval_error("");
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert!(matches!(err,
                     Error::Parse(ParseError::UnexpectedEndOfInput { position, .. })
                     if position == Position::new(1, 1)));
}

#[test]
fn undefined_variable_names_the_identifier() {
    let err = eval_error("2 * radius");
    assert_eq!(err.kind(), ErrorKind::UndefinedVariable);
    assert_eq!(err,
               Error::Runtime(RuntimeError::UndefinedVariable { name:     "radius".to_string(),
                                                                position: Position::new(1, 5), }));
    assert_eq!(err.to_string(),
               "Error on line 1, column 5: Unknown variable 'radius'.");
}

#[test]
fn division_by_zero_points_at_the_operator() {
    let err = eval_error("1 + 4 / (2 - 2)");
    assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    assert_eq!(err,
               Error::Runtime(RuntimeError::DivisionByZero { position: Position::new(1, 7) }));
}

#[test]
fn division_by_zero_variable() {
    let err = evaluate_with("x / y", [("x", 1.0), ("y", 0.0)]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DivisionByZero);
}

#[test]
fn strict_mode_rejects_trailing_tokens() {
    let evaluator = Evaluator::new().with_trailing_input(TrailingInput::Reject);
    let err = evaluator.evaluate("1+1 )").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(err,
               Error::Parse(ParseError::TrailingInput { found:    TokenKind::RightParen,
                                                        position: Position::new(1, 5), }));
    assert_eq!(evaluator.evaluate("1+1").unwrap(), 2.0);
}

#[test]
fn nesting_limit_is_enforced() {
    let evaluator = Evaluator::new().with_max_depth(3);
    assert_eq!(evaluator.evaluate("(((1)))").unwrap(), 1.0);
    assert_eq!(evaluator.evaluate("((1) + (2) + ((3)))").unwrap(), 6.0);

    let err = evaluator.evaluate("((((1))))").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NestingTooDeep);
    assert_eq!(err,
               Error::Parse(ParseError::NestingTooDeep { limit:    3,
                                                         position: Position::new(1, 4), }));
}

#[test]
fn default_nesting_limit_stops_adversarial_input() {
    let source = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
    assert_eq!(eval_error(&source).kind(), ErrorKind::NestingTooDeep);

    let source = format!("{}1{}", "(".repeat(200), ")".repeat(200));
    assert_eq!(evaluate(&source).unwrap(), 1.0);
}

#[test]
fn internal_guard_errors_are_classified() {
    let position = Position::new(2, 4);

    let err = Error::from(ParseError::InvalidNumber { lexeme: "1e999x".to_string(),
                                                      position });
    assert_eq!(err.kind(), ErrorKind::Lex);
    assert_eq!(err.position(), position);
    assert_eq!(err.to_string(),
               "Error on line 2, column 4: Invalid number literal '1e999x'.");

    let err = Error::from(RuntimeError::MissingOperand { position });
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(err.position(), position);
    assert_eq!(err.to_string(), "Error on line 2, column 4: Value missing.");
}

#[test]
fn huge_exponents_are_numbers_not_errors() {
    assert_eq!(evaluate("1e999").unwrap(), f64::INFINITY);
    assert_eq!(evaluate("1e-999").unwrap(), 0.0);
}
