use vervet::{
    ast::{Program, Statement},
    error::ParseError,
    interpreter::parser::core::Parser,
    lex,
};

fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let tokens = lex(source).unwrap_or_else(|e| panic!("Lexing failed for {source:?}: {e}"));
    Parser::new(&tokens).parse_program()
}

fn assert_parses_to(source: &str, expected: &str) {
    let (program, errors) = parse(source);
    assert!(errors.is_empty(),
            "Unexpected parse errors for {source:?}: {errors:?}");
    assert_eq!(program.to_string(), expected, "Wrong shape for {source:?}");
}

fn assert_parse_fails(source: &str) -> Vec<ParseError> {
    let (_, errors) = parse(source);
    assert!(!errors.is_empty(),
            "Expected parse errors for {source:?}, got none");
    errors
}

#[test]
fn operator_precedence_shapes() {
    let tests = [("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a * b / c", "((a * b) / c)"),
                 ("a + b / c + d * e - f", "(((a + (b / c)) + (d * e)) - f)"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                 ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5",
                  "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                 ("true", "true"),
                 ("false", "false"),
                 ("3 > 5 == false", "((3 > 5) == false)"),
                 ("!(true == true)", "(!(true == true))")];

    for (source, expected) in tests {
        assert_parses_to(source, expected);
    }
}

#[test]
fn grouping_overrides_precedence() {
    let tests = [("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                 ("(5 + 5) * 2", "((5 + 5) * 2)"),
                 ("2 / (5 + 5)", "(2 / (5 + 5))"),
                 ("-(5 + 5)", "(-(5 + 5))")];

    for (source, expected) in tests {
        assert_parses_to(source, expected);
    }
}

#[test]
fn calls_and_indexing_bind_tightest() {
    let tests = [("a + add(b + c) * d", "(a + (add((b + c)) * d))"),
                 ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                  "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))"),
                 ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
                 ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
                 ("add(a * b[2], b[1], 2 * [1, 2][1])",
                  "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))")];

    for (source, expected) in tests {
        assert_parses_to(source, expected);
    }
}

#[test]
fn let_statements() {
    assert_parses_to("let x = 5;", "let x = 5;");
    assert_parses_to("let y = true;", "let y = true;");
    assert_parses_to("let foobar = y;", "let foobar = y;");
    assert_parses_to("let sum = 1 + 2 * 3;", "let sum = (1 + (2 * 3));");
}

#[test]
fn return_statements() {
    assert_parses_to("return 10;", "return 10;");
    assert_parses_to("return 2 * 3;", "return (2 * 3);");
    assert_parses_to("return;", "return;");
    assert_parses_to("fn() { return; }", "fn() return;");
}

#[test]
fn if_expressions() {
    assert_parses_to("if (x < y) { x }", "if (x < y) x");
    assert_parses_to("if (x < y) { x } else { y }", "if (x < y) x else y");
}

#[test]
fn function_literals() {
    assert_parses_to("fn() { 1 }", "fn() 1");
    assert_parses_to("fn(x) { x }", "fn(x) x");
    assert_parses_to("fn(x, y) { x + y; }", "fn(x, y) (x + y)");
    assert_parses_to("fn(x) { x }(5)", "fn(x) x(5)");
}

#[test]
fn string_literals() {
    assert_parses_to(r#""hello world""#, "hello world");
    assert_parses_to(r#""hello" + "world""#, "(hello + world)");
}

#[test]
fn array_literals() {
    assert_parses_to("[]", "[]");
    assert_parses_to("[1, 2 * 2, 3 + 3]", "[1, (2 * 2), (3 + 3)]");
}

#[test]
fn hash_literals() {
    assert_parses_to("{}", "{}");
    assert_parses_to(r#"{"one": 1, "two": 2}"#, "{one: 1, two: 2}");
    assert_parses_to(r#"{"sum": 1 + 2}"#, "{sum: (1 + 2)}");
    assert_parses_to("{key: value}", "{key: value}");
}

#[test]
fn identifiers_keep_their_spelling() {
    let (program, errors) = parse("some_name7;");
    assert!(errors.is_empty());

    match &program.statements[0] {
        Statement::Expression { expr, .. } => assert_eq!(expr.to_string(), "some_name7"),
        other => panic!("Expected an expression statement, got {other:?}"),
    }
}

#[test]
fn let_without_assign_is_an_error() {
    let errors = assert_parse_fails("let x 5;");
    assert!(errors[0].to_string().contains("unexpected next token"),
            "Unexpected diagnostic: {}",
            errors[0]);
}

#[test]
fn let_without_initializer_is_an_error() {
    assert_parse_fails("let x;");
}

#[test]
fn parser_recovers_at_statement_boundaries() {
    let (program, errors) = parse("let x 5; let y = 3;");

    assert_eq!(errors.len(), 1, "Expected exactly one error: {errors:?}");
    assert_eq!(program.statements.len(), 1);
    assert_eq!(program.to_string(), "let y = 3;");
}

#[test]
fn multiple_errors_accumulate() {
    let (_, errors) = parse("let x 5; let y 6; let z = 7;");
    assert_eq!(errors.len(), 2, "Expected two errors: {errors:?}");
}

#[test]
fn missing_prefix_routine_is_reported() {
    let errors = assert_parse_fails(")");
    assert!(errors[0].to_string()
                     .contains("no prefix parse function found for )"),
            "Unexpected diagnostic: {}",
            errors[0]);
}

#[test]
fn unterminated_constructs_are_errors() {
    assert_parse_fails("(1 + 2");
    assert_parse_fails("[1, 2");
    assert_parse_fails("{1: 2");
    assert_parse_fails("fn(x { x }");
}

#[test]
fn lexer_reports_line_numbers() {
    let tokens = lex("let a = 1;\nlet b = 2;").unwrap();

    let (_, first_line) = tokens.first().unwrap();
    let (_, last_line) = tokens.last().unwrap();

    assert_eq!(*first_line, 1);
    assert_eq!(*last_line, 2);
}

#[test]
fn illegal_characters_fail_lexing() {
    assert!(lex("let a = 1 @ 2;").is_err());
}
