use std::fs;

use vervet::{
    error::RuntimeError,
    interpreter::{evaluator::core::Context, parser::core::Parser, value::core::Object},
    lex, repl, run_source,
};
use walkdir::WalkDir;

fn eval_source(source: &str) -> Result<Object, RuntimeError> {
    let tokens = lex(source).unwrap_or_else(|e| panic!("Lexing failed for {source:?}: {e}"));
    let (program, errors) = Parser::new(&tokens).parse_program();
    assert!(errors.is_empty(),
            "Unexpected parse errors for {source:?}: {errors:?}");

    let mut context = Context::new();
    context.eval_program(&program)
}

fn assert_integer(source: &str, expected: i64) {
    match eval_source(source) {
        Ok(Object::Integer(value)) => {
            assert_eq!(value, expected, "Wrong value for {source:?}");
        },
        other => panic!("Expected {expected} for {source:?}, got {other:?}"),
    }
}

fn assert_bool(source: &str, expected: bool) {
    match eval_source(source) {
        Ok(Object::Bool(value)) => assert_eq!(value, expected, "Wrong value for {source:?}"),
        other => panic!("Expected {expected} for {source:?}, got {other:?}"),
    }
}

fn assert_null(source: &str) {
    match eval_source(source) {
        Ok(Object::Null) => {},
        other => panic!("Expected null for {source:?}, got {other:?}"),
    }
}

fn assert_string(source: &str, expected: &str) {
    match eval_source(source) {
        Ok(Object::Str(value)) => {
            assert_eq!(value.as_str(), expected, "Wrong value for {source:?}");
        },
        other => panic!("Expected {expected:?} for {source:?}, got {other:?}"),
    }
}

fn assert_error(source: &str, expected: &str) {
    match eval_source(source) {
        Err(error) => assert_eq!(error.to_string(), expected, "Wrong message for {source:?}"),
        Ok(value) => panic!("Expected an error for {source:?}, got {value}"),
    }
}

#[test]
fn integer_arithmetic() {
    let tests = [("5", 5),
                 ("10", 10),
                 ("-5", -5),
                 ("-10", -10),
                 ("5 + 5 + 5 + 5 - 10", 10),
                 ("2 * 2 * 2 * 2 * 2", 32),
                 ("-50 + 100 + -50", 0),
                 ("5 * 2 + 10", 20),
                 ("5 + 2 * 10", 25),
                 ("20 + 2 * -10", 0),
                 ("50 / 2 * 2 + 10", 60),
                 ("2 * (5 + 10)", 30),
                 ("3 * 3 * 3 + 10", 37),
                 ("3 * (3 * 3) + 10", 37),
                 ("(5 + 10 * 2 + 15 / 3) * 2 - 10", 50)];

    for (source, expected) in tests {
        assert_integer(source, expected);
    }
}

#[test]
fn division_truncates_toward_zero() {
    assert_integer("7 / 2", 3);
    assert_integer("-7 / 2", -3);
    assert_error("1 / 0", "division by zero");
}

#[test]
fn boolean_expressions() {
    let tests = [("true", true),
                 ("false", false),
                 ("true == true", true),
                 ("false == false", true),
                 ("true == false", false),
                 ("false != true", true),
                 ("1 > 2", false),
                 ("1 < 1", false),
                 ("1 > 1", false),
                 ("1 == 1", true),
                 ("1 != 1", false),
                 ("1 == 2", false),
                 ("1 != 2", true),
                 ("(1 < 2) == true", true),
                 ("(1 > 2) == true", false)];

    for (source, expected) in tests {
        assert_bool(source, expected);
    }
}

#[test]
fn bang_negates_truthiness() {
    let tests = [("!true", false),
                 ("!false", true),
                 ("!!true", true),
                 ("!!false", false),
                 ("!5", false),
                 ("!!5", true),
                 ("!0", false)];

    for (source, expected) in tests {
        assert_bool(source, expected);
    }
}

#[test]
fn only_false_and_null_are_falsy() {
    assert_integer("if (0) { 10 }", 10);
    assert_integer(r#"if ("") { 10 }"#, 10);
    assert_integer("if ([]) { 10 }", 10);
    assert_integer("if ({}) { 10 }", 10);
    assert_null("if (false) { 10 }");
    assert_null("if (if (false) { 10 }) { 10 }");
}

#[test]
fn if_expressions() {
    assert_integer("if (true) { 10 }", 10);
    assert_integer("if (1) { 10 }", 10);
    assert_integer("if (2 < 3) { 10 }", 10);
    assert_integer("if (2 < 3) { 10 } else { 20 }", 10);
    assert_integer("if (2 > 3) { 10 } else { 20 }", 20);
    assert_null("if (2 > 3) { 10 }");
}

#[test]
fn return_statements() {
    let tests = [("return 10;", 10),
                 ("return 5; 9", 5),
                 ("return 2 * 6; 9", 12),
                 ("7; return 2 * 3; 9", 6)];

    for (source, expected) in tests {
        assert_integer(source, expected);
    }
}

#[test]
fn return_punches_blocks_but_not_functions() {
    assert_integer("if (10 > 1) {
                        if (10 > 1) {
                            return 10;
                        }
                        return 1;
                    }",
                   10);
    assert_integer("let f = fn() { return 1; }; f(); 2", 2);
}

#[test]
fn bare_return_yields_null() {
    assert_null("let f = fn() { return; }; f()");
    assert_null("let f = fn() { }; f()");
}

#[test]
fn let_statements() {
    let tests = [("let a = 5; a", 5),
                 ("let a = 5 * 5; a", 25),
                 ("let a = 6; let b = a; b", 6),
                 ("let a = 7; let b = a + 1; let c = 2 * a + b; c", 22)];

    for (source, expected) in tests {
        assert_integer(source, expected);
    }
}

#[test]
fn rebinding_overwrites_and_shadows() {
    assert_integer("let a = 1; let a = 2; a", 2);
    assert_integer("let a = 1; let f = fn() { let a = 99; a }; f() + a", 100);
}

#[test]
fn function_application() {
    let tests = [("let identity = fn(x) { x; }; identity(5)", 5),
                 ("let identity = fn(x) { return x; }; identity(6)", 6),
                 ("let double = fn(y) { 2 * y; }; double(7)", 14),
                 ("let add = fn(x, y) { x + y; }; add(8, 8)", 16),
                 ("let add = fn(x, y) { x + y; }; add(5 + 6, add(7, 8))", 26),
                 ("fn(x){ x; }(9)", 9)];

    for (source, expected) in tests {
        assert_integer(source, expected);
    }
}

#[test]
fn function_values_inspect_as_placeholders() {
    match eval_source("fn(x) { x + 2; }") {
        Ok(value @ Object::Function(_)) => {
            assert_eq!(value.to_string(), "fn(x) { (x + 2) }");
        },
        other => panic!("Expected a function, got {other:?}"),
    }
}

#[test]
fn call_arity_is_checked() {
    assert_error("let add = fn(x, y) { x + y; }; add(1)",
                 "wrong number of arguments. expected=2 got=1");
    assert_error("let one = fn(x) { x }; one(1, 2)",
                 "wrong number of arguments. expected=1 got=2");
}

#[test]
fn closures_capture_their_defining_scope() {
    assert_integer("let adder = fn(x) { fn(y) { x + y } }; adder(2)(3)", 5);
    assert_integer("let make_adder = fn(x) { fn(y) { x + y } };
                    let add_two = make_adder(2);
                    let add_ten = make_adder(10);
                    add_two(5) + add_ten(5)",
                   22);
}

#[test]
fn inner_let_shadows_captured_binding() {
    assert_integer("let counter = fn() { let i = 0; fn() { let i = i + 1; i } };
                    let c = counter();
                    c() + c()",
                   2);
}

#[test]
fn recursive_closures() {
    assert_integer("let fibonacci = fn(n) {
                        if (n < 2) { return n; }
                        fibonacci(n - 1) + fibonacci(n - 2)
                    };
                    fibonacci(10)",
                   55);
}

#[test]
fn functions_are_first_class() {
    assert_integer("let apply = fn(f, x) { f(x) }; apply(fn(n) { n * 3 }, 4)", 12);
    assert_integer("let length = len; length([1, 2])", 2);
}

#[test]
fn string_literals_and_concatenation() {
    assert_string(r#""Hello, world!""#, "Hello, world!");
    assert_string(r#""Hello" + ", " + "world!""#, "Hello, world!");
}

#[test]
fn strings_support_only_concatenation() {
    assert_error(r#""a" - "b""#, "unknown operator: STRING - STRING");
    assert_error(r#""a" == "a""#, "unknown operator: STRING == STRING");
    assert_error(r#""a" < "b""#, "unknown operator: STRING < STRING");
}

#[test]
fn error_messages_are_exact() {
    let tests = [("5 + true", "type mismatch: INTEGER + BOOLEAN"),
                 ("5 + true; 5", "type mismatch: INTEGER + BOOLEAN"),
                 ("5 == true", "type mismatch: INTEGER == BOOLEAN"),
                 ("-true;", "unknown operator: -BOOLEAN"),
                 ("true + false", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("true + false; 5", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("if (10 > 1) { true + false }", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("if (10 > 1) {
                       if (10 > 1) {
                           return true + false;
                       }
                       return 1;
                   }",
                  "unknown operator: BOOLEAN + BOOLEAN"),
                 ("foobar", "identifier not found: foobar"),
                 ("5(1)", "not a function: INTEGER"),
                 (r#""no"(1)"#, "not a function: STRING")];

    for (source, expected) in tests {
        assert_error(source, expected);
    }
}

#[test]
fn errors_abort_the_rest_of_the_program() {
    assert_error("let a = true + 1; let b = 2; b",
                 "type mismatch: BOOLEAN + INTEGER");
}

#[test]
fn infix_evaluates_right_operand_first() {
    assert_error("missing + (1 / 0)", "division by zero");
    assert_error("(1 / 0) + missing", "identifier not found: missing");
}

#[test]
fn array_literals_and_indexing() {
    let tests = [("[1, 2, 3][0]", 1),
                 ("[1, 2, 3][1]", 2),
                 ("[1, 2, 3][2]", 3),
                 ("let i = 0; [1][i]", 1),
                 ("[1, 2, 3][1 + 1]", 3),
                 ("let arr = [1, 2 * 2, 3 + 3]; arr[1]", 4),
                 ("let arr = [1, 2, 3]; arr[0] + arr[1] + arr[2]", 6),
                 ("let arr = [1, 2, 3]; let i = arr[0]; arr[i]", 2),
                 ("fn(){ [4, 5, 6] }()[0]", 4),
                 ("fn(){ [4, 5, 6] }()[fn(){ 2 }()]", 6)];

    for (source, expected) in tests {
        assert_integer(source, expected);
    }
}

#[test]
fn array_index_errors() {
    assert_error("[1, 2, 3][3]", "index is larger than the max. index=3, max=2");
    assert_error("[3, 4][3]", "index is larger than the max. index=3, max=1");
    assert_error("[][0]", "index is larger than the max. index=0, max=-1");
    assert_error("[1][-1]", "cannot index with a negative number -1");
    assert_error(r#"[3, 4]["hiya"]"#, "cannot use as index STRING");
    assert_error("fn(){ 2 }[3]", "cannot index type FUNCTION");
    assert_error("5[0]", "cannot index type INTEGER");
}

#[test]
fn arrays_compare_by_identity() {
    assert_bool("[1] == [1]", false);
    assert_bool("[1] != [1]", true);
    assert_bool("let a = [1]; a == a", true);
    assert_bool("let a = [1]; let b = a; a == b", true);
}

#[test]
fn hash_literals_and_lookup() {
    let tests = [(r#"{2: true, "false": fn(){ 3 }, false: "hello"}["false"]()"#, 3),
                 (r#"{"one": 1, "two": 2}["two"]"#, 2),
                 ("{1 + 1: 2}[2]", 2),
                 (r#"let key = "k"; {key: 5}["k"]"#, 5),
                 (r#"{"a": 1, "a": 2}["a"]"#, 2)];

    for (source, expected) in tests {
        assert_integer(source, expected);
    }

    assert_bool(r#"{2: true, "false": fn(){ 3 }, false: "hello"}[2]"#, true);
    assert_string(r#"{2: true, "false": fn(){ 3 }, false: "hello"}[false]"#,
                  "hello");
}

#[test]
fn hash_misses_yield_null() {
    assert_null(r#"{"a": 1}["b"]"#);
    assert_null("{}[0]");
    assert_null("{1: true}[false]");
}

#[test]
fn hash_key_typing() {
    assert_error("{fn(){ 1 }: 1}", "cannot use as key FUNCTION");
    assert_error("{[1]: 1}", "cannot use as key ARRAY");
    assert_error("{{false: true}: true}", "cannot use as key HASH");
    assert_error("{1: true}[fn(){ 1 }]", "cannot use as index FUNCTION");
    assert_error("{1: true}[[1]]", "cannot use as index ARRAY");
}

#[test]
fn hash_pairs_evaluate_values_before_keys() {
    assert_error("{missing: 1 / 0}", "division by zero");
    assert_error("{1 / 0: missing}", "identifier not found: missing");
}

#[test]
fn builtin_len() {
    assert_integer(r#"len("")"#, 0);
    assert_integer(r#"len("barr")"#, 4);
    assert_integer(r#"len("hello world")"#, 11);
    assert_integer(r#"len(["one", "two"])"#, 2);
    assert_integer("len([1, \"two\", fn(){ 2 }])", 3);
    assert_error("len(1)", "argument to `len` not supported, got INTEGER");
    assert_error(r#"len("one", "two")"#,
                 "wrong number of arguments. expected=1 got=2");
}

#[test]
fn builtin_first_and_last() {
    assert_integer(r#"first([1, "two"])"#, 1);
    assert_integer("first([3])", 3);
    assert_null("first([])");
    assert_integer("first([fn(){ 8 }])()", 8);
    assert_integer("last([1, 2, 3])", 3);
    assert_null("last([])");
    assert_error("first(1)", "argument to `first` not supported, got INTEGER");
    assert_error(r#"last("text")"#, "argument to `last` not supported, got STRING");
}

#[test]
fn builtin_rest() {
    assert_integer("first(rest([4, 5, 6, 7]))", 5);
    assert_integer("len(rest([4, 5, 6, 7]))", 3);
    assert_integer(r#"len(rest([1, "two", 3, fn(){ return 4 }()]))"#, 3);
    assert_null("rest([1])");
    assert_null("rest([])");
    assert_error("rest(5)", "argument to `rest` not supported, got INTEGER");
}

#[test]
fn builtin_push_copies() {
    assert_integer("len(push([1, 2], 3))", 3);
    assert_integer("last(push([1, 2], 3))", 3);
    assert_integer("last(push([4], fn(){ 5 }()))", 5);
    assert_integer("let a = [1, 2]; let b = push(a, 3); len(a)", 2);
    assert_integer("let a = [1, 2]; let b = push(a, 3); len(b)", 3);
    assert_error("push(1, 2)", "argument to `push` not supported, got INTEGER");
    assert_error("push([1])", "wrong number of arguments. expected=2 got=1");
}

#[test]
fn bindings_shadow_builtins() {
    assert_integer("let len = fn(x) { 99 }; len([])", 99);
}

#[test]
fn every_builtin_is_reachable_by_name() {
    for name in vervet::interpreter::evaluator::function::BUILTIN_FUNCTIONS {
        match eval_source(name) {
            Ok(Object::Builtin(builtin)) => assert_eq!(&builtin.name, name),
            other => panic!("Expected builtin for {name:?}, got {other:?}"),
        }
    }
}

#[test]
fn blocks_share_their_surrounding_environment() {
    assert_integer("if (true) { let b = 5; } b", 5);
    assert_integer("let n = 1; if (true) { let n = 2; } n", 2);
}

#[test]
fn demo_scripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "vv"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = run_source(&content, false) {
            panic!("Demo script {path:?} failed:\n{content}\nError: {e:?}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}

fn repl_transcript(input: &str) -> String {
    let mut output = Vec::new();
    repl::start(input.as_bytes(), &mut output).expect("REPL I/O failed");
    String::from_utf8(output).expect("REPL wrote invalid UTF-8")
}

#[test]
fn repl_keeps_bindings_across_lines() {
    let transcript = repl_transcript("let x = 2;\nlet y = x * 20;\nx + y\n");
    assert!(transcript.contains("42"), "Transcript was: {transcript}");
}

#[test]
fn repl_prints_values_in_inspection_form() {
    let transcript = repl_transcript("[1, 1 + 1, 3]\n");
    assert!(transcript.contains("[1, 2, 3]"), "Transcript was: {transcript}");

    let transcript = repl_transcript("if (false) { 1 }\n");
    assert!(transcript.contains("null"), "Transcript was: {transcript}");

    let transcript = repl_transcript(r#""hello" + " there""#);
    assert!(transcript.contains("hello there"), "Transcript was: {transcript}");
}

#[test]
fn repl_prints_runtime_errors() {
    let transcript = repl_transcript("5 + true\n");
    assert!(transcript.contains("ERROR: type mismatch: INTEGER + BOOLEAN"),
            "Transcript was: {transcript}");
}

#[test]
fn repl_prints_parse_errors_and_skips_evaluation() {
    let transcript = repl_transcript("let x 5;\n");
    assert!(transcript.contains("unexpected next token"),
            "Transcript was: {transcript}");
    assert!(!transcript.contains("ERROR:"), "Transcript was: {transcript}");
}
