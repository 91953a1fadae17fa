use simplescript::{
    Lexer, Parser, Program,
    ast::{Expr, LiteralValue, Statement},
};

fn parse(source: &str) -> Program {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse();

    assert!(parser.errors().is_empty(),
            "parser errors for {source:?}: {:?}",
            parser.errors());

    program
}

fn parse_errors(source: &str) -> Vec<String> {
    let mut parser = Parser::new(Lexer::new(source));
    parser.parse();

    parser.errors().iter().map(ToString::to_string).collect()
}

#[test]
fn operator_precedence_renders_canonically() {
    let fixtures = [("-a * b", "((-a) * b)"),
                    ("!-a", "(!(-a))"),
                    ("a + b + c", "((a + b) + c)"),
                    ("a + b - c", "((a + b) - c)"),
                    ("a * b * c", "((a * b) * c)"),
                    ("a * b / c", "((a * b) / c)"),
                    ("a + b / c", "(a + (b / c))"),
                    ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                    ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
                    ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                    ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
                    ("3 > 5 == false", "((3 > 5) == false)"),
                    ("3 < 5 == true", "((3 < 5) == true)"),
                    ("a <= b == c >= d", "((a <= b) == (c >= d))"),
                    ("a < b == c <= d", "((a < b) == (c <= d))"),
                    ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                    ("(5 + 5) * 2", "((5 + 5) * 2)"),
                    ("2 / (5 + 5)", "(2 / (5 + 5))"),
                    ("-(5 + 5)", "(-(5 + 5))"),
                    ("!(true == true)", "(!(true == true))"),
                    ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
                    ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                     "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))"),
                    ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
                    ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
                    ("add(a * b[2], b[1], 2 * [1, 2][1])",
                     "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))")];

    for (input, expected) in fixtures {
        assert_eq!(parse(input).to_string(), expected, "input: {input}");
    }
}

#[test]
fn canonical_form_reparses_to_the_same_tree() {
    // Inputs deliberately avoid grouping parentheses: the canonical render
    // introduces its own, and re-parsing must not change the structure.
    let inputs = ["let x = a + b * c;",
                  "-a * b;",
                  "!true;",
                  "a + b - c * d / e;",
                  "add(a, b, add(c, d));",
                  "xs[1 + 2];",
                  "[1, 2 * 2, 3 + 3];",
                  "{1: 2, 3: 4 + 5};",
                  "return a * b;"];

    for input in inputs {
        let first = parse(input);
        let second = parse(&first.to_string());
        assert_eq!(first, second, "input: {input}");
    }
}

#[test]
fn let_statements_bind_name_and_value() {
    let program = parse("let x = 5; let y = true; let foobar = y;");

    assert_eq!(program.to_string(), "let x = 5;let y = true;let foobar = y;");
    assert_eq!(program.statements.len(), 3);

    match &program.statements[0] {
        Statement::Let { name, value } => {
            assert_eq!(name, "x");
            assert_eq!(value, &Expr::Literal { value: LiteralValue::Integer(5) });
        },
        other => panic!("expected let statement, got {other:?}"),
    }
}

#[test]
fn return_statements_take_an_optional_payload() {
    let program = parse("return 5; return; return 2 * 3;");

    assert_eq!(program.statements.len(), 3);
    assert_eq!(program.statements[1], Statement::Return { value: None });
    assert_eq!(program.to_string(), "return 5;return;return (2 * 3);");
}

#[test]
fn function_literals_carry_their_parameters() {
    let fixtures = [("ft() {};", vec![]),
                    ("ft(x) {};", vec!["x"]),
                    ("ft(x, y, z) {};", vec!["x", "y", "z"])];

    for (input, expected) in fixtures {
        let program = parse(input);
        match &program.statements[0] {
            Statement::Expression { expr: Expr::FunctionLiteral { parameters, .. } } => {
                assert_eq!(parameters, &expected, "input: {input}");
            },
            other => panic!("expected function literal for {input}, got {other:?}"),
        }
    }
}

#[test]
fn if_expressions_have_block_arms() {
    let program = parse("if (x < y) { x } else { y; z; }");

    match &program.statements[0] {
        Statement::Expression { expr: Expr::IfExpr { condition,
                                                     consequence,
                                                     alternative, }, } => {
            assert_eq!(condition.to_string(), "(x < y)");
            assert_eq!(consequence.statements.len(), 1);
            let alternative = alternative.as_ref().expect("alternative block");
            assert_eq!(alternative.statements.len(), 2);
        },
        other => panic!("expected if expression, got {other:?}"),
    }

    match &parse("if (x) { y }").statements[0] {
        Statement::Expression { expr: Expr::IfExpr { alternative, .. } } => {
            assert!(alternative.is_none());
        },
        other => panic!("expected if expression, got {other:?}"),
    }
}

#[test]
fn hash_literals_preserve_pair_order() {
    let program = parse(r#"{"one": 1, "two": 2, "three": 3}"#);

    match &program.statements[0] {
        Statement::Expression { expr: Expr::HashLiteral { pairs } } => {
            assert_eq!(pairs.len(), 3);
            assert_eq!(pairs[0].0,
                       Expr::Literal { value: LiteralValue::Str("one".to_owned()) });
            assert_eq!(pairs[2].1, Expr::Literal { value: LiteralValue::Integer(3) });
        },
        other => panic!("expected hash literal, got {other:?}"),
    }

    match &parse("{}").statements[0] {
        Statement::Expression { expr: Expr::HashLiteral { pairs } } => {
            assert!(pairs.is_empty());
        },
        other => panic!("expected hash literal, got {other:?}"),
    }
}

#[test]
fn call_arguments_parse_as_expression_list() {
    let program = parse("add(1, 2 * 3, 4 + 5);");

    match &program.statements[0] {
        Statement::Expression { expr: Expr::FunctionCall { callee, arguments } } => {
            assert_eq!(callee.to_string(), "add");
            assert_eq!(arguments.len(), 3);
            assert_eq!(arguments[1].to_string(), "(2 * 3)");
        },
        other => panic!("expected call expression, got {other:?}"),
    }
}

#[test]
fn errors_accumulate_and_parsing_continues() {
    let errors = parse_errors("let x 5; let = 10; let 838383;");

    assert_eq!(errors,
               vec!["expected token to be =, got INT instead",
                    "expected token to be IDENT, got = instead",
                    "no prefix parse function for = found",
                    "expected token to be IDENT, got INT instead"]);
}

#[test]
fn missing_prefix_role_is_reported() {
    assert_eq!(parse_errors("+ 1;")[0], "no prefix parse function for + found");
    assert_eq!(parse_errors("@;")[0], "no prefix parse function for ILLEGAL found");
}

#[test]
fn unclosed_group_reports_eof() {
    assert_eq!(parse_errors("(1 + 2")[0], "expected token to be ), got EOF instead");
}

#[test]
fn bare_return_needs_a_semicolon() {
    // Only a semicolon makes the payload optional; at end of input the
    // parser still expects an expression after `return`.
    assert_eq!(parse_errors("return")[0], "no prefix parse function for EOF found");
    assert!(parse_errors("return;").is_empty());
}

#[test]
fn integer_overflow_is_a_parse_error() {
    assert_eq!(parse_errors("let x = 99999999999999999999;")[0],
               "could not parse 99999999999999999999 as integer");
}
