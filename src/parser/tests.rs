use super::*;
use crate::ast::{Expr, Stmt};
use crate::lexer::Lexer;

fn parse(input: &str) -> Program {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();
    check_parser_errors(&parser);
    program
}

fn check_parser_errors(parser: &Parser) {
    let errors = parser.errors();
    assert!(
        errors.is_empty(),
        "parser had {} errors: {:?}",
        errors.len(),
        errors
    );
}

#[test]
fn let_statements_bind_identifier_to_value() {
    let program = parse("let x = 5;\nlet y = 10;\nlet foobar = 838383;");
    assert_eq!(program.statements.len(), 3);

    let names: Vec<&str> = program
        .statements
        .iter()
        .map(|s| match s {
            Stmt::Let { name, .. } => name.value.as_str(),
            other => panic!("expected Let statement, got {other:?}"),
        })
        .collect();
    assert_eq!(names, vec!["x", "y", "foobar"]);
}

#[test]
fn return_statements_parse() {
    let program = parse("return 5;\nreturn 10;\nreturn 993322;");
    assert_eq!(program.statements.len(), 3);
    for stmt in &program.statements {
        assert!(matches!(stmt, Stmt::Return { .. }));
    }
}

#[test]
fn identifier_expression_parses() {
    let program = parse("foobar;");
    assert_eq!(program.statements.len(), 1);
    match &program.statements[0] {
        Stmt::Expression {
            expression: Expr::Identifier(ident),
            ..
        } => assert_eq!(ident.value, "foobar"),
        other => panic!("unexpected statement: {other:?}"),
    }
}

#[test]
fn operator_precedence_is_reflected_in_the_printed_tree() {
    let cases = vec![
        ("-a * b", "((-a) * b)"),
        ("!-a", "(!(-a))"),
        ("a + b + c", "((a + b) + c)"),
        ("a + b - c", "((a + b) - c)"),
        ("a * b * c", "((a * b) * c)"),
        ("a + b * c", "(a + (b * c))"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
        ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
        ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
        ("(5 + 5) * 2", "((5 + 5) * 2)"),
        ("-(5 + 5)", "(-(5 + 5))"),
        ("!(true == true)", "(!(true == true))"),
        ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
        (
            "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
            "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
        ),
        ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
        (
            "add(a * b[2], b[1], 2 * [1, 2][1])",
            "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))",
        ),
    ];

    for (input, expected) in cases {
        let program = parse(input);
        assert_eq!(program.to_string(), expected, "input: {input}");
    }
}

#[test]
fn if_expression_parses_condition_and_branches() {
    let program = parse("if (x < y) { x }");
    assert_eq!(program.statements.len(), 1);
    match &program.statements[0] {
        Stmt::Expression {
            expression: Expr::If {
                alternative, ..
            },
            ..
        } => assert!(alternative.is_none()),
        other => panic!("unexpected statement: {other:?}"),
    }
}

#[test]
fn function_literal_parses_parameters_and_body() {
    let program = parse("fn(x, y) { x + y; }");
    match &program.statements[0] {
        Stmt::Expression {
            expression: Expr::FunctionLiteral { parameters, .. },
            ..
        } => {
            let names: Vec<&str> = parameters.iter().map(|p| p.value.as_str()).collect();
            assert_eq!(names, vec!["x", "y"]);
        }
        other => panic!("unexpected statement: {other:?}"),
    }
}

#[test]
fn call_expression_parses_arguments() {
    let program = parse("add(1, 2 * 3, 4 + 5);");
    match &program.statements[0] {
        Stmt::Expression {
            expression: Expr::Call { arguments, .. },
            ..
        } => assert_eq!(arguments.len(), 3),
        other => panic!("unexpected statement: {other:?}"),
    }
}

#[test]
fn string_literal_parses() {
    let program = parse("\"hello world\";");
    match &program.statements[0] {
        Stmt::Expression {
            expression: Expr::StringLiteral { value, .. },
            ..
        } => assert_eq!(value, "hello world"),
        other => panic!("unexpected statement: {other:?}"),
    }
}

#[test]
fn array_literal_parses_elements() {
    let program = parse("[1, 2 * 2, 3 + 3]");
    match &program.statements[0] {
        Stmt::Expression {
            expression: Expr::ArrayLiteral { elements, .. },
            ..
        } => assert_eq!(elements.len(), 3),
        other => panic!("unexpected statement: {other:?}"),
    }
}

#[test]
fn hash_literal_parses_string_keys() {
    let program = parse("{\"one\": 1, \"two\": 2, \"three\": 3}");
    match &program.statements[0] {
        Stmt::Expression {
            expression: Expr::HashLiteral { pairs, .. },
            ..
        } => assert_eq!(pairs.len(), 3),
        other => panic!("unexpected statement: {other:?}"),
    }
}

#[test]
fn empty_hash_literal_parses() {
    let program = parse("{}");
    match &program.statements[0] {
        Stmt::Expression {
            expression: Expr::HashLiteral { pairs, .. },
            ..
        } => assert!(pairs.is_empty()),
        other => panic!("unexpected statement: {other:?}"),
    }
}

#[test]
fn let_statement_missing_identifier_reports_error() {
    let lexer = Lexer::new("let = 5;");
    let mut parser = Parser::new(lexer);
    parser.parse_program();
    assert!(
        parser
            .errors()
            .iter()
            .any(|e| e.contains("expected next token to be IDENT")),
        "errors: {:?}",
        parser.errors()
    );
}

#[test]
fn let_statement_missing_assign_reports_error() {
    let lexer = Lexer::new("let x 5;");
    let mut parser = Parser::new(lexer);
    parser.parse_program();
    assert!(
        parser
            .errors()
            .iter()
            .any(|e| e.contains("expected next token to be =")),
        "errors: {:?}",
        parser.errors()
    );
}

#[test]
fn missing_terminator_does_not_loop_forever() {
    let lexer = Lexer::new("let x = 5");
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();
    assert_eq!(program.statements.len(), 1);
}
