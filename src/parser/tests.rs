//! Unit tests for the parser module.
//!
//! Exercises statement dispatch, the declaration builders, and the ranked
//! candidate matching of the expression builder, asserting exact node
//! shapes for the trickier disambiguation cases.

use crate::{
    ast::{
        expressions::{ArgKey, Value},
        statements::{Declaration, ImportSymbols},
    },
    build_ast,
    lexer::tokens::{Operator, TokenKind},
};

fn parse_one(source: &str) -> Declaration {
    let mut declarations = build_ast(source, "test.ql").unwrap();
    assert_eq!(declarations.len(), 1);
    declarations.remove(0)
}

fn parse_value(source: &str) -> Value {
    match parse_one(source) {
        Declaration::Expression(value) => value,
        other => panic!("expected expression, got {:?}", other),
    }
}

fn literal_text(value: &Value) -> &str {
    match value {
        Value::Literal(token) => &token.text,
        other => panic!("expected literal, got {:?}", other),
    }
}

// Literal base cases

#[test]
fn test_literal_round_trip() {
    for source in ["42", "0x2A", "true", "\"hi\""] {
        let value = parse_value(source);
        assert_eq!(literal_text(&value), source);
    }
}

#[test]
fn test_parenthesised_literal_unwraps() {
    let value = parse_value("(42)");
    assert_eq!(literal_text(&value), "42");
}

// Calls

#[test]
fn test_call_with_chained_callee() {
    // Call must outrank Chain: the callee is solved by recursion.
    let value = parse_value("a.b(c: 1)");

    let call = match value {
        Value::Call(call) => call,
        other => panic!("expected call, got {:?}", other),
    };

    match call.callee.as_ref() {
        Value::Chain(chain) => {
            assert_eq!(chain.segments.len(), 2);
            assert_eq!(literal_text(&chain.segments[0]), "a");
            assert_eq!(literal_text(&chain.segments[1]), "b");
        }
        other => panic!("expected chain callee, got {:?}", other),
    }

    assert_eq!(call.args.len(), 1);
    assert_eq!(call.args[0].0, ArgKey::Named(String::from("c")));
    assert_eq!(literal_text(&call.args[0].1), "1");
}

#[test]
fn test_call_positional_keys_count_all_arguments() {
    let value = parse_value("f(1, x: 2, 3)");

    let call = match value {
        Value::Call(call) => call,
        other => panic!("expected call, got {:?}", other),
    };

    assert_eq!(call.args.len(), 3);
    assert_eq!(call.args[0].0, ArgKey::Positional(0));
    assert_eq!(call.args[1].0, ArgKey::Named(String::from("x")));
    assert_eq!(call.args[2].0, ArgKey::Positional(2));
}

#[test]
fn test_call_with_no_arguments() {
    let value = parse_value("f()");

    match value {
        Value::Call(call) => {
            assert_eq!(literal_text(&call.callee), "f");
            assert!(call.args.is_empty());
        }
        other => panic!("expected call, got {:?}", other),
    }
}

#[test]
fn test_call_rejects_when_callee_fails() {
    // "1 2" is no expression, so Call cannot match and nothing else can.
    let error = build_ast("1 2 (x)", "test.ql").unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_error_class(), "SyntaxError");
}

// Operations

#[test]
fn test_operation_is_flat_left_to_right() {
    let value = parse_value("1 + 2 * 3");

    match value {
        Value::Operation(operation) => {
            assert_eq!(operation.operators, vec![Operator::Add, Operator::Multiply]);
            assert_eq!(operation.operands.len(), 3);
            assert_eq!(literal_text(&operation.operands[2]), "3");
        }
        other => panic!("expected operation, got {:?}", other),
    }
}

#[test]
fn test_operation_prefix_operator() {
    let value = parse_value("not true");

    match value {
        Value::Operation(operation) => {
            assert_eq!(operation.operators, vec![Operator::Not]);
            assert_eq!(operation.operands.len(), 1);
        }
        other => panic!("expected operation, got {:?}", other),
    }
}

#[test]
fn test_operation_groups_through_parens() {
    let value = parse_value("(a + b) * c");

    match value {
        Value::Operation(operation) => {
            assert_eq!(operation.operators, vec![Operator::Multiply]);
            assert!(matches!(operation.operands[0], Value::Operation(_)));
            assert_eq!(literal_text(&operation.operands[1]), "c");
        }
        other => panic!("expected operation, got {:?}", other),
    }
}

#[test]
fn test_operation_rejects_operator_inside_flat_brackets() {
    // The only operator is interior to a bracketed operand; no candidate
    // accepts the tree.
    let error = build_ast("[1 + 2]", "test.ql").unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

// Chains

#[test]
fn test_chain_member_access() {
    let value = parse_value("a.b.c");

    match value {
        Value::Chain(chain) => {
            assert_eq!(chain.segments.len(), 3);
            assert_eq!(literal_text(&chain.segments[2]), "c");
        }
        other => panic!("expected chain, got {:?}", other),
    }
}

#[test]
fn test_chain_rejects_empty_segment() {
    let error = build_ast("a..b", "test.ql").unwrap_err();

    assert_eq!(error.get_error_class(), "SyntaxError");
}

#[test]
fn test_static_chain_path() {
    let value = parse_value("std::io::file");

    match value {
        Value::StaticChain(chain) => {
            let names: Vec<&str> = chain.segments.iter().map(|token| token.text.as_str()).collect();
            assert_eq!(names, vec!["std", "io", "file"]);
        }
        other => panic!("expected static chain, got {:?}", other),
    }
}

#[test]
fn test_chain_of_static_chain() {
    // The dot splits first; the left segment is a pure path.
    let value = parse_value("std::io.read");

    match value {
        Value::Chain(chain) => {
            assert_eq!(chain.segments.len(), 2);
            assert!(matches!(chain.segments[0], Value::StaticChain(_)));
        }
        other => panic!("expected chain, got {:?}", other),
    }
}

// Lambdas

#[test]
fn test_lambda_single_untyped_parameter() {
    let value = parse_value("x => x");

    match value {
        Value::Lambda(lambda) => {
            assert_eq!(lambda.params, vec![(String::from("x"), None)]);
            assert_eq!(literal_text(&lambda.body), "x");
        }
        other => panic!("expected lambda, got {:?}", other),
    }
}

#[test]
fn test_lambda_typed_parameter_list() {
    let value = parse_value("(x: Int, y: Int) => x");

    match value {
        Value::Lambda(lambda) => {
            assert_eq!(lambda.params.len(), 2);
            assert_eq!(lambda.params[0].0, "x");
            assert_eq!(lambda.params[1].0, "y");
        }
        other => panic!("expected lambda, got {:?}", other),
    }
}

#[test]
fn test_lambda_without_parameters() {
    let value = parse_value("=> 1");

    match value {
        Value::Lambda(lambda) => {
            assert!(lambda.params.is_empty());
            assert_eq!(literal_text(&lambda.body), "1");
        }
        other => panic!("expected lambda, got {:?}", other),
    }
}

#[test]
fn test_lambda_nests_on_first_arrow() {
    let value = parse_value("x => y => x");

    match value {
        Value::Lambda(outer) => {
            assert_eq!(outer.params[0].0, "x");
            match outer.body.as_ref() {
                Value::Lambda(inner) => {
                    assert_eq!(inner.params[0].0, "y");
                    assert_eq!(literal_text(&inner.body), "x");
                }
                other => panic!("expected nested lambda, got {:?}", other),
            }
        }
        other => panic!("expected lambda, got {:?}", other),
    }
}

// Map literals

#[test]
fn test_map_literal_implicit_keys() {
    let value = parse_value("{a: 1, 2}");

    let map = match value {
        Value::Map(map) => map,
        other => panic!("expected map, got {:?}", other),
    };

    assert!(map.constructor.is_none());
    assert_eq!(map.entries.len(), 2);

    assert_eq!(literal_text(&map.entries[0].0), "a");
    assert_eq!(literal_text(&map.entries[0].1), "1");

    // The keyless entry gets a fabricated decimal key holding its ordinal
    // among the keyless entries.
    match &map.entries[1].0 {
        Value::Literal(token) => {
            assert_eq!(token.text, "0");
            assert_eq!(token.kind, TokenKind::Decimal);
            assert!(token.position.is_none());
        }
        other => panic!("expected literal key, got {:?}", other),
    }
    assert_eq!(literal_text(&map.entries[1].1), "2");
}

#[test]
fn test_map_literal_with_constructor() {
    let value = parse_value("Point {x: 1, y: 2}");

    let map = match value {
        Value::Map(map) => map,
        other => panic!("expected map, got {:?}", other),
    };

    let constructor = map.constructor.unwrap();
    assert_eq!(constructor.segments.len(), 1);
    assert_eq!(constructor.segments[0].text, "Point");
    assert_eq!(map.entries.len(), 2);
}

#[test]
fn test_map_literal_with_path_constructor() {
    let value = parse_value("geo::Point {x: 1}");

    let map = match value {
        Value::Map(map) => map,
        other => panic!("expected map, got {:?}", other),
    };

    let constructor = map.constructor.unwrap();
    let names: Vec<&str> = constructor
        .segments
        .iter()
        .map(|token| token.text.as_str())
        .collect();
    assert_eq!(names, vec!["geo", "Point"]);
}

#[test]
fn test_map_literal_keyless_ordinals_skip_keyed_entries() {
    let value = parse_value("{1, a: 2, 3}");

    let map = match value {
        Value::Map(map) => map,
        other => panic!("expected map, got {:?}", other),
    };

    assert_eq!(literal_text(&map.entries[0].0), "0");
    assert_eq!(literal_text(&map.entries[1].0), "a");
    assert_eq!(literal_text(&map.entries[2].0), "1");
}

#[test]
fn test_lambda_outranks_map() {
    // Both trigger tokens appear; the arrow wins the ranking.
    let value = parse_value("x => {a: 1}");

    match value {
        Value::Lambda(lambda) => assert!(matches!(lambda.body.as_ref(), Value::Map(_))),
        other => panic!("expected lambda, got {:?}", other),
    }
}

// Declarations

#[test]
fn test_fn_declaration() {
    let declaration = parse_one("fn add(a, b) a + b");

    match declaration {
        Declaration::Function(function) => {
            assert_eq!(function.name, "add");
            assert_eq!(function.params.len(), 2);
            assert_eq!(function.params[0], (String::from("a"), None));
            assert!(function.generic_params.is_empty());
            assert!(function.return_type.is_none());
            assert!(matches!(function.body, Value::Operation(_)));
        }
        other => panic!("expected function, got {:?}", other),
    }
}

#[test]
fn test_fn_declaration_typed_parameters() {
    let declaration = parse_one("fn add(a: Int, b: Int) a");

    match declaration {
        Declaration::Function(function) => {
            assert_eq!(function.params.len(), 2);
            assert_eq!(function.params[0].0, "a");
            assert_eq!(function.params[1].0, "b");
        }
        other => panic!("expected function, got {:?}", other),
    }
}

#[test]
fn test_fn_declaration_no_parameters() {
    let declaration = parse_one("fn five() 5");

    match declaration {
        Declaration::Function(function) => assert!(function.params.is_empty()),
        other => panic!("expected function, got {:?}", other),
    }
}

#[test]
fn test_fn_rejects_malformed_parameter() {
    let error = build_ast("fn f(1) x", "test.ql").unwrap_err();

    assert_eq!(error.get_error_name(), "MalformedDeclaration");
}

#[test]
fn test_fn_rejects_missing_parameter_list() {
    let error = build_ast("fn f x", "test.ql").unwrap_err();

    assert_eq!(error.get_error_name(), "MalformedDeclaration");
}

#[test]
fn test_import_all_symbols() {
    let declaration = parse_one("import \"math\"");

    match declaration {
        Declaration::Import(import) => {
            assert_eq!(import.source, "math");
            assert_eq!(import.symbols, ImportSymbols::All);
            assert!(import.alias.is_none());
        }
        other => panic!("expected import, got {:?}", other),
    }
}

#[test]
fn test_import_named_symbols() {
    let declaration = parse_one("import \"math\" x, y");

    match declaration {
        Declaration::Import(import) => {
            assert_eq!(
                import.symbols,
                ImportSymbols::Named(vec![String::from("x"), String::from("y")])
            );
            assert!(import.alias.is_none());
        }
        other => panic!("expected import, got {:?}", other),
    }
}

#[test]
fn test_import_with_alias() {
    let declaration = parse_one("import \"math\" x => m");

    match declaration {
        Declaration::Import(import) => {
            assert_eq!(import.symbols, ImportSymbols::Named(vec![String::from("x")]));
            assert_eq!(import.alias, Some(String::from("m")));
        }
        other => panic!("expected import, got {:?}", other),
    }
}

#[test]
fn test_import_rejects_non_identifier_symbol() {
    let error = build_ast("import \"m\" 5", "test.ql").unwrap_err();

    assert_eq!(error.get_error_name(), "MalformedDeclaration");
}

#[test]
fn test_type_declaration_stub() {
    let declaration = parse_one("type Meters Int");

    match declaration {
        Declaration::Type(type_decl) => {
            assert_eq!(type_decl.name, "Meters");
            assert!(type_decl.type_expr.is_none());
        }
        other => panic!("expected type declaration, got {:?}", other),
    }
}

#[test]
fn test_const_declaration_stub() {
    let declaration = parse_one("const tau 6");

    match declaration {
        Declaration::Const(constant) => {
            assert_eq!(constant.name, "tau");
            assert_eq!(literal_text(&constant.value), "6");
        }
        other => panic!("expected const declaration, got {:?}", other),
    }
}

#[test]
fn test_unknown_keyword_fails_naming_it() {
    let error = build_ast("return 5", "test.ql").unwrap_err();

    assert_eq!(error.get_error_name(), "UnknownKeyword");
    assert_eq!(error.get_error_class(), "SyntaxError");
}

#[test]
fn test_empty_parens_fail() {
    let error = build_ast("()", "test.ql").unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedToken");
}
