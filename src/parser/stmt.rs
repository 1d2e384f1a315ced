use crate::{
    ast::{
        statements::{ConstDecl, Declaration, FnDecl, ImportDecl, ImportSymbols, TypeDecl},
        types::TypeExpression,
    },
    errors::errors::{Error, ErrorImpl},
    formatter::formatter::TokenTree,
    lexer::tokens::TokenKind,
};

use super::{
    util::{as_kind, first_token, is_kind, split},
    value::build_value,
};

/// Parses one statement group. A leading keyword selects a declaration
/// builder; everything else is a bare value expression.
pub fn parse_statement(tree: &TokenTree) -> Result<Declaration, Error> {
    let elements = match tree {
        TokenTree::Node(elements) => elements.as_slice(),
        TokenTree::Leaf(_) => std::slice::from_ref(tree),
    };

    if let Some(keyword) = elements.first().and_then(|first| as_kind(first, &[TokenKind::Keyword])) {
        return match keyword.text.as_str() {
            "fn" => build_fn(elements),
            "import" => build_import(elements),
            "type" => build_type(elements),
            "const" => build_const(elements),
            _ => Err(Error::new(
                ErrorImpl::UnknownKeyword {
                    keyword: keyword.text.clone(),
                },
                keyword.position.clone(),
            )),
        };
    }

    Ok(Declaration::Expression(build_value(elements)?))
}

fn malformed(elements: &[TokenTree], keyword: &str) -> Error {
    Error::new(
        ErrorImpl::MalformedDeclaration {
            keyword: String::from(keyword),
        },
        first_token(elements).and_then(|token| token.position.clone()),
    )
}

/// `fn name(params) body...`
fn build_fn(elements: &[TokenTree]) -> Result<Declaration, Error> {
    let name = elements
        .get(1)
        .and_then(|element| as_kind(element, &[TokenKind::Identifier]))
        .ok_or_else(|| malformed(elements, "fn"))?;

    let param_list = elements
        .get(2)
        .and_then(|element| element.elements())
        .ok_or_else(|| malformed(elements, "fn"))?;

    let mut params = vec![];
    for segment in split(param_list, TokenKind::Comma, false) {
        params.push(parse_param_list(segment).ok_or_else(|| malformed(elements, "fn"))?);
    }

    Ok(Declaration::Function(FnDecl {
        name: name.text.clone(),
        generic_params: vec![],
        params,
        return_type: None,
        body: build_value(&elements[3..])?,
    }))
}

/// One parameter segment: `name` alone, or `name : type`. Returns `None`
/// for anything not led by an identifier.
pub fn parse_param_list(segment: &[TokenTree]) -> Option<(String, Option<TypeExpression>)> {
    let name = as_kind(segment.first()?, &[TokenKind::Identifier])?;

    if segment.len() == 3
        && is_kind(&segment[1], &[TokenKind::Colon])
        && is_kind(&segment[2], &[TokenKind::Identifier])
    {
        return Some((name.text.clone(), parse_type_expression(&segment[2..])));
    }

    Some((name.text.clone(), None))
}

/// `import "source"`, `import "source" a, b`, `import "source" a => alias`
fn build_import(elements: &[TokenTree]) -> Result<Declaration, Error> {
    let source = elements
        .get(1)
        .and_then(|element| as_kind(element, &[TokenKind::String]))
        .ok_or_else(|| malformed(elements, "import"))?;

    // The stored source drops the enclosing quotes of the literal.
    let source = source.text[1..source.text.len() - 1].to_string();

    let aliased = elements.len() >= 4
        && is_kind(&elements[elements.len() - 2], &[TokenKind::Lambda])
        && is_kind(&elements[elements.len() - 1], &[TokenKind::Identifier]);

    let alias = if aliased {
        elements[elements.len() - 1]
            .token()
            .map(|token| token.text.clone())
    } else {
        None
    };

    if elements.len() <= 2 {
        return Ok(Declaration::Import(ImportDecl {
            source,
            symbols: ImportSymbols::All,
            alias,
        }));
    }

    let accessors = &elements[2..elements.len() - if aliased { 2 } else { 0 }];

    let mut symbols = vec![];
    for segment in split(accessors, TokenKind::Comma, false) {
        match segment {
            [element] => {
                let symbol = as_kind(element, &[TokenKind::Identifier])
                    .ok_or_else(|| malformed(elements, "import"))?;
                symbols.push(symbol.text.clone());
            }
            _ => return Err(malformed(elements, "import")),
        }
    }

    Ok(Declaration::Import(ImportDecl {
        source,
        symbols: ImportSymbols::Named(symbols),
        alias,
    }))
}

/// `type name ...` — stub: the trailing type expression is not parsed yet.
fn build_type(elements: &[TokenTree]) -> Result<Declaration, Error> {
    let name = elements
        .get(1)
        .and_then(|element| as_kind(element, &[TokenKind::Identifier]))
        .ok_or_else(|| malformed(elements, "type"))?;

    Ok(Declaration::Type(TypeDecl {
        name: name.text.clone(),
        generic_params: vec![],
        type_expr: parse_type_expression(&elements[2..]),
    }))
}

/// `const name value...` — stub shape; the value still parses fully.
fn build_const(elements: &[TokenTree]) -> Result<Declaration, Error> {
    let name = elements
        .get(1)
        .and_then(|element| as_kind(element, &[TokenKind::Identifier]))
        .ok_or_else(|| malformed(elements, "const"))?;

    if elements.len() <= 2 {
        return Err(malformed(elements, "const"));
    }

    Ok(Declaration::Const(ConstDecl {
        name: name.text.clone(),
        value: build_value(&elements[2..])?,
    }))
}

/// Type expression parsing is not yet supported; annotations are accepted
/// and discarded.
pub fn parse_type_expression(_elements: &[TokenTree]) -> Option<TypeExpression> {
    // TODO: parse Named/Fn/Operation/Map type expressions (ast::types)
    None
}
