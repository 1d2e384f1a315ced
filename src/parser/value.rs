use crate::{
    ast::expressions::{
        ArgKey, CallExpr, ChainExpr, LambdaExpr, MapExpr, OperationExpr, StaticChainExpr, Value,
    },
    errors::errors::{Error, ErrorImpl},
    formatter::formatter::{TokenTree, MAX_NESTING_DEPTH},
    lexer::tokens::{Operator, Token, TokenKind},
};

use super::{
    stmt::parse_param_list,
    util::{as_kind, first_token, is_exact, is_kind, split},
};

/// Candidate expression shapes, declared in ascending priority: when
/// several candidates accept the same tree, the greatest kind wins.
/// `Assertion` is reserved for type assertions and never constructed yet.
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
pub enum ConstructKind {
    Assertion,
    Chain,
    StaticChain,
    Call,
    Operation,
    Map,
    Lambda,
}

type Candidate = fn(&[TokenTree], usize) -> Option<Value>;

/// Every candidate runs against every tree; acceptance is decided by the
/// builders themselves, ranking by `ConstructKind`.
const CANDIDATES: &[(ConstructKind, Candidate)] = &[
    (ConstructKind::Chain, build_chain),
    (ConstructKind::StaticChain, build_static_chain),
    (ConstructKind::Call, build_call),
    (ConstructKind::Operation, build_operation),
    (ConstructKind::Map, build_map),
    (ConstructKind::Lambda, build_lambda),
];

/// Builds a value expression from one token tree.
pub fn build_value(elements: &[TokenTree]) -> Result<Value, Error> {
    build_value_at(elements, 0)
}

fn build_value_at(elements: &[TokenTree], depth: usize) -> Result<Value, Error> {
    if depth > MAX_NESTING_DEPTH {
        return Err(Error::new(ErrorImpl::NestingTooDeep, None));
    }

    // Base cases: a bare literal, or a single parenthesised sub-tree.
    if let [element] = elements {
        if let Some(token) = element.token() {
            if token.kind.is_literal() {
                return Ok(Value::Literal(token.clone()));
            }
        }

        if let Some(children) = element.elements() {
            return build_value_at(children, depth + 1);
        }
    }

    // Parens are stripped during formatting; if a stray pair survives,
    // strip and recurse.
    if elements.len() >= 2
        && is_exact(&elements[0], TokenKind::OpenBracket, "(")
        && is_exact(&elements[elements.len() - 1], TokenKind::CloseBracket, ")")
    {
        return build_value_at(&elements[1..elements.len() - 1], depth + 1);
    }

    let mut best: Option<(ConstructKind, Value)> = None;

    for (kind, candidate) in CANDIDATES {
        if let Some(value) = candidate(elements, depth) {
            if best.as_ref().map_or(true, |(ranked, _)| kind > ranked) {
                best = Some((*kind, value));
            }
        }
    }

    match best {
        Some((_, value)) => Ok(value),
        None => {
            let offending = first_token(elements);

            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: offending
                        .map(|token| token.text.clone())
                        .unwrap_or_else(|| String::from("<unknown>")),
                },
                offending.and_then(|token| token.position.clone()),
            ))
        }
    }
}

/// `callee(args)` — the tree must end in a nested argument list, and the
/// callee must itself build; a callee failure rejects the candidate
/// rather than propagating.
fn build_call(elements: &[TokenTree], depth: usize) -> Option<Value> {
    let arg_list = elements.last()?.elements()?;

    let mut args = vec![];
    for (index, segment) in split(arg_list, TokenKind::Comma, false).iter().enumerate() {
        let named = segment.len() >= 3
            && is_kind(&segment[0], &[TokenKind::Identifier])
            && is_kind(&segment[1], &[TokenKind::Colon]);

        if named {
            let name = segment[0].token()?;
            args.push((
                ArgKey::Named(name.text.clone()),
                build_value_at(&segment[2..], depth + 1).ok()?,
            ));
        } else {
            args.push((
                ArgKey::Positional(index),
                build_value_at(segment, depth + 1).ok()?,
            ));
        }
    }

    let callee = build_value_at(&elements[..elements.len() - 1], depth + 1).ok()?;

    Some(Value::Call(CallExpr {
        callee: Box::new(callee),
        args,
    }))
}

/// A flat run of operands joined by top-level operators. Rejects when the
/// only operator tokens sit inside flat brackets (no segment boundary).
fn build_operation(elements: &[TokenTree], depth: usize) -> Option<Value> {
    if !elements.iter().any(|element| is_kind(element, &[TokenKind::Operator])) {
        return None;
    }

    let segments: Vec<&[TokenTree]> = split(elements, TokenKind::Operator, true)
        .into_iter()
        .filter(|segment| !segment.is_empty())
        .collect();

    let boundary = segments.iter().any(|segment| {
        is_kind(&segment[0], &[TokenKind::Operator])
            || is_kind(&segment[segment.len() - 1], &[TokenKind::Operator])
    });
    if !boundary {
        return None;
    }

    let mut operands = vec![];
    let mut operators = vec![];

    for segment in segments {
        if let Some(token) = as_kind(&segment[0], &[TokenKind::Operator]) {
            operators.push(Operator::from_symbol(&token.text)?);
            operands.push(build_value_at(&segment[1..], depth + 1).ok()?);
        } else {
            operands.push(build_value_at(segment, depth + 1).ok()?);
        }
    }

    Some(Value::Operation(OperationExpr {
        operands,
        operators,
    }))
}

/// `a.b.c` — member access on top-level dots; every segment must be
/// non-empty.
fn build_chain(elements: &[TokenTree], depth: usize) -> Option<Value> {
    let segments = split(elements, TokenKind::Dot, false);
    if segments.len() <= 1 {
        return None;
    }

    if segments.iter().any(|segment| segment.is_empty()) {
        return None;
    }

    let mut values = vec![];
    for segment in segments {
        values.push(build_value_at(segment, depth + 1).ok()?);
    }

    Some(Value::Chain(ChainExpr { segments: values }))
}

/// `a::b::c` — a pure path: identifiers and separators only, one name per
/// segment.
fn build_static_chain(elements: &[TokenTree], _depth: usize) -> Option<Value> {
    if !elements
        .iter()
        .all(|element| is_kind(element, &[TokenKind::Identifier, TokenKind::PathSep]))
    {
        return None;
    }

    let segments = split(elements, TokenKind::PathSep, false);
    if segments.len() <= 1 {
        return None;
    }

    Some(Value::StaticChain(static_chain_segments(segments)?))
}

fn static_chain_segments(segments: Vec<&[TokenTree]>) -> Option<StaticChainExpr> {
    let mut names = vec![];

    for segment in segments {
        match segment {
            [element] => names.push(as_kind(element, &[TokenKind::Identifier])?.clone()),
            _ => return None,
        }
    }

    Some(StaticChainExpr { segments: names })
}

/// `params => body` — splits at the first top-level arrow so nested
/// lambdas fold into the body. The parameter part is empty, one bare
/// identifier, or one parenthesised parameter list.
fn build_lambda(elements: &[TokenTree], depth: usize) -> Option<Value> {
    let arrow = split(elements, TokenKind::Lambda, false);
    if arrow.len() <= 1 {
        return None;
    }

    let param_part = arrow[0];
    let body_part = &elements[param_part.len() + 1..];

    let params = match param_part {
        [] => vec![],
        [element] => {
            if let Some(name) = as_kind(element, &[TokenKind::Identifier]) {
                vec![(name.text.clone(), None)]
            } else {
                let mut params = vec![];
                for segment in split(element.elements()?, TokenKind::Comma, false) {
                    params.push(parse_param_list(segment)?);
                }
                params
            }
        }
        _ => return None,
    };

    Some(Value::Lambda(LambdaExpr {
        params,
        generic_params: vec![],
        return_type: None,
        body: Box::new(build_value_at(body_part, depth + 1).ok()?),
    }))
}

/// `Constructor { k: v, ... }` or `{ k: v, ... }` — entries split on
/// top-level commas, each on a top-level colon; keyless entries get
/// fabricated decimal keys counting only the keyless entries.
fn build_map(elements: &[TokenTree], depth: usize) -> Option<Value> {
    let index = elements
        .iter()
        .position(|element| is_exact(element, TokenKind::OpenBracket, "{"))?;

    if !is_exact(elements.last()?, TokenKind::CloseBracket, "}") {
        return None;
    }

    let constructor = if index > 0 {
        let prefix = &elements[..index];
        if !prefix
            .iter()
            .all(|element| is_kind(element, &[TokenKind::Identifier, TokenKind::PathSep]))
        {
            return None;
        }

        Some(static_chain_segments(split(prefix, TokenKind::PathSep, false))?)
    } else {
        None
    };

    let inner = &elements[index + 1..elements.len() - 1];

    let mut entries = vec![];
    let mut used = 0;

    for segment in split(inner, TokenKind::Comma, false) {
        if segment.is_empty() {
            continue;
        }

        let pieces = split(segment, TokenKind::Colon, false);
        match pieces.as_slice() {
            [key, value] => {
                entries.push((
                    build_value_at(key, depth + 1).ok()?,
                    build_value_at(value, depth + 1).ok()?,
                ));
            }
            [keyless] => {
                let key = Token::synthetic(used.to_string(), TokenKind::Decimal);
                used += 1;
                entries.push((
                    Value::Literal(key),
                    build_value_at(keyless, depth + 1).ok()?,
                ));
            }
            _ => return None,
        }
    }

    Some(Value::Map(MapExpr {
        entries,
        constructor,
    }))
}
