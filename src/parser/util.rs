use crate::{
    formatter::formatter::TokenTree,
    lexer::tokens::{Token, TokenKind},
};

/// Returns the leaf token if `element` is a leaf of one of the given
/// kinds.
pub fn as_kind<'a>(element: &'a TokenTree, kinds: &[TokenKind]) -> Option<&'a Token> {
    element.token().filter(|token| kinds.contains(&token.kind))
}

pub fn is_kind(element: &TokenTree, kinds: &[TokenKind]) -> bool {
    as_kind(element, kinds).is_some()
}

/// Leaf check against both kind and exact text, for the bracket glyphs
/// that share a kind.
pub fn is_exact(element: &TokenTree, kind: TokenKind, text: &str) -> bool {
    element
        .token()
        .map(|token| token.kind == kind && token.text == text)
        .unwrap_or(false)
}

/// Splits a run of elements on a delimiter kind, ignoring delimiters
/// inside the flat bracket families (`[` `{` `<` and their closers —
/// parens are already nested and opaque here). With `keep`, the delimiter
/// leads the segment it opens instead of being dropped.
pub fn split(elements: &[TokenTree], delimiter: TokenKind, keep: bool) -> Vec<&[TokenTree]> {
    if elements.is_empty() {
        return vec![];
    }

    let mut depth: i32 = 0;
    let mut segments = vec![];
    let mut start = 0;

    for (index, element) in elements.iter().enumerate() {
        if let TokenTree::Leaf(token) = element {
            match token.kind {
                TokenKind::OpenBracket => depth += 1,
                TokenKind::CloseBracket => depth -= 1,
                _ => {}
            }

            if token.kind == delimiter && depth == 0 {
                segments.push(&elements[start..index]);
                start = if keep { index } else { index + 1 };
            }
        }
    }

    segments.push(&elements[start..]);
    segments
}

/// Best-effort offending token for diagnostics: descends into first
/// elements until a leaf is reached.
pub fn first_token(elements: &[TokenTree]) -> Option<&Token> {
    match elements.first()? {
        TokenTree::Leaf(token) => Some(token),
        TokenTree::Node(children) => first_token(children),
    }
}
