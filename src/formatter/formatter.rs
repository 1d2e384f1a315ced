use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

/// Upper bound on parenthesis nesting (and on expression recursion).
/// Inputs deeper than this fail deterministically instead of exhausting
/// the stack.
pub const MAX_NESTING_DEPTH: usize = 128;

/// One statement's tokens with `(...)` groupings resolved into nesting.
/// The structural paren tokens themselves are dropped once the nesting is
/// captured.
#[derive(Debug, Clone)]
pub enum TokenTree {
    Leaf(Token),
    Node(Vec<TokenTree>),
}

impl TokenTree {
    pub fn token(&self) -> Option<&Token> {
        match self {
            TokenTree::Leaf(token) => Some(token),
            TokenTree::Node(_) => None,
        }
    }

    pub fn elements(&self) -> Option<&[TokenTree]> {
        match self {
            TokenTree::Leaf(_) => None,
            TokenTree::Node(elements) => Some(elements),
        }
    }
}

/// Splits the token stream into physical lines. A whitespace token that
/// contains a newline opens a fresh line with itself as first element;
/// other whitespace is dropped; everything else appends to the current
/// line.
pub fn lines(tokens: Vec<Token>) -> Vec<Vec<Token>> {
    let mut lines: Vec<Vec<Token>> = vec![vec![]];

    for token in tokens {
        if token.kind == TokenKind::Whitespace {
            if token.text.contains('\n') {
                lines.push(vec![token]);
            }
        } else {
            lines.last_mut().unwrap().push(token);
        }
    }

    lines
}

/// Merges lines into statement groups and resolves parenthesis nesting.
///
/// A line led by a whitespace run ending in a newline starts a new group;
/// an indented continuation (newline followed by spaces) extends the
/// current one. Whitespace and comment tokens never reach the groups.
pub fn group(tokens: Vec<Token>) -> Result<Vec<TokenTree>, Error> {
    let mut groups: Vec<Vec<Token>> = vec![vec![]];

    for line in lines(tokens) {
        if line.is_empty() {
            continue;
        }

        let breaks = line[0].kind == TokenKind::Whitespace && line[0].text.ends_with('\n');
        if breaks {
            groups.push(vec![]);
        }

        groups.last_mut().unwrap().extend(
            line.into_iter()
                .filter(|token| token.kind != TokenKind::Whitespace && token.kind != TokenKind::Comment),
        );
    }

    groups
        .into_iter()
        .filter(|group| !group.is_empty())
        .map(|group| parenthesise(group, 0))
        .collect()
}

/// Resolves `(`/`)` nesting in one statement group. Tokens at depth zero
/// append directly; a parenthesised run becomes a single nested node with
/// its enclosing parens removed. Unbalanced parens fail the whole group.
pub fn parenthesise(tokens: Vec<Token>, depth: usize) -> Result<TokenTree, Error> {
    if depth > MAX_NESTING_DEPTH {
        return Err(Error::new(ErrorImpl::NestingTooDeep, None));
    }

    let mut parentheses: i32 = 0;
    let mut out: Vec<TokenTree> = vec![];
    let mut nested: Vec<Token> = vec![];

    for token in tokens {
        let opens = token.kind == TokenKind::OpenBracket && token.text == "(";
        let closes = token.kind == TokenKind::CloseBracket && token.text == ")";
        let position = token.position.clone();

        if opens {
            parentheses += 1;
        }

        if parentheses == 0 {
            out.push(TokenTree::Leaf(token));
        } else {
            nested.push(token);
        }

        if closes {
            parentheses -= 1;

            if parentheses < 0 {
                return Err(Error::new(ErrorImpl::UnbalancedParentheses, position));
            }

            if parentheses == 0 {
                // nested currently holds the full run including its own
                // open and close parens.
                let inner: Vec<Token> = nested.drain(..).collect();
                out.push(parenthesise(inner[1..inner.len() - 1].to_vec(), depth + 1)?);
            }
        }
    }

    if parentheses != 0 {
        let position = nested.first().and_then(|token| token.position.clone());
        return Err(Error::new(ErrorImpl::UnbalancedParentheses, position));
    }

    Ok(TokenTree::Node(out))
}
