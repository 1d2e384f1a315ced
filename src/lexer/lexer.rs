use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::tokens::{Operator, Token, TokenKind, KEYWORDS};

/// One matching rule from the classification table.
#[derive(Clone)]
pub enum Matcher {
    Exact(&'static str),
    AnyOf(&'static [&'static str]),
    Pattern(Regex),
    Predicate(fn(&str) -> bool),
}

impl Matcher {
    fn accepts(&self, fragment: &str) -> bool {
        match self {
            Matcher::Exact(text) => fragment == *text,
            Matcher::AnyOf(options) => options.contains(&fragment),
            Matcher::Pattern(pattern) => pattern.is_match(fragment),
            Matcher::Predicate(predicate) => predicate(fragment),
        }
    }
}

fn is_comment(fragment: &str) -> bool {
    fragment.starts_with('#') && !fragment.contains('\n')
}

fn is_string(fragment: &str) -> bool {
    fragment.chars().count() >= 2
        && fragment.starts_with('"')
        && fragment.ends_with('"')
        && !fragment[1..fragment.len() - 1].contains('"')
}

fn is_operator(fragment: &str) -> bool {
    Operator::from_symbol(fragment).is_some()
}

lazy_static! {
    static ref MATCHERS: Vec<(TokenKind, Matcher)> = vec![
        (TokenKind::Identifier, Matcher::Pattern(Regex::new(r"^[a-zA-Z$_][a-zA-Z0-9$_]*$").unwrap())),
        (TokenKind::OpenBracket, Matcher::AnyOf(&["(", "[", "{", "<"])),
        (TokenKind::CloseBracket, Matcher::AnyOf(&[")", "]", "}", ">"])),
        (TokenKind::Keyword, Matcher::AnyOf(KEYWORDS)),
        (TokenKind::Operator, Matcher::Predicate(is_operator)),
        (TokenKind::Lambda, Matcher::Exact("=>")),
        (TokenKind::Comment, Matcher::Predicate(is_comment)),
        (TokenKind::Whitespace, Matcher::Pattern(Regex::new(r"^\s+$").unwrap())),
        (TokenKind::Dot, Matcher::Exact(".")),
        (TokenKind::Comma, Matcher::Exact(",")),
        (TokenKind::Colon, Matcher::Exact(":")),
        (TokenKind::PathSep, Matcher::Exact("::")),
        (TokenKind::Ellipsis, Matcher::Exact("...")),
        (TokenKind::String, Matcher::Predicate(is_string)),
        (TokenKind::Boolean, Matcher::AnyOf(&["true", "false"])),
        (TokenKind::Binary, Matcher::Pattern(Regex::new(r"^-?0b[01]+$").unwrap())),
        (TokenKind::Octal, Matcher::Pattern(Regex::new(r"^-?0o[0-7]+$").unwrap())),
        (TokenKind::Decimal, Matcher::Pattern(Regex::new(r"^-?(0d)?[0-9]+$").unwrap())),
        (TokenKind::Hexadecimal, Matcher::Pattern(Regex::new(r"^-?0x[0-9a-fA-F]+$").unwrap())),
        (TokenKind::Floating, Matcher::Pattern(Regex::new(r"^-?\d+\.\d+$").unwrap())),
        (TokenKind::Scientific, Matcher::Pattern(Regex::new(r"^-?\d+(\.\d+)?[eE]\d+$").unwrap())),
    ];
}

/// Classifies one fragment. Ties between kinds that accept the same text
/// resolve to the highest-priority kind (the `TokenKind` declaration
/// order).
fn match_kind(fragment: &str) -> Option<TokenKind> {
    MATCHERS
        .iter()
        .filter(|(_, matcher)| matcher.accepts(fragment))
        .map(|(kind, _)| *kind)
        .max()
}

pub fn tokenize(source: &str, resource: &str) -> Result<Vec<Token>, Error> {
    let chars: Vec<char> = source.chars().collect();
    let resource = Rc::new(String::from(resource));

    let mut tokens = vec![];
    let mut index = 0;

    while index < chars.len() {
        let mut fragment = String::new();
        let mut best: Option<(TokenKind, usize)> = None;

        // Extend the fragment across the whole remainder, remembering the
        // longest prefix any kind accepted. Intermediate prefixes may
        // match nothing at all ("0x" on the way to "0x2A", "=" on the way
        // to "=>").
        for (length, c) in chars[index..].iter().enumerate() {
            fragment.push(*c);

            if let Some(kind) = match_kind(&fragment) {
                best = Some((kind, length + 1));
            }
        }

        match best {
            Some((kind, length)) => {
                tokens.push(Token {
                    text: chars[index..index + length].iter().collect(),
                    kind,
                    position: Some(Position::from_offset(&chars, index, Rc::clone(&resource))),
                });
                index += length;
            }
            None => {
                let offending: String = chars[index..]
                    .iter()
                    .take_while(|c| !c.is_whitespace())
                    .collect();

                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken { fragment: offending },
                    Some(Position::from_offset(&chars, index, Rc::clone(&resource))),
                ));
            }
        }
    }

    Ok(tokens)
}
