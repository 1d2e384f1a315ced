use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Option<Position>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Option<Position>) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnbalancedParentheses => "UnbalancedParentheses",
            ErrorImpl::NestingTooDeep => "NestingTooDeep",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnknownKeyword { .. } => "UnknownKeyword",
            ErrorImpl::MalformedDeclaration { .. } => "MalformedDeclaration",
            ErrorImpl::NotYetSupported { .. } => "NotYetSupported",
        }
    }

    /// The stage class of the error: lexing, formatting, or parsing.
    pub fn get_error_class(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "LexError",
            ErrorImpl::UnbalancedParentheses | ErrorImpl::NestingTooDeep => "FormatError",
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::UnknownKeyword { .. }
            | ErrorImpl::MalformedDeclaration { .. }
            | ErrorImpl::NotYetSupported { .. } => "SyntaxError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnbalancedParentheses => ErrorTip::Suggestion(String::from(
                "Unbalanced parentheses, did you miss a closing `)`?",
            )),
            ErrorImpl::NestingTooDeep => {
                ErrorTip::Suggestion(String::from("Expression nesting is too deep"))
            }
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, no expression form matches here",
                token
            )),
            ErrorImpl::UnknownKeyword { keyword } => ErrorTip::Suggestion(format!(
                "Keyword `{}` cannot start a statement",
                keyword
            )),
            ErrorImpl::MalformedDeclaration { keyword } => ErrorTip::Suggestion(format!(
                "Malformed `{}` declaration",
                keyword
            )),
            ErrorImpl::NotYetSupported { feature } => {
                ErrorTip::Suggestion(format!("{} is not yet supported", feature))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised token: {fragment:?}")]
    UnrecognisedToken { fragment: String },
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,
    #[error("nesting exceeds the supported depth")]
    NestingTooDeep,
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unknown keyword: {keyword:?}")]
    UnknownKeyword { keyword: String },
    #[error("malformed declaration: {keyword:?}")]
    MalformedDeclaration { keyword: String },
    #[error("{feature} is not yet supported")]
    NotYetSupported { feature: String },
}
