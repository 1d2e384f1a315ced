//! Type expression representations.
//!
//! The structure is declared so declarations can carry type annotations,
//! but construction is not implemented yet: `parse_type_expression` in the
//! parser is a stub, so every annotation currently resolves to `None`.

/// A type annotation as it will eventually be parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpression {
    Named {
        name: String,
        args: Vec<TypeExpression>,
    },
    Fn {
        generic_params: Vec<Generic>,
        params: Vec<(String, Option<TypeExpression>)>,
        return_type: Box<TypeExpression>,
    },
    Operation {
        operands: Vec<TypeExpression>,
        operator: crate::lexer::tokens::Operator,
    },
    Map {
        specified: Vec<(String, TypeExpression)>,
        fallback: Box<(TypeExpression, TypeExpression)>,
    },
}

/// A generic parameter with an optional constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct Generic {
    pub name: String,
    pub constraint: Option<TypeExpression>,
}
