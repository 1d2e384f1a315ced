use crate::lexer::tokens::{Operator, Token};

use super::types::{Generic, TypeExpression};

/// A value expression. The variant set is closed; the expression builder
/// ranks its candidates over exactly these shapes.
#[derive(Debug, Clone)]
pub enum Value {
    Literal(Token),
    Call(CallExpr),
    Operation(OperationExpr),
    Chain(ChainExpr),
    StaticChain(StaticChainExpr),
    Lambda(LambdaExpr),
    Map(MapExpr),
}

/// Key of one call argument: named (`f(x: 1)`) or positional, keyed by
/// its ordinal among all arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgKey {
    Named(String),
    Positional(usize),
}

/// Call Expression
/// A callee applied to a parenthesised argument list.
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub callee: Box<Value>,
    pub args: Vec<(ArgKey, Value)>,
}

/// Operation Expression
/// An alternating run of operands and operators, kept flat: operands
/// combine left-to-right regardless of the recorded operator precedence.
/// A leading operator with no left operand is a prefix use (`not x`).
#[derive(Debug, Clone)]
pub struct OperationExpr {
    pub operands: Vec<Value>,
    pub operators: Vec<Operator>,
}

/// Chain Expression
/// A member access chain (`a.b.c`); each segment is a full value.
#[derive(Debug, Clone)]
pub struct ChainExpr {
    pub segments: Vec<Value>,
}

/// Static Chain Expression
/// A namespaced path (`std::io`); segments are plain identifier tokens.
#[derive(Debug, Clone)]
pub struct StaticChainExpr {
    pub segments: Vec<Token>,
}

/// Lambda Expression
#[derive(Debug, Clone)]
pub struct LambdaExpr {
    pub params: Vec<(String, Option<TypeExpression>)>,
    pub generic_params: Vec<Generic>,
    pub return_type: Option<TypeExpression>,
    pub body: Box<Value>,
}

/// Map Literal Expression
/// Ordered key/value entries, optionally prefixed by a constructor path.
/// Keyless entries receive fabricated decimal keys counting their ordinal
/// among the keyless entries only.
#[derive(Debug, Clone)]
pub struct MapExpr {
    pub entries: Vec<(Value, Value)>,
    pub constructor: Option<StaticChainExpr>,
}
