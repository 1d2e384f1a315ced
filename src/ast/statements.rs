use super::{
    expressions::Value,
    types::{Generic, TypeExpression},
};

/// A top-level statement: one of the keyword-led declarations, or a bare
/// value expression.
#[derive(Debug, Clone)]
pub enum Declaration {
    Function(FnDecl),
    Import(ImportDecl),
    Type(TypeDecl),
    Const(ConstDecl),
    Expression(Value),
}

#[derive(Debug, Clone)]
pub struct FnDecl {
    pub name: String,
    pub generic_params: Vec<Generic>,
    pub params: Vec<(String, Option<TypeExpression>)>,
    pub return_type: Option<TypeExpression>,
    pub body: Value,
}

/// Which symbols an import binds: everything the source exports, or an
/// explicit list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSymbols {
    All,
    Named(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct ImportDecl {
    pub source: String,
    pub symbols: ImportSymbols,
    pub alias: Option<String>,
}

/// Stub: the name is captured but the type expression is not parsed yet.
#[derive(Debug, Clone)]
pub struct TypeDecl {
    pub name: String,
    pub generic_params: Vec<Generic>,
    pub type_expr: Option<TypeExpression>,
}

#[derive(Debug, Clone)]
pub struct ConstDecl {
    pub name: String,
    pub value: Value,
}
