use std::collections::HashMap;

use crate::ast::statements::{Declaration, ImportSymbols};

/// What a registered symbol refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolInfo {
    Function { parameters: usize },
    Constant,
    Imported { source: String },
}

/// Placeholder until the code-generation stage defines real type layouts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeInfo;

/// The symbol and type tables threaded through translation.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    pub symbols: HashMap<String, SymbolInfo>,
    pub types: HashMap<String, TypeInfo>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }
}

/// Registers one declaration into the scope and returns the updated
/// scope. Expression statements carry no names and pass through.
pub fn translate(declaration: &Declaration, mut scope: Scope) -> Scope {
    match declaration {
        Declaration::Function(function) => {
            scope.symbols.insert(
                function.name.clone(),
                SymbolInfo::Function {
                    parameters: function.params.len(),
                },
            );
        }
        Declaration::Import(import) => {
            if let ImportSymbols::Named(symbols) = &import.symbols {
                for symbol in symbols {
                    scope.symbols.insert(
                        symbol.clone(),
                        SymbolInfo::Imported {
                            source: import.source.clone(),
                        },
                    );
                }
            }

            if let Some(alias) = &import.alias {
                scope.symbols.insert(
                    alias.clone(),
                    SymbolInfo::Imported {
                        source: import.source.clone(),
                    },
                );
            }
        }
        Declaration::Type(type_decl) => {
            scope.types.insert(type_decl.name.clone(), TypeInfo);
        }
        Declaration::Const(constant) => {
            scope
                .symbols
                .insert(constant.name.clone(), SymbolInfo::Constant);
        }
        Declaration::Expression(_) => {}
    }

    scope
}
