use crate::core::syntax::{Expr, Literal};

/// Shape of a target call's first argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument<'a> {
    /// `Sprintf("hello")`
    DirectLiteral(&'a Literal),
    /// `Sprintf(greeting)`
    LocalReference(&'a str),
    /// `Sprintf(messages.Greeting)`
    ImportedReference { alias: &'a str, symbol: &'a str },
}

impl<'a> Argument<'a> {
    /// Classify an argument node. Other shapes (calls, operators, composite
    /// literals, chained selectors) return `None`.
    pub fn classify(expr: &'a Expr) -> Option<Self> {
        match expr {
            Expr::Literal(literal) => Some(Argument::DirectLiteral(literal)),
            Expr::Ident(name) => Some(Argument::LocalReference(name)),
            Expr::Selector { operand, field } => match &**operand {
                Expr::Ident(alias) => Some(Argument::ImportedReference {
                    alias,
                    symbol: field,
                }),
                _ => None,
            },
            Expr::Call(_) | Expr::Other(_) => None,
        }
    }
}
