use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CalculationError>;

/// Reasons an expression could not be turned into a number.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    /// Only produced by strict conversion; the lenient path logs and carries on instead.
    #[error("mismatched parentheses, converted only as far as {postfix:?}")]
    UnbalancedParentheses { postfix: Vec<Token> },

    #[error("operator '{operator}' is missing an operand")]
    MissingOperand { operator: BinaryOperator },

    #[error("unrecognized symbol '{symbol}'")]
    UnrecognizedSymbol { symbol: char },

    #[error("there should not be any parentheses in a postfix expression")]
    UnexpectedParenthesis,

    #[error("expected exactly one value after evaluation, found {remaining}")]
    InvalidStackSize { remaining: usize },

    #[error("the result is not a number")]
    NotANumber,
}
