pub mod error;
pub mod evaluator;
pub mod extractor;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod token;

use crate::interpreter::error::Result;
use crate::interpreter::evaluator::calculate_postfix;
use crate::interpreter::parser::{convert_infix_to_postfix, convert_infix_to_postfix_strict};
use crate::interpreter::token::Token;
use log::debug;
use string_builder::Builder;

/// Calculates the value of the given arithmetic expression.
///
/// Mismatched parentheses are tolerated: the expression is evaluated as far as it
/// could be converted, and a warning is logged.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::calculate;
/// # use infix_calculator::interpreter::error::Result;
///
/// # fn main() -> Result<()> {
/// assert_eq!(calculate("2 + 3 * 4")?, 14.0);
/// assert_eq!(calculate("1,5 + 2,5")?, 4.0);
/// # Ok(()) }
/// ```
pub fn calculate(expression: &str) -> Result<f64> {
    let postfix_tokens = convert_infix_to_postfix(expression);
    let value = calculate_postfix(&postfix_tokens)?;
    debug!("{} = {}", expression, value);
    Ok(value)
}

/// Like [`calculate`], but mismatched parentheses are an error.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::{calculate, calculate_strict};
///
/// assert_eq!(calculate("(2 + 3").unwrap(), 5.0);
/// assert!(calculate_strict("(2 + 3").is_err());
/// ```
pub fn calculate_strict(expression: &str) -> Result<f64> {
    let postfix_tokens = convert_infix_to_postfix_strict(expression)?;
    let value = calculate_postfix(&postfix_tokens)?;
    debug!("{} = {}", expression, value);
    Ok(value)
}

/// Prints the given tokens separated by single spaces.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::tokens_to_string;
/// use infix_calculator::interpreter::operator::BinaryOperator;
/// use infix_calculator::interpreter::token::Token;
///
/// let tokens = vec![
///     Token::Literal(2.0),
///     Token::Literal(0.5),
///     BinaryOperator::Exponentiate.token(),
/// ];
/// assert_eq!(tokens_to_string(&tokens), "2 0.5 ^");
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> String {
    let mut builder = Builder::new(tokens.len() * 2);

    for (index, token) in tokens.iter().enumerate() {
        if index > 0 {
            builder.append(" ");
        }
        builder.append(token.to_string());
    }

    builder.string().unwrap_or_default()
}

/// Formats a calculated value for display, without a trailing `.0` on whole numbers.
pub fn format_value(value: f64) -> String {
    format!("{}", value)
}
