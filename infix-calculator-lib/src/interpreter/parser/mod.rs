mod infix_converter;

use crate::interpreter::error::{CalculationError, Result};
use crate::interpreter::lexer;
use crate::interpreter::parser::infix_converter::{infix_to_postfix, Conversion};
use crate::interpreter::token::Token;
use log::{trace, warn};

/// Converts the given infix expression into postfix (reverse polish) order.
///
/// Mismatched parentheses do not fail the conversion: a warning is logged and the
/// postfix built up to that point is returned.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The tokens of the expression, in postfix order.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::parser::convert_infix_to_postfix;
/// use infix_calculator::interpreter::tokens_to_string;
///
/// let postfix = convert_infix_to_postfix("2 + 3 * 4");
/// assert_eq!(tokens_to_string(&postfix), "2 3 4 * +");
/// ```
pub fn convert_infix_to_postfix(expression: &str) -> Vec<Token> {
    let Conversion { postfix, balanced } = convert(expression);
    if !balanced {
        warn!(
            "mismatched parentheses in {:?}, using partial postfix {:?}",
            expression, postfix
        );
    }
    postfix
}

/// Like [`convert_infix_to_postfix`], but mismatched parentheses are an error.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::parser::convert_infix_to_postfix_strict;
///
/// assert!(convert_infix_to_postfix_strict("(2 + 3").is_err());
/// ```
pub fn convert_infix_to_postfix_strict(expression: &str) -> Result<Vec<Token>> {
    let Conversion { postfix, balanced } = convert(expression);
    if !balanced {
        return Err(CalculationError::UnbalancedParentheses { postfix });
    }
    Ok(postfix)
}

fn convert(expression: &str) -> Conversion {
    let infix_tokens = lexer::tokenize(expression);
    let conversion = infix_to_postfix(infix_tokens);
    trace!("converted {:?} into {:?}", expression, conversion.postfix);
    conversion
}
