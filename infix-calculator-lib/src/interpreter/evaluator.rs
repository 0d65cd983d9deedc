use crate::interpreter::error::{CalculationError, Result};
use crate::interpreter::token::Token;
use log::error;

/// Evaluates a sequence of tokens in postfix order.
///
/// # Arguments
///
/// * `postfix_tokens`: Tokens, ordered in postfix notation, to evaluate.
///
/// returns: The value of the expression. Errors are logged before they are returned.
///
/// # Examples
///
/// ```
/// # use infix_calculator::interpreter::error::Result;
/// # fn main() -> Result<()> {
/// use infix_calculator::interpreter::evaluator::calculate_postfix;
/// use infix_calculator::interpreter::operator::BinaryOperator;
/// use infix_calculator::interpreter::token::Token;
///
/// let tokens = vec![
///     Token::Literal(8.0),
///     Token::Literal(3.0),
///     BinaryOperator::Subtract.token(),
/// ];
/// assert_eq!(calculate_postfix(&tokens)?, 5.0);
/// # Ok(()) }
/// ```
pub fn calculate_postfix(postfix_tokens: &[Token]) -> Result<f64> {
    evaluate(postfix_tokens).map_err(|err| {
        error!("could not evaluate {:?}: {}", postfix_tokens, err);
        err
    })
}

fn evaluate(postfix_tokens: &[Token]) -> Result<f64> {
    let mut operands: Vec<f64> = Vec::new();

    for token in postfix_tokens {
        match *token {
            Token::Literal(value) => operands.push(value),
            Token::Operator(operator) => {
                let missing_operand = || CalculationError::MissingOperand { operator };
                let right = operands.pop().ok_or_else(missing_operand)?;
                let left = operands.pop().ok_or_else(missing_operand)?;
                operands.push(operator.apply(left, right));
            }
            Token::Unrecognized(symbol) => {
                return Err(CalculationError::UnrecognizedSymbol { symbol })
            }
            Token::OpenParenthesis | Token::CloseParenthesis => {
                return Err(CalculationError::UnexpectedParenthesis)
            }
        }
    }

    match operands.as_slice() {
        [result] if result.is_nan() => Err(CalculationError::NotANumber),
        [result] => Ok(*result),
        _ => Err(CalculationError::InvalidStackSize {
            remaining: operands.len(),
        }),
    }
}
