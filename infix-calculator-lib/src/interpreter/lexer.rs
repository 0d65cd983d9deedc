use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use itertools::Itertools;
use log::{trace, warn};

/// Splits the given infix expression into tokens.
///
/// Square and curly brackets are read as parentheses, and a comma inside a number
/// is read as a decimal point. Characters that are not part of any known token are
/// kept as [`Token::Unrecognized`] for the evaluator to reject.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The tokens of the expression, in the order they were written.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::lexer::tokenize;
/// use infix_calculator::interpreter::operator::BinaryOperator;
/// use infix_calculator::interpreter::token::Token;
///
/// let tokens = tokenize("[1,5 + 2]");
/// assert_eq!(
///     tokens,
///     vec![
///         Token::OpenParenthesis,
///         Token::Literal(1.5),
///         Token::Operator(BinaryOperator::Add),
///         Token::Literal(2.0),
///         Token::CloseParenthesis,
///     ]
/// );
/// ```
pub fn tokenize(expression: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut characters = expression.chars().peekable();

    while let Some(&character) = characters.peek() {
        if character.is_ascii_digit() {
            let literal: String = characters
                .peeking_take_while(|&c| is_number_character(c))
                .collect();
            tokens.push(Token::Literal(parse_number(&literal)));
            continue;
        }

        characters.next();
        if character.is_whitespace() {
            continue;
        }
        let token = match character {
            '(' | '[' | '{' => Token::OpenParenthesis,
            ')' | ']' | '}' => Token::CloseParenthesis,
            symbol => match BinaryOperator::from_symbol(symbol) {
                Some(operator) => Token::Operator(operator),
                None => Token::Unrecognized(symbol),
            },
        };
        tokens.push(token);
    }

    trace!("tokenized {:?} into {:?}", expression, tokens);
    tokens
}

fn is_number_character(character: char) -> bool {
    character.is_ascii_digit() || character == '.' || character == ','
}

/// Parses a run of digits and decimal separators, stopping at a second separator.
/// The run always starts with a digit, so what is left to parse is a valid `f64`.
fn parse_number(literal: &str) -> f64 {
    let normalized = literal.replace(',', ".");
    let end = normalized
        .match_indices('.')
        .nth(1)
        .map_or(normalized.len(), |(index, _)| index);
    if end < normalized.len() {
        warn!(
            "number '{}' has more than one decimal separator, reading it as '{}'",
            literal,
            &normalized[..end]
        );
    }
    normalized[..end].parse::<f64>().unwrap_or(f64::NAN)
}
