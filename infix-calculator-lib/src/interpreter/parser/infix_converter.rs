use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use std::collections::VecDeque;

/// The outcome of converting infix tokens to postfix.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Conversion {
    pub(crate) postfix: Vec<Token>,
    /// False if the input ran out before every parenthesis was closed,
    /// or if a closing parenthesis was left over once they all were.
    pub(crate) balanced: bool,
}

/// Shunting-yard conversion. The operator stack starts out holding an open
/// parenthesis that is matched by a closing one appended to the input, so the
/// whole expression is flushed as one parenthesized group.
pub(crate) fn infix_to_postfix(infix_tokens: Vec<Token>) -> Conversion {
    let mut tokens: VecDeque<Token> = VecDeque::from(infix_tokens);
    tokens.push_back(Token::CloseParenthesis);
    let mut operators: Vec<Token> = vec![Token::OpenParenthesis];
    let mut output: Vec<Token> = vec![];

    while !operators.is_empty() {
        let token = match tokens.pop_front() {
            Some(token) => token,
            None => {
                return Conversion {
                    postfix: output,
                    balanced: false,
                }
            }
        };
        match token {
            Token::Literal(_) | Token::Unrecognized(_) => output.push(token),
            Token::OpenParenthesis => operators.push(token),
            Token::CloseParenthesis => parse_closing_parenthesis_token(&mut operators, &mut output),
            Token::Operator(operator) => {
                parse_operator_token(&mut operators, &mut output, operator)
            }
        };
    }

    Conversion {
        postfix: output,
        balanced: tokens.is_empty(),
    }
}

fn parse_closing_parenthesis_token(operators: &mut Vec<Token>, output: &mut Vec<Token>) {
    while let Some(top_of_operator_stack) = operators.pop() {
        if top_of_operator_stack == Token::OpenParenthesis {
            // Discard the open parenthesis.
            break;
        }
        output.push(top_of_operator_stack);
    }
}

fn parse_operator_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
    operator: BinaryOperator,
) {
    while let Some(&Token::Operator(other_operator)) = operators.last() {
        // Equal priorities are flushed too, which makes every operator left-associative.
        if !other_operator.priority_ge(&operator) {
            break;
        }
        operators.pop();
        output.push(other_operator.token());
    }

    operators.push(operator.token());
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn literal(value: f64) -> Token {
        Token::Literal(value)
    }

    fn operator(symbol: char) -> Token {
        BinaryOperator::from_symbol(symbol).unwrap().token()
    }

    #[test]
    fn infix_to_postfix_simple_expression() {
        // 1 + 2
        let infix = vec![literal(1.0), operator('+'), literal(2.0)];
        let postfix = vec![literal(1.0), literal(2.0), operator('+')];

        let actual = infix_to_postfix(infix);

        assert_eq!(actual.postfix, postfix);
        assert!(actual.balanced)
    }

    #[test]
    fn infix_to_postfix_simple_parenthesised_expression() {
        // 1 - (2 + 3)
        let infix = vec![
            literal(1.0),
            operator('-'),
            Token::OpenParenthesis,
            literal(2.0),
            operator('+'),
            literal(3.0),
            Token::CloseParenthesis,
        ];
        let postfix = vec![
            literal(1.0),
            literal(2.0),
            literal(3.0),
            operator('+'),
            operator('-'),
        ];

        let actual = infix_to_postfix(infix);

        assert_eq!(actual.postfix, postfix);
        assert!(actual.balanced)
    }

    #[test]
    fn infix_to_postfix_complex_expression() {
        // 1 + 2 * 3 / (4 - 5)^6^7
        let infix = vec![
            literal(1.0),
            operator('+'),
            literal(2.0),
            operator('*'),
            literal(3.0),
            operator('/'),
            Token::OpenParenthesis,
            literal(4.0),
            operator('-'),
            literal(5.0),
            Token::CloseParenthesis,
            operator('^'),
            literal(6.0),
            operator('^'),
            literal(7.0),
        ];
        let postfix = vec![
            literal(1.0),
            literal(2.0),
            literal(3.0),
            operator('*'),
            literal(4.0),
            literal(5.0),
            operator('-'),
            literal(6.0),
            operator('^'),
            literal(7.0),
            operator('^'),
            operator('/'),
            operator('+'),
        ];

        let actual = infix_to_postfix(infix);

        assert_eq!(actual.postfix, postfix);
        assert!(actual.balanced)
    }

    #[test]
    fn infix_to_postfix_multi_operator_expression() {
        // 1 + 2 * 3 - 4
        let infix = vec![
            literal(1.0),
            operator('+'),
            literal(2.0),
            operator('*'),
            literal(3.0),
            operator('-'),
            literal(4.0),
        ];
        let postfix = vec![
            literal(1.0),
            literal(2.0),
            literal(3.0),
            operator('*'),
            operator('+'),
            literal(4.0),
            operator('-'),
        ];

        let actual = infix_to_postfix(infix);

        assert_eq!(actual.postfix, postfix)
    }

    #[test]
    fn infix_to_postfix_equal_priorities_group_left_to_right() {
        // 8 - 3 - 2
        let infix = vec![
            literal(8.0),
            operator('-'),
            literal(3.0),
            operator('-'),
            literal(2.0),
        ];
        let postfix = vec![
            literal(8.0),
            literal(3.0),
            operator('-'),
            literal(2.0),
            operator('-'),
        ];

        let actual = infix_to_postfix(infix);

        assert_eq!(actual.postfix, postfix)
    }

    #[test]
    fn infix_to_postfix_nested_parenthesis_expression() {
        // 1 + ((2 + 3) * 4)
        let infix = vec![
            literal(1.0),
            operator('+'),
            Token::OpenParenthesis,
            Token::OpenParenthesis,
            literal(2.0),
            operator('+'),
            literal(3.0),
            Token::CloseParenthesis,
            operator('*'),
            literal(4.0),
            Token::CloseParenthesis,
        ];
        let postfix = vec![
            literal(1.0),
            literal(2.0),
            literal(3.0),
            operator('+'),
            literal(4.0),
            operator('*'),
            operator('+'),
        ];

        let actual = infix_to_postfix(infix);

        assert_eq!(actual.postfix, postfix);
        assert!(actual.balanced)
    }

    #[test]
    fn infix_to_postfix_unclosed_parenthesis_returns_partial_postfix() {
        // (2 + 3
        let infix = vec![
            Token::OpenParenthesis,
            literal(2.0),
            operator('+'),
            literal(3.0),
        ];

        let actual = infix_to_postfix(infix);

        assert_eq!(actual.postfix, vec![literal(2.0), literal(3.0), operator('+')]);
        assert!(!actual.balanced)
    }

    #[test]
    fn infix_to_postfix_surplus_closing_parenthesis_stops_conversion() {
        // 2 + 3) * 4
        let infix = vec![
            literal(2.0),
            operator('+'),
            literal(3.0),
            Token::CloseParenthesis,
            operator('*'),
            literal(4.0),
        ];

        let actual = infix_to_postfix(infix);

        assert_eq!(actual.postfix, vec![literal(2.0), literal(3.0), operator('+')]);
        assert!(!actual.balanced)
    }

    #[test]
    fn infix_to_postfix_keeps_unrecognized_symbols() {
        // x * 2
        let infix = vec![Token::Unrecognized('x'), operator('*'), literal(2.0)];
        let postfix = vec![Token::Unrecognized('x'), literal(2.0), operator('*')];

        let actual = infix_to_postfix(infix);

        assert_eq!(actual.postfix, postfix)
    }

    #[test]
    fn infix_to_postfix_empty_input_is_balanced() {
        let actual = infix_to_postfix(vec![]);

        assert!(actual.postfix.is_empty());
        assert!(actual.balanced)
    }
}
