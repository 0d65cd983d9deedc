use crate::interpreter::token::Token;
use std::fmt;
use std::fmt::Formatter;

/// A binary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponentiate,
}

/// Every operator the lexer recognizes, looked up by symbol.
pub static OPERATORS: [BinaryOperator; 5] = [
    BinaryOperator::Add,
    BinaryOperator::Subtract,
    BinaryOperator::Multiply,
    BinaryOperator::Divide,
    BinaryOperator::Exponentiate,
];

impl BinaryOperator {
    /// Finds the operator written as `symbol`, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use infix_calculator::interpreter::operator::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol('^'), Some(BinaryOperator::Exponentiate));
    /// assert_eq!(BinaryOperator::from_symbol('%'), None);
    /// ```
    pub fn from_symbol(symbol: char) -> Option<BinaryOperator> {
        OPERATORS
            .iter()
            .find(|operator| operator.symbol() == symbol)
            .copied()
    }

    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
            BinaryOperator::Exponentiate => '^',
        }
    }

    pub fn token(&self) -> Token {
        Token::Operator(*self)
    }

    /// Higher priorities bind tighter.
    pub fn priority(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 1,
            BinaryOperator::Multiply | BinaryOperator::Divide => 2,
            BinaryOperator::Exponentiate => 3,
        }
    }

    pub(crate) fn priority_ge(&self, other: &Self) -> bool {
        self.priority().ge(&other.priority())
    }

    /// Applies the operator with `left` and `right` as its operands, in that order.
    pub fn apply(&self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOperator::Add => left + right,
            BinaryOperator::Subtract => left - right,
            BinaryOperator::Multiply => left * right,
            BinaryOperator::Divide => left / right,
            BinaryOperator::Exponentiate => f64::powf(left, right),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
