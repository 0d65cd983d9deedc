//! Evaluates arithmetic expressions written in infix notation, such as `2 + 3 * 4`.
//!
//! An expression is split into tokens, reordered into postfix notation with the
//! shunting-yard algorithm and then evaluated on a value stack.

pub mod interpreter;

pub use interpreter::error::{CalculationError, Result};
pub use interpreter::{calculate, calculate_strict};
