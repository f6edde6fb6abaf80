use thiserror::Error;

use crate::operand::Operation;

pub type Result<T> = std::result::Result<T, ComplexError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComplexError {
    #[error("{operation} with complex numbers only supported by int, float, or Complex (got {found})")]
    UnsupportedOperand { operation: Operation, found: String },
    #[error("{operation} by zero")]
    DivisionByZero { operation: Operation },
    #[error("math domain error: {function}({value})")]
    Domain { function: &'static str, value: f64 },
}
