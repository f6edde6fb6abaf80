use std::fmt;

use crate::complex::Complex;
use crate::error::ComplexError;

/// Right-hand side of a checked operation.
///
/// Anything that is neither a `Complex` nor a plain real number ends up as
/// `Unsupported`, carrying the name of its kind for the error message.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Complex(Complex),
    Real(f64),
    Unsupported(String),
}

impl Operand {
    pub fn unsupported(kind: impl Into<String>) -> Self {
        Operand::Unsupported(kind.into())
    }

    pub fn kind(&self) -> &str {
        match self {
            Operand::Complex(_) => "Complex",
            Operand::Real(_) => "float",
            Operand::Unsupported(kind) => kind,
        }
    }

    pub(crate) fn reject(&self, operation: Operation) -> ComplexError {
        log::debug!("{} rejected operand of kind {}", operation, self.kind());
        ComplexError::UnsupportedOperand {
            operation,
            found: self.kind().to_string(),
        }
    }
}

impl From<Complex> for Operand {
    fn from(z: Complex) -> Self {
        Operand::Complex(z)
    }
}

impl From<f64> for Operand {
    fn from(x: f64) -> Self {
        Operand::Real(x)
    }
}

impl From<f32> for Operand {
    fn from(x: f32) -> Self {
        Operand::Real(x as f64)
    }
}

impl From<i32> for Operand {
    fn from(x: i32) -> Self {
        Operand::Real(x as f64)
    }
}

impl From<i64> for Operand {
    fn from(x: i64) -> Self {
        Operand::Real(x as f64)
    }
}

impl From<u32> for Operand {
    fn from(x: u32) -> Self {
        Operand::Real(x as f64)
    }
}

impl From<&str> for Operand {
    fn from(_: &str) -> Self {
        Operand::unsupported("str")
    }
}

impl From<String> for Operand {
    fn from(_: String) -> Self {
        Operand::unsupported("str")
    }
}

/// Operation names reported in `UnsupportedOperand` and `DivisionByZero`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Exponentiation,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Addition => "Addition",
            Operation::Subtraction => "Subtraction",
            Operation::Multiplication => "Multiplication",
            Operation::Division => "Division",
            Operation::Exponentiation => "Exponentiation",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(Operand::from(Complex::new(1.0, 1.0)).kind(), "Complex");
        assert_eq!(Operand::from(3).kind(), "float");
        assert_eq!(Operand::from("abc").kind(), "str");
        assert_eq!(Operand::unsupported("list").kind(), "list");
    }

    #[test]
    fn integers_become_reals() {
        assert_eq!(Operand::from(-4i64), Operand::Real(-4.0));
        assert_eq!(Operand::from(7u32), Operand::Real(7.0));
    }
}
