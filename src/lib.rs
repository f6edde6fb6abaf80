pub use complex::{normalize, Complex, SNAP_TOLERANCE};
pub use error::{ComplexError, Result};
pub use operand::{Operand, Operation};
pub use power::euler_formula;

mod arith;
pub mod complex;
pub mod error;
pub mod operand;
pub mod power;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiply() {
        let a = Complex::new(1.0, 2.0) * Complex::new(-0.5, 3.0);
        assert!(a == Complex::new(-6.5, 2.0));
    }

    #[test]
    fn unsupported_addition() {
        let err = Complex::new(1.0, 1.0).try_add("abc").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Addition with complex numbers only supported by int, float, or Complex (got str)"
        );
    }

    #[test]
    fn no_coercion_in_equality() {
        assert!(Complex::new(4.0, 0.0) != Operand::Real(4.0));
        assert!(Complex::new(4.0, 0.0) == Operand::Complex(Complex::from(4.0)));
    }
}
