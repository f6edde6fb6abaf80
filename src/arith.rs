//! Operators checked against the kind of their right-hand operand.
//!
//! The operator traits in `complex` cover the statically typed cases; these
//! methods accept any `Operand` and reject the kinds they cannot combine with.

use crate::{
    complex::Complex,
    error::{ComplexError, Result},
    operand::{Operand, Operation},
};

fn floor_components(z: Complex) -> Complex {
    Complex::new(z.real().floor(), z.img().floor())
}

/// Squared magnitude used as the divisor after conjugate multiplication.
fn conjugate_divisor(z: Complex) -> Result<f64> {
    let divisor = (z * z.conjugate()).real();
    if divisor == 0.0 {
        log::debug!("rejected division by {:?}", z);
        return Err(ComplexError::DivisionByZero {
            operation: Operation::Division,
        });
    }
    Ok(divisor)
}

impl Complex {
    pub fn try_add(self, other: impl Into<Operand>) -> Result<Complex> {
        match other.into() {
            Operand::Complex(z) => Ok(self + z),
            Operand::Real(x) => Ok(self + x),
            other => Err(other.reject(Operation::Addition)),
        }
    }

    /// `other + self`. Addition commutes, so this is `try_add`.
    pub fn try_radd(self, other: impl Into<Operand>) -> Result<Complex> {
        self.try_add(other)
    }

    pub fn try_add_assign(&mut self, other: impl Into<Operand>) -> Result<&mut Self> {
        match other.into() {
            Operand::Complex(z) => *self += z,
            Operand::Real(x) => *self += x,
            other => return Err(other.reject(Operation::Addition)),
        }
        Ok(self)
    }

    pub fn try_sub(self, other: impl Into<Operand>) -> Result<Complex> {
        match other.into() {
            Operand::Complex(z) => Ok(self - z),
            Operand::Real(x) => Ok(self - x),
            other => Err(other.reject(Operation::Subtraction)),
        }
    }

    /// `other - self`, evaluated as `-self + other`.
    pub fn try_rsub(self, other: impl Into<Operand>) -> Result<Complex> {
        (-self).try_add(other)
    }

    pub fn try_sub_assign(&mut self, other: impl Into<Operand>) -> Result<&mut Self> {
        match other.into() {
            Operand::Complex(z) => *self -= z,
            Operand::Real(x) => *self -= x,
            other => return Err(other.reject(Operation::Subtraction)),
        }
        Ok(self)
    }

    pub fn try_mul(self, other: impl Into<Operand>) -> Result<Complex> {
        match other.into() {
            Operand::Complex(z) => Ok(self * z),
            Operand::Real(x) => Ok(self * x),
            other => Err(other.reject(Operation::Multiplication)),
        }
    }

    /// `other * self`. Multiplication commutes, so this is `try_mul`.
    pub fn try_rmul(self, other: impl Into<Operand>) -> Result<Complex> {
        self.try_mul(other)
    }

    pub fn try_div(self, other: impl Into<Operand>) -> Result<Complex> {
        match other.into() {
            Operand::Complex(z) => {
                conjugate_divisor(z)?;
                Ok(self / z)
            }
            Operand::Real(x) => {
                if x == 0.0 {
                    log::debug!("rejected division of {:?} by zero", self);
                    return Err(ComplexError::DivisionByZero {
                        operation: Operation::Division,
                    });
                }
                Ok(self / x)
            }
            other => Err(other.reject(Operation::Division)),
        }
    }

    /// `other / self`, using `self` as the conjugate-multiplied divisor.
    pub fn try_rdiv(self, other: impl Into<Operand>) -> Result<Complex> {
        let conjugate = self.conjugate();
        let mut numerator = match other.into() {
            Operand::Complex(z) => z * conjugate,
            Operand::Real(x) => x * conjugate,
            other => return Err(other.reject(Operation::Division)),
        };
        let divisor = conjugate_divisor(self)?;
        numerator.set_real(numerator.real() / divisor);
        numerator.set_img(numerator.img() / divisor);
        Ok(numerator)
    }

    /// True division followed by flooring each component.
    pub fn try_floor_div(self, other: impl Into<Operand>) -> Result<Complex> {
        self.try_div(other).map(floor_components)
    }

    /// `other // self`.
    pub fn try_rfloor_div(self, other: impl Into<Operand>) -> Result<Complex> {
        self.try_rdiv(other).map(floor_components)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_kinds() {
        let z = Complex::new(3.0, 4.0);
        assert_eq!(z.try_add(2).unwrap(), Complex::new(5.0, 4.0));
        assert_eq!(z.try_radd(2.0).unwrap(), z.try_add(2.0).unwrap());
        assert_eq!(z.try_sub(Complex::new(1.0, 1.0)).unwrap(), Complex::new(2.0, 3.0));
        assert_eq!(z.try_rsub(10).unwrap(), Complex::new(7.0, -4.0));
        assert_eq!(z.try_rmul(2).unwrap(), Complex::new(6.0, 8.0));
        assert_eq!(z.try_div(2).unwrap(), Complex::new(1.5, 2.0));
    }

    #[test]
    fn in_place_returns_self() {
        let mut z = Complex::new(1.0, 2.0);
        z.try_add_assign(Complex::new(1.0, 1.0))
            .unwrap()
            .try_sub_assign(0.5)
            .unwrap();
        assert_eq!(z, Complex::new(1.5, 3.0));
    }

    #[test]
    fn in_place_rejects_without_mutating() {
        let mut z = Complex::new(1.0, 2.0);
        assert!(z.try_sub_assign("x").is_err());
        assert_eq!(z, Complex::new(1.0, 2.0));
    }

    #[test]
    fn zero_divisors() {
        let z = Complex::new(1.0, 1.0);
        assert_eq!(
            z.try_div(0),
            Err(ComplexError::DivisionByZero {
                operation: Operation::Division
            })
        );
        assert!(z.try_div(Complex::default()).is_err());
        assert!(Complex::default().try_rdiv(1).is_err());
    }
}
