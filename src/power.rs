use crate::{
    complex::Complex,
    error::{ComplexError, Result},
    operand::{Operand, Operation},
};

/// `exp(real) * (cos(img) + i sin(img))`.
fn euler(exponent: Complex) -> Complex {
    let imaginary = Complex::new(exponent.img().cos(), exponent.img().sin());
    imaginary * exponent.real().exp()
}

/// `cos(img) + i sin(img)` for a purely imaginary input, `None` otherwise.
pub fn euler_formula(n: Complex) -> Option<Complex> {
    if n.real() != 0.0 {
        return None;
    }
    Some(Complex::new(n.img().cos(), n.img().sin()))
}

impl Complex {
    /// Raises to a real power through the polar form.
    pub fn powf(self, power: f64) -> Complex {
        let [r, theta] = self.polar();
        Complex::from_polar(r.powf(power), theta * power)
    }

    /// `self ** power`.
    ///
    /// A complex exponent with a zero imaginary part is treated as a real
    /// exponent. With both imaginary parts nonzero the result is
    /// `exp(power * log(self))`, where `log(self)` is built from the
    /// magnitude and the polar angle. A real-valued base with a genuinely
    /// complex exponent goes through `rpow`.
    pub fn try_pow(self, power: impl Into<Operand>) -> Result<Complex> {
        match power.into() {
            Operand::Complex(power) if power.img() != 0.0 && self.img() != 0.0 => {
                log::trace!("{:?} ** {:?}: complex exponent", self, power);
                let [r, theta] = self.polar();
                let logarithm = Complex::new(r.ln(), theta);
                Ok(euler(power * logarithm))
            }
            Operand::Complex(power) if power.img() == 0.0 => {
                log::trace!("{:?} ** {:?}: real-valued exponent", self, power);
                Ok(self.powf(power.real()))
            }
            Operand::Real(power) => {
                log::trace!("{:?} ** {}: real exponent", self, power);
                Ok(self.powf(power))
            }
            Operand::Complex(power) => {
                log::trace!("{:?} ** {:?}: real base", self, power);
                power.rpow(self.real())
            }
            other => Err(other.reject(Operation::Exponentiation)),
        }
    }

    /// `base ** self` for a positive real base.
    pub fn rpow(self, base: f64) -> Result<Complex> {
        if base <= 0.0 {
            log::debug!("rejected {} ** {:?}", base, self);
            return Err(ComplexError::Domain {
                function: "ln",
                value: base,
            });
        }
        let real_part = base.powf(self.real());
        let e = base.ln() * self.img();
        Ok(Complex::new(e.cos(), e.sin()) * real_part)
    }

    /// `other ** self` for any operand kind.
    pub fn try_rpow(self, other: impl Into<Operand>) -> Result<Complex> {
        match other.into() {
            Operand::Complex(base) => base.try_pow(self),
            Operand::Real(base) => self.rpow(base),
            other => Err(other.reject(Operation::Exponentiation)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_root() {
        let z = Complex::new(1.0, 2.0).powf(0.5);
        assert!((z.real() - 1.272019649514069).abs() < 1e-12);
        assert!((z.img() - 0.7861513777574233).abs() < 1e-12);
    }

    #[test]
    fn euler_needs_pure_imaginary() {
        assert_eq!(euler_formula(Complex::new(1.0, 1.0)), None);
        assert_eq!(euler_formula(Complex::default()), Some(Complex::new(1.0, 0.0)));
    }

    #[test]
    fn rpow_real_exponent() {
        assert_eq!(Complex::new(3.0, 0.0).rpow(2.0).unwrap(), Complex::new(8.0, 0.0));
    }

    #[test]
    fn rpow_rejects_non_positive_base() {
        assert_eq!(
            Complex::new(1.0, 1.0).rpow(0.0),
            Err(ComplexError::Domain {
                function: "ln",
                value: 0.0
            })
        );
        assert!(Complex::new(2.0, 0.0).rpow(-1.0).is_err());
    }
}
