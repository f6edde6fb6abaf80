use std::{
    f64::consts::{FRAC_PI_2, PI},
    fmt,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

use crate::operand::Operand;

/// Distance from an integer under which a component is stored as that integer.
pub const SNAP_TOLERANCE: f64 = 1e-5;

/// Stored form of a raw component.
///
/// Values within `SNAP_TOLERANCE` of their nearest integer are replaced by
/// `ceil` when the value is `<= 0` and by `floor` otherwise. The direction is
/// taken from the sign, not from the nearest integer, so `2.999999` stores
/// as `2` and `-2.999999` as `-2`.
pub fn normalize(value: f64) -> f64 {
    if (value - value.round()).abs() < SNAP_TOLERANCE {
        let snapped = if value <= 0.0 { value.ceil() } else { value.floor() };
        // integers carry no sign of zero
        snapped + 0.0
    } else {
        value
    }
}

#[derive(Clone, Copy, PartialEq, Default)]
pub struct Complex {
    real: f64,
    img: f64,
}

impl Complex {
    pub fn new(real: f64, img: f64) -> Self {
        Self {
            real: normalize(real),
            img: normalize(img),
        }
    }

    pub fn from_polar(r: f64, theta: f64) -> Self {
        Self::new(r * theta.cos(), r * theta.sin())
    }

    pub fn real(&self) -> f64 {
        self.real
    }

    pub fn img(&self) -> f64 {
        self.img
    }

    pub fn set_real(&mut self, value: f64) {
        self.real = normalize(value);
    }

    pub fn set_img(&mut self, value: f64) {
        self.img = normalize(value);
    }

    /// `[magnitude, angle]`.
    ///
    /// The angle is not quadrant aware: with both components nonzero it is
    /// `atan(img / real)`, which is off by `PI` whenever `real < 0`. On the
    /// axes it is `PI / 2`, `3 * PI / 2`, `0` or `PI`, and the zero value
    /// reports `PI / 2`.
    pub fn polar(&self) -> [f64; 2] {
        let r = (self.real * self.real + self.img * self.img).sqrt();
        let theta = if r == self.img.abs() {
            if r == self.img {
                FRAC_PI_2
            } else {
                270.0 * PI / 180.0
            }
        } else if r == self.real.abs() {
            if r == self.real {
                0.0
            } else {
                PI
            }
        } else {
            (self.img / self.real).atan()
        };
        [r, theta]
    }

    pub fn abs(&self) -> f64 {
        self.polar()[0]
    }

    pub fn conjugate(&self) -> Self {
        Self::new(self.real, -self.img)
    }

    /// Unary plus: the absolute value of each component, not the identity.
    pub fn pos(&self) -> Self {
        Self::new(self.real.abs(), self.img.abs())
    }
}

/// Divides both components of an already conjugate-multiplied numerator.
fn scale_down(mut numerator: Complex, divisor: f64) -> Complex {
    numerator.set_real(numerator.real / divisor);
    numerator.set_img(numerator.img / divisor);
    numerator
}

impl From<f64> for Complex {
    fn from(x: f64) -> Self {
        Self::new(x, 0.0)
    }
}

impl From<(f64, f64)> for Complex {
    fn from((real, img): (f64, f64)) -> Self {
        Self::new(real, img)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.img > 0.0 {
            if self.real != 0.0 {
                return write!(f, "{} + {}i", self.real, self.img);
            }
            return write!(f, "{}i", self.img);
        }
        if self.img == 0.0 {
            return write!(f, "{}", self.real);
        }
        if self.real == 0.0 {
            return write!(f, "{}i", self.img);
        }
        write!(f, "{} - {}i", self.real, self.img.abs())
    }
}

impl fmt::Debug for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, theta] = self.polar();
        write!(
            f,
            "Complex(real={}, img={}, polar=[{:?}, {:?}])",
            self.real, self.img, r, theta
        )
    }
}

impl PartialEq<Operand> for Complex {
    fn eq(&self, other: &Operand) -> bool {
        match other {
            Operand::Complex(z) => self == z,
            _ => false,
        }
    }
}

impl Neg for Complex {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.real, -self.img)
    }
}

impl Add for Complex {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.real + other.real, self.img + other.img)
    }
}

impl Add<f64> for Complex {
    type Output = Self;
    fn add(self, other: f64) -> Self {
        Self::new(self.real + other, self.img)
    }
}

impl Add<Complex> for f64 {
    type Output = Complex;
    fn add(self, rhs: Complex) -> Complex {
        rhs + self
    }
}

impl AddAssign for Complex {
    fn add_assign(&mut self, other: Self) {
        self.set_real(self.real + other.real);
        self.set_img(self.img + other.img);
    }
}

impl AddAssign<f64> for Complex {
    fn add_assign(&mut self, other: f64) {
        self.set_real(self.real + other);
    }
}

impl Sub for Complex {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(self.real - other.real, self.img - other.img)
    }
}

impl Sub<f64> for Complex {
    type Output = Self;
    fn sub(self, other: f64) -> Self {
        Self::new(self.real - other, self.img)
    }
}

impl Sub<Complex> for f64 {
    type Output = Complex;
    fn sub(self, rhs: Complex) -> Complex {
        -rhs + self
    }
}

impl SubAssign for Complex {
    fn sub_assign(&mut self, other: Self) {
        self.set_real(self.real - other.real);
        self.set_img(self.img - other.img);
    }
}

impl SubAssign<f64> for Complex {
    fn sub_assign(&mut self, other: f64) {
        self.set_real(self.real - other);
    }
}

impl Mul for Complex {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        let real = self.real * other.real - self.img * other.img;
        let img = self.real * other.img + self.img * other.real;
        Self::new(real, img)
    }
}

impl Mul<f64> for Complex {
    type Output = Self;
    fn mul(self, other: f64) -> Self {
        Self::new(other * self.real, other * self.img)
    }
}

impl Mul<Complex> for f64 {
    type Output = Complex;
    fn mul(self, rhs: Complex) -> Complex {
        rhs * self
    }
}

impl Div for Complex {
    type Output = Self;
    fn div(self, other: Self) -> Self {
        let conjugate = other.conjugate();
        scale_down(self * conjugate, (other * conjugate).real)
    }
}

impl Div<f64> for Complex {
    type Output = Self;
    fn div(self, other: f64) -> Self {
        Self::new(self.real / other, self.img / other)
    }
}

impl Div<Complex> for f64 {
    type Output = Complex;
    fn div(self, rhs: Complex) -> Complex {
        let conjugate = rhs.conjugate();
        scale_down(self * conjugate, (rhs * conjugate).real)
    }
}
