use std::ops::{Add, Mul};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_squared() {
        let c = Complex { real: 3.0, imag: 4.0 };
        assert_eq!(c.magnitude_squared(), 25.0);
    }

    #[test]
    fn test_square_of_i_is_minus_one() {
        let i = Complex { real: 0.0, imag: 1.0 };
        assert_eq!(i * i, Complex { real: -1.0, imag: 0.0 });
    }

    #[test]
    fn test_add_is_componentwise() {
        let a = Complex { real: 1.5, imag: -2.0 };
        let b = Complex { real: -0.5, imag: 3.0 };
        assert_eq!(a + b, Complex { real: 1.0, imag: 1.0 });
    }
}
