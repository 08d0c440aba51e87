//!
//! Complex numbers (`num_complex::Complex64`) as a numeric kind
//!
//! Native double rendering is the real part, and the size used by
//! `index_of_largest` is the modulus.
//!
use super::unit::Value;
pub use num_complex::Complex64;

impl Value for Complex64 {
    fn zero() -> Complex64 {
        Complex64::new(0.0, 0.0)
    }
    /// real part
    #[inline]
    fn to_f64(self) -> f64 {
        self.re
    }
    #[inline]
    fn from_f64(value: f64) -> Complex64 {
        Complex64::new(value, 0.0)
    }
    fn magnitude(self) -> f64 {
        self.norm()
    }
    fn is_nan(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }
    fn is_infinite(self) -> bool {
        self.re.is_infinite() || self.im.is_infinite()
    }
    fn is_positive(self) -> bool {
        self.im == 0.0 && self.re > 0.0
    }
    fn is_real(self) -> bool {
        self.im == 0.0
    }
    fn is_absolute(self) -> bool {
        self.im == 0.0 && self.re >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn complex_zero() {
        let z = <Complex64 as Value>::zero();
        assert!(Value::is_zero(&z));
        assert!(Value::is_zero(&c(-0.0, 0.0)));
        assert!(!Value::is_zero(&c(0.0, 1.0)));
        assert!(z.is_real());
        assert!(z.is_absolute());
        assert!(!z.is_positive());
    }
    #[test]
    fn complex_predicates() {
        assert!(!c(1.0, 2.0).is_real());
        assert!(!c(1.0, 2.0).is_absolute());
        assert!(!c(1.0, 2.0).is_positive());
        assert!(c(2.0, 0.0).is_positive());
        assert!(!c(-2.0, 0.0).is_absolute());
        assert!(Value::is_nan(c(0.0, f64::NAN)));
        assert!(Value::is_infinite(c(f64::INFINITY, 0.0)));
        assert_eq!(c(3.0, -4.0).magnitude(), 5.0);
        assert_eq!(c(3.0, -4.0).to_f64(), 3.0);
        assert_eq!(<Complex64 as Value>::from_f64(1.5), c(1.5, 0.0));
    }
}
