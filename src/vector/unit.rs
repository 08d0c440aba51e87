//!
//! Trait for numeric kinds which have a zero (unit of addition)
//! that a sparse array leaves unstored
//!
use std::fmt::Debug;

///
/// Numeric kind stored in a sparse array.
///
/// `zero()` is the default value of every unset position.
///
pub trait Value: Copy + PartialEq + Debug {
    fn zero() -> Self;
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
    ///
    /// Render as a native double
    fn to_f64(self) -> f64;
    ///
    /// Convert back from a native double
    fn from_f64(value: f64) -> Self;
    ///
    /// Absolute size of the value, used to find the largest element
    fn magnitude(self) -> f64 {
        self.to_f64().abs()
    }
    fn is_nan(self) -> bool {
        self.to_f64().is_nan()
    }
    fn is_infinite(self) -> bool {
        self.to_f64().is_infinite()
    }
    fn is_positive(self) -> bool {
        self.to_f64() > 0.0
    }
    fn is_real(self) -> bool {
        true
    }
    ///
    /// `|x| == x`
    fn is_absolute(self) -> bool {
        self.to_f64() >= 0.0
    }
}

impl Value for f64 {
    fn zero() -> f64 {
        0.0
    }
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
    #[inline]
    fn from_f64(value: f64) -> f64 {
        value
    }
}

impl Value for f32 {
    fn zero() -> f32 {
        0.0
    }
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
    #[inline]
    fn from_f64(value: f64) -> f32 {
        value as f32
    }
}

impl Value for i64 {
    fn zero() -> i64 {
        0
    }
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
    /// truncates toward zero (saturating at the bounds)
    #[inline]
    fn from_f64(value: f64) -> i64 {
        value as i64
    }
    fn magnitude(self) -> f64 {
        self.unsigned_abs() as f64
    }
    fn is_nan(self) -> bool {
        false
    }
    fn is_infinite(self) -> bool {
        false
    }
    fn is_positive(self) -> bool {
        self > 0
    }
    fn is_absolute(self) -> bool {
        self >= 0
    }
}

///
/// Scalar view of a single value
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scalar<T: Value>(T);

impl<T: Value> Scalar<T> {
    pub fn new(value: T) -> Scalar<T> {
        Scalar(value)
    }
    ///
    /// Scalar of `T::zero()`
    pub fn zero() -> Scalar<T> {
        Scalar(T::zero())
    }
    pub fn value(&self) -> T {
        self.0
    }
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64()
    }
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_f64() {
        let e = f64::zero();
        assert!(e.is_zero());
        assert!((-0.0f64).is_zero());
        assert!(!f64::NAN.is_zero());
        assert!(!1.5f64.is_zero());
        assert!(e.is_real());
        assert!(e.is_absolute());
        assert!(!e.is_positive());
        assert!(!e.is_infinite());
        assert!(!e.is_nan());
    }
    #[test]
    fn predicates_f64() {
        assert!(f64::NAN.is_nan());
        assert!(f64::INFINITY.is_infinite());
        assert!(f64::NEG_INFINITY.is_infinite());
        assert!(2.0f64.is_positive());
        assert!(!(-2.0f64).is_positive());
        assert!(!(-2.0f64).is_absolute());
        assert_eq!((-9.0f64).magnitude(), 9.0);
    }
    #[test]
    fn zero_i64() {
        assert!(i64::zero().is_zero());
        assert_eq!(i64::from_f64(3.7), 3);
        assert_eq!(i64::MIN.magnitude(), 9223372036854775808.0);
        assert!(!(-3i64).is_absolute());
        assert!(7i64.is_positive());
    }
    #[test]
    fn zero_f32() {
        assert!(f32::zero().is_zero());
        assert_eq!(f32::from_f64(0.5).to_f64(), 0.5);
    }
    #[test]
    fn scalar() {
        let s = Scalar::new(2.5f64);
        assert_eq!(s.value(), 2.5);
        assert_eq!(s.to_f64(), 2.5);
        assert!(!s.is_zero());
        assert!(Scalar::<i64>::zero().is_zero());
    }
}
