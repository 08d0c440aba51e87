//!
//! `Prob` numeric kind: a probability kept as its logarithm
//!
//! The zero of this kind is `p = 0`, so a sparse array of `Prob` stores only
//! the reachable states and sums them with logaddexp.
//!
use super::unit::Value;
use approx::AbsDiffEq;

///
/// Probability `0 <= p <= 1` stored as `log p`
///
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Prob(f64);

/// `Prob` from a probability
pub fn p(p: f64) -> Prob {
    Prob::from_prob(p)
}

/// `Prob` from a log probability
pub fn lp(lp: f64) -> Prob {
    Prob::from_log_prob(lp)
}

impl Prob {
    pub fn from_prob(value: f64) -> Prob {
        Prob(value.ln())
    }
    pub fn from_log_prob(log_value: f64) -> Prob {
        Prob(log_value)
    }
    /// probability in `[0, 1]`
    pub fn to_value(self) -> f64 {
        self.0.exp()
    }
    pub fn to_log_value(self) -> f64 {
        self.0
    }
    /// `log p == -inf`
    pub fn is_zero(self) -> bool {
        self.0.is_infinite() && self.0.is_sign_negative()
    }
    /// `log p == 0`
    pub fn is_one(self) -> bool {
        self.0 == 0.0
    }
    pub fn zero() -> Prob {
        Prob(f64::NEG_INFINITY)
    }
    pub fn one() -> Prob {
        Prob(0.0)
    }
}

impl Default for Prob {
    fn default() -> Self {
        Prob::zero()
    }
}

impl Value for Prob {
    fn zero() -> Prob {
        Prob::zero()
    }
    fn is_zero(&self) -> bool {
        Prob::is_zero(*self)
    }
    fn to_f64(self) -> f64 {
        self.to_value()
    }
    fn from_f64(value: f64) -> Prob {
        Prob::from_prob(value)
    }
    fn is_nan(self) -> bool {
        self.0.is_nan()
    }
    fn is_positive(self) -> bool {
        !self.is_nan() && !Prob::is_zero(self)
    }
    /// probabilities are never negative
    fn is_absolute(self) -> bool {
        !self.is_nan()
    }
}

/// `log(e^a + e^b) = hi + log(1 + e^(lo - hi))` with `hi >= lo`
impl std::ops::Add for Prob {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        let (hi, lo) = if self.0 >= other.0 {
            (self.0, other.0)
        } else {
            (other.0, self.0)
        };
        if lo == f64::NEG_INFINITY {
            Prob(hi)
        } else {
            Prob(hi + (lo - hi).exp().ln_1p())
        }
    }
}

/// `log(ab) = log a + log b`
impl std::ops::Mul for Prob {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        Prob(self.0 + other.0)
    }
}

impl std::ops::AddAssign for Prob {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}
impl std::ops::MulAssign for Prob {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

/// compares the log values; any two `p = 0` are equal
impl AbsDiffEq for Prob {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        if Prob::is_zero(*self) && Prob::is_zero(*other) {
            true
        } else {
            f64::abs_diff_eq(&self.0, &other.0, epsilon)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prob_add_mul() {
        assert_eq!(p(0.0) + p(1.0), p(1.0));
        assert_eq!(p(0.0) * p(1.0), p(0.0));
        assert_abs_diff_eq!((p(0.3) + p(0.3)).0, p(0.6).0, epsilon = 1e-12);
        assert_abs_diff_eq!((p(0.3) * p(0.3)).0, p(0.09).0, epsilon = 1e-12);
    }
    #[test]
    fn prob_zero_is_sparse_default() {
        let zero = <Prob as Value>::zero();
        assert!(Value::is_zero(&zero));
        assert!(!Value::is_zero(&p(0.00001)));
        assert_eq!(zero, Prob::default());
        assert_eq!(zero.to_f64(), 0.0);
        assert!(!zero.is_positive());
        assert!(zero.is_absolute());
        assert!(!Value::is_infinite(zero));
    }
    #[test]
    fn prob_f64_conversion() {
        assert_abs_diff_eq!(Prob::from_f64(0.25).to_f64(), 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(lp(0.5f64.ln()).to_f64(), 0.5, epsilon = 1e-12);
        assert!(Prob::from_f64(0.25).is_positive());
        assert_abs_diff_eq!(p(0.25).magnitude(), 0.25, epsilon = 1e-12);
    }
    #[test]
    fn prob_zero_preserving_mul() {
        // p * 0.5 maps zero to zero, p + 0.5 does not
        let half = p(0.5);
        assert!(Value::is_zero(&(Prob::zero() * half)));
        assert!(!Value::is_zero(&(Prob::zero() + half)));
    }
    #[test]
    fn prob_assert_eq() {
        assert!(abs_diff_eq!(p(0.1), p(0.1)));
        assert!(!abs_diff_eq!(p(0.1), p(0.2)));
        assert!(abs_diff_eq!(p(0.0), p(0.0)));
    }
    #[test]
    fn prob_assign() {
        let mut x = p(0.4);
        x += p(0.2);
        assert_abs_diff_eq!(x, p(0.6), epsilon = 1e-12);
        x *= p(0.5);
        assert_abs_diff_eq!(x, p(0.3), epsilon = 1e-12);
        x *= p(0.0);
        assert!(Prob::is_zero(x));
    }
}
