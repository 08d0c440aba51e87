//!
//! Arithmetic progression of logical positions `first, first+step, ... < limit`
//! that the bulk operations of a sparse array act on
//!
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stride {
    pub first: u64,
    pub limit: u64,
    pub step: u64,
}

impl Stride {
    ///
    /// Panics if `step == 0`.
    pub fn new(first: u64, limit: u64, step: u64) -> Stride {
        assert!(step > 0, "step of a progression must be positive");
        Stride { first, limit, step }
    }
    ///
    /// Is the position a member of the progression?
    ///
    #[inline]
    pub fn contains(&self, position: u64) -> bool {
        position >= self.first && position < self.limit && (position - self.first) % self.step == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(2, 10, 3, 2 => true)]
    #[test_case(2, 10, 3, 5 => true)]
    #[test_case(2, 10, 3, 8 => true)]
    #[test_case(2, 10, 3, 4 => false)]
    #[test_case(2, 10, 3, 1 => false)]
    #[test_case(2, 10, 3, 11 => false)]
    #[test_case(0, 10, 1, 10 => false)]
    #[test_case(0, u64::MAX, 1, u64::MAX - 1 => true)]
    fn stride_contains(first: u64, limit: u64, step: u64, position: u64) -> bool {
        Stride::new(first, limit, step).contains(position)
    }
    #[test]
    fn stride_members() {
        let s = Stride::new(2, 10, 3);
        let members: Vec<u64> = (0..20).filter(|&x| s.contains(x)).collect();
        assert_eq!(members, vec![2, 5, 8]);
        // empty progressions
        assert!((0..20).all(|x| !Stride::new(5, 5, 1).contains(x)));
        assert!((0..20).all(|x| !Stride::new(6, 5, 1).contains(x)));
    }
    #[test]
    #[should_panic]
    fn stride_zero_step_panics() {
        Stride::new(0, 10, 0);
    }
}
