//!
//! `SparseFactory` construction parameters of sparse arrays
//!
//! A factory fixes the backend storage (and with it the numeric kind whose
//! zero fills unset positions) and the initial capacity, and then makes
//! arrays of any count.
//!
//! ```
//! use sparsearray::SparseFactory;
//! let factory = SparseFactory::primitive().with_initial_capacity(16).unwrap();
//! let mut v = factory.make(1_000_000);
//! v.set(999_999, 1.0);
//! assert_eq!(v.capacity(), 16);
//! ```
//!
use super::complex::Complex64;
use super::dense::{DenseStorage, PrimitiveStorage};
use super::prob::Prob;
use super::sparse::{SparseArray, INITIAL_CAPACITY};
use super::unit::Value;
use super::Storage;
use crate::error::{Result, SparseError};
use std::marker::PhantomData;

#[derive(Clone, Debug)]
pub struct SparseFactory<S: Storage> {
    /// capacity of the arrays when created
    initial_capacity: usize,
    /// Hidden marker of storage type
    ty: PhantomData<S>,
}

impl<S: Storage> SparseFactory<S> {
    ///
    /// Factory with `INITIAL_CAPACITY`
    ///
    pub fn new() -> SparseFactory<S> {
        SparseFactory {
            initial_capacity: INITIAL_CAPACITY,
            ty: PhantomData,
        }
    }
    pub fn with_initial_capacity(self, initial_capacity: usize) -> Result<SparseFactory<S>> {
        if initial_capacity == 0 {
            Err(SparseError::InvalidCapacity)
        } else {
            Ok(SparseFactory {
                initial_capacity,
                ..self
            })
        }
    }
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }
    ///
    /// Create an empty sparse array of logical length `count`
    ///
    pub fn make(&self, count: u64) -> SparseArray<S> {
        SparseArray::with_capacity(count, self.initial_capacity)
    }
}

impl<S: Storage> Default for SparseFactory<S> {
    fn default() -> Self {
        SparseFactory::new()
    }
}

impl SparseFactory<PrimitiveStorage> {
    /// native `f64`
    pub fn primitive() -> SparseFactory<PrimitiveStorage> {
        SparseFactory::new()
    }
}

impl<T: Value> SparseFactory<DenseStorage<T>> {
    /// any numeric kind, boxed in a `DenseStorage`
    pub fn generic() -> SparseFactory<DenseStorage<T>> {
        SparseFactory::new()
    }
}

impl SparseFactory<DenseStorage<Prob>> {
    /// log-space probability, zero is `p = 0`
    pub fn prob() -> SparseFactory<DenseStorage<Prob>> {
        SparseFactory::new()
    }
}

impl SparseFactory<DenseStorage<Complex64>> {
    /// complex numbers, zero is `0 + 0i`
    pub fn complex() -> SparseFactory<DenseStorage<Complex64>> {
        SparseFactory::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_default() {
        let f = SparseFactory::primitive();
        assert_eq!(f.initial_capacity(), 7);
        let v = f.make(10);
        assert_eq!(v.count(), 10);
        assert_eq!(v.capacity(), 7);
        assert_eq!(v.occupied(), 0);
        assert!(v.is_primitive());
        assert!(v.zero().is_zero());
    }
    #[test]
    fn factory_capacity() {
        let f = SparseFactory::<DenseStorage<i64>>::generic()
            .with_initial_capacity(2)
            .unwrap();
        let mut v = f.make(10);
        v.set(1, 1);
        v.set(2, 2);
        assert_eq!(v.capacity(), 2);
        v.set(3, 3);
        assert_eq!(v.capacity(), 4);
        assert!(!v.is_primitive());
        assert_eq!(
            SparseFactory::primitive().with_initial_capacity(0).err(),
            Some(SparseError::InvalidCapacity)
        );
    }
    #[test]
    fn factory_prob() {
        let f = SparseFactory::prob();
        let v = f.make(4);
        assert!(v.get(2).is_zero());
        assert_eq!(v.get(2), Prob::zero());
        let f32s = SparseFactory::<DenseStorage<f32>>::default().make(3);
        assert_eq!(f32s.get(0), 0.0f32);
    }
    #[test]
    fn factory_complex() {
        let mut v = SparseFactory::complex().make(8);
        assert_eq!(v.get(5), Complex64::new(0.0, 0.0));
        v.set(5, Complex64::new(0.0, 2.0));
        assert!(!v.is_real(5));
        assert!(v.is_real(4));
        assert_eq!(v.capacity(), INITIAL_CAPACITY);
    }
}
