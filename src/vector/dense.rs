//!
//! Dense storages that use `std::Vec`
//!
//! * `PrimitiveStorage` native `f64` fast path
//! * `DenseStorage<T>` any numeric kind implementing `Value`
//!
use super::unit::Value;
use super::{try_filled, Storage};
use crate::error::Result;

/// Dense storage of native doubles
///
/// Values are written and read without going through `Value` conversions.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveStorage(Vec<f64>);

impl PrimitiveStorage {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
    pub fn to_vec(&self) -> Vec<f64> {
        self.0.clone()
    }
}

impl Storage for PrimitiveStorage {
    type Item = f64;
    fn new(capacity: usize) -> PrimitiveStorage {
        PrimitiveStorage(vec![0.0; capacity])
    }
    fn try_new(capacity: usize) -> Result<PrimitiveStorage> {
        try_filled(capacity, 0.0).map(PrimitiveStorage)
    }
    #[inline]
    fn capacity(&self) -> usize {
        self.0.len()
    }
    #[inline]
    fn get(&self, slot: usize) -> f64 {
        self.0[slot]
    }
    #[inline]
    fn set(&mut self, slot: usize, value: f64) {
        self.0[slot] = value;
    }
    #[inline]
    fn double_value(&self, slot: usize) -> f64 {
        self.0[slot]
    }
    #[inline]
    fn set_f64(&mut self, slot: usize, value: f64) {
        self.0[slot] = value;
    }
    fn fill_all(&mut self, value: f64) {
        for x in self.0.iter_mut() {
            *x = value;
        }
    }
    fn is_primitive() -> bool {
        true
    }
    fn is_zero(&self, slot: usize) -> bool {
        self.0[slot] == 0.0
    }
}

/// Dense storage powered by `std::Vec` for any numeric kind
///
/// Fresh slots hold `T::zero()`.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseStorage<T>(Vec<T>);

impl<T: Value> DenseStorage<T> {
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }
    pub fn to_vec(&self) -> Vec<T> {
        self.0.clone()
    }
}

impl<T: Value> Storage for DenseStorage<T> {
    type Item = T;
    fn new(capacity: usize) -> DenseStorage<T> {
        DenseStorage(vec![T::zero(); capacity])
    }
    fn try_new(capacity: usize) -> Result<DenseStorage<T>> {
        try_filled(capacity, T::zero()).map(DenseStorage)
    }
    #[inline]
    fn capacity(&self) -> usize {
        self.0.len()
    }
    #[inline]
    fn get(&self, slot: usize) -> T {
        self.0[slot]
    }
    #[inline]
    fn set(&mut self, slot: usize, value: T) {
        self.0[slot] = value;
    }
    fn fill_all(&mut self, value: T) {
        for x in self.0.iter_mut() {
            *x = value;
        }
    }
    fn is_primitive() -> bool {
        false
    }
}
