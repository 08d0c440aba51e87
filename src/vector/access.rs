//!
//! Read access by logical position
//!
//! Operand of the binary `modify` on a sparse array: `f(left[p], stored)` or
//! `f(stored, right[p])` read the other side through this trait.
//!
use super::dense::{DenseStorage, PrimitiveStorage};
use super::unit::Value;
use super::Storage;

pub trait Access1D<T: Copy> {
    /// number of logical positions
    fn count(&self) -> u64;
    /// value at the logical position
    fn at(&self, position: u64) -> T;
}

impl<T: Copy> Access1D<T> for [T] {
    fn count(&self) -> u64 {
        self.len() as u64
    }
    fn at(&self, position: u64) -> T {
        self[position as usize]
    }
}

impl<T: Copy> Access1D<T> for Vec<T> {
    fn count(&self) -> u64 {
        self.len() as u64
    }
    fn at(&self, position: u64) -> T {
        self[position as usize]
    }
}

impl<T: Value> Access1D<T> for DenseStorage<T> {
    fn count(&self) -> u64 {
        self.capacity() as u64
    }
    fn at(&self, position: u64) -> T {
        self.get(position as usize)
    }
}

impl Access1D<f64> for PrimitiveStorage {
    fn count(&self) -> u64 {
        self.capacity() as u64
    }
    fn at(&self, position: u64) -> f64 {
        self.get(position as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum<A: Access1D<f64> + ?Sized>(a: &A) -> f64 {
        (0..a.count()).map(|i| a.at(i)).sum()
    }

    #[test]
    fn access_slice_and_storage() {
        let v = vec![1.0, 2.0, 3.0];
        assert_eq!(sum(&v), 6.0);
        assert_eq!(sum(&v[1..]), 5.0);
        let mut s = PrimitiveStorage::new(4);
        s.set(2, 4.5);
        assert_eq!(sum(&s), 4.5);
        assert_eq!(Access1D::count(&s), 4);
    }
}
