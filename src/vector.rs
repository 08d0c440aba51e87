//!
//! `vector` Sparse array and its backend storages
//!
//!
pub mod access;
pub mod complex;
pub mod dense;
pub mod factory;
pub mod prob;
pub mod sparse;
pub mod stride;
pub mod unit;
pub use access::Access1D;
pub use complex::Complex64;
pub use dense::{DenseStorage, PrimitiveStorage};
pub use factory::SparseFactory;
pub use prob::Prob;
pub use sparse::SparseArray;
pub use stride::Stride;
pub use unit::{Scalar, Value};

use crate::error::{Result, SparseError};

///
/// Allocate `vec![value; capacity]`, failing gracefully when the memory
/// cannot be reserved
///
pub(crate) fn try_filled<T: Copy>(capacity: usize, value: T) -> Result<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(capacity)
        .map_err(|_| SparseError::TooLarge {
            count: capacity as u64,
        })?;
    v.resize(capacity, value);
    Ok(v)
}

/// Backend storage of `SparseArray`
/// an abstruction of a dense array with fixed capacity that is
/// readable/writable by slot.
///
/// * `new` / `try_new`
///     create storage with fixed capacity and filled with the zero value
/// * `capacity`
///     get the fixed capacity
/// * `get` / `set`
///     read or write the value in the slot
/// * `double_value` / `set_f64`
///     read or write the value in the slot as a native `f64`
///
/// The sparse array keeps `(coordinate, value)` pairs so that the value of
/// `coordinates[slot]` is `storage.get(slot)`.
///
pub trait Storage: Clone + Sized {
    /// Item type that this storage stores.
    ///
    type Item: Value;
    ///
    /// Create a new storage with fixed capacity and filled with the zero
    fn new(capacity: usize) -> Self;
    ///
    /// `new` that reports an allocation failure as `SparseError::TooLarge`
    /// instead of aborting
    fn try_new(capacity: usize) -> Result<Self>;
    ///
    /// Get the capacity of this storage
    fn capacity(&self) -> usize;
    ///
    /// Get the value at the slot
    fn get(&self, slot: usize) -> Self::Item;
    ///
    /// Set the value at the slot
    fn set(&mut self, slot: usize, value: Self::Item);
    ///
    /// Get the value at the slot as f64
    fn double_value(&self, slot: usize) -> f64 {
        self.get(slot).to_f64()
    }
    ///
    /// Set the value at the slot from f64
    fn set_f64(&mut self, slot: usize, value: f64) {
        self.set(slot, Self::Item::from_f64(value))
    }
    ///
    /// Overwrite every slot with the value
    fn fill_all(&mut self, value: Self::Item);
    ///
    /// Check if the item is stored as native `f64` or not
    fn is_primitive() -> bool;

    fn to_scalar(&self, slot: usize) -> Scalar<Self::Item> {
        Scalar::new(self.get(slot))
    }
    fn is_zero(&self, slot: usize) -> bool {
        self.get(slot).is_zero()
    }
    fn is_nan(&self, slot: usize) -> bool {
        self.get(slot).is_nan()
    }
    fn is_infinite(&self, slot: usize) -> bool {
        self.get(slot).is_infinite()
    }
    fn is_positive(&self, slot: usize) -> bool {
        self.get(slot).is_positive()
    }
    fn is_real(&self, slot: usize) -> bool {
        self.get(slot).is_real()
    }
    fn is_absolute(&self, slot: usize) -> bool {
        self.get(slot).is_absolute()
    }
    ///
    /// get an iterator of (slot, Self::Item) on the storage
    fn iter<'a>(&'a self) -> StorageIterator<'a, Self> {
        StorageIterator {
            slot: 0,
            storage: self,
        }
    }
}

///
/// Iterator struct of Storage
pub struct StorageIterator<'a, S: Storage> {
    /// current slot
    slot: usize,
    /// reference of the storage
    storage: &'a S,
}

impl<'a, S: Storage> Iterator for StorageIterator<'a, S> {
    type Item = (usize, S::Item);
    fn next(&mut self) -> Option<Self::Item> {
        if self.slot < self.storage.capacity() {
            let slot = self.slot;
            let item = self.storage.get(slot);
            self.slot += 1;
            Some((slot, item))
        } else {
            None
        }
    }
}
