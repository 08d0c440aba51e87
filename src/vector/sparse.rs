//!
//! Sparse array that keeps sorted coordinates and a dense value store
//!
//! For example, `vec[c_0] = v_0` and `vec[c_1] = v_1` with `c_0 < c_1`
//! SparseArray.coordinates = [c_0, c_1, UNUSED, ...]
//! SparseArray.values      = [v_0, v_1, zero, ...]
//!
//! When getting non-set position, the zero of the numeric kind is returned.
//!
use super::access::Access1D;
use super::stride::Stride;
use super::unit::{Scalar, Value};
use super::{try_filled, Storage};
use crate::error::{Result, SparseError};
use approx::AbsDiffEq;
use itertools::{EitherOrBoth, Itertools};
use log::{debug, warn};
use std::convert::TryFrom;
use std::ops::Range;

/// Capacity of a freshly created sparse array
pub const INITIAL_CAPACITY: usize = 7;

/// Coordinate of the unused slots. It is never a valid position.
const UNUSED: u64 = u64::MAX;

///
/// Result of the binary search on the occupied coordinates
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    /// the position is stored in the slot
    Found(usize),
    /// the position is not stored and should be inserted at the slot
    InsertAt(usize),
}

impl Location {
    /// slot of the position, or its insertion point
    pub fn slot(self) -> usize {
        match self {
            Location::Found(slot) => slot,
            Location::InsertAt(slot) => slot,
        }
    }
    pub fn is_found(self) -> bool {
        matches!(self, Location::Found(_))
    }
}

///
/// Sparse array of logical length `count`
///
/// * `coordinates[0..occupied)` is strictly increasing
/// * `values.get(slot)` is the value at `coordinates[slot]`
/// * `coordinates.len() == values.capacity()`
///
#[derive(Debug, Clone)]
pub struct SparseArray<S: Storage> {
    /// logical length
    count: u64,
    /// sorted positions of the stored values, padded with `UNUSED`
    coordinates: Vec<u64>,
    /// dense value store with the same capacity as `coordinates`
    values: S,
    /// number of stored values
    occupied: usize,
}

impl<S: Storage> SparseArray<S> {
    ///
    /// Create an empty sparse array whose capacity is `values.capacity()`.
    /// Previous contents of the store are cleared.
    ///
    pub fn new(count: u64, mut values: S) -> SparseArray<S> {
        let capacity = values.capacity();
        values.fill_all(S::Item::zero());
        SparseArray {
            count,
            coordinates: vec![UNUSED; capacity],
            values,
            occupied: 0,
        }
    }
    pub fn with_capacity(count: u64, capacity: usize) -> SparseArray<S> {
        SparseArray::new(count, S::new(capacity))
    }
    ///
    /// Create an empty sparse array with `INITIAL_CAPACITY`
    ///
    pub fn zeros(count: u64) -> SparseArray<S> {
        SparseArray::with_capacity(count, INITIAL_CAPACITY)
    }
    /// Logical length
    pub fn count(&self) -> u64 {
        self.count
    }
    /// Number of stored (coordinate, value) pairs
    pub fn occupied(&self) -> usize {
        self.occupied
    }
    /// Number of slots allocated for the stored pairs
    pub fn capacity(&self) -> usize {
        self.coordinates.len()
    }
    /// Value of every unset position, the zero of the numeric kind
    pub fn zero(&self) -> Scalar<S::Item> {
        Scalar::zero()
    }
    pub fn is_primitive(&self) -> bool {
        S::is_primitive()
    }
    /// Stored positions in ascending order
    pub fn coordinates(&self) -> &[u64] {
        &self.coordinates[..self.occupied]
    }

    ///
    /// Binary search of the position in the occupied coordinates
    ///
    pub fn locate(&self, position: u64) -> Location {
        match self.coordinates[..self.occupied].binary_search(&position) {
            Ok(slot) => Location::Found(slot),
            Err(slot) => Location::InsertAt(slot),
        }
    }

    #[inline]
    fn check(&self, position: u64) {
        assert!(
            position < self.count,
            "position {} is out of range for count {}",
            position,
            self.count
        );
    }
    fn checked(&self, position: u64) -> Result<()> {
        if position < self.count {
            Ok(())
        } else {
            Err(SparseError::OutOfRange {
                position,
                count: self.count,
            })
        }
    }
    ///
    /// Check that `first + i * step < count` for every `i` in `0..n` (`n > 0`)
    ///
    fn check_progression(&self, first: u64, step: u64, n: u64) {
        let last = (n - 1)
            .checked_mul(step)
            .and_then(|offset| first.checked_add(offset));
        match last {
            Some(last) => self.check(last),
            None => panic!(
                "progression from {} by {} is out of range for count {}",
                first, step, self.count
            ),
        }
    }
    /// slot of the stored position
    fn slot_of(&self, position: u64) -> Option<usize> {
        self.check(position);
        match self.locate(position) {
            Location::Found(slot) => Some(slot),
            Location::InsertAt(_) => None,
        }
    }
    ///
    /// Range of slots whose coordinates are in `[first, limit)`
    ///
    fn slots(&self, first: u64, limit: u64) -> Range<usize> {
        let first_slot = self.locate(first).slot();
        if limit <= first {
            first_slot..first_slot
        } else {
            first_slot..self.locate(limit).slot()
        }
    }

    //
    // point access
    //

    ///
    /// Get the value at the position.
    ///
    /// Panics if `position >= count`.
    pub fn get(&self, position: u64) -> S::Item {
        match self.slot_of(position) {
            Some(slot) => self.values.get(slot),
            None => S::Item::zero(),
        }
    }
    pub fn try_get(&self, position: u64) -> Result<S::Item> {
        self.checked(position)?;
        Ok(self.get(position))
    }
    pub fn double_value(&self, position: u64) -> f64 {
        match self.slot_of(position) {
            Some(slot) => self.values.double_value(slot),
            None => S::Item::zero().to_f64(),
        }
    }
    pub fn to_scalar(&self, position: u64) -> Scalar<S::Item> {
        match self.slot_of(position) {
            Some(slot) => self.values.to_scalar(slot),
            None => Scalar::zero(),
        }
    }
    ///
    /// Set the value at the position.
    /// A new position is inserted keeping the coordinates sorted, even if the
    /// value is zero.
    ///
    /// Panics if `position >= count`.
    pub fn set(&mut self, position: u64, value: S::Item) {
        self.check(position);
        match self.locate(position) {
            Location::Found(slot) => self.values.set(slot, value),
            Location::InsertAt(slot) => {
                self.make_room(slot, position);
                self.values.set(slot, value);
            }
        }
    }
    pub fn try_set(&mut self, position: u64, value: S::Item) -> Result<()> {
        self.checked(position)?;
        self.set(position, value);
        Ok(())
    }
    ///
    /// `set` with a native double
    ///
    pub fn set_f64(&mut self, position: u64, value: f64) {
        self.check(position);
        match self.locate(position) {
            Location::Found(slot) => self.values.set_f64(slot, value),
            Location::InsertAt(slot) => {
                self.make_room(slot, position);
                self.values.set_f64(slot, value);
            }
        }
    }
    ///
    /// Open the slot `k` for the position, growing the arrays to double
    /// capacity if every slot is occupied.
    /// The value of slot `k` is left for the caller to write.
    ///
    fn make_room(&mut self, k: usize, position: u64) {
        let n = self.occupied;
        if n < self.capacity() {
            self.coordinates.copy_within(k..n, k + 1);
            for i in (k..n).rev() {
                let value = self.values.get(i);
                self.values.set(i + 1, value);
            }
            self.coordinates[k] = position;
        } else {
            let old_capacity = self.capacity();
            let new_capacity = (old_capacity * 2).max(1);
            debug!(
                "SparseArray grows {} -> {} (occupied={})",
                old_capacity, new_capacity, n
            );
            let mut coordinates = vec![UNUSED; new_capacity];
            let mut values = S::new(new_capacity);
            coordinates[..k].copy_from_slice(&self.coordinates[..k]);
            coordinates[k] = position;
            coordinates[k + 1..n + 1].copy_from_slice(&self.coordinates[k..n]);
            for i in 0..k {
                values.set(i, self.values.get(i));
            }
            for i in k..n {
                values.set(i + 1, self.values.get(i));
            }
            self.coordinates = coordinates;
            self.values = values;
        }
        self.occupied += 1;

        debug_assert!(self.occupied <= self.capacity());
        debug_assert_eq!(self.coordinates.len(), self.values.capacity());
        debug_assert!(k == 0 || self.coordinates[k - 1] < position);
        debug_assert!(k + 1 == self.occupied || position < self.coordinates[k + 1]);
    }

    //
    // predicates
    //

    pub fn is_zero(&self, position: u64) -> bool {
        self.slot_of(position)
            .map_or(true, |slot| self.values.is_zero(slot))
    }
    pub fn is_nan(&self, position: u64) -> bool {
        self.slot_of(position)
            .map_or(false, |slot| self.values.is_nan(slot))
    }
    pub fn is_infinite(&self, position: u64) -> bool {
        self.slot_of(position)
            .map_or(false, |slot| self.values.is_infinite(slot))
    }
    pub fn is_positive(&self, position: u64) -> bool {
        self.slot_of(position)
            .map_or(false, |slot| self.values.is_positive(slot))
    }
    pub fn is_real(&self, position: u64) -> bool {
        self.slot_of(position)
            .map_or(true, |slot| self.values.is_real(slot))
    }
    pub fn is_absolute(&self, position: u64) -> bool {
        self.slot_of(position)
            .map_or(true, |slot| self.values.is_absolute(slot))
    }

    //
    // fill
    //

    ///
    /// Fill every position with the value.
    ///
    /// Filling with zero forgets every stored value (capacity is kept).
    /// Filling with non-zero makes every position stored, i.e. the array
    /// becomes dense.
    ///
    pub fn fill_all(&mut self, value: S::Item) -> Result<()> {
        if value.is_zero() {
            self.values.fill_all(S::Item::zero());
            let n = self.occupied;
            for c in self.coordinates[..n].iter_mut() {
                *c = UNUSED;
            }
            self.occupied = 0;
        } else {
            let size = self.dense_size()?;
            warn!(
                "SparseArray filled with non-zero value {:?}: all {} positions are stored",
                value, self.count
            );
            let capacity = size.max(self.capacity());
            let mut coordinates = try_filled(capacity, UNUSED)?;
            for (position, c) in coordinates[..size].iter_mut().enumerate() {
                *c = position as u64;
            }
            if capacity != self.values.capacity() {
                self.values = S::try_new(capacity)?;
            }
            self.coordinates = coordinates;
            self.occupied = size;
            self.values.fill_all(value);
        }
        debug_assert_eq!(self.coordinates.len(), self.values.capacity());
        Ok(())
    }
    ///
    /// Overwrite the stored values in `[first, limit)`.
    ///
    pub fn fill_range(&mut self, first: u64, limit: u64, value: S::Item) {
        self.fill(first, limit, 1, value)
    }
    ///
    /// Overwrite the stored values on the progression.
    /// Unset positions are not inserted.
    ///
    pub fn fill(&mut self, first: u64, limit: u64, step: u64, value: S::Item) {
        let stride = Stride::new(first, limit, step);
        for slot in self.slots(first, limit) {
            if stride.contains(self.coordinates[slot]) {
                self.values.set(slot, value);
            }
        }
    }

    //
    // stride-filtered traversal
    //

    ///
    /// Call the visitor on every stored value on the progression.
    ///
    pub fn visit<F>(&self, first: u64, limit: u64, step: u64, mut visitor: F)
    where
        F: FnMut(S::Item),
    {
        let stride = Stride::new(first, limit, step);
        for slot in self.slots(first, limit) {
            if stride.contains(self.coordinates[slot]) {
                visitor(self.values.get(slot));
            }
        }
    }
    ///
    /// Replace every stored value `x` on the progression with `f(x)`.
    ///
    /// `f(0)` must be zero, otherwise unset positions would also change and
    /// `SparseError::ZeroModification` is returned without modifying anything.
    ///
    pub fn modify<F>(&mut self, first: u64, limit: u64, step: u64, mut f: F) -> Result<()>
    where
        F: FnMut(S::Item) -> S::Item,
    {
        let stride = Stride::new(first, limit, step);
        let zero = S::Item::zero();
        ensure_zero_preserving(f(zero))?;
        for slot in self.slots(first, limit) {
            if stride.contains(self.coordinates[slot]) {
                let value = self.values.get(slot);
                self.values.set(slot, f(value));
            }
        }
        Ok(())
    }
    ///
    /// Replace every stored value `x` at `p` on the progression with
    /// `f(left[p], x)`. `f(0, 0)` must be zero.
    ///
    pub fn modify_left<A, F>(
        &mut self,
        first: u64,
        limit: u64,
        step: u64,
        left: &A,
        mut f: F,
    ) -> Result<()>
    where
        A: Access1D<S::Item> + ?Sized,
        F: FnMut(S::Item, S::Item) -> S::Item,
    {
        let stride = Stride::new(first, limit, step);
        let zero = S::Item::zero();
        ensure_zero_preserving(f(zero, zero))?;
        for slot in self.slots(first, limit) {
            let position = self.coordinates[slot];
            if stride.contains(position) {
                let value = self.values.get(slot);
                self.values.set(slot, f(left.at(position), value));
            }
        }
        Ok(())
    }
    ///
    /// Replace every stored value `x` at `p` on the progression with
    /// `f(x, right[p])`. `f(0, 0)` must be zero.
    ///
    pub fn modify_right<A, F>(
        &mut self,
        first: u64,
        limit: u64,
        step: u64,
        mut f: F,
        right: &A,
    ) -> Result<()>
    where
        A: Access1D<S::Item> + ?Sized,
        F: FnMut(S::Item, S::Item) -> S::Item,
    {
        let stride = Stride::new(first, limit, step);
        let zero = S::Item::zero();
        ensure_zero_preserving(f(zero, zero))?;
        for slot in self.slots(first, limit) {
            let position = self.coordinates[slot];
            if stride.contains(position) {
                let value = self.values.get(slot);
                self.values.set(slot, f(value, right.at(position)));
            }
        }
        Ok(())
    }
    ///
    /// Position of the stored value with the largest magnitude on the
    /// progression. The lowest position wins ties.
    ///
    /// `None` if no stored value on the progression is larger than zero
    /// in magnitude.
    ///
    pub fn index_of_largest(&self, first: u64, limit: u64, step: u64) -> Option<u64> {
        let stride = Stride::new(first, limit, step);
        let mut largest = 0.0;
        let mut ret = None;
        for slot in self.slots(first, limit) {
            let position = self.coordinates[slot];
            if stride.contains(position) {
                let magnitude = self.values.get(slot).magnitude();
                if magnitude > largest {
                    largest = magnitude;
                    ret = Some(position);
                }
            }
        }
        ret
    }
    ///
    /// Are all values on the progression zero?
    ///
    pub fn is_zeros(&self, first: u64, limit: u64, step: u64) -> bool {
        let stride = Stride::new(first, limit, step);
        self.slots(first, limit)
            .filter(|&slot| stride.contains(self.coordinates[slot]))
            .all(|slot| self.values.is_zero(slot))
    }

    //
    // swap
    //

    ///
    /// Swap the values of `first_a + i * step` and `first_b + i * step`
    /// for `i` in `0..count`.
    ///
    /// Panics before swapping anything if a position of either progression
    /// is out of range.
    pub fn exchange(&mut self, first_a: u64, first_b: u64, step: u64, count: u64) {
        if count == 0 {
            return;
        }
        self.check_progression(first_a, step, count);
        self.check_progression(first_b, step, count);
        for i in 0..count {
            let a = first_a + i * step;
            let b = first_b + i * step;
            let value_a = self.get(a);
            let value_b = self.get(b);
            self.set(a, value_b);
            self.set(b, value_a);
        }
    }

    //
    // conversion
    //

    fn dense_size(&self) -> Result<usize> {
        let max_size = isize::MAX as usize / std::mem::size_of::<S::Item>().max(1);
        usize::try_from(self.count)
            .ok()
            .filter(|&size| size <= max_size)
            .ok_or(SparseError::TooLarge { count: self.count })
    }
    ///
    /// Convert to the dense storage of size `count` with same contents.
    ///
    pub fn densify(&self) -> Result<S> {
        let size = self.dense_size()?;
        let mut dense = S::try_new(size)?;
        for slot in 0..self.occupied {
            dense.set(self.coordinates[slot] as usize, self.values.get(slot));
        }
        Ok(dense)
    }
    ///
    /// Get an iterator on stored (position, value) in ascending order
    ///
    pub fn iter<'a>(&'a self) -> impl 'a + Iterator<Item = (u64, S::Item)> {
        self.values
            .iter()
            .take(self.occupied)
            .map(move |(slot, value)| (self.coordinates[slot], value))
    }
    ///
    /// Get an iterator on the value of every position in `0..count`
    ///
    pub fn iter_all<'a>(&'a self) -> impl 'a + Iterator<Item = S::Item> {
        let zero = S::Item::zero();
        (0..self.count)
            .merge_join_by(self.iter(), |position, (c, _)| position.cmp(c))
            .filter_map(move |e| match e {
                EitherOrBoth::Both(_, (_, value)) => Some(value),
                EitherOrBoth::Left(_) => Some(zero),
                EitherOrBoth::Right(_) => None,
            })
    }
}

fn ensure_zero_preserving<T: Value>(image: T) -> Result<()> {
    if image.is_zero() {
        Ok(())
    } else {
        debug!("rejected modification: f(0)={:?}", image);
        Err(SparseError::ZeroModification(format!("{:?}", image)))
    }
}

impl<S: Storage> Access1D<S::Item> for SparseArray<S> {
    fn count(&self) -> u64 {
        self.count
    }
    fn at(&self, position: u64) -> S::Item {
        self.get(position)
    }
}

/// Two arrays are equal if every position has the same value,
/// regardless of capacity or stored zeros.
impl<S: Storage> PartialEq for SparseArray<S> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count
            && self
                .coordinates()
                .iter()
                .merge(other.coordinates().iter())
                .dedup()
                .all(|&p| self.get(p) == other.get(p))
    }
}

/// for approx `assert_abs_diff_eq`
impl<S> AbsDiffEq for SparseArray<S>
where
    S: Storage,
    S::Item: AbsDiffEq,
    <S::Item as AbsDiffEq>::Epsilon: Copy,
{
    type Epsilon = <S::Item as AbsDiffEq>::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        S::Item::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.count == other.count
            && self
                .coordinates()
                .iter()
                .merge(other.coordinates().iter())
                .dedup()
                .all(|&p| self.get(p).abs_diff_eq(&other.get(p), epsilon))
    }
}
