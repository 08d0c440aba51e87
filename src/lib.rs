//!
//! `sparsearray` Sparse vector of huge logical length
//!
//! Only the non-default entries are stored (as a sorted coordinate array
//! and a parallel dense value store); every unset position reads back as the
//! zero of the numeric kind.
//!
pub mod error;
pub mod vector;

pub use error::{Result, SparseError};
pub use vector::{
    Access1D, Complex64, DenseStorage, Prob, PrimitiveStorage, Scalar, SparseArray, SparseFactory,
    Storage, Stride, Value,
};

#[cfg(test)]
#[macro_use]
extern crate approx;
