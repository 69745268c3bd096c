// Copyright 2026 ndvalue developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![crate_name = "ndvalue"]
#![doc(html_root_url = "https://docs.rs/ndvalue/0.1/")]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! The `ndvalue` crate provides [`ArrayValue`], the array value of an
//! array-expression evaluator: one element type, rank 0 (scalar) through
//! rank 4, over either owned or borrowed storage.
//!
//! - [`ArrayValue`]: the value type, with owned-vs-view aliasing tracked by
//!   its lifetime rather than a runtime flag
//! - [`slice`]: index specifications (ranges, integer lists, boolean masks),
//!   their normalization and the [`s![]`](s!) macro
//! - NumPy-style extraction and assignment through a selection
//!   ([`ArrayValue::slice`], [`ArrayValue::slice_assign`])
//! - Broadcasting by stride-0 replication ([`ArrayValue::broadcast`])
//! - [`coerce`]: conversion of opaque [`Value`] operands into typed arrays
//! - [`ops`]: the boundary used by the evaluator, which takes opaque operands
//!   and attaches the operation name to errors
//!
//! ## Crate Feature Flags
//!
//! - `std`: enabled by default.
//! - `approx`: implementations of the `approx` comparison traits for
//!   `ArrayValue`.
//!
//! ## Example
//!
//! ```
//! use ndvalue::{arr2, s};
//!
//! let a = arr2(&[[1, 2, 3],
//!                [4, 5, 6]]);
//! let col = a.slice(&s![.., -1]).unwrap();
//! assert!(col.is_view());
//! assert_eq!(col, ndvalue::arr1(&[3, 6]));
//! ```

#[macro_use]
mod macro_utils;

pub use crate::dimension::{broadcast_shape, Axis, Dim, IntoDimension, Ix, Ixs, MAX_RANK};
pub use crate::element::{Element, ElementKind};
pub use crate::error::{ArrayError, Context, Detail, ErrorKind};
pub use crate::free_functions::*;
pub use crate::iterators::{IndexedIter, Iter};
pub use crate::rank_view::{MatrixView, QuaternView, RankView, TensorView, VectorView};
pub use crate::slice::{AxisArg, IndexKind, IndexSpec, Slice, SliceIndex};
pub use crate::value::Value;

use crate::data_repr::Repr;
use crate::dimension::Strides;

mod array_approx;
mod arrayformat;
mod arraytraits;
pub mod coerce;
mod data_repr;
mod dimension;
mod dispatch;
mod element;
mod error;
mod free_functions;
mod impl_constructors;
mod impl_methods;
mod iterators;
pub mod ops;
pub mod prelude;
mod rank_view;
pub mod slice;
mod value;

/// An array value of rank 0 through 4 over owned or borrowed storage.
///
/// `ArrayValue<'a, A>` either owns its elements (a `Vec<A>`) or is a
/// *view* that borrows them for the lifetime `'a` from another value. Use
/// [`.is_view()`](ArrayValue::is_view) to tell them apart; an owned value
/// has no borrow and can be given any lifetime (`ArrayValue<'static, A>`).
///
/// Elements are laid out through an offset and a signed stride per axis,
/// so ranges with any step and broadcasts are views; only gathering
/// arbitrary positions (integer lists, masks) allocates.
///
/// ## Aliasing
///
/// A view is never written to. Every mutating method first promotes a view
/// to owned storage (copy on write); an owned value is mutated in place.
/// Because a view keeps its source borrowed, the source can not be
/// mutated while the view is alive.
///
/// ## Rank
///
/// The rank is a runtime property. Branch on [`.ndim()`](ArrayValue::ndim)
/// and then use the typed accessors [`.scalar()`](ArrayValue::scalar),
/// [`.vector()`](ArrayValue::vector), [`.matrix()`](ArrayValue::matrix),
/// [`.tensor()`](ArrayValue::tensor) and [`.quatern()`](ArrayValue::quatern).
///
/// ## Indexing and Slicing
///
/// Each axis is selected by an [`AxisArg`]: the whole axis, a range with
/// step, a single index (which removes the axis), an integer list or a
/// boolean mask. Negative indices count from the back of the axis.
///
/// ```
/// use ndvalue::{arr2, s};
///
/// let a = arr2(&[[1, 2, 3, 4],
///                [5, 6, 7, 8],
///                [9, 10, 11, 12]]);
///
/// let b = a.slice(&s![..;2, vec![0, -1]]).unwrap();
/// assert_eq!(b, arr2(&[[1, 4],
///                      [9, 12]]));
/// assert!(!b.is_view());
/// ```
pub struct ArrayValue<'a, A> {
    /// Data buffer / ownership information.
    data: Repr<'a, A>,
    /// Index of the first element in `data`.
    offset: usize,
    /// The lengths of the axes.
    dim: Dim,
    /// The element count between successive elements along each axis.
    strides: Strides,
}

/// An owned array value.
pub type OwnedValue<A> = ArrayValue<'static, A>;
