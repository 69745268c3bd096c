// Copyright 2026 ndvalue developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Shapes, strides and index arithmetic for values of rank 0 through 4.

use std::fmt;

use std::iter::zip;
use num_integer::Integer;

use crate::error::{rank_mismatch, ArrayError};
use crate::slice::SliceIndex;

pub use self::broadcast::broadcast_shape;

pub(crate) mod broadcast;

/// Array index type
pub type Ix = usize;
/// Array index type (signed)
pub type Ixs = isize;

/// The largest rank an array value can have.
pub const MAX_RANK: usize = 4;

/// Strides of an array value; only the first `ndim` entries are in use.
pub(crate) type Strides = [Ixs; MAX_RANK];

/// An axis index.
///
/// Axis *0* is the value's outermost axis and *n*-1 is the innermost.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Axis(pub usize);

impl Axis {
    /// Return the index of the axis.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0
    }
}

/// The extents of an array value, tagged with its rank.
///
/// `Dim` is also used as a multi-dimensional index. Entries past `ndim` are
/// always zero, so derived equality and hashing only see the active axes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Dim {
    ndim: u8,
    ix: [Ix; MAX_RANK],
}

impl Dim {
    /// The shape of a scalar: no axes, one element.
    #[inline]
    pub fn scalar() -> Dim {
        Dim::default()
    }

    /// Create a `Dim` from a runtime list of extents.
    ///
    /// **Errors** with `RankMismatch` if there are more than four extents.
    pub fn from_slice(shape: &[Ix]) -> Result<Dim, ArrayError> {
        if shape.len() > MAX_RANK {
            return Err(rank_mismatch(MAX_RANK, shape.len()));
        }
        let mut ix = [0; MAX_RANK];
        ix[..shape.len()].copy_from_slice(shape);
        Ok(Dim {
            ndim: shape.len() as u8,
            ix,
        })
    }

    /// A zero index of rank `ndim`.
    pub(crate) fn zeros(ndim: usize) -> Dim {
        debug_assert!(ndim <= MAX_RANK);
        Dim {
            ndim: ndim as u8,
            ix: [0; MAX_RANK],
        }
    }

    #[inline]
    pub fn ndim(&self) -> usize {
        self.ndim as usize
    }

    #[inline]
    pub fn slice(&self) -> &[Ix] {
        &self.ix[..self.ndim()]
    }

    #[inline]
    pub fn slice_mut(&mut self) -> &mut [Ix] {
        let n = self.ndim();
        &mut self.ix[..n]
    }

    /// Compute the size of the dimension (number of elements)
    #[inline]
    pub fn size(&self) -> usize {
        self.slice().iter().product()
    }

    /// Compute the size while checking for overflow.
    pub fn size_checked(&self) -> Option<usize> {
        self.slice()
            .iter()
            .try_fold(1usize, |s, &a| s.checked_mul(a))
    }

    /// Strides of a contiguous C order ("row major") array of this shape.
    ///
    /// Shape (a, b, c) gives strides (b * c, c, 1). An empty shape gets all
    /// zero strides, since no element can be reached anyway.
    pub(crate) fn default_strides(&self) -> Strides {
        let mut strides = [0; MAX_RANK];
        if self.slice().iter().any(|&d| d == 0) {
            return strides;
        }
        let mut cum_prod = 1;
        for (rs, &dim) in zip(strides[..self.ndim()].iter_mut().rev(), self.slice().iter().rev()) {
            *rs = cum_prod as Ixs;
            cum_prod *= dim;
        }
        strides
    }

    /// The first index in C order, or `None` for an empty shape.
    #[inline]
    pub fn first_index(&self) -> Option<Dim> {
        if self.slice().iter().any(|&d| d == 0) {
            None
        } else {
            Some(Dim::zeros(self.ndim()))
        }
    }

    /// Iteration -- Use self as size, and return next index after `index`
    /// or None if there are no more.
    pub fn next_for(&self, index: Dim) -> Option<Dim> {
        let mut index = index;
        let mut done = false;
        for (&dim, ix) in zip(self.slice(), index.slice_mut()).rev() {
            *ix += 1;
            if *ix == dim {
                *ix = 0;
            } else {
                done = true;
                break;
            }
        }
        if done {
            Some(index)
        } else {
            None
        }
    }

    /// Insert an axis of length `len` before `axis`.
    ///
    /// **Errors** with `RankMismatch` if the result would have more than four axes.
    pub(crate) fn insert_axis(&self, axis: Axis, len: Ix) -> Result<Dim, ArrayError> {
        let n = self.ndim();
        debug_assert!(axis.index() <= n);
        if n == MAX_RANK {
            return Err(rank_mismatch(MAX_RANK, n + 1));
        }
        let mut new = *self;
        new.ndim += 1;
        new.ix.copy_within(axis.index()..n, axis.index() + 1);
        new.ix[axis.index()] = len;
        Ok(new)
    }

    /// Remove `axis`, shifting the following axes down.
    pub(crate) fn remove_axis(&self, axis: Axis) -> Dim {
        let n = self.ndim();
        debug_assert!(axis.index() < n);
        let mut new = *self;
        new.ix.copy_within(axis.index() + 1..n, axis.index());
        new.ix[n - 1] = 0;
        new.ndim -= 1;
        new
    }
}

impl fmt::Debug for Dim {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.slice()).finish()
    }
}

/// Argument conversion into a shape.
///
/// Implemented for `()`, `Ix`, tuples and arrays of up to four extents and
/// for `Dim` itself. Use [`Dim::from_slice`] for shapes only known at runtime.
pub trait IntoDimension {
    fn into_dimension(self) -> Dim;
}

impl IntoDimension for Dim {
    #[inline(always)]
    fn into_dimension(self) -> Dim {
        self
    }
}

impl<'a> IntoDimension for &'a Dim {
    #[inline(always)]
    fn into_dimension(self) -> Dim {
        *self
    }
}

impl IntoDimension for () {
    #[inline(always)]
    fn into_dimension(self) -> Dim {
        Dim::scalar()
    }
}

impl IntoDimension for Ix {
    #[inline(always)]
    fn into_dimension(self) -> Dim {
        Dim {
            ndim: 1,
            ix: [self, 0, 0, 0],
        }
    }
}

impl IntoDimension for (Ix, Ix) {
    #[inline(always)]
    fn into_dimension(self) -> Dim {
        Dim {
            ndim: 2,
            ix: [self.0, self.1, 0, 0],
        }
    }
}

impl IntoDimension for (Ix, Ix, Ix) {
    #[inline(always)]
    fn into_dimension(self) -> Dim {
        Dim {
            ndim: 3,
            ix: [self.0, self.1, self.2, 0],
        }
    }
}

impl IntoDimension for (Ix, Ix, Ix, Ix) {
    #[inline(always)]
    fn into_dimension(self) -> Dim {
        Dim {
            ndim: 4,
            ix: [self.0, self.1, self.2, self.3],
        }
    }
}

macro_rules! impl_into_dimension_array {
    ($($n:expr),*) => {
        $(
            impl IntoDimension for [Ix; $n] {
                #[inline]
                fn into_dimension(self) -> Dim {
                    let mut ix = [0; MAX_RANK];
                    ix[..$n].copy_from_slice(&self);
                    Dim { ndim: $n, ix }
                }
            }
        )*
    };
}

impl_into_dimension_array!(0, 1, 2, 3, 4);

/// Calculate offset from `Ix` stride converting sign properly
#[inline(always)]
pub(crate) fn stride_offset(n: Ix, stride: Ixs) -> isize {
    (n as isize) * stride
}

/// Offset of the element at `index` relative to the first element.
#[inline]
pub(crate) fn index_offset(index: &[Ix], strides: &[Ixs]) -> isize {
    zip(index, strides).map(|(&i, &s)| stride_offset(i, s)).sum()
}

/// Return the offset of `index`, or `None` if it has the wrong rank or
/// lies outside `dim`.
pub(crate) fn index_offset_checked(dim: &Dim, strides: &[Ixs], index: &[Ix]) -> Option<isize> {
    if index.len() != dim.ndim() {
        return None;
    }
    let mut offset = 0;
    for ((&d, &i), &s) in dim.slice().iter().zip(index).zip(strides) {
        if i >= d {
            return None;
        }
        offset += stride_offset(i, s);
    }
    Some(offset)
}

/// Resolve a possibly negative index against an axis of length `len`.
///
/// Negative values count from the back; the result may still lie outside
/// the axis and must be checked by the caller.
#[inline]
pub(crate) fn abs_index(len: Ix, index: Ixs) -> Ixs {
    if index < 0 {
        len as Ixs + index
    } else {
        index
    }
}

/// Number of elements selected by a normalized range.
#[inline]
pub(crate) fn range_len(start: Ixs, stop: Ixs, step: Ixs) -> Ix {
    debug_assert!(start <= stop);
    let m = (stop - start) as Ix;
    let (d, r) = m.div_rem(&step.unsigned_abs());
    d + if r > 0 { 1 } else { 0 }
}

/// Modify an axis' length and stride according to a normalized range and
/// return the offset to its first selected element.
pub(crate) fn do_slice(dim: &mut Ix, stride: &mut Ixs, index: &SliceIndex) -> isize {
    let (start, stop, step) = (index.start, index.stop, index.step);
    debug_assert!(0 <= start && start <= stop && stop as Ix <= *dim);
    debug_assert_ne!(step, 0);
    let m = range_len(start, stop, step);
    let offset = if m == 0 {
        0
    } else if step < 0 {
        // negative steps walk back from the last element of the range
        stride_offset((stop - 1) as Ix, *stride)
    } else {
        stride_offset(start as Ix, *stride)
    };
    *dim = m;
    *stride *= step;
    offset
}

/// Return `true` if two different indices within `dim` reach the same
/// element through `strides`.
///
/// Only zero strides are produced inside this crate (by broadcasting), so
/// that is the only case checked.
pub(crate) fn has_aliasing_strides(dim: &Dim, strides: &[Ixs]) -> bool {
    zip(dim.slice(), strides).any(|(&d, &s)| d > 1 && s == 0)
}
