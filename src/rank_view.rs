// Copyright 2026 ndvalue developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::ops::Index;

use crate::dimension::{index_offset, Dim, Ix, Ixs, Strides};
use crate::iterators::Iter;
use crate::ArrayValue;

/// A read-only view of an array value whose rank `N` is known statically.
///
/// Returned by the rank accessors [`.vector()`](ArrayValue::vector),
/// [`.matrix()`](ArrayValue::matrix), [`.tensor()`](ArrayValue::tensor),
/// [`.quatern()`](ArrayValue::quatern) and the checked
/// [`.ranked()`](ArrayValue::ranked).
#[derive(Debug)]
pub struct RankView<'v, A, const N: usize> {
    array: &'v ArrayValue<'v, A>,
    dim: [Ix; N],
    strides: [Ixs; N],
}

/// one-dimensional view
pub type VectorView<'v, A> = RankView<'v, A, 1>;
/// two-dimensional view
pub type MatrixView<'v, A> = RankView<'v, A, 2>;
/// three-dimensional view
pub type TensorView<'v, A> = RankView<'v, A, 3>;
/// four-dimensional view
pub type QuaternView<'v, A> = RankView<'v, A, 4>;

impl<'v, A, const N: usize> RankView<'v, A, N> {
    pub(crate) fn new(array: &'v ArrayValue<'v, A>, dim: &Dim, strides: &Strides) -> Self {
        debug_assert_eq!(dim.ndim(), N);
        let mut d = [0; N];
        let mut s = [0; N];
        d.copy_from_slice(dim.slice());
        s.copy_from_slice(&strides[..N]);
        RankView {
            array,
            dim: d,
            strides: s,
        }
    }

    /// The extents of the view's axes.
    #[inline]
    pub fn shape(&self) -> [Ix; N] {
        self.dim
    }

    /// Return a reference to the element at `index`, or `None` if it is out
    /// of bounds.
    pub fn get(&self, index: [Ix; N]) -> Option<&'v A> {
        if index.iter().zip(&self.dim).any(|(&i, &d)| i >= d) {
            return None;
        }
        let offset = self.array.offset as isize + index_offset(&index, &self.strides);
        self.array.data.as_slice().get(offset as usize)
    }

    /// Return an iterator over the elements in logical C order.
    pub fn iter(&self) -> Iter<'v, A> {
        self.array.iter()
    }
}

impl<'v, A, const N: usize> Clone for RankView<'v, A, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'v, A, const N: usize> Copy for RankView<'v, A, N> {}

impl<'v, A, const N: usize> Index<[Ix; N]> for RankView<'v, A, N> {
    type Output = A;

    /// **Panics** if the index is out of bounds.
    #[inline]
    fn index(&self, index: [Ix; N]) -> &A {
        match self.get(index) {
            Some(x) => x,
            None => panic!("RankView: index {:?} out of bounds for shape {:?}", index, self.dim),
        }
    }
}
