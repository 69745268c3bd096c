// Copyright 2026 ndvalue developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for array values.
use num_traits::Zero;

use crate::data_repr::Repr;
use crate::dimension::{Dim, IntoDimension};
use crate::error::{ArrayError, Detail};
use crate::ArrayValue;

macro_rules! size_checked_unwrap {
    ($dim:expr) => {
        match $dim.size_checked() {
            Some(sz) => sz,
            None => panic!("ndvalue: Shape too large, number of elements overflows usize"),
        }
    };
}

impl<'a, A> ArrayValue<'a, A> {
    /// Create an array with copies of `elem`, shape `shape`.
    ///
    /// **Panics** if the number of elements in `shape` would overflow usize.
    ///
    /// ```
    /// use ndvalue::{ArrayValue, arr3};
    ///
    /// let a = ArrayValue::from_elem((2, 2, 2), 1.);
    ///
    /// assert!(
    ///     a == arr3(&[[[1., 1.],
    ///                  [1., 1.]],
    ///                 [[1., 1.],
    ///                  [1., 1.]]])
    /// );
    /// assert!(a.strides() == &[4, 2, 1]);
    /// ```
    pub fn from_elem<Sh>(shape: Sh, elem: A) -> Self
    where
        A: Clone,
        Sh: IntoDimension,
    {
        let dim = shape.into_dimension();
        let size = size_checked_unwrap!(dim);
        Self::from_vec_dim_unchecked(dim, vec![elem; size])
    }

    /// Create an array with zeros, shape `shape`.
    ///
    /// **Panics** if the number of elements in `shape` would overflow usize.
    pub fn zeros<Sh>(shape: Sh) -> Self
    where
        A: Clone + Zero,
        Sh: IntoDimension,
    {
        Self::from_elem(shape, A::zero())
    }

    /// Create an array with default values, shape `shape`
    ///
    /// **Panics** if the number of elements in `shape` would overflow usize.
    pub fn default<Sh>(shape: Sh) -> Self
    where
        A: Default,
        Sh: IntoDimension,
    {
        Self::from_shape_fn(shape, |_| A::default())
    }

    /// Create an array with values created by the function `f`.
    ///
    /// `f` is called with the index of the element to create; the elements
    /// are visited in C order.
    ///
    /// **Panics** if the number of elements in `shape` would overflow usize.
    ///
    /// ```
    /// use ndvalue::{ArrayValue, arr2};
    ///
    /// let a = ArrayValue::from_shape_fn((2, 3), |ix| ix.slice()[0] * 10 + ix.slice()[1]);
    /// assert_eq!(a, arr2(&[[0, 1, 2], [10, 11, 12]]));
    /// ```
    pub fn from_shape_fn<Sh, F>(shape: Sh, mut f: F) -> Self
    where
        Sh: IntoDimension,
        F: FnMut(Dim) -> A,
    {
        let dim = shape.into_dimension();
        let size = size_checked_unwrap!(dim);
        let mut v = Vec::with_capacity(size);
        let mut index = dim.first_index();
        while let Some(ix) = index {
            v.push(f(ix));
            index = dim.next_for(ix);
        }
        Self::from_vec_dim_unchecked(dim, v)
    }

    /// Create an array from a vector with the given shape, in C order.
    ///
    /// **Errors** with `ShapeMismatch` if the length of `v` is not the number
    /// of elements of `shape`.
    ///
    /// ```
    /// use ndvalue::{ArrayValue, ErrorKind, arr2};
    ///
    /// let a = ArrayValue::from_shape_vec((2, 2), vec![1., 2., 3., 4.]);
    /// assert!(a.is_ok() && a.unwrap() == arr2(&[[1., 2.], [3., 4.]]));
    ///
    /// let b = ArrayValue::from_shape_vec((2, 3), vec![1., 2., 3., 4.]);
    /// assert_eq!(b.unwrap_err().kind(), ErrorKind::ShapeMismatch);
    /// ```
    pub fn from_shape_vec<Sh>(shape: Sh, v: Vec<A>) -> Result<Self, ArrayError>
    where
        Sh: IntoDimension,
    {
        let dim = shape.into_dimension();
        if dim.size_checked() != Some(v.len()) {
            return Err(ArrayError::new(Detail::Length {
                shape: dim,
                len: v.len(),
            }));
        }
        Ok(Self::from_vec_dim_unchecked(dim, v))
    }

    /// Create a view of `xs` with the given shape, in C order.
    ///
    /// **Errors** with `ShapeMismatch` if the length of `xs` is not the number
    /// of elements of `shape`.
    pub fn from_shape_slice<Sh>(shape: Sh, xs: &'a [A]) -> Result<Self, ArrayError>
    where
        Sh: IntoDimension,
    {
        let dim = shape.into_dimension();
        if dim.size_checked() != Some(xs.len()) {
            return Err(ArrayError::new(Detail::Length {
                shape: dim,
                len: xs.len(),
            }));
        }
        Ok(Self::view_dim_unchecked(dim, xs))
    }

    /// Create a rank 0 array holding `x`.
    pub fn from_scalar(x: A) -> Self {
        Self::from_vec_dim_unchecked(Dim::scalar(), vec![x])
    }

    /// Create a standard layout view of `xs`; `xs` must hold exactly
    /// `dim.size()` elements.
    pub(crate) fn view_dim_unchecked(dim: Dim, xs: &'a [A]) -> Self {
        debug_assert_eq!(dim.size(), xs.len());
        ArrayValue {
            data: Repr::View(xs),
            offset: 0,
            strides: dim.default_strides(),
            dim,
        }
    }

    /// Create an owned standard layout array; `v` must hold exactly
    /// `dim.size()` elements.
    pub(crate) fn from_vec_dim_unchecked(dim: Dim, v: Vec<A>) -> Self {
        debug_assert_eq!(dim.size(), v.len());
        ArrayValue {
            data: Repr::Owned(v),
            offset: 0,
            strides: dim.default_strides(),
            dim,
        }
    }
}
