// Copyright 2026 ndvalue developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::slice;

use crate::dimension::{Dim, IntoDimension};
use crate::{ArrayValue, OwnedValue};

/// Create an [**`ArrayValue`**](crate::ArrayValue) with one, two, three or
/// four dimensions.
///
/// ```
/// use ndvalue::array;
/// let a1 = array![1, 2, 3, 4];
///
/// let a2 = array![[1, 2],
///                 [3, 4]];
///
/// let a3 = array![[[1, 2], [3, 4]],
///                 [[5, 6], [7, 8]]];
///
/// assert_eq!(a1.shape(), &[4]);
/// assert_eq!(a2.shape(), &[2, 2]);
/// assert_eq!(a3.shape(), &[2, 2, 2]);
/// ```
///
/// The elements are cloned into a new owned array.
#[macro_export]
macro_rules! array {
    ($([$([$([$($x:expr),* $(,)*]),+ $(,)*]),+ $(,)*]),+ $(,)*) => {{
        $crate::arr4(&[$([$([$([$($x,)*],)*],)*],)*])
    }};
    ($([$([$($x:expr),* $(,)*]),+ $(,)*]),+ $(,)*) => {{
        $crate::arr3(&[$([$([$($x,)*],)*],)*])
    }};
    ($([$($x:expr),* $(,)*]),+ $(,)*) => {{
        $crate::arr2(&[$([$($x,)*],)*])
    }};
    ($($x:expr),* $(,)*) => {{
        $crate::arr1(&[$($x,)*])
    }};
}

/// Create a zero-dimensional array with the element `x`.
pub fn arr0<A>(x: A) -> OwnedValue<A> {
    ArrayValue::from_scalar(x)
}

/// Create a one-dimensional array with elements from `xs`.
pub fn arr1<A: Clone>(xs: &[A]) -> OwnedValue<A> {
    ArrayValue::from(xs.to_vec())
}

/// Create a two-dimensional array with elements from `xs`.
///
/// ```
/// use ndvalue::arr2;
///
/// let a = arr2(&[[1, 2, 3],
///                [4, 5, 6]]);
/// assert!(
///     a.shape() == [2, 3]
/// );
/// ```
pub fn arr2<A: Clone, const N: usize>(xs: &[[A; N]]) -> OwnedValue<A> {
    let v = xs.iter().flat_map(|row| row.iter().cloned()).collect();
    ArrayValue::from_vec_dim_unchecked((xs.len(), N).into_dimension(), v)
}

/// Create a three-dimensional array with elements from `xs`.
///
/// ```
/// use ndvalue::arr3;
///
/// let a = arr3(&[[[1, 2],
///                 [3, 4]],
///                [[5, 6],
///                 [7, 8]],
///                [[9, 0],
///                 [1, 2]]]);
/// assert!(
///     a.shape() == [3, 2, 2]
/// );
/// ```
pub fn arr3<A: Clone, const N: usize, const M: usize>(xs: &[[[A; M]; N]]) -> OwnedValue<A> {
    let v = xs
        .iter()
        .flat_map(|page| page.iter().flat_map(|row| row.iter().cloned()))
        .collect();
    ArrayValue::from_vec_dim_unchecked((xs.len(), N, M).into_dimension(), v)
}

/// Create a four-dimensional array with elements from `xs`.
pub fn arr4<A: Clone, const N: usize, const M: usize, const K: usize>(
    xs: &[[[[A; K]; M]; N]],
) -> OwnedValue<A> {
    let v = xs
        .iter()
        .flat_map(|cube| {
            cube.iter()
                .flat_map(|page| page.iter().flat_map(|row| row.iter().cloned()))
        })
        .collect();
    ArrayValue::from_vec_dim_unchecked((xs.len(), N, M, K).into_dimension(), v)
}

/// Create a zero-dimensional array view borrowing `x`.
pub fn aview0<A>(x: &A) -> ArrayValue<'_, A> {
    ArrayValue::view_dim_unchecked(Dim::scalar(), slice::from_ref(x))
}

/// Create a one-dimensional array view with elements borrowing `xs`.
///
/// ```
/// use ndvalue::{aview1, s};
///
/// let data = [1, 2, 3, 4];
/// let a = aview1(&data);
/// assert!(a.is_view());
/// assert_eq!(a.slice(&s![..;-1]).unwrap(), aview1(&[4, 3, 2, 1]));
/// ```
pub fn aview1<A>(xs: &[A]) -> ArrayValue<'_, A> {
    ArrayValue::from(xs)
}

/// Create a two-dimensional array view with elements borrowing `xs`.
pub fn aview2<A, const N: usize>(xs: &[[A; N]]) -> ArrayValue<'_, A> {
    let dim = (xs.len(), N).into_dimension();
    // `[[A; N]]` has the layout of `[A]` with `len * N` elements, and the
    // length can not overflow since the slice already spans that memory.
    let data = unsafe { slice::from_raw_parts(xs.as_ptr() as *const A, xs.len() * N) };
    ArrayValue::view_dim_unchecked(dim, data)
}
