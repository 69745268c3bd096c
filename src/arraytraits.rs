// Copyright 2026 ndvalue developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::hash;
use std::iter::FromIterator;
use std::ops::Index;

use crate::dimension::{IntoDimension, Ix};
use crate::ArrayValue;

#[cold]
#[inline(never)]
pub(crate) fn array_out_of_bounds() -> ! {
    panic!("ndvalue: index out of bounds");
}

/// Access the element at **index**.
///
/// **Panics** if index is out of bounds.
impl<'a, A, I> Index<I> for ArrayValue<'a, A>
where
    I: AsRef<[Ix]>,
{
    type Output = A;

    #[inline]
    fn index(&self, index: I) -> &A {
        match self.get(index.as_ref()) {
            Some(x) => x,
            None => array_out_of_bounds(),
        }
    }
}

/// Return `true` if the array shapes and all elements of `self` and
/// `other` are equal. Return `false` otherwise.
///
/// Storage (owned or view) and layout do not take part in the comparison.
impl<'a, 'b, A, B> PartialEq<ArrayValue<'b, B>> for ArrayValue<'a, A>
where
    A: PartialEq<B>,
{
    fn eq(&self, rhs: &ArrayValue<'b, B>) -> bool {
        self.shape() == rhs.shape() && self.iter().zip(rhs.iter()).all(|(a, b)| a == b)
    }
}

impl<'a, A: Eq> Eq for ArrayValue<'a, A> {}

impl<'a, A: hash::Hash> hash::Hash for ArrayValue<'a, A> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.shape().hash(state);
        for elt in self.iter() {
            elt.hash(state)
        }
    }
}

/// Cloning a view is cheap; cloning an owned array copies its storage.
impl<'a, A: Clone> Clone for ArrayValue<'a, A> {
    fn clone(&self) -> Self {
        ArrayValue {
            data: self.data.clone(),
            offset: self.offset,
            dim: self.dim,
            strides: self.strides,
        }
    }
}

/// Create a one-dimensional array from a vector (no copying needed).
impl<'a, A> From<Vec<A>> for ArrayValue<'a, A> {
    fn from(v: Vec<A>) -> Self {
        let dim = v.len().into_dimension();
        ArrayValue::from_vec_dim_unchecked(dim, v)
    }
}

/// Create a one-dimensional view of the slice.
impl<'a, A> From<&'a [A]> for ArrayValue<'a, A> {
    fn from(xs: &'a [A]) -> Self {
        let dim = xs.len().into_dimension();
        ArrayValue::view_dim_unchecked(dim, xs)
    }
}

impl<'a, A> FromIterator<A> for ArrayValue<'a, A> {
    fn from_iter<I>(iterable: I) -> ArrayValue<'a, A>
    where
        I: IntoIterator<Item = A>,
    {
        ArrayValue::from(iterable.into_iter().collect::<Vec<A>>())
    }
}
