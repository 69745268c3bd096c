// Copyright 2026 ndvalue developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;
use std::iter::FusedIterator;

use crate::dimension::{index_offset, Dim, Strides};
use crate::ArrayValue;

/// Base for array iterators: walks the indices of `dim` in C order and
/// yields the storage position of each.
struct Baseiter<'v, A> {
    data: &'v [A],
    offset: usize,
    dim: Dim,
    strides: Strides,
    index: Option<Dim>,
}

impl<'v, A> Baseiter<'v, A> {
    fn new(array: &'v ArrayValue<'_, A>) -> Self {
        Baseiter {
            data: array.data.as_slice(),
            offset: array.offset,
            dim: array.dim,
            strides: array.strides,
            index: array.dim.first_index(),
        }
    }

    #[inline]
    fn next(&mut self) -> Option<(Dim, usize)> {
        let index = self.index?;
        let offset = self.offset as isize + index_offset(index.slice(), &self.strides);
        self.index = self.dim.next_for(index);
        Some((index, offset as usize))
    }

    fn len(&self) -> usize {
        match self.index {
            None => 0,
            Some(ref ix) => {
                let gone = self
                    .dim
                    .default_strides()
                    .iter()
                    .zip(ix.slice())
                    .fold(0, |s, (&a, &b)| s + a as usize * b);
                self.dim.size() - gone
            }
        }
    }
}

impl<'v, A> Clone for Baseiter<'v, A> {
    fn clone(&self) -> Self {
        Baseiter {
            data: self.data,
            offset: self.offset,
            dim: self.dim,
            strides: self.strides,
            index: self.index,
        }
    }
}

/// An iterator over the elements of an array, in logical C order.
///
/// Iterator element type is `&'v A`.
///
/// See [`.iter()`](ArrayValue::iter) for more information.
pub struct Iter<'v, A> {
    inner: Baseiter<'v, A>,
}

impl<'v, A> Iter<'v, A> {
    pub(crate) fn new(array: &'v ArrayValue<'_, A>) -> Self {
        Iter {
            inner: Baseiter::new(array),
        }
    }
}

impl<'v, A> Iterator for Iter<'v, A> {
    type Item = &'v A;

    #[inline]
    fn next(&mut self) -> Option<&'v A> {
        let data = self.inner.data;
        self.inner.next().map(|(_, i)| &data[i])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<'v, A> ExactSizeIterator for Iter<'v, A> {}

impl<'v, A> Clone for Iter<'v, A> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<'v, A> FusedIterator for Iter<'v, A> {}

impl<'v, A: fmt::Debug> fmt::Debug for Iter<'v, A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Iter")
            .field("dim", &self.inner.dim)
            .field("index", &self.inner.index)
            .finish()
    }
}

/// An iterator over the indices and elements of an array, in logical C order.
///
/// Iterator element type is `(Dim, &'v A)`.
///
/// See [`.indexed_iter()`](ArrayValue::indexed_iter) for more information.
pub struct IndexedIter<'v, A> {
    inner: Baseiter<'v, A>,
}

impl<'v, A> IndexedIter<'v, A> {
    pub(crate) fn new(array: &'v ArrayValue<'_, A>) -> Self {
        IndexedIter {
            inner: Baseiter::new(array),
        }
    }
}

impl<'v, A> Iterator for IndexedIter<'v, A> {
    type Item = (Dim, &'v A);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let data = self.inner.data;
        self.inner.next().map(|(index, i)| (index, &data[i]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<'v, A> ExactSizeIterator for IndexedIter<'v, A> {}

impl<'v, A> Clone for IndexedIter<'v, A> {
    fn clone(&self) -> Self {
        IndexedIter {
            inner: self.inner.clone(),
        }
    }
}

impl<'v, A> FusedIterator for IndexedIter<'v, A> {}

#[cfg(test)]
mod tests {
    use crate::{arr2, s};

    #[test]
    fn exact_size_on_strided_view() {
        let a = arr2(&[[1, 2, 3], [4, 5, 6]]);
        let v = a.slice(&s![.., ..;-2]).unwrap();
        let mut it = v.iter();
        assert_eq!(it.len(), 4);
        it.next();
        assert_eq!(it.len(), 3);
        assert_eq!(it.cloned().collect::<Vec<_>>(), vec![1, 6, 4]);
    }

    #[test]
    fn indexed() {
        let a = arr2(&[[1, 2], [3, 4]]);
        let last = a.indexed_iter().last().unwrap();
        assert_eq!((last.0.slice(), *last.1), (&[1, 1][..], 4));
    }
}
