// Copyright 2026 ndvalue developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::iter::zip;
use tracing::debug;

use crate::data_repr::Repr;
use crate::dimension::broadcast::upcast;
use crate::dimension::{
    broadcast_shape, has_aliasing_strides, index_offset, index_offset_checked, Axis, Dim, IntoDimension, Ix, Ixs,
};
use crate::error::{rank_mismatch, ArrayError, Detail};
use crate::iterators::{IndexedIter, Iter};
use crate::rank_view::{MatrixView, QuaternView, RankView, TensorView, VectorView};
use crate::ArrayValue;

impl<'a, A> ArrayValue<'a, A> {
    /// Return the total number of elements in the array.
    pub fn len(&self) -> usize {
        self.dim.size()
    }

    /// Return the total number of elements in the array.
    #[inline]
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Return whether the array has any elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the shape of the array.
    pub fn dim(&self) -> Dim {
        self.dim
    }

    /// Return the shape of the array as a slice.
    pub fn shape(&self) -> &[Ix] {
        self.dim.slice()
    }

    /// Return the extents of the array's axes; same as `.shape()`.
    #[inline]
    pub fn extents(&self) -> &[Ix] {
        self.shape()
    }

    /// Return the strides of the array
    pub fn strides(&self) -> &[Ixs] {
        &self.strides[..self.ndim()]
    }

    /// Return the number of dimensions (axes) in the array
    pub fn ndim(&self) -> usize {
        self.dim.ndim()
    }

    /// Return the number of dimensions (axes) in the array; same as `.ndim()`.
    #[inline]
    pub fn rank(&self) -> usize {
        self.ndim()
    }

    /// Return `true` if the array borrows its elements from elsewhere.
    pub fn is_view(&self) -> bool {
        self.data.is_view()
    }

    /// Return `true` if the array owns its elements.
    pub fn is_owned(&self) -> bool {
        !self.is_view()
    }

    /// Return a read-only view of the array
    pub fn view(&self) -> ArrayValue<'_, A> {
        ArrayValue {
            data: Repr::View(self.data.as_slice()),
            offset: self.offset,
            dim: self.dim,
            strides: self.strides,
        }
    }

    /// Return an uniquely owned copy of the array, in standard layout.
    pub fn to_owned<'b>(&self) -> ArrayValue<'b, A>
    where
        A: Clone,
    {
        let data = if let Some(slc) = self.as_slice() {
            slc.to_vec()
        } else {
            self.iter().cloned().collect()
        };
        ArrayValue::from_vec_dim_unchecked(self.dim, data)
    }

    /// Turn the array into an owned array.
    ///
    /// Owned storage is kept without copying when it is in standard layout
    /// and holds exactly the array's elements.
    pub fn into_owned<'b>(self) -> ArrayValue<'b, A>
    where
        A: Clone,
    {
        let standard =
            self.offset == 0 && self.data.len() == self.dim.size() && self.is_standard_layout();
        match self.data {
            Repr::Owned(v) if standard => ArrayValue::from_vec_dim_unchecked(self.dim, v),
            _ => self.to_owned(),
        }
    }

    /// Promote a view to owned storage in place.
    ///
    /// An owned array whose strides reach one element through several
    /// indices (after a broadcast) is also copied out. Otherwise this is a
    /// no-op.
    pub fn make_owned(&mut self)
    where
        A: Clone,
    {
        if self.data.is_view() || has_aliasing_strides(&self.dim, &self.strides) {
            debug!(shape = ?self.dim, view = self.data.is_view(), "promoting to owned storage");
            let owned = self.to_owned();
            self.data = owned.data;
            self.offset = 0;
            self.strides = owned.strides;
        }
    }

    /// The storage of an array that has been made owned, for writing.
    pub(crate) fn data_mut(&mut self) -> &mut [A]
    where
        A: Clone,
    {
        self.make_owned();
        match self.data {
            Repr::Owned(ref mut v) => v,
            Repr::View(_) => unreachable!("make_owned leaves owned storage"),
        }
    }

    /// Return a reference to the element of a rank 0 array.
    ///
    /// **Panics** if the array does not have rank 0.
    pub fn scalar(&self) -> &A {
        ndassert!(
            self.ndim() == 0,
            "scalar() called on an array of rank {}",
            self.ndim()
        );
        &self.data.as_slice()[self.offset]
    }

    /// Return a rank 1 view.
    ///
    /// **Panics** if the array does not have rank 1.
    pub fn vector(&self) -> VectorView<'_, A> {
        self.rank_view("vector")
    }

    /// Return a rank 2 view.
    ///
    /// **Panics** if the array does not have rank 2.
    pub fn matrix(&self) -> MatrixView<'_, A> {
        self.rank_view("matrix")
    }

    /// Return a rank 3 view.
    ///
    /// **Panics** if the array does not have rank 3.
    pub fn tensor(&self) -> TensorView<'_, A> {
        self.rank_view("tensor")
    }

    /// Return a rank 4 view.
    ///
    /// **Panics** if the array does not have rank 4.
    pub fn quatern(&self) -> QuaternView<'_, A> {
        self.rank_view("quatern")
    }

    fn rank_view<const N: usize>(&self, accessor: &str) -> RankView<'_, A, N> {
        assert!(
            self.ndim() == N,
            "{}() called on an array of rank {}",
            accessor,
            self.ndim()
        );
        RankView::new(self, &self.dim, &self.strides)
    }

    /// Return a view of rank `N`.
    ///
    /// **Errors** with `RankMismatch` if the array does not have rank `N`.
    ///
    /// ```
    /// use ndvalue::arr2;
    ///
    /// let a = arr2(&[[1, 2], [3, 4]]);
    /// assert_eq!(a.ranked::<2>().unwrap()[[1, 0]], 3);
    /// assert!(a.ranked::<1>().is_err());
    /// ```
    pub fn ranked<const N: usize>(&self) -> Result<RankView<'_, A, N>, ArrayError> {
        if self.ndim() != N {
            return Err(rank_mismatch(N, self.ndim()));
        }
        Ok(RankView::new(self, &self.dim, &self.strides))
    }

    /// Return a reference to the element at `index`, or return `None`
    /// if the index is out of bounds or has the wrong number of axes.
    ///
    /// ```
    /// use ndvalue::arr2;
    ///
    /// let a = arr2(&[[1., 2.],
    ///                [3., 4.]]);
    ///
    /// assert!(
    ///     a.get(&[0, 1]) == Some(&2.) &&
    ///     a.get(&[0, 2]) == None
    /// );
    /// ```
    pub fn get(&self, index: &[Ix]) -> Option<&A> {
        let offset = index_offset_checked(&self.dim, &self.strides, index)?;
        self.data.as_slice().get((self.offset as isize + offset) as usize)
    }

    /// Return a mutable reference to the element at `index`, or return `None`
    /// if the index is out of bounds.
    ///
    /// A view is promoted to owned storage first.
    pub fn get_mut(&mut self, index: &[Ix]) -> Option<&mut A>
    where
        A: Clone,
    {
        index_offset_checked(&self.dim, &self.strides, index)?;
        self.make_owned();
        let delta = index_offset_checked(&self.dim, &self.strides, index)?;
        let offset = (self.offset as isize + delta) as usize;
        self.data.as_mut_slice()?.get_mut(offset)
    }

    /// Return an iterator of references to the elements of the array, in
    /// logical C order.
    ///
    /// Iterator element type is `&A`.
    pub fn iter(&self) -> Iter<'_, A> {
        Iter::new(self)
    }

    /// Return an iterator of indexes and references to the elements of the array.
    ///
    /// Iterator element type is `(Dim, &A)`.
    pub fn indexed_iter(&self) -> IndexedIter<'_, A> {
        IndexedIter::new(self)
    }

    /// Call `f` by reference on each element and create a new owned array
    /// with the new values.
    ///
    /// Elements are visited in logical C order and the result has standard
    /// layout.
    pub fn map<'b, B, F>(&self, f: F) -> ArrayValue<'b, B>
    where
        F: FnMut(&A) -> B,
    {
        let v: Vec<B> = self.iter().map(f).collect();
        ArrayValue::from_vec_dim_unchecked(self.dim, v)
    }

    /// Set every element to `x`.
    ///
    /// A view is promoted to owned storage first.
    pub fn fill(&mut self, x: A)
    where
        A: Clone,
    {
        let data = self.data_mut();
        for elt in data.iter_mut() {
            *elt = x.clone();
        }
    }

    /// Copy the elements of `rhs` into `self`, broadcasting `rhs` to the
    /// shape of `self`.
    ///
    /// **Errors** with `ShapeMismatch` if `rhs` does not broadcast to the
    /// shape of `self`; nothing is written in that case.
    pub fn assign(&mut self, rhs: &ArrayValue<'_, A>) -> Result<(), ArrayError>
    where
        A: Clone,
    {
        let rhs = rhs.broadcast(self.dim).map_err(|_| {
            ArrayError::new(Detail::AssignShape {
                selection: self.dim,
                rhs: rhs.dim,
            })
        })?;
        self.make_owned();
        let (offset, strides, dim) = (self.offset, self.strides, self.dim);
        let data = self.data_mut();
        let mut index = dim.first_index();
        let mut elements = rhs.iter();
        while let (Some(ix), Some(x)) = (index, elements.next()) {
            data[(offset as isize + index_offset(ix.slice(), &strides)) as usize] = x.clone();
            index = dim.next_for(ix);
        }
        Ok(())
    }

    /// Insert an axis of length one before `axis`.
    ///
    /// The array keeps its storage; no element is copied.
    ///
    /// **Panics** if `axis` is greater than the rank.<br>
    /// **Errors** with `RankMismatch` if the array already has four axes.
    pub fn insert_axis(mut self, axis: Axis) -> Result<Self, ArrayError> {
        let n = self.ndim();
        ndassert!(axis.index() <= n, "insert_axis: axis {} out of bounds for rank {}", axis.index(), n);
        self.dim = self.dim.insert_axis(axis, 1)?;
        self.strides.copy_within(axis.index()..n, axis.index() + 1);
        self.strides[axis.index()] = 0;
        Ok(self)
    }

    /// Act like a larger size and/or shape array by *broadcasting*
    /// into a larger shape, if possible.
    ///
    /// Axes are matched from the back. A source axis of length one, and
    /// every leading target axis the source lacks, is repeated by giving it
    /// stride 0; other axes must have equal lengths. The result is a view.
    ///
    /// **Errors** with `BroadcastIncompatible` if the shapes can not be
    /// broadcast together.
    ///
    /// ```
    /// use ndvalue::{arr1, aview2};
    ///
    /// assert!(arr1(&[1., 0.]).broadcast((10, 2)).unwrap().shape() == &[10, 2]);
    /// assert!(arr1(&[1., 0.]).broadcast(3).is_err());
    /// assert_eq!(arr1(&[1, 2]).broadcast((2, 2)).unwrap(), aview2(&[[1, 2], [1, 2]]));
    /// ```
    pub fn broadcast<Sh>(&self, shape: Sh) -> Result<ArrayValue<'_, A>, ArrayError>
    where
        Sh: IntoDimension,
    {
        let dim = shape.into_dimension();
        let strides = upcast(&dim, &self.dim, self.strides())?;
        Ok(ArrayValue {
            data: Repr::View(self.data.as_slice()),
            offset: self.offset,
            dim,
            strides,
        })
    }

    /// Broadcast `self` and `other` to their common shape, for an
    /// element-wise operation between them.
    ///
    /// **Errors** with `BroadcastIncompatible` if there is no common shape.
    pub fn broadcast_with<'b, B>(
        &self,
        other: &'b ArrayValue<'_, B>,
    ) -> Result<(ArrayValue<'_, A>, ArrayValue<'b, B>), ArrayError> {
        let shape = broadcast_shape(&self.dim, &other.dim)?;
        Ok((self.broadcast(shape)?, other.broadcast(shape)?))
    }

    /// Return `true` if the array's elements are laid out contiguously in
    /// C order.
    pub fn is_standard_layout(&self) -> bool {
        let defaults = self.dim.default_strides();
        is_standard_strides(&self.dim, &self.strides, &defaults)
    }

    /// Return the array's elements as a slice if they are contiguous and in
    /// standard order; otherwise `None`.
    pub fn as_slice(&self) -> Option<&[A]> {
        if self.is_empty() {
            Some(&[])
        } else if self.is_standard_layout() {
            self.data.as_slice().get(self.offset..self.offset + self.len())
        } else {
            None
        }
    }
}

fn is_standard_strides(dim: &Dim, strides: &[Ixs], defaults: &[Ixs]) -> bool {
    if dim.slice().iter().any(|&d| d == 0) {
        return true;
    }
    // check all dimensions -- a dimension of length 1 can have unequal strides
    for (&d, (&s, &ds)) in zip(dim.slice(), zip(strides, defaults)) {
        if d != 1 && s != ds {
            return false;
        }
    }
    true
}
