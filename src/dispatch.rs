// Copyright 2026 ndvalue developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Extraction and assignment through a selection.
//!
//! Every selection is one [`IndexSpec`] per axis. The tuple of their kinds
//! picks one of two rank-generic paths:
//!
//! - **view**: every axis is a range. The selection is expressed through
//!   the offset and the strides, so the result borrows the source storage.
//! - **gather**: at least one integer list, or a boolean mask on the first
//!   axis with every other axis selected whole. The selected positions are
//!   copied in C order into new owned storage.
//!
//! Any other combination involving a boolean mask has no rule and is an
//! `UnsupportedIndexCombination` error.
use itertools::izip;
use tracing::trace;

use crate::data_repr::Repr;
use crate::dimension::{do_slice, stride_offset, Axis, Dim, Ix, Strides};
use crate::error::{index_out_of_bounds, rank_mismatch, ArrayError, Detail};
use crate::slice::{resolve_all, AxisArg, IndexKind, IndexSpec};
use crate::ArrayValue;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Path {
    View,
    Gather,
}

/// Pick the path for `specs`, one per axis of `shape`.
fn plan(specs: &[IndexSpec], shape: &[Ix]) -> Result<Path, ArrayError> {
    debug_assert_eq!(specs.len(), shape.len());
    let kinds: Vec<IndexKind> = specs
        .iter()
        .zip(shape)
        .map(|(spec, &extent)| spec.kind(extent))
        .collect();
    let path = match &kinds[..] {
        ks if ks
            .iter()
            .all(|&k| k == IndexKind::Absent || k == IndexKind::Range) =>
        {
            Path::View
        }
        [IndexKind::BooleanMask, rest @ ..] if rest.iter().all(|&k| k == IndexKind::Absent) => {
            Path::Gather
        }
        ks if ks.contains(&IndexKind::BooleanMask) => {
            return Err(ArrayError::new(Detail::IndexCombination {
                kinds: kinds.clone(),
            }));
        }
        _ => Path::Gather,
    };
    trace!(?kinds, ?path, "dispatch");
    Ok(path)
}

/// Check that there is one spec per axis.
fn check_rank(specs: &[IndexSpec], dim: &Dim) -> Result<(), ArrayError> {
    if specs.len() != dim.ndim() {
        return Err(rank_mismatch(dim.ndim(), specs.len()));
    }
    Ok(())
}

/// Check every spec against the extent of its axis.
///
/// Specs built by [`resolve_all`] always pass; this guards specs built by
/// hand, whose fields are public.
fn check_specs(specs: &[IndexSpec], dim: &Dim) -> Result<(), ArrayError> {
    for (axis, (spec, &extent)) in specs.iter().zip(dim.slice()).enumerate() {
        match spec {
            IndexSpec::Range(r) => {
                let n = extent as isize;
                if r.step == 0 {
                    return Err(ArrayError::new(Detail::ZeroStep { axis }));
                }
                if r.start < 0 || r.start > n {
                    return Err(index_out_of_bounds(axis, r.start, extent));
                }
                if r.stop < r.start || r.stop > n || (r.single_value && r.stop != r.start + 1) {
                    return Err(index_out_of_bounds(axis, r.stop, extent));
                }
            }
            IndexSpec::IntegerList(list) => {
                if let Some(&i) = list.iter().find(|&&i| i >= extent) {
                    return Err(index_out_of_bounds(axis, i as isize, extent));
                }
            }
            IndexSpec::BooleanMask(mask) => {
                if mask.len() != extent {
                    return Err(ArrayError::new(Detail::MaskLength {
                        axis,
                        len: mask.len(),
                        extent,
                    }));
                }
            }
        }
    }
    Ok(())
}

/// Apply range-only `specs` to `dim` and `strides` and return the offset
/// of the first selected element. Single-value axes are removed.
fn slice_ranges(dim: &mut Dim, strides: &mut Strides, specs: &[IndexSpec]) -> isize {
    let mut offset = 0;
    for (axis, spec) in specs.iter().enumerate() {
        if let IndexSpec::Range(r) = spec {
            offset += do_slice(&mut dim.slice_mut()[axis], &mut strides[axis], r);
        } else {
            debug_assert!(false, "slice_ranges: non-range spec on axis {}", axis);
        }
    }
    // collapse from the back so the remaining axis numbers stay valid
    for axis in (0..specs.len()).rev() {
        if specs[axis].is_single_value() {
            remove_axis_stride(strides, dim.ndim(), axis);
            *dim = dim.remove_axis(Axis(axis));
        }
    }
    offset
}

fn remove_axis_stride(strides: &mut Strides, ndim: usize, axis: usize) {
    strides.copy_within(axis + 1..ndim, axis);
    strides[ndim - 1] = 0;
}

/// The positions selected on every axis and the shape of the selected
/// region (single-value axes removed).
fn selection(specs: &[IndexSpec]) -> (Vec<Vec<Ix>>, Dim) {
    let positions: Vec<Vec<Ix>> = specs.iter().map(IndexSpec::positions).collect();
    let mut region = Dim::zeros(specs.iter().filter(|s| !s.is_single_value()).count());
    let lens = izip!(specs, &positions)
        .filter(|(spec, _)| !spec.is_single_value())
        .map(|(_, p)| p.len());
    for (r, len) in region.slice_mut().iter_mut().zip(lens) {
        *r = len;
    }
    (positions, region)
}

/// Call `f` with the storage offset of every element at the cartesian
/// product of `positions`, in C order.
pub(crate) fn for_each_selected<F>(positions: &[Vec<Ix>], strides: &[isize], offset: usize, mut f: F)
where
    F: FnMut(usize),
{
    let mut lens = Dim::zeros(positions.len());
    for (len, p) in lens.slice_mut().iter_mut().zip(positions) {
        *len = p.len();
    }
    let mut index = lens.first_index();
    while let Some(ix) = index {
        let delta: isize = izip!(positions, ix.slice(), strides)
            .map(|(p, &i, &s)| stride_offset(p[i], s))
            .sum();
        f((offset as isize + delta) as usize);
        index = lens.next_for(ix);
    }
}

impl<'a, A> ArrayValue<'a, A> {
    /// Extract the selection `specs` (one per axis, already resolved).
    ///
    /// A selection made only of ranges, of any step, is a view of `self`.
    /// Selections containing an integer list or a boolean mask are gathered
    /// into new owned storage. Single-value axes are removed.
    ///
    /// **Errors** if the number of specs differs from the rank
    /// (`RankMismatch`), a spec does not fit its axis (`OutOfBounds`, or
    /// `InvalidStep` for a zero step) or the combination has no rule
    /// (`UnsupportedIndexCombination`).
    pub fn extract(&self, specs: &[IndexSpec]) -> Result<ArrayValue<'_, A>, ArrayError>
    where
        A: Clone,
    {
        check_rank(specs, &self.dim)?;
        check_specs(specs, &self.dim)?;
        match plan(specs, self.dim.slice())? {
            Path::View => {
                let mut dim = self.dim;
                let mut strides = self.strides;
                let offset = slice_ranges(&mut dim, &mut strides, specs);
                Ok(ArrayValue {
                    data: Repr::View(self.data.as_slice()),
                    offset: (self.offset as isize + offset) as usize,
                    dim,
                    strides,
                })
            }
            Path::Gather => Ok(self.gather(specs)),
        }
    }

    /// Return a sliced view or gathered copy of the array.
    ///
    /// See [*Slicing*](ArrayValue#indexing-and-slicing) for the forms an
    /// argument can take, and the [`s![]`](crate::s!) macro.
    ///
    /// **Errors** if an argument is out of bounds for its axis, there are
    /// more arguments than axes, or the combination of argument kinds has
    /// no rule.
    ///
    /// ```
    /// use ndvalue::{arr2, s};
    ///
    /// let a = arr2(&[[1, 2, 3],
    ///                [4, 5, 6]]);
    /// assert_eq!(a.slice(&s![1, ..;-1]).unwrap(), ndvalue::arr1(&[6, 5, 4]));
    /// ```
    pub fn slice(&self, args: &[AxisArg]) -> Result<ArrayValue<'_, A>, ArrayError>
    where
        A: Clone,
    {
        let specs = resolve_all(args, self.dim.slice())?;
        self.extract(&specs)
    }

    /// Slice the array, possibly changing the number of dimensions.
    ///
    /// Like [`.slice()`](ArrayValue::slice), but consumes `self`: a range
    /// selection keeps the original storage, so an owned array stays owned
    /// and a view keeps its lifetime.
    pub fn slice_move(mut self, args: &[AxisArg]) -> Result<ArrayValue<'a, A>, ArrayError>
    where
        A: Clone,
    {
        let specs = resolve_all(args, self.dim.slice())?;
        match plan(&specs, self.dim.slice())? {
            Path::View => {
                let offset = slice_ranges(&mut self.dim, &mut self.strides, &specs);
                self.offset = (self.offset as isize + offset) as usize;
                Ok(self)
            }
            Path::Gather => Ok(self.gather(&specs)),
        }
    }

    /// Copy the selected elements into a new standard layout array.
    fn gather<'b>(&self, specs: &[IndexSpec]) -> ArrayValue<'b, A>
    where
        A: Clone,
    {
        let (positions, region) = selection(specs);
        let data = self.data.as_slice();
        let mut v = Vec::with_capacity(region.size());
        for_each_selected(&positions, &self.strides, self.offset, |i| v.push(data[i].clone()));
        trace!(shape = ?region, "gathered selection");
        ArrayValue::from_vec_dim_unchecked(region, v)
    }

    /// Assign the elements of `rhs` to the selection `specs`.
    ///
    /// `rhs` is broadcast to the shape of the selection first; if that
    /// fails no element is written. A view is promoted to owned storage
    /// before the first write. When an integer list names the same position
    /// twice, the element assigned last is kept.
    ///
    /// **Errors** with `ShapeMismatch` if `rhs` does not broadcast to the
    /// selection, and with the errors of [`.extract()`](ArrayValue::extract).
    pub fn assign_at(&mut self, specs: &[IndexSpec], rhs: &ArrayValue<'_, A>) -> Result<(), ArrayError>
    where
        A: Clone,
    {
        check_rank(specs, &self.dim)?;
        check_specs(specs, &self.dim)?;
        plan(specs, self.dim.slice())?;
        let (positions, region) = selection(specs);
        let rhs = rhs.broadcast(region).map_err(|_| {
            ArrayError::new(Detail::AssignShape {
                selection: region,
                rhs: rhs.dim,
            })
        })?;
        // promotion resets the offset and strides
        self.make_owned();
        let (offset, strides) = (self.offset, self.strides);
        let data = self.data_mut();
        let mut elements = rhs.iter();
        for_each_selected(&positions, &strides, offset, |i| {
            if let Some(x) = elements.next() {
                data[i] = x.clone();
            }
        });
        Ok(())
    }

    /// Assign the elements of `rhs` to the selection `args`.
    ///
    /// This is [`.assign_at()`](ArrayValue::assign_at) after resolving the
    /// arguments against the shape of `self`.
    ///
    /// ```
    /// use ndvalue::{arr1, arr2, s};
    ///
    /// let mut a = arr2(&[[0, 0, 0],
    ///                    [0, 0, 0]]);
    /// a.slice_assign(&s![.., 1..], &arr1(&[7, 8])).unwrap();
    /// assert_eq!(a, arr2(&[[0, 7, 8],
    ///                      [0, 7, 8]]));
    /// ```
    pub fn slice_assign(&mut self, args: &[AxisArg], rhs: &ArrayValue<'_, A>) -> Result<(), ArrayError>
    where
        A: Clone,
    {
        let specs = resolve_all(args, self.dim.slice())?;
        self.assign_at(&specs, rhs)
    }

    /// Set every element of the selection `specs` to `x`.
    pub fn fill_at(&mut self, specs: &[IndexSpec], x: A) -> Result<(), ArrayError>
    where
        A: Clone,
    {
        check_rank(specs, &self.dim)?;
        check_specs(specs, &self.dim)?;
        plan(specs, self.dim.slice())?;
        let (positions, _) = selection(specs);
        // promotion resets the offset and strides
        self.make_owned();
        let (offset, strides) = (self.offset, self.strides);
        let data = self.data_mut();
        for_each_selected(&positions, &strides, offset, |i| data[i] = x.clone());
        Ok(())
    }

    /// Set every element of the selection `args` to `x`.
    pub fn slice_fill(&mut self, args: &[AxisArg], x: A) -> Result<(), ArrayError>
    where
        A: Clone,
    {
        let specs = resolve_all(args, self.dim.slice())?;
        self.fill_at(&specs, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slice::SliceIndex;

    fn full(n: Ix) -> IndexSpec {
        IndexSpec::Range(SliceIndex::full(n))
    }

    #[test]
    fn plan_table() {
        let shape = [3, 4];
        let mask = IndexSpec::BooleanMask(vec![true, false, true]);
        let cols = IndexSpec::BooleanMask(vec![true; 4]);
        let list = IndexSpec::IntegerList(vec![0, 2]);
        let part = IndexSpec::Range(SliceIndex::new(1, 3, 1));

        assert_eq!(plan(&[full(3), part.clone()], &shape).unwrap(), Path::View);
        assert_eq!(plan(&[list.clone(), part.clone()], &shape).unwrap(), Path::Gather);
        assert_eq!(plan(&[full(3), list.clone()], &shape).unwrap(), Path::Gather);
        assert_eq!(plan(&[mask.clone(), full(4)], &shape).unwrap(), Path::Gather);

        for specs in [
            vec![mask.clone(), part],
            vec![mask.clone(), cols.clone()],
            vec![mask, list],
            vec![full(3), cols],
        ] {
            let err = plan(&specs, &shape).unwrap_err();
            assert_eq!(err.kind(), crate::ErrorKind::UnsupportedIndexCombination);
        }
    }

    #[test]
    fn selected_offsets_c_order() {
        let mut seen = Vec::new();
        for_each_selected(&[vec![2, 0], vec![1, 3]], &[4, 1], 0, |i| seen.push(i));
        assert_eq!(seen, vec![9, 11, 1, 3]);

        let mut count = 0;
        for_each_selected(&[vec![], vec![1]], &[4, 1], 0, |_| count += 1);
        assert_eq!(count, 0);
    }
}
