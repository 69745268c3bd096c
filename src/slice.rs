// Copyright 2026 ndvalue developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Index specifications and their normalization.
//!
//! An index operand goes through two stages:
//!
//! 1. An [`AxisArg`] is the raw, per-axis argument as the user wrote it:
//!    possibly negative bounds, omitted bounds, a zero step. It is built by
//!    [`classify`] from an opaque [`Value`] or by the [`s![]`](crate::s!)
//!    macro.
//! 2. An [`IndexSpec`] is the argument resolved against the extent of the
//!    axis it applies to: every position is known to be in bounds.
use std::fmt;
use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use crate::coerce::{coerce_scalar, Coercion};
use crate::dimension::{abs_index, range_len, Ix, Ixs};
use crate::error::{index_out_of_bounds, rank_mismatch, ArrayError, Detail};
use crate::value::Value;

/// A raw slice (range with step) in Python slice semantics.
///
/// Negative `start` or `stop` indexes are counted from the back of the
/// axis. Omitted bounds depend on the sign of `step`: a positive step runs
/// from the first element to the end, a negative step from the last
/// element down to (and including) the first.
///
/// ## Examples
///
/// `Slice::new(None, None, 1)` is the full range of an axis. The Python
/// equivalent is `[:]`.
///
/// `Slice::new(Some(a), Some(b), 2)` is every second element from `a` until
/// `b`. The Python equivalent is `[a:b:2]`.
///
/// `Slice::new(Some(a), None, -1)` is every element from `a` back to the
/// start of the axis. The Python equivalent is `[a::-1]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Slice {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: isize,
}

impl Slice {
    /// Create a new `Slice` with the given extents.
    ///
    /// A zero `step` is accepted here and rejected by normalization unless
    /// the bounds select exactly one element.
    pub fn new(start: Option<isize>, stop: Option<isize>, step: isize) -> Slice {
        Slice { start, stop, step }
    }

    /// Create a new `Slice` with the given step size (multiplied with the
    /// previous step size).
    #[inline]
    pub fn step_by(self, step: isize) -> Self {
        Slice {
            step: self.step * step,
            ..self
        }
    }

    /// Resolve against an axis of length `extent`.
    pub fn normalize(&self, extent: Ix, axis: usize) -> Result<SliceIndex, ArrayError> {
        normalize_range(self.start, self.stop, Some(self.step), extent, axis)
    }
}

macro_rules! impl_slice_from_index_type {
    ($index:ty) => {
        impl From<Range<$index>> for Slice {
            #[inline]
            fn from(r: Range<$index>) -> Slice {
                Slice {
                    start: Some(r.start as isize),
                    stop: Some(r.end as isize),
                    step: 1,
                }
            }
        }

        impl From<RangeFrom<$index>> for Slice {
            #[inline]
            fn from(r: RangeFrom<$index>) -> Slice {
                Slice {
                    start: Some(r.start as isize),
                    stop: None,
                    step: 1,
                }
            }
        }

        impl From<RangeTo<$index>> for Slice {
            #[inline]
            fn from(r: RangeTo<$index>) -> Slice {
                Slice {
                    start: None,
                    stop: Some(r.end as isize),
                    step: 1,
                }
            }
        }
    };
}

impl_slice_from_index_type!(isize);
impl_slice_from_index_type!(usize);
impl_slice_from_index_type!(i32);

impl From<RangeFull> for Slice {
    #[inline]
    fn from(_: RangeFull) -> Slice {
        Slice {
            start: None,
            stop: None,
            step: 1,
        }
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(start) = self.start {
            write!(f, "{}", start)?;
        }
        write!(f, ":")?;
        if let Some(stop) = self.stop {
            write!(f, "{}", stop)?;
        }
        if self.step != 1 {
            write!(f, ":{}", self.step)?;
        }
        Ok(())
    }
}

/// The kind of an index argument; the dispatch engine is keyed on the tuple
/// of these tags across all axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IndexKind {
    /// No argument: the whole axis.
    Absent,
    /// A range with step, or a single index.
    Range,
    /// An explicit list of positions.
    IntegerList,
    /// A per-position boolean mask.
    BooleanMask,
}

/// A raw index argument for one axis.
///
/// See also the [`s![]`](crate::s!) macro for a convenient way to create an
/// array of `AxisArg`s.
///
/// ## Examples
///
/// `AxisArg::Index(a)` is the index `a`; the axis is removed from the
/// result. It can also be created with `AxisArg::from(a)`. The Python
/// equivalent is `[a]`.
///
/// `AxisArg::Full` is the full range of an axis. It can also be created with
/// `AxisArg::from(..)`. The Python equivalent is `[:]`.
///
/// `AxisArg::Integers(vec![0, -1])` selects the first and the last
/// position, in that order.
///
/// `AxisArg::Mask(m)` selects the positions where `m` is `true`; `m` must
/// have the length of the axis.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AxisArg {
    Full,
    Slice(Slice),
    Index(isize),
    Integers(Vec<isize>),
    Mask(Vec<bool>),
}

impl AxisArg {
    /// Return the kind tag of this argument.
    pub fn kind(&self) -> IndexKind {
        match self {
            AxisArg::Full => IndexKind::Absent,
            AxisArg::Slice(_) | AxisArg::Index(_) => IndexKind::Range,
            AxisArg::Integers(_) => IndexKind::IntegerList,
            AxisArg::Mask(_) => IndexKind::BooleanMask,
        }
    }

    /// Returns a new `AxisArg` with the given step size (multiplied with
    /// the previous step size). Indices, lists and masks are unchanged.
    #[inline]
    pub fn step_by(self, step: isize) -> Self {
        match self {
            AxisArg::Full => AxisArg::Slice(Slice::from(..).step_by(step)),
            AxisArg::Slice(s) => AxisArg::Slice(s.step_by(step)),
            other => other,
        }
    }

    /// Resolve the argument against an axis of length `extent`.
    ///
    /// A one-element integer list is treated like a single index: the axis
    /// is removed from the result.
    pub fn resolve(&self, extent: Ix, axis: usize) -> Result<IndexSpec, ArrayError> {
        match self {
            AxisArg::Full => Ok(IndexSpec::Range(SliceIndex::full(extent))),
            AxisArg::Slice(s) => s.normalize(extent, axis).map(IndexSpec::Range),
            AxisArg::Index(i) => normalize_index(*i, extent, axis).map(IndexSpec::Range),
            AxisArg::Integers(list) if list.len() == 1 => {
                normalize_index(list[0], extent, axis).map(IndexSpec::Range)
            }
            AxisArg::Integers(list) => {
                normalize_integer_list(list, extent, axis).map(IndexSpec::IntegerList)
            }
            AxisArg::Mask(mask) => {
                if mask.len() != extent {
                    return Err(ArrayError::new(Detail::MaskLength {
                        axis,
                        len: mask.len(),
                        extent,
                    }));
                }
                Ok(IndexSpec::BooleanMask(mask.clone()))
            }
        }
    }
}

impl From<Slice> for AxisArg {
    #[inline]
    fn from(s: Slice) -> AxisArg {
        AxisArg::Slice(s)
    }
}

macro_rules! impl_axisarg_from_index_type {
    ($index:ty) => {
        impl From<$index> for AxisArg {
            #[inline]
            fn from(r: $index) -> AxisArg {
                AxisArg::Index(r as isize)
            }
        }

        impl From<Range<$index>> for AxisArg {
            #[inline]
            fn from(r: Range<$index>) -> AxisArg {
                AxisArg::Slice(Slice::from(r))
            }
        }

        impl From<RangeFrom<$index>> for AxisArg {
            #[inline]
            fn from(r: RangeFrom<$index>) -> AxisArg {
                AxisArg::Slice(Slice::from(r))
            }
        }

        impl From<RangeTo<$index>> for AxisArg {
            #[inline]
            fn from(r: RangeTo<$index>) -> AxisArg {
                AxisArg::Slice(Slice::from(r))
            }
        }
    };
}

impl_axisarg_from_index_type!(isize);
impl_axisarg_from_index_type!(usize);
impl_axisarg_from_index_type!(i32);

impl From<RangeFull> for AxisArg {
    #[inline]
    fn from(_: RangeFull) -> AxisArg {
        AxisArg::Full
    }
}

macro_rules! impl_axisarg_from_list_type {
    ($index:ty) => {
        impl From<Vec<$index>> for AxisArg {
            #[inline]
            fn from(list: Vec<$index>) -> AxisArg {
                AxisArg::Integers(list.into_iter().map(|i| i as isize).collect())
            }
        }
    };
}

impl_axisarg_from_list_type!(isize);
impl_axisarg_from_list_type!(usize);
impl_axisarg_from_list_type!(i32);

impl From<Vec<bool>> for AxisArg {
    #[inline]
    fn from(mask: Vec<bool>) -> AxisArg {
        AxisArg::Mask(mask)
    }
}

impl fmt::Display for AxisArg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AxisArg::Full => write!(f, ":"),
            AxisArg::Slice(s) => write!(f, "{}", s),
            AxisArg::Index(i) => write!(f, "{}", i),
            AxisArg::Integers(list) => write!(f, "{:?}", list),
            AxisArg::Mask(mask) => write!(f, "{:?}", mask),
        }
    }
}

/// A normalized range along one axis.
///
/// `0 <= start <= stop <= extent` always holds and `step` is never zero.
/// A positive step selects `start, start + step, ...` below `stop`; a
/// negative step selects `stop - 1, stop - 1 - |step|, ...` not below
/// `start`.
///
/// `single_value` marks a scalar index: the range holds exactly one
/// element and the axis is removed from the result.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SliceIndex {
    pub start: isize,
    pub stop: isize,
    pub step: isize,
    pub single_value: bool,
}

impl SliceIndex {
    /// Create a normalized range.
    ///
    /// The bounds must satisfy `0 <= start <= stop` and step must be nonzero.
    /// (This method checks with a debug assertion.)
    pub fn new(start: isize, stop: isize, step: isize) -> SliceIndex {
        debug_assert!(0 <= start && start <= stop, "SliceIndex::new: unordered bounds");
        debug_assert_ne!(step, 0, "SliceIndex::new: step must be nonzero");
        SliceIndex {
            start,
            stop,
            step,
            single_value: false,
        }
    }

    /// The whole axis of length `extent`.
    #[inline]
    pub fn full(extent: Ix) -> SliceIndex {
        SliceIndex::new(0, extent as isize, 1)
    }

    /// The single position `index`, removing the axis.
    #[inline]
    pub fn single(index: Ix) -> SliceIndex {
        SliceIndex {
            single_value: true,
            ..SliceIndex::new(index as isize, index as isize + 1, 1)
        }
    }

    /// Number of selected elements.
    #[inline]
    pub fn len(&self) -> usize {
        range_len(self.start, self.stop, self.step)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return `true` if this is the whole axis of length `extent`, in order.
    #[inline]
    pub fn is_full(&self, extent: Ix) -> bool {
        !self.single_value && self.start == 0 && self.stop == extent as isize && self.step == 1
    }

    /// The selected positions, in selection order.
    pub fn positions(&self) -> Vec<Ix> {
        let (start, stop) = (self.start as Ix, self.stop as Ix);
        let step = self.step.unsigned_abs();
        if self.step > 0 {
            (start..stop).step_by(step).collect()
        } else {
            (start..stop).rev().step_by(step).collect()
        }
    }
}

/// A resolved index specification for one axis.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum IndexSpec {
    /// Basic slicing.
    Range(SliceIndex),
    /// Fancy indexing; every entry is in bounds.
    IntegerList(Vec<Ix>),
    /// Boolean indexing; the mask has the length of the axis.
    BooleanMask(Vec<bool>),
}

impl IndexSpec {
    /// Return the kind tag; a range over the whole axis reports `Absent`.
    pub fn kind(&self, extent: Ix) -> IndexKind {
        match self {
            IndexSpec::Range(r) if r.is_full(extent) => IndexKind::Absent,
            IndexSpec::Range(_) => IndexKind::Range,
            IndexSpec::IntegerList(_) => IndexKind::IntegerList,
            IndexSpec::BooleanMask(_) => IndexKind::BooleanMask,
        }
    }

    /// Number of positions selected.
    pub fn len(&self) -> usize {
        match self {
            IndexSpec::Range(r) => r.len(),
            IndexSpec::IntegerList(list) => list.len(),
            IndexSpec::BooleanMask(mask) => mask.iter().filter(|&&m| m).count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return `true` if the axis is removed from the result.
    #[inline]
    pub fn is_single_value(&self) -> bool {
        matches!(self, IndexSpec::Range(r) if r.single_value)
    }

    /// The selected positions, in selection order.
    pub fn positions(&self) -> Vec<Ix> {
        match self {
            IndexSpec::Range(r) => r.positions(),
            IndexSpec::IntegerList(list) => list.clone(),
            IndexSpec::BooleanMask(mask) => mask
                .iter()
                .enumerate()
                .filter(|&(_, &m)| m)
                .map(|(i, _)| i)
                .collect(),
        }
    }
}

/// Normalize a raw range against an axis of length `extent`.
///
/// - An omitted `step` is 1.
/// - Omitted bounds are the natural ends for the step's direction.
/// - Negative bounds are resolved by adding `extent`.
/// - Bounds outside the axis are an `OutOfBounds` error; they are not clamped.
/// - A range running against its step is empty.
/// - A zero step is an `InvalidStep` error unless the bounds select exactly
///   one element, in which case it acts as step 1.
///
/// `axis` is only used for error reporting.
pub fn normalize_range(
    start: Option<isize>,
    stop: Option<isize>,
    step: Option<isize>,
    extent: Ix,
    axis: usize,
) -> Result<SliceIndex, ArrayError> {
    let n = extent as Ixs;
    let step = step.unwrap_or(1);
    let resolve = |bound: isize, lowest: Ixs, highest: Ixs| {
        let b = abs_index(extent, bound);
        if b < lowest || b > highest {
            Err(index_out_of_bounds(axis, bound, extent))
        } else {
            Ok(b)
        }
    };

    if step == 0 {
        let lo = match start {
            None => 0,
            Some(s) => resolve(s, 0, n)?,
        };
        let hi = match stop {
            None => n,
            Some(e) => resolve(e, 0, n)?,
        };
        if hi - lo != 1 {
            return Err(ArrayError::new(Detail::ZeroStep { axis }));
        }
        return Ok(SliceIndex::new(lo, hi, 1));
    }

    if step > 0 {
        let lo = match start {
            None => 0,
            Some(s) => resolve(s, 0, n)?,
        };
        let hi = match stop {
            None => n,
            Some(e) => resolve(e, 0, n)?,
        };
        Ok(SliceIndex::new(lo, hi.max(lo), step))
    } else {
        // `first` is the first element visited, `last` the exclusive end
        // below it; -1 stands for "before the first element".
        if n == 0 {
            if let Some(s) = start {
                return Err(index_out_of_bounds(axis, s, extent));
            }
            return Ok(SliceIndex::new(0, 0, step));
        }
        let first = match start {
            None => n - 1,
            Some(s) => resolve(s, 0, n - 1)?,
        };
        let last = match stop {
            None => -1,
            Some(e) => resolve(e, -1, n - 1)?,
        };
        let hi = first + 1;
        let lo = (last + 1).min(hi);
        Ok(SliceIndex::new(lo, hi, step))
    }
}

/// Normalize a scalar index against an axis of length `extent`.
///
/// The result selects one element and removes the axis.
pub fn normalize_index(index: isize, extent: Ix, axis: usize) -> Result<SliceIndex, ArrayError> {
    let i = abs_index(extent, index);
    if i < 0 || i >= extent as Ixs {
        return Err(index_out_of_bounds(axis, index, extent));
    }
    Ok(SliceIndex::single(i as Ix))
}

/// Resolve the negative entries of an integer list and check every entry
/// against an axis of length `extent`.
pub fn normalize_integer_list(list: &[isize], extent: Ix, axis: usize) -> Result<Vec<Ix>, ArrayError> {
    list.iter()
        .map(|&index| {
            let i = abs_index(extent, index);
            if i < 0 || i >= extent as Ixs {
                Err(index_out_of_bounds(axis, index, extent))
            } else {
                Ok(i as Ix)
            }
        })
        .collect()
}

/// Resolve one argument per axis against `shape`.
///
/// Missing trailing arguments select whole axes. More arguments than axes
/// is a `RankMismatch` error.
pub fn resolve_all(args: &[AxisArg], shape: &[Ix]) -> Result<Vec<IndexSpec>, ArrayError> {
    if args.len() > shape.len() {
        return Err(rank_mismatch(shape.len(), args.len()));
    }
    shape
        .iter()
        .enumerate()
        .map(|(axis, &extent)| match args.get(axis) {
            Some(arg) => arg.resolve(extent, axis),
            None => Ok(IndexSpec::Range(SliceIndex::full(extent))),
        })
        .collect()
}

/// Determine which index argument the opaque operand `value` encodes.
///
/// - nil selects the whole axis,
/// - a list of one to three integer-or-nil entries is `start, stop, step`,
/// - an integer scalar is a single index,
/// - an integer vector is an integer list,
/// - a boolean vector is a mask.
///
/// Floats, strings, boolean scalars and other lists are a `TypeMismatch`;
/// integer or boolean arrays of rank two or more are a `RankMismatch`.
/// `axis` is only used for error reporting.
pub fn classify(value: &Value<'_>, axis: usize) -> Result<AxisArg, ArrayError> {
    match value {
        Value::Nil => Ok(AxisArg::Full),
        Value::List(items) if (1..=3).contains(&items.len()) => {
            let mut bounds = [None; 3];
            for (bound, item) in bounds.iter_mut().zip(items) {
                *bound = match item {
                    Value::Nil => None,
                    Value::Int(a) if a.ndim() == 0 => {
                        Some(coerce_scalar::<i64>(item, Coercion::Strict)? as isize)
                    }
                    other => {
                        return Err(ArrayError::new(Detail::NotAnIndex {
                            axis,
                            found: other.describe(),
                        }))
                    }
                };
            }
            Ok(AxisArg::Slice(Slice::new(bounds[0], bounds[1], bounds[2].unwrap_or(1))))
        }
        Value::Int(a) => match a.ndim() {
            0 => Ok(AxisArg::Index(*a.scalar() as isize)),
            1 => Ok(AxisArg::Integers(a.iter().map(|&i| i as isize).collect())),
            n => Err(rank_mismatch(1, n)),
        },
        Value::Bool(a) => match a.ndim() {
            1 => Ok(AxisArg::Mask(a.iter().cloned().collect())),
            0 => Err(ArrayError::new(Detail::NotAnIndex {
                axis,
                found: "a boolean scalar",
            })),
            n => Err(rank_mismatch(1, n)),
        },
        other => Err(ArrayError::new(Detail::NotAnIndex {
            axis,
            found: other.describe(),
        })),
    }
}

/// Slice argument constructor.
///
/// `s![]` takes a list of ranges/slices/indices, separated by comma, with
/// optional step sizes that are separated from the range by a semicolon. It
/// is converted into an array of [`AxisArg`]s.
///
/// Each range/slice/index uses signed indices, where a negative value is
/// counted from the end of the axis. Steps follow Python semantics: a
/// negative step walks from the start bound *down* to the stop bound, so
/// `s![..;-1]` reverses an axis while `s![1..4;-1]` is empty.
///
/// The syntax is `s![` *[ axis-arg [, axis-arg [ , ... ] ] ]* `]`, where
/// *axis-arg* is any of the following:
///
/// * *index*: an index to use for taking a subview with respect to that axis
/// * *range*: a range with step size 1 to use for slicing that axis
/// * *range* `;` *step*: a range with step size *step* to use for slicing that axis
/// * *list*: a `Vec<isize>` of positions or a `Vec<bool>` mask
///
/// Fewer arguments than the array has axes select the remaining axes whole.
///
/// For example `s![0..4;2, 6, 1..5]` is a slice of the first axis for 0..4
/// with step size 2, a subview of the second axis at index 6, and a slice
/// of the third axis for 1..5 with default step size 1. The resulting
/// slice of a three-dimensional array would have shape `[2, 4]`.
///
/// # Example
///
/// ```
/// use ndvalue::{arr2, s};
///
/// let a = arr2(&[[0, 1, 2],
///                [3, 4, 5]]);
/// let b = a.slice(&s![.., ..;-1]).unwrap();
/// assert_eq!(b, arr2(&[[2, 1, 0],
///                      [5, 4, 3]]));
/// ```
#[macro_export]
macro_rules! s(
    // convert a..b;c into @convert(a..b, c), final item
    (@parse [$($stack:tt)*] $r:expr;$s:expr) => {
        [$($stack)* $crate::s!(@convert $r, $s)]
    };
    // convert a..b into @convert(a..b), final item
    (@parse [$($stack:tt)*] $r:expr) => {
        [$($stack)* $crate::s!(@convert $r)]
    };
    // convert a..b;c into @convert(a..b, c), final item, trailing comma
    (@parse [$($stack:tt)*] $r:expr;$s:expr ,) => {
        [$($stack)* $crate::s!(@convert $r, $s)]
    };
    // convert a..b into @convert(a..b), final item, trailing comma
    (@parse [$($stack:tt)*] $r:expr ,) => {
        [$($stack)* $crate::s!(@convert $r)]
    };
    // convert a..b;c into @convert(a..b, c)
    (@parse [$($stack:tt)*] $r:expr;$s:expr, $($t:tt)*) => {
        $crate::s![@parse [$($stack)* $crate::s!(@convert $r, $s),] $($t)*]
    };
    // convert a..b into @convert(a..b)
    (@parse [$($stack:tt)*] $r:expr, $($t:tt)*) => {
        $crate::s![@parse [$($stack)* $crate::s!(@convert $r),] $($t)*]
    };
    // convert range/index into AxisArg
    (@convert $r:expr) => {
        <$crate::AxisArg as ::std::convert::From<_>>::from($r)
    };
    // convert range/index and step into AxisArg
    (@convert $r:expr, $s:expr) => {
        <$crate::AxisArg as ::std::convert::From<_>>::from($r).step_by($s as isize)
    };
    ($($t:tt)*) => {
        $crate::s![@parse [] $($t)*]
    };
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn range(start: Option<isize>, stop: Option<isize>, step: isize, n: Ix) -> SliceIndex {
        normalize_range(start, stop, Some(step), n, 0).unwrap()
    }

    #[test]
    fn open_bounds_follow_step_sign() {
        assert_eq!(range(None, None, 1, 5).positions(), vec![0, 1, 2, 3, 4]);
        assert_eq!(range(None, None, -1, 5).positions(), vec![4, 3, 2, 1, 0]);
        assert_eq!(range(None, None, -2, 5).positions(), vec![4, 2, 0]);
        assert_eq!(range(Some(3), None, -1, 5).positions(), vec![3, 2, 1, 0]);
        assert_eq!(range(Some(4), Some(1), -2, 5).positions(), vec![4, 2]);
        assert_eq!(range(None, Some(2), 1, 5).positions(), vec![0, 1]);
    }

    #[test]
    fn negative_bounds() {
        let r = range(Some(-4), Some(-1), 2, 5);
        assert_eq!(r, SliceIndex::new(1, 4, 2));
        assert_eq!(r.positions(), vec![1, 3]);
        // -6 resolves to "before the first element" under a negative step
        assert_eq!(range(Some(-1), Some(-6), -1, 5).positions(), vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn backward_range_is_empty() {
        assert!(range(Some(3), Some(1), 1, 5).is_empty());
        assert!(range(Some(1), Some(3), -1, 5).is_empty());
        assert!(range(None, None, -1, 0).is_empty());
    }

    #[test]
    fn out_of_bounds_is_not_clamped() {
        let err = normalize_range(Some(0), Some(6), None, 5, 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfBounds);
        assert_eq!(
            err.detail(),
            &Detail::Index {
                axis: 1,
                index: 6,
                extent: 5
            }
        );
        assert!(normalize_range(Some(-6), None, None, 5, 0).is_err());
        assert!(normalize_range(Some(5), None, Some(-1), 5, 0).is_err());
    }

    #[test]
    fn zero_step() {
        let err = normalize_range(Some(0), Some(3), Some(0), 5, 2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidStep);
        assert_eq!(err.detail(), &Detail::ZeroStep { axis: 2 });
        assert_eq!(
            normalize_range(Some(2), Some(3), Some(0), 5, 0).unwrap(),
            SliceIndex::new(2, 3, 1)
        );
        // open bounds are the ends of the axis
        assert!(normalize_range(Some(2), None, Some(0), 5, 0).is_err());
        assert!(normalize_range(None, None, Some(0), 5, 0).is_err());
        assert_eq!(
            normalize_range(None, None, Some(0), 1, 0).unwrap(),
            SliceIndex::new(0, 1, 1)
        );
    }

    #[test]
    fn scalar_index() {
        let i = normalize_index(-1, 4, 0).unwrap();
        assert!(i.single_value);
        assert_eq!(i.positions(), vec![3]);
        assert!(normalize_index(4, 4, 0).is_err());
        assert!(normalize_index(-5, 4, 0).is_err());
    }

    #[test]
    fn integer_list() {
        assert_eq!(normalize_integer_list(&[0, -1, 2], 4, 0).unwrap(), vec![0, 3, 2]);
        let err = normalize_integer_list(&[0, 9], 4, 1).unwrap_err();
        assert_eq!(
            err.detail(),
            &Detail::Index {
                axis: 1,
                index: 9,
                extent: 4
            }
        );
    }

    #[test]
    fn single_entry_list_collapses() {
        let spec = AxisArg::Integers(vec![-1]).resolve(3, 0).unwrap();
        assert!(spec.is_single_value());
        assert_eq!(spec.positions(), vec![2]);
    }

    #[test]
    fn mask_length_must_match() {
        let err = AxisArg::Mask(vec![true, false]).resolve(3, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfBounds);
        let spec = AxisArg::Mask(vec![true, false, true]).resolve(3, 0).unwrap();
        assert_eq!(spec.len(), 2);
        assert_eq!(spec.positions(), vec![0, 2]);
    }

    #[test]
    fn whole_range_reports_absent() {
        let shape = [3, 4];
        let specs = resolve_all(&s![.., 1..], &shape).unwrap();
        assert_eq!(specs[0].kind(3), IndexKind::Absent);
        assert_eq!(specs[1].kind(4), IndexKind::Range);
        assert!(resolve_all(&s![.., .., ..], &shape).is_err());
        assert_eq!(resolve_all(&s![1], &shape).unwrap()[1], IndexSpec::Range(SliceIndex::full(4)));
    }

    #[test]
    fn macro_steps() {
        assert_eq!(s![..;2][0], AxisArg::Slice(Slice::new(None, None, 2)));
        assert_eq!(s![1..;-1][0], AxisArg::Slice(Slice::new(Some(1), None, -1)));
        assert_eq!(s![3, 1..2,][0], AxisArg::Index(3));
        assert_eq!(s![vec![true, false]][0].kind(), IndexKind::BooleanMask);
    }

    #[test]
    fn display() {
        assert_eq!(Slice::new(Some(1), None, -1).to_string(), "1::-1");
        assert_eq!(AxisArg::Full.to_string(), ":");
        assert_eq!(AxisArg::from(..3).to_string(), ":3");
    }
}
