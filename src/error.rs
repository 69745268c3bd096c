// Copyright 2026 ndvalue developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;

use crate::dimension::Dim;
use crate::element::ElementKind;
use crate::slice::IndexKind;

/// An error from indexing, coercing or broadcasting an array value.
///
/// The error keeps the structured facts of the failure (axis, offending
/// bound, extents, shapes) and an optional operation context; the message
/// is only rendered by `Display`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayError {
    // we want to be able to change this representation later
    repr: Box<Repr>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Repr {
    detail: Detail,
    context: Option<Context>,
}

/// Error code for an array value error.
///
/// This enumeration is not exhaustive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// an index, range or mask does not fit the axis extent
    OutOfBounds,
    /// zero step on a range selecting more than one element
    InvalidStep,
    /// value can not be coerced to the requested element kind
    TypeMismatch,
    /// value does not have the rank the caller requires
    RankMismatch,
    /// no extraction or assignment rule for this tuple of index kinds
    UnsupportedIndexCombination,
    /// right-hand side does not fit the selected region
    ShapeMismatch,
    /// source shape can not be broadcast into the target shape
    BroadcastIncompatible,
}

/// The structured facts of an [`ArrayError`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Detail {
    /// `index` (as supplied, before resolution) is outside `0..extent`.
    Index { axis: usize, index: isize, extent: usize },
    /// A boolean mask of length `len` was applied to an axis of `extent`.
    MaskLength { axis: usize, len: usize, extent: usize },
    /// A multi-element range with step zero.
    ZeroStep { axis: usize },
    /// The element kind found is not convertible to the one expected.
    ElementKind { expected: ElementKind, found: ElementKind },
    /// A value that is not a number, boolean or array of them.
    NotNumeric { found: &'static str },
    /// A float, bool or other value that can not act as an index.
    NotAnIndex { axis: usize, found: &'static str },
    /// A scalar did not fit the element kind (NaN, overflow).
    Conversion { expected: ElementKind },
    /// The value has `found` axes where `expected` were required.
    Rank { expected: usize, found: usize },
    /// No dispatch rule exists for these index kinds.
    IndexCombination { kinds: Vec<IndexKind> },
    /// A data vector with `len` elements does not fill `shape`.
    Length { shape: Dim, len: usize },
    /// The assigned value of shape `rhs` does not fit the selection.
    AssignShape { selection: Dim, rhs: Dim },
    /// Shape `from` does not broadcast into shape `to`.
    Broadcast { from: Dim, to: Dim },
}

/// Name and caller label of the operation an error occurred in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Context {
    pub name: String,
    pub label: String,
}

impl ArrayError {
    pub fn new(detail: Detail) -> Self {
        ArrayError {
            repr: Box::new(Repr {
                detail,
                context: None,
            }),
        }
    }

    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.repr.detail.kind()
    }

    /// Return the structured facts of this error.
    #[inline]
    pub fn detail(&self) -> &Detail {
        &self.repr.detail
    }

    /// Return the operation context, if one was attached.
    pub fn context(&self) -> Option<&Context> {
        self.repr.context.as_ref()
    }

    /// Attach an operation name and caller label.
    ///
    /// The innermost context wins: an error that already carries one keeps it.
    pub fn within(mut self, name: &str, label: &str) -> Self {
        if self.repr.context.is_none() {
            self.repr.context = Some(Context {
                name: name.to_owned(),
                label: label.to_owned(),
            });
        }
        self
    }
}

impl Detail {
    /// Return the `ErrorKind` this detail belongs to.
    pub fn kind(&self) -> ErrorKind {
        match *self {
            Detail::Index { .. } | Detail::MaskLength { .. } => ErrorKind::OutOfBounds,
            Detail::ZeroStep { .. } => ErrorKind::InvalidStep,
            Detail::ElementKind { .. }
            | Detail::NotNumeric { .. }
            | Detail::NotAnIndex { .. }
            | Detail::Conversion { .. } => ErrorKind::TypeMismatch,
            Detail::Rank { .. } => ErrorKind::RankMismatch,
            Detail::IndexCombination { .. } => ErrorKind::UnsupportedIndexCombination,
            Detail::Length { .. } | Detail::AssignShape { .. } => ErrorKind::ShapeMismatch,
            Detail::Broadcast { .. } => ErrorKind::BroadcastIncompatible,
        }
    }
}

impl From<Detail> for ArrayError {
    #[inline]
    fn from(detail: Detail) -> Self {
        ArrayError::new(detail)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let description = match *self {
            ErrorKind::OutOfBounds => "index out of bounds",
            ErrorKind::InvalidStep => "invalid step",
            ErrorKind::TypeMismatch => "type mismatch",
            ErrorKind::RankMismatch => "rank mismatch",
            ErrorKind::UnsupportedIndexCombination => "unsupported index combination",
            ErrorKind::ShapeMismatch => "shape mismatch",
            ErrorKind::BroadcastIncompatible => "incompatible shapes for broadcasting",
        };
        f.write_str(description)
    }
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Detail::Index { axis, index, extent } => write!(
                f,
                "index {} is out of bounds for axis {} with extent {}",
                index, axis, extent
            ),
            Detail::MaskLength { axis, len, extent } => write!(
                f,
                "boolean mask of length {} does not match axis {} with extent {}",
                len, axis, extent
            ),
            Detail::ZeroStep { axis } => {
                write!(f, "step on axis {} must not be zero for a multi-element range", axis)
            }
            Detail::ElementKind { expected, found } => {
                write!(f, "expected {} elements, found {}", expected, found)
            }
            Detail::NotNumeric { found } => write!(f, "expected a numeric value, found {}", found),
            Detail::NotAnIndex { axis, found } => {
                write!(f, "{} can not be used as an index on axis {}", found, axis)
            }
            Detail::Conversion { expected } => {
                write!(f, "value is not representable as {}", expected)
            }
            Detail::Rank { expected, found } => {
                write!(f, "expected a value of rank {}, found rank {}", expected, found)
            }
            Detail::IndexCombination { kinds } => {
                write!(f, "no indexing rule for (")?;
                for (i, kind) in kinds.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", kind)?;
                }
                write!(f, ")")
            }
            Detail::Length { shape, len } => write!(
                f,
                "{} elements can not fill shape {:?}",
                len, shape
            ),
            Detail::AssignShape { selection, rhs } => write!(
                f,
                "value of shape {:?} can not be assigned to a selection of shape {:?}",
                rhs, selection
            ),
            Detail::Broadcast { from, to } => write!(
                f,
                "could not broadcast from shape {:?} to {:?}",
                from, to
            ),
        }
    }
}

impl Error for ArrayError {}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(ctx) = &self.repr.context {
            if ctx.label.is_empty() {
                write!(f, "{}: ", ctx.name)?;
            } else {
                write!(f, "{} ({}): ", ctx.name, ctx.label)?;
            }
        }
        write!(f, "{}: {}", self.kind(), self.repr.detail)
    }
}

#[inline]
pub(crate) fn index_out_of_bounds(axis: usize, index: isize, extent: usize) -> ArrayError {
    ArrayError::new(Detail::Index { axis, index, extent })
}

#[inline]
pub(crate) fn rank_mismatch(expected: usize, found: usize) -> ArrayError {
    ArrayError::new(Detail::Rank { expected, found })
}

pub(crate) fn incompatible_broadcast(from: &Dim, to: &Dim) -> ArrayError {
    ArrayError::new(Detail::Broadcast {
        from: *from,
        to: *to,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_context() {
        let err = index_out_of_bounds(1, 7, 4).within("slice", "expr.py:3");
        assert_eq!(err.kind(), ErrorKind::OutOfBounds);
        assert_eq!(
            err.to_string(),
            "slice (expr.py:3): index out of bounds: index 7 is out of bounds for axis 1 with extent 4"
        );
    }

    #[test]
    fn innermost_context_is_kept() {
        let err = rank_mismatch(2, 3).within("inner", "").within("outer", "x");
        let ctx = err.context().unwrap();
        assert_eq!(ctx.name, "inner");
        assert!(err.to_string().starts_with("inner: rank mismatch"));
    }
}
