// Copyright 2026 ndvalue developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reading opaque [`Value`] operands as typed scalars and arrays.
//!
//! Under [`Coercion::Strict`] the operand must already have the requested
//! element kind (and rank, where one is asked for). Under
//! [`Coercion::Lenient`] booleans, integers and floats convert into each
//! other:
//!
//! - `bool` to a number is 0 or 1 and a number to `bool` is `x != 0`;
//! - `f64` to `i64` truncates toward zero;
//! - NaN, and floats outside the range of `i64`, do not convert.
//!
//! Nil, strings and lists are never numeric, except that a lenient array
//! coercion reads a flat list of scalars as a vector.
use tracing::trace;

use crate::dimension::Axis;
use crate::element::Element;
use crate::error::{rank_mismatch, ArrayError, Detail};
use crate::value::Value;
use crate::ArrayValue;

/// How far a coercion may convert its operand.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Coercion {
    /// The operand must already have the requested kind.
    Strict,
    /// Numeric kinds convert into each other.
    #[default]
    Lenient,
}

fn not_numeric(value: &Value<'_>) -> ArrayError {
    ArrayError::new(Detail::NotNumeric {
        found: value.describe(),
    })
}

fn kind_mismatch<T: Element>(value: &Value<'_>) -> ArrayError {
    ArrayError::new(Detail::ElementKind {
        expected: T::KIND,
        found: value.element_kind(),
    })
}

/// The only element of `a`, or `RankMismatch` if it has zero or several.
fn sole_element<A: Copy>(a: &ArrayValue<'_, A>) -> Result<A, ArrayError> {
    match (a.len(), a.iter().next()) {
        (1, Some(&x)) => Ok(x),
        _ => Err(rank_mismatch(0, a.ndim())),
    }
}

fn convert<A: Element, T: Element>(x: A) -> Result<T, ArrayError> {
    x.cast::<T>()
        .ok_or_else(|| ArrayError::new(Detail::Conversion { expected: T::KIND }))
}

/// Read `value` as a scalar of element type `T`.
///
/// **Errors**
///
/// - `TypeMismatch` for nil, strings and lists; under `Strict` also for an
///   array of another element kind, and under `Lenient` for an element
///   that has no representation in `T`.
/// - `RankMismatch` under `Strict` for an array of rank other than 0, and
///   under `Lenient` for an array that does not hold exactly one element.
///
/// ```
/// use ndvalue::coerce::{coerce_scalar, Coercion};
/// use ndvalue::Value;
///
/// assert_eq!(coerce_scalar::<i64>(&Value::from(2.9), Coercion::Lenient), Ok(2));
/// assert!(coerce_scalar::<i64>(&Value::from(2.9), Coercion::Strict).is_err());
/// ```
pub fn coerce_scalar<T: Element>(value: &Value<'_>, mode: Coercion) -> Result<T, ArrayError> {
    if mode == Coercion::Strict {
        let a = match value.as_array::<T>() {
            Some(a) => a,
            None if value.ndim().is_some() => return Err(kind_mismatch::<T>(value)),
            None => return Err(not_numeric(value)),
        };
        if a.ndim() != 0 {
            return Err(rank_mismatch(0, a.ndim()));
        }
        return sole_element(a);
    }
    match_array!(value, a => convert(sole_element(a)?), other => Err(not_numeric(other)))
}

/// Read `value` as an array with element type `T`.
///
/// An operand that already holds `T` elements is returned unchanged: a
/// view stays a view of the same storage and owned storage is moved. Under
/// `Lenient` other element kinds are converted into new owned storage, and
/// a list of scalars becomes a vector.
///
/// **Errors** with `TypeMismatch` for operands that are not numeric, under
/// `Strict` for another element kind, and under `Lenient` for an element
/// that has no representation in `T`.
pub fn coerce_array<'a, T: Element>(value: Value<'a>, mode: Coercion) -> Result<ArrayValue<'a, T>, ArrayError> {
    let value = match T::from_value(value) {
        Ok(a) => return Ok(a),
        Err(value) => value,
    };
    match (mode, value) {
        (Coercion::Strict, value) if value.ndim().is_some() => Err(kind_mismatch::<T>(&value)),
        (Coercion::Lenient, Value::List(items)) => {
            let v = items
                .iter()
                .map(|item| match item.ndim() {
                    Some(0) => coerce_scalar::<T>(item, Coercion::Lenient),
                    Some(n) => Err(rank_mismatch(0, n)),
                    None => Err(not_numeric(item)),
                })
                .collect::<Result<Vec<T>, _>>()?;
            trace!(len = v.len(), to = %T::KIND, "list read as vector");
            Ok(ArrayValue::from(v))
        }
        (Coercion::Lenient, value) => {
            let from = value.element_kind();
            let a = match_array!(value, a => convert_array::<_, T>(&a)?, other => {
                return Err(not_numeric(&other))
            });
            trace!(%from, to = %T::KIND, shape = ?a.dim(), "converted elements");
            Ok(a)
        }
        (_, value) => Err(not_numeric(&value)),
    }
}

fn convert_array<'b, A: Element, T: Element>(a: &ArrayValue<'_, A>) -> Result<ArrayValue<'b, T>, ArrayError> {
    let v = a
        .iter()
        .map(|&x| convert::<A, T>(x))
        .collect::<Result<Vec<T>, _>>()?;
    Ok(ArrayValue::from_vec_dim_unchecked(a.dim(), v))
}

/// Read `value` as an array with element type `T` and `rank` axes.
///
/// Under `Strict` the rank must match exactly. Under `Lenient` an operand
/// with fewer axes gets leading axes of length one, without copying.
///
/// **Errors** with `RankMismatch` as described, and with the errors of
/// [`coerce_array`].
///
/// ```
/// use ndvalue::coerce::{coerce_array_rank, Coercion};
/// use ndvalue::{arr1, Value};
///
/// let v = coerce_array_rank::<i64>(Value::from(arr1(&[1i64, 2, 3])), Coercion::Lenient, 2).unwrap();
/// assert_eq!(v.shape(), &[1, 3]);
/// ```
pub fn coerce_array_rank<'a, T: Element>(
    value: Value<'a>,
    mode: Coercion,
    rank: usize,
) -> Result<ArrayValue<'a, T>, ArrayError> {
    let mut a = coerce_array::<T>(value, mode)?;
    if a.ndim() > rank || (mode == Coercion::Strict && a.ndim() != rank) {
        return Err(rank_mismatch(rank, a.ndim()));
    }
    while a.ndim() < rank {
        a = a.insert_axis(Axis(0))?;
    }
    Ok(a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::{arr1, arr2};

    #[test]
    fn lenient_scalar_accepts_one_element_arrays() {
        let v = Value::from(arr2(&[[4.5]]));
        assert_eq!(coerce_scalar::<f64>(&v, Coercion::Lenient), Ok(4.5));
        assert_eq!(
            coerce_scalar::<f64>(&v, Coercion::Strict).unwrap_err().kind(),
            ErrorKind::RankMismatch
        );
        let w = Value::from(arr1(&[1i64, 2]));
        assert_eq!(
            coerce_scalar::<i64>(&w, Coercion::Lenient).unwrap_err().kind(),
            ErrorKind::RankMismatch
        );
    }

    #[test]
    fn nan_does_not_convert() {
        let err = coerce_scalar::<i64>(&Value::from(f64::NAN), Coercion::Lenient).unwrap_err();
        assert_eq!(err.detail(), &Detail::Conversion { expected: crate::ElementKind::Int64 });
        let err = coerce_scalar::<bool>(&Value::from(f64::NAN), Coercion::Lenient).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn strings_are_not_numeric() {
        for mode in [Coercion::Strict, Coercion::Lenient] {
            let err = coerce_scalar::<i64>(&Value::from("7"), mode).unwrap_err();
            assert_eq!(err.detail(), &Detail::NotNumeric { found: "a string" });
            let err = coerce_array::<i64>(Value::Nil, mode).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        }
    }

    #[test]
    fn nested_list_is_rejected() {
        let list = Value::from(vec![Value::from(1i64), Value::from(vec![Value::from(2i64)])]);
        let err = coerce_array::<i64>(list, Coercion::Lenient).unwrap_err();
        assert_eq!(err.detail(), &Detail::NotNumeric { found: "a list" });
    }
}
