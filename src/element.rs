// Copyright 2026 ndvalue developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use num_traits::NumCast;

use crate::value::Value;
use crate::ArrayValue;

/// The element kind of a value.
///
/// Kinds are ordered by widening: `Bool < Int64 < Float64`. `Unknown` is
/// reported for values that do not (yet) carry typed elements, such as nil,
/// strings and untyped lists.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementKind {
    Bool,
    Int64,
    Float64,
    Unknown,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            ElementKind::Bool => "bool",
            ElementKind::Int64 => "int64",
            ElementKind::Float64 => "float64",
            ElementKind::Unknown => "unknown",
        })
    }
}

/// Element types an array value can be evaluated with: `bool`, `i64` and `f64`.
///
/// The conversion methods implement lenient coercion; they return `None`
/// when the source has no representation in `Self` (NaN or an out of range
/// float converted to an integer).
pub trait Element:
    Copy + PartialEq + PartialOrd + Default + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    const KIND: ElementKind;

    fn from_bool(x: bool) -> Self;
    fn from_i64(x: i64) -> Option<Self>;
    fn from_f64(x: f64) -> Option<Self>;

    /// Convert `self` into another element type.
    fn cast<T: Element>(self) -> Option<T>;

    #[doc(hidden)]
    fn into_value(array: ArrayValue<'_, Self>) -> Value<'_>;

    /// Take the array out of `value` if it holds elements of this kind,
    /// otherwise hand the value back.
    #[doc(hidden)]
    fn from_value(value: Value<'_>) -> Result<ArrayValue<'_, Self>, Value<'_>>;

    #[doc(hidden)]
    fn as_array<'v, 'a>(value: &'v Value<'a>) -> Option<&'v ArrayValue<'a, Self>>;
}

impl Element for bool {
    const KIND: ElementKind = ElementKind::Bool;

    #[inline]
    fn from_bool(x: bool) -> Self {
        x
    }

    #[inline]
    fn from_i64(x: i64) -> Option<Self> {
        Some(x != 0)
    }

    #[inline]
    fn from_f64(x: f64) -> Option<Self> {
        if x.is_nan() {
            None
        } else {
            Some(x != 0.)
        }
    }

    #[inline]
    fn cast<T: Element>(self) -> Option<T> {
        Some(T::from_bool(self))
    }

    fn into_value(array: ArrayValue<'_, Self>) -> Value<'_> {
        Value::Bool(array)
    }

    fn from_value(value: Value<'_>) -> Result<ArrayValue<'_, Self>, Value<'_>> {
        match value {
            Value::Bool(a) => Ok(a),
            other => Err(other),
        }
    }

    fn as_array<'v, 'a>(value: &'v Value<'a>) -> Option<&'v ArrayValue<'a, Self>> {
        match value {
            Value::Bool(a) => Some(a),
            _ => None,
        }
    }
}

impl Element for i64 {
    const KIND: ElementKind = ElementKind::Int64;

    #[inline]
    fn from_bool(x: bool) -> Self {
        x as i64
    }

    #[inline]
    fn from_i64(x: i64) -> Option<Self> {
        Some(x)
    }

    /// Truncates toward zero.
    #[inline]
    fn from_f64(x: f64) -> Option<Self> {
        <i64 as NumCast>::from(x)
    }

    #[inline]
    fn cast<T: Element>(self) -> Option<T> {
        T::from_i64(self)
    }

    fn into_value(array: ArrayValue<'_, Self>) -> Value<'_> {
        Value::Int(array)
    }

    fn from_value(value: Value<'_>) -> Result<ArrayValue<'_, Self>, Value<'_>> {
        match value {
            Value::Int(a) => Ok(a),
            other => Err(other),
        }
    }

    fn as_array<'v, 'a>(value: &'v Value<'a>) -> Option<&'v ArrayValue<'a, Self>> {
        match value {
            Value::Int(a) => Some(a),
            _ => None,
        }
    }
}

impl Element for f64 {
    const KIND: ElementKind = ElementKind::Float64;

    #[inline]
    fn from_bool(x: bool) -> Self {
        if x {
            1.
        } else {
            0.
        }
    }

    #[inline]
    fn from_i64(x: i64) -> Option<Self> {
        <f64 as NumCast>::from(x)
    }

    #[inline]
    fn from_f64(x: f64) -> Option<Self> {
        Some(x)
    }

    #[inline]
    fn cast<T: Element>(self) -> Option<T> {
        T::from_f64(self)
    }

    fn into_value(array: ArrayValue<'_, Self>) -> Value<'_> {
        Value::Float(array)
    }

    fn from_value(value: Value<'_>) -> Result<ArrayValue<'_, Self>, Value<'_>> {
        match value {
            Value::Float(a) => Ok(a),
            other => Err(other),
        }
    }

    fn as_array<'v, 'a>(value: &'v Value<'a>) -> Option<&'v ArrayValue<'a, Self>> {
        match value {
            Value::Float(a) => Some(a),
            _ => None,
        }
    }
}
