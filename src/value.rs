// Copyright 2026 ndvalue developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::element::{Element, ElementKind};
use crate::ArrayValue;

/// An operand as handed over by the evaluator.
///
/// The evaluator resolves sub-expressions into `Value`s without knowing
/// whether they will be used as data or as indices; [`coerce`](crate::coerce)
/// and [`slice::classify`](crate::slice::classify) decide how to read them.
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'a> {
    /// An absent operand, e.g. an omitted slice bound.
    Nil,
    Bool(ArrayValue<'a, bool>),
    Int(ArrayValue<'a, i64>),
    Float(ArrayValue<'a, f64>),
    Str(String),
    List(Vec<Value<'a>>),
}

impl<'a> Value<'a> {
    /// The element kind of an array operand, `Unknown` for everything else.
    pub fn element_kind(&self) -> ElementKind {
        match self {
            Value::Bool(_) => ElementKind::Bool,
            Value::Int(_) => ElementKind::Int64,
            Value::Float(_) => ElementKind::Float64,
            Value::Nil | Value::Str(_) | Value::List(_) => ElementKind::Unknown,
        }
    }

    /// The rank of an array operand.
    pub fn ndim(&self) -> Option<usize> {
        match_array!(self, a => Some(a.ndim()), _other => None)
    }

    /// Return `true` if this is an array operand borrowing its storage.
    pub fn is_view(&self) -> bool {
        match_array!(self, a => a.is_view(), _other => false)
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Borrow the array if it holds elements of type `A`.
    pub fn as_array<A: Element>(&self) -> Option<&ArrayValue<'a, A>> {
        A::as_array(self)
    }

    /// A description of the operand's variant for diagnostics.
    pub(crate) fn describe(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "a boolean array",
            Value::Int(_) => "an integer array",
            Value::Float(_) => "a float array",
            Value::Str(_) => "a string",
            Value::List(_) => "a list",
        }
    }

    /// Return a value that borrows all array storage of `self`.
    pub fn view(&self) -> Value<'_> {
        match self {
            Value::Nil => Value::Nil,
            Value::Bool(a) => Value::Bool(a.view()),
            Value::Int(a) => Value::Int(a.view()),
            Value::Float(a) => Value::Float(a.view()),
            Value::Str(s) => Value::Str(s.clone()),
            Value::List(items) => Value::List(items.iter().map(Value::view).collect()),
        }
    }

    /// Turn every array inside the value into owned storage.
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Nil => Value::Nil,
            Value::Bool(a) => Value::Bool(a.into_owned()),
            Value::Int(a) => Value::Int(a.into_owned()),
            Value::Float(a) => Value::Float(a.into_owned()),
            Value::Str(s) => Value::Str(s),
            Value::List(items) => Value::List(items.into_iter().map(Value::into_owned).collect()),
        }
    }
}

impl<'a, A: Element> From<ArrayValue<'a, A>> for Value<'a> {
    fn from(array: ArrayValue<'a, A>) -> Self {
        A::into_value(array)
    }
}

macro_rules! impl_value_from_scalar {
    ($($elem:ty),*) => {
        $(
            impl From<$elem> for Value<'static> {
                #[inline]
                fn from(x: $elem) -> Self {
                    Value::from(ArrayValue::from_scalar(x))
                }
            }
        )*
    };
}

impl_value_from_scalar!(bool, i64, f64);

impl<'s> From<&'s str> for Value<'static> {
    fn from(s: &'s str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl<'a> From<Vec<Value<'a>>> for Value<'a> {
    fn from(items: Vec<Value<'a>>) -> Self {
        Value::List(items)
    }
}

impl<'a, T> From<Option<T>> for Value<'a>
where
    T: Into<Value<'a>>,
{
    /// `None` becomes `Nil`.
    fn from(x: Option<T>) -> Self {
        match x {
            Some(x) => x.into(),
            None => Value::Nil,
        }
    }
}

impl<'a> fmt::Display for Value<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Bool(a) => fmt::Display::fmt(a, f),
            Value::Int(a) => fmt::Display::fmt(a, f),
            Value::Float(a) => fmt::Display::fmt(a, f),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::List(items) => {
                f.write_str("list(")?;
                for (i, item) in items.iter().enumerate() {
                    if i != 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(item, f)?;
                }
                f.write_str(")")
            }
        }
    }
}
