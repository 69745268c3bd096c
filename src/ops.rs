// Copyright 2026 ndvalue developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Operations on opaque operands, as called by an expression evaluator.
//!
//! Each operation takes an [`OpContext`] naming the operation and the
//! caller's label. Every error it returns carries that context.
use tracing::trace;

use crate::coerce::{coerce_array, Coercion};
use crate::dimension::Dim;
use crate::error::{ArrayError, Detail};
use crate::slice::{classify, AxisArg};
use crate::value::Value;

/// The name and caller label of an operation, for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OpContext {
    pub name: String,
    pub label: String,
}

impl OpContext {
    pub fn new(name: &str, label: &str) -> Self {
        OpContext {
            name: name.to_owned(),
            label: label.to_owned(),
        }
    }

    fn wrap<T>(&self, result: Result<T, ArrayError>) -> Result<T, ArrayError> {
        result.map_err(|e| e.within(&self.name, &self.label))
    }
}

fn not_an_array(value: &Value<'_>) -> ArrayError {
    ArrayError::new(Detail::NotNumeric {
        found: value.describe(),
    })
}

fn classify_all(indices: &[Value<'_>]) -> Result<Vec<AxisArg>, ArrayError> {
    indices
        .iter()
        .enumerate()
        .map(|(axis, index)| classify(index, axis))
        .collect()
}

/// Select from `value` by one index operand per axis.
///
/// Index operands are read by [`classify`]: nil for a whole axis, a list
/// `(start, stop, step)` for a range, an integer for a single position, an
/// integer vector for a list of positions and a boolean vector for a mask.
/// Range selections return views of `value`.
///
/// ```
/// use ndvalue::ops::{self, OpContext};
/// use ndvalue::{arr1, Value};
///
/// let ctx = OpContext::new("slice", "x[1:]");
/// let x = Value::from(arr1(&[10i64, 20, 30]));
/// let range = Value::from(vec![Value::from(1i64), Value::Nil]);
/// let y = ops::slice(&ctx, &x, &[range]).unwrap();
/// assert_eq!(y, Value::from(arr1(&[20i64, 30])));
/// assert!(y.is_view());
/// ```
pub fn slice<'v>(ctx: &OpContext, value: &'v Value<'_>, indices: &[Value<'_>]) -> Result<Value<'v>, ArrayError> {
    ctx.wrap((|| {
        let args = classify_all(indices)?;
        trace!(op = %ctx.name, kinds = ?args.iter().map(AxisArg::kind).collect::<Vec<_>>(), "slice");
        match_array!(value, a, wrap => a.slice(&args).map(wrap), other => Err(not_an_array(other)))
    })())
}

/// Assign `rhs` to the selection of `target` given by one index operand
/// per axis.
///
/// `rhs` is converted leniently to the element kind of `target` and
/// broadcast to the shape of the selection. A view target is promoted to
/// owned storage. Nothing is written if any step fails.
pub fn slice_assign(
    ctx: &OpContext,
    target: &mut Value<'_>,
    indices: &[Value<'_>],
    rhs: Value<'_>,
) -> Result<(), ArrayError> {
    ctx.wrap((|| {
        let args = classify_all(indices)?;
        match_array!(target, a => a.slice_assign(&args, &coerce_array(rhs, Coercion::Lenient)?),
            other => Err(not_an_array(other)))
    })())
}

/// Broadcast `value` to `shape`; the result is a view of `value`.
pub fn broadcast<'v>(ctx: &OpContext, value: &'v Value<'_>, shape: &[usize]) -> Result<Value<'v>, ArrayError> {
    ctx.wrap((|| {
        let dim = Dim::from_slice(shape)?;
        match_array!(value, a, wrap => a.broadcast(dim).map(wrap), other => Err(not_an_array(other)))
    })())
}
