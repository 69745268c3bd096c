// Copyright 2026 ndvalue developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::{ArrayValue, Ix, MAX_RANK};

fn format_array<A, F>(array: &ArrayValue<'_, A>, f: &mut fmt::Formatter, mut format: F) -> fmt::Result
where
    F: FnMut(&A, &mut fmt::Formatter) -> fmt::Result,
{
    let mut index = [0; MAX_RANK];
    write_axis(array, &mut index, 0, f, &mut format)
}

/// Write the subarray at `index[..axis]`, one bracket level per axis.
/// Rows after the first start on a new line, indented past the open brackets.
fn write_axis<A, F>(
    array: &ArrayValue<'_, A>,
    index: &mut [Ix; MAX_RANK],
    axis: usize,
    f: &mut fmt::Formatter,
    format: &mut F,
) -> fmt::Result
where
    F: FnMut(&A, &mut fmt::Formatter) -> fmt::Result,
{
    let ndim = array.ndim();
    if axis == ndim {
        let elt = array.get(&index[..ndim]).ok_or(fmt::Error)?;
        return format(elt, f);
    }
    f.write_str("[")?;
    for i in 0..array.shape()[axis] {
        if i != 0 {
            if axis + 1 == ndim {
                f.write_str(", ")?;
            } else {
                f.write_str(",\n")?;
                for _ in 0..=axis {
                    f.write_str(" ")?;
                }
            }
        }
        index[axis] = i;
        write_axis(array, index, axis + 1, f, format)?;
    }
    f.write_str("]")
}

/// Format the array using `Display` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style.
impl<'a, A: fmt::Display> fmt::Display for ArrayValue<'a, A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        format_array(self, f, <_>::fmt)
    }
}

/// Format the array using `Debug` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style, followed by its shape, strides and
/// whether it is a view.
impl<'a, A: fmt::Debug> fmt::Debug for ArrayValue<'a, A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Add extra information for Debug
        format_array(self, f, <_>::fmt)?;
        write!(
            f,
            " shape={:?}, strides={:?}, view={}",
            self.shape(),
            self.strides(),
            self.is_view()
        )
    }
}

/// Format the array using `LowerExp` and apply the formatting parameters used
/// to each element.
impl<'a, A: fmt::LowerExp> fmt::LowerExp for ArrayValue<'a, A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        format_array(self, f, <_>::fmt)
    }
}
