// Copyright 2026 ndvalue developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use itertools::izip;

use super::{Dim, Ixs, Strides, MAX_RANK};
use crate::error::{incompatible_broadcast, ArrayError};

/// Calculate the common shape for a pair of array shapes, that they can be broadcasted
/// to. Return an error if the shapes are not compatible.
///
/// Uses the [NumPy broadcasting rules]
//  (https://docs.scipy.org/doc/numpy/user/basics.broadcasting.html#general-broadcasting-rules).
pub fn broadcast_shape(shape1: &Dim, shape2: &Dim) -> Result<Dim, ArrayError> {
    let (k, overflow) = shape1.ndim().overflowing_sub(shape2.ndim());
    // Swap the order if d2 is longer.
    if overflow {
        return broadcast_shape(shape2, shape1);
    }
    // The output should be the same length as shape1.
    let mut out = *shape1;
    for (out, &s2) in izip!(&mut out.slice_mut()[k..], shape2.slice()) {
        if *out != s2 {
            if *out == 1 {
                *out = s2
            } else if s2 != 1 {
                return Err(incompatible_broadcast(shape2, shape1));
            }
        }
    }
    Ok(out)
}

/// Return new stride when trying to grow `from` into shape `to`
///
/// Broadcasting works by returning a "fake stride" where elements
/// to repeat are in axes with 0 stride, so that several indexes point
/// to the same element.
///
/// Axes are matched from the back; leading target axes with no source
/// counterpart get stride 0 as well.
pub(crate) fn upcast(to: &Dim, from: &Dim, stride: &[Ixs]) -> Result<Strides, ArrayError> {
    if to.ndim() < from.ndim() {
        return Err(incompatible_broadcast(from, to));
    }
    let mut new_stride = [0; MAX_RANK];
    // begin at the back (the least significant dimension)
    // size of the axis has to either agree or `from` has to be 1
    for (dr, &er, &es, &tr) in izip!(
        new_stride[..to.ndim()].iter_mut().rev(),
        from.slice().iter().rev(),
        stride.iter().rev(),
        to.slice().iter().rev()
    ) {
        if tr == er {
            /* keep stride */
            *dr = es;
        } else if er == 1 {
            /* dead dimension, zero stride */
            *dr = 0
        } else {
            return Err(incompatible_broadcast(from, to));
        }
    }
    // remaining leading strides stay zero
    Ok(new_stride)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::IntoDimension;
    use crate::error::ErrorKind;

    #[test]
    fn co_broadcast_shapes() {
        let a = (2, 1, 4).into_dimension();
        let b = (3, 1).into_dimension();
        assert_eq!(broadcast_shape(&a, &b).unwrap(), (2, 3, 4).into_dimension());
        assert_eq!(broadcast_shape(&b, &a).unwrap(), (2, 3, 4).into_dimension());

        let c = (2, 2).into_dimension();
        let d = 3.into_dimension();
        assert_eq!(
            broadcast_shape(&c, &d).unwrap_err().kind(),
            ErrorKind::BroadcastIncompatible
        );
        assert_eq!(broadcast_shape(&Dim::scalar(), &c).unwrap(), c);
    }

    #[test]
    fn upcast_strides() {
        let from = (3, 1).into_dimension();
        let to = (2, 3, 5).into_dimension();
        let strides = upcast(&to, &from, &[1, 1]).unwrap();
        assert_eq!(&strides[..3], &[0, 1, 0]);
        assert!(upcast(&(3, 2).into_dimension(), &(2, 2).into_dimension(), &[2, 1]).is_err());
        assert!(upcast(&3.into_dimension(), &(1, 3).into_dimension(), &[3, 1]).is_err());
    }
}
