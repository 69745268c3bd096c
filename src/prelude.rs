// Copyright 2026 ndvalue developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! ndvalue prelude.
//!
//! This module contains the most used types, traits, functions, and macros
//! that you can import easily as a group.
//!
//! ```
//! use ndvalue::prelude::*;
//!
//! let a = array![[1, 2], [3, 4]];
//! assert_eq!(a.slice(&s![.., 0]).unwrap(), arr1(&[1, 3]));
//! ```

#[doc(no_inline)]
pub use crate::{ArrayValue, OwnedValue, Value};

#[doc(no_inline)]
pub use crate::{Axis, Dim, IntoDimension};

#[doc(no_inline)]
pub use crate::{AxisArg, IndexSpec, Slice, SliceIndex};

#[doc(no_inline)]
pub use crate::{ArrayError, ErrorKind};

#[doc(no_inline)]
pub use crate::coerce::Coercion;

#[doc(no_inline)]
pub use crate::{arr0, arr1, arr2, arr3, arr4, aview0, aview1, aview2};

pub use crate::{array, s};
