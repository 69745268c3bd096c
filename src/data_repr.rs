// Copyright 2026 ndvalue developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Array value's storage: either an owned vector or a borrowed slice.
///
/// *Use [`ArrayValue`](crate::ArrayValue) rather than this type directly.*
// Like a Cow<'a, [A]>, but without requiring `A: Clone` to exist at all.
#[derive(Debug)]
pub(crate) enum Repr<'a, A> {
    /// Uniquely owned elements; may be mutated in place.
    Owned(Vec<A>),
    /// Elements borrowed from another value or from outside the crate.
    View(&'a [A]),
}

impl<'a, A> Repr<'a, A> {
    #[inline]
    pub(crate) fn as_slice(&self) -> &[A] {
        match self {
            Repr::Owned(v) => v,
            Repr::View(s) => s,
        }
    }

    /// Mutable access to the elements; `None` for borrowed storage.
    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> Option<&mut [A]> {
        match self {
            Repr::Owned(v) => Some(v),
            Repr::View(_) => None,
        }
    }

    #[inline]
    pub(crate) fn is_view(&self) -> bool {
        matches!(self, Repr::View(_))
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.as_slice().len()
    }
}

impl<'a, A: Clone> Clone for Repr<'a, A> {
    fn clone(&self) -> Self {
        match self {
            Repr::Owned(v) => Repr::Owned(v.clone()),
            Repr::View(s) => Repr::View(*s),
        }
    }
}
