// Copyright 2026 ndvalue developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[cfg(feature = "approx")]
mod approx_methods {
    use crate::ArrayValue;

    impl<'a, A> ArrayValue<'a, A> {
        /// Return `true` if the shapes match and every pair of elements is
        /// within `epsilon` of each other.
        ///
        /// **Requires crate feature `"approx"`**
        pub fn abs_diff_eq<B>(&self, other: &ArrayValue<'_, B>, epsilon: A::Epsilon) -> bool
        where
            A: ::approx::AbsDiffEq<B>,
            A::Epsilon: Clone,
        {
            <Self as ::approx::AbsDiffEq<_>>::abs_diff_eq(self, other, epsilon)
        }

        /// Elementwise relative comparison, falling back to `epsilon` for
        /// values close to zero.
        pub fn relative_eq<B>(
            &self,
            other: &ArrayValue<'_, B>,
            epsilon: A::Epsilon,
            max_relative: A::Epsilon,
        ) -> bool
        where
            A: ::approx::RelativeEq<B>,
            A::Epsilon: Clone,
        {
            <Self as ::approx::RelativeEq<_>>::relative_eq(self, other, epsilon, max_relative)
        }
    }
}

#[cfg(feature = "approx")]
mod approx_traits {
    use approx::{AbsDiffEq, RelativeEq, UlpsEq};

    use crate::ArrayValue;

    /// Shapes must match exactly; no broadcasting takes place.
    fn all_pairs<A, B, F>(a: &ArrayValue<'_, A>, b: &ArrayValue<'_, B>, mut close: F) -> bool
    where
        F: FnMut(&A, &B) -> bool,
    {
        a.shape() == b.shape() && a.iter().zip(b.iter()).all(|(x, y)| close(x, y))
    }

    /// **Requires crate feature `"approx"`.**
    impl<'a, 'b, A, B> AbsDiffEq<ArrayValue<'b, B>> for ArrayValue<'a, A>
    where
        A: AbsDiffEq<B>,
        A::Epsilon: Clone,
    {
        type Epsilon = A::Epsilon;

        fn default_epsilon() -> A::Epsilon {
            A::default_epsilon()
        }

        fn abs_diff_eq(&self, other: &ArrayValue<'b, B>, epsilon: A::Epsilon) -> bool {
            all_pairs(self, other, |x, y| x.abs_diff_eq(y, epsilon.clone()))
        }
    }

    impl<'a, 'b, A, B> RelativeEq<ArrayValue<'b, B>> for ArrayValue<'a, A>
    where
        A: RelativeEq<B>,
        A::Epsilon: Clone,
    {
        fn default_max_relative() -> A::Epsilon {
            A::default_max_relative()
        }

        fn relative_eq(&self, other: &ArrayValue<'b, B>, epsilon: A::Epsilon, max_relative: A::Epsilon) -> bool {
            all_pairs(self, other, |x, y| {
                x.relative_eq(y, epsilon.clone(), max_relative.clone())
            })
        }
    }

    impl<'a, 'b, A, B> UlpsEq<ArrayValue<'b, B>> for ArrayValue<'a, A>
    where
        A: UlpsEq<B>,
        A::Epsilon: Clone,
    {
        fn default_max_ulps() -> u32 {
            A::default_max_ulps()
        }

        fn ulps_eq(&self, other: &ArrayValue<'b, B>, epsilon: A::Epsilon, max_ulps: u32) -> bool {
            all_pairs(self, other, |x, y| x.ulps_eq(y, epsilon.clone(), max_ulps))
        }
    }

}
