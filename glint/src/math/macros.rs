// Shared impls for the four-component homogeneous types. The types keep their
// own constructors and arithmetic since those differ in what w is allowed to be.

macro_rules! impl_four_component {
    ( $( $tuple_type:ident ),+ ) => {
        $(
            impl<T> $tuple_type<T>
            where
                T: FloatValueType,
            {
                /// Checks if any of the components is NaN.
                #[inline]
                pub fn has_nans(&self) -> bool {
                    self.x.is_nan() || self.y.is_nan() || self.z.is_nan() || self.w.is_nan()
                }

                /// Returns the components in xyzw order.
                #[inline]
                pub fn array(&self) -> [T; 4] {
                    [self.x, self.y, self.z, self.w]
                }
            }

            impl<T> std::ops::Index<usize> for $tuple_type<T>
            where
                T: FloatValueType,
            {
                type Output = T;

                fn index(&self, component: usize) -> &T {
                    match component {
                        0 => &self.x,
                        1 => &self.y,
                        2 => &self.z,
                        3 => &self.w,
                        _ => panic!(
                            "Component {} is out of bounds for {}",
                            component,
                            stringify!($tuple_type)
                        ),
                    }
                }
            }

            // Two tuples are equal if the sum of their absolute component differences
            // is below epsilon.
            impl<T> approx::AbsDiffEq for $tuple_type<T>
            where
                T: FloatValueType + approx::AbsDiffEq<Epsilon = T>,
            {
                type Epsilon = T;

                fn default_epsilon() -> T {
                    crate::math::common::epsilon()
                }

                fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                    let sum = (self.x - other.x).abs()
                        + (self.y - other.y).abs()
                        + (self.z - other.z).abs()
                        + (self.w - other.w).abs();
                    sum <= epsilon
                }
            }

            impl<T> approx::RelativeEq for $tuple_type<T>
            where
                T: FloatValueType + approx::RelativeEq + approx::AbsDiffEq<Epsilon = T>,
            {
                fn default_max_relative() -> T {
                    T::default_max_relative()
                }

                fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                    self.x.relative_eq(&other.x, epsilon, max_relative)
                        && self.y.relative_eq(&other.y, epsilon, max_relative)
                        && self.z.relative_eq(&other.z, epsilon, max_relative)
                        && self.w.relative_eq(&other.w, epsilon, max_relative)
                }
            }

            impl<T> std::fmt::Display for $tuple_type<T>
            where
                T: FloatValueType,
            {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
                }
            }
        )*
    };
}

pub(crate) use impl_four_component;
