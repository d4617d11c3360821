use approx::{AbsDiffEq, RelativeEq};
use std::ops::{Add, AddAssign, Div, Mul, MulAssign};

use super::common::FloatValueType;

/// A color stored as linear RGB
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spectrum<T>
where
    T: FloatValueType,
{
    /// The r component of the color
    pub r: T,
    /// The g component of the color
    pub g: T,
    /// The b component of the color
    pub b: T,
}

impl<T> Spectrum<T>
where
    T: FloatValueType,
{
    /// Creates a new `Spectrum`.
    #[inline]
    pub fn new(r: T, g: T, b: T) -> Self {
        let ret = Self { r, g, b };
        debug_assert!(!ret.has_nans());
        ret
    }

    /// Creates a new black `Spectrum`.
    #[inline]
    pub fn zeros() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Creates a new `Spectrum` with all components set to 1.
    #[inline]
    pub fn ones() -> Self {
        Self::new(T::one(), T::one(), T::one())
    }

    /// Checks if any of the components is NaN.
    #[inline]
    pub fn has_nans(&self) -> bool {
        self.r.is_nan() || self.g.is_nan() || self.b.is_nan()
    }

    /// Checks if all components are zero.
    #[inline]
    pub fn is_black(&self) -> bool {
        self.r == T::zero() && self.g == T::zero() && self.b == T::zero()
    }

    /// Returns this `Spectrum` with each component clamped to `[min, max]`.
    #[inline]
    pub fn clamped(&self, min: T, max: T) -> Self {
        Self::new(
            self.r.max(min).min(max),
            self.g.max(min).min(max),
            self.b.max(min).min(max),
        )
    }
}

impl<T> Default for Spectrum<T>
where
    T: FloatValueType,
{
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T> Add for Spectrum<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl<T> AddAssign for Spectrum<T>
where
    T: FloatValueType,
{
    fn add_assign(&mut self, other: Self) {
        self.r += other.r;
        self.g += other.g;
        self.b += other.b;
    }
}

impl<T> Mul for Spectrum<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }
}

impl<T> MulAssign for Spectrum<T>
where
    T: FloatValueType,
{
    fn mul_assign(&mut self, other: Self) {
        self.r *= other.r;
        self.g *= other.g;
        self.b *= other.b;
    }
}

impl<T> Mul<T> for Spectrum<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn mul(self, s: T) -> Self {
        Self::new(self.r * s, self.g * s, self.b * s)
    }
}

impl<T> Div<T> for Spectrum<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn div(self, s: T) -> Self {
        Self::new(self.r / s, self.g / s, self.b / s)
    }
}

impl<T> AbsDiffEq for Spectrum<T>
where
    T: FloatValueType + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        super::common::epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.r.abs_diff_eq(&other.r, epsilon)
            && self.g.abs_diff_eq(&other.g, epsilon)
            && self.b.abs_diff_eq(&other.b, epsilon)
    }
}

impl<T> RelativeEq for Spectrum<T>
where
    T: FloatValueType + RelativeEq + AbsDiffEq<Epsilon = T>,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.r.relative_eq(&other.r, epsilon, max_relative)
            && self.g.relative_eq(&other.g, epsilon, max_relative)
            && self.b.relative_eq(&other.b, epsilon, max_relative)
    }
}
