use std::ops::{Add, Div, IndexMut, Mul, Neg, Sub};

use super::{
    common::FloatValueType, macros::impl_four_component, point::Point4, vector::Vec4,
};

/// A raw homogeneous four-tuple.
///
/// This is what matrix products operate on. Use [`Point4`] and [`Vec4`] for
/// values whose w is known to be 1 or 0.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tuple4<T>
where
    T: FloatValueType,
{
    /// The x component of the tuple.
    pub x: T,
    /// The y component of the tuple.
    pub y: T,
    /// The z component of the tuple.
    pub z: T,
    /// The w component of the tuple.
    pub w: T,
}

impl_four_component!(Tuple4);

impl<T> Tuple4<T>
where
    T: FloatValueType,
{
    /// Creates a new `Tuple4`.
    #[inline]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        let ret = Self { x, y, z, w };
        debug_assert!(!ret.has_nans());
        ret
    }

    /// Creates a new `Tuple4` of zeros.
    #[inline]
    pub fn zeros() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    /// Calculates the dot product over all four components.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Returns this `Tuple4` divided by its w. Returned as is if w is zero.
    #[inline]
    pub fn homogenized(&self) -> Self {
        if self.w == T::zero() {
            *self
        } else {
            Self {
                x: self.x / self.w,
                y: self.y / self.w,
                z: self.z / self.w,
                w: T::one(),
            }
        }
    }
}

impl<T> IndexMut<usize> for Tuple4<T>
where
    T: FloatValueType,
{
    fn index_mut(&mut self, component: usize) -> &mut T {
        match component {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Component {} is out of bounds for Tuple4", component),
        }
    }
}

impl<T> From<Point4<T>> for Tuple4<T>
where
    T: FloatValueType,
{
    fn from(p: Point4<T>) -> Self {
        Self::new(p.x, p.y, p.z, T::one())
    }
}

impl<T> From<Vec4<T>> for Tuple4<T>
where
    T: FloatValueType,
{
    fn from(v: Vec4<T>) -> Self {
        Self::new(v.x, v.y, v.z, T::zero())
    }
}

impl<T> Add for Tuple4<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
            w: self.w + other.w,
        }
    }
}

impl<T> Sub for Tuple4<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
            w: self.w - other.w,
        }
    }
}

impl<T> Neg for Tuple4<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}

impl<T> Mul<T> for Tuple4<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn mul(self, s: T) -> Self {
        Self {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
            w: self.w * s,
        }
    }
}

impl<T> Div<T> for Tuple4<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn div(self, s: T) -> Self {
        Self {
            x: self.x / s,
            y: self.y / s,
            z: self.z / s,
            w: self.w / s,
        }
    }
}
