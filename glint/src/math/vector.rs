use std::ops::{
    Add, AddAssign, Div, DivAssign, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use super::{common::FloatValueType, macros::impl_four_component, tuple::Tuple4};

/// A direction in homogeneous coordinates. w is always 0.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vec4<T>
where
    T: FloatValueType,
{
    /// The x component of the vector.
    pub x: T,
    /// The y component of the vector.
    pub y: T,
    /// The z component of the vector.
    pub z: T,
    w: T,
}

impl_four_component!(Vec4);

/// Shorthand constructor for [`Vec4`].
#[inline]
pub fn vec4<T>(x: T, y: T, z: T) -> Vec4<T>
where
    T: FloatValueType,
{
    Vec4::new(x, y, z)
}

impl<T> Vec4<T>
where
    T: FloatValueType,
{
    /// Creates a new `Vec4`.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        let ret = Self {
            x,
            y,
            z,
            w: T::zero(),
        };
        debug_assert!(!ret.has_nans());
        ret
    }

    /// Creates a new zero-length `Vec4`.
    #[inline]
    pub fn zeros() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Returns the w component, which is always 0.
    #[inline]
    pub fn w(&self) -> T {
        self.w
    }

    /// Calculates the dot product of this `Vec4` and another.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates the cross product of this `Vec4` and another.
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Calculates the squared length of this `Vec4`.
    #[inline]
    pub fn len_sqr(&self) -> T {
        self.dot(*self)
    }

    /// Calculates the length of this `Vec4`.
    #[inline]
    pub fn len(&self) -> T {
        self.len_sqr().sqrt()
    }

    /// Returns the normalized version of this `Vec4`.
    ///
    /// A zero-length vector is returned as is.
    #[inline]
    pub fn normalized(&self) -> Self {
        let len = self.len();
        if len == T::zero() {
            *self
        } else {
            *self / len
        }
    }

    /// Calculates the angle between this `Vec4` and another in radians.
    ///
    /// The angle against a zero-length vector is 0.
    pub fn angle(&self, other: Self) -> T {
        let len_product = self.len() * other.len();
        if len_product == T::zero() {
            return T::zero();
        }
        // Rounding can push the ratio just outside acos' domain
        let cos_theta = (self.dot(other) / len_product)
            .max(-T::one())
            .min(T::one());
        cos_theta.acos()
    }
}

impl<T> Default for Vec4<T>
where
    T: FloatValueType,
{
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T> IndexMut<usize> for Vec4<T>
where
    T: FloatValueType,
{
    fn index_mut(&mut self, component: usize) -> &mut T {
        match component {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => panic!("w of a Vec4 is fixed"),
            _ => panic!("Component {} is out of bounds for Vec4", component),
        }
    }
}

impl<T> From<Tuple4<T>> for Vec4<T>
where
    T: FloatValueType,
{
    fn from(t: Tuple4<T>) -> Self {
        Self::new(t.x, t.y, t.z)
    }
}

impl<T> Add for Vec4<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<T> Sub for Vec4<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T> Neg for Vec4<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T> Mul<T> for Vec4<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn mul(self, s: T) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

impl<T> Div<T> for Vec4<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn div(self, s: T) -> Self {
        Self::new(self.x / s, self.y / s, self.z / s)
    }
}

impl<T> AddAssign for Vec4<T>
where
    T: FloatValueType,
{
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl<T> SubAssign for Vec4<T>
where
    T: FloatValueType,
{
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl<T> MulAssign<T> for Vec4<T>
where
    T: FloatValueType,
{
    fn mul_assign(&mut self, s: T) {
        self.x *= s;
        self.y *= s;
        self.z *= s;
    }
}

impl<T> DivAssign<T> for Vec4<T>
where
    T: FloatValueType,
{
    fn div_assign(&mut self, s: T) {
        self.x /= s;
        self.y /= s;
        self.z /= s;
    }
}
