use std::ops::{Add, AddAssign, IndexMut, Sub, SubAssign};

use super::{
    common::FloatValueType, macros::impl_four_component, tuple::Tuple4, vector::Vec4,
};

// Points and vectors are separate types so that mixing them can only produce
// results with a valid w:
// point + vector = point
// point - vector = point
// point - point = vector

/// A point in homogeneous coordinates. w is always 1.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point4<T>
where
    T: FloatValueType,
{
    /// The x component of the point.
    pub x: T,
    /// The y component of the point.
    pub y: T,
    /// The z component of the point.
    pub z: T,
    w: T,
}

impl_four_component!(Point4);

/// Shorthand constructor for [`Point4`].
#[inline]
pub fn point4<T>(x: T, y: T, z: T) -> Point4<T>
where
    T: FloatValueType,
{
    Point4::new(x, y, z)
}

impl<T> Point4<T>
where
    T: FloatValueType,
{
    /// Creates a new `Point4`.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        let ret = Self { x, y, z, w: T::one() };
        debug_assert!(!ret.has_nans());
        ret
    }

    /// Creates a new `Point4` at the origin.
    #[inline]
    pub fn zeros() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Returns the w component, which is always 1.
    #[inline]
    pub fn w(&self) -> T {
        self.w
    }

    /// Calculates the distance between this `Point4` and another.
    #[inline]
    pub fn dist(&self, other: Self) -> T {
        (*self - other).len()
    }

    /// Calculates the squared distance between this `Point4` and another.
    #[inline]
    pub fn dist_sqr(&self, other: Self) -> T {
        (*self - other).len_sqr()
    }
}

impl<T> Default for Point4<T>
where
    T: FloatValueType,
{
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T> IndexMut<usize> for Point4<T>
where
    T: FloatValueType,
{
    fn index_mut(&mut self, component: usize) -> &mut T {
        match component {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => panic!("w of a Point4 is fixed"),
            _ => panic!("Component {} is out of bounds for Point4", component),
        }
    }
}

// The tuple is homogenized first so projective results land back on w = 1
impl<T> From<Tuple4<T>> for Point4<T>
where
    T: FloatValueType,
{
    fn from(t: Tuple4<T>) -> Self {
        let t = t.homogenized();
        Self::new(t.x, t.y, t.z)
    }
}

impl<T> Add<Vec4<T>> for Point4<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn add(self, v: Vec4<T>) -> Self {
        Self::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl<T> Sub<Vec4<T>> for Point4<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn sub(self, v: Vec4<T>) -> Self {
        Self::new(self.x - v.x, self.y - v.y, self.z - v.z)
    }
}

impl<T> Sub for Point4<T>
where
    T: FloatValueType,
{
    type Output = Vec4<T>;

    fn sub(self, other: Self) -> Vec4<T> {
        Vec4::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T> AddAssign<Vec4<T>> for Point4<T>
where
    T: FloatValueType,
{
    fn add_assign(&mut self, v: Vec4<T>) {
        self.x += v.x;
        self.y += v.y;
        self.z += v.z;
    }
}

impl<T> SubAssign<Vec4<T>> for Point4<T>
where
    T: FloatValueType,
{
    fn sub_assign(&mut self, v: Vec4<T>) {
        self.x -= v.x;
        self.y -= v.y;
        self.z -= v.z;
    }
}
