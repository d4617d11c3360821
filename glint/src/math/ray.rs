use approx::AbsDiffEq;

use super::{common::FloatValueType, plane::Plane, point::Point4, vector::Vec4};

#[derive(Copy, PartialEq, Clone, Debug)]
pub struct Ray<T>
where
    T: FloatValueType,
{
    pub o: Point4<T>,
    pub d: Vec4<T>,
}

impl<T> Ray<T>
where
    T: FloatValueType,
{
    /// Creates a new `Ray`. `d` isn't required to be normalized.
    pub fn new(o: Point4<T>, d: Vec4<T>) -> Self {
        let ret = Self { o, d };
        debug_assert!(!ret.has_nans());
        ret
    }

    /// Creates a new `Ray` from `o` with a normalized direction toward `target`.
    pub fn towards(o: Point4<T>, target: Point4<T>) -> Self {
        Self::new(o, (target - o).normalized())
    }

    /// Checks if any of the members in this `Ray` contain NaNs.
    pub fn has_nans(&self) -> bool {
        self.o.has_nans() || self.d.has_nans()
    }

    /// Finds the [Point4] on this `Ray` at distance `t`.
    pub fn point(&self, t: T) -> Point4<T> {
        self.o + self.d * t
    }

    /// Intersects this `Ray` with `plane`.
    ///
    /// Returns the ray parameter and the hit point, or `None` if the ray is parallel to
    /// the plane or the plane is behind the ray's origin.
    pub fn intersect_plane(&self, plane: &Plane<T>) -> Option<(T, Point4<T>)> {
        let denom = plane.n.dot(self.d);
        if denom.abs() <= super::common::epsilon() {
            return None;
        }
        let t = plane.n.dot(plane.q - self.o) / denom;
        if t <= T::zero() {
            return None;
        }
        Some((t, self.point(t)))
    }
}

/// A ray from origin toward positive X.
impl<T> Default for Ray<T>
where
    T: FloatValueType,
{
    fn default() -> Self {
        Self::new(Point4::zeros(), Vec4::new(T::one(), T::zero(), T::zero()))
    }
}

impl<T> AbsDiffEq for Ray<T>
where
    T: FloatValueType + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        super::common::epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.o.abs_diff_eq(&other.o, epsilon) && self.d.abs_diff_eq(&other.d, epsilon)
    }
}
