use super::{common::FloatValueType, point::Point4, vector::Vec4};

/// An infinite plane through `q` with unit normal `n`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plane<T>
where
    T: FloatValueType,
{
    pub q: Point4<T>,
    pub n: Vec4<T>,
}

impl<T> Plane<T>
where
    T: FloatValueType,
{
    /// Creates a new `Plane`. `n` is normalized.
    pub fn new(q: Point4<T>, n: Vec4<T>) -> Self {
        Self {
            q,
            n: n.normalized(),
        }
    }

    /// Evaluates the implicit plane equation at `p`.
    ///
    /// The result is the signed distance from the plane, positive on the side `n`
    /// points to.
    pub fn at(&self, p: Point4<T>) -> T {
        self.n.dot(p - self.q)
    }

    /// Checks if the normals of the two planes are parallel and point the same way.
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        self.n.angle(other.n) < super::common::epsilon()
    }
}
