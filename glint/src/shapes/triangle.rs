use super::{Shape, ShapeHit};
use crate::math::{Matrix4x4, Point4, Ray, Vec4, EPSILON};

/// A triangle object.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle {
    vertices: [Point4<f32>; 3],
    n: Vec4<f32>,
}

impl Triangle {
    /// Creates a new `Triangle`.
    /// Expects counter clockwise winding, the normal faces the side the winding is
    /// counter clockwise from.
    pub fn new(v0: Point4<f32>, v1: Point4<f32>, v2: Point4<f32>) -> Self {
        Self {
            vertices: [v0, v1, v2],
            n: (v1 - v0).cross(v2 - v0).normalized(),
        }
    }

    pub fn vertices(&self) -> [Point4<f32>; 3] {
        self.vertices
    }

    /// Unit normal computed at construction.
    pub fn normal(&self) -> Vec4<f32> {
        self.n
    }

    /// Solves `o + t*d = v0 + u*(v1 - v0) + v*(v2 - v0)` for `(t, u, v)` with Cramer's
    /// rule.
    ///
    /// Returns `None` if the system is degenerate, i.e. the ray is parallel to the
    /// triangle or the triangle has no area. The returned values aren't range checked.
    pub fn barycentric(&self, ray: &Ray<f32>) -> Option<(f32, f32, f32)> {
        let [v0, v1, v2] = self.vertices;
        let e0 = v0 - v1;
        let e1 = v0 - v2;
        let k = v0 - ray.o;
        let d = ray.d;

        // Columns are d, v0 - v1, v0 - v2
        let det = Matrix4x4::det3x3([
            [d.x, e0.x, e1.x],
            [d.y, e0.y, e1.y],
            [d.z, e0.z, e1.z],
        ]);
        if det.abs() < EPSILON {
            return None;
        }

        let t = Matrix4x4::det3x3([
            [k.x, e0.x, e1.x],
            [k.y, e0.y, e1.y],
            [k.z, e0.z, e1.z],
        ]) / det;
        let u = Matrix4x4::det3x3([
            [d.x, k.x, e1.x],
            [d.y, k.y, e1.y],
            [d.z, k.z, e1.z],
        ]) / det;
        let v = Matrix4x4::det3x3([
            [d.x, e0.x, k.x],
            [d.y, e0.y, k.y],
            [d.z, e0.z, k.z],
        ]) / det;

        Some((t, u, v))
    }
}

impl Shape for Triangle {
    fn intersect(&self, ray: &Ray<f32>) -> Option<ShapeHit> {
        let (t, u, v) = self.barycentric(ray)?;

        let inside = (0.0..=1.0).contains(&u)
            && (0.0..=1.0).contains(&v)
            && (0.0..=1.0).contains(&(u + v));
        if !inside || t < EPSILON {
            return None;
        }

        Some(ShapeHit {
            t,
            p: ray.point(t),
            n: self.n,
        })
    }
}
