use super::{Shape, ShapeHit};
use crate::math::{Point4, Ray, EPSILON};

/// A sphere object.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    center: Point4<f32>,
    radius: f32,
}

impl Sphere {
    /// Creates a new `Sphere`.
    pub fn new(center: Point4<f32>, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn center(&self) -> Point4<f32> {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Shape for Sphere {
    fn intersect(&self, ray: &Ray<f32>) -> Option<ShapeHit> {
        let oc = ray.o - self.center;

        // Quadratic coefficients
        let a = ray.d.dot(ray.d);
        let b = 2.0 * ray.d.dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        // Grazing hits are treated as misses
        let d = b * b - 4.0 * a * c;
        if d <= EPSILON {
            return None;
        }
        let rd = d.sqrt();

        // Nearest root in front of the origin, falling back to the far one when the
        // origin is inside
        let t0 = (-b - rd) / (2.0 * a);
        let t1 = (-b + rd) / (2.0 * a);
        let t = if t0 > EPSILON {
            t0
        } else if t1 > EPSILON {
            t1
        } else {
            return None;
        };

        let p = ray.point(t);
        let n = (p - self.center).normalized();

        Some(ShapeHit { t, p, n })
    }
}
