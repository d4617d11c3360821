mod sphere;
mod triangle;

pub use sphere::Sphere;
pub use triangle::Triangle;

use crate::{
    hit::Hit,
    materials::Material,
    math::{Point4, Ray, Vec4},
};

/// Raw intersection of a ray and a [`Shape`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShapeHit {
    /// Ray parameter at the hit
    pub t: f32,
    pub p: Point4<f32>,
    /// Unit geometric normal
    pub n: Vec4<f32>,
}

pub trait Shape: Send + Sync {
    /// Intersects [Ray] with this object.
    ///
    /// Only hits with `t` above [`EPSILON`](crate::math::EPSILON) are reported, which
    /// rejects hits behind the ray and on the surface the ray was spawned from.
    fn intersect(&self, ray: &Ray<f32>) -> Option<ShapeHit>;
}

/// The closed set of geometry a [`Surface`] can have.
#[derive(Clone, Debug)]
pub enum Geometry {
    Sphere(Sphere),
    Triangle(Triangle),
}

impl Shape for Geometry {
    fn intersect(&self, ray: &Ray<f32>) -> Option<ShapeHit> {
        match self {
            Geometry::Sphere(s) => s.intersect(ray),
            Geometry::Triangle(t) => t.intersect(ray),
        }
    }
}

/// A named piece of geometry with its own material.
#[derive(Clone, Debug)]
pub struct Surface {
    pub name: String,
    pub material: Material,
    pub geometry: Geometry,
}

impl Surface {
    pub fn new(name: &str, material: Material, geometry: Geometry) -> Self {
        Self {
            name: name.to_string(),
            material,
            geometry,
        }
    }

    /// Intersects `ray` with this `Surface`. The returned [`Hit`] borrows `self`.
    pub fn intersect(&self, ray: &Ray<f32>) -> Option<Hit<'_>> {
        self.geometry.intersect(ray).map(|ShapeHit { p, n, .. }| Hit {
            p,
            n,
            dist: ray.o.dist(p),
            surface: self,
        })
    }
}
