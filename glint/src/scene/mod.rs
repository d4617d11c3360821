mod lexer;
mod loader;

pub use lexer::{FileLocation, LexerError, LexerErrorType};
pub use loader::{load, parse, LoadError};

use crate::{
    hit::{Hit, HitList},
    lights::PointLight,
    math::{Ray, Spectrum},
    shapes::Surface,
};

/// Color of rays that don't hit anything
pub const DEFAULT_BACKGROUND: Spectrum<f32> = Spectrum {
    r: 0.3,
    g: 0.4,
    b: 0.4,
};

pub struct Scene {
    pub name: String,
    pub surfaces: Vec<Surface>,
    pub lights: Vec<PointLight>,
    pub background: Spectrum<f32>,
}

impl Scene {
    pub fn new(name: &str, surfaces: Vec<Surface>, lights: Vec<PointLight>) -> Self {
        Self {
            name: name.to_string(),
            surfaces,
            lights,
            background: DEFAULT_BACKGROUND,
        }
    }

    pub fn with_background(mut self, background: Spectrum<f32>) -> Self {
        self.background = background;
        self
    }

    /// Returns the uniform ambient light, `ambient_fraction` of the total light color.
    pub fn ambient_light(&self, ambient_fraction: f32) -> Spectrum<f32> {
        self.lights
            .iter()
            .fold(Spectrum::zeros(), |c, l| c + l.color * ambient_fraction)
    }

    /// Collects the hits of `ray` against every surface.
    pub fn hits(&self, ray: &Ray<f32>) -> HitList<'_> {
        let mut hits = HitList::with_capacity(self.surfaces.len());
        for surface in &self.surfaces {
            if let Some(hit) = surface.intersect(ray) {
                hits.add(hit);
            }
        }
        hits
    }

    /// Finds the hit closest to the origin of `ray`, if any.
    pub fn first_hit(&self, ray: &Ray<f32>) -> Option<Hit<'_>> {
        let hits = self.hits(ray);
        if hits.is_empty() {
            None
        } else {
            Some(hits.into_nearest())
        }
    }
}
