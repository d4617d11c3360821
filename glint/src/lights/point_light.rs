use super::LightSample;
use crate::math::{Point4, Spectrum};

/// An infinitesimal light that emits the same color in all directions.
///
/// There is no distance falloff.
#[derive(Clone, Debug, PartialEq)]
pub struct PointLight {
    pub name: String,
    pub p: Point4<f32>,
    pub color: Spectrum<f32>,
}

impl PointLight {
    /// Creates a new `PointLight` at `p`.
    pub fn new(name: &str, p: Point4<f32>, color: Spectrum<f32>) -> Self {
        Self {
            name: name.to_string(),
            p,
            color,
        }
    }

    /// Returns the direction and color of the light arriving at `p`.
    pub fn sample_li(&self, p: Point4<f32>) -> LightSample {
        let to_light = self.p - p;
        let dist = to_light.len();

        LightSample {
            l: to_light.normalized(),
            dist,
            li: self.color,
        }
    }
}
