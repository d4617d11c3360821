mod point_light;

pub use point_light::PointLight;

use crate::math::{Spectrum, Vec4};

/// Sample from a light source for shading
#[derive(Copy, Clone, Debug)]
pub struct LightSample {
    /// Unit direction from the shaded point towards the light
    pub l: Vec4<f32>,
    /// Distance to the light
    pub dist: f32,
    pub li: Spectrum<f32>,
}
