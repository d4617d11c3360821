mod whitted;

pub use whitted::Whitted;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, EnumVariantNames};

use crate::{
    film::Film,
    math::{Ray, Spectrum},
    renderer::RenderContext,
};

pub type WhittedParams = whitted::Params;

#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize, Display, EnumVariantNames, EnumString)]
pub enum IntegratorType {
    Whitted(whitted::Params),
}

impl IntegratorType {
    pub fn instantiate(self) -> Box<dyn Integrator> {
        match self {
            IntegratorType::Whitted(params) => Box::new(Whitted::new(params)),
        }
    }
}

#[allow(clippy::derivable_impls)] // Can't derive Default for non unit variants, which Whitted is
impl Default for IntegratorType {
    fn default() -> Self {
        IntegratorType::Whitted(whitted::Params::default())
    }
}

#[derive(Copy, Clone, Debug)]
pub struct RadianceResult {
    pub li: Spectrum<f32>,
    pub ray_scene_intersections: usize,
}

impl Default for RadianceResult {
    fn default() -> Self {
        Self {
            li: Spectrum::zeros(),
            ray_scene_intersections: 0,
        }
    }
}

// Public interface for scene integrators.
pub trait Integrator {
    /// Evaluates the color arriving along `ray`. Also returns the number of rays
    /// intersected with the scene.
    ///
    /// `depth` is 0 for camera rays and grows by one per bounce.
    fn li(&self, ctx: &RenderContext, ray: Ray<f32>, depth: u32) -> RadianceResult;

    /// Renders every pixel of `film`, one camera ray per pixel. Returns the number of
    /// rays intersected with the scene.
    fn render(&self, ctx: &RenderContext, film: &mut Film) -> usize {
        let mut ray_count = 0;
        for y in 0..film.height() {
            for x in 0..film.width() {
                let ray = ctx.camera.ray(x, y);
                let result = self.li(ctx, ray, 0);
                film.set_pixel(x, y, result.li);
                ray_count += result.ray_scene_intersections;
            }
        }
        ray_count
    }
}
