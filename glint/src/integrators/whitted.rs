use super::{Integrator, RadianceResult};
use crate::{
    hit::Hit,
    lights::LightSample,
    materials::{local_illumination, mirror_direction, refract, Glossy, Material, Specular},
    math::{Ray, Spectrum},
    renderer::RenderContext,
    glint_trace,
};

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Params {
    pub max_depth: u32,
}

impl Default for Params {
    fn default() -> Self {
        Self { max_depth: 4 }
    }
}

/// Classic recursive ray tracer
///
/// Glossy surfaces are shaded with local Phong illumination only, without shadows.
/// Specular surfaces spawn a reflected and a refracted ray until `max_depth` bounces.
pub struct Whitted {
    max_depth: u32,
}

impl Whitted {
    pub fn new(params: Params) -> Self {
        Self {
            max_depth: params.max_depth,
        }
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    fn glossy_color(
        &self,
        ctx: &RenderContext,
        ray: &Ray<f32>,
        hit: &Hit,
        material: &Glossy,
    ) -> Spectrum<f32> {
        let v = -ray.d;
        let direct = ctx.scene.lights.iter().fold(Spectrum::zeros(), |c, light| {
            let LightSample { l, li, .. } = light.sample_li(hit.p);
            c + local_illumination(v, hit.n, l, material, li)
        });

        direct + material.ambient * ctx.ambient_light
    }

    fn specular_color(
        &self,
        ctx: &RenderContext,
        ray: &Ray<f32>,
        hit: &Hit,
        material: &Specular,
        depth: u32,
    ) -> RadianceResult {
        if depth >= self.max_depth {
            return RadianceResult {
                li: ctx.scene.background,
                ray_scene_intersections: 0,
            };
        }

        let v = ray.d;
        let n = hit.n;

        let reflected = mirror_direction(v, n);
        let (ni, nt) = if n.dot(v) < 0.0 {
            (1.0, material.refraction_index)
        } else {
            (material.refraction_index, 1.0)
        };

        let transmitted = match refract(v, n, ni, nt) {
            Some(t) => t,
            None => {
                glint_trace!("Total internal reflection at {} on '{}'", hit.p, hit.surface.name);
                return RadianceResult {
                    li: material.color,
                    ray_scene_intersections: 0,
                };
            }
        };

        let refl = self.li(ctx, Ray::new(hit.p, reflected), depth + 1);
        let refr = self.li(ctx, Ray::new(hit.p, transmitted), depth + 1);

        // The base color is added on top of the traced terms, not blended with them
        RadianceResult {
            li: refl.li * material.reflection + refr.li * material.transmission + material.color,
            ray_scene_intersections: refl.ray_scene_intersections
                + refr.ray_scene_intersections,
        }
    }
}

impl Integrator for Whitted {
    fn li(&self, ctx: &RenderContext, ray: Ray<f32>, depth: u32) -> RadianceResult {
        let hit = match ctx.scene.first_hit(&ray) {
            Some(hit) => hit,
            None => {
                return RadianceResult {
                    li: ctx.scene.background,
                    ray_scene_intersections: 1,
                }
            }
        };
        glint_trace!(
            "Depth {}: hit '{}' at {} (dist {})",
            depth,
            hit.surface.name,
            hit.p,
            hit.dist
        );

        let mut ret = match &hit.surface.material {
            Material::Glossy(material) => RadianceResult {
                li: self.glossy_color(ctx, &ray, &hit, material),
                ray_scene_intersections: 0,
            },
            Material::Specular(material) => self.specular_color(ctx, &ray, &hit, material, depth),
        };
        ret.ray_scene_intersections += 1;

        glint_trace!("Depth {}: color {:?}", depth, ret.li);

        ret
    }
}
