use crate::math::{Spectrum, Vec4};

/// Mirror-like material that also transmits light through refraction
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Specular {
    pub refraction_index: f32,
    pub transmission: Spectrum<f32>,
    pub reflection: Spectrum<f32>,
    /// Added on top of the traced contributions, and used alone on total internal
    /// reflection
    pub color: Spectrum<f32>,
}

impl Specular {
    pub fn new(
        refraction_index: f32,
        transmission: Spectrum<f32>,
        reflection: Spectrum<f32>,
        color: Spectrum<f32>,
    ) -> Self {
        Self {
            refraction_index,
            transmission,
            reflection,
            color,
        }
    }
}

/// Reflects incoming direction `v` about the normal `n`.
pub fn mirror_direction(v: Vec4<f32>, n: Vec4<f32>) -> Vec4<f32> {
    v - n * (2.0 * n.dot(v))
}

/// Refracts incoming direction `v` through a surface with normal `n` using Snell's
/// law.
///
/// `n` can face either side of the surface. `ni` is the refraction index on the side
/// `v` arrives from and `nt` on the side it continues to. Returns `None` on total
/// internal reflection.
pub fn refract(v: Vec4<f32>, n: Vec4<f32>, ni: f32, nt: f32) -> Option<Vec4<f32>> {
    let n = if v.dot(n) > 0.0 { -n } else { n };
    let eta = ni / nt;

    let cos_i = -v.dot(n);
    let sin_t = eta * (1.0 - cos_i * cos_i).max(0.0).sqrt();
    let cos_t_sqr = 1.0 - sin_t * sin_t;
    if cos_t_sqr < 0.0 {
        return None;
    }

    let t = (v + n * cos_i) * eta - n * cos_t_sqr.sqrt();
    Some(t.normalized())
}
