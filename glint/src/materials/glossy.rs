use crate::math::{Spectrum, Vec4};

use super::mirror_direction;

/// Phong material
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Glossy {
    pub ambient: Spectrum<f32>,
    pub diffuse: Spectrum<f32>,
    pub specular: Spectrum<f32>,
    pub shininess: u32,
}

impl Glossy {
    pub fn new(
        ambient: Spectrum<f32>,
        diffuse: Spectrum<f32>,
        specular: Spectrum<f32>,
        shininess: u32,
    ) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }
}

impl Default for Glossy {
    fn default() -> Self {
        let half = Spectrum::new(0.5, 0.5, 0.5);
        Self::new(half, half, half, 10)
    }
}

/// Raises `base` to the integer power `exp` by repeated squaring.
pub fn pow_by_squaring(base: f32, exp: u32) -> f32 {
    let mut ret = 1.0;
    let mut base = base;
    let mut exp = exp;
    while exp > 0 {
        if exp & 1 == 1 {
            ret *= base;
        }
        base *= base;
        exp >>= 1;
    }
    ret
}

/// Evaluates the diffuse and specular Phong terms of `material` for a single light.
///
/// `v` points towards the viewer, `l` towards the light. All vectors are expected to be
/// normalized. Surfaces facing away from the light get no contribution.
pub fn local_illumination(
    v: Vec4<f32>,
    n: Vec4<f32>,
    l: Vec4<f32>,
    material: &Glossy,
    light: Spectrum<f32>,
) -> Spectrum<f32> {
    let nl = n.dot(l);
    if nl <= 0.0 {
        return Spectrum::zeros();
    }

    let r = mirror_direction(l, n);
    let rv = r.dot(v);
    let rvn = if rv <= 0.0 {
        0.0
    } else {
        pow_by_squaring(rv, material.shininess)
    };

    light * (material.diffuse * nl + material.specular * rvn)
}
