mod glossy;
mod specular;

pub use glossy::{local_illumination, pow_by_squaring, Glossy};
pub use specular::{mirror_direction, refract, Specular};

use strum::{Display, EnumString, EnumVariantNames};

/// How a surface responds to light.
#[derive(Clone, Debug, PartialEq)]
pub enum Material {
    /// Phong shaded, lit directly by the lights without recursion
    Glossy(Glossy),
    /// Reflects and refracts recursively
    Specular(Specular),
}

impl Material {
    pub fn kind(&self) -> MaterialKind {
        match self {
            Material::Glossy(_) => MaterialKind::Glossy,
            Material::Specular(_) => MaterialKind::Specular,
        }
    }
}

// Gray, moderately shiny. Surfaces referring to unknown materials get this.
impl Default for Material {
    fn default() -> Self {
        Material::Glossy(Glossy::default())
    }
}

/// Material type as named in scene files.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, EnumString, EnumVariantNames)]
#[strum(ascii_case_insensitive)]
pub enum MaterialKind {
    #[strum(serialize = "phong")]
    Glossy,
    #[strum(serialize = "specular")]
    Specular,
}
