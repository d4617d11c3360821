use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{integrators::IntegratorType, math::Spectrum, scene::DEFAULT_BACKGROUND};

/// Render configuration read from a YAML file
///
/// ```yaml
/// width: 640
/// height: 480
/// integrator: !Whitted
///   max_depth: 6
/// background: [0.0, 0.0, 0.0]
/// ambient_fraction: 0.2
/// output: out.png
/// ```
///
/// Every field is optional.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    pub integrator: IntegratorType,
    pub background: [f32; 3],
    /// Overrides the ambient fraction of the scene if set
    pub ambient_fraction: Option<f32>,
    pub output: Option<PathBuf>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 300,
            height: 300,
            integrator: IntegratorType::default(),
            background: [
                DEFAULT_BACKGROUND.r,
                DEFAULT_BACKGROUND.g,
                DEFAULT_BACKGROUND.b,
            ],
            ambient_fraction: None,
            output: None,
        }
    }
}

impl RenderSettings {
    /// Reads `RenderSettings` from the YAML file at `path`.
    pub fn load(path: &Path) -> Result<Self, String> {
        let input = std::fs::read_to_string(path)
            .map_err(|why| format!("Error reading '{}': {}", path.display(), why))?;
        Self::from_yaml(&input).map_err(|why| format!("'{}': {}", path.display(), why))
    }

    /// Parses `RenderSettings` from YAML.
    pub fn from_yaml(input: &str) -> Result<Self, String> {
        serde_yaml::from_str(input).map_err(|why| format!("Invalid render settings: {}", why))
    }

    pub fn background(&self) -> Spectrum<f32> {
        let [r, g, b] = self.background;
        Spectrum::new(r, g, b)
    }
}
