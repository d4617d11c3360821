use strum::{Display, EnumIter, EnumString, EnumVariantNames};

use crate::camera::CameraParameters;

/// Scene values that can be edited between renders
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString, EnumVariantNames,
)]
#[strum(ascii_case_insensitive)]
pub enum Parameter {
    #[strum(serialize = "Eye X")]
    EyeX,
    #[strum(serialize = "Eye Y")]
    EyeY,
    #[strum(serialize = "Eye Z")]
    EyeZ,
    #[strum(serialize = "Ambient Fraction")]
    AmbientFraction,
    #[strum(serialize = "Ref X")]
    RefX,
    #[strum(serialize = "Ref Y")]
    RefY,
    #[strum(serialize = "Ref Z")]
    RefZ,
    #[strum(serialize = "Vup X")]
    VupX,
    #[strum(serialize = "Vup Y")]
    VupY,
    #[strum(serialize = "Vup Z")]
    VupZ,
    #[strum(serialize = "Clip L")]
    ClipL,
    #[strum(serialize = "Clip R")]
    ClipR,
    #[strum(serialize = "Clip B")]
    ClipB,
    #[strum(serialize = "Clip T")]
    ClipT,
    #[strum(serialize = "Clip N")]
    ClipN,
}

impl Parameter {
    /// Returns the inclusive range of valid values.
    pub fn range(self) -> (f32, f32) {
        match self {
            Parameter::AmbientFraction => (0.0, 1.0),
            _ => (-10.0, 10.0),
        }
    }

    /// Returns the increment used by [`DynamicSceneParameters::step_up`] and
    /// [`DynamicSceneParameters::step_down`].
    pub fn step(self) -> f32 {
        match self {
            Parameter::AmbientFraction => 0.1,
            _ => 0.2,
        }
    }
}

/// The parts of a scene that can change between renders without reloading it
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DynamicSceneParameters {
    pub camera: CameraParameters,
    /// Portion of every light's color applied uniformly as ambient light
    pub ambient_fraction: f32,
}

impl Default for DynamicSceneParameters {
    fn default() -> Self {
        Self {
            camera: CameraParameters::default(),
            ambient_fraction: 0.0,
        }
    }
}

impl DynamicSceneParameters {
    pub fn get(&self, param: Parameter) -> f32 {
        let CameraParameters {
            eye,
            lookat,
            up,
            clip,
        } = &self.camera;
        match param {
            Parameter::EyeX => eye.x,
            Parameter::EyeY => eye.y,
            Parameter::EyeZ => eye.z,
            Parameter::AmbientFraction => self.ambient_fraction,
            Parameter::RefX => lookat.x,
            Parameter::RefY => lookat.y,
            Parameter::RefZ => lookat.z,
            Parameter::VupX => up.x,
            Parameter::VupY => up.y,
            Parameter::VupZ => up.z,
            Parameter::ClipL => clip.left,
            Parameter::ClipR => clip.right,
            Parameter::ClipB => clip.bottom,
            Parameter::ClipT => clip.top,
            Parameter::ClipN => clip.near,
        }
    }

    /// Sets `param` to `value` clamped to its range. Returns the stored value.
    pub fn set(&mut self, param: Parameter, value: f32) -> f32 {
        let (min, max) = param.range();
        let value = value.clamp(min, max);

        let CameraParameters {
            eye,
            lookat,
            up,
            clip,
        } = &mut self.camera;
        let field = match param {
            Parameter::EyeX => &mut eye.x,
            Parameter::EyeY => &mut eye.y,
            Parameter::EyeZ => &mut eye.z,
            Parameter::AmbientFraction => &mut self.ambient_fraction,
            Parameter::RefX => &mut lookat.x,
            Parameter::RefY => &mut lookat.y,
            Parameter::RefZ => &mut lookat.z,
            Parameter::VupX => &mut up.x,
            Parameter::VupY => &mut up.y,
            Parameter::VupZ => &mut up.z,
            Parameter::ClipL => &mut clip.left,
            Parameter::ClipR => &mut clip.right,
            Parameter::ClipB => &mut clip.bottom,
            Parameter::ClipT => &mut clip.top,
            Parameter::ClipN => &mut clip.near,
        };
        *field = value;
        value
    }

    /// Increments `param` by its step. Returns the stored value.
    pub fn step_up(&mut self, param: Parameter) -> f32 {
        self.set(param, self.get(param) + param.step())
    }

    /// Decrements `param` by its step. Returns the stored value.
    pub fn step_down(&mut self, param: Parameter) -> f32 {
        self.set(param, self.get(param) - param.step())
    }
}
