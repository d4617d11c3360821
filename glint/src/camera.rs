use crate::math::{transforms::camera_to_world, Matrix4x4, Point4, Ray, Vec4};

/// The view-space rectangle on the near plane that maps onto the image
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClipWindow {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    /// Distance of the window from the eye
    pub near: f32,
}

impl Default for ClipWindow {
    fn default() -> Self {
        Self {
            left: -1.0,
            right: 1.0,
            bottom: -1.0,
            top: 1.0,
            near: 2.0,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraParameters {
    pub eye: Point4<f32>,
    pub lookat: Point4<f32>,
    pub up: Vec4<f32>,
    pub clip: ClipWindow,
}

impl Default for CameraParameters {
    fn default() -> Self {
        Self {
            eye: Point4::new(0.0, 0.0, 5.0),
            lookat: Point4::zeros(),
            up: Vec4::new(0.0, 1.0, 0.0),
            clip: ClipWindow::default(),
        }
    }
}

/// A pinhole camera looking through a clip window
#[derive(Clone, Debug)]
pub struct Camera {
    eye: Point4<f32>,
    camera_to_world: Matrix4x4<f32>,
    clip: ClipWindow,
    pixel_size: (f32, f32),
}

impl Camera {
    /// Creates a new `Camera` for an image of `width` by `height` pixels.
    pub fn new(params: &CameraParameters, width: u32, height: u32) -> Self {
        let clip = params.clip;
        Self {
            eye: params.eye,
            camera_to_world: camera_to_world(params.eye, params.lookat, params.up),
            clip,
            pixel_size: (
                (clip.right - clip.left) / (width.max(1) as f32),
                (clip.top - clip.bottom) / (height.max(1) as f32),
            ),
        }
    }

    pub fn eye(&self) -> Point4<f32> {
        self.eye
    }

    pub fn camera_to_world(&self) -> &Matrix4x4<f32> {
        &self.camera_to_world
    }

    /// Creates a new [Ray] through the center of pixel (`x`, `y`). (0, 0) is the
    /// bottom left pixel.
    pub fn ray(&self, x: u32, y: u32) -> Ray<f32> {
        let p_camera = Point4::new(
            self.clip.left + (x as f32 + 0.5) * self.pixel_size.0,
            self.clip.bottom + (y as f32 + 0.5) * self.pixel_size.1,
            -self.clip.near,
        );
        let p_world = &self.camera_to_world * p_camera;
        Ray::towards(self.eye, p_world)
    }
}
