use std::time::Instant;

use crate::{
    camera::Camera,
    film::Film,
    integrators::{Integrator, IntegratorType, RadianceResult},
    math::Spectrum,
    params::{DynamicSceneParameters, Parameter},
    scene::Scene,
    glint_debug, glint_info,
};

/// Everything an [`Integrator`] needs to evaluate rays for one render
pub struct RenderContext<'a> {
    pub scene: &'a Scene,
    pub camera: Camera,
    /// Uniform light added to glossy surfaces
    pub ambient_light: Spectrum<f32>,
}

impl<'a> RenderContext<'a> {
    /// Creates a new `RenderContext` for an image of `width` by `height` pixels.
    pub fn new(
        scene: &'a Scene,
        params: &DynamicSceneParameters,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            scene,
            camera: Camera::new(&params.camera, width, height),
            ambient_light: scene.ambient_light(params.ambient_fraction),
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct RenderResult {
    pub secs: f32,
    pub ray_count: usize,
}

/// Renders `scene` into RGB bytes, row-major with the top row first.
pub fn render(
    scene: &Scene,
    params: &DynamicSceneParameters,
    integrator: &dyn Integrator,
    width: u32,
    height: u32,
) -> Vec<u8> {
    let ctx = RenderContext::new(scene, params, width, height);
    let mut film = Film::new(width, height);
    integrator.render(&ctx, &mut film);
    film.to_rgb8()
}

/// Owns a scene and re-renders it when its parameters or the image size change.
pub struct Renderer {
    scene: Scene,
    params: DynamicSceneParameters,
    home_params: DynamicSceneParameters,
    integrator: Box<dyn Integrator>,
    film: Film,
}

impl Renderer {
    pub fn new(
        scene: Scene,
        params: DynamicSceneParameters,
        integrator: IntegratorType,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            scene,
            params,
            home_params: params,
            integrator: integrator.instantiate(),
            film: Film::new(width, height),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn params(&self) -> &DynamicSceneParameters {
        &self.params
    }

    pub fn film(&self) -> &Film {
        &self.film
    }

    /// Sets `param` and marks the film stale. Returns the value after clamping.
    pub fn set_parameter(&mut self, param: Parameter, value: f32) -> f32 {
        let value = self.params.set(param, value);
        glint_debug!("{} = {}", param, value);
        self.film.mark_stale();
        value
    }

    /// Steps `param` up or down by its step and marks the film stale. Returns the
    /// new value.
    pub fn step_parameter(&mut self, param: Parameter, up: bool) -> f32 {
        let value = if up {
            self.params.step_up(param)
        } else {
            self.params.step_down(param)
        };
        glint_debug!("{} = {}", param, value);
        self.film.mark_stale();
        value
    }

    /// Restores the parameters the scene was loaded with.
    pub fn reset_parameters(&mut self) {
        self.params = self.home_params;
        self.film.mark_stale();
    }

    /// Returns `true` if the size changed, in which case the next
    /// [`Renderer::render_if_stale`] renders.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        self.film.resize(width, height)
    }

    /// Renders if parameters or size have changed since the last render.
    pub fn render_if_stale(&mut self) -> Option<RenderResult> {
        if self.film.is_stale() {
            Some(self.render())
        } else {
            None
        }
    }

    /// Renders the scene into the film.
    pub fn render(&mut self) -> RenderResult {
        let render_start = Instant::now();

        let ctx = RenderContext::new(
            &self.scene,
            &self.params,
            self.film.width(),
            self.film.height(),
        );
        let ray_count = self.integrator.render(&ctx, &mut self.film);
        self.film.clear_stale();

        let secs = render_start.elapsed().as_secs_f32();
        glint_info!(
            "Rendered {}x{} in {:.2}s, {} rays",
            self.film.width(),
            self.film.height(),
            secs,
            ray_count
        );

        RenderResult { secs, ray_count }
    }

    /// Traces the camera ray through pixel (`x`, `y`) alone. Set the log level to
    /// trace to see the path it takes.
    pub fn probe(&self, x: u32, y: u32) -> RadianceResult {
        let ctx = RenderContext::new(
            &self.scene,
            &self.params,
            self.film.width(),
            self.film.height(),
        );
        let ray = ctx.camera.ray(x, y);
        glint_info!("Probing pixel ({}, {}): ray from {} towards {}", x, y, ray.o, ray.d);

        let result = self.integrator.li(&ctx, ray, 0);
        glint_info!(
            "Probe result {:?} after {} rays",
            result.li,
            result.ray_scene_intersections
        );
        result
    }
}
