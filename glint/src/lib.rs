pub mod camera;
pub mod film;
pub mod hit;
pub mod integrators;
pub mod lights;
mod macros;
pub mod materials;
pub mod math;
pub mod output;
pub mod params;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod shapes;

// Used by the logging macros
#[doc(hidden)]
pub use log;
