mod common;
mod macros;
mod matrix;
mod plane;
mod point;
mod ray;
mod spectrum;
pub mod transforms;
mod tuple;
mod vector;

pub use common::{epsilon, FloatValueType, EPSILON};
pub use matrix::Matrix4x4;
pub use plane::Plane;
pub use point::{point4, Point4};
pub use ray::Ray;
pub use spectrum::Spectrum;
pub use tuple::Tuple4;
pub use vector::{vec4, Vec4};
