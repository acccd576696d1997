use crate::math::V3;

pub mod error;
pub mod marcher;
pub mod math;
pub mod noise;
pub mod render;
pub mod scene;

pub use error::RenderError;
pub use noise::{NoiseField, DEFAULT_SEED};
pub use render::{render, render_with, RenderConfig};
pub use scene::{Object, Scene};

/// A scalar function of space: a signed distance, or any other field whose
/// gradient the shading stage wants to estimate.
pub trait Field {
    fn sample(&self, x: &V3) -> f32;
}

/// A distance field that also names the object it measured.
pub trait Nearest {
    fn nearest(&self, x: &V3) -> (f32, Object);
}
