use crate::math::{along, normalize, scalar, v, V3};
use crate::scene::{Object, Scene};
use crate::Nearest;
use image::Rgba;

mod shade;

pub use shade::{ambient_occlusion, field_normal, shade};

pub const MAX_STEPS: usize = 63;
pub const FAR_CLIP: f32 = -60.;
/// Depth of the image plane in camera space.
pub const FOCAL_DEPTH: f32 = -0.8;
/// The march stops once the distance falls under `STOP_EPS * -z`...
const STOP_EPS: f32 = 0.005;
/// ...and counts as a hit if it is under `HIT_EPS * -z`.
const HIT_EPS: f32 = 0.01;

pub const MISS: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Where a march ended.
#[derive(Clone, Copy, Debug)]
pub struct March {
    pub position: V3,
    pub distance: f32,
    pub object: Object,
    pub steps: usize,
    pub hit: bool,
}

/// Camera-space ray through pixel `(x, y)` of a `w`x`h` image. The origin
/// lies on the image plane and the direction points through it from the eye.
///
/// `w` and `h` must be at least 2.
pub fn camera_ray(x: u32, y: u32, w: u32, h: u32) -> (V3, V3) {
    debug_assert!(w >= 2 && h >= 2, "image must be at least 2x2, got {}x{}", w, h);
    let loc = v(
        x as f32 / (w - 1) as f32 - 0.5,
        -(y as f32 / (h - 1) as f32 - 0.5),
        FOCAL_DEPTH,
    );
    (loc, normalize(&loc))
}

/// Sphere-trace from `origin` along `dir`. The minimum step and the stopping
/// distance grow with depth so the screen-space error stays roughly constant.
pub fn march(scene: &impl Nearest, origin: &V3, dir: &V3) -> March {
    let mut p = *origin;
    let (mut distance, mut object) = scene.nearest(&p);
    let mut steps = 0;
    while steps < MAX_STEPS && distance > -STOP_EPS * p.z {
        p = along(&p, dir, scalar::max(-STOP_EPS * p.z, distance));
        if p.z < FAR_CLIP {
            break;
        }
        (distance, object) = scene.nearest(&p);
        steps += 1;
    }
    March {
        position: p,
        distance,
        object,
        steps,
        hit: distance <= -HIT_EPS * p.z,
    }
}

pub fn intersect(scene: &impl Nearest, origin: &V3, dir: &V3) -> Option<March> {
    let m = march(scene, origin, dir);
    if m.hit {
        Some(m)
    } else {
        None
    }
}

pub fn render_pixel(scene: &Scene, x: u32, y: u32, w: u32, h: u32) -> Rgba<u8> {
    let (origin, dir) = camera_ray(x, y, w, h);
    match intersect(scene, &origin, &dir) {
        Some(m) => shade(scene, &m),
        None => MISS,
    }
}
