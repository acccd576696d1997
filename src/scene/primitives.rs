//! Distance estimators. Only [`plane`] and [`monster`] make up the rendered
//! scene; the rest are kept as building blocks.

use crate::math::{abs, mul, rotz, roty, scalar, trans, V3};
use crate::noise::NoiseField;
use std::f32::consts::PI;

/// Returned by the bounded estimators outside the region they model.
pub const FAR: f32 = 50.;

const SPHERE_RADIUS: f32 = 1.3;
const TENTACLES: usize = 6;
const TENTACLE_RADIUS: f32 = 0.3;
const TENTACLE_REACH: f32 = 10.;
const TILE: f32 = 4.;

pub fn plane(p: &V3) -> f32 {
    p.y
}

pub fn sphere(p: &V3, radius: f32) -> f32 {
    abs(p) - radius
}

/// Axis-aligned cube of half-size 1 around the origin.
pub fn cube(p: &V3) -> f32 {
    scalar::max(
        scalar::abs(p.x),
        scalar::max(scalar::abs(p.y), scalar::abs(p.z)),
    ) - 1.
}

pub fn warp_cube(p: &V3) -> f32 {
    scalar::min(sphere(p, SPHERE_RADIUS), cube(&rotz(p, p.z / 2.)))
}

/// [`warp_cube`] repeated on a 4-unit grid in the XZ plane.
pub fn warp_cube_field(p: &V3) -> f32 {
    let half = TILE / 2.;
    let tiled = V3 {
        x: scalar::fmod(p.x + 10000. * TILE, TILE) - half,
        y: p.y,
        z: scalar::fmod(p.z + 10000. * TILE, TILE) - half,
    };
    warp_cube(&tiled)
}

/// Thick half-line along +X.
pub fn x_axis(p: &V3) -> f32 {
    if p.x < 0. {
        return FAR;
    }
    abs(&V3 { x: 0., ..*p }) - TENTACLE_RADIUS
}

/// Six arms fanned around the Y axis, each twisted by a little noise and
/// lifted near the middle.
pub fn tentacles(p: &V3, noise: &NoiseField) -> f32 {
    let rr = abs(&V3 { y: 0., ..*p });
    if rr >= TENTACLE_REACH {
        return FAR;
    }
    let lift = scalar::exp(-0.2 * rr * rr);
    let mut distance = f32::MAX;
    for i in 0..TENTACLES {
        let fi = i as f32;
        let warp = 0.04
            * rr
            * noise.noise3f(&V3 {
                x: 0.4 * rr,
                y: 6.3 * fi,
                z: 0.,
            });
        let q = roty(p, 2. * PI * fi / TENTACLES as f32 + warp);
        let q = trans(&q, 0., -lift, 0.);
        distance = scalar::min(distance, x_axis(&q));
    }
    distance
}

/// A round head melting into the tentacles, blended by distance from the head.
pub fn monster(p: &V3, noise: &NoiseField) -> f32 {
    let head = trans(p, 0., -2.5, 0.);
    let d_head = sphere(&head, SPHERE_RADIUS);
    let d_arms = tentacles(&trans(&mul(0.8, p), 0., -0.3, 0.), noise);
    let blend = scalar::smoothstep(abs(&head) / 2., 0., 1.);
    scalar::lerp(blend, d_head, d_arms)
}
