//! Lattice value noise and its fractal sum.
//!
//! Corner values are plain scalars looked up through a hashed permutation,
//! interpolated with the quintic fade `6t^5 - 15t^4 + 10t^3`.

use crate::math::{mul, scalar, V3};
use crate::Field;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};

pub const TABLE_SIZE: usize = 256;
pub const DEFAULT_SEED: u64 = 0x5eed_d157;

const OCTAVES: usize = 8;
// Keeps the lattice split on the positive side for any reasonable scene coordinate.
const LATTICE_OFFSET: f32 = 100000.;

/// Permutation and corner-value tables. Built once, then only read.
#[derive(Clone, Debug)]
pub struct NoiseField {
    perm: [u8; TABLE_SIZE],
    grad: [f32; TABLE_SIZE],
}

impl Default for NoiseField {
    fn default() -> Self {
        NoiseField::new(DEFAULT_SEED)
    }
}

impl NoiseField {
    pub fn new(seed: u64) -> NoiseField {
        log::debug!("building noise tables from seed {:#x}", seed);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut perm = [0u8; TABLE_SIZE];
        for (i, p) in perm.iter_mut().enumerate() {
            *p = i as u8;
        }
        perm.shuffle(&mut rng);
        let corner = Uniform::new_inclusive(-1.0f32, 1.0);
        let mut grad = [0f32; TABLE_SIZE];
        for g in grad.iter_mut() {
            *g = corner.sample(&mut rng);
        }
        NoiseField { perm, grad }
    }

    #[cfg(test)]
    pub(crate) fn perm(&self) -> &[u8; TABLE_SIZE] {
        &self.perm
    }

    #[cfg(test)]
    pub(crate) fn grad(&self) -> &[f32; TABLE_SIZE] {
        &self.grad
    }

    /// Every corner holds `value`, so the noise is flat.
    #[cfg(test)]
    pub(crate) fn uniform(value: f32) -> NoiseField {
        let mut perm = [0u8; TABLE_SIZE];
        for (i, p) in perm.iter_mut().enumerate() {
            *p = i as u8;
        }
        NoiseField {
            perm,
            grad: [value; TABLE_SIZE],
        }
    }

    fn corner(&self, i: i32, j: i32, k: i32) -> f32 {
        let pk = self.perm[k as u8 as usize];
        let pj = self.perm[(j as u8).wrapping_add(pk) as usize];
        self.grad[(i as u8).wrapping_add(pj) as usize]
    }

    fn corners(&self, i: i32, j: i32, k: i32) -> [f32; 8] {
        [
            self.corner(i, j, k),
            self.corner(i + 1, j, k),
            self.corner(i, j + 1, k),
            self.corner(i + 1, j + 1, k),
            self.corner(i, j, k + 1),
            self.corner(i + 1, j, k + 1),
            self.corner(i, j + 1, k + 1),
            self.corner(i + 1, j + 1, k + 1),
        ]
    }

    pub fn noise3f(&self, p: &V3) -> f32 {
        let (i, u) = split(p.x);
        let (j, v) = split(p.y);
        let (k, w) = split(p.z);
        let (u, v, w) = (fade(u), fade(v), fade(w));

        let [a, b, c, d, e, f, g, h] = self.corners(i, j, k);
        scalar::lerp(
            w,
            scalar::lerp(v, scalar::lerp(u, a, b), scalar::lerp(u, c, d)),
            scalar::lerp(v, scalar::lerp(u, e, f), scalar::lerp(u, g, h)),
        )
    }

    /// Noise value together with its analytic gradient.
    pub fn dnoise3f(&self, p: &V3) -> (f32, V3) {
        let (i, u) = split(p.x);
        let (j, v) = split(p.y);
        let (k, w) = split(p.z);
        let (du, dv, dw) = (dfade(u), dfade(v), dfade(w));
        let (u, v, w) = (fade(u), fade(v), fade(w));

        let [a, b, c, d, e, f, g, h] = self.corners(i, j, k);
        let k0 = a;
        let k1 = b - a;
        let k2 = c - a;
        let k3 = e - a;
        let k4 = a - b - c + d;
        let k5 = a - c - e + g;
        let k6 = a - b - e + f;
        let k7 = -a + b + c - d + e - f - g + h;

        let value =
            k0 + k1 * u + k2 * v + k3 * w + k4 * u * v + k5 * v * w + k6 * w * u + k7 * u * v * w;
        let gradient = V3 {
            x: du * (k1 + k4 * v + k6 * w + k7 * v * w),
            y: dv * (k2 + k5 * w + k4 * u + k7 * w * u),
            z: dw * (k3 + k6 * u + k5 * v + k7 * u * v),
        };
        (value, gradient)
    }

    /// Eight octaves, amplitude halving as frequency doubles. Turbulence: the
    /// absolute value of the sum.
    pub fn fbm(&self, p: &V3) -> f32 {
        let mut p = *p;
        let mut f = 0.;
        let mut w = 0.5;
        for _ in 0..OCTAVES {
            f += w * self.noise3f(&p);
            w *= 0.5;
            p = mul(2., &p);
        }
        scalar::abs(f)
    }
}

/// [`NoiseField::fbm`] viewed as a [`Field`].
pub struct Fbm<'a>(pub &'a NoiseField);

impl Field for Fbm<'_> {
    fn sample(&self, x: &V3) -> f32 {
        self.0.fbm(x)
    }
}

fn split(x: f32) -> (i32, f32) {
    let (i, f) = scalar::modf(x + LATTICE_OFFSET);
    (i as i32, f)
}

fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6. - 15.) + 10.)
}

fn dfade(t: f32) -> f32 {
    30. * t * t * (t * (t - 2.) + 1.)
}
