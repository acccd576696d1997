//! Single-precision scalar helpers.
//!
//! Transcendentals are evaluated in `f64` and rounded once to `f32`, so every
//! stage of the pipeline sees the same correctly rounded inputs regardless of
//! the platform's `f32` libm.

pub fn min(a: f32, b: f32) -> f32 {
    if a < b {
        a
    } else {
        b
    }
}

pub fn max(a: f32, b: f32) -> f32 {
    if a > b {
        a
    } else {
        b
    }
}

pub fn abs(a: f32) -> f32 {
    a.abs()
}

pub fn sin(a: f32) -> f32 {
    (a as f64).sin() as f32
}

pub fn cos(a: f32) -> f32 {
    (a as f64).cos() as f32
}

pub fn sin_cos(a: f32) -> (f32, f32) {
    let (s, c) = (a as f64).sin_cos();
    (s as f32, c as f32)
}

pub fn sqrt(a: f32) -> f32 {
    (a as f64).sqrt() as f32
}

/// Integer and fractional parts, both carrying the sign of `a`.
pub fn modf(a: f32) -> (f32, f32) {
    let i = a.trunc();
    (i, a - i)
}

/// Floating remainder with the sign of `x`, like C `fmod`.
pub fn fmod(x: f32, y: f32) -> f32 {
    ((x as f64) % (y as f64)) as f32
}

pub fn exp(a: f32) -> f32 {
    (a as f64).exp() as f32
}

pub fn lerp(t: f32, lo: f32, hi: f32) -> f32 {
    lo * (1. - t) + hi * t
}

pub fn saturate(x: f32) -> f32 {
    max(0., min(x, 1.))
}

/// Cubic Hermite step of `x` between edges `a` and `b`.
pub fn smoothstep(x: f32, a: f32, b: f32) -> f32 {
    let x = saturate((x - a) / (b - a));
    x * x * (3. - 2. * x)
}
