use super::March;
use crate::math::{add, along, mul, normalize, scalar, trans, v, V3};
use crate::noise::Fbm;
use crate::scene::Scene;
use crate::Field;
use image::Rgba;

const NORMAL_EPS: f32 = 0.02;
const AO_STEP: f32 = 0.3;
const AO_PROBES: usize = 5;
const BUMP: f32 = 0.3;
const FOG_DENSITY: f32 = 0.07;
const FOG_START: f32 = -6.;

/// Normalized central-difference gradient of `f` at `x`.
pub fn field_normal(f: &impl Field, x: &V3) -> V3 {
    let e = NORMAL_EPS;
    let g = v(
        f.sample(&trans(x, e, 0., 0.)) - f.sample(&trans(x, -e, 0., 0.)),
        f.sample(&trans(x, 0., e, 0.)) - f.sample(&trans(x, 0., -e, 0.)),
        f.sample(&trans(x, 0., 0., e)) - f.sample(&trans(x, 0., 0., -e)),
    );
    normalize(&g)
}

/// One minus the weighted shortfall of free space along `normal`, capped at 1.
/// Not clamped below: heavily enclosed points go negative.
pub fn ambient_occlusion(f: &impl Field, start: &V3, normal: &V3) -> f32 {
    let mut p = *start;
    let mut occluded = 0.;
    let mut weight = 0.5;
    for i in 1..=AO_PROBES {
        p = along(&p, normal, AO_STEP);
        occluded += weight * (i as f32 * AO_STEP - f.sample(&p));
        weight *= 0.5;
    }
    scalar::min(1. - occluded, 1.)
}

fn texture(p: &V3, fbm: f32) -> f32 {
    0.4 * (scalar::sin(2. * (p.x + 1.4 * p.y) + 2. * fbm) + 1.) + 0.2
}

fn fog(p: &V3) -> f32 {
    scalar::exp(FOG_DENSITY * (p.z - FOG_START))
}

fn bump(n: &V3, fbm_normal: &V3) -> V3 {
    normalize(&add(n, &mul(BUMP, fbm_normal)))
}

/// Lambert from +Z over a fixed ambient floor, darkened by occlusion and fog.
fn intensity(tex: f32, n: &V3, ao: f32, fog: f32) -> f32 {
    let lit = scalar::max(0., n.z);
    tex * (lit * 0.6 + 0.3) * (ao * ao * ao) * fog
}

fn to_rgba(intensity: f32, [r, g, b]: [f32; 3]) -> Rgba<u8> {
    Rgba([
        (255. * intensity * r) as u8,
        (255. * intensity * g) as u8,
        (255. * intensity * b) as u8,
        255,
    ])
}

/// Color of a surface hit. Channels truncate toward zero and saturate.
pub fn shade(scene: &Scene, hit: &March) -> Rgba<u8> {
    let p = &hit.position;
    let n = field_normal(scene, p);
    // occlusion uses the geometric normal, before bumping
    let ao = ambient_occlusion(scene, p, &n);

    let fbm = Fbm(scene.noise);
    let n = bump(&n, &field_normal(&fbm, p));

    let v = intensity(texture(p, fbm.sample(p)), &n, ao, fog(p));
    to_rgba(v, hit.object.color())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{abs, B2, B3};
    use crate::noise::NoiseField;

    struct Ground;

    impl Field for Ground {
        fn sample(&self, x: &V3) -> f32 {
            x.y
        }
    }

    struct Zero;

    impl Field for Zero {
        fn sample(&self, _: &V3) -> f32 {
            0.
        }
    }

    struct Open;

    impl Field for Open {
        fn sample(&self, _: &V3) -> f32 {
            50.
        }
    }

    #[test]
    fn test_normal_of_flat_ground() {
        let n = field_normal(&Ground, &v(3., 0., -2.));
        assert!((n.y - 1.).abs() < 1e-5);
        assert!((abs(&n) - 1.).abs() < 1e-5);
    }

    #[test]
    fn test_no_occlusion_in_open_space() {
        assert_eq!(ambient_occlusion(&Open, &v(0., 1000., 0.), &B2), 1.);
    }

    #[test]
    fn test_no_occlusion_far_above_scene() {
        let noise = NoiseField::default();
        let scene = Scene::new(&noise);
        let ao = ambient_occlusion(&scene, &v(0., 1000., 0.), &B2);
        assert!((ao - 1.).abs() < 1e-4);
    }

    #[test]
    fn test_flat_ground_is_unoccluded() {
        // Probes along the normal find exactly the expected free space.
        let ao = ambient_occlusion(&Ground, &v(0., 0., 0.), &B2);
        assert!((ao - 1.).abs() < 1e-5);
    }

    #[test]
    fn test_enclosed_point_can_go_negative() {
        struct Solid;
        impl Field for Solid {
            fn sample(&self, _: &V3) -> f32 {
                -10.
            }
        }
        assert!(ambient_occlusion(&Solid, &v(0., 0., 0.), &B2) < 0.);
    }

    #[test]
    fn test_occlusion_weights_halve_per_probe() {
        // a field of zeros falls short by 0.3 * i at probe i
        let expected = 1. - 0.3 * (1. / 2. + 2. / 4. + 3. / 8. + 4. / 16. + 5. / 32.);
        let ao = ambient_occlusion(&Zero, &v(0., 0., 0.), &B2);
        assert!((ao - expected).abs() < 1e-6, "{}", ao);
        assert!((ao - 0.465625).abs() < 1e-6);
    }

    #[test]
    fn test_texture_and_fog_values() {
        assert!((texture(&v(0.25, 0.5, -3.), 0.1) - 0.945_283_7).abs() < 1e-5);
        assert!((texture(&v(0., 0., -3.), 0.) - 0.6).abs() < 1e-6);
        assert!((fog(&v(0., 0., -16.)) - 0.496_585_3).abs() < 1e-6);
    }

    #[test]
    fn test_bump_tilts_normal() {
        let n = bump(&B3, &v(1., 0., 0.));
        assert!((n.x - 0.287_347_9).abs() < 1e-6);
        assert!((n.z - 0.957_826_3).abs() < 1e-6);
    }

    #[test]
    fn test_intensity_lighting_terms() {
        assert!((intensity(1., &B3, 1., 1.) - 0.9).abs() < 1e-6);
        assert!((intensity(1., &v(0., 0.6, 0.8), 1., 1.) - 0.78).abs() < 1e-6);
        // facing away leaves only the ambient floor
        assert!((intensity(1., &v(0., 0., -1.), 1., 1.) - 0.3).abs() < 1e-6);
        assert!((intensity(0.5, &B3, 0.5, 2.) - 0.1125).abs() < 1e-6);
    }

    #[test]
    fn test_channels_truncate_and_saturate() {
        assert_eq!(to_rgba(0.5, [1., 1., 0.8]), Rgba([127, 127, 102, 255]));
        assert_eq!(to_rgba(0.999, [1., 0.8, 0.8]), Rgba([254, 203, 203, 255]));
        assert_eq!(to_rgba(2., [1., 1., 0.8]), Rgba([255, 255, 255, 255]));
        assert_eq!(to_rgba(-0.5, [1., 1., 0.8]), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_texture_and_fog_ranges() {
        let p = v(0.3, -0.2, -9.);
        let t = texture(&p, 0.4);
        assert!((0.2..=1.0).contains(&t));
        assert_eq!(fog(&v(0., 0., -6.)), 1.);
        assert!(fog(&v(0., 0., -30.)) < fog(&v(0., 0., -10.)));
    }
}
