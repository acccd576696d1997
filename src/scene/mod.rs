use crate::math::{rotx, roty, trans, V3};
use crate::noise::NoiseField;
use crate::{Field, Nearest};

pub mod primitives;

/// Camera-to-world placement: pushed back 12 units, pitched down, swung
/// around the vertical axis, then raised.
const CAMERA_PULLBACK: f32 = 12.;
const CAMERA_PITCH: f32 = -0.5;
const CAMERA_YAW: f32 = 0.7;
const CAMERA_RISE: f32 = 1.;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Object {
    Plane,
    Monster,
}

impl Object {
    /// Signed distance from a world-space point.
    pub fn sdf(&self, p: &V3, noise: &NoiseField) -> f32 {
        match self {
            Object::Plane => primitives::plane(p),
            Object::Monster => primitives::monster(p, noise),
        }
    }

    pub fn color(&self) -> [f32; 3] {
        match self {
            Object::Plane => [1., 1., 0.8],
            Object::Monster => [1., 0.8, 0.8],
        }
    }
}

/// The fixed scene, queried in camera space.
#[derive(Clone, Copy, Debug)]
pub struct Scene<'a> {
    pub noise: &'a NoiseField,
}

impl<'a> Scene<'a> {
    /// Ties go to the earlier entry.
    pub const OBJECTS: [Object; 2] = [Object::Plane, Object::Monster];

    pub fn new(noise: &'a NoiseField) -> Scene<'a> {
        Scene { noise }
    }

    pub fn to_world(p: &V3) -> V3 {
        let p = trans(p, 0., 0., CAMERA_PULLBACK);
        let p = roty(&rotx(&p, CAMERA_PITCH), CAMERA_YAW);
        trans(&p, 0., CAMERA_RISE, 0.)
    }

    /// Nearest object to a camera-space point and its distance.
    pub fn distance_field_object(&self, p: &V3) -> (f32, Object) {
        let world = Self::to_world(p);
        let mut nearest = (f32::MAX, Self::OBJECTS[0]);
        for obj in Self::OBJECTS {
            let d = obj.sdf(&world, self.noise);
            if d < nearest.0 {
                nearest = (d, obj);
            }
        }
        nearest
    }

    pub fn distance_field(&self, p: &V3) -> f32 {
        self.distance_field_object(p).0
    }
}

impl Field for Scene<'_> {
    fn sample(&self, x: &V3) -> f32 {
        self.distance_field(x)
    }
}

impl Nearest for Scene<'_> {
    fn nearest(&self, x: &V3) -> (f32, Object) {
        self.distance_field_object(x)
    }
}
