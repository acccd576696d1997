use std::ops;

pub mod scalar;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct V3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

pub fn v(x: f32, y: f32, z: f32) -> V3 {
    V3 { x, y, z }
}

pub fn sub(x: &V3, y: &V3) -> V3 {
    V3 {
        x: x.x - y.x,
        y: x.y - y.y,
        z: x.z - y.z,
    }
}

pub fn add(x: &V3, y: &V3) -> V3 {
    V3 {
        x: x.x + y.x,
        y: x.y + y.y,
        z: x.z + y.z,
    }
}

pub fn mul(scalar: f32, x: &V3) -> V3 {
    V3 {
        x: x.x * scalar,
        y: x.y * scalar,
        z: x.z * scalar,
    }
}

/// `x + dir * amount`, one step along a ray.
pub fn along(x: &V3, dir: &V3, amount: f32) -> V3 {
    V3 {
        x: x.x + dir.x * amount,
        y: x.y + dir.y * amount,
        z: x.z + dir.z * amount,
    }
}

pub fn trans(x: &V3, dx: f32, dy: f32, dz: f32) -> V3 {
    V3 {
        x: x.x + dx,
        y: x.y + dy,
        z: x.z + dz,
    }
}

pub fn abs2(x: &V3) -> f32 {
    x.x * x.x + x.y * x.y + x.z * x.z
}

pub fn abs(x: &V3) -> f32 {
    scalar::sqrt(abs2(x))
}

pub fn dist(x: &V3, y: &V3) -> f32 {
    abs(&sub(x, y))
}

/// Unit vector in the direction of `x`. The zero vector maps to itself.
pub fn normalize(x: &V3) -> V3 {
    let len = abs(x);
    if len == 0. {
        return O;
    }
    V3 {
        x: x.x / len,
        y: x.y / len,
        z: x.z / len,
    }
}

pub fn dot(x: &V3, y: &V3) -> f32 {
    x.x * y.x + x.y * y.y + x.z * y.z
}

// Right-handed rotations about the principal axes.

pub fn rotx(x: &V3, angle: f32) -> V3 {
    let (s, c) = scalar::sin_cos(angle);
    V3 {
        x: x.x,
        y: x.y * c - x.z * s,
        z: x.y * s + x.z * c,
    }
}

pub fn roty(x: &V3, angle: f32) -> V3 {
    let (s, c) = scalar::sin_cos(angle);
    V3 {
        x: x.x * c + x.z * s,
        y: x.y,
        z: x.z * c - x.x * s,
    }
}

pub fn rotz(x: &V3, angle: f32) -> V3 {
    let (s, c) = scalar::sin_cos(angle);
    V3 {
        x: x.x * c - x.y * s,
        y: x.x * s + x.y * c,
        z: x.z,
    }
}

impl ops::Add<V3> for V3 {
    type Output = V3;

    fn add(self, rhs: V3) -> V3 {
        add(&self, &rhs)
    }
}

impl ops::Sub<V3> for V3 {
    type Output = V3;

    fn sub(self, rhs: V3) -> V3 {
        sub(&self, &rhs)
    }
}

impl ops::Mul<V3> for f32 {
    type Output = V3;

    fn mul(self, rhs: V3) -> Self::Output {
        mul(self, &rhs)
    }
}

pub const B1: V3 = V3 {
    x: 1.,
    y: 0.,
    z: 0.,
};

pub const B2: V3 = V3 {
    x: 0.,
    y: 1.,
    z: 0.,
};

pub const B3: V3 = V3 {
    x: 0.,
    y: 0.,
    z: 1.,
};

pub const O: V3 = V3 {
    x: 0.,
    y: 0.,
    z: 0.,
};
