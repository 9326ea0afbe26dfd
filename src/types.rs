use bevy_math::Vec3;

pub type Point3 = Vec3;

// Flat RGB in [0, 1], no alpha.
pub type Color = Vec3;

#[derive(Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
        }
    }

    pub fn at(&self, t: f32) -> Point3 {
        self.origin + self.direction * t
    }
}
