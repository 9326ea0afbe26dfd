use bevy_math::Vec3;

use crate::types::{Point3, Ray};

// Pinhole camera looking down -w through an image plane at distance `dist`,
// bounded by [left, right] x [bottom, top] in camera space.
pub struct Camera {
    pub eye: Point3,
    pub u: Vec3,
    pub v: Vec3,
    pub w: Vec3,
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub dist: f32,
    pub nx: usize,
    pub ny: usize,
}

impl Camera {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        eye: Point3,
        u: Vec3,
        v: Vec3,
        w: Vec3,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        dist: f32,
        nx: usize,
        ny: usize,
    ) -> Camera {
        Camera {
            eye,
            u,
            v,
            w,
            left,
            right,
            bottom,
            top,
            dist,
            nx,
            ny,
        }
    }

    pub fn get_ray(&self, ix: usize, iy: usize) -> Ray {
        // pixel centers, not corners
        let u_s = self.left + (self.right - self.left) * (ix as f32 + 0.5) / self.nx as f32;
        let v_s = self.bottom + (self.top - self.bottom) * (iy as f32 + 0.5) / self.ny as f32;
        let direction = (u_s * self.u + v_s * self.v - self.dist * self.w).normalize();
        Ray::new(self.eye, direction)
    }
}

#[cfg(test)]
mod tests {
    use bevy_math::vec3;

    use super::*;

    const EPS: f32 = 1e-6;

    fn axis_aligned(nx: usize, ny: usize) -> Camera {
        Camera::new(
            vec3(0.0, 0.0, 0.0),
            vec3(1.0, 0.0, 0.0),
            vec3(0.0, 1.0, 0.0),
            vec3(0.0, 0.0, 1.0),
            -0.1,
            0.1,
            -0.1,
            0.1,
            0.1,
            nx,
            ny,
        )
    }

    #[test]
    fn single_pixel_looks_down_negative_w() {
        // with a 1x1 grid the pixel center lands exactly on the plane center
        let camera = axis_aligned(1, 1);
        let ray = camera.get_ray(0, 0);
        assert_eq!(ray.origin, vec3(0.0, 0.0, 0.0));
        assert!((ray.direction - vec3(0.0, 0.0, -1.0)).length() < EPS);
    }

    #[test]
    fn pixel_centers_not_corners() {
        let camera = axis_aligned(2, 2);
        // ix = 0 maps to u_s = -0.1 + 0.2 * 0.5 / 2 = -0.05
        let ray = camera.get_ray(0, 0);
        let expected = vec3(-0.05, -0.05, -0.1).normalize();
        assert!((ray.direction - expected).length() < EPS);
    }

    #[test]
    fn directions_are_normalized() {
        let camera = axis_aligned(512, 512);
        for (ix, iy) in [(0, 0), (511, 0), (0, 511), (511, 511), (256, 256)] {
            let ray = camera.get_ray(ix, iy);
            assert!((ray.direction.length() - 1.0).abs() < EPS);
        }
    }
}
