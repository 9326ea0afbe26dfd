use bevy_math::Vec3;

use crate::types::{Color, Point3, Ray};

#[derive(Copy, Clone, Debug)]
pub struct Intersection {
    pub distance: f32,
    pub point: Point3,
    pub normal: Vec3,
    pub color: Color,
}

#[derive(Copy, Clone, Debug)]
pub struct Plane {
    point: Point3,
    normal: Vec3,
    color: Color,
}

impl Plane {
    // `normal` must be unit length; it is not renormalized here.
    pub fn new(point: Point3, normal: Vec3, color: Color) -> Self {
        Self {
            point,
            normal,
            color,
        }
    }

    pub fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let denom = self.normal.dot(ray.direction);
        if denom.abs() <= 1e-6 {
            // parallel, or degenerate normal
            return None;
        }

        let t = (self.point - ray.origin).dot(self.normal) / denom;
        if t <= 0.0 {
            return None;
        }

        Some(Intersection {
            distance: t,
            point: ray.at(t),
            // reported as stored, never flipped towards the ray
            normal: self.normal,
            color: self.color,
        })
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Sphere {
    center: Point3,
    radius: f32,
    color: Color,
}

impl Sphere {
    pub fn new(center: Point3, radius: f32, color: Color) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }

    pub fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let oc = ray.origin - self.center;
        let a = ray.direction.length_squared();
        let half_b = oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant <= 0.0 {
            // tangent rays count as misses
            return None;
        }

        // Near root only. When the origin sits inside the sphere this root is
        // behind it and the sphere reports a miss even though the far root
        // would be ahead.
        let t = (-half_b - discriminant.sqrt()) / a;
        if t <= 0.0 {
            return None;
        }

        let point = ray.at(t);
        Some(Intersection {
            distance: t,
            point,
            normal: (point - self.center) / self.radius,
            color: self.color,
        })
    }
}

pub struct Scene {
    planes: Vec<Plane>,
    spheres: Vec<Sphere>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            planes: Vec::new(),
            spheres: Vec::new(),
        }
    }

    pub fn add_plane(&mut self, plane: Plane) {
        self.planes.push(plane);
    }

    pub fn add_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    // Closest hit strictly inside (t_min, t_max). Planes are tested before
    // spheres, each group in insertion order; the strict `<` keeps the
    // earlier-tested primitive on exact ties.
    pub fn trace(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<Intersection> {
        let mut best = None;
        let mut closest = t_max;

        for plane in self.planes.iter() {
            if let Some(hit) = plane.intersect(ray) {
                if hit.distance > t_min && hit.distance < closest {
                    closest = hit.distance;
                    best = Some(hit);
                }
            }
        }
        for sphere in self.spheres.iter() {
            if let Some(hit) = sphere.intersect(ray) {
                if hit.distance > t_min && hit.distance < closest {
                    closest = hit.distance;
                    best = Some(hit);
                }
            }
        }

        best
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
