use crate::camera::Camera;
use crate::obj::Scene;
use crate::types::Color;

// Casts one ray per pixel and writes white on hit, black on miss. The buffer
// is row-major RGB, 3 floats per pixel, row 0 at the bottom of the image
// plane, rebuilt from scratch on every call.
pub fn render(scene: &Scene, camera: &Camera) -> Vec<f32> {
    let mut pixels = Vec::with_capacity(3 * camera.nx * camera.ny);
    for iy in 0..camera.ny {
        for ix in 0..camera.nx {
            let ray = camera.get_ray(ix, iy);
            let color = match scene.trace(&ray, 0.0, f32::INFINITY) {
                Some(_) => Color::splat(1.0),
                None => Color::splat(0.0),
            };
            pixels.push(color.x);
            pixels.push(color.y);
            pixels.push(color.z);
        }
    }
    pixels
}
