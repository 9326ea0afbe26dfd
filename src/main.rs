use std::time::{Duration, Instant};

use bevy_math::vec3;
use image::{ImageBuffer, Rgb};
use minifb::{Key, Window, WindowOptions};

use rayview::camera::Camera;
use rayview::obj::{Plane, Scene, Sphere};
use rayview::render::render;

const WIDTH: usize = 512;
const HEIGHT: usize = 512;

fn to_u32(r: f32, g: f32, b: f32) -> u32 {
    let red = (255.999 * r.clamp(0.0, 1.0)) as u8 as u32;
    let green = (255.999 * g.clamp(0.0, 1.0)) as u8 as u32;
    let blue = (255.999 * b.clamp(0.0, 1.0)) as u8 as u32;
    (0xFF << 24) | (red << 16) | (green << 8) | blue
}

// The render buffer has row 0 at the bottom; minifb rows run top-down.
fn to_window_buffer(pixels: &[f32], width: usize, height: usize) -> Vec<u32> {
    let mut buffer = vec![0; width * height];
    for y in 0..height {
        let src_row = height - 1 - y;
        for x in 0..width {
            let idx = 3 * (src_row * width + x);
            buffer[y * width + x] = to_u32(pixels[idx], pixels[idx + 1], pixels[idx + 2]);
        }
    }
    buffer
}

fn save_png(pixels: &[f32], width: usize, height: usize) {
    let img = ImageBuffer::from_fn(width as u32, height as u32, |x, y| {
        let src_row = height - 1 - y as usize;
        let idx = 3 * (src_row * width + x as usize);
        Rgb([
            (255.999 * pixels[idx].clamp(0.0, 1.0)) as u8,
            (255.999 * pixels[idx + 1].clamp(0.0, 1.0)) as u8,
            (255.999 * pixels[idx + 2].clamp(0.0, 1.0)) as u8,
        ])
    });
    img.save("output.png").unwrap();
}

fn main() {
    let mut window = Window::new(
        "Ray Tracer",
        WIDTH,
        HEIGHT,
        WindowOptions::default(),
    )
    .unwrap_or_else(|e| {
        panic!("{}", e);
    });

    let mut scene = Scene::new();
    scene.add_plane(Plane::new(vec3(0.0, -2.0, 0.0), vec3(0.0, 1.0, 0.0), vec3(0.5, 0.5, 0.5)));
    scene.add_sphere(Sphere::new(vec3(-4.0, 0.0, -7.0), 1.0, vec3(1.0, 0.0, 0.0)));
    scene.add_sphere(Sphere::new(vec3(0.0, 0.0, -7.0), 2.0, vec3(0.0, 1.0, 0.0)));
    scene.add_sphere(Sphere::new(vec3(4.0, 0.0, -7.0), 1.0, vec3(0.0, 0.0, 1.0)));

    let camera = Camera::new(
        vec3(0.0, 0.0, 0.0),
        vec3(1.0, 0.0, 0.0),
        vec3(0.0, 1.0, 0.0),
        vec3(0.0, 0.0, 1.0),
        -0.1,
        0.1,
        -0.1,
        0.1,
        0.1,
        WIDTH,
        HEIGHT,
    );

    let start = Instant::now();
    let pixels = render(&scene, &camera);
    println!("Rendered frame in {:?}", start.elapsed());

    save_png(&pixels, WIDTH, HEIGHT);

    let buffer = to_window_buffer(&pixels, WIDTH, HEIGHT);

    window.limit_update_rate(Some(Duration::from_millis(16)));
    while window.is_open()
        && !window.is_key_down(Key::Escape)
        && !window.is_key_down(Key::Q)
    {
        window
            .update_with_buffer(&buffer, WIDTH, HEIGHT)
            .unwrap();
    }
}
