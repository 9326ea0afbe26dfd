pub mod camera;
pub mod obj;
pub mod render;
pub mod types;
