pub mod camera;
pub mod constants;
pub mod controller;
pub mod mesh;
pub mod orientation;
pub mod projector;
pub mod reveal;
pub mod scene;

pub use camera::*;
pub use controller::*;
pub use mesh::*;
pub use orientation::*;
pub use reveal::*;
pub use scene::*;
