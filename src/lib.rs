pub mod camera;
pub mod cli;
pub mod geometry;
pub mod renderer;
pub mod scene;
pub mod showcase;
pub mod types;
pub mod vehicle;

pub use showcase::Showcase;
pub use vehicle::build_vehicle;
