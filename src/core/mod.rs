pub mod color;
pub mod compositor;
pub mod constants;
pub mod engine;
pub mod geometry;
pub mod lifecycle;
pub mod params;
pub mod pass;
pub mod surface;

pub use color::*;
pub use compositor::*;
pub use engine::*;
pub use geometry::*;
pub use lifecycle::*;
pub use params::*;
pub use pass::*;
pub use surface::*;
