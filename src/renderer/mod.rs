//! wgpu rendering module
//!
//! Everything is drawn as flat-colored triangles: the scene builder produces
//! pixel-space vertices, the pipeline maps them to clip space and draws.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod text;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_scene;
pub use text::TextPainter;
pub use vertex::Vertex;
