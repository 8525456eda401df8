pub mod mesh_builder;
pub mod mesh_cache;
pub mod render_backend;
pub mod surface_mesh;
