pub mod primitive;
pub mod loader;
