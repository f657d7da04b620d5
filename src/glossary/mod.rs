pub mod parser;
pub mod serializer;
pub mod loader;
