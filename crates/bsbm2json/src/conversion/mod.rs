pub mod converter;
pub mod loader;
pub mod resolver;
pub mod serializer;
