// Infrastructure layer module
// In-memory adapters standing in for a real backend
// Follows Hexagonal Architecture

pub mod fixtures;
pub mod id_generator;
pub mod repositories;

pub use id_generator::IdGenerator;
