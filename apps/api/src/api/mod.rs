// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod state;

pub use errors::ApiError;
pub use router::router;
pub use state::AppState;
