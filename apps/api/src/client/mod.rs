//! Data layer
//!
//! A thin HTTP client for the simulator, a query cache keyed by resource,
//! polling queries that publish their state on a watch channel, and
//! mutations that write their result back into the cache.

pub mod cache;
pub mod errors;
pub mod http;
pub mod mutations;
pub mod queries;
pub mod query;

pub use cache::{CacheEvent, QueryCache, QueryKey};
pub use errors::{ClientError, ClientResult};
pub use http::ApiClient;
pub use query::{QueryClient, QueryHandle, QueryOptions, QueryState};
