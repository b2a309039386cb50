//! # Database module — PostgreSQL connection pool management
//!
//! Provides the shared connection pool used by every server function. Gated
//! behind `#[cfg(feature = "server")]` so client (WASM) builds never pull in
//! SQLx or Tokio networking code.

#[cfg(feature = "server")]
mod pool;

#[cfg(feature = "server")]
pub use pool::get_pool;
