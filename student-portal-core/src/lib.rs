//! Student Portal Core Library
//!
//! Provides the UI-independent half of the Student Portal:
//! - Domain types (`Student`, `StudentId`, `StudentPayload`)
//! - The remote collection contract (`StudentApi`) and its REST implementation
//! - `StudentService`, which validates input before anything reaches the network
//!
//! The backend itself is external; this crate only speaks its JSON-over-HTTP contract.

pub mod error;
pub mod http_client;
pub mod rest_api;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use rest_api::{RestStudentApi, DEFAULT_API_URL};
pub use services::StudentService;
pub use traits::StudentApi;
pub use types::{Student, StudentId, StudentPayload};
