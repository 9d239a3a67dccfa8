//! Abstraction traits
//!
//! The platform layer injects a concrete `StudentApi`; tests inject a mock.

mod student_api;

pub use student_api::StudentApi;
