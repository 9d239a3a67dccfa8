//! Domain types

mod student;

pub use student::{Student, StudentId, StudentPayload};
