//! Business logic service layer

mod student_service;

pub use student_service::{validate_name, StudentService, EMPTY_NAME_MESSAGE};
