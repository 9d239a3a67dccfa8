//! Student record service
//!
//! Sits between the UI and [`StudentApi`]: names are validated and trimmed here,
//! so an invalid submission never turns into a request.

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::traits::StudentApi;
use crate::types::{Student, StudentId, StudentPayload};

/// Prompt shown when the name is empty after trimming
pub const EMPTY_NAME_MESSAGE: &str = "Please enter a name";

/// Trim `name`, rejecting it if nothing is left.
pub fn validate_name(name: &str) -> CoreResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(EMPTY_NAME_MESSAGE.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Student record service
#[derive(Clone)]
pub struct StudentService {
    api: Arc<dyn StudentApi>,
}

impl StudentService {
    pub fn new(api: Arc<dyn StudentApi>) -> Self {
        Self { api }
    }

    /// Fetch the full collection.
    pub async fn list(&self) -> CoreResult<Vec<Student>> {
        match self.api.list().await {
            Ok(students) => {
                log::info!("Fetched {} students", students.len());
                Ok(students)
            }
            Err(e) => {
                log_failure("Error fetching students", &e);
                Err(e)
            }
        }
    }

    /// Create a student named `name` (trimmed).
    pub async fn create(&self, name: &str) -> CoreResult<()> {
        let name = validate_name(name)?;
        let payload = StudentPayload::new(name);

        self.api
            .create(&payload)
            .await
            .inspect(|_| log::info!("Created student '{}'", payload.name))
            .inspect_err(|e| log_failure("Error adding student", e))
    }

    /// Rename student `id` to `name` (trimmed).
    pub async fn update(&self, id: &StudentId, name: &str) -> CoreResult<()> {
        let name = validate_name(name)?;
        let payload = StudentPayload::new(name);

        self.api
            .update(id, &payload)
            .await
            .inspect(|_| log::info!("Updated student {id} to '{}'", payload.name))
            .inspect_err(|e| log_failure("Error updating student", e))
    }

    /// Delete student `id`.
    pub async fn delete(&self, id: &StudentId) -> CoreResult<()> {
        self.api
            .delete(id)
            .await
            .inspect(|_| log::info!("Deleted student {id}"))
            .inspect_err(|e| log_failure("Error deleting student", e))
    }
}

fn log_failure(context: &str, error: &CoreError) {
    if error.is_expected() {
        log::warn!("{context}: {error}");
    } else {
        log::error!("{context}: {error}");
    }
}
