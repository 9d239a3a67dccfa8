//! Test helpers
//!
//! Mock implementations and convenience factories.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::StudentService;
use crate::traits::StudentApi;
use crate::types::{Student, StudentId, StudentPayload};

/// A request the mock received
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    List,
    Create(String),
    Update(StudentId, String),
    Delete(StudentId),
}

// ===== MockStudentApi =====

pub struct MockStudentApi {
    students: RwLock<Vec<Student>>,
    calls: RwLock<Vec<ApiCall>>,
    /// If Some, every call records itself and then fails with this error
    error: RwLock<Option<CoreError>>,
}

impl MockStudentApi {
    pub fn new() -> Self {
        Self {
            students: RwLock::new(Vec::new()),
            calls: RwLock::new(Vec::new()),
            error: RwLock::new(None),
        }
    }

    pub async fn set_students(&self, students: Vec<Student>) {
        *self.students.write().await = students;
    }

    pub async fn set_error(&self, err: Option<CoreError>) {
        *self.error.write().await = err;
    }

    pub async fn calls(&self) -> Vec<ApiCall> {
        self.calls.read().await.clone()
    }

    async fn record(&self, call: ApiCall) -> CoreResult<()> {
        self.calls.write().await.push(call);
        match self.error.read().await.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl StudentApi for MockStudentApi {
    async fn list(&self) -> CoreResult<Vec<Student>> {
        self.record(ApiCall::List).await?;
        Ok(self.students.read().await.clone())
    }

    async fn create(&self, payload: &StudentPayload) -> CoreResult<()> {
        self.record(ApiCall::Create(payload.name.clone())).await
    }

    async fn update(&self, id: &StudentId, payload: &StudentPayload) -> CoreResult<()> {
        self.record(ApiCall::Update(id.clone(), payload.name.clone()))
            .await
    }

    async fn delete(&self, id: &StudentId) -> CoreResult<()> {
        self.record(ApiCall::Delete(id.clone())).await
    }
}

// ===== Factories =====

pub fn student(id: i64, name: &str) -> Student {
    Student {
        id: StudentId::Number(id),
        name: name.to_string(),
        created_at: None,
    }
}

pub fn create_test_service() -> (StudentService, Arc<MockStudentApi>) {
    let api = Arc::new(MockStudentApi::new());
    let svc = StudentService::new(api.clone());
    (svc, api)
}
