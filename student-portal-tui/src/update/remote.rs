//! 请求结果处理
//!
//! 每次增删改成功后都重新拉取整个列表，本地缓存不做局部修改。

use crate::backend::Command;
use crate::message::BackendEvent;
use crate::model::{AlertKind, App};

/// 处理后台请求结果
pub fn update(app: &mut App, event: BackendEvent) -> Option<Command> {
    match event {
        BackendEvent::StudentsLoaded(Ok(students)) => {
            log::debug!("Loaded {} students", students.len());
            app.students.set_students(students);
            app.clear_status();
            None
        }
        BackendEvent::StudentsLoaded(Err(e)) => {
            // 列表加载失败不打扰用户，只保留旧缓存
            log::warn!("Failed to load students: {e}");
            app.students.loading = false;
            app.clear_status();
            None
        }

        BackendEvent::StudentCreated(Ok(())) => {
            app.students.finish_create();
            succeeded(app, "Student added successfully!")
        }
        BackendEvent::StudentCreated(Err(e)) => failed(app, "Failed to add student", &e),

        BackendEvent::StudentUpdated(Ok(())) => {
            app.students.finish_update();
            succeeded(app, "Student updated successfully!")
        }
        BackendEvent::StudentUpdated(Err(e)) => failed(app, "Failed to update student", &e),

        BackendEvent::StudentDeleted(Ok(())) => succeeded(app, "Student deleted successfully!"),
        BackendEvent::StudentDeleted(Err(e)) => failed(app, "Failed to delete student", &e),
    }
}

fn succeeded(app: &mut App, message: &str) -> Option<Command> {
    app.clear_status();
    app.modal.show_alert(AlertKind::Success, message);
    app.students.loading = true;
    Some(Command::FetchStudents)
}

fn failed(app: &mut App, message: &str, error: &impl std::fmt::Display) -> Option<Command> {
    log::error!("{message}: {error}");
    app.clear_status();
    app.modal.show_alert(AlertKind::Error, message);
    None
}
