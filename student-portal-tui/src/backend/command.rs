//! 远程请求描述

use student_portal_core::StudentId;

/// Update 层产生、Backend 执行的请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// GET 整个集合
    FetchStudents,
    /// POST 新记录（name 已去除首尾空白）
    CreateStudent { name: String },
    /// PUT 指定记录
    UpdateStudent { id: StudentId, name: String },
    /// DELETE 指定记录
    DeleteStudent { id: StudentId },
}
