//! 异步请求结果

use student_portal_core::{CoreResult, Student};

/// 后台任务完成后回送给主循环的事件
#[derive(Debug, Clone)]
pub enum BackendEvent {
    /// 列表拉取完成
    StudentsLoaded(CoreResult<Vec<Student>>),
    /// 添加完成
    StudentCreated(CoreResult<()>),
    /// 更新完成
    StudentUpdated(CoreResult<()>),
    /// 删除完成
    StudentDeleted(CoreResult<()>),
}
