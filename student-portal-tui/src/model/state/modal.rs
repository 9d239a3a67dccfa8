//! 弹窗/对话框状态

use std::collections::VecDeque;

use student_portal_core::StudentId;

/// 提示弹窗类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Warning,
    Error,
}

impl AlertKind {
    pub fn title(self) -> &'static str {
        match self {
            AlertKind::Success => "Success",
            AlertKind::Warning => "Notice",
            AlertKind::Error => "Error",
        }
    }
}

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 阻塞式提示，按 Enter / Esc 关闭
    Alert { kind: AlertKind, message: String },

    /// 删除确认（focus: 0 = Cancel, 1 = Delete）
    ConfirmDelete {
        student_id: StudentId,
        student_name: String,
        focus: usize,
    },

    /// 快捷键帮助
    Help,
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗（None 表示无弹窗）
    pub active: Option<Modal>,

    /// 排队等待的提示，当前弹窗关闭后依次显示
    pending: VecDeque<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 关闭当前弹窗，队列中的下一个提示随即显示
    pub fn close(&mut self) {
        self.active = self.pending.pop_front();
    }

    /// 显示提示；已有弹窗时排到队尾，不覆盖
    pub fn show_alert(&mut self, kind: AlertKind, message: impl Into<String>) {
        let alert = Modal::Alert {
            kind,
            message: message.into(),
        };
        if self.active.is_some() {
            self.pending.push_back(alert);
        } else {
            self.active = Some(alert);
        }
    }

    /// 显示删除确认，默认焦点在 Cancel
    pub fn show_confirm_delete(&mut self, student_id: StudentId, student_name: String) {
        self.active = Some(Modal::ConfirmDelete {
            student_id,
            student_name,
            focus: 0,
        });
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(kind: AlertKind, message: &str) -> Option<Modal> {
        Some(Modal::Alert {
            kind,
            message: message.to_string(),
        })
    }

    #[test]
    fn alerts_queue_in_arrival_order() {
        let mut modal = ModalState::new();
        modal.show_alert(AlertKind::Error, "Failed to add student");
        modal.show_alert(AlertKind::Success, "Student deleted successfully!");

        assert_eq!(modal.active, alert(AlertKind::Error, "Failed to add student"));

        modal.close();
        assert_eq!(
            modal.active,
            alert(AlertKind::Success, "Student deleted successfully!")
        );

        modal.close();
        assert!(!modal.is_open());
    }

    #[test]
    fn alert_waits_behind_delete_confirmation() {
        let mut modal = ModalState::new();
        modal.show_confirm_delete(StudentId::Number(1), "Alice".to_string());
        modal.show_alert(AlertKind::Success, "Student added successfully!");

        assert!(matches!(modal.active, Some(Modal::ConfirmDelete { .. })));

        modal.close();
        assert_eq!(
            modal.active,
            alert(AlertKind::Success, "Student added successfully!")
        );
    }

    #[test]
    fn alert_waits_behind_help() {
        let mut modal = ModalState::new();
        modal.show_help();
        modal.show_alert(AlertKind::Warning, "Please enter a name");

        assert_eq!(modal.active, Some(Modal::Help));
        modal.close();
        assert_eq!(modal.active, alert(AlertKind::Warning, "Please enter a name"));
    }
}
