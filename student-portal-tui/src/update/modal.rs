//! 弹窗更新逻辑

use crate::backend::Command;
use crate::message::ModalMessage;
use crate::model::{App, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) -> Option<Command> {
    match app.modal.active {
        Some(Modal::ConfirmDelete { .. }) => handle_confirm_delete(app, msg),
        Some(Modal::Alert { .. } | Modal::Help) => {
            handle_simple_modal(app, msg);
            None
        }
        None => None,
    }
}

/// 删除确认：只有明确确认才发出删除请求
fn handle_confirm_delete(app: &mut App, msg: ModalMessage) -> Option<Command> {
    let Some(Modal::ConfirmDelete {
        ref student_id,
        ref mut focus,
        ..
    }) = app.modal.active
    else {
        return None;
    };

    match msg {
        ModalMessage::ToggleDeleteFocus => {
            *focus = 1 - *focus;
            None
        }
        ModalMessage::Confirm if *focus == 0 => {
            app.modal.close();
            None
        }
        ModalMessage::Confirm | ModalMessage::Accept => {
            let id = student_id.clone();
            app.modal.close();
            app.set_status("Deleting student...");
            Some(Command::DeleteStudent { id })
        }
        ModalMessage::Close => {
            app.modal.close();
            None
        }
    }
}

/// 提示和帮助弹窗：任何确认或关闭都直接关闭
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close | ModalMessage::Confirm | ModalMessage::Accept => app.modal.close(),
        ModalMessage::ToggleDeleteFocus => {}
    }
}
