//! 内容面板更新逻辑

use student_portal_core::services::{validate_name, EMPTY_NAME_MESSAGE};

use super::switch_page;
use crate::backend::Command;
use crate::message::ContentMessage;
use crate::model::{AlertKind, App, Page, StudentsFocus};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) -> Option<Command> {
    match app.current_page {
        Page::Home => update_home(app, msg),
        Page::Students => update_students(app, msg),
    }
}

/// 首页只有一个动作：Get Started
fn update_home(app: &mut App, msg: ContentMessage) -> Option<Command> {
    match msg {
        ContentMessage::Confirm => switch_page(app, Page::Students),
        _ => None,
    }
}

fn update_students(app: &mut App, msg: ContentMessage) -> Option<Command> {
    let focus = app.students.focus;

    match msg {
        ContentMessage::SelectPrevious => app.students.select_previous(),
        ContentMessage::SelectNext => app.students.select_next(),
        ContentMessage::SelectFirst => app.students.select_first(),
        ContentMessage::SelectLast => app.students.select_last(),

        ContentMessage::Confirm | ContentMessage::Edit => handle_edit(app),
        ContentMessage::ToggleForm => app.students.toggle_form(),
        ContentMessage::Delete => handle_delete(app),
        ContentMessage::FocusSearch => app.students.focus_search(),

        ContentMessage::Input(ch) => match focus {
            StudentsFocus::Search => app.students.push_search(ch),
            StudentsFocus::Form => app.students.push_input(ch),
            StudentsFocus::Table => {}
        },

        ContentMessage::Backspace => match focus {
            StudentsFocus::Search => app.students.pop_search(),
            StudentsFocus::Form => app.students.pop_input(),
            StudentsFocus::Table => {}
        },

        ContentMessage::Submit => match focus {
            StudentsFocus::Form => return handle_submit(app),
            StudentsFocus::Search => app.students.focus_table(),
            StudentsFocus::Table => {}
        },

        ContentMessage::Cancel => match focus {
            StudentsFocus::Form => app.students.cancel_edit(),
            StudentsFocus::Search => app.students.focus_table(),
            StudentsFocus::Table => {}
        },
    }
    None
}

/// 编辑选中的记录
fn handle_edit(app: &mut App) {
    let Some(student) = app.students.selected_student().cloned() else {
        app.set_status("No student selected");
        return;
    };
    app.students.start_edit(&student);
    app.clear_status();
}

/// 删除前先弹出确认
fn handle_delete(app: &mut App) {
    let Some(student) = app.students.selected_student() else {
        app.set_status("No student selected");
        return;
    };
    let (id, name) = (student.id.clone(), student.name.clone());
    app.modal.show_confirm_delete(id, name);
}

/// 提交表单：名称为空时只弹出提示，不发请求
fn handle_submit(app: &mut App) -> Option<Command> {
    let Ok(name) = validate_name(&app.students.input) else {
        app.modal.show_alert(AlertKind::Warning, EMPTY_NAME_MESSAGE);
        return None;
    };

    match app.students.editing_id.clone() {
        Some(id) => {
            app.set_status("Updating student...");
            Some(Command::UpdateStudent { id, name })
        }
        None => {
            app.set_status("Adding student...");
            Some(Command::CreateStudent { name })
        }
    }
}
