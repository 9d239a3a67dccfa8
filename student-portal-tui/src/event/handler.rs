//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::{App, Modal, Page, StudentsFocus};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变时下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if let Some(ref modal) = app.modal.active {
        return handle_modal_keys(key, modal);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }

    if app.focus.is_navigation() {
        return handle_navigation_keys(key);
    }

    match app.current_page {
        Page::Home => handle_home_keys(key),
        Page::Students => handle_students_keys(key, app.students.focus),
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::HELP_SHORT.matches(&key) {
        return AppMessage::ShowHelp;
    }

    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }
        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 首页：Enter 即 Get Started
fn handle_home_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::HELP_SHORT.matches(&key) {
        return AppMessage::ShowHelp;
    }

    match key.code {
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

/// 学生页面
fn handle_students_keys(key: KeyEvent, focus: StudentsFocus) -> AppMessage {
    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::Content(ContentMessage::ToggleForm);
    }
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Edit);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Content(ContentMessage::Delete);
    }

    match focus {
        StudentsFocus::Search | StudentsFocus::Form => handle_text_input_keys(key),
        StudentsFocus::Table => handle_table_keys(key),
    }
}

/// 搜索框或表单获得焦点时的文本输入
fn handle_text_input_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Enter => AppMessage::Content(ContentMessage::Submit),
        KeyCode::Esc => AppMessage::Content(ContentMessage::Cancel),
        KeyCode::Backspace => AppMessage::Content(ContentMessage::Backspace),
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Content(ContentMessage::Input(ch))
        }
        _ => AppMessage::Noop,
    }
}

/// 记录表格
fn handle_table_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::HELP_SHORT.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::SEARCH.matches(&key) {
        return AppMessage::Content(ContentMessage::FocusSearch);
    }

    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        // Enter: 编辑选中项
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, modal: &Modal) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    match modal {
        Modal::ConfirmDelete { .. } => handle_confirm_delete_keys(key),
        Modal::Alert { .. } | Modal::Help => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            _ => AppMessage::Noop,
        },
    }
}

/// 处理确认删除弹窗的按键
fn handle_confirm_delete_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // Tab 或 ← →: 切换焦点
        KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
            AppMessage::Modal(ModalMessage::ToggleDeleteFocus)
        }
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        KeyCode::Char('y' | 'Y') => AppMessage::Modal(ModalMessage::Accept),
        KeyCode::Char('n' | 'N') => AppMessage::Modal(ModalMessage::Close),
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;
    use student_portal_core::StudentId;

    use super::*;
    use crate::model::FocusPanel;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn key(code: KeyCode) -> Event {
        press(code, KeyModifiers::NONE)
    }

    fn students_app(focus: StudentsFocus) -> App {
        let mut app = App::new();
        app.focus = FocusPanel::Content;
        app.current_page = Page::Students;
        app.students.focus = focus;
        app
    }

    #[test]
    fn release_events_are_ignored() {
        let app = App::new();
        let event = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(matches!(handle_event(event, &app), AppMessage::Noop));
    }

    #[test]
    fn text_input_takes_shortcut_characters() {
        let app = students_app(StudentsFocus::Form);

        for ch in ['?', 'j', 'k', '/'] {
            assert!(matches!(
                handle_event(key(KeyCode::Char(ch)), &app),
                AppMessage::Content(ContentMessage::Input(c)) if c == ch
            ));
        }
        assert!(matches!(
            handle_event(press(KeyCode::Char('A'), KeyModifiers::SHIFT), &app),
            AppMessage::Content(ContentMessage::Input('A'))
        ));
    }

    #[test]
    fn text_input_enter_and_esc() {
        let app = students_app(StudentsFocus::Search);
        assert!(matches!(
            handle_event(key(KeyCode::Enter), &app),
            AppMessage::Content(ContentMessage::Submit)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Esc), &app),
            AppMessage::Content(ContentMessage::Cancel)
        ));
    }

    #[test]
    fn table_keys() {
        let app = students_app(StudentsFocus::Table);
        assert!(matches!(
            handle_event(key(KeyCode::Char('/')), &app),
            AppMessage::Content(ContentMessage::FocusSearch)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Char('?')), &app),
            AppMessage::ShowHelp
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('d'), KeyModifiers::ALT), &app),
            AppMessage::Content(ContentMessage::Delete)
        ));
    }

    #[test]
    fn global_keys_work_while_typing() {
        let app = students_app(StudentsFocus::Form);
        assert!(matches!(
            handle_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL), &app),
            AppMessage::Quit
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Tab), &app),
            AppMessage::ToggleFocus
        ));
    }

    #[test]
    fn modal_captures_keys() {
        let mut app = students_app(StudentsFocus::Table);
        app.modal
            .show_confirm_delete(StudentId::Number(1), "Alice".to_string());

        assert!(matches!(
            handle_event(key(KeyCode::Char('y')), &app),
            AppMessage::Modal(ModalMessage::Accept)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Tab), &app),
            AppMessage::Modal(ModalMessage::ToggleDeleteFocus)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Esc), &app),
            AppMessage::Modal(ModalMessage::Close)
        ));
    }
}
