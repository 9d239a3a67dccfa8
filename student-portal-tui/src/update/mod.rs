//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//! 需要访问服务器时，Update 不直接发请求，而是返回 Some(Command)，
//! 由主循环交给 Backend 执行。请求结果以 AppMessage::Backend 的形式
//! 再次进入这里（remote.rs）。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 导航子消息处理
//!         mod content;            // 内容面板子消息处理（表格、搜索、表单）
//!         mod modal;              // 弹窗子消息处理
//!         mod remote;             // 请求结果处理
//!
//!         pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {...}
//!
//!
//! 页面切换统一走 switch_page()：
//!     只有真正切换到 Students 页面时才拉取列表，
//!     已在 Students 页面时重复确认不会重复请求。
//!

mod content;
mod modal;
mod navigation;
mod remote;

use crate::backend::Command;
use crate::message::AppMessage;
use crate::model::{App, Page};

/// 处理应用消息，更新状态，返回需要执行的请求
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
            None
        }

        AppMessage::Navigation(nav_msg) => navigation::update(app, nav_msg),

        AppMessage::Content(content_msg) => content::update(app, content_msg),

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::Backend(event) => remote::update(app, event),

        AppMessage::Refresh => {
            if app.current_page == Page::Students {
                app.students.loading = true;
                app.set_status("Refreshing...");
                Some(Command::FetchStudents)
            } else {
                None
            }
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
            None
        }

        AppMessage::Noop => None,
    }
}

/// 切换页面；进入 Students 页面时触发一次列表拉取
fn switch_page(app: &mut App, page: Page) -> Option<Command> {
    if app.current_page == page {
        return None;
    }

    log::debug!("Switching page to {}", page.title());
    app.current_page = page;
    app.navigation.select_page(page);
    app.clear_status(); // 切换页面时清除状态消息

    match page {
        Page::Students => {
            app.students.loading = true;
            Some(Command::FetchStudents)
        }
        Page::Home => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{ContentMessage, NavigationMessage};
    use crate::model::FocusPanel;

    #[test]
    fn entering_students_page_fetches_once() {
        let mut app = App::new();

        app.navigation.select_next();
        let cmd = update(&mut app, AppMessage::Navigation(NavigationMessage::Confirm));
        assert_eq!(cmd, Some(Command::FetchStudents));
        assert_eq!(app.current_page, Page::Students);
        assert!(app.students.loading);

        // 已在 Students 页面，再次确认不重复请求
        let again = update(&mut app, AppMessage::Navigation(NavigationMessage::Confirm));
        assert_eq!(again, None);
    }

    #[test]
    fn get_started_goes_to_students() {
        let mut app = App::new();
        app.focus = FocusPanel::Content;

        let cmd = update(&mut app, AppMessage::Content(ContentMessage::Confirm));

        assert_eq!(cmd, Some(Command::FetchStudents));
        assert_eq!(app.current_page, Page::Students);
        assert_eq!(app.navigation.current_id().map(|id| id.page()), Some(Page::Students));
    }

    #[test]
    fn returning_home_issues_no_request() {
        let mut app = App::new();
        switch_page(&mut app, Page::Students);

        app.navigation.select_first();
        let cmd = update(&mut app, AppMessage::Navigation(NavigationMessage::Confirm));

        assert_eq!(cmd, None);
        assert_eq!(app.current_page, Page::Home);
    }

    #[test]
    fn refresh_only_on_students_page() {
        let mut app = App::new();
        assert_eq!(update(&mut app, AppMessage::Refresh), None);

        switch_page(&mut app, Page::Students);
        assert_eq!(update(&mut app, AppMessage::Refresh), Some(Command::FetchStudents));
    }

    #[test]
    fn toggle_focus_is_blocked_by_modal() {
        let mut app = App::new();
        app.modal.show_help();

        update(&mut app, AppMessage::ToggleFocus);
        assert!(app.focus.is_navigation());

        app.modal.close();
        update(&mut app, AppMessage::ToggleFocus);
        assert!(app.focus.is_content());
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = App::new();
        assert_eq!(update(&mut app, AppMessage::Quit), None);
        assert!(app.should_quit);
    }
}
