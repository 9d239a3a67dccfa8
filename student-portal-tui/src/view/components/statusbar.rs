//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FocusPanel, Page, StudentsFocus};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![("Tab", "Switch Panels")];

    match app.focus {
        FocusPanel::Navigation => {
            hints.push(("↑↓", "Navigation"));
            hints.push(("Enter", "Open"));
        }
        FocusPanel::Content => match app.current_page {
            Page::Home => hints.push(("Enter", "Get Started")),
            Page::Students => match app.students.focus {
                StudentsFocus::Table => {
                    hints.push(("↑↓", "Select"));
                    hints.push(("Enter", "Edit"));
                    hints.push(("Alt+a", "Add"));
                    hints.push(("Alt+d", "Delete"));
                    hints.push(("/", "Search"));
                }
                StudentsFocus::Search => {
                    hints.push(("Enter/Esc", "Done"));
                }
                StudentsFocus::Form => {
                    let submit = if app.students.is_editing() { "Update" } else { "Add" };
                    hints.push(("Enter", submit));
                    hints.push(("Esc", "Cancel"));
                }
            },
        },
    }

    hints.push(("?", "Help"));
    hints.push(("Alt+q", "Quit"));
    hints
}
