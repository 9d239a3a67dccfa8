//! 学生记录页面

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use student_portal_core::utils::datetime::display_date;
use unicode_width::UnicodeWidthStr;

use crate::model::{App, StudentsFocus, StudentsState};
use crate::view::theme::{colors, Styles};

const FORM_PLACEHOLDER: &str = "Enter student name";
const SEARCH_PLACEHOLDER: &str = "Search students by name...";

/// 渲染学生页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let state = &app.students;
    let content_focused = app.focus.is_content();

    let mut constraints = vec![Constraint::Length(2)]; // 页头
    if state.is_form_visible() {
        constraints.push(Constraint::Length(3)); // 表单
    }
    constraints.push(Constraint::Length(3)); // 搜索框
    constraints.push(Constraint::Min(3)); // 表格

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    render_header(state, frame, chunks[0]);

    let mut next = 1;
    if state.is_form_visible() {
        let focused = content_focused && state.focus == StudentsFocus::Form;
        render_form(state, frame, chunks[next], focused);
        next += 1;
    }

    let search_focused = content_focused && state.focus == StudentsFocus::Search;
    render_search(state, frame, chunks[next], search_focused);

    let table_focused = content_focused && state.focus == StudentsFocus::Table;
    render_table(state, frame, chunks[next + 1], table_focused);
}

/// 页头：说明 + 添加按钮提示 + 加载状态
fn render_header(state: &StudentsState, frame: &mut Frame, area: Rect) {
    let c = colors();
    let mut spans = vec![
        Span::styled(" Manage all student information", Styles::muted()),
        Span::raw("   "),
        Span::styled("[Alt+a]", Styles::hint_key()),
        Span::styled(" Add New Student", Style::default().fg(c.highlight)),
    ];
    if state.loading {
        spans.push(Span::styled("   Loading...", Style::default().fg(c.warning)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// 添加/编辑表单
fn render_form(state: &StudentsState, frame: &mut Frame, area: Rect, focused: bool) {
    let c = colors();
    let (title, submit) = if state.is_editing() {
        ("Edit Student", "Update")
    } else {
        ("Add New Student", "Add")
    };

    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(Styles::title())
        .title_bottom(Line::from(format!(" Enter {submit} · Esc ✕ ")).right_aligned())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    let inner = block.inner(area);
    let text = input_line(&state.input, FORM_PLACEHOLDER, c.fg);
    frame.render_widget(Paragraph::new(text).block(block), area);

    if focused {
        set_cursor(frame, inner, &state.input);
    }
}

/// 搜索框
fn render_search(state: &StudentsState, frame: &mut Frame, area: Rect, focused: bool) {
    let c = colors();
    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    let inner = block.inner(area);
    let text = input_line(&state.search, SEARCH_PLACEHOLDER, c.fg);
    frame.render_widget(Paragraph::new(text).block(block), area);

    if focused {
        set_cursor(frame, inner, &state.search);
    }
}

/// 输入框内容，空时显示占位提示
fn input_line<'a>(value: &'a str, placeholder: &'a str, fg: Color) -> Line<'a> {
    if value.is_empty() {
        Line::from(Span::styled(placeholder, Styles::muted()))
    } else {
        Line::from(Span::styled(value, Style::default().fg(fg)))
    }
}

/// 光标放在输入内容末尾（按显示宽度计算）
fn set_cursor(frame: &mut Frame, inner: Rect, value: &str) {
    let width = u16::try_from(value.width()).unwrap_or(u16::MAX);
    let x = inner
        .x
        .saturating_add(width)
        .min(inner.right().saturating_sub(1));
    frame.set_cursor_position(Position::new(x, inner.y));
}

/// 记录表格
fn render_table(state: &StudentsState, frame: &mut Frame, area: Rect, focused: bool) {
    let c = colors();
    let filtered = state.filtered();

    let block = Block::default()
        .title(format!(" All Students ({}) ", filtered.len()))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    if filtered.is_empty() {
        let message = if state.search.is_empty() {
            "No students added yet. Press Alt+a to add one and get started!"
        } else {
            "No students found matching your search"
        };
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(message, Styles::muted())).centered(),
        ])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(["ID", "Name", "Created At", "Actions"])
        .style(Style::default().fg(c.muted).add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows = filtered.iter().map(|student| {
        let name = if state.is_being_edited(&student.id) {
            Line::from(vec![
                Span::styled("✎ ", Style::default().fg(c.warning)),
                Span::raw(student.name.as_str()),
            ])
        } else {
            Line::from(student.name.as_str())
        };

        Row::new(vec![
            Cell::from(student.id.to_string()),
            Cell::from(name),
            Cell::from(display_date(student.created_at.as_deref())),
            Cell::from(Line::from(vec![
                Span::styled("Edit", Style::default().fg(c.highlight)),
                Span::raw(" / "),
                Span::styled("Delete", Style::default().fg(c.error)),
            ])),
        ])
        .style(Style::default().fg(c.fg))
    });

    let widths = [
        Constraint::Length(8),
        Constraint::Min(16),
        Constraint::Length(12),
        Constraint::Length(13),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut table_state = TableState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}
