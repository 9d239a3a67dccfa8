//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::event::keymap::HELP_ENTRIES;
use crate::model::{AlertKind, App, Modal};
use crate::view::theme::{colors, Styles};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Alert { kind, message } => render_alert(frame, *kind, message),
        Modal::ConfirmDelete {
            student_name,
            focus,
            ..
        } => render_confirm_delete(frame, student_name, *focus),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗内边距区域
fn inner_rect(area: Rect) -> Rect {
    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

fn modal_block(title: &str, border: Color) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors().bg))
}

/// 渲染提示弹窗
fn render_alert(frame: &mut Frame, kind: AlertKind, message: &str) {
    let c = colors();
    let accent = match kind {
        AlertKind::Success => c.success,
        AlertKind::Warning => c.warning,
        AlertKind::Error => c.error,
    };

    let area = centered_rect(50, 8, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(modal_block(kind.title(), accent), area);

    let lines = vec![
        Line::from(""),
        Line::styled(message, Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled("Press Esc or Enter to close", Styles::muted()),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner_rect(area));
}

/// 渲染删除确认弹窗
fn render_confirm_delete(frame: &mut Frame, student_name: &str, focus: usize) {
    let c = colors();
    let area = centered_rect(44, 9, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(modal_block("Confirm Deletion", c.error), area);

    let cancel_style = if focus == 0 {
        Style::default().fg(c.bg).bg(c.fg)
    } else {
        Style::default().fg(c.fg)
    };

    let confirm_style = if focus == 1 {
        Style::default().fg(c.bg).bg(c.error)
    } else {
        Style::default().fg(c.error)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(
            "  Are you sure you want to delete this student?",
            Style::default().fg(c.fg),
        ),
        Line::styled(
            format!("  \"{student_name}\""),
            Style::default().fg(c.warning),
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(" Cancel ", cancel_style),
            Span::raw("    "),
            Span::styled(" Delete ", confirm_style),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner_rect(area));
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let c = colors();
    let height = u16::try_from(HELP_ENTRIES.len()).unwrap_or(u16::MAX).saturating_add(6);
    let area = centered_rect(58, height, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(modal_block("Help", c.highlight), area);

    let mut lines = vec![
        Line::styled(
            "Shortcuts",
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];
    lines.extend(HELP_ENTRIES.iter().map(|(key, desc)| {
        Line::from(vec![
            Span::styled(format!("  {key:<14}"), Styles::hint_key()),
            Span::styled(*desc, Style::default().fg(c.fg)),
        ])
    }));
    lines.push(Line::from(""));
    lines.push(Line::styled("Press Esc to close the help", Styles::muted()));

    frame.render_widget(Paragraph::new(lines), inner_rect(area));
}
