//! 首页视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 功能卡片
const FEATURE_CARDS: [(&str, &str); 3] = [
    (
        "Add Students",
        "Easily add new student records to your database with a simple form",
    ),
    (
        "Edit Records",
        "Update student information quickly and maintain accurate records",
    ),
    (
        "View All Students",
        "Browse through all student records with search and filter options",
    ),
];

/// 系统特性：(图标, 名称)
const SYSTEM_FEATURES: [(&str, &str); 4] = [
    ("✓", "Easy to Use"),
    ("⚡", "Fast Performance"),
    ("🔒", "Secure Data"),
    ("📱", "Responsive Design"),
];

/// 渲染首页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // 欢迎区域
            Constraint::Length(5), // 功能卡片
            Constraint::Min(1),    // 系统特性
        ])
        .split(area);

    let button_style = if app.focus.is_content() {
        Styles::selected()
    } else {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    };

    let welcome = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Student Management System",
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Manage your student records efficiently and effectively",
            Styles::muted(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(" Get Started → ", button_style),
        ]),
    ];
    frame.render_widget(Paragraph::new(welcome), layout[0]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(layout[1]);

    for ((title, desc), card_area) in FEATURE_CARDS.iter().zip(cards.iter()) {
        let block = Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_style(Styles::border(false));

        let content = Paragraph::new(Line::from(Span::styled(*desc, Style::default().fg(c.fg))))
            .wrap(Wrap { trim: true })
            .block(block);

        frame.render_widget(content, *card_area);
    }

    let mut features = vec![
        Line::from(""),
        Line::from(Span::styled("  System Features", Styles::title())),
        Line::from(""),
    ];
    features.extend(SYSTEM_FEATURES.iter().map(|(icon, name)| {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(*icon, Style::default().fg(c.success)),
            Span::raw("  "),
            Span::styled(*name, Style::default().fg(c.fg)),
        ])
    }));
    frame.render_widget(Paragraph::new(features), layout[2]);
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    fn rendered_text(width: u16, height: u16) -> String {
        let app = App::new();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| render(&app, frame, frame.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn home_shows_welcome_and_feature_cards() {
        let text = rendered_text(240, 30);

        assert!(text.contains("Student Management System"));
        assert!(text.contains("Manage your student records efficiently and effectively"));
        assert!(text.contains("Get Started"));
        for (title, desc) in FEATURE_CARDS {
            assert!(text.contains(title), "missing card title {title}");
            assert!(text.contains(desc), "missing card text {desc}");
        }
    }

    #[test]
    fn home_lists_system_features() {
        let text = rendered_text(240, 30);

        assert!(text.contains("System Features"));
        for name in ["Easy to Use", "Fast Performance", "Secure Data", "Responsive Design"] {
            assert!(text.contains(name), "missing feature {name}");
        }
    }
}
