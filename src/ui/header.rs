use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use crate::app::{App, InputMode};
use crate::state::Section;
use crate::ui::colors::{BRIGHT_GREEN, DARK_GREEN, MATRIX_GREEN, TEXT_DIM};

pub fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let screen = app.screen();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    if let Some(detail) = &screen.detail {
        let line = Line::from(vec![
            Span::styled(" // ", Style::default().fg(DARK_GREEN)),
            Span::styled(
                detail.content_type.display_name().to_uppercase(),
                Style::default().fg(MATRIX_GREEN).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" / ", Style::default().fg(Color::LightBlue)),
            Span::styled(detail.title.clone(), Style::default().fg(BRIGHT_GREEN)),
        ]);
        f.render_widget(Paragraph::new(line), chunks[0]);
    } else if screen.nav_visible {
        let style_active = Style::default().bg(MATRIX_GREEN).fg(Color::Black).add_modifier(Modifier::BOLD);
        let separator = Span::styled(" / ", Style::default().fg(Color::LightBlue));

        let mut spans = vec![Span::styled(
            " // CATALOG",
            Style::default().fg(MATRIX_GREEN).add_modifier(Modifier::BOLD),
        )];
        for (i, section) in Section::all().iter().enumerate() {
            spans.push(separator.clone());
            let label = format!("{} {}", i + 1, section.display_name().to_uppercase());
            spans.push(if *section == screen.section {
                Span::styled(format!(" [{}] ", label), style_active)
            } else {
                Span::styled(format!(" {} ", label), Style::default().fg(MATRIX_GREEN))
            });
        }
        f.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);
    }

    let search_ct = screen
        .section
        .content_type()
        .filter(|ct| *screen.search_visible.get(*ct));

    let body = match search_ct {
        Some(ct) => {
            let editing = app.input_mode == InputMode::Editing;
            let text = if editing {
                format!(" SEARCH: {}_", app.search_input.value())
            } else {
                format!(" SEARCH: {}", screen.search_text.get(ct))
            };
            let style = if editing {
                Style::default().fg(MATRIX_GREEN).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(TEXT_DIM)
            };
            Paragraph::new(text).style(style)
        }
        None => Paragraph::new(""),
    };
    f.render_widget(
        body.block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(DARK_GREEN)),
        ),
        chunks[1],
    );
}
