use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};
use crate::app::App;
use crate::ui::colors::{BRIGHT_GREEN, DARK_GREEN, GOLD, HIGHLIGHT_BG, MATRIX_GREEN, SOFT_GREEN, TEXT_DIM, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::ui::utils::inner;

pub fn render_detail(f: &mut Frame, app: &mut App, area: Rect) {
    let Some(detail) = app.controller.renderer().detail.as_ref() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let mut lines = vec![
        Line::from(Span::styled(
            detail.title.to_uppercase(),
            Style::default().fg(BRIGHT_GREEN).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(detail.genres.join(" · "), Style::default().fg(SOFT_GREEN))),
        Line::from(""),
        Line::from(Span::styled(detail.description.clone(), Style::default().fg(TEXT_PRIMARY))),
        Line::from(""),
    ];
    if detail.saved {
        lines.push(Line::from(Span::styled("★ In your watch later list", Style::default().fg(GOLD))));
    } else {
        lines.push(Line::from(Span::styled("Press w to watch later", Style::default().fg(TEXT_DIM))));
    }
    if !detail.image.is_empty() {
        lines.push(Line::from(Span::styled(detail.image.clone(), Style::default().fg(TEXT_DIM))));
    }

    let info = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(DARK_GREEN)),
        );
    f.render_widget(info, chunks[0]);

    let items: Vec<ListItem> = detail
        .actions
        .iter()
        .map(|action| {
            ListItem::new(Line::from(vec![
                Span::styled("▶ ", Style::default().fg(MATRIX_GREEN)),
                Span::styled(action.label.clone(), Style::default().fg(TEXT_SECONDARY)),
            ]))
        })
        .collect();

    let title = if detail.actions.len() == 1 { " play " } else { " episodes " };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(SOFT_GREEN))
                .title(Span::styled(title, Style::default().fg(SOFT_GREEN).add_modifier(Modifier::BOLD))),
        )
        .highlight_style(Style::default().bg(HIGHLIGHT_BG).fg(MATRIX_GREEN).add_modifier(Modifier::BOLD))
        .highlight_symbol(" ▎");

    app.area_rows = inner(chunks[1]);
    f.render_stateful_widget(list, chunks[1], &mut app.list_state);
}
