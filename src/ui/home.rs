use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};
use crate::app::App;
use crate::catalog::NewsKind;
use crate::ui::colors::{BRIGHT_GREEN, DARK_GREEN, GOLD, HIGHLIGHT_BG, MATRIX_GREEN, SOFT_GREEN, TEXT_DIM, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::ui::utils::inner;

pub fn render_home(f: &mut Frame, app: &mut App, area: Rect) {
    let home = &app.controller.renderer().home;

    let featured_height = (home.featured.len() as u16).saturating_add(2).max(4);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(featured_height)])
        .split(area);

    let mut lines: Vec<Line> = Vec::new();
    for news in &home.news {
        let badge = match news.kind {
            NewsKind::Announcement => Span::styled(" ANNOUNCEMENT ", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
            NewsKind::Update => Span::styled(" UPDATE ", Style::default().fg(SOFT_GREEN).add_modifier(Modifier::BOLD)),
            NewsKind::Recommendation => Span::styled(" PICK ", Style::default().fg(MATRIX_GREEN).add_modifier(Modifier::BOLD)),
        };
        lines.push(Line::from(vec![
            badge,
            Span::styled(news.title.clone(), Style::default().fg(BRIGHT_GREEN).add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {}", news.date), Style::default().fg(TEXT_DIM)),
        ]));
        lines.push(Line::from(Span::styled(news.content.clone(), Style::default().fg(TEXT_SECONDARY))));
        lines.push(Line::from(""));
    }

    let feed = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(DARK_GREEN))
            .title(Span::styled(" latest ", Style::default().fg(SOFT_GREEN).add_modifier(Modifier::BOLD))),
    );
    f.render_widget(feed, chunks[0]);

    let items: Vec<ListItem> = home
        .featured
        .iter()
        .map(|card| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}: ", card.heading), Style::default().fg(TEXT_DIM)),
                Span::styled(card.title.clone(), Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(SOFT_GREEN))
                .title(Span::styled(" featured ", Style::default().fg(MATRIX_GREEN).add_modifier(Modifier::BOLD))),
        )
        .highlight_style(Style::default().bg(HIGHLIGHT_BG).fg(MATRIX_GREEN).add_modifier(Modifier::BOLD))
        .highlight_symbol(" ▎");

    app.area_rows = inner(chunks[1]);
    f.render_stateful_widget(list, chunks[1], &mut app.list_state);
}
