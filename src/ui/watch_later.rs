use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};
use crate::app::App;
use crate::ui::colors::{DARK_GREEN, GOLD, HIGHLIGHT_BG, MATRIX_GREEN, SOFT_GREEN, TEXT_DIM, TEXT_PRIMARY};
use crate::ui::utils::inner;

pub fn render_watch_later(f: &mut Frame, app: &mut App, area: Rect) {
    let cards = &app.controller.renderer().watch_later;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(DARK_GREEN))
        .title(Span::styled(
            format!(" watch later ({}) ", cards.len()),
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        ));

    if cards.is_empty() {
        app.area_rows = Rect::default();
        let p = Paragraph::new("\n  Your watch later list is empty.\n  Open a title and press w to save it.")
            .style(Style::default().fg(TEXT_DIM))
            .block(block);
        f.render_widget(p, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let items: Vec<ListItem> = cards
        .iter()
        .map(|card| {
            ListItem::new(Line::from(vec![
                Span::styled(card.title.clone(), Style::default().fg(TEXT_PRIMARY)),
                Span::styled(format!("  [{}]", card.content_type.display_name()), Style::default().fg(TEXT_DIM)),
            ]))
        })
        .collect();

    let description = app
        .list_state
        .selected()
        .and_then(|i| cards.get(i))
        .map(|card| card.description.clone())
        .unwrap_or_default();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(HIGHLIGHT_BG).fg(MATRIX_GREEN).add_modifier(Modifier::BOLD))
        .highlight_symbol(" ▎");

    let about = Paragraph::new(description)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(SOFT_GREEN))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(DARK_GREEN)),
        );

    app.area_rows = inner(chunks[0]);
    f.render_stateful_widget(list, chunks[0], &mut app.list_state);
    f.render_widget(about, chunks[1]);
}
