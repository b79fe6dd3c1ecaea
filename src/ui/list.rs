use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};
use crate::app::App;
use crate::catalog::ContentType;
use crate::ui::colors::{DARK_GREEN, HIGHLIGHT_BG, MATRIX_GREEN, SOFT_GREEN, TEXT_DIM, TEXT_PRIMARY};
use crate::ui::utils::{inner, truncate};

/// Genre bar over the card list of one content type.
pub fn render_list_view(f: &mut Frame, app: &mut App, area: Rect, content_type: ContentType) {
    let screen = app.controller.renderer();
    let show_genres = *screen.genre_bar_visible.get(content_type);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if show_genres { 1 } else { 0 }),
            Constraint::Min(0),
        ])
        .split(area);

    if show_genres {
        let mut spans = vec![Span::styled(" GENRE ", Style::default().fg(TEXT_DIM))];
        for button in screen.genre_bars.get(content_type) {
            let style = if button.active {
                Style::default().bg(MATRIX_GREEN).fg(Color::Black).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(SOFT_GREEN)
            };
            spans.push(Span::styled(format!(" {} ", button.label), style));
            spans.push(Span::raw(" "));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);
    }

    let cards = screen.lists.get(content_type);
    let width = chunks[1].width.saturating_sub(6) as usize;
    let items: Vec<ListItem> = cards
        .iter()
        .map(|card| {
            ListItem::new(Line::from(vec![
                Span::styled("◆ ", Style::default().fg(SOFT_GREEN)),
                Span::styled(truncate(&card.title, width), Style::default().fg(TEXT_PRIMARY)),
            ]))
        })
        .collect();

    let title = format!(" {} ({}) ", content_type.display_name().to_lowercase(), cards.len());
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(DARK_GREEN))
                .title(Span::styled(title, Style::default().fg(SOFT_GREEN).add_modifier(Modifier::BOLD))),
        )
        .highlight_style(Style::default().bg(HIGHLIGHT_BG).fg(MATRIX_GREEN).add_modifier(Modifier::BOLD))
        .highlight_symbol(" ▎");

    app.area_rows = inner(chunks[1]);
    f.render_stateful_widget(list, chunks[1], &mut app.list_state);

    if app.controller.renderer().lists.get(content_type).is_empty() {
        let empty = Paragraph::new("  Nothing matches.").style(Style::default().fg(TEXT_DIM));
        f.render_widget(empty, inner(chunks[1]));
    }
}
