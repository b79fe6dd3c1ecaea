use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use crate::app::{App, InputMode};
use crate::state::Section;
use crate::ui::colors::GOLD;

pub fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(Color::White);
    let screen = app.screen();

    let mut spans = vec![
        Span::styled(" q ", key_style),
        Span::styled("Quit  ", label_style),
        Span::styled(" Esc/Bksp ", key_style),
        Span::styled("Back  ", label_style),
    ];

    if app.input_mode == InputMode::Editing {
        spans.push(Span::styled(" Esc/Enter ", key_style));
        spans.push(Span::styled("Stop Editing", label_style));
    } else if screen.detail.is_some() {
        spans.push(Span::styled(" Enter ", key_style));
        spans.push(Span::styled("Play  ", label_style));
        spans.push(Span::styled(" w ", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)));
        spans.push(Span::styled("Watch Later", Style::default().fg(GOLD)));
    } else {
        spans.push(Span::styled(" 1-4 ", key_style));
        spans.push(Span::styled("Sections  ", label_style));
        spans.push(Span::styled(" \u{2191}\u{2193} ", key_style));
        spans.push(Span::styled("Move  ", label_style));
        if screen.section.content_type().is_some() {
            spans.push(Span::styled(" [ ] ", key_style));
            spans.push(Span::styled("Genre  ", label_style));
            spans.push(Span::styled(" / ", key_style));
            spans.push(Span::styled("Search  ", label_style));
        }
        if screen.section == Section::WatchLater {
            spans.push(Span::styled(" d ", key_style));
            spans.push(Span::styled("Remove  ", label_style));
        }
        spans.push(Span::styled(" h ", key_style));
        spans.push(Span::styled("Help", label_style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Left), area);
}
