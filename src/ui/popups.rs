use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use crate::render::{Notice, NoticeLevel};
use crate::ui::colors::{BRIGHT_GREEN, DARK_GREEN, ERROR_RED, MATRIX_GREEN, TEXT_DIM};
use crate::ui::utils::centered_rect;

pub fn render_help_popup(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" // KEYS ")
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(DARK_GREEN));

    let area = centered_rect(60, 60, area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([Constraint::Min(0)])
        .split(area);

    let shortcuts = [
        "Keyboard Shortcuts:",
        "",
        "  1-4       - Home / Series / Movies / Watch Later",
        "  j / k     - Navigate Down / Up",
        "  [ / ]     - Previous / Next Genre",
        "  / or f    - Search",
        "  Enter     - Open / Play",
        "  w         - Add to Watch Later",
        "  d / Del   - Remove from Watch Later",
        "  Esc/Bksp  - Back",
        "  q         - Quit",
    ];
    let shortcuts_p = Paragraph::new(shortcuts.join("\n")).style(Style::default().fg(Color::White));
    f.render_widget(shortcuts_p, chunks[0]);
}

/// Latest notice as a one-line toast at the bottom of `area`.
pub fn render_notice(f: &mut Frame, notice: &Notice, area: Rect) {
    if area.height < 2 {
        return;
    }
    let toast = Rect {
        x: area.x,
        y: area.y + area.height - 2,
        width: area.width,
        height: 1,
    };
    let (label, color) = match notice.level {
        NoticeLevel::Info => (" INFO ", MATRIX_GREEN),
        NoticeLevel::Error => (" ERROR ", ERROR_RED),
    };
    let line = Line::from(vec![
        Span::styled(label, Style::default().bg(color).fg(Color::Black).add_modifier(Modifier::BOLD)),
        Span::styled(format!(" {}", notice.message), Style::default().fg(color)),
        Span::styled("  (Esc)", Style::default().fg(TEXT_DIM)),
    ]);
    f.render_widget(Clear, toast);
    f.render_widget(Paragraph::new(line), toast);
}

pub fn render_player_popup(f: &mut Frame, area: Rect, link: &str, error: Option<&str>) {
    let block = Block::default()
        .title(Span::styled(" // NOW_PLAYING ", Style::default().fg(BRIGHT_GREEN).add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(MATRIX_GREEN));

    let area = centered_rect(70, 40, area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let body = match error {
        Some(error) => Paragraph::new(error.to_string()).style(Style::default().fg(ERROR_RED)),
        None => Paragraph::new(format!("Opened in your browser:\n\n{}", link)).style(Style::default().fg(Color::White)),
    };
    f.render_widget(body.wrap(Wrap { trim: true }).alignment(Alignment::Center), layout[0]);

    let dismiss_text = Paragraph::new("Press [Esc] to close the player")
        .style(Style::default().fg(DARK_GREEN))
        .alignment(Alignment::Center);
    f.render_widget(dismiss_text, layout[1]);
}
