pub mod colors;
pub mod utils;
pub mod header;
pub mod footer;
pub mod list;
pub mod detail;
pub mod watch_later;
pub mod home;
pub mod popups;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;
use crate::state::Section;

pub fn ui(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Footer
        ])
        .split(area);

    header::render_header(f, app, chunks[0]);
    footer::render_footer(f, app, chunks[2]);

    let content_area = chunks[1];
    let detail_open = app.screen().detail.is_some();
    if detail_open {
        detail::render_detail(f, app, content_area);
    } else {
        match app.screen().section {
            Section::Home => home::render_home(f, app, content_area),
            Section::Series | Section::Movies => {
                if let Some(ct) = app.screen().section.content_type() {
                    list::render_list_view(f, app, content_area, ct);
                }
            }
            Section::WatchLater => watch_later::render_watch_later(f, app, content_area),
        }
    }

    // Overlays
    if let Some(notice) = app.screen().latest_notice() {
        popups::render_notice(f, notice, content_area);
    }

    if let Some(link) = &app.screen().player {
        popups::render_player_popup(f, area, link, app.player_error.as_deref());
    }

    if app.show_help {
        popups::render_help_popup(f, area);
    }
}
