use crate::app::{App, InputMode};
use crate::state::Section;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use tui_input::backend::crossterm::EventHandler;

#[derive(Debug, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

pub fn handle_key_event(app: &mut App, key: KeyEvent) -> InputResult {
    // Only process key press events, not release (Windows sends both)
    if key.kind != KeyEventKind::Press {
        return InputResult::Continue;
    }

    if app.input_mode == InputMode::Editing {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => app.stop_editing(),
            _ => {
                if app.search_input.handle_event(&Event::Key(key)).is_some() {
                    app.apply_search();
                }
            }
        }
        return InputResult::Continue;
    }

    if app.show_help {
        app.show_help = false;
        return InputResult::Continue;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.quit();
            return InputResult::Quit;
        }
        KeyCode::Char('h') | KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('1') => app.activate(Section::Home),
        KeyCode::Char('2') => app.activate(Section::Series),
        KeyCode::Char('3') => app.activate(Section::Movies),
        KeyCode::Char('4') => app.activate(Section::WatchLater),
        KeyCode::Char('j') | KeyCode::Down => app.next_row(),
        KeyCode::Char('k') | KeyCode::Up => app.previous_row(),
        KeyCode::Char(']') | KeyCode::Right => app.cycle_genre(true),
        KeyCode::Char('[') | KeyCode::Left => app.cycle_genre(false),
        KeyCode::Char('/') | KeyCode::Char('f') => app.start_search(),
        KeyCode::Char('w') => app.add_selected_to_watch_later(),
        KeyCode::Char('d') | KeyCode::Delete => app.remove_selected_from_watch_later(),
        KeyCode::Enter => app.activate_selected(),
        KeyCode::Esc | KeyCode::Backspace => app.back(),
        _ => {}
    }

    InputResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Store;
    use crate::catalog::{Catalog, ContentType};
    use crate::controller::Controller;
    use crate::render::Screen;
    use crate::storage::MemoryStore;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) -> InputResult {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app() -> App {
        let store: Store = Box::new(MemoryStore::new());
        let mut app = App::new(Controller::new(Catalog::builtin(), store, Screen::new()));
        app.resume();
        app
    }

    #[test]
    fn typing_filters_live() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.input_mode, InputMode::Editing);
        for c in "NAME".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        let screen = app.screen();
        assert_eq!(screen.lists.movie.len(), 1);
        assert_eq!(screen.lists.movie[0].title, "Your Name(sub)");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn enter_then_escape_round_trips() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char(']'));
        let genre = app.screen().active_genre(ContentType::Series).map(str::to_string);

        press(&mut app, KeyCode::Enter);
        assert!(app.screen().detail.is_some());
        assert!(!app.screen().nav_visible);

        press(&mut app, KeyCode::Esc);
        assert!(app.screen().detail.is_none());
        assert_eq!(app.screen().section, Section::Series);
        assert_eq!(app.screen().active_genre(ContentType::Series).map(str::to_string), genre);
    }

    #[test]
    fn q_quits() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Char('q')), InputResult::Quit);
        assert!(app.should_quit);
    }
}
