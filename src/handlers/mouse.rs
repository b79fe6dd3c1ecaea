use crate::app::App;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let x = mouse.column;
            let y = mouse.row;
            let area = app.area_rows;
            if x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height {
                let row = (y - area.y) as usize;
                app.select_row(row);
            }
        }
        MouseEventKind::ScrollDown => app.next_row(),
        MouseEventKind::ScrollUp => app.previous_row(),
        _ => {}
    }
}
