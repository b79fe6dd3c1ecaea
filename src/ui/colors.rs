use ratatui::style::Color;

pub const MATRIX_GREEN: Color = Color::Rgb(0, 255, 65);
pub const SOFT_GREEN: Color = Color::Rgb(80, 200, 120);
pub const DARK_GREEN: Color = Color::Rgb(0, 100, 0);
pub const BRIGHT_GREEN: Color = Color::Rgb(150, 255, 150);
pub const HIGHLIGHT_BG: Color = Color::Rgb(0, 45, 15);
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Rgb(180, 180, 180);
pub const TEXT_DIM: Color = Color::Rgb(110, 110, 110);
pub const ERROR_RED: Color = Color::Rgb(255, 90, 90);
pub const GOLD: Color = Color::Rgb(255, 200, 80);
