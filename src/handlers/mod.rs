pub mod input;
pub mod mouse;
