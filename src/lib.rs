pub mod catalog;
pub mod config;
pub mod controller;
pub mod errors;
pub mod filter;
pub mod player;
pub mod render;
pub mod scroll;
pub mod state;
pub mod storage;
pub mod watch_later;

#[cfg(not(target_arch = "wasm32"))]
pub mod app;
#[cfg(not(target_arch = "wasm32"))]
pub mod handlers;
#[cfg(not(target_arch = "wasm32"))]
pub mod ui;

// Wasm module
#[cfg(target_arch = "wasm32")]
pub mod wasm_client;
