//! Terminal UI: renders the session and turns key presses into session
//! requests.

mod app;
mod game_view;

pub use app::App;
