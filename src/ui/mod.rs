//! Terminal UI for playing Connect Four: board view, name editor and help
//! overlay on top of the game engine.

mod app;
mod game_view;

pub use app::{App, Mode, NameEditor};
