pub mod route;
pub mod search;
pub mod track;
pub mod tui;
