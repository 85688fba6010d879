// devpath: terminal browser for the DevPath learning roadmaps.
//
// Layering:
// - devpath-types: the catalog records (Track, Technology, Difficulty)
// - devpath-engine: catalog store, search, selection state machine, routes
// - this crate: CLI surface, configuration, logging and presentation
//
// The engine never renders and never sleeps. The TUI renderer owns the clock:
// it feeds `Instant`s into the catalog view and waits on crossterm input with
// a timeout bounded by the next pending timer.

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
