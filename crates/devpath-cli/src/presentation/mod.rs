//! # Presentation Layer
//!
//! This module implements the **User Interface** logic for the CLI.
//! It is designed using an adaptation of the **MVVM (Model-View-ViewModel)** pattern
//! with **Component-based UI State management** for the interactive browser.
//!
//! ## 🏗️ Architecture & Data Flow
//!
//! ### For Console Output (JSON/Text):
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> [ serde_json ] --> Output
//!    (Controller)      (Converter)       (Data)          (Driver)  ==(Text)==> [ View ] --> Output
//! ```
//!
//! ### For the Interactive Browser:
//!
//! ```text
//! [ Handler ] --> [ TuiRenderer ] --> [ App ] <-- User Input / Timers
//!                   (Event Loop)      (Route + Components)
//!                                          |
//!                                          v
//!                                    [ Presenter ] --> [ ViewModel ] --> [ View ]
//!                                                       (Snapshot)      (Widget)
//! ```
//!
//! ---
//!
//! ## 📂 Directory Guide: Where does code go?
//!
//! ### 1. `view_models/` (The Data Contract)
//! * **What:** Structs and Enums that define *what* information is available to the user.
//! * **Rule:** Pure data containers. Must implement `Serialize`. **No** selection logic.
//!
//! ### 2. `presenters/` (The Transformation Logic)
//! * **What:** Pure functions that convert catalog tracks and engine state into ViewModels.
//! * **Rule:** Paths, filtering and which card shows its technologies are decided here.
//!
//! ### 3. `views/` (The Layout)
//! * `views/*.rs`: `fmt::Display` for console output, coloured with `owo_colors`.
//! * `views/tui/`: Ratatui widgets, one per ViewModel.
//!
//! ### 4. `renderers/` (The Output Strategy)
//! * `console.rs`: JSON or text to stdout.
//! * `tui/`: terminal setup, event loop and the components holding UI state.
//!
//! ---
//!
//! ## ⚖️ Decision Matrix
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a new field to the JSON output | **`view_models/`** |
//! | Decide what a card shows while transitioning | **`presenters/`** |
//! | Change the color of a difficulty badge | **`views/`** |
//! | Add a key binding | **`renderers/tui/`** |

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer, TuiRenderer};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
