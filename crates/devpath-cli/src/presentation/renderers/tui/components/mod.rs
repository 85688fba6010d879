//! TUI Components
//!
//! Components encapsulate UI State + Input Logic.
//! 1. Hiding state manipulation details inside components
//! 2. Returning an action when the parent has to respond (navigation)
//! 3. Ensuring index safety within component boundaries
//!
//! ## Pattern:
//! ```rust,ignore
//! pub struct FooComponent {
//!     state: SomeState, // Private UI state
//! }
//!
//! impl FooComponent {
//!     pub fn handle_input(&mut self, key: KeyEvent, ...) -> Option<Action> {
//!         // Handle input, return action if parent needs to respond
//!     }
//! }
//! ```

pub mod catalog;
pub mod search;

pub use catalog::{CatalogAction, CatalogComponent};
pub use search::{SearchAction, SearchComponent};
