pub mod difficulty;
pub mod track;

pub use difficulty::*;
pub use track::*;
