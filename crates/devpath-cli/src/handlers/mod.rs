mod context;

pub mod browse;
pub mod list;
pub mod route;
pub mod search;
pub mod show;

pub use context::HandlerContext;
