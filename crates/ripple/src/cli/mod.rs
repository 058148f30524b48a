//! CLI command implementations.

mod display;

pub mod affected;
pub mod closure;
pub mod depths;
pub mod impact;
pub mod path;

pub use display::Output;
