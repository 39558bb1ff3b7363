//! Formatting primitives: power and root markup, terms, and combinations of
//! already formatted fragments

mod combination;
mod error;
mod power;
mod syntax;
mod term;

// Re-export all public symbols
pub use combination::*;
pub use error::*;
pub use power::*;
pub use syntax::*;
pub use term::*;
