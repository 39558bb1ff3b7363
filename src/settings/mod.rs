// Types describing the configuration of math objects

mod defaults;
mod error;
mod input;
mod options;
mod partial;
mod types;

// Re-export all public symbols
pub use defaults::*;
pub use error::*;
pub use input::*;
pub use options::*;
pub use partial::*;
pub use types::*;
