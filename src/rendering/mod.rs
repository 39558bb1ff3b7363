//! Presenting descriptions and reports through a choice of renderers

mod fragments;
mod latex;
mod renderer;
mod terminal;

pub use fragments::*;
pub use latex::Latex;
pub use renderer::render;
pub use terminal::Terminal;
