//! Charts module - figure composition and rendering

pub mod composer;
mod figure;
mod renderer;

pub use figure::{Connector, Element, Figure, Rgb, Series};
pub use renderer::render_png;
