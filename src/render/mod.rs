// file: src/render/mod.rs
// description: rendering module exports
// reference: internal module structure

pub mod palette;
pub mod renderer;
pub mod surface;
pub mod terminal;

pub use palette::{border_triple, signals_for};
pub use renderer::{RenderOutcome, render};
pub use surface::{DisplaySurface, LaneBoard};
pub use terminal::TerminalBoard;
