pub mod grid;

pub use grid::{Layout, Renderer};
