mod component;
mod generator;
mod palette;
mod render;
mod types;
mod viewport;

pub use component::ConstellationBackground;
