mod color;
mod wave;

pub use color::{rgb_from_hex, Color, GREEN, WHITE};
pub use wave::{bob, surface_height};
