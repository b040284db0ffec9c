pub mod category;
mod dataset;
pub mod elements;

pub use category::{Category, NEUTRAL_GRAY, Rgb};
pub use elements::{ELEMENT_COUNT, ElementRecord, Phase, SHELL_NAMES};
