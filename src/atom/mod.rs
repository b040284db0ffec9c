pub mod bohr;

pub use bohr::{BohrModel, Ring};
