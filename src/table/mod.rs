pub mod placement;
pub mod visual;

pub use placement::{FBlock, GridCell, LayoutError, TableLayout, placement_for};
pub use visual::{RenderState, render_state};
