//! Page layout planning.
//!
//! Partitions a photo stream into A4 pages and chooses a grid shape for
//! each page: curated hand-authored templates or an automatic grid picked
//! by aspect-ratio scoring.

mod grid;
mod paginate;
mod template;

pub use grid::{choose_grid, unit_cells, GridShape};
pub use paginate::paginate;
pub use template::{plan, Cell, PageLayout, Template};
