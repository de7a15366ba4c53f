//! Automatic grid shape selection.
//!
//! Given a photo count and the content-area dimensions, searches every
//! column count in `1..=count` and scores the resulting cell shape against
//! a 3:2 landscape target, with a small penalty for cells left empty.
//! The search is a discrete 1-D scan, O(count), and always feasible since
//! `cols = 1` and `cols = count` are both candidates.

/// Target cell aspect ratio: generic landscape photo (3:2).
const TARGET_CELL_ASPECT: f64 = 1.5;

/// Penalty weight per cell beyond the photo count.
const WASTE_PENALTY: f64 = 0.08;

/// A chosen grid shape for the automatic template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    pub cols: u32,
    pub rows: u32,
}

/// Score a candidate grid for `count` photos in a content area.
///
/// Lower is better. The first term measures how far the cell aspect is
/// from 3:2 (log-scaled so "twice too wide" and "twice too tall" score
/// equally); the second disfavors grids with more cells than photos.
pub(crate) fn grid_score(count: u32, cols: u32, rows: u32, width: f64, height: f64) -> f64 {
    let cell_aspect = (width / cols as f64) / (height / rows as f64);
    (cell_aspect / TARGET_CELL_ASPECT).ln().abs()
        + WASTE_PENALTY * (cols * rows - count) as f64
}

/// Choose the grid shape minimizing the score for `count` photos.
///
/// Ties keep the first candidate encountered (smallest `cols`). `count`
/// must be at least 1; width and height must be positive.
pub fn choose_grid(count: u32, width_mm: f64, height_mm: f64) -> GridShape {
    let count = count.max(1);
    let mut best = GridShape { cols: 1, rows: count };
    let mut best_score = f64::INFINITY;

    for cols in 1..=count {
        let rows = count.div_ceil(cols);
        let score = grid_score(count, cols, rows, width_mm, height_mm);
        if score < best_score {
            best = GridShape { cols, rows };
            best_score = score;
        }
    }
    best
}

/// Generate row-major unit-span cells for a plain grid.
pub fn unit_cells(cols: u32, rows: u32) -> Vec<super::Cell> {
    let mut cells = Vec::with_capacity((cols * rows) as usize);
    for row in 1..=rows {
        for col in 1..=cols {
            cells.push(super::Cell {
                col,
                row,
                col_span: 1,
                row_span: 1,
            });
        }
    }
    cells
}


// ============================================================================
// Property-Based Tests
// ============================================================================
