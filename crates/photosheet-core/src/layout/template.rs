//! Layout templates.
//!
//! A template resolves to a [`PageLayout`]: the grid dimensions and an
//! ordered cell list matching reading order. Curated templates carry a
//! hand-authored cell list and force their photo count; the automatic
//! template delegates to the grid search.

use super::grid::{choose_grid, unit_cells};

/// Photos-per-page bounds for the automatic template.
pub(crate) const MIN_PER_PAGE: u32 = 1;
pub(crate) const MAX_PER_PAGE: u32 = 64;

/// One grid slot on a page. Indices are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Cell {
    pub col: u32,
    pub row: u32,
    pub col_span: u32,
    pub row_span: u32,
}

/// The fixed set of layout templates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    /// Computed grid sized by the scored search.
    #[default]
    Auto,
    /// Curated 2 x 2 grid (4 photos).
    Grid4,
    /// Curated 3 x 2 grid (6 photos).
    Grid6,
    /// Curated 1 large + 4 small (5 photos).
    Hero5,
}

impl Template {
    /// Photo count a curated template forces; `None` for the automatic
    /// template, which honors the requested count.
    pub fn forced_photos_per_page(&self) -> Option<u32> {
        match self {
            Template::Auto => None,
            Template::Grid4 => Some(4),
            Template::Grid6 => Some(6),
            Template::Hero5 => Some(5),
        }
    }
}

/// A resolved page grid.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PageLayout {
    pub label: String,
    pub photos_per_page: u32,
    pub cols: u32,
    pub rows: u32,
    /// Cells in reading order; photos are paired with cells by position.
    pub cells: Vec<Cell>,
}

/// Resolve a template into a page grid.
///
/// Curated templates ignore `requested_per_page`. The automatic template
/// clamps the request to 1..=64 and runs the scored grid search over the
/// content area.
pub fn plan(
    template: Template,
    requested_per_page: u32,
    content_width_mm: f64,
    content_height_mm: f64,
) -> PageLayout {
    match template {
        Template::Grid4 => PageLayout {
            label: "2 x 2 (4)".to_string(),
            photos_per_page: 4,
            cols: 2,
            rows: 2,
            cells: unit_cells(2, 2),
        },
        Template::Grid6 => PageLayout {
            label: "3 x 2 (6)".to_string(),
            photos_per_page: 6,
            cols: 3,
            rows: 2,
            cells: unit_cells(3, 2),
        },
        Template::Hero5 => PageLayout {
            label: "1 large + 4 small (5)".to_string(),
            photos_per_page: 5,
            cols: 3,
            rows: 4,
            cells: vec![
                Cell { col: 1, row: 1, col_span: 2, row_span: 4 },
                Cell { col: 3, row: 1, col_span: 1, row_span: 1 },
                Cell { col: 3, row: 2, col_span: 1, row_span: 1 },
                Cell { col: 3, row: 3, col_span: 1, row_span: 1 },
                Cell { col: 3, row: 4, col_span: 1, row_span: 1 },
            ],
        },
        Template::Auto => {
            let count = requested_per_page.clamp(MIN_PER_PAGE, MAX_PER_PAGE);
            let shape = choose_grid(count, content_width_mm, content_height_mm);
            PageLayout {
                label: format!("Auto ({} x {})", shape.cols, shape.rows),
                photos_per_page: count,
                cols: shape.cols,
                rows: shape.rows,
                cells: unit_cells(shape.cols, shape.rows),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid4_ignores_request() {
        let layout = plan(Template::Grid4, 12, 194.0, 281.0);
        assert_eq!(layout.photos_per_page, 4);
        assert_eq!((layout.cols, layout.rows), (2, 2));
        assert_eq!(layout.cells.len(), 4);
    }

    #[test]
    fn test_grid6_reading_order() {
        let layout = plan(Template::Grid6, 1, 194.0, 281.0);
        assert_eq!(layout.photos_per_page, 6);
        let order: Vec<(u32, u32)> = layout.cells.iter().map(|c| (c.col, c.row)).collect();
        assert_eq!(
            order,
            vec![(1, 1), (2, 1), (3, 1), (1, 2), (2, 2), (3, 2)]
        );
    }

    #[test]
    fn test_hero5_cell_spans() {
        let layout = plan(Template::Hero5, 9, 194.0, 281.0);
        assert_eq!(layout.photos_per_page, 5);
        assert_eq!((layout.cols, layout.rows), (3, 4));

        let hero = layout.cells[0];
        assert_eq!((hero.col_span, hero.row_span), (2, 4));

        for small in &layout.cells[1..] {
            assert_eq!(small.col, 3);
            assert_eq!((small.col_span, small.row_span), (1, 1));
        }
    }

    #[test]
    fn test_auto_clamps_request() {
        let layout = plan(Template::Auto, 0, 194.0, 281.0);
        assert_eq!(layout.photos_per_page, 1);

        let layout = plan(Template::Auto, 1000, 194.0, 281.0);
        assert_eq!(layout.photos_per_page, 64);
        assert!(layout.cols * layout.rows >= 64);
    }

    #[test]
    fn test_auto_label_names_shape() {
        let layout = plan(Template::Auto, 6, 194.0, 281.0);
        assert_eq!(layout.label, format!("Auto ({} x {})", layout.cols, layout.rows));
    }

    #[test]
    fn test_forced_counts() {
        assert_eq!(Template::Auto.forced_photos_per_page(), None);
        assert_eq!(Template::Grid4.forced_photos_per_page(), Some(4));
        assert_eq!(Template::Grid6.forced_photos_per_page(), Some(6));
        assert_eq!(Template::Hero5.forced_photos_per_page(), Some(5));
    }
}
