//! Render-state snapshot.
//!
//! The print/export collaborator asks for a synchronous snapshot of the
//! fully resolved page list: grid geometry in pixels, each cell's photo,
//! composed transform, and the filter parameter set. The snapshot is
//! plain data, stable at the moment of invocation; image decoding and
//! rasterization stay on the host side.

use crate::filters::FilterSettings;
use crate::geometry::mm_to_px;
use crate::layout::{paginate, plan, Cell, PageLayout};
use crate::session::{Photo, Session};
use crate::transform::{compose, wants_blur_backdrop, BarFill, CellTransform, FitMode};
use crate::Crop;

/// The single advisory error of the engine; everything else degrades to
/// clamped or default values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("margin is too large for the A4 sheet; reduce the value")]
    MarginTooLarge,
}

/// One cell of a rendered page.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CellRender {
    pub cell: Cell,
    /// Empty for trailing cells on a short last page.
    pub photo: Option<Photo>,
    pub crop: Crop,
    pub transform: CellTransform,
    /// Paint a blurred, enlarged cover copy beneath the contained photo.
    pub blur_backdrop: bool,
    /// 1-based running number across pages, when labels are enabled.
    pub label: Option<u32>,
}

/// One rendered page.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PageRender {
    pub index: usize,
    pub cells: Vec<CellRender>,
}

/// The full snapshot handed to the render/print collaborator.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderState {
    pub layout: PageLayout,
    pub page_width_px: i32,
    pub page_height_px: i32,
    pub margin_px: i32,
    pub gap_px: i32,
    pub fit_mode: FitMode,
    pub bar_fill: BarFill,
    pub show_separators: bool,
    pub filters: FilterSettings,
    pub filter_css: String,
    /// Empty when no photos are loaded; the host shows its empty state.
    pub pages: Vec<PageRender>,
}

impl RenderState {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Build the current render state for a session.
///
/// Fails only with the margin advisory; missing crop entries fall back to
/// defaults and short pages leave their trailing cells empty.
pub fn render(session: &Session) -> Result<RenderState, RenderError> {
    let options = session.options();
    if options.margin_too_large() {
        return Err(RenderError::MarginTooLarge);
    }

    let page = options.page_size();
    let (content_w, content_h) = page.content_size(options.margin());
    let layout = plan(
        options.template,
        options.effective_photos_per_page(),
        content_w,
        content_h,
    );

    let per_page = layout.photos_per_page as usize;
    let filters = options.effective_filters();
    let fit = options.fit_mode;
    let bar_fill = options.bar_fill;

    let pages = paginate(session.photos(), per_page)
        .into_iter()
        .enumerate()
        .map(|(index, group)| PageRender {
            index,
            cells: layout
                .cells
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    let photo = group.get(i).cloned();
                    let crop = photo
                        .as_ref()
                        .map(|p| session.crop(&p.id))
                        .unwrap_or_default();
                    CellRender {
                        cell: *cell,
                        blur_backdrop: photo.is_some() && wants_blur_backdrop(fit, bar_fill),
                        label: (options.show_labels && photo.is_some())
                            .then_some((index * per_page + i + 1) as u32),
                        crop,
                        transform: compose(&crop, fit),
                        photo,
                    }
                })
                .collect(),
        })
        .collect();

    Ok(RenderState {
        page_width_px: mm_to_px(page.width_mm),
        page_height_px: mm_to_px(page.height_mm),
        margin_px: mm_to_px(options.margin()),
        gap_px: mm_to_px(options.gap()),
        fit_mode: fit,
        bar_fill,
        show_separators: options.show_separators,
        filter_css: filters.to_css(),
        filters,
        layout,
        pages,
    })
}
