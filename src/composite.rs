//! A whole composite: every cell of one (total, pattern, params) triple.
//!
//! The two consumers of the resolver both go through [`Composite`]: the
//! live preview box and the export canvas. They share one engine and
//! differ only in their preset padding and gap, so the preview always
//! matches the exported image.
//!
//! # Example
//!
//! ```
//! use composite_layout::{Composite, Pattern};
//!
//! let composite = Composite::export(1080.0, 4, Some(Pattern::Grid2x2));
//! let pixels: Vec<_> = composite.pixel_cells().collect();
//! assert_eq!(pixels.len(), 4);
//! ```

use crate::geometry::{LayoutParams, PixelRect, Rect};
use crate::pattern::Pattern;
use crate::resolve::resolve_with;

/// Padding and gap used by the preview box.
pub const PREVIEW_INSET: f64 = 7.0;

/// Padding and gap used by the export canvas.
pub const EXPORT_INSET: f64 = 10.0;

/// Layout of every cell in one composite.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Composite {
    total: usize,
    pattern: Option<Pattern>,
    params: LayoutParams,
}

impl Composite {
    /// Composite of `total` cells. `None` picks [`Pattern::default_for`].
    pub fn new(total: usize, pattern: Option<Pattern>, params: LayoutParams) -> Self {
        Self {
            total,
            pattern: pattern.or_else(|| Pattern::default_for(total)),
            params,
        }
    }

    /// Preview preset for a square box of side `box_size`.
    pub fn preview(box_size: f64, total: usize, pattern: Option<Pattern>) -> Self {
        let params = LayoutParams::new(box_size)
            .padding(PREVIEW_INSET)
            .gap(PREVIEW_INSET);
        Self::new(total, pattern, params)
    }

    /// Export preset for a square canvas of side `width`.
    pub fn export(width: f64, total: usize, pattern: Option<Pattern>) -> Self {
        let params = LayoutParams::new(width)
            .padding(EXPORT_INSET)
            .gap(EXPORT_INSET);
        Self::new(total, pattern, params)
    }

    /// Composite for a saved template's `layout_pattern` name.
    ///
    /// An unknown name falls back to the default pattern for `total`.
    pub fn from_template_name(total: usize, name: &str, params: LayoutParams) -> Self {
        let pattern = match name.parse::<Pattern>() {
            Ok(p) => Some(p),
            Err(e) => {
                log::warn!("template layout pattern {name:?}: {e}, using default for {total}");
                None
            }
        };
        Self::new(total, pattern, params)
    }

    /// Replace the layout parameters.
    pub fn with_params(mut self, params: LayoutParams) -> Self {
        self.params = params;
        self
    }

    /// Number of cells.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Pattern in effect, after the default lookup.
    pub fn pattern(&self) -> Option<Pattern> {
        self.pattern
    }

    /// Container, padding and gap.
    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Rectangle of cell `index`.
    pub fn cell(&self, index: usize) -> Rect {
        resolve_with(index, self.total, self.pattern, &self.params)
    }

    /// Every cell in index order, including empty ones.
    pub fn cells(&self) -> impl Iterator<Item = Rect> + '_ {
        (0..self.total).map(|i| self.cell(i))
    }

    /// Every cell rounded to whole pixels.
    pub fn pixel_cells(&self) -> impl Iterator<Item = PixelRect> + '_ {
        self.cells().map(|r| r.to_pixels())
    }

    /// Whether nothing would be drawn.
    pub fn is_empty(&self) -> bool {
        self.cells().all(|r| r.is_empty())
    }

    /// Smallest rect covering every drawn cell, or [`Rect::EMPTY`].
    pub fn bounds(&self) -> Rect {
        self.cells().fold(Rect::EMPTY, |acc, r| acc.union(&r))
    }
}
