//! Rectangles, layout parameters, and the small sizing helpers shared by
//! every pattern family.
//!
//! All values are unit-agnostic `f64`. The resolver never rounds; use
//! [`Rect::to_pixels`] at render time.

use num_traits::Float;

/// Fixed photo aspect ratio: `height = width * PHOTO_RATIO` (3:2 portrait).
pub const PHOTO_RATIO: f64 = 1.5;

/// Default inset from each container edge.
pub const DEFAULT_PADDING: f64 = 10.0;

/// Default spacing between adjacent cells.
pub const DEFAULT_GAP: f64 = 10.0;

/// Tolerance used by [`Rect::approx_eq`] and the containment checks.
pub const EPSILON: f64 = 1e-6;

/// Axis-aligned rectangle relative to the container's top-left corner.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// All-zero rectangle: nothing to draw.
    pub const EMPTY: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a new rect.
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Whether this rect has no drawable area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// `height / width`, or `None` for a zero-width rect.
    pub fn aspect(&self) -> Option<f64> {
        if self.width > 0.0 {
            Some(self.height / self.width)
        } else {
            None
        }
    }

    /// Whether this rect lies inside `outer`, allowing [`EPSILON`] of slack.
    pub fn fits_within(&self, outer: &Self) -> bool {
        self.left >= outer.left - EPSILON
            && self.top >= outer.top - EPSILON
            && self.right() <= outer.right() + EPSILON
            && self.bottom() <= outer.bottom() + EPSILON
    }

    /// Field-wise comparison within [`EPSILON`].
    pub fn approx_eq(&self, other: &Self) -> bool {
        Float::abs(self.left - other.left) <= EPSILON
            && Float::abs(self.top - other.top) <= EPSILON
            && Float::abs(self.width - other.width) <= EPSILON
            && Float::abs(self.height - other.height) <= EPSILON
    }

    /// Smallest rect covering both. Empty rects are ignored.
    pub fn union(&self, other: &Self) -> Self {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let left = self.left.min(other.left);
        let top = self.top.min(other.top);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self::new(left, top, right - left, bottom - top)
    }

    /// Round to whole pixels for rasterization.
    ///
    /// Edges are rounded, then sizes are taken from the rounded edges, so
    /// two cells separated by a gap never overlap after rounding.
    pub fn to_pixels(&self) -> PixelRect {
        let x0 = Float::round(self.left);
        let y0 = Float::round(self.top);
        let x1 = Float::round(self.right());
        let y1 = Float::round(self.bottom());
        PixelRect {
            x: x0 as i32,
            y: y0 as i32,
            width: (x1 - x0).max(0.0) as u32,
            height: (y1 - y0).max(0.0) as u32,
        }
    }
}

/// Integer pixel rectangle, the render-time rounding of a [`Rect`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    /// Whether two pixel rects share at least one pixel.
    pub fn overlaps(&self, other: &Self) -> bool {
        let (ax1, ay1) = (self.x + self.width as i32, self.y + self.height as i32);
        let (bx1, by1) = (other.x + other.width as i32, other.y + other.height as i32);
        self.x < bx1 && other.x < ax1 && self.y < by1 && other.y < ay1
    }
}

/// Container size, padding and gap for one composite.
///
/// # Example
///
/// ```
/// use composite_layout::LayoutParams;
///
/// let params = LayoutParams::new(320.0).padding(5.0).gap(8.0);
/// assert_eq!(params.inner_size(), 310.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutParams {
    /// Side length of the square canvas.
    pub container: f64,
    /// Inset from all four container edges.
    pub padding: f64,
    /// Spacing between adjacent cells.
    pub gap: f64,
}

impl LayoutParams {
    /// Params for a square container with default padding and gap.
    pub const fn new(container: f64) -> Self {
        Self {
            container,
            padding: DEFAULT_PADDING,
            gap: DEFAULT_GAP,
        }
    }

    /// Set the edge inset.
    pub const fn padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Set the spacing between cells.
    pub const fn gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Side of the padded working area. Never negative.
    pub fn inner_size(&self) -> f64 {
        (self.container - 2.0 * self.padding).max(0.0)
    }

    /// The padded working area as a rect.
    pub fn inner_rect(&self) -> Rect {
        let inner = self.inner_size();
        Rect::new(self.padding, self.padding, inner, inner)
    }
}

// ============================================================================
// Sizing helpers
// ============================================================================

/// Photo-shaped cell for a given width: `(w, w * PHOTO_RATIO)`.
pub(crate) fn cell_from_width(width: f64) -> (f64, f64) {
    let w = width.max(0.0);
    (w, w * PHOTO_RATIO)
}

/// Photo-shaped cell for a given height.
pub(crate) fn cell_from_height(height: f64) -> (f64, f64) {
    let h = height.max(0.0);
    (h / PHOTO_RATIO, h)
}

/// Offset that centres `used` inside `available`, starting at `origin`.
pub(crate) fn center(origin: f64, available: f64, used: f64) -> f64 {
    origin + (available - used) / 2.0
}

/// Length of each of `count` segments sharing `length` with `gap` between them.
pub(crate) fn share(length: f64, count: usize, gap: f64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let gaps = (count - 1) as f64 * gap;
    ((length - gaps) / count as f64).max(0.0)
}

/// Total length of `count` segments of `size` with `gap` between them.
pub(crate) fn span(size: f64, count: usize, gap: f64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    count as f64 * size + (count - 1) as f64 * gap
}
