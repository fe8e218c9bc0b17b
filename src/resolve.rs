//! The layout resolver: one cell of a composite from
//! `(index, total, pattern, params)`.
//!
//! Pure geometry. No allocation, no rounding, never panics.
//!
//! # Example
//!
//! ```
//! use composite_layout::{LayoutParams, Pattern, Rect, resolve};
//!
//! let params = LayoutParams::new(320.0);
//! let cell = resolve(3, 4, Pattern::Grid2x2, &params);
//! assert!(cell.approx_eq(&Rect::new(165.0, 165.0, 145.0 / 1.5, 145.0)));
//! ```

use crate::geometry::{
    LayoutParams, PHOTO_RATIO, Rect, cell_from_height, cell_from_width, center, share, span,
};
use crate::pattern::{MAX_TOTAL, Pattern, Shape, Side};

/// Resolve the rectangle of cell `index` out of `total`.
///
/// `total == 0` yields [`Rect::EMPTY`]. A pattern without a geometry for
/// `total` degrades: nine cells fall back to a 3×3 grid, any other count
/// yields [`Rect::EMPTY`] so the caller can skip drawing.
///
/// `index` is not validated; an index at or past `total` gives an
/// unspecified rect.
pub fn resolve(index: usize, total: usize, pattern: Pattern, params: &LayoutParams) -> Rect {
    resolve_with(index, total, Some(pattern), params)
}

/// Like [`resolve`], but takes a template's pattern name.
///
/// Unknown names take the same degrade path as a mismatched pattern.
///
/// ```
/// use composite_layout::{LayoutParams, Rect, resolve_named};
///
/// let params = LayoutParams::new(400.0);
/// assert_eq!(resolve_named(0, 10, "unknown-pattern", &params), Rect::EMPTY);
/// ```
pub fn resolve_named(index: usize, total: usize, name: &str, params: &LayoutParams) -> Rect {
    resolve_with(index, total, name.parse().ok(), params)
}

pub(crate) fn resolve_with(
    index: usize,
    total: usize,
    pattern: Option<Pattern>,
    params: &LayoutParams,
) -> Rect {
    let inner = params.inner_size();
    match total {
        0 => Rect::EMPTY,
        1 => single(inner, params.padding),
        2 => pair(index, pattern == Some(Pattern::LeftRight), inner, params),
        _ => match pattern.filter(|p| p.accepts(total)).map(Pattern::shape) {
            Some(Shape::Strip { large }) => strip(index, total, large, inner, params),
            Some(Shape::Grid { cols, rows }) => {
                grid_cell(index, total, cols, rows, params.inner_rect(), params.gap)
            }
            Some(Shape::Featured {
                split,
                cols,
                rows,
                horizontal,
            }) => featured(index, split, cols, rows, horizontal, inner, params),
            Some(Shape::Pair { .. }) | None => fallback(index, total, pattern, params),
        },
    }
}

/// One cell at the largest photo-shaped size, centred.
fn single(inner: f64, padding: f64) -> Rect {
    let (w, h) = cell_from_width(inner.min(inner / PHOTO_RATIO));
    Rect::new(
        center(padding, inner, w),
        center(padding, inner, h),
        w,
        h,
    )
}

/// Two equal cells, as columns (`left-right`) or rows (everything else).
fn pair(index: usize, columns: bool, inner: f64, params: &LayoutParams) -> Rect {
    let (padding, gap) = (params.padding, params.gap);
    let i = index as f64;
    if columns {
        let (w, h) = cell_from_width(share(inner, 2, gap));
        let start_x = center(padding, inner, span(w, 2, gap));
        Rect::new(start_x + i * (w + gap), center(padding, inner, h), w, h)
    } else {
        let (w, h) = cell_from_height(share(inner, 2, gap));
        let start_y = center(padding, inner, span(h, 2, gap));
        Rect::new(center(padding, inner, w), start_y + i * (h + gap), w, h)
    }
}

/// One large photo with a strip of `total - 1` small photos along one side.
///
/// The strip runs along the large photo's long edge and matches its length.
/// `L` is the large photo's length along that edge; it is the full inner
/// size unless the composite would overflow on the cross axis, in which
/// case `L` is solved so the cross extent is exactly `inner`.
fn strip(index: usize, total: usize, large: Side, inner: f64, params: &LayoutParams) -> Rect {
    let (padding, gap) = (params.padding, params.gap);
    let n = (total - 1) as f64;
    let vertical = matches!(large, Side::Left | Side::Right);
    // cross extent per unit of along extent, for a photo-shaped cell
    let c = if vertical {
        1.0 / PHOTO_RATIO
    } else {
        PHOTO_RATIO
    };

    let fit_cross = (inner - gap + c * (n - 1.0) * gap / n) / (c * (1.0 + 1.0 / n));
    let along = inner.min(fit_cross).max(0.0);
    let small = share(along, total - 1, gap);
    let (large_cross, small_cross) = (c * along, c * small);

    let along_start = center(padding, inner, along);
    let cross_start = center(padding, inner, large_cross + gap + small_cross);
    let (large_at, strip_at) = match large {
        Side::Left | Side::Top => (cross_start, cross_start + large_cross + gap),
        Side::Right | Side::Bottom => (cross_start + small_cross + gap, cross_start),
    };

    let (along_pos, cross_pos, along_len, cross_len) = if index == 0 {
        (along_start, large_at, along, large_cross)
    } else {
        let local = (index - 1) as f64;
        (along_start + local * (small + gap), strip_at, small, small_cross)
    };

    if vertical {
        Rect::new(cross_pos, along_pos, cross_len, along_len)
    } else {
        Rect::new(along_pos, cross_pos, along_len, cross_len)
    }
}

/// Cell size and block extents of a `cols × rows` grid holding `count`
/// cells inside a `width × height` area.
struct GridMetrics {
    item_w: f64,
    item_h: f64,
    block_w: f64,
    block_h: f64,
}

fn grid_metrics(
    count: usize,
    cols: usize,
    rows: usize,
    width: f64,
    height: f64,
    gap: f64,
) -> GridMetrics {
    let fit_w = share(width, cols, gap);
    let fit_h = share(height, rows, gap) / PHOTO_RATIO;
    let (item_w, item_h) = cell_from_width(fit_w.min(fit_h));
    let used_rows = count.div_ceil(cols).clamp(1, rows);
    let used_cols = count.clamp(1, cols);
    GridMetrics {
        item_w,
        item_h,
        block_w: span(item_w, used_cols, gap),
        block_h: span(item_h, used_rows, gap),
    }
}

/// Row-major cell `local` of a uniform grid centred in `area`.
///
/// A partially filled last row is centred on its own.
fn grid_cell(local: usize, count: usize, cols: usize, rows: usize, area: Rect, gap: f64) -> Rect {
    let m = grid_metrics(count, cols, rows, area.width, area.height, gap);
    let row = local / cols;
    let col = local % cols;
    let in_row = count.saturating_sub(row * cols).clamp(1, cols);

    let start_x = center(area.left, area.width, span(m.item_w, in_row, gap));
    let start_y = center(area.top, area.height, m.block_h);
    Rect::new(
        start_x + col as f64 * (m.item_w + gap),
        start_y + row as f64 * (m.item_h + gap),
        m.item_w,
        m.item_h,
    )
}

/// Large block at index 0 and a full `cols × rows` sub-grid for the rest.
///
/// The inner area minus one gap is split `split : 1 - split` between the
/// block and the sub-grid along the split axis. The block takes the
/// sub-grid's extent on the other axis, so the pair reads as one composite.
fn featured(
    index: usize,
    split: f64,
    cols: usize,
    rows: usize,
    horizontal: bool,
    inner: f64,
    params: &LayoutParams,
) -> Rect {
    let (padding, gap) = (params.padding, params.gap);
    let count = cols * rows;
    let available = (inner - gap).max(0.0);
    let large = split * available;
    let rest = available - large;

    let (grid_w, grid_h) = if horizontal {
        (rest, inner)
    } else {
        (inner, rest)
    };
    let m = grid_metrics(count, cols, rows, grid_w, grid_h, gap);

    let (block, sub_area) = if horizontal {
        let left = center(padding, inner, large + gap + m.block_w);
        let top = center(padding, inner, m.block_h);
        (
            Rect::new(left, top, large, m.block_h),
            Rect::new(left + large + gap, top, m.block_w, m.block_h),
        )
    } else {
        let left = center(padding, inner, m.block_w);
        let top = center(padding, inner, large + gap + m.block_h);
        (
            Rect::new(left, top, m.block_w, large),
            Rect::new(left, top + large + gap, m.block_w, m.block_h),
        )
    };

    if index == 0 {
        block
    } else {
        grid_cell(index - 1, count, cols, rows, sub_area, gap)
    }
}

/// Degrade path for a pattern with no geometry for `total`.
fn fallback(index: usize, total: usize, pattern: Option<Pattern>, params: &LayoutParams) -> Rect {
    log::debug!(
        "layout pattern {} has no geometry for {} cells, degrading",
        pattern.map_or("<none>", Pattern::name),
        total
    );
    if total == MAX_TOTAL {
        grid_cell(index, total, 3, 3, params.inner_rect(), params.gap)
    } else {
        Rect::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> LayoutParams {
        LayoutParams::new(320.0)
    }

    fn assert_rect(actual: Rect, expected: Rect) {
        assert!(
            actual.approx_eq(&expected),
            "expected {expected:?}, got {actual:?}"
        );
    }

    // ── global rules ────────────────────────────────────────────────────

    #[test]
    fn zero_total_is_empty() {
        for p in Pattern::ALL {
            assert_eq!(resolve(0, 0, p, &params()), Rect::EMPTY);
        }
    }

    #[test]
    fn single_is_centred_full_height() {
        // inner 300: width = 200, height = 300
        let r = resolve(0, 1, Pattern::Grid3x3, &params());
        assert_rect(r, Rect::new(60.0, 10.0, 200.0, 300.0));
    }

    #[test]
    fn single_ignores_unknown_name() {
        assert_eq!(
            resolve_named(0, 1, "nope", &params()),
            resolve(0, 1, Pattern::LeftRight, &params())
        );
    }

    // ── pairs ───────────────────────────────────────────────────────────

    #[test]
    fn left_right_scenario() {
        let a = resolve(0, 2, Pattern::LeftRight, &params());
        let b = resolve(1, 2, Pattern::LeftRight, &params());
        assert_rect(a, Rect::new(10.0, 51.25, 145.0, 217.5));
        assert_rect(b, Rect::new(165.0, 51.25, 145.0, 217.5));
    }

    #[test]
    fn top_bottom_rows() {
        // height = 145, width = 145 / 1.5
        let w = 145.0 / 1.5;
        let left = 10.0 + (300.0 - w) / 2.0;
        assert_rect(
            resolve(0, 2, Pattern::TopBottom, &params()),
            Rect::new(left, 10.0, w, 145.0),
        );
        assert_rect(
            resolve(1, 2, Pattern::TopBottom, &params()),
            Rect::new(left, 165.0, w, 145.0),
        );
    }

    #[test]
    fn pair_with_other_pattern_uses_rows() {
        assert_eq!(
            resolve(1, 2, Pattern::Grid2x2, &params()),
            resolve(1, 2, Pattern::TopBottom, &params())
        );
        assert_eq!(
            resolve_named(1, 2, "mystery", &params()),
            resolve(1, 2, Pattern::TopBottom, &params())
        );
    }

    // ── uniform grids ───────────────────────────────────────────────────

    #[test]
    fn grid_2x2_scenario() {
        // rows bind: height = (300 - 10) / 2, width follows the photo ratio
        let p = params();
        let w = 145.0 / 1.5;
        let start_x = 10.0 + (300.0 - (2.0 * w + 10.0)) / 2.0;
        assert_rect(
            resolve(0, 4, Pattern::Grid2x2, &p),
            Rect::new(start_x, 10.0, w, 145.0),
        );
        assert_rect(
            resolve(3, 4, Pattern::Grid2x2, &p),
            Rect::new(165.0, 165.0, w, 145.0),
        );
    }

    #[test]
    fn grid_3x2_row_major() {
        let p = params();
        let r = |i| resolve(i, 6, Pattern::Grid3x2, &p);
        assert_eq!(r(4).left, r(1).left);
        assert_eq!(r(4).top, r(3).top);
        assert!(r(3).top > r(0).top);
    }

    #[test]
    fn partial_last_row_is_centred() {
        let p = params();
        // grid-3x3 with 7 cells: the lone bottom cell sits under the middle column
        let bottom = resolve(6, 7, Pattern::Grid3x3, &p);
        let middle = resolve(4, 7, Pattern::Grid3x3, &p);
        assert_rect(
            Rect::new(bottom.left, 0.0, bottom.width, 0.0),
            Rect::new(middle.left, 0.0, middle.width, 0.0),
        );
    }

    // ── strips ──────────────────────────────────────────────────────────

    #[test]
    fn left_tall_three() {
        let p = params();
        let large = resolve(0, 3, Pattern::LeftTall, &p);
        let top = resolve(1, 3, Pattern::LeftTall, &p);
        let bottom = resolve(2, 3, Pattern::LeftTall, &p);
        // strip matches the large photo's height
        assert!((top.top - large.top).abs() < 1e-9);
        assert!((bottom.bottom() - large.bottom()).abs() < 1e-9);
        // composite spans the inner width exactly
        assert!((large.left - 10.0).abs() < 1e-9);
        assert!((top.right() - 310.0).abs() < 1e-9);
        assert!((top.left - (large.right() + 10.0)).abs() < 1e-9);
    }

    #[test]
    fn right_tall_mirrors_left_tall() {
        let p = params();
        let left = resolve(0, 3, Pattern::LeftTall, &p);
        let right = resolve(0, 3, Pattern::RightTall, &p);
        assert!((left.left - 10.0 - (310.0 - right.right())).abs() < 1e-9);
        assert_eq!(left.width, right.width);
    }

    #[test]
    fn top_wide_fills_height() {
        let p = params();
        let large = resolve(0, 3, Pattern::TopWide, &p);
        let small = resolve(2, 3, Pattern::TopWide, &p);
        assert!((large.top - 10.0).abs() < 1e-9);
        assert!((small.bottom() - 310.0).abs() < 1e-9);
        assert!((small.right() - large.right()).abs() < 1e-9);
    }

    #[test]
    fn top_two_puts_large_below() {
        let p = params();
        let large = resolve(0, 3, Pattern::TopTwo, &p);
        let small = resolve(1, 3, Pattern::TopTwo, &p);
        assert!(small.bottom() < large.top);
    }

    // ── featured ────────────────────────────────────────────────────────

    #[test]
    fn grid_2x2_alt_block_spans_sub_grid() {
        let p = params();
        let block = resolve(0, 4, Pattern::Grid2x2Alt, &p);
        let first = resolve(1, 4, Pattern::Grid2x2Alt, &p);
        let last = resolve(3, 4, Pattern::Grid2x2Alt, &p);
        assert!((block.height - 0.65 * 290.0).abs() < 1e-9);
        assert!((block.left - first.left).abs() < 1e-9);
        assert!((block.right() - last.right()).abs() < 1e-9);
        assert!((first.top - (block.bottom() + 10.0)).abs() < 1e-9);
        assert!((first.top - last.top).abs() < 1e-9);
    }

    #[test]
    fn horizontal_alt_block_is_left() {
        let p = params();
        let block = resolve(0, 4, Pattern::Grid2x2AltHorizontal, &p);
        let first = resolve(1, 4, Pattern::Grid2x2AltHorizontal, &p);
        let last = resolve(3, 4, Pattern::Grid2x2AltHorizontal, &p);
        assert!((block.width - 0.6 * 290.0).abs() < 1e-9);
        assert!((first.left - (block.right() + 10.0)).abs() < 1e-9);
        assert!((block.top - first.top).abs() < 1e-9);
        assert!((block.bottom() - last.bottom()).abs() < 1e-9);
    }

    // ── fallback ────────────────────────────────────────────────────────

    #[test]
    fn mismatched_nine_falls_back_to_grid() {
        let p = params();
        for i in 0..9 {
            assert_eq!(
                resolve(i, 9, Pattern::Grid2x2, &p),
                resolve(i, 9, Pattern::Grid3x3Full, &p)
            );
        }
    }

    #[test]
    fn mismatched_other_totals_are_empty() {
        let p = params();
        assert_eq!(resolve(0, 5, Pattern::Grid2x2, &p), Rect::EMPTY);
        assert_eq!(resolve(0, 3, Pattern::LeftRight, &p), Rect::EMPTY);
        assert_eq!(resolve(2, 10, Pattern::LeftTall, &p), Rect::EMPTY);
    }

    #[test]
    fn oversized_padding_never_goes_negative() {
        let p = LayoutParams::new(40.0).padding(30.0).gap(50.0);
        for pattern in Pattern::ALL {
            for total in pattern.totals() {
                for i in 0..total {
                    let r = resolve(i, total, pattern, &p);
                    assert!(r.width >= 0.0 && r.height >= 0.0, "{pattern} {i}/{total}");
                }
            }
        }
    }
}
