//! Named layout patterns and the registry that maps each one to a shape
//! family and its constants.
//!
//! Pattern names are the kebab-case strings saved in templates
//! (`"grid-2x2"`, `"left-tall"`, ...).
//!
//! # Example
//!
//! ```
//! use composite_layout::Pattern;
//!
//! let p: Pattern = "grid-3x2".parse().unwrap();
//! assert_eq!(p, Pattern::Grid3x2);
//! assert!(p.accepts(6));
//! assert_eq!(Pattern::default_for(9), Some(Pattern::Grid3x3Full));
//! ```

use core::fmt;
use core::ops::RangeInclusive;
use core::str::FromStr;

/// Large-block share of the inner height for `grid-2x2-alt`.
const SPLIT_2X2_ALT: f64 = 0.65;
/// Large-block share of the inner width for `grid-2x2-alt-horizontal`.
const SPLIT_2X2_ALT_HORIZONTAL: f64 = 0.6;
/// Large-block share for `grid-2x3-alt` and its horizontal sibling.
const SPLIT_2X3_ALT: f64 = 0.4;
/// Large-block share for `grid-3x3-alt` and its horizontal sibling.
const SPLIT_3X3_ALT: f64 = 0.4;
/// Large-block share for `grid-3x3-full-alt` and its horizontal sibling.
const SPLIT_3X3_FULL_ALT: f64 = 0.35;

/// Largest total any pattern lays out.
pub const MAX_TOTAL: usize = 9;

/// A named layout recipe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pattern {
    /// Two columns side by side.
    #[cfg_attr(feature = "serde", serde(rename = "left-right"))]
    LeftRight,
    /// Two rows stacked.
    #[cfg_attr(feature = "serde", serde(rename = "top-bottom"))]
    TopBottom,
    /// Large photo on the left, a column of small photos on the right.
    #[cfg_attr(feature = "serde", serde(rename = "left-tall"))]
    LeftTall,
    /// A column of small photos on the left, large photo on the right.
    #[cfg_attr(feature = "serde", serde(rename = "right-tall"))]
    RightTall,
    /// Large photo on top, a row of small photos below.
    #[cfg_attr(feature = "serde", serde(rename = "top-wide"))]
    TopWide,
    /// A row of small photos on top, large photo below.
    #[cfg_attr(feature = "serde", serde(rename = "top-two"))]
    TopTwo,
    #[cfg_attr(feature = "serde", serde(rename = "grid-2x2"))]
    Grid2x2,
    #[cfg_attr(feature = "serde", serde(rename = "grid-3x2"))]
    Grid3x2,
    #[cfg_attr(feature = "serde", serde(rename = "grid-2x3"))]
    Grid2x3,
    #[cfg_attr(feature = "serde", serde(rename = "grid-3x3"))]
    Grid3x3,
    #[cfg_attr(feature = "serde", serde(rename = "grid-4x2"))]
    Grid4x2,
    #[cfg_attr(feature = "serde", serde(rename = "grid-2x4"))]
    Grid2x4,
    /// 3×3 grid that only accepts exactly nine photos.
    #[cfg_attr(feature = "serde", serde(rename = "grid-3x3-full"))]
    Grid3x3Full,
    /// Large block on top, three photos in a row below.
    #[cfg_attr(feature = "serde", serde(rename = "grid-2x2-alt"))]
    Grid2x2Alt,
    /// Large block on the left, three photos in a column on the right.
    #[cfg_attr(feature = "serde", serde(rename = "grid-2x2-alt-horizontal"))]
    Grid2x2AltHorizontal,
    /// Large block on top, 2×2 grid below.
    #[cfg_attr(feature = "serde", serde(rename = "grid-2x3-alt"))]
    Grid2x3Alt,
    /// Large block on the left, 2×2 grid on the right.
    #[cfg_attr(feature = "serde", serde(rename = "grid-2x3-alt-horizontal"))]
    Grid2x3AltHorizontal,
    /// Large block on top, 3×2 grid below.
    #[cfg_attr(feature = "serde", serde(rename = "grid-3x3-alt"))]
    Grid3x3Alt,
    /// Large block on the left, 2×3 grid on the right.
    #[cfg_attr(feature = "serde", serde(rename = "grid-3x3-alt-horizontal"))]
    Grid3x3AltHorizontal,
    /// Large block on top, 4×2 grid below.
    #[cfg_attr(feature = "serde", serde(rename = "grid-3x3-full-alt"))]
    Grid3x3FullAlt,
    /// Large block on the left, 2×4 grid on the right.
    #[cfg_attr(feature = "serde", serde(rename = "grid-3x3-full-alt-horizontal"))]
    Grid3x3FullAltHorizontal,
}

/// Which side of the composite the large photo sits on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

/// Geometry family a pattern selects, with its constants.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Shape {
    /// Two equal cells; `columns` puts them side by side.
    Pair { columns: bool },
    /// One photo-shaped large cell plus a strip of `total - 1` small cells.
    Strip { large: Side },
    /// Uniform row-major grid.
    Grid { cols: usize, rows: usize },
    /// Large block at index 0 plus a uniform sub-grid for the rest.
    Featured {
        split: f64,
        cols: usize,
        rows: usize,
        horizontal: bool,
    },
}

impl Pattern {
    /// Every pattern, in registry order.
    pub const ALL: [Self; 21] = [
        Self::LeftRight,
        Self::TopBottom,
        Self::LeftTall,
        Self::RightTall,
        Self::TopWide,
        Self::TopTwo,
        Self::Grid2x2,
        Self::Grid3x2,
        Self::Grid2x3,
        Self::Grid3x3,
        Self::Grid4x2,
        Self::Grid2x4,
        Self::Grid3x3Full,
        Self::Grid2x2Alt,
        Self::Grid2x2AltHorizontal,
        Self::Grid2x3Alt,
        Self::Grid2x3AltHorizontal,
        Self::Grid3x3Alt,
        Self::Grid3x3AltHorizontal,
        Self::Grid3x3FullAlt,
        Self::Grid3x3FullAltHorizontal,
    ];

    /// The template name of this pattern.
    pub const fn name(self) -> &'static str {
        match self {
            Self::LeftRight => "left-right",
            Self::TopBottom => "top-bottom",
            Self::LeftTall => "left-tall",
            Self::RightTall => "right-tall",
            Self::TopWide => "top-wide",
            Self::TopTwo => "top-two",
            Self::Grid2x2 => "grid-2x2",
            Self::Grid3x2 => "grid-3x2",
            Self::Grid2x3 => "grid-2x3",
            Self::Grid3x3 => "grid-3x3",
            Self::Grid4x2 => "grid-4x2",
            Self::Grid2x4 => "grid-2x4",
            Self::Grid3x3Full => "grid-3x3-full",
            Self::Grid2x2Alt => "grid-2x2-alt",
            Self::Grid2x2AltHorizontal => "grid-2x2-alt-horizontal",
            Self::Grid2x3Alt => "grid-2x3-alt",
            Self::Grid2x3AltHorizontal => "grid-2x3-alt-horizontal",
            Self::Grid3x3Alt => "grid-3x3-alt",
            Self::Grid3x3AltHorizontal => "grid-3x3-alt-horizontal",
            Self::Grid3x3FullAlt => "grid-3x3-full-alt",
            Self::Grid3x3FullAltHorizontal => "grid-3x3-full-alt-horizontal",
        }
    }

    pub(crate) const fn shape(self) -> Shape {
        match self {
            Self::LeftRight => Shape::Pair { columns: true },
            Self::TopBottom => Shape::Pair { columns: false },
            Self::LeftTall => Shape::Strip { large: Side::Left },
            Self::RightTall => Shape::Strip { large: Side::Right },
            Self::TopWide => Shape::Strip { large: Side::Top },
            Self::TopTwo => Shape::Strip { large: Side::Bottom },
            Self::Grid2x2 => Shape::Grid { cols: 2, rows: 2 },
            Self::Grid3x2 => Shape::Grid { cols: 3, rows: 2 },
            Self::Grid2x3 => Shape::Grid { cols: 2, rows: 3 },
            Self::Grid3x3 | Self::Grid3x3Full => Shape::Grid { cols: 3, rows: 3 },
            Self::Grid4x2 => Shape::Grid { cols: 4, rows: 2 },
            Self::Grid2x4 => Shape::Grid { cols: 2, rows: 4 },
            Self::Grid2x2Alt => Shape::Featured {
                split: SPLIT_2X2_ALT,
                cols: 3,
                rows: 1,
                horizontal: false,
            },
            Self::Grid2x2AltHorizontal => Shape::Featured {
                split: SPLIT_2X2_ALT_HORIZONTAL,
                cols: 1,
                rows: 3,
                horizontal: true,
            },
            Self::Grid2x3Alt => Shape::Featured {
                split: SPLIT_2X3_ALT,
                cols: 2,
                rows: 2,
                horizontal: false,
            },
            Self::Grid2x3AltHorizontal => Shape::Featured {
                split: SPLIT_2X3_ALT,
                cols: 2,
                rows: 2,
                horizontal: true,
            },
            Self::Grid3x3Alt => Shape::Featured {
                split: SPLIT_3X3_ALT,
                cols: 3,
                rows: 2,
                horizontal: false,
            },
            Self::Grid3x3AltHorizontal => Shape::Featured {
                split: SPLIT_3X3_ALT,
                cols: 2,
                rows: 3,
                horizontal: true,
            },
            Self::Grid3x3FullAlt => Shape::Featured {
                split: SPLIT_3X3_FULL_ALT,
                cols: 4,
                rows: 2,
                horizontal: false,
            },
            Self::Grid3x3FullAltHorizontal => Shape::Featured {
                split: SPLIT_3X3_FULL_ALT,
                cols: 2,
                rows: 4,
                horizontal: true,
            },
        }
    }

    /// Range of totals this pattern has a dedicated geometry for.
    ///
    /// Pair patterns also cover a single photo, since every pattern
    /// degrades to the centred single cell at `total == 1`.
    pub fn totals(self) -> RangeInclusive<usize> {
        match (self, self.shape()) {
            (_, Shape::Pair { .. }) => 1..=2,
            (_, Shape::Strip { .. }) => 3..=MAX_TOTAL,
            (Self::Grid3x3Full, _) => MAX_TOTAL..=MAX_TOTAL,
            (_, Shape::Grid { cols, rows }) => ((rows - 1) * cols + 1).max(3)..=rows * cols,
            (_, Shape::Featured { cols, rows, .. }) => {
                let n = cols * rows + 1;
                n..=n
            }
        }
    }

    /// Whether this pattern has a dedicated geometry for `total`.
    pub fn accepts(self, total: usize) -> bool {
        self.totals().contains(&total)
    }

    /// Default pattern for a photo count when a template names none.
    pub const fn default_for(total: usize) -> Option<Self> {
        match total {
            1 | 2 => Some(Self::LeftRight),
            3 => Some(Self::LeftTall),
            4 => Some(Self::Grid2x2),
            5 => Some(Self::Grid2x3Alt),
            6 => Some(Self::Grid3x2),
            7 => Some(Self::Grid3x3Alt),
            8 => Some(Self::Grid4x2),
            9 => Some(Self::Grid3x3Full),
            _ => None,
        }
    }

    /// Every pattern that accepts `total`, in registry order.
    pub fn for_total(total: usize) -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(move |p| p.accepts(total))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PatternError::Empty);
        }
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or(PatternError::Unknown)
    }
}

/// Pattern name parsing error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PatternError {
    /// The name is empty or whitespace.
    Empty,
    /// The name does not match any known pattern.
    Unknown,
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty layout pattern name"),
            Self::Unknown => f.write_str("unknown layout pattern name"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PatternError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for p in Pattern::ALL {
            assert_eq!(p.name().parse::<Pattern>(), Ok(p), "{p}");
        }
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in Pattern::ALL.iter().enumerate() {
            for b in &Pattern::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn parse_is_case_insensitive_and_trimmed() {
        assert_eq!(" Grid-2X2 ".parse::<Pattern>(), Ok(Pattern::Grid2x2));
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<Pattern>(), Err(PatternError::Empty));
        assert_eq!("   ".parse::<Pattern>(), Err(PatternError::Empty));
        assert_eq!("grid-5x5".parse::<Pattern>(), Err(PatternError::Unknown));
    }

    #[test]
    fn default_table() {
        assert_eq!(Pattern::default_for(0), None);
        assert_eq!(Pattern::default_for(1), Some(Pattern::LeftRight));
        assert_eq!(Pattern::default_for(4), Some(Pattern::Grid2x2));
        assert_eq!(Pattern::default_for(9), Some(Pattern::Grid3x3Full));
        assert_eq!(Pattern::default_for(10), None);
    }

    #[test]
    fn defaults_accept_their_total() {
        for total in 1..=MAX_TOTAL {
            let p = Pattern::default_for(total).unwrap();
            assert!(p.accepts(total), "{p} should accept {total}");
        }
    }

    #[test]
    fn grid_totals() {
        assert_eq!(Pattern::Grid2x2.totals(), 3..=4);
        assert_eq!(Pattern::Grid3x2.totals(), 4..=6);
        assert_eq!(Pattern::Grid2x3.totals(), 5..=6);
        assert_eq!(Pattern::Grid3x3.totals(), 7..=9);
        assert_eq!(Pattern::Grid3x3Full.totals(), 9..=9);
        assert_eq!(Pattern::Grid2x2Alt.totals(), 4..=4);
        assert_eq!(Pattern::Grid3x3FullAlt.totals(), 9..=9);
    }

    #[test]
    fn nothing_accepts_more_than_nine() {
        assert_eq!(Pattern::for_total(10).count(), 0);
        assert_eq!(Pattern::for_total(0).count(), 0);
    }

    #[test]
    fn for_total_nine() {
        let nine: Vec<_> = Pattern::for_total(9).collect();
        assert!(nine.contains(&Pattern::Grid3x3));
        assert!(nine.contains(&Pattern::Grid3x3Full));
        assert!(nine.contains(&Pattern::Grid3x3FullAlt));
        assert!(nine.contains(&Pattern::LeftTall));
        assert!(!nine.contains(&Pattern::Grid2x2));
    }
}
