//! Composite photo layout: named grid patterns of fixed 3:2 portrait cells,
//! centred inside a square canvas with padding and gaps.
//!
//! Pure geometry. No pixel operations, no allocations, `no_std` compatible.
//! The same engine drives the live preview and the exported composite, so
//! both always agree.
//!
//! # Modules
//!
//! - [`geometry`]: Rectangles, layout parameters, sizing helpers
//! - [`pattern`]: Named patterns, their accepted totals, the default table
//! - [`resolve`](mod@resolve): The resolver: one cell from `(index, total, pattern, params)`
//! - [`composite`]: Every cell of one composite, preview and export presets
//! - `svg`: SVG visualization (feature `svg`)
//!
//! # Example
//!
//! ```
//! use composite_layout::{LayoutParams, Pattern, Rect, resolve};
//!
//! let params = LayoutParams::new(320.0).padding(10.0).gap(10.0);
//! let cell = resolve(0, 2, Pattern::LeftRight, &params);
//! assert_eq!(cell, Rect::new(10.0, 51.25, 145.0, 217.5));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod composite;
pub mod geometry;
pub mod pattern;
pub mod resolve;
#[cfg(feature = "svg")]
pub mod svg;

pub use composite::Composite;
pub use geometry::{LayoutParams, PHOTO_RATIO, PixelRect, Rect};
pub use pattern::{Pattern, PatternError};
pub use resolve::{resolve, resolve_named};
