//! Layout calculation modules for the calendar grid
//!
//! This module handles all the geometric calculations for the poster:
//! - Page size from the ISO paper-size exponent
//! - The uniform cell bound that fits the grid on the tighter axis
//! - Margins, gaps, border widths and corner radius derived from it

mod geometry;
mod types;

pub use geometry::*;
pub use types::*;
