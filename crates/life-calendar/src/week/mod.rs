//! Week classification and row walking
//!
//! - Per-week fill, border weight and milestone tags
//! - Rows that run from one birthday week to the next

mod classify;
mod row;

pub use classify::*;
pub use row::*;
