pub mod constants;
pub mod dates;
pub mod fonts;
mod io;
pub mod layout;
mod options;
pub mod render;
mod stats;
mod types;
pub mod week;

pub use dates::{parse_darken_until, parse_date, parse_highlight_dates};
pub use fonts::FontFamily;
pub use io::{generate_pdf, normalize_output_path, render_pdf_bytes};
pub use layout::{PageGeometry, resolve};
pub use options::*;
pub use stats::*;
pub use types::*;
