//! Document output

use crate::options::CalendarOptions;
use crate::render::{PdfCanvas, render_calendar};
use crate::types::*;
use std::path::{Path, PathBuf};

/// Force a `.pdf` extension, replacing any other one
pub fn normalize_output_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("pdf") => path.to_path_buf(),
        Some(ext) => {
            log::warn!("Replacing '.{}' extension with '.pdf'", ext);
            path.with_extension("pdf")
        }
        None => path.with_extension("pdf"),
    }
}

/// Render the calendar into an in-memory PDF
pub fn render_pdf_bytes(options: &CalendarOptions) -> Result<Vec<u8>> {
    options.validate()?;
    let geometry = options.geometry()?;
    let mut canvas = PdfCanvas::new(geometry.page_width, geometry.page_height);
    render_calendar(options, &mut canvas)?;
    canvas.into_bytes()
}

/// Render the calendar and write it to `output_path`, with the
/// extension forced to `.pdf`. Returns the path actually written.
///
/// The file is only created once the whole document rendered successfully.
pub async fn generate_pdf(
    options: &CalendarOptions,
    output_path: impl AsRef<Path>,
) -> Result<PathBuf> {
    let options = options.clone();
    let output_path = normalize_output_path(output_path);

    // PDF generation is CPU-bound, spawn blocking
    let bytes = tokio::task::spawn_blocking(move || render_pdf_bytes(&options)).await??;

    tokio::fs::write(&output_path, &bytes).await?;
    log::info!(
        "Wrote {} ({} bytes)",
        output_path.display(),
        bytes.len()
    );

    Ok(output_path)
}
