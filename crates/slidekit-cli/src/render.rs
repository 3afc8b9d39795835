//! Slide images via LibreOffice (`soffice`) and poppler (`pdftoppm`).

use crate::config::ImageFormat;
use anyhow::{bail, Context, Result};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info, warn};

const MAX_FILENAME_CHARS: usize = 100;
const INVALID_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub format: ImageFormat,
    pub dpi: u32,
}

/// Renders every page, then keeps the pages listed in `slides` as
/// `slide_<nnn>-<title>.<ext>` under `output_dir`. Returns `(slide number,
/// image path)` pairs in slide order.
pub fn render_slides(
    pptx: &Path,
    output_dir: &Path,
    slides: &[(usize, String)],
    options: &RenderOptions,
) -> Result<Vec<(usize, PathBuf)>> {
    let work = tempfile::tempdir().context("failed to create temporary directory")?;

    let pdf = convert_to_pdf(pptx, work.path())?;
    let pages_dir = work.path().join("pages");
    fs::create_dir_all(&pages_dir)?;
    let pages = rasterize(&pdf, &pages_dir, options)?;
    info!(pages = pages.len(), "rendered slide images");

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;

    let mut images = Vec::new();
    for (number, title) in slides {
        let Some(page) = number.checked_sub(1).and_then(|i| pages.get(i)) else {
            warn!(slide = number, "no rendered page for slide");
            continue;
        };
        let target = output_dir.join(image_file_name(*number, title, options.format));
        fs::copy(page, &target)
            .with_context(|| format!("failed to write {}", target.display()))?;
        images.push((*number, target));
    }
    Ok(images)
}

fn convert_to_pdf(pptx: &Path, work_dir: &Path) -> Result<PathBuf> {
    info!(file = %pptx.display(), "converting presentation to PDF");
    let output = Command::new("soffice")
        .arg("--headless")
        .args(["--convert-to", "pdf", "--outdir"])
        .arg(work_dir)
        .arg(pptx)
        .output()
        .context("failed to run soffice; is LibreOffice installed?")?;
    if !output.status.success() {
        bail!(
            "soffice failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let stem = pptx.file_stem().unwrap_or_else(|| OsStr::new("presentation"));
    let pdf = work_dir.join(format!("{}.pdf", stem.to_string_lossy()));
    if !pdf.is_file() {
        bail!("soffice did not produce {}", pdf.display());
    }
    Ok(pdf)
}

/// Page images in page order.
fn rasterize(pdf: &Path, pages_dir: &Path, options: &RenderOptions) -> Result<Vec<PathBuf>> {
    let prefix = pages_dir.join("page");
    let output = Command::new("pdftoppm")
        .arg("-r")
        .arg(options.dpi.to_string())
        .arg(options.format.pdftoppm_flag())
        .arg(pdf)
        .arg(&prefix)
        .output()
        .context("failed to run pdftoppm; is poppler installed?")?;
    if !output.status.success() {
        bail!(
            "pdftoppm failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let mut pages: Vec<(usize, PathBuf)> = fs::read_dir(pages_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter_map(|path| {
            let number = page_number(path.file_stem()?.to_str()?)?;
            Some((number, path))
        })
        .collect();
    pages.sort();
    debug!(pages = pages.len(), "collected pdftoppm output");
    Ok(pages.into_iter().map(|(_, path)| path).collect())
}

/// `page-07` → 7. pdftoppm zero-pads to the width of the page count.
fn page_number(stem: &str) -> Option<usize> {
    stem.rsplit_once('-')?.1.parse().ok()
}

pub fn image_file_name(slide: usize, title: &str, format: ImageFormat) -> String {
    format!(
        "slide_{:03}-{}.{}",
        slide,
        sanitize_filename(title),
        format.extension()
    )
}

/// Replaces characters that are invalid in file names, trims, and limits
/// the length.
pub fn sanitize_filename(name: &str) -> String {
    name.replace(INVALID_FILENAME_CHARS, "_")
        .trim()
        .chars()
        .take(MAX_FILENAME_CHARS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sanitize_replaces_invalid_characters() {
        assert_eq!(sanitize_filename("Q3: Plan/Budget?"), "Q3_ Plan_Budget_");
        assert_eq!(sanitize_filename("  padded  "), "padded");
    }

    #[test]
    fn sanitize_limits_length() {
        let long = "x".repeat(250);
        assert_eq!(sanitize_filename(&long).chars().count(), 100);
    }

    #[test]
    fn image_names_are_zero_padded() {
        assert_eq!(
            image_file_name(7, "Results <draft>", ImageFormat::Png),
            "slide_007-Results _draft_.png"
        );
        assert_eq!(
            image_file_name(123, "Untitled", ImageFormat::Jpg),
            "slide_123-Untitled.jpg"
        );
    }

    #[test]
    fn page_numbers_from_pdftoppm_names() {
        assert_eq!(page_number("page-1"), Some(1));
        assert_eq!(page_number("page-012"), Some(12));
        assert_eq!(page_number("page"), None);
    }
}
