//! A4 page slicing for PDF export.
//!
//! The resume page is rasterized at [`PDF_SCALE`] into one tall image, then
//! cut into pages whose height in image pixels keeps the A4 aspect ratio at
//! the image's width.

#[cfg(test)]
#[path = "paginate_test.rs"]
mod paginate_test;

pub const A4_WIDTH_MM: f64 = 210.0;
pub const A4_HEIGHT_MM: f64 = 297.0;
/// Rasterization scale relative to CSS pixels.
pub const PDF_SCALE: f64 = 2.0;
pub const PDF_FILE_NAME: &str = "resume.pdf";
/// Upper bound on pages in one export.
pub const MAX_PAGES: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum PaginateError {
    #[error("page height must be positive and finite, got {0}")]
    InvalidPageHeight(f64),
    #[error("content height must be positive and finite, got {0}")]
    InvalidContentHeight(f64),
    #[error("content needs {pages} pages, more than the limit of {MAX_PAGES}")]
    TooManyPages { pages: f64 },
}

/// Page height in image pixels for an image `image_width` pixels wide.
///
/// # Errors
///
/// [`PaginateError::InvalidPageHeight`] when the width is not positive.
pub fn page_height_px(image_width: f64) -> Result<f64, PaginateError> {
    let height = image_width * A4_HEIGHT_MM / A4_WIDTH_MM;
    if height.is_finite() && height > 0.0 { Ok(height) } else { Err(PaginateError::InvalidPageHeight(height)) }
}

/// One page worth of the rendered image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSlice {
    pub index: usize,
    /// Distance from the top of the image to the top of this slice.
    pub offset_px: f64,
    pub height_px: f64,
}

impl PageSlice {
    /// Vertical placement of the full image on this page, in millimetres.
    /// Negative, so the slice lands at the top of the page.
    #[must_use]
    pub fn image_offset_mm(&self, page_height_px: f64) -> f64 {
        -self.offset_px * A4_HEIGHT_MM / page_height_px
    }
}

/// `ceil(content / page)`.
///
/// # Errors
///
/// See [`page_slices`].
pub fn page_count(content_height_px: f64, page_height_px: f64) -> Result<usize, PaginateError> {
    validate(content_height_px, page_height_px)?;
    let pages = (content_height_px / page_height_px).ceil();
    #[allow(clippy::cast_precision_loss)]
    let max = MAX_PAGES as f64;
    if pages > max {
        return Err(PaginateError::TooManyPages { pages });
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = pages as usize;
    Ok(count)
}

/// Split `content_height_px` into page slices of at most `page_height_px`.
///
/// # Errors
///
/// Either height that is zero, negative or non-finite, or content that would
/// need more than [`MAX_PAGES`] pages.
pub fn page_slices(content_height_px: f64, page_height_px: f64) -> Result<Vec<PageSlice>, PaginateError> {
    let count = page_count(content_height_px, page_height_px)?;
    Ok((0..count)
        .map(|index| {
            #[allow(clippy::cast_precision_loss)]
            let offset_px = index as f64 * page_height_px;
            PageSlice { index, offset_px, height_px: page_height_px.min(content_height_px - offset_px) }
        })
        .collect())
}

fn validate(content_height_px: f64, page_height_px: f64) -> Result<(), PaginateError> {
    if !(page_height_px.is_finite() && page_height_px > 0.0) {
        return Err(PaginateError::InvalidPageHeight(page_height_px));
    }
    if !(content_height_px.is_finite() && content_height_px > 0.0) {
        return Err(PaginateError::InvalidContentHeight(content_height_px));
    }
    Ok(())
}
