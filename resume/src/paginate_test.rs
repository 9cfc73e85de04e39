#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

#[test]
fn page_height_keeps_a4_ratio() {
    assert!(approx_eq(page_height_px(210.0).expect("height"), 297.0));
    assert!(approx_eq(page_height_px(1588.0).expect("height"), 1588.0 * 297.0 / 210.0));
}

#[test]
fn page_height_rejects_zero_width() {
    assert_eq!(page_height_px(0.0), Err(PaginateError::InvalidPageHeight(0.0)));
}

#[test]
fn count_is_ceiling() {
    assert_eq!(page_count(1000.0, 1000.0), Ok(1));
    assert_eq!(page_count(1000.5, 1000.0), Ok(2));
    assert_eq!(page_count(2500.0, 1000.0), Ok(3));
    assert_eq!(page_count(1.0, 1000.0), Ok(1));
}

#[test]
fn slices_cover_content_with_short_last_page() {
    let slices = page_slices(2500.0, 1000.0).expect("slices");
    let heights: Vec<f64> = slices.iter().map(|s| s.height_px).collect();
    let offsets: Vec<f64> = slices.iter().map(|s| s.offset_px).collect();
    assert_eq!(heights, [1000.0, 1000.0, 500.0]);
    assert_eq!(offsets, [0.0, 1000.0, 2000.0]);
    assert_eq!(slices.iter().map(|s| s.index).collect::<Vec<_>>(), [0, 1, 2]);
    assert!(approx_eq(heights.iter().sum(), 2500.0));
}

#[test]
fn exact_multiple_has_full_last_page() {
    let slices = page_slices(3000.0, 1000.0).expect("slices");
    assert_eq!(slices.len(), 3);
    assert_eq!(slices[2].height_px, 1000.0);
}

#[test]
fn invalid_heights_are_rejected() {
    assert_eq!(page_slices(0.0, 1000.0), Err(PaginateError::InvalidContentHeight(0.0)));
    assert_eq!(page_slices(100.0, -1.0), Err(PaginateError::InvalidPageHeight(-1.0)));
    assert!(page_slices(f64::NAN, 1000.0).is_err());
}

#[test]
fn page_count_is_capped() {
    assert_eq!(page_count(500_000.0, 1000.0), Ok(MAX_PAGES));
    assert!(matches!(page_count(500_001.0, 1000.0), Err(PaginateError::TooManyPages { .. })));
}

#[test]
fn extreme_ratio_is_an_error_not_an_allocation() {
    assert!(matches!(page_slices(1e12, 1e-12), Err(PaginateError::TooManyPages { .. })));
}

#[test]
fn image_offset_moves_up_one_page_each_slice() {
    let page = 1000.0;
    let slices = page_slices(2500.0, page).expect("slices");
    assert_eq!(slices[0].image_offset_mm(page), 0.0);
    assert!(approx_eq(slices[1].image_offset_mm(page), -A4_HEIGHT_MM));
    assert!(approx_eq(slices[2].image_offset_mm(page), -2.0 * A4_HEIGHT_MM));
}

#[test]
fn export_constants() {
    assert_eq!(PDF_SCALE, 2.0);
    assert_eq!(PDF_FILE_NAME, "resume.pdf");
}
