//! PDF export of the resume page.
//!
//! ARCHITECTURE
//! ============
//! Rasterization and PDF assembly are delegated to the `html2canvas` and
//! `jsPDF` browser globals, loaded by script tags in the app shell. This module
//! only plans the page layout (via `resume::paginate`) and drives the two
//! libraries. Failures are reported to the user with an alert and never
//! retried.

#[cfg(test)]
#[path = "pdf_export_test.rs"]
mod pdf_export_test;

use resume::paginate::{self, A4_WIDTH_MM, PageSlice, PaginateError};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("nothing to export: element #{0} not found")]
    ElementMissing(String),
    #[error("rasterization failed: {0}")]
    Rasterize(String),
    #[error("pdf assembly failed: {0}")]
    Pdf(String),
    #[error(transparent)]
    Paginate(#[from] PaginateError),
    #[error("pdf export needs a browser")]
    Unsupported,
}

/// Placement of a rasterized image across A4 pages.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportPlan {
    pub page_height_px: f64,
    /// Full image height once scaled to the page width.
    pub image_height_mm: f64,
    pub slices: Vec<PageSlice>,
}

impl ExportPlan {
    /// # Errors
    ///
    /// [`PaginateError`] when the image has no area.
    pub fn for_image(width_px: f64, height_px: f64) -> Result<Self, PaginateError> {
        let page_height_px = paginate::page_height_px(width_px)?;
        let slices = paginate::page_slices(height_px, page_height_px)?;
        Ok(Self { page_height_px, image_height_mm: height_px * A4_WIDTH_MM / width_px, slices })
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.slices.len()
    }
}

/// User-facing message for a failed export.
#[must_use]
pub fn failure_message(err: &ExportError) -> String {
    format!("Could not export the resume as PDF. {err}")
}

/// Show a blocking browser alert.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                log::warn!("alert failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::warn!("{message}");
    }
}

#[cfg(feature = "hydrate")]
mod bindings {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_name = html2canvas, catch)]
        pub fn html2canvas(element: &web_sys::HtmlElement, options: &JsValue) -> Result<js_sys::Promise, JsValue>;

        #[wasm_bindgen(js_namespace = jspdf, js_name = jsPDF)]
        pub type JsPdf;

        #[wasm_bindgen(constructor, js_namespace = jspdf, js_class = "jsPDF", catch)]
        pub fn new(orientation: &str, unit: &str, format: &str) -> Result<JsPdf, JsValue>;

        #[wasm_bindgen(method, js_name = addImage, catch)]
        pub fn add_image(
            this: &JsPdf,
            data_url: &str,
            format: &str,
            x: f64,
            y: f64,
            width: f64,
            height: f64,
        ) -> Result<(), JsValue>;

        #[wasm_bindgen(method, js_name = addPage, catch)]
        pub fn add_page(this: &JsPdf) -> Result<(), JsValue>;

        #[wasm_bindgen(method, catch)]
        pub fn save(this: &JsPdf, file_name: &str) -> Result<(), JsValue>;
    }
}

/// Rasterize `#element_id` and download it as `resume.pdf`. Returns the page
/// count.
///
/// # Errors
///
/// Any [`ExportError`]; the caller alerts the user.
pub async fn export_element(element_id: &str) -> Result<usize, ExportError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::{JsCast, JsValue};

        let js_err = |e: JsValue| format!("{e:?}");

        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(element_id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            .ok_or_else(|| ExportError::ElementMissing(element_id.to_owned()))?;

        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"scale".into(), &paginate::PDF_SCALE.into())
            .map_err(|e| ExportError::Rasterize(js_err(e)))?;
        js_sys::Reflect::set(&options, &"useCORS".into(), &JsValue::TRUE)
            .map_err(|e| ExportError::Rasterize(js_err(e)))?;

        let promise = bindings::html2canvas(&element, &options).map_err(|e| ExportError::Rasterize(js_err(e)))?;
        let canvas: web_sys::HtmlCanvasElement = wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map_err(|e| ExportError::Rasterize(js_err(e)))?
            .dyn_into()
            .map_err(|e| ExportError::Rasterize(js_err(e)))?;

        let plan = ExportPlan::for_image(f64::from(canvas.width()), f64::from(canvas.height()))?;
        let image = canvas.to_data_url_with_type("image/png").map_err(|e| ExportError::Rasterize(js_err(e)))?;

        let pdf = bindings::JsPdf::new("p", "mm", "a4").map_err(|e| ExportError::Pdf(js_err(e)))?;
        for slice in &plan.slices {
            if slice.index > 0 {
                pdf.add_page().map_err(|e| ExportError::Pdf(js_err(e)))?;
            }
            pdf.add_image(
                &image,
                "PNG",
                0.0,
                slice.image_offset_mm(plan.page_height_px),
                A4_WIDTH_MM,
                plan.image_height_mm,
            )
            .map_err(|e| ExportError::Pdf(js_err(e)))?;
        }
        pdf.save(paginate::PDF_FILE_NAME).map_err(|e| ExportError::Pdf(js_err(e)))?;
        log::info!("exported {} page(s) to {}", plan.page_count(), paginate::PDF_FILE_NAME);
        Ok(plan.page_count())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = element_id;
        Err(ExportError::Unsupported)
    }
}
