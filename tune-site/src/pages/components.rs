//! Shared header and footer
//!
//! Component files are fetched relative to the page (`./components/` at the
//! top level, `../components/` from a nested section) and written verbatim
//! into their placeholders. A failed fetch leaves the placeholder empty.

use tracing::{debug, error};

use crate::content::{resolve_reference, ContentSource};
use crate::render::Html;

use super::document::Document;

pub const HEADER_PLACEHOLDER: &str = "header-placeholder";
pub const FOOTER_PLACEHOLDER: &str = "footer-placeholder";
pub const HEADER_COMPONENT: &str = "hamburger_nav.html";
pub const FOOTER_COMPONENT: &str = "footer.html";
pub const COPYRIGHT_YEAR_ID: &str = "copyright-year";

/// Directory reference for component files as seen from `page_path`
pub fn component_base(page_path: &str) -> &'static str {
    if page_path.contains("/pages/") {
        "../components/"
    } else {
        "./components/"
    }
}

/// Inject header and footer; returns how many components were written
pub async fn inject_components(
    source: &dyn ContentSource,
    page_path: &str,
    doc: &mut Document,
    copyright_year: i32,
) -> usize {
    let mut injected = 0;

    if doc.has_id(HEADER_PLACEHOLDER) {
        if let Some(header) = load_component(source, page_path, HEADER_COMPONENT, "header").await {
            doc.fill_id(HEADER_PLACEHOLDER, &header);
            injected += 1;
        }
    }

    if doc.has_id(FOOTER_PLACEHOLDER) {
        if let Some(footer) = load_component(source, page_path, FOOTER_COMPONENT, "footer").await {
            doc.fill_id(FOOTER_PLACEHOLDER, &footer);
            doc.set_text_by_id(COPYRIGHT_YEAR_ID, &copyright_year.to_string());
            injected += 1;
        }
    }

    injected
}

async fn load_component(
    source: &dyn ContentSource,
    page_path: &str,
    file: &str,
    label: &str,
) -> Option<Html> {
    let reference = format!("{}{}", component_base(page_path), file);
    let path = resolve_reference(page_path, &reference);
    debug!("Loading {} from {}", label, path);

    match source.fetch(&path).await {
        Ok(bytes) => Some(Html::trusted(String::from_utf8_lossy(&bytes).into_owned())),
        Err(e) => {
            error!("Error loading {}: {} ({})", label, e, path);
            None
        }
    }
}
