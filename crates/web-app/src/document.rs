use fitlog_domain::Page;
use log::error;

pub const PAGE_ATTRIBUTE: &str = "data-page";

/// Mirrors the current page into the page-state tag of the document root.
pub fn set_page_state(page: Page) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        error!("failed to set page state: document root not found");
        return;
    };

    if let Err(err) = root.set_attribute(PAGE_ATTRIBUTE, page.as_ref()) {
        error!("failed to set page state: {err:?}");
    }
}
