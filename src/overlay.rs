use web_sys as web;

pub const STATUS_ID: &str = "loading";
pub const TITLE_ID: &str = "overlay";

pub const STATUS_LOADING: &str = "Initializing Studio...";
pub const STATUS_READY: &str = "Studio Ready. Click Keys.";

#[inline]
pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document, id: &str) -> bool {
    if let Some(el) = document.get_element_by_id(id) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}

#[inline]
pub fn toggle(document: &web::Document, id: &str) {
    if is_hidden(document, id) {
        show(document, id);
    } else {
        hide(document, id);
    }
}

pub fn set_status(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(STATUS_ID) {
        el.set_text_content(Some(text));
    }
    show(document, STATUS_ID);
}

/// Title line naming the instrument in front.
pub fn set_title(document: &web::Document, instrument: &str) {
    if let Some(el) = document.get_element_by_id(TITLE_ID) {
        el.set_inner_html(&format!(
            "<div style='color: #cfe7ff; font: 14px system-ui; background: rgba(10, 14, 24, 0.8); padding: 8px 12px; border-radius: 6px; border: 1px solid rgba(80, 110, 150, 0.35);'>{} &middot; Click to play &middot; Double-click for next &middot; Drag to Rotate &bull; Scroll to Zoom</div>",
            instrument
        ));
    }
}

/// Terminal state: the stage could not start.
pub fn show_fatal(document: &web::Document, err: &anyhow::Error) {
    set_status(document, &format!("Unable to start: {}", err));
}
