use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

fn get_window() -> Option<Window> {
    web_sys::window()
}

fn get_document() -> Option<Document> {
    get_window().and_then(|w| w.document())
}

pub fn set_title(text: &str) {
    if let Some(d) = get_document() {
        d.set_title(text);
    }
}

pub fn query_selector(selectors: &str) -> Option<Element> {
    get_document().and_then(|d| d.query_selector(selectors).ok()).flatten()
}

pub fn get_html_element(el: Option<Element>) -> Option<HtmlElement> {
    el.and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn focus_input(name: &str) {
    if let Some(elem) = get_html_element(query_selector(&format!("[name={name}]"))) {
        elem.focus().ok();
    }
}

/// Path component of an absolute url, `/` when it cannot be parsed.
pub fn url_path(url: &str) -> String {
    web_sys::Url::new(url).map(|u| u.pathname()).unwrap_or_else(|_| "/".to_string())
}
