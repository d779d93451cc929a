use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

pub(crate) fn document() -> Result<Document, String> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| "document unavailable".to_string())
}

pub(crate) fn query_document(selector: &str) -> Result<Element, String> {
    query(document()?.document_element().as_ref(), selector)
}

pub(crate) fn query_in(root: &Element, selector: &str) -> Result<Element, String> {
    query(Some(root), selector)
}

fn query(root: Option<&Element>, selector: &str) -> Result<Element, String> {
    let root = root.ok_or_else(|| "document has no root element".to_string())?;
    root.query_selector(selector)
        .map_err(|_| format!("invalid selector {selector}"))?
        .ok_or_else(|| format!("missing element {selector}"))
}

pub(crate) fn cast<T: JsCast>(element: Element, selector: &str) -> Result<T, String> {
    element
        .dyn_into::<T>()
        .map_err(|_| format!("unexpected element kind at {selector}"))
}

pub(crate) fn query_cast<T: JsCast>(root: &Element, selector: &str) -> Result<T, String> {
    cast(query_in(root, selector)?, selector)
}
