use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::view::{self, Node};

/// Replace `container`'s children with the rendered `nodes`.
pub fn mount(document: &Document, container: &Element, nodes: &[Node]) -> Result<(), JsValue> {
    container.set_text_content(None);
    for node in nodes {
        container.append_child(&build(document, node)?)?;
    }
    Ok(())
}

fn build(document: &Document, node: &Node) -> Result<web_sys::Node, JsValue> {
    match node {
        Node::Text(t) => Ok(document.create_text_node(t).into()),
        Node::Element(view::Element {
            tag,
            attrs,
            children,
        }) => {
            let el = document.create_element(tag)?;
            for (name, value) in attrs {
                el.set_attribute(name, value)?;
            }
            for child in children {
                el.append_child(&build(document, child)?)?;
            }
            Ok(el.into())
        }
    }
}

pub fn query_all(root: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}

pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    let found = document.get_element_by_id(id).and_then(|el| el.dyn_into::<T>().ok());
    if found.is_none() {
        log::debug!("#{id} not on this page");
    }
    found
}

pub fn set_shown(el: &Element, shown: bool) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        let display = if shown { "" } else { "none" };
        if let Err(e) = el.style().set_property("display", display) {
            log::warn!("could not set display: {e:?}");
        }
    }
}
