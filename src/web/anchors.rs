use wasm_bindgen::closure::Closure;

use super::dom::{self, ListenerBinding};
use crate::anchors::resolve;
use crate::selectors::Hook;

/// One click binding per fragment link on the page.
pub(super) fn attach(document: &web_sys::Document) -> Result<Vec<ListenerBinding>, String> {
    let anchors = dom::query_all(document, Hook::AnchorLinks.selector())?;

    let mut bindings = Vec::with_capacity(anchors.len());
    for anchor in anchors {
        let cb = {
            let document = document.clone();
            let link = anchor.clone();
            Closure::wrap(Box::new(move |ev: web_sys::Event| {
                // Default navigation is suppressed before resolving; a
                // dangling link consumes the click and then raises.
                ev.prevent_default();
                let href = link.get_attribute("href").unwrap_or_default();
                if let Err(e) = scroll_to_fragment(&document, &href) {
                    wasm_bindgen::throw_str(&e);
                }
            }) as Box<dyn FnMut(_)>)
        };
        bindings.push(ListenerBinding::attach(&anchor, "click", cb)?);
    }
    Ok(bindings)
}

fn scroll_to_fragment(document: &web_sys::Document, href: &str) -> Result<(), String> {
    let id = resolve(href, |id| document.get_element_by_id(id).is_some())?;
    let Some(target) = document.get_element_by_id(id) else {
        return Err(format!("anchor: no element for {href:?}"));
    };

    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}
