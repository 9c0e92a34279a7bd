use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub(super) fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or("no window".to_string())
}

pub(super) fn document() -> Result<web_sys::Document, String> {
    window()?.document().ok_or("no document".to_string())
}

/// First element matching `selector`; `Err` only for an invalid selector.
pub(super) fn query_first(
    document: &web_sys::Document,
    selector: &str,
) -> Result<Option<web_sys::Element>, String> {
    document
        .query_selector(selector)
        .map_err(|_| format!("dom: query_selector({selector:?}) threw"))
}

pub(super) fn query_all(
    document: &web_sys::Document,
    selector: &str,
) -> Result<Vec<web_sys::Element>, String> {
    let list = document
        .query_selector_all(selector)
        .map_err(|_| format!("dom: query_selector_all({selector:?}) threw"))?;

    let mut elements = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        let Some(node) = list.get(i) else { continue };
        if let Ok(element) = node.dyn_into::<web_sys::Element>() {
            elements.push(element);
        }
    }
    Ok(elements)
}

/// Applies inline style properties, skipping non-HTML elements.
pub(super) fn set_styles(element: &web_sys::Element, styles: &[(&str, &str)]) {
    let Some(html) = element.dyn_ref::<web_sys::HtmlElement>() else {
        return;
    };
    let style = html.style();
    for &(prop, value) in styles {
        let _ = style.set_property(prop, value);
    }
}

/// An installed event listener, removed again on drop so handlers never
/// outlive the wiring that created them.
pub(super) struct ListenerBinding {
    target: web_sys::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl ListenerBinding {
    pub(super) fn attach(
        target: &web_sys::EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut(web_sys::Event)>,
    ) -> Result<Self, String> {
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|_| format!("dom: add_event_listener({event}) threw"))?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for ListenerBinding {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
