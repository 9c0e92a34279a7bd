use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::dom;
use crate::reveal::{HIDDEN_STYLE, INTERSECTION_THRESHOLD, MARKER_CLASS};
use crate::selectors::Hook;

/// Viewport watcher that marks elements once they become visible.
pub(super) struct RevealWiring {
    observer: web_sys::IntersectionObserver,
    // Kept alive for as long as the observer can call it.
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

impl RevealWiring {
    pub(super) fn attach(document: &web_sys::Document) -> Result<Self, String> {
        let targets = dom::query_all(document, Hook::RevealTargets.selector())?;

        // Start hidden, with the transition registered so marking animates.
        for target in &targets {
            dom::set_styles(target, &HIDDEN_STYLE);
        }

        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        // Idempotent, and never removed afterwards.
                        let _ = entry.target().class_list().add_1(MARKER_CLASS);
                    }
                }
            },
        ) as Box<dyn FnMut(_, _)>);

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(INTERSECTION_THRESHOLD));

        let observer = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|_| "reveal: IntersectionObserver::new threw".to_string())?;

        for target in &targets {
            observer.observe(target);
        }

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealWiring {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
