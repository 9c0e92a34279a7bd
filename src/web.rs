use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::selectors::{self, HookSpec};

mod anchors;
mod dom;
mod frame_loop;
mod menu;
mod reveal;

thread_local! {
    static WIRING: std::cell::RefCell<Option<PageWiring>> =
        const { std::cell::RefCell::new(None) };
}

/// Entry point: waits for the document to finish parsing, installs the page
/// wiring, and hooks teardown to `pagehide`.
pub fn start() {
    console_error_panic_hook::set_once();

    if let Err(e) = install() {
        report(&e);
    }
}

fn install() -> Result<(), String> {
    let document = dom::document()?;

    // Hooks are queried exactly once, so the parser must be done first.
    if document.ready_state() == "loading" {
        let cb = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
            if let Err(e) = attach_and_retain() {
                report(&e);
            }
        }) as Box<dyn FnMut(_)>);
        document
            .add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref())
            .map_err(|_| "document: add_event_listener threw".to_string())?;
        cb.forget();
        return Ok(());
    }

    attach_and_retain()
}

fn attach_and_retain() -> Result<(), String> {
    let document = dom::document()?;
    let wiring = PageWiring::attach(&document, &selectors::default_hooks())?;
    WIRING.with(|slot| *slot.borrow_mut() = Some(wiring));
    install_teardown_hook()
}

/// Everything attach acquires, released together when dropped: listeners are
/// removed, the viewport watcher disconnects and the frame loop stops.
struct PageWiring {
    _anchors: Vec<dom::ListenerBinding>,
    _reveal: reveal::RevealWiring,
    _frame_loop: frame_loop::FrameLoop,
    _menu: Option<menu::MenuWiring>,
}

impl PageWiring {
    fn attach(document: &web_sys::Document, hooks: &[HookSpec]) -> Result<Self, String> {
        let missing = selectors::missing_required(hooks, |spec| {
            matches!(dom::query_first(document, spec.selector), Ok(Some(_)))
        });
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|spec| spec.selector).collect();
            return Err(format!("missing required hooks: {}", names.join(", ")));
        }

        Ok(Self {
            _anchors: anchors::attach(document)?,
            _reveal: reveal::RevealWiring::attach(document)?,
            _frame_loop: frame_loop::FrameLoop::start(document)?,
            _menu: menu::attach(document)?,
        })
    }
}

fn install_teardown_hook() -> Result<(), String> {
    let window = dom::window()?;

    let cb = Closure::wrap(Box::new(move |ev: web_sys::PageTransitionEvent| {
        // A page headed for the back/forward cache keeps its wiring.
        if ev.persisted() {
            return;
        }
        WIRING.with(|slot| slot.borrow_mut().take());
    }) as Box<dyn FnMut(_)>);
    window
        .add_event_listener_with_callback("pagehide", cb.as_ref().unchecked_ref())
        .map_err(|_| "window: add_event_listener threw".to_string())?;
    cb.forget();
    Ok(())
}

fn report(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(&format!("sitewire: {message}")));
}
