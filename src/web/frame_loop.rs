use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::dom;
use crate::reveal::{MARKER_SELECTOR, SHOWN_STYLE};

/// Re-applies the shown style to every marked element once per display frame.
///
/// Each tick schedules only the next one, so cancelling (or dropping) the
/// handle stops the loop even when a frame is already pending.
pub(super) struct FrameLoop {
    state: Rc<LoopState>,
}

struct LoopState {
    raf_id: Cell<Option<i32>>,
    cancelled: Cell<bool>,
    // Taken on cancel to break the cycle state -> tick -> state.
    tick: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameLoop {
    pub(super) fn start(document: &web_sys::Document) -> Result<Self, String> {
        let window = dom::window()?;
        let state = Rc::new(LoopState {
            raf_id: Cell::new(None),
            cancelled: Cell::new(false),
            tick: RefCell::new(None),
        });

        let tick = {
            let window = window.clone();
            let document = document.clone();
            let state = Rc::clone(&state);
            Closure::wrap(Box::new(move |_timestamp: f64| {
                if state.cancelled.get() {
                    return;
                }
                apply_shown_styles(&document);
                schedule(&window, &state);
            }) as Box<dyn FnMut(f64)>)
        };
        *state.tick.borrow_mut() = Some(tick);

        // First application runs before the first scheduled frame.
        apply_shown_styles(document);
        schedule(&window, &state);

        Ok(Self { state })
    }

    pub(super) fn cancel(&self) {
        self.state.cancelled.set(true);
        if let Some(id) = self.state.raf_id.take() {
            if let Ok(window) = dom::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        self.state.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn schedule(window: &web_sys::Window, state: &LoopState) {
    let tick = state.tick.borrow();
    let Some(tick) = tick.as_ref() else {
        return;
    };
    match window.request_animation_frame(tick.as_ref().unchecked_ref()) {
        Ok(id) => state.raf_id.set(Some(id)),
        Err(_) => state.raf_id.set(None),
    }
}

fn apply_shown_styles(document: &web_sys::Document) {
    let Ok(marked) = dom::query_all(document, MARKER_SELECTOR) else {
        return;
    };
    for element in marked {
        dom::set_styles(&element, &SHOWN_STYLE);
    }
}
