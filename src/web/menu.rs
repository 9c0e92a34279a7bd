use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;

use super::dom::{self, ListenerBinding};
use crate::menu::{MenuState, ACTIVE_CLASS};
use crate::selectors::Hook;

pub(super) struct MenuWiring {
    _toggle: ListenerBinding,
    _links: Vec<ListenerBinding>,
}

/// Menu bindings, or `None` when the page has no toggle or link container.
pub(super) fn attach(document: &web_sys::Document) -> Result<Option<MenuWiring>, String> {
    let toggle = dom::query_first(document, Hook::MenuToggle.selector())?;
    let links = dom::query_first(document, Hook::MenuLinks.selector())?;

    // Both elements or no menu behavior at all.
    let (Some(toggle), Some(links)) = (toggle, links) else {
        return Ok(None);
    };

    let state = Rc::new(Cell::new(MenuState::default()));

    let cb = {
        let state = Rc::clone(&state);
        let toggle = toggle.clone();
        let links = links.clone();
        Closure::wrap(Box::new(move |_ev: web_sys::Event| {
            let next = state.get().toggled();
            state.set(next);
            apply_state(&toggle, &links, next);
        }) as Box<dyn FnMut(_)>)
    };
    let toggle_binding = ListenerBinding::attach(&toggle, "click", cb)?;

    let link_items = dom::query_all(document, Hook::MenuLinkItems.selector())?;
    let mut link_bindings = Vec::with_capacity(link_items.len());
    for item in link_items {
        let cb = {
            let state = Rc::clone(&state);
            let toggle = toggle.clone();
            let links = links.clone();
            Closure::wrap(Box::new(move |_ev: web_sys::Event| {
                let next = state.get().link_chosen();
                state.set(next);
                apply_state(&toggle, &links, next);
            }) as Box<dyn FnMut(_)>)
        };
        link_bindings.push(ListenerBinding::attach(&item, "click", cb)?);
    }

    Ok(Some(MenuWiring {
        _toggle: toggle_binding,
        _links: link_bindings,
    }))
}

fn apply_state(toggle: &web_sys::Element, links: &web_sys::Element, state: MenuState) {
    for element in [toggle, links] {
        let class_list = element.class_list();
        if state.is_expanded() {
            let _ = class_list.add_1(ACTIVE_CLASS);
        } else {
            let _ = class_list.remove_1(ACTIVE_CLASS);
        }
    }
}
