use crate::constants::{AZIMUTH_INPUT_ID, GO_BUTTON_ID, POLAR_INPUT_ID};
use crate::dom;
use crate::events::reflect_update;
use crate::input;
use anamorph_core::OrientationController;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Read the target fields and ask the controller to animate there.
fn request_go(document: &web::Document, controller: &Rc<RefCell<OrientationController>>) {
    let az = dom::input_value(document, AZIMUTH_INPUT_ID);
    let polar = dom::input_value(document, POLAR_INPUT_ID);
    let target = input::target_from_fields(az.as_deref(), polar.as_deref());
    let (update, orientation) = {
        let mut c = controller.borrow_mut();
        (c.go(target), c.orientation())
    };
    reflect_update(document, orientation, update);
}

/// Go button plus Enter inside either target field.
pub fn wire_controls(document: &web::Document, controller: Rc<RefCell<OrientationController>>) {
    let doc_click = document.clone();
    let ctrl_click = controller.clone();
    dom::add_click_listener(document, GO_BUTTON_ID, move || {
        request_go(&doc_click, &ctrl_click);
    });

    for id in [AZIMUTH_INPUT_ID, POLAR_INPUT_ID] {
        let Some(el) = document.get_element_by_id(id) else {
            continue;
        };
        let doc_key = document.clone();
        let ctrl_key = controller.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                if ev.key() == "Enter" {
                    ev.prevent_default();
                    request_go(&doc_key, &ctrl_key);
                }
            }) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
