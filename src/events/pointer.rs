use crate::events::reflect_update;
use crate::input;
use anamorph_core::{OrientationController, Update};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub controller: Rc<RefCell<OrientationController>>,
}

/// Mouse and single-finger touch share this path through Pointer Events.
pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    for name in ["pointerup", "pointercancel"] {
        wire_drag_end(&w, name, true);
    }
    wire_drag_end(&w, "pointerleave", false);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !ev.is_primary() {
            return;
        }
        let pos = input::pointer_canvas_css(&ev, &w.canvas);
        let update = w.controller.borrow_mut().pointer_down(pos);
        if update != Update::Ignored {
            _ = w.canvas.set_pointer_capture(ev.pointer_id());
            log::debug!("[drag] begin at ({:.0},{:.0})", pos.x, pos.y);
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !ev.is_primary() {
            return;
        }
        let pos = input::pointer_canvas_css(&ev, &w.canvas);
        let (update, orientation) = {
            let mut c = w.controller.borrow_mut();
            (c.pointer_move(pos), c.orientation())
        };
        reflect_update(&w.document, orientation, update);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Pointer up/cancel are heard on the window, leave on the canvas.
fn wire_drag_end(w: &InputWiring, event_name: &'static str, on_window: bool) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !ev.is_primary() {
            return;
        }
        let (update, orientation) = {
            let mut c = w.controller.borrow_mut();
            (c.pointer_up(), c.orientation())
        };
        if update != Update::Ignored {
            _ = w.canvas.release_pointer_capture(ev.pointer_id());
            log::debug!("[drag] end on {}", event_name);
        }
        reflect_update(&w.document, orientation, update);
    }) as Box<dyn FnMut(_)>);

    if on_window {
        if let Some(wnd) = web::window() {
            _ = wnd.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
        }
    } else {
        _ = canvas_for_listener
            .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
