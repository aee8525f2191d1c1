use crate::constants::*;
use crate::dom;
use anamorph_core::Orientation;
use web_sys as web;

/// Mirror the current orientation to the desktop and mobile readouts.
pub fn show_orientation(document: &web::Document, o: Orientation) {
    let (az, polar) = o.rounded();
    let az = format!("{}°", az);
    let polar = format!("{}°", polar);
    for id in AZIMUTH_DISPLAY_IDS {
        dom::set_text(document, id, &az);
    }
    for id in POLAR_DISPLAY_IDS {
        dom::set_text(document, id, &polar);
    }
}

#[inline]
pub fn set_revealed(document: &web::Document, revealed: bool) {
    dom::set_class(document, SECRET_MESSAGE_ID, REVEALED_CLASS, revealed);
}

/// Hide the loading indicator and enable the Go controls.
pub fn show_ready(document: &web::Document) {
    dom::set_class(document, LOADING_ID, HIDDEN_CLASS, true);
    dom::set_class(document, CONTROLS_ID, HIDDEN_CLASS, false);
    for id in [AZIMUTH_INPUT_ID, POLAR_INPUT_ID, GO_BUTTON_ID] {
        dom::set_disabled(document, id, false);
    }
}

/// Controls stay inert until both clouds exist.
pub fn show_loading(document: &web::Document) {
    dom::set_class(document, LOADING_ID, HIDDEN_CLASS, false);
    for id in [AZIMUTH_INPUT_ID, POLAR_INPUT_ID, GO_BUTTON_ID] {
        dom::set_disabled(document, id, true);
    }
}
