pub mod controls;
pub mod pointer;

pub use controls::wire_controls;
pub use pointer::{wire_input_handlers, InputWiring};

use crate::overlay;
use anamorph_core::{Orientation, Update};
use web_sys as web;

/// Mirror a controller update into the page.
pub fn reflect_update(document: &web::Document, orientation: Orientation, update: Update) {
    match update {
        Update::Ignored => {}
        Update::Moved => overlay::show_orientation(document, orientation),
        Update::Settled { revealed } => {
            overlay::show_orientation(document, orientation);
            overlay::set_revealed(document, revealed);
        }
    }
}
