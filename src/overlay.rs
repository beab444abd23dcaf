use crate::constants::{READOUT_ID, READOUT_STYLE};
use wasm_bindgen::JsCast;
use web_sys as web;

/// On-page velocity readout used while tuning strike volumes.
pub struct Readout {
    el: web::HtmlElement,
}

impl Readout {
    /// Reuse an existing readout element or append a new one to `<body>`.
    pub fn attach(document: &web::Document) -> Option<Self> {
        if let Some(el) = document.get_element_by_id(READOUT_ID) {
            return el.dyn_into::<web::HtmlElement>().ok().map(|el| Self { el });
        }
        let body = document.body()?;
        let el = document
            .create_element("div")
            .ok()?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        el.set_id(READOUT_ID);
        _ = el.set_attribute("style", READOUT_STYLE);
        el.set_inner_text(&readout_text(0.0));
        _ = body.append_child(&el);
        Some(Self { el })
    }

    #[inline]
    pub fn update(&self, velocity: f64) {
        self.el.set_inner_text(&readout_text(velocity));
    }
}

#[inline]
pub fn readout_text(velocity: f64) -> String {
    format!("Velocity: {:.2} px/ms", velocity)
}
