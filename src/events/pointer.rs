use crate::audio::WebAudio;
use crate::constants::{EV_POINTER_DOWN, EV_POINTER_MOVE, EV_POINTER_OVER};
use crate::dom;
use crate::overlay::Readout;
use glass_core::{GlassEngine, WATCHED_SELECTOR};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub document: web::Document,
    pub engine: Rc<GlassEngine<WebAudio>>,
    /// Receives `--mouse-x/--mouse-y` when glint is enabled.
    pub glint_root: Option<web::HtmlElement>,
    pub readout: Option<Rc<Readout>>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointermove(&w);
    wire_pointerover(&w);
    wire_pointerdown(&w);
}

fn wire_pointermove(w: &PointerWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (x, y) = (ev.client_x(), ev.client_y());
        if let Some(root) = &w.glint_root {
            dom::set_glint(root, x, y);
        }
        let recomputed = w
            .engine
            .on_pointer_move(x as f64, y as f64, ev.time_stamp());
        if let (Some(v), Some(readout)) = (recomputed, &w.readout) {
            readout.update(v);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(EV_POINTER_MOVE, closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerover(w: &PointerWiring) {
    let w = w.clone();
    let document = w.document.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(surface) = dom::closest_surface(ev.target(), WATCHED_SELECTOR) else {
            return;
        };
        if !dom::entered_from_outside(&ev, &surface) {
            return;
        }
        w.engine.on_pointer_enter(dom::classify(&surface));
    }) as Box<dyn FnMut(_)>);

    _ = document.add_event_listener_with_callback(EV_POINTER_OVER, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub(crate) fn spawn_sample_load(engine: &Rc<GlassEngine<WebAudio>>) {
    log::info!("[gesture] audio unlocked; loading samples");
    let engine = engine.clone();
    spawn_local(async move {
        engine.load_samples().await;
    });
}

fn wire_pointerdown(w: &PointerWiring) {
    let w = w.clone();
    let document = w.document.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let target =
            dom::closest_surface(ev.target(), WATCHED_SELECTOR).and_then(|s| dom::classify(&s));
        let outcome = w.engine.on_pointer_press(target);
        if outcome.unlocked {
            spawn_sample_load(&w.engine);
        }
    }) as Box<dyn FnMut(_)>);

    _ = document.add_event_listener_with_callback(EV_POINTER_DOWN, closure.as_ref().unchecked_ref());
    closure.forget();
}
