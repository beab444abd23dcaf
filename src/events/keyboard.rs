use crate::audio::WebAudio;
use crate::constants::EV_KEY_DOWN;
use crate::events::pointer::spawn_sample_load;
use glass_core::GlassEngine;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

// Keyboard-only visitors unlock audio with their first key press.
pub fn wire_keydown_unlock(engine: Rc<GlassEngine<WebAudio>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::KeyboardEvent| {
        if engine.on_key_press().unlocked {
            spawn_sample_load(&engine);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(EV_KEY_DOWN, closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
