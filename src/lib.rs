#![cfg(target_arch = "wasm32")]
use glass_core::{GlassConfig, GlassEngine};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod overlay;

fn load_config(document: &web::Document) -> GlassConfig {
    match dom::read_config(document) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            GlassConfig::default()
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("glass-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = load_config(&document);
    log::info!(
        "[config] scale={} vol=[{:.2},{:.2}] tink={:.2} min_dt={}ms",
        config.tuning.scale_factor,
        config.tuning.min_volume,
        config.tuning.max_volume,
        config.tuning.tink_volume,
        config.min_sample_interval_ms
    );

    let glint_root = if config.glint {
        dom::root_element(&document)
    } else {
        None
    };
    let readout = if config.calibration {
        overlay::Readout::attach(&document).map(Rc::new)
    } else {
        None
    };

    // Context starts suspended until the first qualifying press
    let backend = audio::WebAudio::new()?;
    let engine = Rc::new(GlassEngine::new(backend, config)?);

    events::wire_keydown_unlock(engine.clone());
    events::wire_pointer_handlers(events::PointerWiring {
        document,
        engine,
        glint_root,
        readout,
    });

    Ok(())
}
