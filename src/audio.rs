use glass_core::{AudioBackend, EngineState, LoadError, PlaybackError};
use js_sys::ArrayBuffer;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// `AudioContext`-backed playback for the glass samples.
pub struct WebAudio {
    ctx: web::AudioContext,
}

impl WebAudio {
    pub fn new() -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        log::info!("[audio] context created ({:?})", ctx.state());
        Ok(Self { ctx })
    }
}

#[inline]
fn js_reason(e: &JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

fn create_gain(audio_ctx: &web::AudioContext, value: f32) -> Result<web::GainNode, PlaybackError> {
    let g = web::GainNode::new(audio_ctx).map_err(|e| {
        log::error!("GainNode error: {:?}", e);
        PlaybackError(js_reason(&e))
    })?;
    _ = g.gain().set_value_at_time(value, audio_ctx.current_time());
    Ok(g)
}

impl AudioBackend for WebAudio {
    type Encoded = ArrayBuffer;
    type Buffer = web::AudioBuffer;

    fn state(&self) -> EngineState {
        match self.ctx.state() {
            web::AudioContextState::Suspended => EngineState::Suspended,
            _ => EngineState::Running,
        }
    }

    // A refused resume leaves the context suspended; the engine asks
    // again on the next gesture.
    fn resume(&self) {
        match self.ctx.resume() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("[audio] resume rejected: {}", js_reason(&e));
                }
            }),
            Err(e) => log::warn!("[audio] resume failed: {}", js_reason(&e)),
        }
    }

    async fn fetch(&self, url: &str) -> Result<ArrayBuffer, LoadError> {
        let window = web::window().ok_or_else(|| LoadError::Fetch("no window".into()))?;
        let resp = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(|e| LoadError::Fetch(js_reason(&e)))?;
        let resp: web::Response = resp
            .dyn_into()
            .map_err(|e| LoadError::Fetch(js_reason(&e)))?;
        if !resp.ok() {
            return Err(LoadError::Status(resp.status()));
        }
        let body = resp
            .array_buffer()
            .map_err(|e| LoadError::Fetch(js_reason(&e)))?;
        JsFuture::from(body)
            .await
            .and_then(|b| b.dyn_into::<ArrayBuffer>())
            .map_err(|e| LoadError::Fetch(js_reason(&e)))
    }

    async fn decode(&self, encoded: ArrayBuffer) -> Result<web::AudioBuffer, LoadError> {
        let promise = self
            .ctx
            .decode_audio_data(&encoded)
            .map_err(|e| LoadError::Decode(js_reason(&e)))?;
        JsFuture::from(promise)
            .await
            .and_then(|b| b.dyn_into::<web::AudioBuffer>())
            .map_err(|e| LoadError::Decode(js_reason(&e)))
    }

    // source -> gain -> destination, fresh nodes per strike
    fn play(&self, buffer: &web::AudioBuffer, volume: f32) -> Result<(), PlaybackError> {
        let source = self
            .ctx
            .create_buffer_source()
            .map_err(|e| PlaybackError(js_reason(&e)))?;
        source.set_buffer(Some(buffer));
        let gain = create_gain(&self.ctx, volume)?;
        source
            .connect_with_audio_node(&gain)
            .map_err(|e| PlaybackError(js_reason(&e)))?;
        gain.connect_with_audio_node(&self.ctx.destination())
            .map_err(|e| PlaybackError(js_reason(&e)))?;
        source.start().map_err(|e| PlaybackError(js_reason(&e)))
    }
}
