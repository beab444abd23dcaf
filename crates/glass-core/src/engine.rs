use crate::backend::{AudioBackend, EngineState};
use crate::config::GlassConfig;
use crate::error::ConfigError;
use crate::motion::MotionTracker;
use crate::sample::{SampleName, SampleStore};
use crate::strike::{StrikeEvent, SurfaceCategory};
use std::cell::{Cell, RefCell};

/// What a press (pointer or key) did.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PressOutcome {
    /// The haptic tink, when the press landed on a button-like surface.
    pub tink: Option<StrikeEvent>,
    /// This was the first unlocking gesture. The caller must now run
    /// [`GlassEngine::load_samples`] on its executor.
    pub unlocked: bool,
}

/// Everything the glass effects share, constructed once per page.
///
/// Owns the sample store, the motion tracker and the gesture latch; the
/// strike dispatch methods only read from them. All state lives on one
/// thread, so plain `Cell`/`RefCell` is enough.
pub struct GlassEngine<B: AudioBackend> {
    backend: B,
    config: GlassConfig,
    samples: SampleStore<B::Buffer>,
    motion: RefCell<MotionTracker>,
    unlocked: Cell<bool>,
}

impl<B: AudioBackend> GlassEngine<B> {
    pub fn new(backend: B, config: GlassConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let samples = SampleStore::new(config.firm_source.clone(), config.soft_source.clone());
        let motion = RefCell::new(MotionTracker::new(config.min_sample_interval_ms));
        Ok(Self {
            backend,
            config,
            samples,
            motion,
            unlocked: Cell::new(false),
        })
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn config(&self) -> &GlassConfig {
        &self.config
    }

    pub fn samples(&self) -> &SampleStore<B::Buffer> {
        &self.samples
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked.get()
    }

    pub fn engine_state(&self) -> EngineState {
        self.backend.state()
    }

    // ---------------- Motion ----------------

    pub fn on_pointer_move(&self, x: f64, y: f64, timestamp_ms: f64) -> Option<f64> {
        self.motion.borrow_mut().on_move(x, y, timestamp_ms)
    }

    pub fn current_velocity(&self) -> f64 {
        self.motion.borrow().current_velocity()
    }

    // ---------------- Strikes ----------------

    /// Pointer entered a surface. Unwatched surfaces are ignored.
    pub fn on_pointer_enter(&self, target: Option<SurfaceCategory>) -> Option<StrikeEvent> {
        let category = target?;
        let strike =
            StrikeEvent::for_surface(category, self.current_velocity(), &self.config.tuning);
        log::debug!("[strike] {} | vol {:.2}", strike.sample, strike.volume);
        self.playback(strike.sample, strike.volume);
        Some(strike)
    }

    /// Pointer pressed. Button-like surfaces tink at a fixed volume; a
    /// press on any watched surface is an unlocking gesture.
    pub fn on_pointer_press(&self, target: Option<SurfaceCategory>) -> PressOutcome {
        let tink = target
            .filter(|c| c.is_button_like())
            .map(|_| {
                let strike = StrikeEvent::tink(&self.config.tuning);
                self.playback(strike.sample, strike.volume);
                strike
            });

        let qualifies = target.is_some() || self.config.unlock_on_any_press;
        let unlocked = qualifies && self.unlock();
        PressOutcome { tink, unlocked }
    }

    /// A key press. Always an unlocking gesture, never a strike.
    pub fn on_key_press(&self) -> PressOutcome {
        PressOutcome {
            tink: None,
            unlocked: self.unlock(),
        }
    }

    // Resume while the engine still reports Suspended, so a gesture the
    // platform refused is retried on the next one. Returns true only for
    // the first gesture, which is the one that starts the sample load.
    fn unlock(&self) -> bool {
        if self.backend.state() == EngineState::Suspended {
            log::info!("[gesture] resuming audio engine");
            self.backend.resume();
        }
        !self.unlocked.replace(true)
    }

    /// Play `name` at `volume` on a fresh voice. Returns whether a voice
    /// was started; a sample that is not loaded yet is a silent no-op.
    pub fn playback(&self, name: SampleName, volume: f32) -> bool {
        let Some(buffer) = self.samples.get(name) else {
            log::trace!("[strike] {} not loaded; skipping", name);
            return false;
        };
        match self.backend.play(&buffer, volume) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("[strike] {}: {}", name, e);
                false
            }
        }
    }

    pub async fn load_samples(&self) {
        self.samples.load(&self.backend).await;
    }
}
