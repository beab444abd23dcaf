// Shared tuning constants and asset locations for the glass effects.

// Sample sources (served next to the theme's static assets)
pub const FIRM_SAMPLE_URL: &str = "/audio/glass-firm.wav";
pub const SOFT_SAMPLE_URL: &str = "/audio/glass-soft.wav";

// Surface matcher classes
pub const LOGO_CLASS: &str = "logo-glass-wrap";
pub const BUTTON_CLASSES: [&str; 2] = ["glass-button", "back-to-top"];

// Selector for event delegation over every watched surface
pub const WATCHED_SELECTOR: &str = ".logo-glass-wrap, .glass-button, .back-to-top";

// "Calibrated" tuning (the later, debug-assisted iteration)
pub const CALIBRATED_SCALE: f64 = 0.1; // px/ms -> gain
pub const CALIBRATED_MIN_VOLUME: f32 = 0.01;
pub const CALIBRATED_MAX_VOLUME: f32 = 0.25;
pub const CALIBRATED_MIN_INTERVAL_MS: f64 = 10.0; // drop oversampled pointer moves

// "Gentle" tuning (the first iteration)
pub const GENTLE_SCALE: f64 = 0.05;
pub const GENTLE_MIN_VOLUME: f32 = 0.02; // ghostly
pub const GENTLE_MAX_VOLUME: f32 = 0.2; // clear clink
pub const GENTLE_MIN_INTERVAL_MS: f64 = 0.0;

// Fixed volume of the haptic "tink" on press
pub const TINK_VOLUME: f32 = 0.05;
