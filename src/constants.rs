// DOM-side names used by the web front end.
// Selectors and class matchers live in `glass_core`; these are the hooks
// the page exposes to us and the ones we publish back.

// Glint custom properties on the document root
pub const CSS_MOUSE_X: &str = "--mouse-x";
pub const CSS_MOUSE_Y: &str = "--mouse-y";

// Config attributes are read from <html data-glass-*>
pub const CONFIG_ATTR_PREFIX: &str = "data-glass-";

// Calibration readout
pub const READOUT_ID: &str = "glass-calibration";
pub const READOUT_STYLE: &str = "position:fixed;top:10px;right:10px;padding:10px;\
background:rgba(0,0,0,0.8);color:#0f0;font-family:monospace;z-index:9999;\
font-size:12px;pointer-events:none;border-radius:4px;";

// Event names wired on window/document
pub const EV_POINTER_MOVE: &str = "pointermove";
pub const EV_POINTER_OVER: &str = "pointerover";
pub const EV_POINTER_DOWN: &str = "pointerdown";
pub const EV_KEY_DOWN: &str = "keydown";
