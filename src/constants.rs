// Shared map constants

// Property keys probed on each feature, in priority order
pub const ALPHA2_KEYS: &[&str] = &["ISO_A2", "iso_a2", "A2", "a2"];
pub const ALPHA3_KEYS: &[&str] = &["ISO_A3", "iso_a3", "A3", "a3"];
pub const NAME_KEYS: &[&str] = &["NAME_LONG", "ADMIN", "NAME", "name"];

// Band boundaries, inclusive on the lower bound of the higher band
pub const MEDIUM_BAND_MIN: f64 = 40.0;
pub const HIGH_BAND_MIN: f64 = 60.0;

// Fill colors
pub const NO_DATA_COLOR: &str = "#e9ecef";
pub const LOW_COLOR: &str = "#fa5252";
pub const MEDIUM_COLOR: &str = "#fab005";
pub const HIGH_COLOR: &str = "#12b886";

// Interaction paint
pub const HOVER_FILL: &str = "#228be6";
pub const PRESSED_FILL: &str = "#1971c2";
pub const STROKE_COLOR: &str = "#fff";
pub const STROKE_WIDTH: f64 = 0.3;

// Log target for hover/click tracing
pub const LOG_TARGET: &str = "readiness_map";
