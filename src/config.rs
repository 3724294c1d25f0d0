//! Fixed configuration for the kiosk build

/// Operator password for the /admin screen. A per-event configuration
/// constant, not a secret: rotate it when building for a new show.
pub const ADMIN_PASSWORD: &str = "advw50x";

/// How long wrong-input feedback stays on screen
pub const FLASH_MS: u32 = 600;

/// Pause on the completed board before moving to the success screen
pub const SUCCESS_DELAY_MS: u32 = 900;

/// Pause after a refused admin attempt before returning to the splash
pub const REFUSAL_REDIRECT_MS: u32 = 1200;
