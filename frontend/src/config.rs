use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose carousel tracing when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Fraction of a testimonial card that has to be inside the carousel
/// viewport before it counts as visible.
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

/// Simulated latency of the testimonial provider.
pub const TESTIMONIAL_LOAD_DELAY_MS: u32 = 500;

/// Skeleton cards rendered while testimonials are loading.
pub const PLACEHOLDER_COUNT: usize = 3;

/// Pixels the window has to scroll before the header gets its backdrop.
pub const HEADER_SCROLL_THRESHOLD: f64 = 10.0;

pub const SIGN_UP_MESSAGE: &str = "This would redirect to the Clerk Sign Up page.";
