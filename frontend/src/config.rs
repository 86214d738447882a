use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Scroll animator
pub const NAV_SCROLL_DURATION_MS: f64 = 800.0;
pub const SCROLL_TOP_DURATION_MS: f64 = 600.0;
pub const MIN_SCROLL_DISTANCE_PX: f64 = 1.0;
pub const SECTION_FOCUS_DELAY_MS: u32 = 850;
pub const SECTION_FOCUS_HOLD_MS: u32 = 900;
pub const SECTION_FOCUS_CLASS: &str = "section-focus";
pub const NAVBAR_SELECTOR: &str = ".navbar";

// Navbar and scroll-to-top thresholds
pub const NAVBAR_SCROLLED_AFTER_PX: f64 = 50.0;
pub const SCROLL_TOP_VISIBLE_AFTER_PX: f64 = 300.0;

// Chat demo pacing
pub const CHAT_MESSAGE_SPACING_MS: u32 = 1500;
pub const CHAT_TYPING_MS: u32 = 1200;
pub const CHAT_TYPING_FILE_MS: u32 = 1500;
pub const CHAT_UPLOAD_MS: u32 = 2800;
pub const CHAT_PAGE_SETTLE_MS: u32 = 1500;
pub const CHAT_HERO_SETTLE_MS: u32 = 500;
pub const CHAT_HERO_VISIBLE_RATIO: f64 = 0.5;

// Fade-in reveal
pub const FADE_IN_SELECTOR: &str = ".fade-in";
pub const FADE_IN_THRESHOLD: f64 = 0.1;
pub const FADE_IN_ROOT_MARGIN: &str = "0px 0px -80px 0px";
pub const FADE_IN_STAGGER_MS: u32 = 100;

// Statistics counters
pub const COUNTER_DURATION_MS: f64 = 1500.0;
pub const COUNTER_STAGGER_MS: u32 = 150;
pub const COUNTER_VISIBLE_RATIO: f64 = 0.5;

// Page entrance once the window has loaded
pub const PAGE_ENTRANCE_OFFSET_PX: f64 = 20.0;
pub const PAGE_ENTRANCE_DURATION_S: f64 = 0.6;
pub const PAGE_ENTRANCE_EASING: &str = "cubic-bezier(0.4, 0, 0.2, 1)";

// Broken image replacement
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://via.placeholder.com/600x400/007AFF/FFFFFF?text=Image+Not+Found";
pub const PLACEHOLDER_IMAGE_ALT: &str = "Image not found";
