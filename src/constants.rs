/// Page wiring and timing constants for the web front-end.
///
/// Element ids and class names mirror the site markup; keeping them here
/// keeps string literals out of the wiring code.
// Trail canvas (first <canvas> on the page)
pub const TRAIL_CANVAS_SELECTOR: &str = "canvas";

// Frame loop
pub const FRAME_GAP_LOG_MS: f64 = 250.0; // gaps above this are logged, never clamped

// Navbar
pub const NAV_MENU_ID: &str = "nav-menu";
pub const NAV_TOGGLE_ID: &str = "nav-toggle";
pub const NAV_CLOSE_ID: &str = "nav-close";
pub const NAV_SHOW_CLASS: &str = "show-menu";

// Hero slider
pub const HERO_SLIDER_ID: &str = "hero-slider";
pub const HERO_SLIDE_SELECTOR: &str = ".hero-slide";
pub const SLIDE_ACTIVE_CLASS: &str = "active";
pub const SLIDE_INTERVAL_MS: i32 = 4000;
pub const TRANSLATE_SLIDE_COUNT: usize = 2; // translate-style slider has two panels

// Scroll reveal
pub const TIMELINE_SELECTOR: &str = ".timeline__component";
pub const TIMELINE_SHOW_CLASS: &str = "show";
pub const FOOTER_COL_SELECTOR: &str = ".footer-col";
