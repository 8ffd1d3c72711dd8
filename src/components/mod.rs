pub mod app;
pub mod glow_marker;
pub mod progress_bar;
pub mod sound_toggle;
pub mod touch_glow;
pub mod welcome;
