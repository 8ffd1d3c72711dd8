pub mod timers;
pub mod touch;

pub use timers::Timers;
pub use touch::{changed_samples, mouse_sample, surface_origin};
