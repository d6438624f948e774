pub mod duration;
pub mod window;

pub use duration::{DurationUnit, EngagementDuration};
pub use window::{requested_span, AvailabilityWindow};
