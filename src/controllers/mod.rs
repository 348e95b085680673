pub mod input_tracker;
pub mod responsive;

pub use input_tracker::InputTracker;
pub use responsive::{ResponsiveController, ResponsiveState, ResponsiveTransition};
