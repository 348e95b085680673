pub mod frame_loop;
pub mod transition;

pub use frame_loop::FrameLoop;
pub use transition::AnimatedValue;
