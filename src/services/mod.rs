pub mod spawn_gate;
pub mod timer_service;

pub use spawn_gate::SpawnGate;
pub use timer_service::TimerService;
