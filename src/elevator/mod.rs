pub mod fsm;
pub mod id_allocator;

pub use fsm::ElevatorFSM;
pub use fsm::{DOOR_OPEN_TICKS, TERMINAL_WAIT_TICKS};
pub use id_allocator::ElevatorIdAllocator;
