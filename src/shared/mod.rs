pub mod errors;
pub mod macros;
pub mod report;
pub mod structs;

pub use errors::BuildingError;
pub use errors::ElevatorError;
pub use report::BuildingReport;
pub use report::ElevatorReport;
pub use structs::Behaviour;
pub use structs::Direction;
pub use structs::Request;
pub use structs::SystemStatus;
