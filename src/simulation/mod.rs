pub mod simulation;
pub mod simulation_tests;

pub use simulation::OutputFormat;
pub use simulation::SimulationDriver;
