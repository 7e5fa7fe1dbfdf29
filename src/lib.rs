pub mod config;
pub mod console;
pub mod coordinator;
pub mod elevator;
pub mod shared;
pub mod simulation;
