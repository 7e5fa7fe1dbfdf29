/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*            Error types              */
/***************************************/

/// Failures reported to whoever drives the building.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildingError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("illegal state: {0}")]
    IllegalState(String),
}

/// Reasons a single elevator turns down a batch. The coordinator absorbs these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElevatorError {
    #[error("elevator {0} is not accepting requests")]
    NotAcceptingRequests(usize),
    #[error("batch of {size} requests exceeds capacity {capacity}")]
    BatchTooLarge { size: usize, capacity: usize },
    #[error("request {0} does not fit this elevator")]
    InvalidRequest(String),
}
