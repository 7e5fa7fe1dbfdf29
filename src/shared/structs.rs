/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Stopped,
}

impl Direction {
    pub fn symbol(&self) -> &'static str {
        match *self {
            Direction::Up => "^",
            Direction::Down => "v",
            Direction::Stopped => "-",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/**
 * What an elevator is doing right now.
 *
 * Timers count remaining ticks. A withdrawn elevator that has not yet parked keeps
 * its current behaviour while it finishes the cycle and heads for the ground floor.
 */
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behaviour {
    #[serde(rename = "outOfService")]
    OutOfService,
    #[serde(rename = "waitingAtGround")]
    WaitingAtGround { timer: u8 },
    #[serde(rename = "waitingAtTop")]
    WaitingAtTop { timer: u8 },
    #[serde(rename = "moving")]
    Moving,
    #[serde(rename = "doorOpen")]
    DoorOpen { timer: u8 },
}

/**
 * A single ride from one floor to another.
 *
 * Requests carry no validation of their own: the coordinator checks the floors
 * against the building before queueing them.
 */
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    #[serde(rename = "startFloor")]
    pub start_floor: u8,
    #[serde(rename = "endFloor")]
    pub end_floor: u8,
}

impl Request {
    pub fn new(start_floor: u8, end_floor: u8) -> Request {
        Request {
            start_floor,
            end_floor,
        }
    }

    pub fn direction(&self) -> Direction {
        if self.start_floor < self.end_floor {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}->{}]", self.start_floor, self.end_floor)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemStatus {
    #[serde(rename = "outOfService")]
    OutOfService,
    #[serde(rename = "running")]
    Running,
    #[serde(rename = "stopping")]
    Stopping,
}

impl fmt::Display for SystemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SystemStatus::OutOfService => f.write_str("out of service"),
            SystemStatus::Running => f.write_str("running"),
            SystemStatus::Stopping => f.write_str("stopping"),
        }
    }
}
