/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Serialize;
use std::fmt;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Behaviour, Direction, Request, SystemStatus};

/***************************************/
/*       Public data structures        */
/***************************************/

/**
 * Snapshot of one elevator, taken once per step for the UI and the status printer.
 *
 * # Fields
 * - `id`:              Elevator id handed out by the id allocator.
 * - `floor`:           Current floor.
 * - `direction`:       `Stopped` while the door is open or the car is parked.
 * - `door_closed`:     False only while the door is open.
 * - `wait_timer`:      Ticks left of the door dwell or terminal dwell, 0 otherwise.
 * - `floor_requests`:  One flag per floor the car has to stop at.
 * - `out_of_service`:  Car has been withdrawn (parked, or on its way down).
 * - `waiting`:         A terminal dwell is in progress.
 * - `behaviour`:       The state machine tag the rest is derived from.
 */
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ElevatorReport {
    pub id: usize,
    pub floor: u8,
    pub direction: Direction,
    #[serde(rename = "doorClosed")]
    pub door_closed: bool,
    #[serde(rename = "waitTimer")]
    pub wait_timer: u8,
    #[serde(rename = "floorRequests")]
    pub floor_requests: Vec<bool>,
    #[serde(rename = "outOfService")]
    pub out_of_service: bool,
    pub waiting: bool,
    pub behaviour: Behaviour,
}

impl ElevatorReport {
    pub fn is_parked(&self) -> bool {
        self.behaviour == Behaviour::OutOfService
    }
}

impl fmt::Display for ElevatorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.out_of_service && self.is_parked() {
            return write!(f, "Out of Service[Floor {}]", self.floor);
        }
        if self.waiting && self.wait_timer > 0 {
            return write!(f, "Waiting[Floor {}, Time {}]", self.floor, self.wait_timer);
        }

        let door = if self.door_closed {
            "C  ".to_string()
        } else {
            format!("O{:>2}", self.wait_timer)
        };
        write!(f, "[{}|{}|{}]<", self.floor, self.direction, door)?;
        for (floor, requested) in self.floor_requests.iter().enumerate() {
            if *requested {
                write!(f, " {:>2}", floor)?;
            } else {
                f.write_str(" --")?;
            }
        }
        f.write_str(">")
    }
}

/// Building-wide snapshot: parameters, every elevator, and both pending queues.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BuildingReport {
    #[serde(rename = "numFloors")]
    pub n_floors: u8,
    #[serde(rename = "numElevators")]
    pub n_elevators: usize,
    #[serde(rename = "elevatorCapacity")]
    pub capacity: usize,
    #[serde(rename = "elevatorReports")]
    pub elevator_reports: Vec<ElevatorReport>,
    #[serde(rename = "upRequests")]
    pub up_requests: Vec<Request>,
    #[serde(rename = "downRequests")]
    pub down_requests: Vec<Request>,
    #[serde(rename = "systemStatus")]
    pub system_status: SystemStatus,
}

impl fmt::Display for BuildingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current Elevator Statuses:")?;
        for (index, report) in self.elevator_reports.iter().enumerate() {
            writeln!(f, "Elevator {}: {}", index, report)?;
        }
        write_requests(f, "Up Requests: ", &self.up_requests)?;
        write_requests(f, "Down Requests: ", &self.down_requests)
    }
}

fn write_requests(f: &mut fmt::Formatter<'_>, label: &str, requests: &[Request]) -> fmt::Result {
    f.write_str(label)?;
    if requests.is_empty() {
        return writeln!(f, "None");
    }
    for request in requests {
        write!(f, "{} ", request)?;
    }
    writeln!(f)
}
