use crate::shared::{Behaviour, Direction, ElevatorError, ElevatorReport, Request};
use log::{debug, info};

/// Ticks an elevator dwells at the ground or top floor before setting off again.
pub const TERMINAL_WAIT_TICKS: u8 = 5;

/// Ticks the door stays open at a stop.
pub const DOOR_OPEN_TICKS: u8 = 3;

/**
 * Step driven state machine for a single elevator car.
 *
 * The `ElevatorFSM` shuttles between the ground floor and the top floor. It dwells
 * at each end, picks up a batch of requests while dwelling, and opens its door at every
 * floor flagged in `floor_requests` on the way. Time only advances through `step()`.
 *
 * # Fields
 * - `id`:                  Unique id handed out by `ElevatorIdAllocator`.
 * - `max_floor`:           Index of the top floor.
 * - `capacity`:            Maximum number of requests accepted in one batch.
 * - `floor`:               Current floor, always within `0..=max_floor`.
 * - `heading`:             Direction of travel, kept while the door is open.
 * - `behaviour`:           Current state, including the running dwell timer.
 * - `floor_requests`:      One flag per floor the car has to stop at.
 * - `out_of_service`:      Set once the car is withdrawn. It finishes its current cycle,
 *                          returns to the ground floor and parks.
 * - `taking_requests`:     Set while the car is dwelling at a terminal floor and may be
 *                          handed a batch.
 *
 */
#[derive(Debug, Clone)]
pub struct ElevatorFSM {
    id: usize,
    max_floor: u8,
    capacity: usize,
    floor: u8,
    heading: Direction,
    behaviour: Behaviour,
    floor_requests: Vec<bool>,
    out_of_service: bool,
    taking_requests: bool,
}

impl ElevatorFSM {
    /// Creates a parked elevator on the ground floor. `n_floors` must be at least 2.
    pub fn new(id: usize, n_floors: u8, capacity: usize) -> ElevatorFSM {
        ElevatorFSM {
            id,
            max_floor: n_floors.saturating_sub(1),
            capacity,
            floor: 0,
            heading: Direction::Up,
            behaviour: Behaviour::OutOfService,
            floor_requests: vec![false; n_floors as usize],
            out_of_service: true,
            taking_requests: false,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn max_floor(&self) -> u8 {
        self.max_floor
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn current_floor(&self) -> u8 {
        self.floor
    }

    pub fn behaviour(&self) -> Behaviour {
        self.behaviour
    }

    pub fn floor_requests(&self) -> &[bool] {
        &self.floor_requests
    }

    pub fn is_out_of_service(&self) -> bool {
        self.out_of_service
    }

    pub fn is_taking_requests(&self) -> bool {
        self.taking_requests
    }

    pub fn is_parked(&self) -> bool {
        self.behaviour == Behaviour::OutOfService
    }

    pub fn is_door_closed(&self) -> bool {
        !matches!(self.behaviour, Behaviour::DoorOpen { .. })
    }

    /// Direction as shown to the outside: `Stopped` while the door is open or the car is parked.
    pub fn direction(&self) -> Direction {
        match self.behaviour {
            Behaviour::OutOfService | Behaviour::DoorOpen { .. } => Direction::Stopped,
            _ => self.heading,
        }
    }

    /// Remaining ticks of the door dwell or terminal dwell.
    pub fn wait_timer(&self) -> u8 {
        match self.behaviour {
            Behaviour::WaitingAtGround { timer }
            | Behaviour::WaitingAtTop { timer }
            | Behaviour::DoorOpen { timer } => timer,
            _ => 0,
        }
    }

    /// Puts a parked elevator back into service. Returns false if it was not parked.
    pub fn start(&mut self) -> bool {
        if !self.is_parked() {
            debug!("Elevator {} ignored start, not parked", self.id);
            return false;
        }

        self.out_of_service = false;
        self.taking_requests = true;
        self.heading = Direction::Up;
        self.behaviour = Behaviour::WaitingAtGround {
            timer: TERMINAL_WAIT_TICKS,
        };
        self.floor_requests.iter_mut().for_each(|f| *f = false);
        info!("Elevator {} started", self.id);
        true
    }

    /// Withdraws the elevator. Calling it again has no further effect.
    pub fn take_out_of_service(&mut self) {
        if self.out_of_service {
            return;
        }

        self.out_of_service = true;
        self.taking_requests = false;

        // A door open at the ground floor still runs its cycle before parking
        if self.floor == 0 && !matches!(self.behaviour, Behaviour::DoorOpen { .. }) {
            self.park();
            return;
        }

        // Stops above can't be reached on the way down
        for floor in (self.floor + 1)..=self.max_floor {
            self.floor_requests[floor as usize] = false;
        }
        info!(
            "Elevator {} taken out of service at floor {}, returning to ground",
            self.id, self.floor
        );
    }

    /// True if the elevator would accept a batch travelling in `direction` right now.
    pub fn is_idle_for(&self, direction: Direction) -> bool {
        if self.out_of_service || !self.taking_requests {
            return false;
        }
        matches!(
            (self.behaviour, direction),
            (Behaviour::WaitingAtGround { .. }, Direction::Up)
                | (Behaviour::WaitingAtTop { .. }, Direction::Down)
        )
    }

    /**
     * Hands the elevator a batch of requests going the same way.
     *
     * An up batch is only taken while dwelling at the ground floor, a down batch only while
     * dwelling at the top. Both the pickup and the drop-off floor of every request are
     * flagged, and the remaining dwell is cut short. On error nothing changes.
     */
    pub fn accept_batch(&mut self, requests: &[Request]) -> Result<(), ElevatorError> {
        let direction = match requests.first() {
            Some(first) => first.direction(),
            None => return Ok(()),
        };

        if !self.is_idle_for(direction) {
            return Err(ElevatorError::NotAcceptingRequests(self.id));
        }
        if requests.len() > self.capacity {
            return Err(ElevatorError::BatchTooLarge {
                size: requests.len(),
                capacity: self.capacity,
            });
        }
        if let Some(bad) = requests.iter().find(|r| {
            r.direction() != direction
                || r.start_floor == r.end_floor
                || r.start_floor > self.max_floor
                || r.end_floor > self.max_floor
        }) {
            return Err(ElevatorError::InvalidRequest(bad.to_string()));
        }

        for request in requests {
            self.floor_requests[request.start_floor as usize] = true;
            self.floor_requests[request.end_floor as usize] = true;
        }
        self.set_terminal_timer(0);
        self.taking_requests = false;
        debug!(
            "Elevator {} accepted {} request(s) at floor {}",
            self.id,
            requests.len(),
            self.floor
        );
        Ok(())
    }

    /// Advances the elevator by one tick.
    pub fn step(&mut self) {
        if self.out_of_service {
            self.step_returning();
            return;
        }

        match self.behaviour {
            Behaviour::OutOfService => {}
            Behaviour::WaitingAtGround { timer } | Behaviour::WaitingAtTop { timer } => {
                if timer > 0 {
                    self.set_terminal_timer(timer - 1);
                    if timer == 1 {
                        self.taking_requests = true;
                    }
                } else {
                    self.depart();
                }
            }
            Behaviour::DoorOpen { timer } => {
                if timer > 0 {
                    self.behaviour = Behaviour::DoorOpen { timer: timer - 1 };
                } else {
                    self.travel();
                }
            }
            Behaviour::Moving => self.travel(),
        }
    }

    pub fn get_elevator_status(&self) -> ElevatorReport {
        ElevatorReport {
            id: self.id,
            floor: self.floor,
            direction: self.direction(),
            door_closed: self.is_door_closed(),
            wait_timer: self.wait_timer(),
            floor_requests: self.floor_requests.clone(),
            out_of_service: self.out_of_service,
            waiting: matches!(
                self.behaviour,
                Behaviour::WaitingAtGround { .. } | Behaviour::WaitingAtTop { .. }
            ),
            behaviour: self.behaviour,
        }
    }

    // Withdrawn: finish the open door or top dwell, then head down one floor per tick
    fn step_returning(&mut self) {
        match self.behaviour {
            Behaviour::OutOfService => return,
            Behaviour::DoorOpen { timer } if timer > 0 => {
                self.behaviour = Behaviour::DoorOpen { timer: timer - 1 };
                return;
            }
            Behaviour::WaitingAtTop { timer } if timer > 0 => {
                self.behaviour = Behaviour::WaitingAtTop { timer: timer - 1 };
                return;
            }
            _ => {}
        }

        self.heading = Direction::Down;
        self.behaviour = Behaviour::Moving;

        if self.floor_requests[self.floor as usize] {
            self.open_door();
            return;
        }
        if self.floor > 0 {
            self.floor -= 1;
        }
        if self.floor == 0 {
            self.park();
        }
    }

    fn depart(&mut self) {
        self.taking_requests = false;
        self.behaviour = Behaviour::Moving;

        if self.floor_requests[self.floor as usize] {
            self.open_door();
        } else {
            self.move_one_floor();
        }
    }

    fn travel(&mut self) {
        self.behaviour = Behaviour::Moving;

        if self.floor_requests[self.floor as usize] {
            self.open_door();
            return;
        }

        match self.heading {
            Direction::Up if self.floor == self.max_floor => {
                self.heading = Direction::Down;
                self.behaviour = Behaviour::WaitingAtTop {
                    timer: TERMINAL_WAIT_TICKS,
                };
                debug!("Elevator {} reached the top floor", self.id);
            }
            Direction::Down if self.floor == 0 => {
                self.heading = Direction::Up;
                self.behaviour = Behaviour::WaitingAtGround {
                    timer: TERMINAL_WAIT_TICKS,
                };
                debug!("Elevator {} reached the ground floor", self.id);
            }
            _ => self.move_one_floor(),
        }
    }

    fn move_one_floor(&mut self) {
        match self.heading {
            Direction::Up if self.floor < self.max_floor => self.floor += 1,
            Direction::Down if self.floor > 0 => self.floor -= 1,
            _ => {}
        }
    }

    fn open_door(&mut self) {
        self.floor_requests[self.floor as usize] = false;
        self.behaviour = Behaviour::DoorOpen {
            timer: DOOR_OPEN_TICKS,
        };
        debug!("Elevator {} opened its door at floor {}", self.id, self.floor);
    }

    fn set_terminal_timer(&mut self, timer: u8) {
        match self.behaviour {
            Behaviour::WaitingAtGround { .. } => {
                self.behaviour = Behaviour::WaitingAtGround { timer }
            }
            Behaviour::WaitingAtTop { .. } => self.behaviour = Behaviour::WaitingAtTop { timer },
            _ => {}
        }
    }

    fn park(&mut self) {
        self.floor = 0;
        self.heading = Direction::Up;
        self.behaviour = Behaviour::OutOfService;
        self.taking_requests = false;
        self.floor_requests.iter_mut().for_each(|f| *f = false);
        info!("Elevator {} parked out of service", self.id);
    }
}
