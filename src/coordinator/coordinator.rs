/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info, warn};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::{ElevatorFSM, ElevatorIdAllocator};
use crate::shared::{BuildingError, BuildingReport, Direction, Request, SystemStatus};

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Owns the elevator fleet of one building and the requests waiting for a car.
 *
 * Every call to `trigger_elevator_step` is one tick: waiting requests are first handed
 * out to idle elevators, then every elevator is stepped in fleet order. Up-bound requests
 * are only given to elevators dwelling at the ground floor, down-bound requests only to
 * elevators dwelling at the top floor, first fit in fleet order.
 *
 * # Fields
 * - `n_floors`:        Number of floors, at least 2.
 * - `n_elevators`:     Number of elevators, at least 1.
 * - `capacity`:        Maximum number of requests handed to one elevator at a time.
 * - `elevators`:       The fleet, in creation order.
 * - `up_requests`:     Pending up-bound requests in arrival order.
 * - `down_requests`:   Pending down-bound requests in arrival order.
 * - `status`:          System status, cycles out of service -> running -> stopping.
 */
#[derive(Debug)]
pub struct Coordinator {
    n_floors: u8,
    n_elevators: usize,
    capacity: usize,
    elevators: Vec<ElevatorFSM>,
    up_requests: Vec<Request>,
    down_requests: Vec<Request>,
    status: SystemStatus,
}

impl Coordinator {
    /// Builds a building whose elevators are numbered from 0.
    pub fn new(n_floors: u8, n_elevators: usize, capacity: usize) -> Result<Coordinator, BuildingError> {
        Coordinator::with_allocator(&mut ElevatorIdAllocator::new(), n_floors, n_elevators, capacity)
    }

    /// Builds a building taking elevator ids from `allocator`.
    pub fn with_allocator(
        allocator: &mut ElevatorIdAllocator,
        n_floors: u8,
        n_elevators: usize,
        capacity: usize,
    ) -> Result<Coordinator, BuildingError> {
        if n_floors < 2 {
            return Err(BuildingError::InvalidArgument(
                "the number of floors must be at least 2".to_string(),
            ));
        }
        if n_elevators < 1 {
            return Err(BuildingError::InvalidArgument(
                "the number of elevators must be at least 1".to_string(),
            ));
        }
        if capacity < 1 {
            return Err(BuildingError::InvalidArgument(
                "the elevator capacity must be at least 1".to_string(),
            ));
        }

        let elevators = (0..n_elevators)
            .map(|_| ElevatorFSM::new(allocator.allocate(), n_floors, capacity))
            .collect::<Vec<ElevatorFSM>>();

        info!(
            "Building created with {} floors, {} elevators, capacity {}",
            n_floors, n_elevators, capacity
        );

        Ok(Coordinator {
            n_floors,
            n_elevators,
            capacity,
            elevators,
            up_requests: Vec::new(),
            down_requests: Vec::new(),
            status: SystemStatus::OutOfService,
        })
    }

    pub fn n_floors(&self) -> u8 {
        self.n_floors
    }

    pub fn n_elevators(&self) -> usize {
        self.n_elevators
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn status(&self) -> SystemStatus {
        self.status
    }

    pub fn elevators(&self) -> &[ElevatorFSM] {
        &self.elevators
    }

    /// Queues a request. Floors are checked before the system status.
    pub fn add_request(&mut self, request: Request) -> Result<(), BuildingError> {
        let top = self.n_floors - 1;
        if request.start_floor > top {
            return Err(BuildingError::InvalidArgument(format!(
                "start floor must be between 0 and {}",
                top
            )));
        }
        if request.end_floor > top {
            return Err(BuildingError::InvalidArgument(format!(
                "end floor must be between 0 and {}",
                top
            )));
        }
        if request.start_floor == request.end_floor {
            return Err(BuildingError::InvalidArgument(
                "start floor and end floor cannot be the same".to_string(),
            ));
        }

        match self.status {
            SystemStatus::Running => {
                match request.direction() {
                    Direction::Up => self.up_requests.push(request),
                    _ => self.down_requests.push(request),
                }
                debug!("Queued request {}", request);
                Ok(())
            }
            SystemStatus::OutOfService | SystemStatus::Stopping => Err(BuildingError::IllegalState(
                "elevator system is not accepting requests".to_string(),
            )),
        }
    }

    /// Returns `Ok(false)` if the system was already running.
    pub fn start_elevator_system(&mut self) -> Result<bool, BuildingError> {
        match self.status {
            SystemStatus::Running => Ok(false),
            SystemStatus::Stopping => Err(BuildingError::IllegalState(
                "elevator system is stopping".to_string(),
            )),
            SystemStatus::OutOfService => {
                for elevator in self.elevators.iter_mut() {
                    elevator.start();
                }
                self.status = SystemStatus::Running;
                info!("Elevator system running");
                Ok(true)
            }
        }
    }

    /// Sends every elevator back to the ground floor and drops all waiting requests.
    /// Requests already handed to an elevator are still served on its way down.
    pub fn stop_elevator_system(&mut self) {
        if self.status != SystemStatus::Running {
            return;
        }

        self.status = SystemStatus::Stopping;
        for elevator in self.elevators.iter_mut() {
            elevator.take_out_of_service();
        }
        self.clear_requests();
        info!("Elevator system stopping");
    }

    pub fn trigger_elevator_step(&mut self) {
        match self.status {
            SystemStatus::Running => {
                self.distribute_requests();
                for elevator in self.elevators.iter_mut() {
                    elevator.step();
                }
            }
            SystemStatus::Stopping => {
                for elevator in self.elevators.iter_mut() {
                    elevator.step();
                }
                self.check_and_stop_elevator_system();
            }
            SystemStatus::OutOfService => {}
        }
    }

    pub fn take_elevator_out_of_service(&mut self, elevator_id: usize) {
        match self.elevators.iter_mut().find(|e| e.id() == elevator_id) {
            Some(elevator) => elevator.take_out_of_service(),
            None => warn!("No elevator with id {}", elevator_id),
        }
    }

    pub fn take_all_elevators_out_of_service(&mut self) {
        for elevator in self.elevators.iter_mut() {
            elevator.take_out_of_service();
        }
    }

    pub fn clear_requests(&mut self) {
        self.up_requests.clear();
        self.down_requests.clear();
    }

    pub fn get_elevator_system_status(&self) -> BuildingReport {
        BuildingReport {
            n_floors: self.n_floors,
            n_elevators: self.n_elevators,
            capacity: self.capacity,
            elevator_reports: self
                .elevators
                .iter()
                .map(|e| e.get_elevator_status())
                .collect(),
            up_requests: self.up_requests.clone(),
            down_requests: self.down_requests.clone(),
            system_status: self.status,
        }
    }

    // Up batches go to cars at the ground floor, down batches to cars at the top floor
    fn distribute_requests(&mut self) {
        if self.up_requests.is_empty() && self.down_requests.is_empty() {
            return;
        }

        let top = self.n_floors - 1;
        for elevator in self.elevators.iter_mut() {
            if elevator.current_floor() == 0 && !self.up_requests.is_empty() {
                assign_batch(elevator, &mut self.up_requests, Direction::Up, self.capacity);
            } else if elevator.current_floor() == top && !self.down_requests.is_empty() {
                assign_batch(elevator, &mut self.down_requests, Direction::Down, self.capacity);
            }
        }
    }

    // All elevators parked on the ground floor ends the stopping phase
    fn check_and_stop_elevator_system(&mut self) {
        if self.status != SystemStatus::Stopping {
            return;
        }
        if self.elevators.iter().all(|e| e.current_floor() == 0 && e.is_parked()) {
            self.status = SystemStatus::OutOfService;
            info!("Elevator system out of service");
        }
    }
}

/***************************************/
/*          Private helpers            */
/***************************************/

// Offers the oldest `capacity` requests to `elevator`, keeping the queue as is on refusal
fn assign_batch(
    elevator: &mut ElevatorFSM,
    requests: &mut Vec<Request>,
    direction: Direction,
    capacity: usize,
) {
    if elevator.direction() != direction {
        return;
    }

    let batch_len = requests.len().min(capacity);
    match elevator.accept_batch(&requests[..batch_len]) {
        Ok(()) => {
            let remaining = requests.split_off(batch_len);
            let assigned = std::mem::replace(requests, remaining);
            info!(
                "Assigned {} request(s) to elevator {}",
                assigned.len(),
                elevator.id()
            );
        }
        Err(e) => debug!("Elevator {} skipped: {}", elevator.id(), e),
    }
}
