/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, info, warn};
use std::io::{self, Write};
use std::time::{Duration, Instant};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::console::{SimCommand, HELP};
use crate::coordinator::Coordinator;
use crate::shared::{BuildingError, Request, SystemStatus};

/***************************************/
/*               Enums                 */
/***************************************/
enum Event {
    Command(SimCommand),
    Tick,
    Terminate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Drives one building from console commands and, optionally, a fixed tick.
 *
 * # Fields
 * - `coordinator`:         The building being simulated.
 * - `format`:              How status reports are printed.
 * - `print_every_step`:    Print a report after every step, not only on `status`.
 */
pub struct SimulationDriver {
    coordinator: Coordinator,
    format: OutputFormat,
    print_every_step: bool,
}

impl SimulationDriver {
    pub fn new(coordinator: Coordinator, format: OutputFormat, print_every_step: bool) -> SimulationDriver {
        SimulationDriver {
            coordinator,
            format,
            print_every_step,
        }
    }

    pub fn coordinator(&self) -> &Coordinator {
        &self.coordinator
    }

    /// Receiver that fires every `tick_interval` ms, or never when the interval is 0.
    pub fn tick_channel(tick_interval: u64) -> cbc::Receiver<Instant> {
        if tick_interval == 0 {
            cbc::never()
        } else {
            cbc::tick(Duration::from_millis(tick_interval))
        }
    }

    pub fn run(mut self, command_rx: cbc::Receiver<SimCommand>, tick_rx: cbc::Receiver<Instant>) {
        println!("{}", HELP);
        loop {
            let event = Self::wait_for_event(&command_rx, &tick_rx);
            if !self.handle_event(event) {
                break;
            }
        }
        info!("Simulation terminated");
    }

    /// Steps the building `n` times without a console attached, writing reports to `out`.
    /// The final report is always written.
    pub fn run_steps<W: Write>(&mut self, n: usize, out: &mut W) -> io::Result<()> {
        for _ in 0..n {
            self.coordinator.trigger_elevator_step();
            if self.print_every_step {
                writeln!(out, "{}", self.render_status())?;
            }
        }
        if !self.print_every_step || n == 0 {
            writeln!(out, "{}", self.render_status())?;
        }
        Ok(())
    }

    /// Applies one command. Returns `Ok(false)` when the simulation should end.
    pub fn execute(&mut self, command: SimCommand) -> Result<bool, BuildingError> {
        match command {
            SimCommand::Start => {
                if !self.coordinator.start_elevator_system()? {
                    println!("Elevator system is already running");
                }
            }
            SimCommand::Stop => self.coordinator.stop_elevator_system(),
            SimCommand::Step(n) => {
                for _ in 0..n {
                    self.step_once();
                }
            }
            SimCommand::Request(start_floor, end_floor) => {
                self.coordinator
                    .add_request(Request::new(start_floor, end_floor))?;
            }
            SimCommand::OutOfService(id) => self.coordinator.take_elevator_out_of_service(id),
            SimCommand::AllOutOfService => self.coordinator.take_all_elevators_out_of_service(),
            SimCommand::Clear => self.coordinator.clear_requests(),
            SimCommand::Status => println!("{}", self.render_status()),
            SimCommand::Quit => return Ok(false),
        }
        Ok(true)
    }

    pub fn render_status(&self) -> String {
        let report = self.coordinator.get_elevator_system_status();
        match self.format {
            OutputFormat::Text => report.to_string(),
            OutputFormat::Json => match serde_json::to_string_pretty(&report) {
                Ok(json) => json,
                Err(e) => {
                    warn!("Failed to serialize status report: {}", e);
                    String::new()
                }
            },
        }
    }

    fn step_once(&mut self) {
        self.coordinator.trigger_elevator_step();
        if self.print_every_step {
            println!("{}", self.render_status());
        }
    }

    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Command(command) => {
                debug!("Command: {:?}", command);
                match self.execute(command) {
                    Ok(keep_running) => keep_running,
                    Err(e) => {
                        println!("{}", e);
                        true
                    }
                }
            }

            // Ticks while parked would only repeat the same report
            Event::Tick => {
                if self.coordinator.status() != SystemStatus::OutOfService {
                    self.step_once();
                }
                true
            }

            Event::Terminate => false,
        }
    }

    fn wait_for_event(command_rx: &cbc::Receiver<SimCommand>, tick_rx: &cbc::Receiver<Instant>) -> Event {
        cbc::select! {
            recv(command_rx) -> command => {
                match command {
                    Ok(command) => Event::Command(command),
                    Err(_) => {
                        debug!("Command channel closed");
                        Event::Terminate
                    }
                }
            },

            recv(tick_rx) -> _ => Event::Tick,
        }
    }
}
