/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, warn};
use std::io::BufRead;
use thiserror::Error;

/***************************************/
/*       Public data structures        */
/***************************************/

/// Commands the console hands to the simulation thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimCommand {
    Start,
    Stop,
    Step(usize),
    Request(u8, u8),
    OutOfService(usize),
    AllOutOfService,
    Clear,
    Status,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("'{command}' expects {expected}")]
    BadArguments {
        command: String,
        expected: &'static str,
    },
}

pub const HELP: &str = "commands: start | stop | step [n] | request <from> <to> | out <id|all> | clear | status | quit";

/***************************************/
/*             Public API              */
/***************************************/

/// Parses one console line into a command.
pub fn parse_command(line: &str) -> Result<SimCommand, CommandError> {
    let mut words = line.split_whitespace();
    let command = words.next().ok_or(CommandError::Empty)?.to_lowercase();
    let args: Vec<&str> = words.collect();

    let bad = |expected: &'static str| CommandError::BadArguments {
        command: command.clone(),
        expected,
    };

    match (command.as_str(), args.as_slice()) {
        ("start", []) => Ok(SimCommand::Start),
        ("stop", []) => Ok(SimCommand::Stop),
        ("step" | "s", []) => Ok(SimCommand::Step(1)),
        ("step" | "s", [n]) => n
            .parse::<usize>()
            .map(SimCommand::Step)
            .map_err(|_| bad("a number of steps")),
        ("request" | "r", [from, to]) => match (from.parse::<u8>(), to.parse::<u8>()) {
            (Ok(from), Ok(to)) => Ok(SimCommand::Request(from, to)),
            _ => Err(bad("two floor numbers")),
        },
        ("request" | "r", _) => Err(bad("two floor numbers")),
        ("out", ["all"]) => Ok(SimCommand::AllOutOfService),
        ("out", [id]) => id
            .parse::<usize>()
            .map(SimCommand::OutOfService)
            .map_err(|_| bad("an elevator id or 'all'")),
        ("out", _) => Err(bad("an elevator id or 'all'")),
        ("clear", []) => Ok(SimCommand::Clear),
        ("status", []) => Ok(SimCommand::Status),
        ("quit" | "exit" | "q", []) => Ok(SimCommand::Quit),
        ("start" | "stop" | "step" | "s" | "clear" | "status" | "quit" | "exit" | "q", _) => {
            Err(bad("no arguments"))
        }
        _ => Err(CommandError::Unknown(command.clone())),
    }
}

/**
 * Reads commands line by line and forwards them to the simulation thread.
 *
 * # Fields
 * - `command_tx`:      Sends parsed commands to the simulation thread.
 */
pub struct Console {
    command_tx: cbc::Sender<SimCommand>,
}

impl Console {
    pub fn new(command_tx: cbc::Sender<SimCommand>) -> Console {
        Console { command_tx }
    }

    /// Runs until `quit`, end of input, or the simulation thread going away.
    pub fn run<R: BufRead>(self, input: R) {
        for line in input.lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!("Error reading console input: {}", e);
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }

            match parse_command(&line) {
                Ok(command) => {
                    let quit = command == SimCommand::Quit;
                    if self.command_tx.send(command).is_err() {
                        debug!("Simulation thread gone, console exiting");
                        return;
                    }
                    if quit {
                        return;
                    }
                }
                Err(e) => {
                    println!("{}", e);
                    println!("{}", HELP);
                }
            }
        }

        // End of input stops the simulation as well
        let _ = self.command_tx.send(SimCommand::Quit);
    }
}
