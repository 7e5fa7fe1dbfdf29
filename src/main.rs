/***************************************/
/*        3rd party libraries          */
/***************************************/
use anyhow::Context;
use clap::{Arg, Command};
use crossbeam_channel as cbc;
use env_logger::Env;
use log::info;
use std::thread::Builder;

/***************************************/
/*           Local modules             */
/***************************************/
use elevator_sim::config;
use elevator_sim::console::{Console, SimCommand};
use elevator_sim::coordinator::Coordinator;
use elevator_sim::simulation::{OutputFormat, SimulationDriver};
use elevator_sim::unwrap_or_exit;

/***************************************/
/*                Main                 */
/***************************************/
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let matches = Command::new("elevator-sim")
        .about("Step-driven simulator for a bank of elevators")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .takes_value(true)
                .default_value("config.toml")
                .help("Path to the configuration file"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print status reports as JSON"),
        )
        .arg(
            Arg::new("steps")
                .long("steps")
                .takes_value(true)
                .help("Run this many steps without a console, then exit"),
        )
        .get_matches();

    // Load the configuration
    let config_path = matches.value_of("config").unwrap_or("config.toml");
    let config = config::load_config(config_path)
        .with_context(|| format!("could not load configuration from '{}'", config_path))?;

    let format = if matches.is_present("json") {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    // Create the building
    let mut coordinator = Coordinator::new(
        config.building.n_floors,
        config.building.n_elevators,
        config.building.capacity,
    )
    .context("could not create the building")?;
    let headless_steps = matches.value_of("steps");
    if config.simulation.auto_start || headless_steps.is_some() {
        coordinator.start_elevator_system()?;
    }
    info!(
        "Building with {} floors, {} elevators, capacity {}",
        config.building.n_floors, config.building.n_elevators, config.building.capacity
    );

    let mut driver = SimulationDriver::new(coordinator, format, config.simulation.print_every_step);

    // Headless run
    if let Some(steps) = headless_steps {
        let steps: usize = steps
            .parse()
            .with_context(|| format!("'{}' is not a number of steps", steps))?;
        driver.run_steps(steps, &mut std::io::stdout().lock())?;
        return Ok(());
    }

    // Initialize channels
    let (command_tx, command_rx) = cbc::unbounded::<SimCommand>();
    let tick_rx = SimulationDriver::tick_channel(config.simulation.tick_interval);

    // Start the console module
    let console = Console::new(command_tx);
    let console_thread = Builder::new().name("console".into());
    unwrap_or_exit!(console_thread.spawn(move || console.run(std::io::stdin().lock())));

    // Start the simulation module
    let simulation_thread = Builder::new().name("simulation".into());
    let simulation_handle = unwrap_or_exit!(simulation_thread.spawn(move || driver.run(command_rx, tick_rx)));

    // The console thread may stay blocked on stdin after quit, so only the simulation is joined
    if simulation_handle.join().is_err() {
        anyhow::bail!("simulation thread panicked");
    }

    Ok(())
}
