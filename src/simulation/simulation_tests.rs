/*
 * Unit tests for the simulation driver
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 *  - test_execute_start_request_step
 *  - test_execute_rejects_invalid_request
 *  - test_execute_stop_returns_to_ground
 *  - test_execute_out_of_service
 *  - test_execute_quit
 *  - test_run_steps_headless
 *  - test_run_steps_reports_every_step
 *  - test_run_zero_steps_prints_report
 *  - test_render_status_json
 *  - test_run_until_quit
 *  - test_run_until_channel_closed
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod simulation_tests {
    use crate::console::SimCommand;
    use crate::coordinator::Coordinator;
    use crate::shared::{BuildingError, SystemStatus};
    use crate::simulation::{OutputFormat, SimulationDriver};
    use crossbeam_channel as cbc;

    fn driver(n_floors: u8, n_elevators: usize, capacity: usize) -> SimulationDriver {
        let coordinator = Coordinator::new(n_floors, n_elevators, capacity).unwrap();
        SimulationDriver::new(coordinator, OutputFormat::Text, false)
    }

    #[test]
    fn test_execute_start_request_step() {
        // Arrange
        let mut driver = driver(11, 8, 3);

        // Act
        driver.execute(SimCommand::Start).unwrap();
        driver.execute(SimCommand::Request(1, 2)).unwrap();
        driver.execute(SimCommand::Step(6)).unwrap();

        // Assert
        let elevators = driver.coordinator().elevators();
        assert_eq!(elevators[0].current_floor(), 2);
        assert!(elevators[0].floor_requests()[2]);
        assert_eq!(elevators[1].current_floor(), 1);
    }

    #[test]
    fn test_execute_rejects_invalid_request() {
        // Arrange
        let mut driver = driver(3, 1, 1);
        driver.execute(SimCommand::Start).unwrap();

        // Act
        let result = driver.execute(SimCommand::Request(1, 3));

        // Assert
        assert!(matches!(result, Err(BuildingError::InvalidArgument(_))));
        assert!(driver.coordinator().get_elevator_system_status().up_requests.is_empty());
    }

    #[test]
    fn test_execute_stop_returns_to_ground() {
        // Arrange
        let mut driver = driver(5, 2, 1);
        driver.execute(SimCommand::Start).unwrap();
        driver.execute(SimCommand::Step(7)).unwrap();

        // Act
        driver.execute(SimCommand::Stop).unwrap();
        driver.execute(SimCommand::Step(10)).unwrap();

        // Assert
        assert_eq!(driver.coordinator().status(), SystemStatus::OutOfService);
        assert!(driver
            .coordinator()
            .elevators()
            .iter()
            .all(|e| e.current_floor() == 0 && e.is_parked()));
    }

    #[test]
    fn test_execute_out_of_service() {
        // Arrange
        let mut driver = driver(4, 3, 1);
        driver.execute(SimCommand::Start).unwrap();

        // Act
        driver.execute(SimCommand::OutOfService(1)).unwrap();
        driver.execute(SimCommand::OutOfService(42)).unwrap();

        // Assert
        let elevators = driver.coordinator().elevators();
        assert!(!elevators[0].is_out_of_service());
        assert!(elevators[1].is_out_of_service());
        assert!(!elevators[2].is_out_of_service());
        assert_eq!(driver.coordinator().status(), SystemStatus::Running);
    }

    #[test]
    fn test_execute_quit() {
        // Arrange
        let mut driver = driver(3, 1, 1);

        // Act & Assert
        assert_eq!(driver.execute(SimCommand::Status), Ok(true));
        assert_eq!(driver.execute(SimCommand::Quit), Ok(false));
    }

    #[test]
    fn test_run_steps_headless() {
        // Arrange
        let mut driver = driver(3, 1, 1);
        driver.execute(SimCommand::Start).unwrap();
        let mut out: Vec<u8> = Vec::new();

        // Act
        driver.run_steps(6, &mut out).unwrap();

        // Assert
        let output = String::from_utf8(out).unwrap();
        assert_eq!(driver.coordinator().elevators()[0].current_floor(), 1);
        assert_eq!(output.matches("Current Elevator Statuses:").count(), 1);
        assert!(output.contains("Elevator 0: [1|^|C  ]"));
    }

    #[test]
    fn test_run_steps_reports_every_step() {
        // Arrange
        let coordinator = Coordinator::new(3, 1, 1).unwrap();
        let mut driver = SimulationDriver::new(coordinator, OutputFormat::Text, true);
        driver.execute(SimCommand::Start).unwrap();
        let mut out: Vec<u8> = Vec::new();

        // Act
        driver.run_steps(3, &mut out).unwrap();

        // Assert
        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.matches("Current Elevator Statuses:").count(), 3);
    }

    #[test]
    fn test_run_zero_steps_prints_report() {
        // Arrange
        let coordinator = Coordinator::new(3, 1, 1).unwrap();
        let mut driver = SimulationDriver::new(coordinator, OutputFormat::Text, true);
        driver.execute(SimCommand::Start).unwrap();
        let mut out: Vec<u8> = Vec::new();

        // Act
        driver.run_steps(0, &mut out).unwrap();

        // Assert
        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.matches("Current Elevator Statuses:").count(), 1);
        assert!(output.contains("Elevator 0: Waiting[Floor 0, Time 5]"));
    }

    #[test]
    fn test_render_status_json() {
        // Arrange
        let coordinator = Coordinator::new(3, 2, 1).unwrap();
        let driver = SimulationDriver::new(coordinator, OutputFormat::Json, false);

        // Act
        let json: serde_json::Value = serde_json::from_str(&driver.render_status()).unwrap();

        // Assert
        assert_eq!(json["numElevators"], 2);
        assert_eq!(json["systemStatus"], "outOfService");
        assert_eq!(json["elevatorReports"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_run_until_quit() {
        // Arrange
        let driver = driver(3, 1, 1);
        let (command_tx, command_rx) = cbc::unbounded::<SimCommand>();
        command_tx.send(SimCommand::Start).unwrap();
        command_tx.send(SimCommand::Step(2)).unwrap();
        command_tx.send(SimCommand::Quit).unwrap();

        // Act
        driver.run(command_rx, SimulationDriver::tick_channel(0));

        // Assert
        assert!(command_tx.is_empty());
    }

    #[test]
    fn test_run_until_channel_closed() {
        // Arrange
        let driver = driver(3, 1, 1);
        let (command_tx, command_rx) = cbc::unbounded::<SimCommand>();
        command_tx.send(SimCommand::Start).unwrap();
        drop(command_tx);

        // Act & Assert
        driver.run(command_rx, SimulationDriver::tick_channel(0));
    }
}
