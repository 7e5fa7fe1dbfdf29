/*
 * Unit tests for the console command parser and reader
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 *  - test_parse_simple_commands
 *  - test_parse_step_count
 *  - test_parse_request
 *  - test_parse_out_of_service
 *  - test_parse_errors
 *  - test_console_forwards_commands
 *  - test_console_quits_on_end_of_input
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod console_tests {
    use crate::console::{parse_command, CommandError, Console, SimCommand};
    use crossbeam_channel as cbc;
    use std::io::Cursor;

    #[test]
    fn test_parse_simple_commands() {
        // Act & Assert
        assert_eq!(parse_command("start"), Ok(SimCommand::Start));
        assert_eq!(parse_command("  STOP "), Ok(SimCommand::Stop));
        assert_eq!(parse_command("clear"), Ok(SimCommand::Clear));
        assert_eq!(parse_command("status"), Ok(SimCommand::Status));
        assert_eq!(parse_command("q"), Ok(SimCommand::Quit));
    }

    #[test]
    fn test_parse_step_count() {
        // Act & Assert
        assert_eq!(parse_command("step"), Ok(SimCommand::Step(1)));
        assert_eq!(parse_command("step 12"), Ok(SimCommand::Step(12)));
        assert_eq!(parse_command("s 3"), Ok(SimCommand::Step(3)));
    }

    #[test]
    fn test_parse_request() {
        // Act & Assert
        assert_eq!(parse_command("request 1 5"), Ok(SimCommand::Request(1, 5)));
        assert_eq!(parse_command("r 7 0"), Ok(SimCommand::Request(7, 0)));
    }

    #[test]
    fn test_parse_out_of_service() {
        // Act & Assert
        assert_eq!(parse_command("out 2"), Ok(SimCommand::OutOfService(2)));
        assert_eq!(parse_command("out all"), Ok(SimCommand::AllOutOfService));
    }

    #[test]
    fn test_parse_errors() {
        // Act & Assert
        assert_eq!(parse_command("   "), Err(CommandError::Empty));
        assert_eq!(parse_command("fly 3"), Err(CommandError::Unknown("fly".to_string())));
        assert!(matches!(parse_command("r 1"), Err(CommandError::BadArguments { .. })));
        assert!(matches!(parse_command("r 1 x"), Err(CommandError::BadArguments { .. })));
        assert!(matches!(parse_command("r -1 2"), Err(CommandError::BadArguments { .. })));
        assert!(matches!(parse_command("step many"), Err(CommandError::BadArguments { .. })));
        assert!(matches!(parse_command("start now"), Err(CommandError::BadArguments { .. })));
        assert!(matches!(parse_command("out"), Err(CommandError::BadArguments { .. })));
    }

    #[test]
    fn test_console_forwards_commands() {
        // Arrange
        let (command_tx, command_rx) = cbc::unbounded::<SimCommand>();
        let console = Console::new(command_tx);
        let input = Cursor::new("start\nbogus\n\nr 1 2\nquit\nstep\n");

        // Act
        console.run(input);
        let received: Vec<SimCommand> = command_rx.try_iter().collect();

        // Assert
        assert_eq!(
            received,
            vec![SimCommand::Start, SimCommand::Request(1, 2), SimCommand::Quit]
        );
    }

    #[test]
    fn test_console_quits_on_end_of_input() {
        // Arrange
        let (command_tx, command_rx) = cbc::unbounded::<SimCommand>();
        let console = Console::new(command_tx);

        // Act
        console.run(Cursor::new("status\n"));
        let received: Vec<SimCommand> = command_rx.try_iter().collect();

        // Assert
        assert_eq!(received, vec![SimCommand::Status, SimCommand::Quit]);
    }
}
