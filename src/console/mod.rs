pub mod console;
pub mod console_tests;

pub use console::parse_command;
pub use console::CommandError;
pub use console::Console;
pub use console::SimCommand;
pub use console::HELP;
