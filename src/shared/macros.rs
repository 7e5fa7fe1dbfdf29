/***************************************/
/*               Macros                */
/***************************************/

/// Unwraps a `Result`, logging the error and exiting the process on failure.
/// Reserved for setup failures the driver cannot recover from.
#[macro_export]
macro_rules! unwrap_or_exit {
    ($expr:expr) => {
        match $expr {
            Ok(val) => val,
            Err(e) => {
                log::error!("ERROR: {}", e);
                std::process::exit(1);
            }
        }
    };
}
