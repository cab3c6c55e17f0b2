use crate::error::{LoggerInitSnafu, RegisterError};
use log::LevelFilter;
use snafu::ResultExt;

// Only one logger can exist per process; later calls fail with LoggerInit.
pub fn setup(level: LevelFilter) -> Result<(), RegisterError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] [{}] {}", record.level(), record.target(), message))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
        .context(LoggerInitSnafu)
}
