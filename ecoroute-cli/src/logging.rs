use std::io::{self, Write};

use env_logger::{Builder, Target, WriteStyle};
use log::{LevelFilter, Record};

use crate::CliError;

/// Install a stderr logger filtered at `level`.
pub(crate) fn init(level: LevelFilter) -> Result<(), CliError> {
    Builder::new()
        .filter_level(level)
        .write_style(WriteStyle::Never)
        .target(Target::Stderr)
        .format(|buf, record| write_record(buf, record))
        .try_init()
        .map_err(CliError::Logging)
}

/// Render one log line as `LEVEL [target] message`.
pub(crate) fn write_record(out: &mut dyn Write, record: &Record<'_>) -> io::Result<()> {
    writeln!(out, "{} [{}] {}", record.level(), record.target(), record.args())
}
