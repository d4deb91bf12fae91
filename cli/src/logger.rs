use crate::style;
use ciede2000::error::{Error, Result};
use env_logger::{fmt::Formatter, Env};
use indicatif::MultiProgress;
use indicatif_log_bridge::LogWrapper;
use log::{Level, Record};
use std::io::Write;

fn format_record(buf: &mut Formatter, record: &Record<'_>) -> std::io::Result<()> {
    let level = record.level();
    let s = style::theme();

    let (level_text, style_ref) = match level {
        Level::Error => ("ERROR ", &s.error),
        Level::Warn => ("WARN  ", &s.warning),
        Level::Info => ("", &s.info),
        Level::Debug => ("DEBUG ", &s.highlight),
        Level::Trace => ("TRACE ", &s.info),
    };

    write!(buf, "{}", style_ref.apply_to(level_text))?;

    if level != Level::Info {
        write!(buf, "[{}] ", record.target())?;
    }

    writeln!(buf, "{}", record.args())
}

/// Installs the global logger. Log lines are routed through `progress` so
/// they do not tear active progress bars.
pub fn init(progress: &MultiProgress) -> Result<()> {
    let logger = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(format_record)
        .build();
    let level = logger.filter();

    LogWrapper::new(progress.clone(), logger)
        .try_init()
        .map_err(|e| Error::LoggerError(format!("Failed to initialize logger: {}", e)))?;
    log::set_max_level(level);

    Ok(())
}
