use log::LevelFilter;
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{runtime::ConfigErrors, Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

pub mod byte_operations;
pub mod constants;
pub mod encrypt;
pub mod error;
pub mod string_operations;
pub mod types;

pub use byte_operations::PacketWriter;
pub use error::CommandError;

const LOGGING_PATTERN: &str = "{d} {l} {f}:{L} - {m}\n";

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("failed to open log file {path}: {source}")]
    File {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid logger configuration: {0}")]
    Config(#[from] ConfigErrors),
    #[error("logger already installed: {0}")]
    Install(#[from] log::SetLoggerError),
}

/// Installs the process-wide logger.
///
/// Records at or above `log_level` go to stderr. When `file_path` is given the
/// same records are also appended to that file.
pub fn initialize_logger(
    log_level: LevelFilter,
    file_path: Option<&str>,
) -> Result<(), LoggerError> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOGGING_PATTERN)))
        .build();

    let mut config_builder = Config::builder().appender(
        Appender::builder()
            .filter(Box::new(ThresholdFilter::new(log_level)))
            .build("stderr", Box::new(stderr)),
    );
    let mut root_builder = Root::builder().appender("stderr");

    if let Some(path) = file_path {
        let logfile = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOGGING_PATTERN)))
            .build(path)
            .map_err(|source| LoggerError::File {
                path: path.to_string(),
                source,
            })?;

        config_builder =
            config_builder.appender(Appender::builder().build("logfile", Box::new(logfile)));
        root_builder = root_builder.appender("logfile");
    }

    let config = config_builder.build(root_builder.build(log_level))?;

    // The handle allows swapping the config at runtime; nothing needs that yet.
    let _handle = log4rs::init_config(config)?;

    Ok(())
}
