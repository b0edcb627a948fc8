mod logger;

pub use logger::{setup_logger, LoggerType, LOGGER_TYPE_VAR};
