use std::sync::Once;

use tracing_forest::{printer::PrettyPrinter, tag::NoTag, ForestLayer};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Selects the output format, `flat` or `forest`.
pub const LOGGER_TYPE_VAR: &str = "RUST_LOGGER";

static INIT: Once = Once::new();

/// The output format of the logger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoggerType {
    /// One compact line per event, with span timings on close.
    #[default]
    Flat,
    /// Events grouped under their spans by `tracing_forest`.
    Forest,
}

impl LoggerType {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "flat" => Some(Self::Flat),
            "forest" => Some(Self::Forest),
            _ => None,
        }
    }
}

/// Install the global subscriber. Later calls do nothing.
///
/// `RUST_LOG` filters events and defaults to `off`. All output goes to stderr, since stdout
/// carries the benchmark result. An unknown `RUST_LOGGER` value selects [`LoggerType::Flat`]
/// and is reported as a warning.
pub fn setup_logger() {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

        let requested = std::env::var(LOGGER_TYPE_VAR).ok();
        let logger_type =
            requested.as_deref().map_or(Some(LoggerType::Flat), LoggerType::from_name);

        match logger_type.unwrap_or_default() {
            LoggerType::Forest => {
                Registry::default()
                    .with(env_filter)
                    .with(ForestLayer::new(PrettyPrinter::new().writer(std::io::stderr), NoTag))
                    .init();
            }
            LoggerType::Flat => {
                tracing_subscriber::fmt::Subscriber::builder()
                    .compact()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_env_filter(env_filter)
                    .with_span_events(FmtSpan::CLOSE)
                    .finish()
                    .init();
            }
        }

        if logger_type.is_none() {
            tracing::warn!(
                value = requested.as_deref().unwrap_or_default(),
                "unknown RUST_LOGGER value, using the flat logger"
            );
        }
    });
}
