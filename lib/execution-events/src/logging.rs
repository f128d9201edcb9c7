use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::events::execution_started::ExecutionStartedEvent;
use crate::listener::ExecutionStartedListener;

#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone)]
#[serde(deny_unknown_fields)]
pub struct LoggingListenerConfig {
    /// Enables/disables logging of execution starts. Enabled by default.
    #[serde(default = "default_logging_listener_enabled")]
    pub enabled: bool,

    /// The level at which execution starts are logged.
    #[serde(default)]
    pub level: LogLevel,

    /// Includes the printed GraphQL document in the log record.
    #[serde(default)]
    pub include_query: bool,

    /// Includes the raw client variables in the log record.
    ///
    /// Disabled by default, variables often carry personal data or secrets.
    #[serde(default)]
    pub include_variables: bool,
}

fn default_logging_listener_enabled() -> bool {
    true
}

impl Default for LoggingListenerConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_listener_enabled(),
            level: LogLevel::default(),
            include_query: false,
            include_variables: false,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    #[default]
    Debug,
    Info,
    Warn,
    Error,
}

// tracing macros need the level at compile time
macro_rules! event_at_level {
    ($level:expr, $($args:tt)+) => {
        match $level {
            LogLevel::Trace => tracing::trace!($($args)+),
            LogLevel::Debug => tracing::debug!($($args)+),
            LogLevel::Info => tracing::info!($($args)+),
            LogLevel::Warn => tracing::warn!($($args)+),
            LogLevel::Error => tracing::error!($($args)+),
        }
    };
}

/// Writes one structured log record per execution start.
#[derive(Debug, Default)]
pub struct LoggingListener {
    config: LoggingListenerConfig,
}

impl LoggingListener {
    pub fn new(config: LoggingListenerConfig) -> Self {
        Self { config }
    }
}

impl ExecutionStartedListener for LoggingListener {
    fn on_execution_started(&self, event: &ExecutionStartedEvent<'_>) {
        if !self.config.enabled {
            return;
        }

        let operation_name = event.operation_name().unwrap_or("anonymous");
        let variables_count = event.variables().map_or(0, |variables| variables.len());
        // left out when the instant can't be printed as RFC 3339
        let moment = event.moment_rfc3339();

        let query = self
            .config
            .include_query
            .then(|| event.query().to_string());

        let variables = match event.variables() {
            Some(variables) if self.config.include_variables => {
                match sonic_rs::to_string(variables) {
                    Ok(serialized) => Some(serialized),
                    Err(err) => {
                        tracing::warn!(
                            operation_name,
                            error = %err,
                            "failed to serialize variables of execution"
                        );
                        None
                    }
                }
            }
            _ => None,
        };

        event_at_level!(
            self.config.level,
            operation_name,
            variables_count,
            moment = moment.as_ref().map(tracing::field::display),
            query = query.as_deref(),
            variables = variables.as_deref(),
            "graphql execution started"
        );
    }
}
