pub mod clock;
pub mod error;
pub mod events;
pub mod listener;
pub mod logging;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::ExecutionEventError;
pub use events::execution_started::{ExecutionStartedEvent, VariableValues};
pub use listener::{ExecutionStartedListener, ExecutionStartedListenerBoxed};
pub use logging::{LogLevel, LoggingListener, LoggingListenerConfig};

// Re-exported so hosts build documents and variables with the same versions.
pub use graphql_parser;
pub use sonic_rs;
