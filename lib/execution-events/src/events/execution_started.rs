use std::collections::HashMap;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use graphql_parser::query::Document;
use humantime::Rfc3339Timestamp;
use serde::ser::Error as _;
use serde::{Serialize, Serializer};

use crate::clock::{Clock, SystemClock};
use crate::error::ExecutionEventError;

// 10000-01-01T00:00:00Z, RFC 3339 years have four digits
const RFC3339_UPPER_BOUND: Duration = Duration::from_secs(253_402_300_800);

/// Raw variables as sent by the client, neither validated nor coerced.
pub type VariableValues = HashMap<String, sonic_rs::Value>;

/// Fired right before an individual GraphQL query starts resolving.
///
/// With query batching this happens once per batched operation, so a single
/// request can produce several events.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionStartedEvent<'exec> {
    /// The parsed document of the incoming operation.
    #[serde(serialize_with = "serialize_document")]
    query: &'exec Document<'static, String>,
    /// Variables provided by the client.
    /// `None` when the request carried no variables at all.
    variables: Option<&'exec VariableValues>,
    /// Selects the operation to run when the document defines more than one.
    operation_name: Option<&'exec str>,
    /// The point in time when the execution started.
    #[serde(serialize_with = "serialize_moment")]
    moment: SystemTime,
}

impl<'exec> ExecutionStartedEvent<'exec> {
    pub fn new(
        query: &'exec Document<'static, String>,
        variables: Option<&'exec VariableValues>,
        operation_name: Option<&'exec str>,
    ) -> Self {
        Self::new_with_clock(query, variables, operation_name, &SystemClock)
    }

    pub fn new_with_clock(
        query: &'exec Document<'static, String>,
        variables: Option<&'exec VariableValues>,
        operation_name: Option<&'exec str>,
        clock: &dyn Clock,
    ) -> Self {
        Self {
            query,
            variables,
            operation_name,
            moment: clock.now(),
        }
    }

    #[inline]
    pub fn query(&self) -> &'exec Document<'static, String> {
        self.query
    }

    #[inline]
    pub fn variables(&self) -> Option<&'exec VariableValues> {
        self.variables
    }

    #[inline]
    pub fn operation_name(&self) -> Option<&'exec str> {
        self.operation_name
    }

    #[inline]
    pub fn moment(&self) -> SystemTime {
        self.moment
    }

    /// Looks up a single variable by its name, without the leading `$`.
    pub fn variable(&self, name: &str) -> Option<&'exec sonic_rs::Value> {
        self.variables.and_then(|variables| variables.get(name))
    }

    /// Milliseconds since the UNIX epoch, the timestamp format used in usage reports.
    /// Instants before the epoch are reported as `0`.
    pub fn moment_unix_millis(&self) -> u64 {
        self.moment
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or(0)
    }

    /// `moment` formatted as RFC 3339 with millisecond precision.
    /// `None` when the instant falls outside the years 1970 to 9999.
    pub fn moment_rfc3339(&self) -> Option<Rfc3339Timestamp> {
        format_moment(self.moment)
    }

    pub fn to_json(&self) -> Result<String, ExecutionEventError> {
        Ok(sonic_rs::to_string(self)?)
    }
}

fn serialize_document<S>(
    document: &&Document<'static, String>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(document)
}

fn serialize_moment<S>(moment: &SystemTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match format_moment(*moment) {
        Some(formatted) => serializer.collect_str(&formatted),
        None => Err(S::Error::custom(
            "execution moment is outside of the RFC 3339 range",
        )),
    }
}

fn format_moment(moment: SystemTime) -> Option<Rfc3339Timestamp> {
    match moment.duration_since(UNIX_EPOCH) {
        Ok(elapsed) if elapsed < RFC3339_UPPER_BOUND => {
            Some(humantime::format_rfc3339_millis(moment))
        }
        _ => None,
    }
}
