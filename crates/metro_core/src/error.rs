//! Errors raised by graph construction and route search.

use crate::constants::StationId;

/// Errors of the routing core.
///
/// All of them are deterministic: running the same call again on the same
/// input fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// A connection references a station that is missing from the registry
    #[error("connection #{connection} references unknown station {station}")]
    UnknownReference {
        station: StationId,
        connection: usize,
    },

    /// Start or end of a query is not part of the graph
    #[error("station {0} is not part of the network")]
    UnknownStation(StationId),

    /// End cannot be reached from start
    #[error("no path from station {start} to station {end}")]
    NoPath { start: StationId, end: StationId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RouteError::UnknownReference {
            station: 42,
            connection: 3,
        };
        assert_eq!(
            err.to_string(),
            "connection #3 references unknown station 42"
        );

        let err = RouteError::UnknownStation(7);
        assert_eq!(err.to_string(), "station 7 is not part of the network");

        let err = RouteError::NoPath { start: 1, end: 9 };
        assert_eq!(err.to_string(), "no path from station 1 to station 9");
    }
}
