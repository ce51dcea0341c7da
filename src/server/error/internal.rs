use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored time slot bound is not a `HH:MM` wall-clock time.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse time of day '{value}': {source}")]
    InvalidTimeOfDay {
        /// The stored value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: chrono::ParseError,
    },

    /// A stored booking state is not one of the known lifecycle states.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown booking state '{0}' in storage")]
    UnknownBookingState(String),
}
