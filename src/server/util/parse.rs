use chrono::NaiveTime;

use crate::server::error::{internal::InternalError, AppError};

const MAX_ACTOR_ID_LEN: usize = 64;

/// Parses a stored `HH:MM` wall-clock time
///
/// # Arguments
/// - `value` - The stored time string
///
/// # Returns
/// - `Ok(NaiveTime)` - Successfully parsed time of day
/// - `Err(InternalError::InvalidTimeOfDay)` - Failed to parse the string as `HH:MM`
pub fn parse_time_of_day(value: &str) -> Result<NaiveTime, InternalError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|e| InternalError::InvalidTimeOfDay {
        value: value.to_string(),
        source: e,
    })
}

/// Validates an actor id issued by the auth service
///
/// A valid id is 1 to 64 characters of ASCII letters, digits, `-` or `_`.
///
/// # Arguments
/// - `field` - Name of the field for the error message
/// - `value` - The id to validate
///
/// # Returns
/// - `Ok(())` - The id is well formed
/// - `Err(AppError::BadRequest)` - The id is empty, too long or contains other characters
pub fn validate_actor_id(field: &str, value: &str) -> Result<(), AppError> {
    let valid = !value.is_empty()
        && value.len() <= MAX_ACTOR_ID_LEN
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if !valid {
        return Err(AppError::BadRequest(format!(
            "Invalid {}: expected 1-{} letters, digits, '-' or '_'",
            field, MAX_ACTOR_ID_LEN
        )));
    }

    Ok(())
}
