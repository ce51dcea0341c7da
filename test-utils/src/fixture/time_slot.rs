//! Time slot fixtures for creating in-memory test data.

use entity::time_slot;

/// Id assigned to fixture time slots built through `entity`.
pub const DEFAULT_ID: i32 = 1;

/// Creates a time slot entity model with the default id.
///
/// # Arguments
/// - `start_time` - Start of the slot as `HH:MM`
/// - `end_time` - End of the slot as `HH:MM`
///
/// # Returns
/// - `time_slot::Model` - In-memory time slot
pub fn entity(start_time: &str, end_time: &str) -> time_slot::Model {
    entity_with_id(DEFAULT_ID, start_time, end_time)
}

/// Creates a time slot entity model with a specific id.
///
/// # Returns
/// - `time_slot::Model` - In-memory time slot
pub fn entity_with_id(id: i32, start_time: &str, end_time: &str) -> time_slot::Model {
    time_slot::Model {
        id,
        start_time: start_time.to_string(),
        end_time: end_time.to_string(),
    }
}
