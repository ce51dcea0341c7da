pub use super::booking::Entity as Booking;
pub use super::feedback::Entity as Feedback;
pub use super::feedback_entry::Entity as FeedbackEntry;
pub use super::time_slot::Entity as TimeSlot;
pub use super::workout::Entity as Workout;
pub use super::workout_option::Entity as WorkoutOption;
