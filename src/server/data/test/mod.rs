mod booking;
mod feedback;
mod time_slot;
mod workout;
