pub mod feedback_window;
