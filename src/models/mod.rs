pub mod booking;
pub mod view;
