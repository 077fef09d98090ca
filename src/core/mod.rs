pub mod add;
pub mod backup;
pub mod del;
pub mod interval;
pub mod log;
pub mod store;
