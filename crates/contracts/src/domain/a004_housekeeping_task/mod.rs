pub mod aggregate;

pub use aggregate::HousekeepingTask;
