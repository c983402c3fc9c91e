pub mod aggregate;

pub use aggregate::MaintenanceTicket;
