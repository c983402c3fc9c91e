pub mod aggregate;

pub use aggregate::GuestRequest;
