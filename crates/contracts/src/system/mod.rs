pub mod accounts;
pub mod users;
