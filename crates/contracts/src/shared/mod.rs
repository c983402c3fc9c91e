pub mod config;
pub mod crud;
pub mod serde_utils;
