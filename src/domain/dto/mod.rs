//! # Data Transfer Objects (DTO) Module

pub mod users;

pub use users::*;
