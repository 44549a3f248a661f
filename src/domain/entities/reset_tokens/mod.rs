//! Password Reset Token Entity Module

pub mod reset_token;

pub use reset_token::PasswordResetToken;
