pub mod auth;
pub mod confirmations;
pub mod reports;
