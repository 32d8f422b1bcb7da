pub mod confirmation_handler;

pub use confirmation_handler::*;
