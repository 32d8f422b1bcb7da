mod confirmation_service;

pub use confirmation_service::{ConfirmationOutcome, ConfirmationService};
