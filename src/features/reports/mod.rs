pub mod dtos;
pub mod handlers;
pub mod models;
pub mod presentation;
pub mod routes;
pub mod services;

pub use services::ReportFeedService;
