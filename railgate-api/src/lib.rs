pub mod app_config;
pub mod convert;
pub mod service;

pub use service::TicketGrpc;
