pub mod model;
pub mod store;

pub use model::{Passenger, Route, Ticket};
pub use store::ReservationStore;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReservationError {
    #[error("no ticket found for email: {0}")]
    NotFound(String),
}

pub type ReservationResult<T> = Result<T, ReservationError>;
