pub mod room;
pub mod reservation;
pub mod payment;
pub mod repository;

pub use room::{Room, RoomCategory, RoomError, RoomRegistry};
pub use reservation::{BookingId, Reservation, ReservationStatus};
pub use payment::PaymentMethod;
pub use repository::{ReservationStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
