pub mod manager;
pub mod sequence;
pub mod stats;

pub use manager::{BookingError, BookingManager, BookingRequest, LoadConflict, LoadSummary};
pub use sequence::IdSequence;
pub use stats::HotelStatistics;
