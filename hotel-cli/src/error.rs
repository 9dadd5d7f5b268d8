use std::io;

/// Problems at the interactive boundary. Everything except `Io` and `Eof`
/// is reported to the user and the session returns to the menu.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Name required.")]
    BlankName,

    #[error("Booking ID required.")]
    BlankBookingId,

    #[error("Invalid room number: {0}")]
    InvalidNumber(String),

    #[error("Invalid date: {0}. Use yyyy-MM-dd (e.g. 2025-12-25)")]
    InvalidDate(String),

    #[error("input closed")]
    Eof,

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl InputError {
    /// Whether the session can carry on after reporting this error
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, InputError::Eof | InputError::Io(_))
    }
}
